use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;

/// Everything captured from one child process run.
/// 从一次子进程运行中捕获的全部内容。
#[derive(Debug)]
pub struct CapturedOutput {
    pub status: std::io::Result<std::process::ExitStatus>,
    pub stdout: String,
    pub stderr: String,
}

/// Spawns a command and captures its stdout and stderr as separate strings.
/// The two streams are read concurrently; the driver compares stdout against
/// the expectation and echoes stderr on failure, so they must not be merged.
///
/// # Arguments
/// * `cmd` - The `tokio::process::Command` to execute.
///
/// 派生一个命令，并将其 stdout 和 stderr 捕获为两个独立的字符串。
/// 两个流被并发读取；驱动用 stdout 与期望值比较，失败时回显 stderr，
/// 因此二者不能合并。
///
/// # Arguments
/// * `cmd` - 要执行的 `tokio::process::Command`。
pub async fn spawn_and_capture(mut cmd: tokio::process::Command) -> CapturedOutput {
    // Configure the command to capture stdout and stderr.
    // 配置命令以捕获 stdout 和 stderr。
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            // If spawning fails, we return the error and empty output.
            // 如果派生失败，我们返回错误和空输出。
            return CapturedOutput {
                status: Err(e),
                stdout: String::new(),
                stderr: String::new(),
            };
        }
    };

    let stdout = match child.stdout.take() {
        Some(stdout) => stdout,
        None => {
            return CapturedOutput {
                status: Err(std::io::Error::other("failed to capture child stdout")),
                stdout: String::new(),
                stderr: String::new(),
            };
        }
    };
    let stderr = match child.stderr.take() {
        Some(stderr) => stderr,
        None => {
            return CapturedOutput {
                status: Err(std::io::Error::other("failed to capture child stderr")),
                stdout: String::new(),
                stderr: String::new(),
            };
        }
    };

    // Read both pipes in parallel so neither can fill up and block the child.
    // 并行读取两个管道，避免任何一个被填满而阻塞子进程。
    let stdout_handle = read_lines(stdout);
    let stderr_handle = read_lines(stderr);

    // Wait for the process to exit.
    // 等待进程退出。
    let status = child.wait().await;

    // Join the reader tasks to ensure all output is captured.
    // 等待读取任务完成，以确保所有输出都被捕获。
    let stdout_text = match stdout_handle.await {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to join stdout task: {}", e);
            String::new()
        }
    };
    let stderr_text = match stderr_handle.await {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Failed to join stderr task: {}", e);
            String::new()
        }
    };

    CapturedOutput {
        status,
        stdout: stdout_text,
        stderr: stderr_text,
    }
}

/// Spawns a task that drains one pipe line by line into a string.
/// 派生一个任务，逐行将一个管道读入字符串。
fn read_lines<R>(pipe: R) -> JoinHandle<String>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let reader = BufReader::new(pipe);
        let mut lines = reader.lines();
        let mut output = String::new();
        while let Ok(Some(line)) = lines.next_line().await {
            output.push_str(&line);
            output.push('\n');
        }
        output
    })
}
