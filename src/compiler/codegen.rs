//! RISC-V style assembly text emission for ToyC.
//!
//! Every function gets a `name:` label and a fixed 128-byte stack frame:
//! `addi sp, sp, -128` on entry, `addi sp, sp, 128` + `ret` on exit (the
//! epilogue is also emitted at every `return`). Parameters and locals live
//! in 4-byte slots allocated upward from the frame base; expression
//! temporaries spill to slots taken downward from the frame top, so `sp`
//! never moves between prologue and epilogue and slot offsets stay valid
//! mid-expression. The two regions must not meet: a function whose locals
//! plus live temporaries need more than 32 slots fails the compile with a
//! diagnostic instead of emitting self-clobbering stores. Labels come from
//! a single per-run counter.
//!
//! The reference output for an empty `main` is exactly:
//!
//! ```text
//! main:
//! 	addi sp, sp, -128
//! 	addi sp, sp, 128
//! 	ret
//! ```
//!
//! ToyC 的 RISC-V 风格汇编文本生成。
//! 每个函数有一个 `name:` 标签和固定的 128 字节栈帧。
//! 参数与局部变量从帧底向上分配 4 字节槽位；表达式临时值
//! 从帧顶向下溢出到槽位，因此 `sp` 在序言和尾声之间不移动。
//! 两个区域不允许相遇：槽位耗尽会使编译失败并给出诊断。

use anyhow::Result;
use std::collections::HashMap;

use crate::compiler::ast::{BinaryOp, Block, Expr, FuncDef, Program, Stmt, UnaryOp};

/// Fixed per-function stack frame size in bytes.
const FRAME_SIZE: i32 = 128;

#[derive(Default)]
pub struct CodeGen {
    out: String,
    label_count: usize,
    func_name: String,
    local_offsets: HashMap<String, i32>,
    next_local: i32,
    spill_depth: i32,
    break_labels: Vec<String>,
    continue_labels: Vec<String>,
}

impl CodeGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates assembly text for every function, in source order.
    pub fn generate(mut self, program: &Program) -> Result<String> {
        for func in &program.functions {
            self.gen_func(func)?;
        }
        Ok(self.out)
    }

    /// Emits one tab-indented line (instructions and in-function labels).
    fn emit(&mut self, code: &str) {
        self.out.push('\t');
        self.out.push_str(code);
        self.out.push('\n');
    }

    fn new_label(&mut self, base: &str) -> String {
        let label = format!("{}_{}", base, self.label_count);
        self.label_count += 1;
        label
    }

    fn frame_exhausted(&self) -> anyhow::Error {
        anyhow::anyhow!(
            "Codegen error: stack frame exhausted in function '{}'",
            self.func_name
        )
    }

    /// Allocates the next 4-byte local slot and binds `name` to it.
    /// A rebind shadows the previous slot for the rest of the function.
    /// Fails when the slot would reach into the spill region.
    fn alloc_local(&mut self, name: &str) -> Result<i32> {
        let offset = self.next_local;
        if offset + 4 > FRAME_SIZE - self.spill_depth * 4 {
            return Err(self.frame_exhausted());
        }
        self.next_local += 4;
        self.local_offsets.insert(name.to_string(), offset);
        Ok(offset)
    }

    fn local_slot(&mut self, name: &str) -> Result<i32> {
        match self.local_offsets.get(name) {
            Some(&offset) => Ok(offset),
            None => self.alloc_local(name),
        }
    }

    /// Reserves one spill slot from the top of the frame.
    /// Fails when the slot would reach into the local region.
    fn spill_push(&mut self) -> Result<i32> {
        let offset = FRAME_SIZE - 4 - self.spill_depth * 4;
        if offset < self.next_local {
            return Err(self.frame_exhausted());
        }
        self.spill_depth += 1;
        Ok(offset)
    }

    fn spill_pop(&mut self) {
        self.spill_depth -= 1;
    }

    fn gen_func(&mut self, func: &FuncDef) -> Result<()> {
        self.func_name = func.name.clone();
        self.local_offsets.clear();
        self.next_local = 0;
        self.spill_depth = 0;

        self.out.push_str(&func.name);
        self.out.push_str(":\n");

        self.emit(&format!("addi sp, sp, -{}", FRAME_SIZE));

        // Incoming arguments are stored into their slots.
        // 入参被保存到各自的槽位。
        for (i, param) in func.params.iter().enumerate() {
            let offset = self.alloc_local(param)?;
            self.emit(&format!("sw a{}, {}(sp)", i, offset));
        }

        self.gen_block(&func.body)?;

        self.emit(&format!("addi sp, sp, {}", FRAME_SIZE));
        self.emit("ret");
        Ok(())
    }

    fn gen_block(&mut self, block: &Block) -> Result<()> {
        for stmt in &block.stmts {
            self.gen_stmt(stmt)?;
        }
        Ok(())
    }

    fn gen_stmt(&mut self, stmt: &Stmt) -> Result<()> {
        match stmt {
            Stmt::VarDecl { name, init } => {
                let offset = self.alloc_local(name)?;
                self.gen_expr(init)?;
                self.emit(&format!("sw a0, {}(sp)", offset));
            }
            Stmt::Assign { name, value } => {
                let offset = self.local_slot(name)?;
                self.gen_expr(value)?;
                self.emit(&format!("sw a0, {}(sp)", offset));
            }
            Stmt::Expr(expr) => {
                self.gen_expr(expr)?;
            }
            Stmt::Return(expr) => {
                if let Some(expr) = expr {
                    self.gen_expr(expr)?;
                }
                self.emit(&format!("addi sp, sp, {}", FRAME_SIZE));
                self.emit("ret");
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
            } => {
                let else_label = self.new_label("else");
                let end_label = self.new_label("endif");

                self.gen_expr(cond)?;
                self.emit(&format!("beqz a0, {}", else_label));
                self.gen_block(then_block)?;
                self.emit(&format!("j {}", end_label));
                self.emit(&format!("{}:", else_label));
                if let Some(else_block) = else_block {
                    self.gen_block(else_block)?;
                }
                self.emit(&format!("{}:", end_label));
            }
            Stmt::While { cond, body } => {
                let loop_label = self.new_label("loop");
                let end_label = self.new_label("endloop");

                self.emit(&format!("{}:", loop_label));
                self.gen_expr(cond)?;
                self.emit(&format!("beqz a0, {}", end_label));

                self.continue_labels.push(loop_label.clone());
                self.break_labels.push(end_label.clone());
                self.gen_block(body)?;
                self.break_labels.pop();
                self.continue_labels.pop();

                self.emit(&format!("j {}", loop_label));
                self.emit(&format!("{}:", end_label));
            }
            Stmt::Break => {
                if let Some(label) = self.break_labels.last().cloned() {
                    self.emit(&format!("j {}", label));
                }
            }
            Stmt::Continue => {
                if let Some(label) = self.continue_labels.last().cloned() {
                    self.emit(&format!("j {}", label));
                }
            }
            Stmt::Block(block) => self.gen_block(block)?,
        }
        Ok(())
    }

    /// Generates code leaving the expression's value in `a0`.
    fn gen_expr(&mut self, expr: &Expr) -> Result<()> {
        match expr {
            Expr::Number(value) => {
                self.emit(&format!("li a0, {}", value));
            }
            Expr::Var(name) => {
                let offset = self.local_slot(name)?;
                self.emit(&format!("lw a0, {}(sp)", offset));
            }
            Expr::Unary { op, operand } => {
                self.gen_expr(operand)?;
                match op {
                    UnaryOp::Plus => {}
                    UnaryOp::Neg => self.emit("neg a0, a0"),
                    UnaryOp::Not => self.emit("seqz a0, a0"),
                }
            }
            Expr::Binary { op, lhs, rhs } => {
                self.gen_expr(lhs)?;
                let spill = self.spill_push()?;
                self.emit(&format!("sw a0, {}(sp)", spill));
                self.gen_expr(rhs)?;
                self.emit("mv t1, a0");
                self.emit(&format!("lw t0, {}(sp)", spill));
                self.spill_pop();
                self.gen_binary_op(*op);
            }
            Expr::Call { callee, args } => {
                // Evaluate every argument to a spill slot first, then load
                // the argument registers in one sweep, so no later argument
                // can clobber an earlier one.
                // 先将每个实参求值到溢出槽位，再一次性装载参数寄存器，
                // 这样后面的实参不会破坏前面的。
                let mut slots = Vec::with_capacity(args.len());
                for arg in args {
                    self.gen_expr(arg)?;
                    let spill = self.spill_push()?;
                    self.emit(&format!("sw a0, {}(sp)", spill));
                    slots.push(spill);
                }
                for (i, slot) in slots.iter().enumerate() {
                    self.emit(&format!("lw a{}, {}(sp)", i, slot));
                }
                for _ in &slots {
                    self.spill_pop();
                }
                self.emit(&format!("call {}", callee));
            }
        }
        Ok(())
    }

    /// Combines `t0` (left) and `t1` (right) into `a0`.
    fn gen_binary_op(&mut self, op: BinaryOp) {
        match op {
            BinaryOp::Add => self.emit("add a0, t0, t1"),
            BinaryOp::Sub => self.emit("sub a0, t0, t1"),
            BinaryOp::Mul => self.emit("mul a0, t0, t1"),
            BinaryOp::Div => self.emit("div a0, t0, t1"),
            BinaryOp::Rem => self.emit("rem a0, t0, t1"),
            BinaryOp::Lt => self.emit("slt a0, t0, t1"),
            BinaryOp::Gt => self.emit("sgt a0, t0, t1"),
            BinaryOp::Le => {
                self.emit("sgt a0, t0, t1");
                self.emit("xori a0, a0, 1");
            }
            BinaryOp::Ge => {
                self.emit("slt a0, t0, t1");
                self.emit("xori a0, a0, 1");
            }
            BinaryOp::Eq => {
                self.emit("sub a0, t0, t1");
                self.emit("seqz a0, a0");
            }
            BinaryOp::Ne => {
                self.emit("sub a0, t0, t1");
                self.emit("snez a0, a0");
            }
            BinaryOp::And => {
                self.emit("snez t0, t0");
                self.emit("snez t1, t1");
                self.emit("and a0, t0, t1");
            }
            BinaryOp::Or => {
                self.emit("or a0, t0, t1");
                self.emit("snez a0, a0");
            }
        }
    }
}
