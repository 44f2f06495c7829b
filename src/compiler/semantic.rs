//! Scope and declaration checks for ToyC.
//!
//! A stack of lexical scopes tracks declared names. Redeclaring a name in
//! its own scope and using an undeclared identifier are errors. All errors
//! found in one pass are collected and reported together; any error fails
//! the compile.
//!
//! ToyC 的作用域与声明检查。
//! 词法作用域栈跟踪已声明的名字。在同一作用域内重复声明
//! 以及使用未声明的标识符都是错误。一趟中发现的所有错误会被
//! 收集并一并报告；任何错误都会使编译失败。

use anyhow::{Result, bail};
use std::collections::HashSet;

use crate::compiler::ast::{Block, Expr, FuncDef, Program, Stmt};

#[derive(Default)]
pub struct SemanticAnalyzer {
    scopes: Vec<HashSet<String>>,
    errors: Vec<String>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks the whole program. Returns an error carrying every diagnostic
    /// found, one per line, when any check fails.
    pub fn analyze(mut self, program: &Program) -> Result<()> {
        self.enter_scope();
        for func in &program.functions {
            self.analyze_func(func);
        }
        self.exit_scope();

        if self.errors.is_empty() {
            Ok(())
        } else {
            bail!("{}", self.errors.join("\n"))
        }
    }

    fn enter_scope(&mut self) {
        self.scopes.push(HashSet::new());
    }

    fn exit_scope(&mut self) {
        // The analyzer pushes before every block it walks, so the stack
        // cannot underflow here.
        self.scopes.pop();
    }

    fn declare(&mut self, name: &str) -> bool {
        let current = self
            .scopes
            .last_mut()
            .expect("scope stack is never empty while analyzing");
        if !current.insert(name.to_string()) {
            return false;
        }
        true
    }

    fn is_declared(&self, name: &str) -> bool {
        self.scopes.iter().rev().any(|scope| scope.contains(name))
    }

    fn report_error(&mut self, msg: String) {
        self.errors.push(format!("Semantic error: {}", msg));
    }

    fn analyze_func(&mut self, func: &FuncDef) {
        self.enter_scope();
        for param in &func.params {
            if !self.declare(param) {
                self.report_error(format!("Duplicate parameter name: {}", param));
            }
        }
        self.analyze_block(&func.body);
        self.exit_scope();
    }

    fn analyze_block(&mut self, block: &Block) {
        self.enter_scope();
        for stmt in &block.stmts {
            self.analyze_stmt(stmt);
        }
        self.exit_scope();
    }

    fn analyze_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl { name, init } => {
                // The name is visible to its own initializer, as in C.
                // 与 C 相同，名字对其自身的初始化表达式可见。
                if !self.declare(name) {
                    self.report_error(format!("Variable '{}' redeclared in current scope", name));
                }
                self.analyze_expr(init);
            }
            Stmt::Assign { name, value } => {
                if !self.is_declared(name) {
                    self.report_error(format!("Undeclared identifier '{}'", name));
                }
                self.analyze_expr(value);
            }
            Stmt::Expr(expr) => self.analyze_expr(expr),
            Stmt::Return(expr) => {
                if let Some(expr) = expr {
                    self.analyze_expr(expr);
                }
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
            } => {
                self.analyze_expr(cond);
                self.analyze_block(then_block);
                if let Some(else_block) = else_block {
                    self.analyze_block(else_block);
                }
            }
            Stmt::While { cond, body } => {
                self.analyze_expr(cond);
                self.analyze_block(body);
            }
            Stmt::Block(block) => self.analyze_block(block),
            Stmt::Break | Stmt::Continue => {}
        }
    }

    fn analyze_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Var(name) => {
                if !self.is_declared(name) {
                    self.report_error(format!("Undeclared identifier '{}'", name));
                }
            }
            Expr::Number(_) => {}
            Expr::Unary { operand, .. } => self.analyze_expr(operand),
            Expr::Binary { lhs, rhs, .. } => {
                self.analyze_expr(lhs);
                self.analyze_expr(rhs);
            }
            Expr::Call { args, .. } => {
                for arg in args {
                    self.analyze_expr(arg);
                }
            }
        }
    }
}
