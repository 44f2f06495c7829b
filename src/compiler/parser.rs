//! Recursive descent parser for ToyC.
//!
//! Grammar (low to high expression precedence):
//!
//! ```text
//! CompUnit -> FuncDef+
//! FuncDef  -> ("int" | "void") ID "(" (Param ("," Param)*)? ")" Block
//! Block    -> "{" Stmt* "}"
//! Stmt     -> VarDecl | If | While | Break | Continue | Return
//!           | Assign | ExprStmt | Block
//! Expr     -> LOr ; LOr -> LAnd ; LAnd -> Rel ; Rel -> Add ; Add -> Mul
//! Mul      -> Unary ; Unary -> Primary
//! ```

use anyhow::{Result, bail};

use crate::compiler::ast::{BinaryOp, Block, Expr, FuncDef, Program, RetType, Stmt, UnaryOp};
use crate::compiler::token::{Token, TokenKind};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, current: 0 }
    }

    /// Parses the whole token stream into a program.
    pub fn parse(mut self) -> Result<Program> {
        let mut functions = Vec::new();
        while !self.check(TokenKind::Eof) && self.current < self.tokens.len() {
            functions.push(self.parse_func_def()?);
        }
        Ok(Program { functions })
    }

    // Utility functions / 工具函数

    fn peek(&self) -> Result<&Token> {
        self.tokens
            .get(self.current)
            .ok_or_else(|| anyhow::anyhow!("Unexpected EOF"))
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.current)
            .is_some_and(|token| token.kind == kind)
    }

    fn matches(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.current += 1;
            return true;
        }
        false
    }

    fn expect(&mut self, kind: TokenKind, err_msg: &str) -> Result<()> {
        if self.matches(kind) {
            return Ok(());
        }
        bail!("{}", err_msg)
    }

    /// The lexeme of the most recently consumed token.
    fn prev_lexeme(&self) -> String {
        self.tokens[self.current - 1].lexeme.clone()
    }

    // FuncDef -> ("int" | "void") ID "(" (Param ("," Param)*)? ")" Block
    fn parse_func_def(&mut self) -> Result<FuncDef> {
        let ret_type = if self.matches(TokenKind::Int) {
            RetType::Int
        } else if self.matches(TokenKind::Void) {
            RetType::Void
        } else {
            bail!("Expected 'int' or 'void' at function definition");
        };

        if !self.matches(TokenKind::Identifier) {
            bail!("Expected function name");
        }
        let name = self.prev_lexeme();

        self.expect(TokenKind::LParen, "Expected '(' after function name")?;

        let mut params = Vec::new();
        if !self.matches(TokenKind::RParen) {
            loop {
                self.expect(TokenKind::Int, "Expected parameter type 'int'")?;
                if !self.matches(TokenKind::Identifier) {
                    bail!("Expected parameter name");
                }
                params.push(self.prev_lexeme());
                if !self.matches(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RParen, "Expected ')' after parameter list")?;
        }

        let body = self.parse_block()?;

        Ok(FuncDef {
            ret_type,
            name,
            params,
            body,
        })
    }

    // Block -> "{" Stmt* "}"
    fn parse_block(&mut self) -> Result<Block> {
        self.expect(TokenKind::LBrace, "Expected '{' to start block")?;
        let mut block = Block::default();

        while !self.matches(TokenKind::RBrace) {
            if self.check(TokenKind::Eof) {
                bail!("Expected '}}' to close block");
            }
            block.stmts.push(self.parse_stmt()?);
        }

        Ok(block)
    }

    fn parse_stmt(&mut self) -> Result<Stmt> {
        if self.check(TokenKind::LBrace) {
            return Ok(Stmt::Block(self.parse_block()?));
        }

        match self.peek()?.kind {
            TokenKind::Int => self.parse_var_decl(),
            TokenKind::If => self.parse_if_stmt(),
            TokenKind::While => self.parse_while_stmt(),
            TokenKind::Break => {
                self.matches(TokenKind::Break);
                self.expect(TokenKind::Semicolon, "Expected ';' after break")?;
                Ok(Stmt::Break)
            }
            TokenKind::Continue => {
                self.matches(TokenKind::Continue);
                self.expect(TokenKind::Semicolon, "Expected ';' after continue")?;
                Ok(Stmt::Continue)
            }
            TokenKind::Return => self.parse_return_stmt(),
            _ => self.parse_assign_or_expr_stmt(),
        }
    }

    fn parse_var_decl(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::Int, "Expected 'int' for variable declaration")?;

        if !self.matches(TokenKind::Identifier) {
            bail!("Expected variable name");
        }
        let name = self.prev_lexeme();

        self.expect(TokenKind::Assign, "Expected '=' in variable declaration")?;
        let init = self.parse_expr()?;
        self.expect(TokenKind::Semicolon, "Expected ';' after variable declaration")?;

        Ok(Stmt::VarDecl { name, init })
    }

    fn parse_if_stmt(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::If, "Expected 'if'")?;
        self.expect(TokenKind::LParen, "Expected '(' after if")?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen, "Expected ')' after if condition")?;

        let then_block = self.stmt_as_block()?;

        let else_block = if self.matches(TokenKind::Else) {
            Some(self.stmt_as_block()?)
        } else {
            None
        };

        Ok(Stmt::If {
            cond,
            then_block,
            else_block,
        })
    }

    fn parse_while_stmt(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::While, "Expected 'while'")?;
        self.expect(TokenKind::LParen, "Expected '(' after while")?;
        let cond = self.parse_expr()?;
        self.expect(TokenKind::RParen, "Expected ')' after while condition")?;

        let body = self.stmt_as_block()?;
        Ok(Stmt::While { cond, body })
    }

    /// Parses one statement and wraps a non-block body in a single-statement
    /// block, so `if` and `while` bodies are uniform.
    fn stmt_as_block(&mut self) -> Result<Block> {
        match self.parse_stmt()? {
            Stmt::Block(block) => Ok(block),
            stmt => Ok(Block { stmts: vec![stmt] }),
        }
    }

    fn parse_return_stmt(&mut self) -> Result<Stmt> {
        self.expect(TokenKind::Return, "Expected 'return'")?;
        if self.check(TokenKind::Semicolon) {
            self.expect(TokenKind::Semicolon, "Expected ';' after return")?;
            Ok(Stmt::Return(None))
        } else {
            let expr = self.parse_expr()?;
            self.expect(TokenKind::Semicolon, "Expected ';' after return expression")?;
            Ok(Stmt::Return(Some(expr)))
        }
    }

    fn parse_assign_or_expr_stmt(&mut self) -> Result<Stmt> {
        if self.matches(TokenKind::Identifier) {
            let name = self.prev_lexeme();

            if self.matches(TokenKind::Assign) {
                let value = self.parse_expr()?;
                self.expect(TokenKind::Semicolon, "Expected ';' after assignment")?;
                return Ok(Stmt::Assign { name, value });
            }
            // Not an assignment; back up and parse as an expression.
            // 不是赋值，回退以解析表达式。
            self.current -= 1;
        }

        let expr = self.parse_expr()?;
        self.expect(TokenKind::Semicolon, "Expected ';' after expression")?;
        Ok(Stmt::Expr(expr))
    }

    // Recursive descent expression parsing with precedence.
    // 递归下降表达式解析，支持优先级。

    fn parse_expr(&mut self) -> Result<Expr> {
        self.parse_lor_expr()
    }

    fn parse_lor_expr(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_land_expr()?;
        while self.matches(TokenKind::LogicalOr) {
            let rhs = self.parse_land_expr()?;
            lhs = binary(BinaryOp::Or, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_land_expr(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_rel_expr()?;
        while self.matches(TokenKind::LogicalAnd) {
            let rhs = self.parse_rel_expr()?;
            lhs = binary(BinaryOp::And, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_rel_expr(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_add_expr()?;
        loop {
            let op = if self.matches(TokenKind::Less) {
                BinaryOp::Lt
            } else if self.matches(TokenKind::Greater) {
                BinaryOp::Gt
            } else if self.matches(TokenKind::LessEqual) {
                BinaryOp::Le
            } else if self.matches(TokenKind::GreaterEqual) {
                BinaryOp::Ge
            } else if self.matches(TokenKind::Equal) {
                BinaryOp::Eq
            } else if self.matches(TokenKind::NotEqual) {
                BinaryOp::Ne
            } else {
                break;
            };
            let rhs = self.parse_add_expr()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_add_expr(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_mul_expr()?;
        loop {
            let op = if self.matches(TokenKind::Plus) {
                BinaryOp::Add
            } else if self.matches(TokenKind::Minus) {
                BinaryOp::Sub
            } else {
                break;
            };
            let rhs = self.parse_mul_expr()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_mul_expr(&mut self) -> Result<Expr> {
        let mut lhs = self.parse_unary_expr()?;
        loop {
            let op = if self.matches(TokenKind::Multiply) {
                BinaryOp::Mul
            } else if self.matches(TokenKind::Divide) {
                BinaryOp::Div
            } else if self.matches(TokenKind::Modulo) {
                BinaryOp::Rem
            } else {
                break;
            };
            let rhs = self.parse_unary_expr()?;
            lhs = binary(op, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_unary_expr(&mut self) -> Result<Expr> {
        let op = if self.matches(TokenKind::Plus) {
            Some(UnaryOp::Plus)
        } else if self.matches(TokenKind::Minus) {
            Some(UnaryOp::Neg)
        } else if self.matches(TokenKind::Not) {
            Some(UnaryOp::Not)
        } else {
            None
        };

        match op {
            Some(op) => Ok(Expr::Unary {
                op,
                operand: Box::new(self.parse_unary_expr()?),
            }),
            None => self.parse_primary_expr(),
        }
    }

    fn parse_primary_expr(&mut self) -> Result<Expr> {
        if self.matches(TokenKind::Identifier) {
            let id = self.prev_lexeme();

            if self.matches(TokenKind::LParen) {
                let mut args = Vec::new();
                if !self.matches(TokenKind::RParen) {
                    loop {
                        args.push(self.parse_expr()?);
                        if !self.matches(TokenKind::Comma) {
                            break;
                        }
                    }
                    self.expect(TokenKind::RParen, "Expected ')' after function call arguments")?;
                }
                return Ok(Expr::Call { callee: id, args });
            }

            return Ok(Expr::Var(id));
        }

        if self.matches(TokenKind::Number) {
            let lexeme = self.prev_lexeme();
            let value: i32 = lexeme
                .parse()
                .map_err(|_| anyhow::anyhow!("Invalid integer literal '{}'", lexeme))?;
            return Ok(Expr::Number(value));
        }

        if self.matches(TokenKind::LParen) {
            let expr = self.parse_expr()?;
            self.expect(TokenKind::RParen, "Expected ')' after expression")?;
            return Ok(expr);
        }

        bail!("Expected primary expression")
    }
}

fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op,
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    }
}
