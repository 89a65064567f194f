//! Parser for equation text.
//!
//! Each side of an equation is read in a single left-to-right pass. A stack
//! of multipliers tracks parenthesised groups: `(` pushes the running term,
//! `)` pops it, and a sign restarts the running term from the enclosing
//! multiplier. Numbers scale the running term and a variable name names it.

use num_traits::One;

use super::ast::{EquationAst, LinearForm};
use super::lexer::{Lexer, Token, TokenKind};
use crate::error::{EqsysError, Result};
use crate::number::{parse_literal, Rational};

/// Parser for a single equation.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

/// A product of numeric factors, optionally attached to one unknown.
#[derive(Debug, Clone)]
struct Term {
    scale: Rational,
    variable: Option<String>,
}

impl Term {
    fn unit() -> Self {
        Self {
            scale: Rational::one(),
            variable: None,
        }
    }

    fn negated(&self) -> Self {
        Self {
            scale: -self.scale.clone(),
            variable: self.variable.clone(),
        }
    }
}

/// What the previous token was, for operator placement checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Sign,
    Star,
    Operand,
    Open,
    Close,
}

/// Nesting stack for one side of an equation.
struct SignStack {
    /// Multiplier of every open group, with the column of its `(`
    levels: Vec<(Term, usize)>,
    current: Term,
    pending: bool,
    form: LinearForm,
}

impl SignStack {
    fn new() -> Self {
        Self {
            levels: vec![(Term::unit(), 0)],
            current: Term::unit(),
            pending: false,
            form: LinearForm::new(),
        }
    }

    fn enclosing(&self) -> &Term {
        // The base level is never popped.
        &self.levels[self.levels.len() - 1].0
    }

    fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Store the running term if anything was scanned since the last store.
    fn flush(&mut self) {
        if !self.pending {
            return;
        }
        let scale = self.current.scale.clone();
        match &self.current.variable {
            Some(name) => self.form.add_term(name, scale),
            None => self.form.add_constant(scale),
        }
        self.pending = false;
    }

    fn restart(&mut self, negative: bool) {
        let base = self.enclosing();
        self.current = if negative { base.negated() } else { base.clone() };
    }

    fn open(&mut self, column: usize) {
        self.levels.push((self.current.clone(), column));
        self.pending = false;
    }

    fn close(&mut self) -> bool {
        if self.depth() == 0 {
            return false;
        }
        self.levels.pop();
        self.restart(false);
        true
    }
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse `lhs = rhs`.
    pub fn parse_equation(&mut self) -> Result<EquationAst> {
        let lhs = self.parse_side()?;
        if self.current.kind != TokenKind::Equals {
            return Err(self.error("missing '='"));
        }
        self.advance()?;

        let rhs = self.parse_side()?;
        if self.current.kind == TokenKind::Equals {
            return Err(self.error("more than one '='"));
        }

        Ok(EquationAst { lhs, rhs })
    }

    /// Parse a lone expression with no `=`.
    pub fn parse_expression(&mut self) -> Result<LinearForm> {
        let form = self.parse_side()?;
        if self.current.kind != TokenKind::Eof {
            return Err(self.error(format!("unexpected '{}'", self.current.text)));
        }
        Ok(form)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> EqsysError {
        EqsysError::syntax(self.lexer.equation(), self.current.column, message)
    }

    /// Parse tokens up to the next `=` or the end of input.
    fn parse_side(&mut self) -> Result<LinearForm> {
        let mut stack = SignStack::new();
        let mut prev = Prev::Start;

        loop {
            match self.current.kind {
                TokenKind::Plus | TokenKind::Minus => {
                    if matches!(prev, Prev::Sign | Prev::Star) {
                        return Err(self.error(format!("unexpected '{}'", self.current.text)));
                    }
                    stack.flush();
                    stack.restart(self.current.kind == TokenKind::Minus);
                    prev = Prev::Sign;
                }
                TokenKind::Number => {
                    if prev == Prev::Close {
                        return Err(self.error("expected an operator after ')'"));
                    }
                    let value = parse_literal(&self.current.text).ok_or_else(|| {
                        self.error(format!("invalid number literal '{}'", self.current.text))
                    })?;
                    stack.current.scale *= value;
                    stack.pending = true;
                    prev = Prev::Operand;
                }
                TokenKind::Identifier => {
                    if prev == Prev::Close {
                        return Err(self.error("expected an operator after ')'"));
                    }
                    if let Some(existing) = &stack.current.variable {
                        return Err(self.error(format!(
                            "product of unknowns '{}' and '{}' is not linear",
                            existing, self.current.text
                        )));
                    }
                    stack.current.variable = Some(self.current.text.clone());
                    stack.pending = true;
                    prev = Prev::Operand;
                }
                TokenKind::Star => {
                    if prev != Prev::Operand {
                        return Err(self.error("'*' must follow a number or a variable"));
                    }
                    prev = Prev::Star;
                }
                TokenKind::OpenParen => {
                    if prev == Prev::Close {
                        return Err(self.error("expected an operator after ')'"));
                    }
                    stack.open(self.current.column);
                    prev = Prev::Open;
                }
                TokenKind::CloseParen => {
                    if matches!(prev, Prev::Sign | Prev::Star | Prev::Open | Prev::Start) {
                        return Err(self.error("expected a term before ')'"));
                    }
                    stack.flush();
                    if !stack.close() {
                        return Err(self.error("unbalanced ')'"));
                    }
                    prev = Prev::Close;
                }
                TokenKind::Equals | TokenKind::Eof => {
                    match prev {
                        Prev::Start => return Err(self.error("missing expression")),
                        Prev::Sign | Prev::Star | Prev::Open => {
                            return Err(self.error("expression ends with an operator"))
                        }
                        Prev::Operand | Prev::Close => {}
                    }
                    if stack.depth() > 0 {
                        let column = stack.levels[stack.levels.len() - 1].1;
                        return Err(EqsysError::syntax(
                            self.lexer.equation(),
                            column,
                            "unclosed '('",
                        ));
                    }
                    stack.flush();
                    return Ok(stack.form);
                }
            }
            self.advance()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::{int, ratio};
    use num_traits::Zero;

    fn expression(input: &str) -> LinearForm {
        Parser::new(Lexer::new(input, 1))
            .unwrap()
            .parse_expression()
            .unwrap()
    }

    fn syntax_error(input: &str) -> (usize, String) {
        let result = Parser::new(Lexer::new(input, 1)).and_then(|mut p| p.parse_equation());
        match result {
            Err(EqsysError::SyntaxError {
                column, message, ..
            }) => (column, message),
            other => panic!("expected syntax error for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_terms() {
        let form = expression("4x - 5y + 3z - y");
        assert_eq!(form.coefficient("x"), int(4));
        assert_eq!(form.coefficient("y"), int(-6));
        assert_eq!(form.coefficient("z"), int(3));
        assert!(form.constant().is_zero());
    }

    #[test]
    fn test_parse_leading_sign_and_constants() {
        let form = expression("-x + 3 - 1/2");
        assert_eq!(form.coefficient("x"), int(-1));
        assert_eq!(form.constant(), &ratio(5, 2));
    }

    #[test]
    fn test_parse_nested_parentheses() {
        let form = expression("(x + 2 - (5 + y))");
        assert_eq!(form.coefficient("x"), int(1));
        assert_eq!(form.coefficient("y"), int(-1));
        assert_eq!(form.constant(), &int(-3));

        let form = expression("5 - (2x - x)");
        assert_eq!(form.coefficient("x"), int(-1));
        assert_eq!(form.constant(), &int(5));
    }

    #[test]
    fn test_parse_scaled_group() {
        let form = expression("0 + 3(7*x - 2)");
        assert_eq!(form.coefficient("x"), int(21));
        assert_eq!(form.constant(), &int(-6));

        let form = expression("-2(x - 3(y + 1))");
        assert_eq!(form.coefficient("x"), int(-2));
        assert_eq!(form.coefficient("y"), int(6));
        assert_eq!(form.constant(), &int(6));
    }

    #[test]
    fn test_parse_explicit_multiplication() {
        let form = expression("2 * 4");
        assert_eq!(form.constant(), &int(8));

        let form = expression("x * 2 + 1.5/3.0");
        assert_eq!(form.coefficient("x"), int(2));
        assert_eq!(form.constant(), &ratio(1, 2));
    }

    #[test]
    fn test_parse_fraction_coefficient() {
        let form = expression("1/2a + 3/4");
        assert_eq!(form.coefficient("a"), ratio(1, 2));
        assert_eq!(form.constant(), &ratio(3, 4));
    }

    #[test]
    fn test_parse_equation_sides() {
        let ast = Parser::new(Lexer::new("4 + a = 2a", 1))
            .unwrap()
            .parse_equation()
            .unwrap();
        assert_eq!(ast.lhs.coefficient("a"), int(1));
        assert_eq!(ast.lhs.constant(), &int(4));
        assert_eq!(ast.rhs.coefficient("a"), int(2));
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(syntax_error("x + y").1, "missing '='");
        assert_eq!(syntax_error("x = y = 1").1, "more than one '='");
        assert_eq!(syntax_error("= 1").1, "missing expression");
        assert_eq!(syntax_error("x + = 1").1, "expression ends with an operator");
        assert_eq!(syntax_error("x + - y = 1").1, "unexpected '-'");
        assert_eq!(syntax_error("x) = 1").1, "unbalanced ')'");
        assert_eq!(syntax_error("(x = 1"), (1, "unclosed '('".to_string()));
        assert_eq!(syntax_error("() = 1").1, "expected a term before ')'");
        assert_eq!(syntax_error("(x + 1)2 = 1").1, "expected an operator after ')'");
        assert_eq!(syntax_error("1/0x = 1").1, "invalid number literal '1/0'");
        assert_eq!(
            syntax_error("x(y + 1) = 1").1,
            "product of unknowns 'x' and 'y' is not linear"
        );
        assert_eq!(syntax_error("* x = 1").1, "'*' must follow a number or a variable");
    }
}
