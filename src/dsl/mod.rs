//! Parser for human-written linear equations.
//!
//! Equations are free-form algebraic text. Whitespace is insignificant and
//! every equation has exactly one `=`.
//!
//! # Grammar Overview
//!
//! ```text
//! equation   = side '=' side
//! side       = [sign] term { sign term }
//! term       = factor { ['*'] factor }
//! factor     = number | variable | '(' side ')'
//! sign       = '+' | '-'
//!
//! number     = decimal { '/' decimal }
//! decimal    = digit+ [('.' | ',') digit*] | ('.' | ',') digit+
//! variable   = letter { letter | digit }
//! ```
//!
//! A term may name at most one variable; `x(y + 1)` is rejected because it
//! is not linear. A `-` before a group negates everything inside it,
//! recursively.
//!
//! # Example
//!
//! ```text
//! 4x - 5y + (3z - y) = 4 * 4.5/2
//! 2 * 1.5x - 3y + 8z = 22 + 2y
//! 5x - 2(5/2 - 2y + 3.5z) = 20
//! ```

mod ast;
mod lexer;
mod parser;

pub use ast::*;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::Parser;

use crate::error::Result;

/// Parse one equation. `index` is its 1-based position, used in errors.
pub fn parse_equation(input: &str, index: usize) -> Result<EquationAst> {
    let lexer = Lexer::new(input, index);
    let mut parser = Parser::new(lexer)?;
    parser.parse_equation()
}

/// Parse one side of an equation (no `=` allowed).
pub fn parse_expression(input: &str) -> Result<LinearForm> {
    let lexer = Lexer::new(input, 1);
    let mut parser = Parser::new(lexer)?;
    parser.parse_expression()
}

/// Read a file holding one equation per line.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> Result<SystemInput> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::error::EqsysError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(SystemInput::from_text(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::int;

    #[test]
    fn test_parse_equation_reports_index() {
        let err = parse_equation("x + 1", 4).unwrap_err();
        match err {
            crate::error::EqsysError::SyntaxError { equation, .. } => assert_eq!(equation, 4),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_expression() {
        let form = parse_expression("5 - (7var2 + 3)").unwrap();
        assert_eq!(form.coefficient("var2"), int(-7));
        assert_eq!(form.constant(), &int(2));
        assert!(parse_expression("x = 1").is_err());
    }
}
