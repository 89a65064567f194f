//! Text and markup rendering of symbolic values.

use num_traits::{One, Zero};

use super::SymbolicValue;
use crate::dsl::Symbol;
use crate::number::{format_decimal, format_rational, Rational, DEFAULT_PRECISION};

/// How numbers are written in rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Notation {
    /// Exact fractions: `29/20`
    #[default]
    Rational,
    /// Decimals rounded to `precision` digits: `1.45`
    Decimal { precision: usize },
}

impl Notation {
    /// Decimal notation with the default precision.
    pub fn decimal() -> Self {
        Notation::Decimal {
            precision: DEFAULT_PRECISION,
        }
    }

    fn format(&self, number: &Rational) -> String {
        match self {
            Notation::Rational => format_rational(number),
            Notation::Decimal { precision } => format_decimal(number, *precision),
        }
    }
}

/// Render `name = expression`.
pub fn render(value: &SymbolicValue, notation: Notation) -> String {
    format!("{} = {}", value.name(), render_expression(value, notation))
}

/// Render the right-hand side: constant first, then free variables by name.
///
/// Coefficients of 1 and -1 collapse to the bare symbol, zero terms are
/// skipped, and a value with no remaining terms renders as `0`.
pub fn render_expression(value: &SymbolicValue, notation: Notation) -> String {
    let rounded;
    let value = match notation {
        Notation::Rational => value,
        Notation::Decimal { precision } => {
            rounded = value.rounded(precision);
            &rounded
        }
    };

    let pieces: Vec<String> = value
        .terms()
        .iter()
        .filter(|(_, coefficient)| !coefficient.is_zero())
        .map(|(symbol, coefficient)| match symbol {
            Symbol::Constant => notation.format(coefficient),
            Symbol::Variable(name) if coefficient.is_one() => name.clone(),
            Symbol::Variable(name) if (-coefficient).is_one() => format!("-{name}"),
            Symbol::Variable(name) => format!("{}{}", notation.format(coefficient), name),
        })
        .collect();

    if pieces.is_empty() {
        return "0".to_string();
    }
    pieces.join(" + ").replace("+ -", "- ")
}

/// Convert rendered text into HTML.
///
/// Variable names are wrapped in `<var>`, fractions become numerator and
/// denominator spans, and `-` becomes `&minus;`.
pub fn to_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            _ if ch.is_ascii_alphabetic() => {
                let mut name = ch.to_string();
                while let Some(&c) = chars.peek().filter(|c| c.is_ascii_alphanumeric()) {
                    name.push(c);
                    chars.next();
                }
                out.push_str("<var>");
                out.push_str(&name);
                out.push_str("</var>");
            }
            _ if ch.is_ascii_digit() => {
                let mut numerator = ch.to_string();
                while let Some(&c) = chars.peek().filter(|c| c.is_ascii_digit() || **c == '.') {
                    numerator.push(c);
                    chars.next();
                }
                if chars.peek() == Some(&'/') {
                    chars.next();
                    let mut denominator = String::new();
                    while let Some(&c) = chars.peek().filter(|c| c.is_ascii_digit()) {
                        denominator.push(c);
                        chars.next();
                    }
                    out.push_str(&format!(
                        "<span class=\"fraction\"><span class=\"numerator\">{numerator}</span>\
                         <span class=\"divider\">/</span>\
                         <span class=\"denominator\">{denominator}</span></span>"
                    ));
                } else {
                    out.push_str(&numerator);
                }
            }
            '-' => out.push_str("&minus;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}
