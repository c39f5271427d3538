//! Arithmetic evaluator for numeric time input.
//!
//! Supports decimal literals, `+ - * /`, unary signs and parentheses with the
//! usual precedence. Nothing else is accepted, so text typed into a timestamp
//! field can never do more than compute a number.
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | primary
//! primary := number | '(' expr ')'
//! ```

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{DevUtilsError, Result};

/// Nesting limit for parentheses and unary signs.
const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

/// Evaluate an arithmetic expression.
///
/// Division by zero follows IEEE 754 and yields an infinite or NaN result;
/// callers decide whether a non-finite value is acceptable.
///
/// # Errors
///
/// Returns [`DevUtilsError::Parse`] for empty input, unexpected characters,
/// malformed numbers, unbalanced parentheses, or trailing tokens.
pub fn evaluate(input: &str) -> Result<f64> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(DevUtilsError::Parse("empty expression".to_string()));
    }
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        depth: 0,
    };
    let value = parser.expr()?;
    if let Some(token) = parser.peek() {
        return Err(DevUtilsError::Parse(format!(
            "unexpected {:?} at token {}",
            token, parser.pos
        )));
    }
    Ok(value)
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    while let Some(&c) = chars.peek() {
        let token = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '0'..='9' | '.' => Token::Number(number(&mut chars)?),
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(DevUtilsError::Parse(format!(
                    "unexpected character '{}'",
                    other
                )))
            }
        };
        if !matches!(token, Token::Number(_)) {
            chars.next();
        }
        tokens.push(token);
    }
    Ok(tokens)
}

fn number(chars: &mut Peekable<Chars<'_>>) -> Result<f64> {
    let mut literal = String::new();
    let mut seen_point = false;
    while let Some(&c) = chars.peek() {
        match c {
            '0'..='9' => literal.push(c),
            '.' if !seen_point => {
                seen_point = true;
                literal.push(c);
            }
            '.' => {
                return Err(DevUtilsError::Parse(format!(
                    "malformed number \"{}.\"",
                    literal
                )))
            }
            _ => break,
        }
        chars.next();
    }
    if literal == "." {
        return Err(DevUtilsError::Parse("lone decimal point".to_string()));
    }
    // Rust's float parser accepts "1." and ".5" like the literals users type.
    literal
        .parse::<f64>()
        .map_err(|e| DevUtilsError::Parse(format!("malformed number \"{}\": {}", literal, e)))
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(DevUtilsError::Parse("expression nested too deeply".to_string()));
        }
        Ok(())
    }

    fn expr(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == Token::Plus { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.unary()?;
        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = if op == Token::Star { value * rhs } else { value / rhs };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64> {
        match self.peek() {
            Some(Token::Plus) => {
                self.pos += 1;
                self.enter()?;
                let value = self.unary();
                self.depth -= 1;
                value
            }
            Some(Token::Minus) => {
                self.pos += 1;
                self.enter()?;
                let value = self.unary().map(|v| -v);
                self.depth -= 1;
                value
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> Result<f64> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::LParen) => {
                self.enter()?;
                let value = self.expr()?;
                self.depth -= 1;
                match self.next() {
                    Some(Token::RParen) => Ok(value),
                    _ => Err(DevUtilsError::Parse("missing ')'".to_string())),
                }
            }
            Some(token) => Err(DevUtilsError::Parse(format!(
                "unexpected {:?} at token {}",
                token,
                self.pos - 1
            ))),
            None => Err(DevUtilsError::Parse("unexpected end of expression".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals() {
        assert_eq!(evaluate("1704067200").unwrap(), 1704067200.0);
        assert_eq!(evaluate("1.5").unwrap(), 1.5);
        assert_eq!(evaluate(".5").unwrap(), 0.5);
        assert_eq!(evaluate("2.").unwrap(), 2.0);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate("60*60*24").unwrap(), 86400.0);
        assert_eq!(evaluate("1 + 2 * 3").unwrap(), 7.0);
        assert_eq!(evaluate("(1 + 2) * 3").unwrap(), 9.0);
        assert_eq!(evaluate("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(evaluate("100 / 10 / 2").unwrap(), 5.0);
    }

    #[test]
    fn test_unary_signs() {
        assert_eq!(evaluate("-5").unwrap(), -5.0);
        assert_eq!(evaluate("2 * -3").unwrap(), -6.0);
        assert_eq!(evaluate("--4").unwrap(), 4.0);
        assert_eq!(evaluate("+(1)").unwrap(), 1.0);
    }

    #[test]
    fn test_division_by_zero_is_not_finite() {
        assert!(evaluate("1/0").unwrap().is_infinite());
        assert!(evaluate("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in ["", "   ", "1 +", "(1", "1)", "1 2", "1..2", ".", "*3", "2**3", "abc", "1e5"] {
            assert!(
                matches!(evaluate(input), Err(DevUtilsError::Parse(_))),
                "{:?} should not evaluate",
                input
            );
        }
    }

    #[test]
    fn test_rejects_code() {
        assert!(evaluate("alert(1)").is_err());
        assert!(evaluate("Date.now()").is_err());
    }

    #[test]
    fn test_depth_limit() {
        let deep = format!("{}1{}", "(".repeat(100), ")".repeat(100));
        assert!(evaluate(&deep).is_err());
        let ok = format!("{}1{}", "(".repeat(10), ")".repeat(10));
        assert_eq!(evaluate(&ok).unwrap(), 1.0);
    }
}
