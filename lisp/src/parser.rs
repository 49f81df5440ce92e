use crate::value::Value;
use lexers::{LispToken, LispTokenizer, Scanner};

#[derive(Clone, PartialEq, Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected closing paren")]
    UnexpectedCParen,
    #[error("unexpected end of input")]
    UnexpectedEOF,
    #[error("trailing input starting at {0:?}")]
    TrailingInput(String),
    #[error("unexpected empty token")]
    EmptyToken,
}

/// Classify a single non-paren token.
pub fn atom(token: &str) -> Result<Value, ParseError> {
    if token.is_empty() {
        return Err(ParseError::EmptyToken);
    }
    if let Ok(i) = token.parse::<i64>() {
        return Ok(Value::Integer(i));
    }
    // f64 also takes "inf", "nan" and friends, keep those as identifiers
    if token.chars().any(|c| c.is_ascii_digit()) {
        if let Ok(f) = token.parse::<f64>() {
            return Ok(Value::Float(f));
        }
    }
    Ok(Value::identifier(token))
}

fn token_text(token: &LispToken) -> String {
    match token {
        LispToken::OParen => "(".to_string(),
        LispToken::CParen => ")".to_string(),
        LispToken::Atom(a) => a.clone(),
    }
}

pub struct Parser;

impl Parser {
    /// Parse exactly one expression, anything left over is an error.
    pub fn parse_str(source: &str) -> Result<Value, ParseError> {
        let mut lex = LispTokenizer::scanner(source);
        let expr = Self::parse(&mut lex)?;
        if let Some(leftover) = lex.next() {
            return Err(ParseError::TrailingInput(token_text(&leftover)));
        }
        tracing::debug!(%expr, "parsed");
        Ok(expr)
    }

    pub fn parse<I>(lex: &mut Scanner<I>) -> Result<Value, ParseError>
    where
        I: Iterator<Item = LispToken>,
    {
        match lex.next() {
            None => Err(ParseError::UnexpectedEOF),
            Some(LispToken::CParen) => Err(ParseError::UnexpectedCParen),
            Some(LispToken::Atom(token)) => atom(&token),
            Some(LispToken::OParen) => {
                let mut list = Vec::new();
                loop {
                    match lex.peek() {
                        None => return Err(ParseError::UnexpectedEOF),
                        Some(LispToken::CParen) => {
                            lex.next(); // get over that CParen
                            return Ok(Value::List(list));
                        }
                        Some(_) => list.push(Self::parse(lex)?),
                    }
                }
            }
        }
    }
}
