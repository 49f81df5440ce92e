#![deny(warnings)]

use crate::scanner::Scanner;

#[derive(Clone, PartialEq, Debug)]
pub enum LispToken {
    OParen,
    CParen,
    Atom(String),
}

/// Splits source into parens and whitespace-delimited atoms.
/// Parens are always standalone tokens, `(+ 1 2)` and `( + 1 2 )` yield
/// the same stream.
pub struct LispTokenizer<I: Iterator<Item = char>>(Scanner<I>);

impl<I: Iterator<Item = char>> LispTokenizer<I> {
    pub fn new(source: I) -> Self {
        LispTokenizer(Scanner::new(source))
    }
}

impl<'a> LispTokenizer<std::str::Chars<'a>> {
    pub fn scanner(source: &'a str) -> Scanner<Self> {
        Scanner::new(LispTokenizer::new(source.chars()))
    }
}

fn is_delimiter(c: &char) -> bool {
    c.is_whitespace() || *c == '(' || *c == ')'
}

impl<I: Iterator<Item = char>> Iterator for LispTokenizer<I> {
    type Item = LispToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.ignore_ws();
        if let Some(paren) = self.0.accept_any_char("()") {
            self.0.ignore();
            return match paren {
                '(' => Some(LispToken::OParen),
                _ => Some(LispToken::CParen),
            };
        }
        if self.0.until(is_delimiter) {
            // or til EOF
            return Some(LispToken::Atom(self.0.extract_string()));
        }
        None
    }
}

///////////////////////////////////////////////////////////////////////////////
