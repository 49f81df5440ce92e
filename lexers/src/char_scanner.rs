#![deny(warnings)]

use crate::scanner::Scanner;

impl<I: Iterator<Item = char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn accept_any_char(&mut self, any: &str) -> Option<char> {
        self.accept_if(|c| any.contains(*c))
    }

    // skips unicode whitespace, returns whether any was found
    pub fn skip_ws(&mut self) -> bool {
        self.skip_while(|c| c.is_whitespace())
    }

    // skip whitespace and start a fresh view after it
    pub fn ignore_ws(&mut self) {
        self.skip_ws();
        self.ignore();
    }
}
