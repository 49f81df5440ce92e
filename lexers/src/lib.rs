mod char_scanner;
mod lisp_tokenizer;
mod scanner;

pub use lisp_tokenizer::{LispToken, LispTokenizer};
pub use scanner::Scanner;
