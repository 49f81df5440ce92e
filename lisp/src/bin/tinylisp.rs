use tinylisp::{Interpreter, Value};
use tracing_subscriber::EnvFilter;

struct Config {
    verbose: bool,
    expr: Vec<String>,
}

impl Config {
    fn from_args() -> Config {
        let (flags, expr): (Vec<String>, Vec<String>) = std::env::args()
            .skip(1)
            .partition(|arg| arg == "-v" || arg == "--verbose");
        Config { verbose: !flags.is_empty(), expr }
    }
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over the --verbose default
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_result(result: Option<Value>) {
    if let Some(value) = result {
        println!("{}", value);
    }
}

// Tracks `#| ... |#` block comments spanning several input lines.
#[derive(Default)]
struct CommentState {
    depth: usize,
}

impl CommentState {
    // true when the line carries no code
    fn skip(&mut self, line: &str) -> bool {
        let line = line.trim();
        if line.starts_with("#|") {
            self.depth += 1;
            return true;
        }
        if self.depth > 0 {
            if line.starts_with("|#") {
                self.depth -= 1;
            }
            return true;
        }
        line.is_empty() || line.starts_with(';')
    }
}

fn repl(cx: &Interpreter) -> Result<(), String> {
    use rustyline::error::ReadlineError;
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut comments = CommentState::default();
    loop {
        match rl.readline("tinylisp> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) => {
                if comments.skip(&line) {
                    continue;
                }
                let _ = rl.add_history_entry(line.as_str());
                tracing::debug!(input = %line, "executing");
                match cx.parse_and_eval(&line) {
                    Err(e) => println!("ERROR: {}", e),
                    Ok(result) => print_result(result),
                }
            }
        }
    }
}

fn main() -> Result<(), String> {
    let config = Config::from_args();
    init_tracing(config.verbose);
    let cx = Interpreter::new();

    if !config.expr.is_empty() {
        let input = config.expr.join(" ");
        return match cx.parse_and_eval(&input) {
            Ok(result) => {
                print_result(result);
                Ok(())
            }
            Err(e) => Err(e.to_string()),
        };
    }
    repl(&cx)
}
