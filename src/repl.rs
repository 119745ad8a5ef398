use crate::evaluator::Evaluator;
use crate::lexer;
use crate::value::Value;
use std::io::{self, BufRead, Write};

/// Reads expressions from stdin until `exit`, `quit` or end of input.
pub fn start() -> io::Result<()> {
    println!("infix v{}", env!("CARGO_PKG_VERSION"));
    println!("Type 'exit' or press Ctrl+D to quit");
    println!();

    let stdin = io::stdin();
    let stdout = io::stdout();
    session(stdin.lock(), stdout.lock())
}

/// Drives one interactive session over arbitrary input and output.
pub fn session<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<()> {
    let mut evaluator = Evaluator::new();

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF reached (Ctrl+D or piped input ended)
            writeln!(out)?;
            break;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" || line == "quit" {
            writeln!(out, "Goodbye!")?;
            break;
        }

        let (normalized, tokens) = lexer::tokenize(line);
        match evaluator.evaluate_tokens(&tokens) {
            Ok(value) => writeln!(out, "{}", Value(value))?,
            Err(error) => error.write_report(&normalized, None, &mut out)?,
        }
    }

    Ok(())
}
