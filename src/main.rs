use clap::{Arg, ArgAction, Command};
use infix::{evaluate, lexer, repl, runner, Value};
use std::io;
use std::path::Path;
use tracing_subscriber::EnvFilter;

const DEFAULT_SOURCE: &str = "infix.txt";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let matches = Command::new("infix")
        .about("Evaluates infix arithmetic expressions line by line")
        .arg(
            Arg::new("file")
                .help("File of expressions, one per line")
                .value_name("FILE")
                .default_value(DEFAULT_SOURCE)
                .index(1),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .help("Start in interactive REPL mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("expr")
                .short('e')
                .long("expr")
                .value_name("EXPR")
                .help("Evaluate an expression and print it with its output")
                .action(ArgAction::Append),
        )
        .get_matches();

    let result = if matches.get_flag("interactive") {
        repl::start()
    } else if let Some(mut expressions) = matches.get_many::<String>("expr") {
        expressions.try_for_each(|expression| run_expression(expression))
    } else {
        let path = matches
            .get_one::<String>("file")
            .map(String::as_str)
            .unwrap_or(DEFAULT_SOURCE);
        run_file(Path::new(path))
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_file(path: &Path) -> io::Result<()> {
    let stdout = io::stdout();
    let summary = runner::run_file(path, &mut stdout.lock())?;
    tracing::info!(
        evaluated = summary.evaluated,
        failed = summary.failed,
        "finished {}",
        path.display()
    );
    Ok(())
}

fn run_expression(expression: &str) -> io::Result<()> {
    print!("Expression: {} Output: ", expression);
    match evaluate(expression) {
        Ok(value) => println!("{}", Value(value)),
        Err(error) => {
            println!();
            error.report(&lexer::normalize(expression), Some("<expr>"))?;
        }
    }
    Ok(())
}
