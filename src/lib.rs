// Infix Arithmetic Evaluator Library
//
// Evaluates one line of infix arithmetic at a time (numbers, `+ - * /`,
// operator precedence and a leading unary minus) with a two-stack
// precedence evaluator, and reports malformed lines without stopping a run.

// Public modules
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod repl;
pub mod runner;
pub mod stack;
pub mod value;

// Re-export commonly used items
pub use error::{ErrorKind, EvalError, Span};
pub use evaluator::{evaluate, Evaluator};
pub use lexer::{normalize, tokenize, Lexer, Token, TokenKind};
pub use operator::{is_number, is_operator, Operator};
pub use runner::RunSummary;
pub use stack::Stack;
pub use value::Value;

// Re-export main functions
pub use repl::start as start_repl;
pub use runner::{run, run_file};
