use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::fmt;
use std::io::{self, Write};

/// Byte range within a normalized line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn single(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos + 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Two numbers with no operator between them.
    ConsecutiveOperands,
    /// Two operators with no number between them.
    ConsecutiveOperators,
    /// Neither a number nor an operator.
    UnknownToken,
    /// Too few numbers for the operators present.
    UnbalancedExpression,
}

impl ErrorKind {
    fn label(self) -> &'static str {
        match self {
            ErrorKind::ConsecutiveOperands => "Consecutive Operands",
            ErrorKind::ConsecutiveOperators => "Consecutive Operators",
            ErrorKind::UnknownToken => "Unknown Token",
            ErrorKind::UnbalancedExpression => "Unbalanced Expression",
        }
    }

    fn color(self) -> Color {
        match self {
            ErrorKind::ConsecutiveOperands => Color::Yellow,
            ErrorKind::ConsecutiveOperators => Color::Yellow,
            ErrorKind::UnknownToken => Color::Red,
            ErrorKind::UnbalancedExpression => Color::Magenta,
        }
    }
}

/// A syntax error raised while evaluating one line. Never fatal to a run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalError {
    pub kind: ErrorKind,
    pub span: Span,
    pub message: String,
    pub help: Option<String>,
}

impl EvalError {
    pub fn new(kind: ErrorKind, span: Span, message: String) -> Self {
        Self {
            kind,
            span,
            message,
            help: None,
        }
    }

    pub fn new_with_help(kind: ErrorKind, span: Span, message: String, help: String) -> Self {
        Self {
            kind,
            span,
            message,
            help: Some(help),
        }
    }

    pub fn consecutive_operands(span: Span, lexeme: &str) -> Self {
        Self::new_with_help(
            ErrorKind::ConsecutiveOperands,
            span,
            format!("Expected an operator, received the number '{}'", lexeme),
            "Place one of '+', '-', '*' or '/' between two numbers.".to_string(),
        )
    }

    pub fn consecutive_operators(span: Span, lexeme: &str) -> Self {
        Self::new_with_help(
            ErrorKind::ConsecutiveOperators,
            span,
            format!("Expected a number, received the operator '{}'", lexeme),
            "Only a leading '-' may appear without a number before it.".to_string(),
        )
    }

    pub fn unknown_token(span: Span, lexeme: &str) -> Self {
        Self::new(
            ErrorKind::UnknownToken,
            span,
            format!("'{}' is neither an operator nor a number", lexeme),
        )
    }

    pub fn unbalanced_expression(span: Span, message: String) -> Self {
        Self::new_with_help(
            ErrorKind::UnbalancedExpression,
            span,
            message,
            "The line contains extra operators or is missing numbers.".to_string(),
        )
    }

    /// Prints the diagnostic to stdout.
    pub fn report(&self, source: &str, filename: Option<&str>) -> io::Result<()> {
        self.write_report(source, filename, io::stdout())
    }

    pub fn write_report<W: Write>(
        &self,
        source: &str,
        filename: Option<&str>,
        out: W,
    ) -> io::Result<()> {
        let filename = filename.unwrap_or("<line>");
        let color = self.kind.color();

        // Keep the label inside the line so ariadne can place it.
        let end = self.span.end.min(source.len());
        let start = self.span.start.min(end);

        let mut report_builder = Report::build(ReportKind::Error, filename, start)
            .with_message(format!("{}: {}", self.kind.label().fg(color), self.message))
            .with_label(
                Label::new((filename, start..end))
                    .with_message(&self.message)
                    .with_color(color),
            );

        if let Some(ref help_text) = self.help {
            report_builder =
                report_builder.with_note(format!("{}: {}", "help".fg(Color::Cyan), help_text));
        }

        report_builder
            .finish()
            .write((filename, Source::from(source)), out)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind.label(), self.message)
    }
}

impl std::error::Error for EvalError {}
