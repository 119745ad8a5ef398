use crate::error::{EvalError, Span};
use crate::lexer::{self, Token, TokenKind};
use crate::stack::Stack;

/// Two-stack infix evaluator.
///
/// Numbers go on the operand stack and operators on the operator stack,
/// above a boundary sentinel. An incoming operator first reduces every pending
/// operator of equal or higher precedence, which makes equal-precedence
/// operators left-associative. Both stacks are cleared at the start of every
/// line, so one evaluator can serve any number of lines.
pub struct Evaluator {
    operands: Stack<f64>,
    operators: Stack<Token>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            operands: Stack::new(),
            operators: Stack::new(),
        }
    }

    /// Normalizes, tokenizes and evaluates one raw line.
    pub fn evaluate(&mut self, line: &str) -> Result<f64, EvalError> {
        let (_, tokens) = lexer::tokenize(line);
        self.evaluate_tokens(&tokens)
    }

    pub fn evaluate_tokens(&mut self, tokens: &[Token]) -> Result<f64, EvalError> {
        self.operands.clear();
        self.operators.clear();

        let result = self.solve(tokens);

        self.operands.clear();
        self.operators.clear();
        result
    }

    fn solve(&mut self, tokens: &[Token]) -> Result<f64, EvalError> {
        self.operators.push(Token::boundary());
        let mut expecting_operator = false;

        for token in tokens {
            match &token.kind {
                TokenKind::Number(value) => {
                    if expecting_operator {
                        return Err(EvalError::consecutive_operands(token.span, &token.lexeme));
                    }
                    self.operands.push(*value);
                    expecting_operator = true;
                }
                TokenKind::Operator(op) => {
                    if !expecting_operator {
                        return Err(EvalError::consecutive_operators(token.span, &token.lexeme));
                    }

                    let rank = op.precedence();
                    while self
                        .operators
                        .peek()
                        .and_then(Token::precedence)
                        .is_some_and(|top| top >= rank)
                    {
                        self.reduce()?;
                    }

                    self.operators.push(token.clone());
                    expecting_operator = false;
                }
                TokenKind::Boundary | TokenKind::Unknown => {
                    return Err(EvalError::unknown_token(token.span, &token.lexeme));
                }
            }
        }

        while self.operators.peek().is_some_and(|top| !top.is_boundary()) {
            self.reduce()?;
        }
        self.operators.pop();

        let end = tokens.last().map_or(0, |token| token.span.end);
        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(value), true) => Ok(value),
            (None, _) => Err(EvalError::unbalanced_expression(
                Span::new(0, end),
                "Expected a number, found end of line".to_string(),
            )),
            (Some(_), false) => Err(EvalError::unbalanced_expression(
                Span::new(0, end),
                format!("{} numbers were left unused", self.operands.len()),
            )),
        }
    }

    /// Pops one operator and two operands and pushes the result.
    fn reduce(&mut self) -> Result<(), EvalError> {
        let token = match self.operators.pop() {
            Some(token) => token,
            None => return Ok(()),
        };
        let op = match token.kind {
            TokenKind::Operator(op) => op,
            _ => return Err(EvalError::unknown_token(token.span, &token.lexeme)),
        };

        let missing = || {
            EvalError::unbalanced_expression(
                token.span,
                format!("Operator '{}' is missing a number", op),
            )
        };
        let right = self.operands.pop().ok_or_else(missing)?;
        let left = self.operands.pop().ok_or_else(missing)?;

        self.operands.push(op.apply(left, right));
        Ok(())
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates one raw line with a fresh evaluator.
pub fn evaluate(line: &str) -> Result<f64, EvalError> {
    Evaluator::new().evaluate(line)
}
