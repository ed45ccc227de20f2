use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// Reads back the text produced by `Display`, and more generally any infix
/// expression over integers with `+ - * /` (also `×` and `÷`) and parentheses.
/// Leaves are numbered in order of appearance.
impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!("Parsing expression: '{}'", s);
        let mut parser = Parser {
            chars: s.char_indices().peekable(),
            next_position: 0,
        };
        let expr = parser.parse_sum()?;
        parser.skip_whitespace();
        match parser.chars.next() {
            None => Ok(expr),
            Some((offset, found)) => Err(ExpressionError::UnexpectedCharacter { found, offset }),
        }
    }
}

struct Parser<'a> {
    chars: Peekable<CharIndices<'a>>,
    next_position: usize,
}

impl Parser<'_> {
    fn skip_whitespace(&mut self) {
        while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
    }

    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.chars.peek().map(|&(_, c)| c)
    }

    fn parse_sum(&mut self) -> Result<Expression, ExpressionError> {
        let mut expr = self.parse_product()?;
        loop {
            let op = match self.peek() {
                Some('+') => Operator::Add,
                Some('-') => Operator::Sub,
                _ => return Ok(expr),
            };
            self.chars.next();
            let right = self.parse_product()?;
            expr = Expression::binary(op, expr, right);
        }
    }

    fn parse_product(&mut self) -> Result<Expression, ExpressionError> {
        let mut expr = self.parse_atom()?;
        loop {
            let op = match self.peek() {
                Some('*' | '×') => Operator::Mul,
                Some('/' | '÷') => Operator::Div,
                _ => return Ok(expr),
            };
            self.chars.next();
            let right = self.parse_atom()?;
            expr = Expression::binary(op, expr, right);
        }
    }

    fn parse_atom(&mut self) -> Result<Expression, ExpressionError> {
        match self.peek() {
            None => Err(ExpressionError::UnexpectedEnd),
            Some('(') => {
                self.chars.next();
                let expr = self.parse_sum()?;
                match self.peek() {
                    Some(')') => {
                        self.chars.next();
                        Ok(expr)
                    }
                    Some(found) => Err(self.unexpected(found)),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_integer(),
            Some(found) => Err(self.unexpected(found)),
        }
    }

    fn parse_integer(&mut self) -> Result<Expression, ExpressionError> {
        let mut literal = String::new();
        if let Some((_, '-')) = self.chars.next_if(|&(_, c)| c == '-') {
            literal.push('-');
            self.skip_whitespace();
        }
        while let Some((_, digit)) = self.chars.next_if(|(_, c)| c.is_ascii_digit()) {
            literal.push(digit);
        }

        let value = literal
            .parse::<i64>()
            .map_err(|_| ExpressionError::InvalidNumber(literal.clone()))?;
        let position = self.next_position;
        self.next_position += 1;
        Ok(Expression::leaf(value, position))
    }

    fn unexpected(&mut self, found: char) -> ExpressionError {
        let offset = self.chars.peek().map_or(0, |&(offset, _)| offset);
        ExpressionError::UnexpectedCharacter { found, offset }
    }
}
