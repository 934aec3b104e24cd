use crate::JsonconError;
use crate::ast::{ConstantsTable, Value};

mod expression;
mod operand;

/// Evaluates dot-bracket expressions against a constants table.
///
/// The parser holds no state of its own: the table is borrowed, so a new
/// parser is cheap to make whenever the table has grown.
pub struct Parser<'a> {
    constants: &'a ConstantsTable,
}

impl<'a> Parser<'a> {
    pub fn new(constants: &'a ConstantsTable) -> Self {
        Self { constants }
    }

    /// Evaluate expression text such as `+ a 2`, `4 / 2` or `sort {3, 1, 2}`.
    pub fn evaluate(&self, expr: &str) -> Result<Value, JsonconError> {
        expression::evaluate(self, expr)
    }

    /// Parse one operand token into a value.
    pub fn parse_operand(&self, token: &str) -> Result<Value, JsonconError> {
        operand::parse_operand(self, token)
    }
}

#[cfg(test)]
mod tests;
