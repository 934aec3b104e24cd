pub mod ast;
pub mod error;
pub mod export;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod utils;
pub mod config;

pub use ast::{ConfigLine, ConstantsTable, Value};
pub use error::JsonconError;
pub use config::JsonConfig;

/// Convert a JSON document into config text lines, constants first.
///
/// # Examples
/// ```
/// let lines = jsoncon::preprocess(r#"{"constants": {"c": ".[5 * 2]."}, "a": ".[c + 1]."}"#).unwrap();
/// assert_eq!(lines, vec!["c is 10;", "a 11;"]);
/// ```
pub fn preprocess(input: &str) -> Result<Vec<String>, JsonconError> {
    let config = JsonConfig::from_str(input)?;
    Ok(config.lines().iter().map(ToString::to_string).collect())
}
