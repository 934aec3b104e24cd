// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde_json::{Map, Value as Json};

use crate::ast::{ConfigLine, ConstantsTable, Value};
use crate::{export, resolver};
use crate::JsonconError;

mod access;
mod conversion;

/// A converted document: the resolved constants, the resolved body and the
/// config lines they render to.
#[derive(Debug, Clone)]
pub struct JsonConfig {
    constants: ConstantsTable,
    document: Map<String, Json>,
    lines: Vec<ConfigLine>,
}

impl JsonConfig {
    /// Load and convert a JSON file.
    ///
    /// # Example
    /// ```no_run
    /// # use jsoncon::JsonConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = JsonConfig::from_file("service.json")?;
    /// print!("{}", config.render());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, JsonconError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| JsonconError::FileError {
            message: format!("Failed to read file: {}", e),
            path: path.to_string_lossy().to_string(),
            hint: Some("Check that the file exists and is readable".into()),
            code: Some(500),
        })?;

        log::debug!("read {} byte(s) from {}", content.len(), path.display());
        Self::from_str(&content)
    }

    /// Convert a JSON document held in memory.
    ///
    /// The whole conversion fails on the first error; nothing partial is kept.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, JsonconError> {
        let parsed: Json = serde_json::from_str(content)?;
        let Json::Object(mut document) = parsed else {
            return Err(JsonconError::MalformedInput {
                message: "top-level value must be an object".into(),
                line: 1,
                column: 1,
                hint: Some("Wrap the configuration in { ... }".into()),
                code: Some(102),
            });
        };

        let mut constants = ConstantsTable::new();
        resolver::resolve_constants(&mut document, &mut constants)?;
        resolver::substitute(&mut document, &constants)?;

        let mut lines = export::constant_lines(&constants);
        let body = export::flatten(&document)?;
        log::info!(
            "converted document: {} constant(s), {} entry line(s)",
            lines.len(),
            body.len()
        );
        lines.extend(body);

        Ok(Self {
            constants,
            document,
            lines,
        })
    }

    /// Constants in declaration order.
    pub fn constants(&self) -> &ConstantsTable {
        &self.constants
    }

    pub fn constant(&self, name: &str) -> Option<&Value> {
        self.constants.get(name)
    }

    /// The resolved body, with `constants` removed and every expression
    /// replaced by its value.
    pub fn document(&self) -> &Map<String, Json> {
        &self.document
    }

    /// Constants lines followed by body lines.
    pub fn lines(&self) -> &[ConfigLine] {
        &self.lines
    }

    pub fn render(&self) -> String {
        export::render(&self.lines)
    }

    pub fn to_json(&self) -> Result<String, JsonconError> {
        export::export_lines_to_json(&self.constants, &self.lines)
    }
}

impl FromStr for JsonConfig {
    type Err = JsonconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JsonConfig::from_str(s)
    }
}
