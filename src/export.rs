// Author: Dustin Pilgrim
// License: MIT

use serde::Serialize;
use serde_json::{Map, Value as Json};

use crate::ast::{ConfigLine, ConstantsTable, Value};
use crate::JsonconError;

/// Flatten a resolved document into body lines.
///
/// Nested objects become dotted key paths (`server.http.port`), visited
/// depth-first in key order. Every other value is a leaf and is converted
/// to a [`Value`]; booleans, nulls and objects inside lists have no config
/// text form and fail with `UnsupportedValueType`.
///
/// # Examples
/// ```
/// use jsoncon::export::flatten;
/// use serde_json::json;
///
/// let doc = json!({"x": {"y": {"z": 5}}});
/// let lines = flatten(doc.as_object().unwrap()).unwrap();
/// assert_eq!(lines[0].to_string(), "x.y.z 5;");
/// ```
pub fn flatten(root: &Map<String, Json>) -> Result<Vec<ConfigLine>, JsonconError> {
    let mut lines = Vec::new();
    collect(root, "", &mut lines)?;
    Ok(lines)
}

fn collect(map: &Map<String, Json>, parent: &str, lines: &mut Vec<ConfigLine>) -> Result<(), JsonconError> {
    for (key, value) in map {
        let path = if parent.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", parent, key)
        };

        match value {
            Json::Object(child) => collect(child, &path, lines)?,
            leaf => {
                let value = Value::try_from(leaf)
                    .map_err(|e| e.with_context(format!("Error formatting value for {}", path)))?;
                lines.push(ConfigLine::Entry { key: path, value });
            }
        }
    }
    Ok(())
}

/// Constants lines in declaration order.
pub fn constant_lines(constants: &ConstantsTable) -> Vec<ConfigLine> {
    constants
        .iter()
        .map(|(name, value)| ConfigLine::Constant {
            name: name.clone(),
            value: value.clone(),
        })
        .collect()
}

/// Render lines as config text, one `;`-terminated line each.
pub fn render(lines: &[ConfigLine]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

#[derive(Serialize)]
struct Export<'a> {
    constants: &'a ConstantsTable,
    entries: Map<String, Json>,
}

/// Export converted lines to JSON: the constants table plus the flattened
/// body keyed by dotted path.
pub fn export_lines_to_json(constants: &ConstantsTable, lines: &[ConfigLine]) -> Result<String, JsonconError> {
    for value in constants.values() {
        value.ensure_finite()?;
    }

    let mut entries = Map::new();
    for line in lines {
        if let ConfigLine::Entry { key, value } = line {
            entries.insert(key.clone(), value.to_json()?);
        }
    }

    serde_json::to_string_pretty(&Export { constants, entries }).map_err(|e| JsonconError::TypeError {
        message: format!("Failed to serialize export: {}", e),
        hint: None,
        code: Some(401),
    })
}
