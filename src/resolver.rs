// Author: Dustin Pilgrim
// License: MIT

use serde_json::{Map, Value as Json};

use crate::ast::{strip_marker, ConstantsTable, Value};
use crate::parser::Parser;
use crate::utils::validate_key;
use crate::JsonconError;

/// Reserved top-level key holding the constants block.
pub const CONSTANTS_KEY: &str = "constants";

/// Evaluates the `constants` block into `constants` and removes it from the
/// document.
///
/// Entries are resolved in declaration order; each one sees only the
/// constants declared before it.
pub fn resolve_constants(
    root: &mut Map<String, Json>,
    constants: &mut ConstantsTable,
) -> Result<(), JsonconError> {
    let Some(block) = root.shift_remove(CONSTANTS_KEY) else {
        return Ok(());
    };

    let Json::Object(entries) = block else {
        return Err(JsonconError::MalformedInput {
            message: format!("`{}` must be an object", CONSTANTS_KEY),
            line: 0,
            column: 0,
            hint: Some("Declare constants as {\"constants\": {\"name\": value}}".into()),
            code: Some(101),
        });
    };

    for (name, raw) in entries {
        validate_key(&name)?;

        let resolved = match raw.as_str().and_then(strip_marker) {
            Some(expr) => Parser::new(constants).evaluate(expr),
            None => Value::try_from(&raw),
        }
        .and_then(|value| value.ensure_finite().map(|()| value))
        .map_err(|e| e.with_context(format!("Error evaluating constant {}", name)))?;

        log::debug!("constant {} = {}", name, resolved);
        constants.insert(name, resolved);
    }

    Ok(())
}

/// Replaces every `.[ … ].` string in the document with its evaluated value,
/// validating object keys on the way down.
pub fn substitute(root: &mut Map<String, Json>, constants: &ConstantsTable) -> Result<(), JsonconError> {
    let parser = Parser::new(constants);
    walk_object(&parser, root)
}

fn walk_object(parser: &Parser, map: &mut Map<String, Json>) -> Result<(), JsonconError> {
    for (key, value) in map.iter_mut() {
        validate_key(key)?;
        resolve_slot(parser, value, Some(key.as_str()))?;
    }
    Ok(())
}

fn walk_array(parser: &Parser, items: &mut [Json]) -> Result<(), JsonconError> {
    for item in items.iter_mut() {
        resolve_slot(parser, item, None)?;
    }
    Ok(())
}

/// `key` is `None` for array elements.
fn resolve_slot(parser: &Parser, slot: &mut Json, key: Option<&str>) -> Result<(), JsonconError> {
    match slot {
        Json::String(s) => {
            let Some(expr) = strip_marker(s) else {
                return Ok(());
            };
            let resolved = parser
                .evaluate(expr)
                .and_then(|value| value.to_json())
                .map_err(|e| match key {
                    Some(key) => e.with_context(format!("Error evaluating expression for {}", key)),
                    None => e.with_context("Error evaluating expression in list"),
                })?;
            log::debug!("substituted {} -> {}", s, resolved);
            *slot = resolved;
            Ok(())
        }
        Json::Object(map) => walk_object(parser, map),
        Json::Array(items) => walk_array(parser, items),
        _ => Ok(()),
    }
}

// -- Tests --
