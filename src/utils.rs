use once_cell::sync::Lazy;
use regex::Regex;

use crate::JsonconError;

static KEY_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[_a-zA-Z]+$").expect("valid key pattern"));

pub fn is_valid_key(key: &str) -> bool {
    KEY_NAME.is_match(key)
}

pub fn validate_key(key: &str) -> Result<(), JsonconError> {
    if is_valid_key(key) {
        Ok(())
    } else {
        Err(JsonconError::InvalidKeyName {
            key: key.to_string(),
            hint: Some("Keys may only contain letters and underscores".into()),
            code: Some(110),
        })
    }
}

/// `-?[0-9]+`
pub fn is_integer_literal(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// `-?` followed by digits with exactly one `.` somewhere among them.
pub fn is_float_literal(token: &str) -> bool {
    let body = token.strip_prefix('-').unwrap_or(token);
    let mut dots = 0;
    let mut digits = 0;
    for b in body.bytes() {
        match b {
            b'.' => dots += 1,
            b'0'..=b'9' => digits += 1,
            _ => return false,
        }
    }
    dots == 1 && digits > 0
}

/// Floats always keep a fractional part or exponent so they read back as floats.
pub fn format_float(n: f64) -> String {
    format!("{:?}", n)
}
