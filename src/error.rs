use std::fmt;

/// The main error type for jsoncon conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonconError {
    /// Input is not valid JSON, or has the wrong top-level shape.
    MalformedInput {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    InvalidKeyName {
        key: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnknownOperand {
        token: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnsupportedOperator {
        operator: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    ArityError {
        operator: String,
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when `sort` gets something other than a list of comparable scalars.
    SortTypeError {
        found: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised for arithmetic on strings or lists.
    OperandTypeError {
        operator: String,
        found: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    DivisionByZero {
        hint: Option<String>,
        code: Option<u32>,
    },
    Overflow {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnsupportedValueType {
        type_name: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    NotFound {
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    TypeError {
        message: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    FileError {
        message: String,
        path: String,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Wraps an inner error with where it happened, e.g. `Error evaluating constant rate`.
    Context {
        context: String,
        source: Box<JsonconError>,
    },
}

impl JsonconError {
    pub fn unknown_operand(token: &str) -> Self {
        JsonconError::UnknownOperand {
            token: token.to_string(),
            hint: Some("Operands are numbers, constant names, [lists] or .[nested]. expressions".into()),
            code: Some(200),
        }
    }

    pub fn unsupported_value(type_name: &str) -> Self {
        JsonconError::UnsupportedValueType {
            type_name: type_name.to_string(),
            hint: Some("Only integers, floats, strings and lists can be written out".into()),
            code: Some(300),
        }
    }

    pub fn with_context(self, context: impl Into<String>) -> Self {
        JsonconError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping any `Context` wrappers.
    pub fn root_cause(&self) -> &JsonconError {
        let mut current = self;
        while let JsonconError::Context { source, .. } = current {
            current = source.as_ref();
        }
        current
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            JsonconError::MalformedInput { code, .. }
            | JsonconError::InvalidKeyName { code, .. }
            | JsonconError::UnknownOperand { code, .. }
            | JsonconError::UnsupportedOperator { code, .. }
            | JsonconError::ArityError { code, .. }
            | JsonconError::SortTypeError { code, .. }
            | JsonconError::OperandTypeError { code, .. }
            | JsonconError::DivisionByZero { code, .. }
            | JsonconError::Overflow { code, .. }
            | JsonconError::UnsupportedValueType { code, .. }
            | JsonconError::NotFound { code, .. }
            | JsonconError::TypeError { code, .. }
            | JsonconError::FileError { code, .. } => *code,
            JsonconError::Context { source, .. } => source.code(),
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for JsonconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonconError::MalformedInput { message, line, column, hint, code } =>
                write!(f, "[JSONCON] Malformed input at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
            JsonconError::InvalidKeyName { key, hint, code } =>
                write!(f, "[JSONCON] Invalid key name: {}{}", key, suffix(hint, code)),
            JsonconError::UnknownOperand { token, hint, code } =>
                write!(f, "[JSONCON] Unknown operand: {}{}", token, suffix(hint, code)),
            JsonconError::UnsupportedOperator { operator, hint, code } =>
                write!(f, "[JSONCON] Unsupported operator: {}{}", operator, suffix(hint, code)),
            JsonconError::ArityError { operator, message, hint, code } =>
                write!(f, "[JSONCON] Arity error for '{}': {}{}", operator, message, suffix(hint, code)),
            JsonconError::SortTypeError { found, hint, code } =>
                write!(f, "[JSONCON] Sort requires a list of comparable values, got {}{}", found, suffix(hint, code)),
            JsonconError::OperandTypeError { operator, found, hint, code } =>
                write!(f, "[JSONCON] Operator '{}' cannot be applied to {}{}",
                    operator, found, suffix(hint, code)),
            JsonconError::DivisionByZero { hint, code } =>
                write!(f, "[JSONCON] Division by zero{}", suffix(hint, code)),
            JsonconError::Overflow { message, hint, code } =>
                write!(f, "[JSONCON] Overflow: {}{}", message, suffix(hint, code)),
            JsonconError::UnsupportedValueType { type_name, hint, code } =>
                write!(f, "[JSONCON] Unsupported value type: {}{}", type_name, suffix(hint, code)),
            JsonconError::NotFound { path, hint, code } =>
                write!(f, "[JSONCON] Key not found: {}{}", path, suffix(hint, code)),
            JsonconError::TypeError { message, hint, code } =>
                write!(f, "[JSONCON] Type Error: {}{}", message, suffix(hint, code)),
            JsonconError::FileError { message, path, hint, code } =>
                write!(f, "[JSONCON] File Error '{}': {}{}", path, message, suffix(hint, code)),
            JsonconError::Context { context, source } =>
                write!(f, "{}: {}", context, source),
        }
    }
}

impl std::error::Error for JsonconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JsonconError::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for JsonconError {
    fn from(err: serde_json::Error) -> Self {
        JsonconError::MalformedInput {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
            hint: Some("The input must be a valid JSON object".into()),
            code: Some(100),
        }
    }
}
