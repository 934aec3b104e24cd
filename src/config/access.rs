use super::*;

impl JsonConfig {
    /// Get a typed value from the converted body using its dotted key path.
    ///
    /// # Examples
    /// ```
    /// # use jsoncon::JsonConfig;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = JsonConfig::from_str(r#"{"server": {"port": ".[* 80 100]."}}"#)?;
    /// let port: u16 = config.get("server.port")?;
    /// assert_eq!(port, 8000);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// Returns error if path doesn't exist or value can't be converted to type T.
    pub fn get<T>(&self, path: &str) -> Result<T, JsonconError>
    where
        T: TryFrom<Value, Error = JsonconError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| match e {
            JsonconError::TypeError { message, hint, code } => JsonconError::TypeError {
                message: format!("{} at `{}`", message, path),
                hint,
                code,
            },
            other => other,
        })
    }

    /// Get an optional typed value - returns `None` if key doesn't exist.
    pub fn get_optional<T>(&self, path: &str) -> Result<Option<T>, JsonconError>
    where
        T: TryFrom<Value, Error = JsonconError>,
    {
        match self.get(path) {
            Ok(value) => Ok(Some(value)),
            Err(JsonconError::NotFound { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    ///
    /// # Examples
    /// ```
    /// # use jsoncon::JsonConfig;
    /// let config = JsonConfig::from_str(r#"{"retries": 3}"#).unwrap();
    /// assert_eq!(config.get_or("timeout", 30u64), 30);
    /// assert_eq!(config.get_or("retries", 1u64), 3);
    /// ```
    pub fn get_or<T>(&self, path: &str, default: T) -> T
    where
        T: TryFrom<Value, Error = JsonconError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get the resolved leaf value at `path`.
    pub fn get_value(&self, path: &str) -> Result<Value, JsonconError> {
        match self.lookup(path)? {
            Json::Object(_) => Err(JsonconError::TypeError {
                message: format!("Path '{}' is a section, not a value", path),
                hint: Some("Use get_keys to list the entries of a section".into()),
                code: Some(401),
            }),
            leaf => Value::try_from(leaf),
        }
    }

    /// Get all keys at a given section. An empty path lists the top level.
    pub fn get_keys(&self, path: &str) -> Result<Vec<String>, JsonconError> {
        if path.trim().is_empty() {
            return Ok(self.document.keys().cloned().collect());
        }
        match self.lookup(path)? {
            Json::Object(map) => Ok(map.keys().cloned().collect()),
            _ => Err(JsonconError::TypeError {
                message: format!("Path '{}' is not a section", path),
                hint: Some("Only nested objects have keys".into()),
                code: Some(401),
            }),
        }
    }

    /// Check if a dotted path exists in the converted body.
    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_ok()
    }

    fn lookup(&self, path: &str) -> Result<&Json, JsonconError> {
        let not_found = || JsonconError::NotFound {
            path: path.to_string(),
            hint: Some("Check that the path exists in your document".into()),
            code: Some(400),
        };

        let mut segments = path.split('.');
        let first = segments.next().ok_or_else(not_found)?;
        let mut current = self.document.get(first).ok_or_else(not_found)?;

        for segment in segments {
            current = current
                .as_object()
                .and_then(|map| map.get(segment))
                .ok_or_else(not_found)?;
        }

        Ok(current)
    }
}
