use std::env;

/// Parse a boolean the way DCCsi environment flags are written.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean environment variable, falling back to `default` when unset or unparseable.
pub fn env_bool(var: &str, default: bool) -> bool {
    match env::var(var) {
        Ok(value) => parse_bool(&value).unwrap_or_else(|| {
            tracing::warn!("{var}={value:?} is not a boolean, using {default}");
            default
        }),
        Err(env::VarError::NotPresent) => default,
        Err(env::VarError::NotUnicode(_)) => {
            tracing::warn!("{var} is not valid unicode, using {default}");
            default
        }
    }
}
