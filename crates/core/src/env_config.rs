//! Environment variable parsing with warn-level logging for invalid values.

/// Parse an environment variable with a default fallback.
///
/// - Unset or blank: returns `default` silently.
/// - Set but unparseable: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    let Some(raw) = env_non_empty(var) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(var, value = %raw, default = %default, "invalid env var value, using default");
            default
        },
    }
}

/// Read an environment variable, treating blank values as unset.
#[must_use]
pub fn env_non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Read a string environment variable, falling back to `default` when unset or blank.
#[must_use]
pub fn env_or_default(var: &str, default: &str) -> String {
    env_non_empty(var).unwrap_or_else(|| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    // SAFETY (all blocks below): each test touches only its own uniquely named
    // variable, and nothing in the crate reads these names concurrently.
    fn set(name: &str, value: &str) {
        unsafe { std::env::set_var(name, value) }
    }

    fn unset(name: &str) {
        unsafe { std::env::remove_var(name) }
    }

    #[test]
    fn test_env_parse_valid_value() {
        let var_name = "LINKSAVER_TEST_PARSE_VALID_41873";
        set(var_name, " 42 ");
        let result: u64 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 42);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_invalid_value() {
        let var_name = "LINKSAVER_TEST_PARSE_INVALID_41874";
        set(var_name, "ten seconds");
        let result: u64 = env_parse_with_default(var_name, 10);
        assert_eq!(result, 10);
        unset(var_name);
    }

    #[test]
    fn test_env_parse_blank_value() {
        let var_name = "LINKSAVER_TEST_PARSE_BLANK_41875";
        set(var_name, "   ");
        let result: u64 = env_parse_with_default(var_name, 15);
        assert_eq!(result, 15);
        unset(var_name);
    }

    #[test]
    fn test_env_or_default_missing() {
        let var_name = "LINKSAVER_TEST_STRING_MISSING_41876";
        unset(var_name);
        assert_eq!(env_or_default(var_name, "https://r.jina.ai"), "https://r.jina.ai");
    }
}
