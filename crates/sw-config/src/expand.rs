//! Environment variable expansion for string config values.
//!
//! Supports `${VAR}` (errors when unset) and `${VAR:-default}`.

use crate::ConfigError;

/// Expand environment variables in a config value.
///
/// # Errors
///
/// Returns [`ConfigError::EnvVar`] for an unset variable without a
/// default, or an unterminated `${`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    expand_with(value, field, |name| std::env::var(name).ok())
}

/// Expansion over an arbitrary variable source, so tests don't have to
/// mutate the process environment.
fn expand_with<F>(value: &str, field: &str, lookup: F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            return Err(ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("unterminated ${{ in \"{value}\""),
            });
        };

        let expr = &after[..end];
        let (name, default) = match expr.split_once(":-") {
            Some((name, default)) => (name, Some(default)),
            None => (expr, None),
        };

        match (lookup(name), default) {
            (Some(found), _) => out.push_str(&found),
            (None, Some(default)) => out.push_str(default),
            (None, None) => {
                return Err(ConfigError::EnvVar {
                    field: field.to_owned(),
                    message: format!("${{{name}}} not set"),
                });
            }
        }

        rest = &after[end + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "API_URL" => Some("https://api.example.com".to_owned()),
            "PORT" => Some("8443".to_owned()),
            _ => None,
        }
    }

    #[test]
    fn test_no_expansion_needed() {
        assert_eq!(
            expand_with("https://api.example.com", "api.base_url", lookup).unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_expands_set_variable() {
        assert_eq!(
            expand_with("${API_URL}", "api.base_url", lookup).unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_expands_multiple_variables() {
        assert_eq!(
            expand_with("${API_URL}:${PORT}", "api.base_url", lookup).unwrap(),
            "https://api.example.com:8443"
        );
    }

    #[test]
    fn test_default_used_when_unset() {
        assert_eq!(
            expand_with("${MISSING:-http://localhost:8000}", "api.base_url", lookup).unwrap(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_set_variable_wins_over_default() {
        assert_eq!(
            expand_with("${API_URL:-http://localhost}", "api.base_url", lookup).unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn test_unset_without_default_errors() {
        let result = expand_with("${MISSING}", "api.base_url", lookup);
        assert!(matches!(result, Err(ConfigError::EnvVar { .. })));
    }

    #[test]
    fn test_unterminated_expression_errors() {
        let result = expand_with("${MISSING", "api.base_url", lookup);
        assert!(matches!(result, Err(ConfigError::EnvVar { .. })));
    }
}
