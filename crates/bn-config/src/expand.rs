//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// Only the braced form is recognized; a string without `${` is returned
/// as is, so literal dollar signs in URLs survive.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| match std::env::var(var) {
        Ok(val) => Ok(Some(val)),
        Err(_) => Err(UnsetVar(var.to_owned())),
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Expand an optional string in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(v) = value.as_deref() {
        *value = Some(expand_env(v, field)?);
    }
    Ok(())
}

struct UnsetVar(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("BOOTNODE_TEST_SERVICE", "service_42");
        }
        let result = expand_env("${BOOTNODE_TEST_SERVICE}", "contact.service_id").unwrap();
        assert_eq!(result, "service_42");
        unsafe {
            std::env::remove_var("BOOTNODE_TEST_SERVICE");
        }
    }

    #[test]
    fn test_expand_default_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("BOOTNODE_TEST_UNSET_HOST");
        }
        let result = expand_env("${BOOTNODE_TEST_UNSET_HOST:-0.0.0.0}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("BOOTNODE_TEST_MISSING_KEY");
        }
        let err = expand_env("${BOOTNODE_TEST_MISSING_KEY}", "contact.public_key").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("BOOTNODE_TEST_MISSING_KEY"));
        assert!(err.to_string().contains("contact.public_key"));
    }

    #[test]
    fn test_literal_and_bare_dollar_unchanged() {
        assert_eq!(expand_env("plain", "f").unwrap(), "plain");
        assert_eq!(
            expand_env("https://api.example.com/$v1", "f").unwrap(),
            "https://api.example.com/$v1"
        );
    }

    #[test]
    fn test_expand_opt() {
        let mut none: Option<String> = None;
        expand_opt(&mut none, "f").unwrap();
        assert!(none.is_none());

        let mut some = Some("literal".to_owned());
        expand_opt(&mut some, "f").unwrap();
        assert_eq!(some.as_deref(), Some("literal"));
    }
}
