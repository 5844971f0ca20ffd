use tracing::{debug, warn};

/// Turn the configured `source.token` into the value sent to the
/// vulnerability source.
///
/// `$NAME` reads the environment variable `NAME`; anything else is taken
/// literally. An unset variable or an empty value means no credential, and
/// requests go out unauthenticated.
pub fn resolve_token(token_ref: &str) -> Option<String> {
    let token = match token_ref.strip_prefix('$') {
        Some(var_name) => match std::env::var(var_name) {
            Ok(value) => {
                debug!(var = %var_name, "Token read from environment");
                value
            }
            Err(_) => {
                warn!(var = %var_name, "Token variable not set, sending requests without credentials");
                return None;
            }
        },
        None => token_ref.to_string(),
    };

    if token.trim().is_empty() {
        None
    } else {
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_token() {
        assert_eq!(resolve_token("ghp_literal").as_deref(), Some("ghp_literal"));
    }

    #[test]
    fn test_token_from_environment() {
        std::env::set_var("TEST_REPOWATCH_TOKEN", "secret123");
        assert_eq!(resolve_token("$TEST_REPOWATCH_TOKEN").as_deref(), Some("secret123"));
        std::env::remove_var("TEST_REPOWATCH_TOKEN");
    }

    #[test]
    fn test_unset_variable_is_no_token() {
        assert_eq!(resolve_token("$NONEXISTENT_REPOWATCH_VAR"), None);
    }

    #[test]
    fn test_empty_token_is_no_token() {
        assert_eq!(resolve_token(""), None);
        std::env::set_var("TEST_REPOWATCH_EMPTY_TOKEN", "");
        assert_eq!(resolve_token("$TEST_REPOWATCH_EMPTY_TOKEN"), None);
        std::env::remove_var("TEST_REPOWATCH_EMPTY_TOKEN");
    }
}
