//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the configuration key for error reporting.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(std::borrow::Cow::into_owned)
        .map_err(|err| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", err.var_name),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_value_unchanged() {
        let expanded = expand_env("Config/NavigationConfig.xml", "navigation.file").unwrap();
        assert_eq!(expanded, "Config/NavigationConfig.xml");
    }

    #[test]
    fn test_default_used_when_unset() {
        let expanded = expand_env(
            "${LEMOO_TEST_SURELY_UNSET_DIR:-Config}/Nav.xml",
            "navigation.file",
        )
        .unwrap();
        assert_eq!(expanded, "Config/Nav.xml");
    }

    #[test]
    fn test_unset_without_default_is_error() {
        let err = expand_env("${LEMOO_TEST_SURELY_UNSET_DIR}/Nav.xml", "navigation.file")
            .unwrap_err();
        match err {
            ConfigError::EnvVar { field, message } => {
                assert_eq!(field, "navigation.file");
                assert!(message.contains("LEMOO_TEST_SURELY_UNSET_DIR"));
            }
            other => panic!("expected EnvVar error, got {other:?}"),
        }
    }
}
