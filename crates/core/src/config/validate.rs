use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Backend URL and API key are present
/// - Fan-out deadlines are non-zero
/// - Quality rules carry at least one keyword
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.backend.url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "backend.url cannot be empty".to_string(),
        ));
    }
    if config.backend.api_key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "backend.api_key cannot be empty".to_string(),
        ));
    }
    if config.search.automatic_deadline_secs == 0 || config.search.interactive_deadline_secs == 0 {
        return Err(ConfigError::ValidationError(
            "search deadlines cannot be 0".to_string(),
        ));
    }

    let rules = config
        .preferences
        .movie_quality
        .iter()
        .chain(config.preferences.tv_quality.iter());
    for rule in rules {
        if rule.keywords.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "quality rule '{}' has no keywords",
                rule.name
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BackendConfig, BackendKind, Config, PreferencesConfig, SearchTimingConfig};
    use crate::search::QualityRule;

    fn valid_config() -> Config {
        Config {
            backend: BackendConfig {
                kind: BackendKind::Jackett,
                url: "http://localhost:9117".to_string(),
                api_key: "secret".to_string(),
                timeout_secs: 30,
            },
            search: SearchTimingConfig::default(),
            preferences: PreferencesConfig::default(),
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_empty_api_key_fails() {
        let mut config = valid_config();
        config.backend.api_key = "  ".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_zero_deadline_fails() {
        let mut config = valid_config();
        config.search.automatic_deadline_secs = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_keywordless_quality_rule_fails() {
        let mut config = valid_config();
        config.preferences.tv_quality.push(QualityRule {
            name: "1080p".to_string(),
            score: 100,
            keywords: vec![],
        });
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("1080p"));
    }
}
