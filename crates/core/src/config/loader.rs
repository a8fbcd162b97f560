use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::Path;

use super::{types::Config, ConfigError};

/// Load configuration from file with environment variable overrides
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.display().to_string()));
    }

    let config: Config = Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed("HARPOON_").split("_"))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_from_str_valid() {
        let toml = r#"
[backend]
url = "http://localhost:9117"
api_key = "secret"

[search]
automatic_deadline_secs = 15
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.backend.url, "http://localhost:9117");
        assert_eq!(config.search.automatic_deadline_secs, 15);
        // Unset sections fall back to defaults
        assert_eq!(config.search.interactive_deadline_secs, 90);
        assert!(config.preferences.tags.is_empty());
    }

    #[test]
    fn test_load_config_from_str_missing_backend() {
        let toml = r#"
[search]
automatic_deadline_secs = 15
"#;
        let result = load_config_from_str(toml);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[backend]
url = "http://jackett.local:9117"
api_key = "secret"
timeout_secs = 10

[[preferences.tv_quality]]
name = "1080p"
score = 100
keywords = ["1080p"]

[[preferences.tags]]
name = "SPARKS"
score = 50
"#
        )
        .unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.backend.timeout_secs, 10);
        assert_eq!(config.preferences.tv_quality.len(), 1);
        assert_eq!(config.preferences.tags[0].name, "SPARKS");
    }
}
