#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use vrata::api::insight::{InsightConfig, DEFAULT_API_URL, DEFAULT_MODEL};
    use vrata::libs::config::Config;

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_returns_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.insight.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            insight: Some(InsightConfig {
                api_url: "https://proxy.example.com".to_string(),
                model: "test-model".to_string(),
                api_key: Some("secret".to_string()),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.insight, config.insight);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_remove_is_idempotent(_ctx: &mut ConfigTestContext) {
        // Nothing saved yet
        Config::remove().unwrap();

        Config::default().save().unwrap();
        Config::remove().unwrap();
        assert!(Config::read().unwrap().insight.is_none());
    }

    #[test]
    fn test_insight_config_defaults() {
        let config = InsightConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_none());
    }
}
