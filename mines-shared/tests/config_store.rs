#[cfg(test)]
mod tests {
    use mines_shared::config::ConfigStore;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct SystemConfig {
        log_path: String,
        log_level: String,
    }

    #[test]
    fn test_section() {
        let store = ConfigStore::parse(
            r#"
            [system]
            log_path = "logs/"
            log_level = "debug"
            "#,
        );
        let sys: SystemConfig = store.get("system");
        assert_eq!(sys.log_level, "debug");
        assert_eq!(sys.log_path, "logs/");
        assert!(store.contains("system"));
    }

    #[test]
    fn test_missing_and_mismatch() {
        let store = ConfigStore::parse("system = 3\n");
        let sys: SystemConfig = store.get("system");
        assert_eq!(sys, SystemConfig::default());

        let other: SystemConfig = store.get("window");
        assert_eq!(other, SystemConfig::default());
    }

    #[test]
    fn test_syntax_error_falls_back() {
        let store = ConfigStore::parse("[system\nlog_level = ");
        assert!(!store.contains("system"));
    }

    #[test]
    fn test_missing_file() {
        let store = ConfigStore::load("definitely/not/here.toml").unwrap();
        let sys: SystemConfig = store.get("system");
        assert_eq!(sys, SystemConfig::default());
    }
}
