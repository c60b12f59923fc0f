#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard, PoisonError};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tydo::libs::config::{Config, DisplayConfig};
    use tydo::libs::sort::SortMode;

    // HOME/LOCALAPPDATA are process-global; holding the guard for the
    // lifetime of the context keeps these tests from racing each other.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_as_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert!(config.display.is_none());
        assert_eq!(config.default_sort(), SortMode::IncompleteFirst);
        assert_eq!(config.description_width(), 50);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            display: Some(DisplayConfig {
                default_sort: "B".to_string(),
                description_width: 30,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.default_sort(), SortMode::CreatedAsc);
        assert_eq!(loaded.description_width(), 30);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_set_default_sort_persists(_ctx: &mut ConfigTestContext) {
        let mut config = Config::read().unwrap();
        config.set_default_sort(SortMode::CreatedDesc).unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.default_sort(), SortMode::CreatedDesc);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unrecognized_sort_code_falls_back_to_default(_ctx: &mut ConfigTestContext) {
        let config = Config {
            display: Some(DisplayConfig {
                default_sort: "Z".to_string(),
                description_width: 50,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.default_sort(), SortMode::IncompleteFirst);
    }
}
