use super::*;
use std::io::Write;
use std::sync::{Mutex, MutexGuard};

// Parsing reads CREDCACHE_TEMP_MODE, so every test that parses holds this
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Runs `f` with the temp-mode variable set (or unset) and restores it after.
fn with_temp_mode_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
    let _lock = env_lock();
    let previous = std::env::var(ENV_TEMP_MODE).ok();
    match value {
        Some(v) => std::env::set_var(ENV_TEMP_MODE, v),
        None => std::env::remove_var(ENV_TEMP_MODE),
    }

    let result = f();

    match previous {
        Some(v) => std::env::set_var(ENV_TEMP_MODE, v),
        None => std::env::remove_var(ENV_TEMP_MODE),
    }
    result
}

#[test]
fn test_default_config() {
    let config = CacheConfig::default();
    assert!(!config.start_in_temp_mode);
    assert_eq!(config.default_policy, OverwritePolicy::Overwrite);
    assert_eq!(config.client_queue_capacity, DEFAULT_CLIENT_QUEUE_CAPACITY);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_env_flag() {
    assert_eq!(parse_env_flag("1"), Some(true));
    assert_eq!(parse_env_flag(" TRUE "), Some(true));
    assert_eq!(parse_env_flag("0"), Some(false));
    assert_eq!(parse_env_flag("false"), Some(false));
    assert_eq!(parse_env_flag("yes"), None);
    assert_eq!(parse_env_flag(""), None);
}

#[test]
fn test_from_toml_str() {
    let config = with_temp_mode_env(None, || {
        CacheConfig::from_toml_str(
            r#"
            start_in_temp_mode = true
            default_policy = "insert_if_absent"
            client_queue_capacity = 8
            "#,
        )
        .unwrap()
    });

    assert!(config.start_in_temp_mode);
    assert_eq!(config.default_policy, OverwritePolicy::InsertIfAbsent);
    assert_eq!(config.client_queue_capacity, 8);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = with_temp_mode_env(None, || CacheConfig::from_toml_str("").unwrap());
    assert_eq!(config, CacheConfig::default());
}

#[test]
fn test_env_overrides_file_value() {
    let forced_on =
        with_temp_mode_env(Some("1"), || CacheConfig::from_toml_str("start_in_temp_mode = false"))
            .unwrap();
    assert!(forced_on.start_in_temp_mode);

    let forced_off =
        with_temp_mode_env(Some("false"), || CacheConfig::from_toml_str("start_in_temp_mode = true"))
            .unwrap();
    assert!(!forced_off.start_in_temp_mode);

    let no_key = with_temp_mode_env(Some("true"), || CacheConfig::from_toml_str("")).unwrap();
    assert!(no_key.start_in_temp_mode);
}

#[test]
fn test_unrecognized_env_value_keeps_file_value() {
    let config =
        with_temp_mode_env(Some("maybe"), || CacheConfig::from_toml_str("start_in_temp_mode = true"))
            .unwrap();
    assert!(config.start_in_temp_mode);
}

#[test]
fn test_invalid_toml() {
    let _lock = env_lock();
    let err = CacheConfig::from_toml_str("default_policy = \"sometimes\"").unwrap_err();
    assert!(matches!(err, CacheError::Configuration(_)));

    let err = CacheConfig::from_toml_str("client_queue_capacity = 0").unwrap_err();
    assert!(err.to_string().contains("client_queue_capacity"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "start_in_temp_mode = true").unwrap();
    writeln!(file, "client_queue_capacity = 16").unwrap();

    let config = with_temp_mode_env(None, || CacheConfig::load_from_file(file.path())).unwrap();
    assert!(config.start_in_temp_mode);
    assert_eq!(config.client_queue_capacity, 16);
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = CacheConfig::load_from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap_err();
    assert!(matches!(err, CacheError::Configuration(_)));
}

#[test]
fn test_load_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join(CONFIG_FILE_NAME);

    let config = with_temp_mode_env(None, || CacheConfig::load_or_default(&missing));
    assert_eq!(config, CacheConfig::default());

    // Env still applies when no file exists
    let config = with_temp_mode_env(Some("1"), || CacheConfig::load_or_default(&missing));
    assert!(config.start_in_temp_mode);
}

#[test]
fn test_load_falls_back_on_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "client_queue_capacity = 0").unwrap();

    let config = with_temp_mode_env(None, || CacheConfig::load_or_default(file.path()));
    assert_eq!(config, CacheConfig::default());
}

#[test]
fn test_load_reads_existing_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_policy = \"insert_if_absent\"").unwrap();

    let config = with_temp_mode_env(None, || CacheConfig::load_or_default(file.path()));
    assert_eq!(config.default_policy, OverwritePolicy::InsertIfAbsent);
}

#[test]
fn test_load_never_fails() {
    // Whatever ~/.credcache holds, load() yields a valid config
    let config = with_temp_mode_env(None, CacheConfig::load);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_round_trip() {
    let config = CacheConfig {
        start_in_temp_mode: true,
        default_policy: OverwritePolicy::InsertIfAbsent,
        client_queue_capacity: 4,
    };
    let text = toml::to_string_pretty(&config).unwrap();
    assert!(text.contains("insert_if_absent"));
    let parsed = with_temp_mode_env(None, || CacheConfig::from_toml_str(&text)).unwrap();
    assert_eq!(parsed, config);
}
