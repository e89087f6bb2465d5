use docchat::config::{Config, load_from_path, save_to_path};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_valid() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let config_content = r#"
        [backend]
        base_url = "http://docchat.internal:8000"
        timeout_secs = 120

        [upload]
        max_file_size_mb = 10
        allowed_types = [".pdf", ".txt"]
    "#;
    temp_file.write_all(config_content.as_bytes()).unwrap();

    let config = load_from_path(temp_file.path()).expect("Failed to load valid config");

    assert_eq!(config.backend.base_url, "http://docchat.internal:8000");
    assert_eq!(config.backend.timeout_secs, 120);
    assert_eq!(config.upload.max_file_size_mb, 10);
    assert_eq!(config.upload.allowed_types, vec![".pdf", ".txt"]);
}

#[test]
fn test_empty_config_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"").unwrap();

    let config = load_from_path(temp_file.path()).expect("Empty config should fall to defaults");

    assert_eq!(config.backend.base_url, "http://localhost:8000");
    assert_eq!(config.backend.timeout_secs, 300);
    assert_eq!(config.upload.max_file_size_mb, 50);
    assert_eq!(
        config.upload.allowed_types,
        vec![".txt", ".pdf", ".docx", ".md"]
    );
    assert!(config.state.state_dir_override.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[backend]\nbase_url = \"https://docs.example.com\"\n")
        .unwrap();

    let config = load_from_path(temp_file.path()).unwrap();
    assert_eq!(config.backend.base_url, "https://docs.example.com");
    assert_eq!(config.backend.timeout_secs, 300);
    assert_eq!(config.upload.max_file_size_mb, 50);
}

#[test]
fn test_save_and_reload_round_trip() {
    let temp_file = NamedTempFile::new().unwrap();

    let mut config = Config::default();
    config.backend.timeout_secs = 42;
    config.upload.allowed_types = vec![".md".to_string()];
    save_to_path(&config, temp_file.path()).unwrap();

    let reloaded = load_from_path(temp_file.path()).unwrap();
    assert_eq!(reloaded.backend.timeout_secs, 42);
    assert_eq!(reloaded.upload.allowed_types, vec![".md"]);
}

#[test]
fn test_zero_timeout_fails_validation() {
    let mut config = Config::default();
    config.backend.timeout_secs = 0;
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
}

#[test]
fn test_empty_allowed_types_fails_validation() {
    let mut config = Config::default();
    config.upload.allowed_types.clear();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("allowed_types"));
}

#[test]
fn test_extension_without_dot_fails_validation() {
    let mut config = Config::default();
    config.upload.allowed_types = vec!["pdf".to_string()];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("must start with a dot"));
}

#[test]
fn test_zero_max_size_fails_validation() {
    let mut config = Config::default();
    config.upload.max_file_size_mb = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_non_http_base_url_fails_validation() {
    let mut config = Config::default();
    config.backend.base_url = "ftp://example.com".to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("http"));
}
