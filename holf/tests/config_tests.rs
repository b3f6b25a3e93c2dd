use holf::config::{ConfigError, HolfConfig, OutputFormat};
use holf::runtime::ExpandPolicy;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_defaults() {
    let config = HolfConfig::default();

    assert_eq!(config.expand.limit, 10);
    assert_eq!(config.output.format, OutputFormat::Plain);
    assert_eq!(config.expand_policy(), ExpandPolicy::Infinite);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = HolfConfig::from_toml_str(
        r#"
        [expand]
        policy = "stop-on-nil"
        "#,
    )
    .unwrap();

    assert_eq!(config.expand.limit, 10);
    assert_eq!(config.expand_policy(), ExpandPolicy::StopOnNil);
    assert_eq!(config.output.format, OutputFormat::Plain);
}

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("holf.toml");
    fs::write(
        &path,
        "[expand]\nlimit = 25\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();

    let config = HolfConfig::load(&path).unwrap();

    assert_eq!(config.expand.limit, 25);
    assert_eq!(config.output.format, OutputFormat::Json);
}

#[test]
fn test_discover_finds_nested_config() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    fs::write(dir.path().join("config/holf.toml"), "[expand]\nlimit = 3\n").unwrap();

    let (path, config) = HolfConfig::discover(dir.path()).unwrap();

    assert_eq!(path, Some(dir.path().join("config/holf.toml")));
    assert_eq!(config.expand.limit, 3);
}

#[test]
fn test_discover_without_file_uses_defaults() {
    let dir = tempdir().unwrap();

    let (path, config) = HolfConfig::discover(dir.path()).unwrap();

    assert_eq!(path, None);
    assert_eq!(config, HolfConfig::default());
}

#[test]
fn test_invalid_configs_are_rejected() {
    assert!(matches!(
        HolfConfig::from_toml_str("[expand]\nlimit = 0\n"),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        HolfConfig::from_toml_str("[output]\nformat = \"yaml\"\n"),
        Err(ConfigError::Parse { .. })
    ));
    assert!(matches!(
        HolfConfig::from_toml_str("[expand]\npolicy = \"stop_on_nil\"\n"),
        Err(ConfigError::Parse { .. })
    ));
    assert!(matches!(
        HolfConfig::load(std::path::Path::new("/definitely/missing/holf.toml")),
        Err(ConfigError::Io { .. })
    ));
}
