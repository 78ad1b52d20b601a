//! Tests for the CareerTech configuration system.

use std::sync::Mutex;

use careertech_core::config::{CareerTechConfig, CliOverrides};
use careertech_core::constants::{DEFAULT_CHAT_MODEL, DEFAULT_REFUSAL_MESSAGE};
use careertech_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CAREERTECH_ env vars to prevent cross-test contamination.
fn clear_env_vars() {
    for key in [
        "CAREERTECH_DB_PATH",
        "CAREERTECH_READ_POOL_SIZE",
        "CAREERTECH_GATE_FEATURE",
        "CAREERTECH_CHAT_API_KEY",
        "CAREERTECH_CHAT_BASE_URL",
        "CAREERTECH_CHAT_MODEL",
        "CAREERTECH_CHAT_TEMPERATURE",
        "CAREERTECH_CHAT_TIMEOUT_SECS",
        "GROQ_API_KEY",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("careertech.toml"),
        r#"
[storage]
db_path = "project.db"
read_pool_size = 2

[chat]
model = "project-model"
temperature = 0.2
"#,
    )
    .unwrap();

    std::env::set_var("CAREERTECH_CHAT_MODEL", "env-model");

    let cli = CliOverrides {
        db_path: Some("cli.db".into()),
        ..Default::default()
    };

    let config = CareerTechConfig::load(dir.path(), Some(&cli)).unwrap();
    clear_env_vars();

    // CLI beats project
    assert_eq!(config.storage.effective_db_path().to_str(), Some("cli.db"));
    // env beats project
    assert_eq!(config.chat.effective_model(), "env-model");
    // project beats defaults
    assert_eq!(config.storage.effective_read_pool_size(), 2);
    assert!((config.chat.effective_temperature() - 0.2).abs() < f64::EPSILON);
}

#[test]
fn test_defaults_without_files() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    let config = CareerTechConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.chat.effective_model(), DEFAULT_CHAT_MODEL);
    assert!(!config.chat.is_configured());
    assert_eq!(config.gate.effective_refusal_message(), DEFAULT_REFUSAL_MESSAGE);
    assert_eq!(
        config.gate.effective_feature().unwrap().as_str(),
        "ai_mentor_chat"
    );
}

#[test]
fn test_provider_key_env_var_configures_chat() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    std::env::set_var("GROQ_API_KEY", "gsk_test");
    let dir = tempdir();
    let config = CareerTechConfig::load(dir.path(), None).unwrap();
    clear_env_vars();

    assert!(config.chat.is_configured());
    assert_eq!(config.chat.api_key.as_deref(), Some("gsk_test"));
}

#[test]
fn test_validation_rejects_bad_values() {
    let bad_temp = CareerTechConfig::from_toml("[chat]\ntemperature = 3.5\n").unwrap();
    assert!(matches!(
        CareerTechConfig::validate(&bad_temp),
        Err(ConfigError::ValidationFailed { .. })
    ));

    let bad_pool = CareerTechConfig::from_toml("[storage]\nread_pool_size = 0\n").unwrap();
    assert!(CareerTechConfig::validate(&bad_pool).is_err());

    let bad_feature = CareerTechConfig::from_toml("[gate]\nfeature = \"Free Chat\"\n").unwrap();
    assert!(matches!(
        CareerTechConfig::validate(&bad_feature),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_invalid_project_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("careertech.toml"), "[chat\nmodel = ").unwrap();
    let result = CareerTechConfig::load(dir.path(), None);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_toml_round_trip_preserves_values() {
    let config = CareerTechConfig::from_toml(
        r#"
[gate]
refusal_message = "Trial over."

[chat]
timeout_secs = 10
"#,
    )
    .unwrap();
    let text = config.to_toml().unwrap();
    let back = CareerTechConfig::from_toml(&text).unwrap();
    assert_eq!(back.gate.effective_refusal_message(), "Trial over.");
    assert_eq!(back.chat.effective_timeout_secs(), 10);
}
