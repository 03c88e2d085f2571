//! Environment variable tests for the configuration loader.

use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;

#[test]
#[serial]
fn test_base_url_from_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var(
        "WEBUI_API_BASE_URL",
        Some("https://webui.example.com/api/v1/"),
        || {
            let config = ConfigLoader::new().from_env().build().unwrap();
            assert_eq!(config.base_url, "https://webui.example.com/api/v1");
        },
    );
}

#[test]
#[serial]
fn test_explicit_base_url_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var(
        "WEBUI_API_BASE_URL",
        Some("https://env.example.com/api/v1"),
        || {
            let config = ConfigLoader::new()
                .from_env()
                .with_base_url("https://explicit.example.com/api/v1")
                .build()
                .unwrap();
            assert_eq!(config.base_url, "https://explicit.example.com/api/v1");
        },
    );
}

#[test]
#[serial]
fn test_empty_env_var_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("WEBUI_API_BASE_URL", Some("   "), || {
        let loader = ConfigLoader::new().from_env();
        assert!(loader.base_url().is_none());
        assert!(matches!(loader.build(), Err(ConfigError::MissingBaseUrl)));
    });
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("ROLES_CONFIG_TEST_VAR", Some("  value  "), || {
        assert_eq!(
            env_var_or_none("ROLES_CONFIG_TEST_VAR"),
            Some("value".to_string())
        );
    });

    temp_env::with_var("ROLES_CONFIG_TEST_VAR", None::<&str>, || {
        assert_eq!(env_var_or_none("ROLES_CONFIG_TEST_VAR"), None);
    });
}
