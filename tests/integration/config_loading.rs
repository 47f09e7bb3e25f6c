//! Integration tests for configuration discovery

use fitplan::config::{user_config_path, ConfigLoader, DEFAULT_MODEL};
use std::fs;
use tempfile::TempDir;

use crate::integration::with_xdg_env;

#[test]
fn test_user_config_file_is_discovered() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let path = user_config_path().unwrap();
        assert!(path.starts_with(test_dir.path().join("config")));

        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(
            &path,
            "[provider]\nmodel = \"llama-3.1-8b-instant\"\nmax_tokens = 2048\n",
        )
        .unwrap();

        let config = ConfigLoader::load(None).unwrap();
        assert_eq!(config.provider.model, "llama-3.1-8b-instant");
        assert_eq!(config.provider.max_tokens, Some(2048));
    });
}

#[test]
fn test_defaults_without_any_config_file() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let config = ConfigLoader::load(None).unwrap();
        assert_eq!(config.provider.model, DEFAULT_MODEL);
        assert_eq!(config.logging.output, "stderr");
    });
}

#[test]
fn test_explicit_file_wins_over_user_file() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let user_path = user_config_path().unwrap();
        fs::create_dir_all(user_path.parent().unwrap()).unwrap();
        fs::write(&user_path, "[provider]\nmodel = \"from-user-file\"\n").unwrap();

        let explicit = test_dir.path().join("explicit.toml");
        fs::write(&explicit, "[provider]\nmodel = \"from-explicit-file\"\n").unwrap();

        let config = ConfigLoader::load(Some(&explicit)).unwrap();
        assert_eq!(config.provider.model, "from-explicit-file");
    });
}
