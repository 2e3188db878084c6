//! Tests for layered Settings loading

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;

use rsplan::config::Settings;

// Env manipulation is process-global; serialize the tests touching it.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[test]
fn given_global_config_file_when_loading_then_default_catalog_set() {
    let _guard = ENV_LOCK.lock().unwrap();
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("rsplan.toml");
    fs::write(&config_path, "default_catalog = \"/data/courses.csv\"\n").unwrap();

    let settings = Settings::load_from(Some(&config_path)).expect("load settings");

    assert_eq!(
        settings.default_catalog,
        Some(PathBuf::from("/data/courses.csv"))
    );
}

#[test]
fn given_env_var_when_loading_then_overrides_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("rsplan.toml");
    fs::write(&config_path, "default_catalog = \"/data/from-file.csv\"\n").unwrap();

    std::env::set_var("RSPLAN_DEFAULT_CATALOG", "/data/from-env.csv");
    let settings = Settings::load_from(Some(&config_path)).expect("load settings");
    std::env::remove_var("RSPLAN_DEFAULT_CATALOG");

    assert_eq!(
        settings.default_catalog,
        Some(PathBuf::from("/data/from-env.csv"))
    );
}

#[test]
fn given_no_sources_when_loading_then_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    let settings = Settings::load_from(None).expect("load settings");
    assert!(settings.default_catalog.is_none());
}
