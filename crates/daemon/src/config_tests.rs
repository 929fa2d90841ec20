// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn config_in(dir: &std::path::Path) -> Config {
    Config {
        state_dir: dir.to_path_buf(),
        socket_path: dir.join("daemon.sock"),
        lock_path: dir.join("daemon.pid"),
        log_path: dir.join("daemon.log"),
        supervisor_config_path: dir.join("config.toml"),
        preferences_path: dir.join("preferences.json"),
        target_process_name: "TargetIDE".to_string(),
    }
}

#[tokio::test]
async fn missing_supervisor_config_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let supervisor_config = config.load_supervisor_config().await.unwrap();
    assert_eq!(supervisor_config, SupervisorConfig::default());
}

#[tokio::test]
async fn partial_toml_file_merges_over_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(
        &config.supervisor_config_path,
        "max_interventions_per_positive = 9\n",
    )
    .unwrap();

    let supervisor_config = config.load_supervisor_config().await.unwrap();
    assert_eq!(supervisor_config.max_interventions_per_positive, 9);
    assert_eq!(
        supervisor_config.max_connection_resume_clicks,
        SupervisorConfig::default().max_connection_resume_clicks
    );
}

#[tokio::test]
async fn malformed_toml_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    std::fs::write(&config.supervisor_config_path, "not valid toml [[[").unwrap();

    assert!(config.load_supervisor_config().await.is_err());
}

#[test]
fn derived_paths_sit_under_the_state_dir() {
    // Mirrors Config::load()'s path derivation without touching process-global
    // env state (env::set_var mutation isn't safe to exercise in a parallel
    // test binary, and this crate denies unsafe code outright).
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    assert_eq!(config.socket_path, dir.path().join("daemon.sock"));
    assert_eq!(config.lock_path, dir.path().join("daemon.pid"));
    assert_eq!(config.log_path, dir.path().join("daemon.log"));
    assert_eq!(config.supervisor_config_path, dir.path().join("config.toml"));
    assert_eq!(config.preferences_path, dir.path().join("preferences.json"));
}
