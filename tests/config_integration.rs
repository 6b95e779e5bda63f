// SPDX-License-Identifier: MPL-2.0
use lastkings_ui::config::{self, Config, MessageBoxConfig, StatusConfig};
use lastkings_ui::ui::context::UiContext;
use std::fs;
use tempfile::tempdir;

#[test]
fn saved_settings_shape_the_ui_context() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let saved = Config {
        message_box: MessageBoxConfig {
            focus_delay_ms: Some(250),
        },
        status: StatusConfig {
            enabled: Some(false),
        },
        ..Config::default()
    };
    let content = toml::to_string_pretty(&saved).expect("Failed to serialize config");
    fs::write(dir.path().join("settings.toml"), content).expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, saved);

    let mut ui: UiContext<()> = UiContext::new(&loaded);
    assert!(!ui.update_status("Ready"));
}

#[test]
fn unreadable_settings_fall_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[flash\nfade_delay_ms = ")
        .expect("Failed to write broken config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert!(warning.is_some());
}

#[test]
fn missing_settings_use_defaults_silently() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, Config::default());
    assert!(warning.is_none());
}
