use super::*;

use std::collections::HashMap;

#[test]
fn empty_file_yields_defaults() {
    let settings = Settings::from_toml_str("").expect("parse");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.mobile_breakpoint, 768);
}

#[test]
fn file_keys_override_defaults() {
    let raw = r#"
        mobile_breakpoint = 900
        initial_width = 375
        sort_field = "lastActive"
        sort_direction = "desc"
        menu_item = "analytics"
        time_range = "30d"
    "#;
    let settings = Settings::from_toml_str(raw).expect("parse");
    assert_eq!(settings.mobile_breakpoint, 900);
    assert_eq!(settings.initial_width, 375);
    assert_eq!(settings.initial_height, 768);
    assert_eq!(settings.default_sort_field, SortField::LastActive);
    assert_eq!(settings.default_sort_direction, SortDirection::Desc);
    assert_eq!(settings.default_menu_item, MenuItemId::Analytics);
    assert_eq!(settings.default_time_range, TimeRange::ThirtyDays);
}

#[test]
fn unknown_sort_field_in_file_is_an_error() {
    let err = Settings::from_toml_str("sort_field = \"salary\"").expect_err("invalid");
    assert!(matches!(
        err,
        ConfigError::Invalid {
            key: "sort_field",
            ..
        }
    ));
}

#[test]
fn zero_breakpoint_is_rejected() {
    assert!(Settings::from_toml_str("mobile_breakpoint = 0").is_err());
}

#[test]
fn env_overrides_skip_bad_values() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("APP__INITIAL_WIDTH", "600"),
        ("APP__SORT_FIELD", "nope"),
        ("APP__MENU_ITEM", "users"),
        ("APP__MOBILE_BREAKPOINT", "0"),
    ]);
    let mut settings = Settings::default();
    settings.apply_env_overrides(|key| env.get(key).map(|v| v.to_string()));

    assert_eq!(settings.initial_width, 600);
    assert_eq!(settings.default_sort_field, SortField::Name);
    assert_eq!(settings.default_menu_item, MenuItemId::Users);
    assert_eq!(settings.mobile_breakpoint, 768);
}

#[test]
fn loads_settings_file_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dashboard.toml");
    fs::write(&path, "double_tap_window_ms = 250\n").expect("write settings");

    let settings = load_settings_from(&path);
    assert_eq!(settings.double_tap_window_ms, 250);
}

#[test]
fn malformed_settings_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("dashboard.toml");
    fs::write(&path, "mobile_breakpoint = \"wide\"\n").expect("write settings");

    let settings = load_settings_from(&path);
    assert_eq!(settings.mobile_breakpoint, Settings::default().mobile_breakpoint);
}

#[test]
fn missing_settings_file_is_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let settings = load_settings_from(&dir.path().join("absent.toml"));
    assert_eq!(settings.mobile_breakpoint, 768);
}

#[test]
fn unreadable_settings_path_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let as_directory = dir.path().join("dashboard.toml");
    fs::create_dir(&as_directory).expect("create dir");
    assert_eq!(load_settings_from(&as_directory).initial_width, 1024);

    let not_utf8 = dir.path().join("binary.toml");
    fs::write(&not_utf8, [0xff, 0xfe, 0x00]).expect("write settings");
    assert_eq!(load_settings_from(&not_utf8).mobile_breakpoint, 768);
}
