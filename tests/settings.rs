use mu_painter::settings::Settings;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().expect("utf-8 path")).expect("load");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.window_title, "MUpainter");
    assert!(!settings.debug_logging);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "debug_logging": true }"#).expect("write");

    let settings = Settings::load(path.to_str().expect("utf-8 path")).expect("load");
    assert!(settings.debug_logging);
    assert_eq!(settings.window_title, "MUpainter");
}

#[test]
fn blank_title_falls_back_to_default() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "window_title": "  " }"#).expect("write");

    let settings = Settings::load(path.to_str().expect("utf-8 path")).expect("load");
    assert_eq!(settings.window_title, "MUpainter");
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").expect("write");

    assert!(Settings::load(path.to_str().expect("utf-8 path")).is_err());
}

#[test]
fn unreadable_file_is_an_error_not_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, [0xFF, 0xFE, b'{', b'}']).expect("write");

    let err = Settings::load(path.to_str().expect("utf-8 path")).expect_err("invalid utf-8");
    assert!(format!("{err:#}").contains("read settings"), "{err:#}");
}

#[test]
fn directory_path_is_an_error() {
    let dir = tempdir().expect("temp dir");
    assert!(Settings::load(dir.path().to_str().expect("utf-8 path")).is_err());
}
