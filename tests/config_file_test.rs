use chrono::{TimeZone, Utc};
use slotbook::{ScheduleConfigProvider, TomlConfig};
use tempfile::TempDir;

#[test]
fn test_load_config_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("slotbook.toml");
    std::fs::write(
        &path,
        r#"
[schedule]
window_start = "2024-01-01T09:00:00Z"
window_end = "2024-01-01T12:00:00Z"
granularity_minutes = 30

[notifier]
endpoint = "https://hooks.example.com/bookings"
"#,
    )
    .unwrap();

    let config = TomlConfig::from_file(&path).unwrap();
    let window = config.window().unwrap();
    assert_eq!(
        window.start,
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    );
    assert_eq!(
        window.end,
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    );
    assert_eq!(window.granularity_minutes(), 30);
    assert_eq!(
        config.notify_endpoint(),
        Some("https://hooks.example.com/bookings")
    );
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");
    assert!(TomlConfig::from_file(&path).is_err());
}
