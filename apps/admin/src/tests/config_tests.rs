use super::*;

use std::{
    collections::HashMap,
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn no_env(_: &str) -> Option<String> {
    None
}

fn temp_config(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("member_admin_config_test_{suffix}.toml"));
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_point_at_public_member_feed() {
    let settings = Settings::default();
    assert_eq!(
        settings.source,
        MemberSourceConfig::Http(DEFAULT_SOURCE_URL.to_string())
    );
    assert_eq!(settings.page_size, 10);
    settings.validate().expect("defaults are valid");
}

#[test]
fn missing_config_file_keeps_defaults() {
    let path = env::temp_dir().join("member_admin_config_test_absent.toml");
    let settings = load_settings_with(&path, no_env).expect("load");
    assert_eq!(settings, Settings::default());
}

#[test]
fn file_values_override_defaults() {
    let path = temp_config("source_url = \"http://127.0.0.1:9000/members.json\"\npage_size = 25\n");

    let settings = load_settings_with(&path, no_env).expect("load");
    assert_eq!(
        settings.source,
        MemberSourceConfig::Http("http://127.0.0.1:9000/members.json".to_string())
    );
    assert_eq!(settings.page_size, 25);

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn malformed_config_file_is_an_error() {
    let path = temp_config("page_size = \"ten\"\n");

    let err = load_settings_with(&path, no_env).expect_err("must fail");
    assert!(err.to_string().contains("invalid config file"), "{err:#}");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn env_overrides_file_and_ignores_bad_page_size() {
    let path = temp_config("page_size = 25\n");
    let vars = HashMap::from([
        ("APP__SOURCE_FILE", "./members.json"),
        ("APP__PAGE_SIZE", "lots"),
    ]);

    let settings =
        load_settings_with(&path, |key| vars.get(key).map(|v| v.to_string())).expect("load");
    assert_eq!(
        settings.source,
        MemberSourceConfig::File(PathBuf::from("./members.json"))
    );
    assert_eq!(settings.page_size, 25);

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn cli_overrides_everything() {
    let mut settings = Settings::default();
    settings.apply_cli(Some("http://localhost:8080/m.json".to_string()), None, Some(5));

    assert_eq!(
        settings.source,
        MemberSourceConfig::Http("http://localhost:8080/m.json".to_string())
    );
    assert_eq!(settings.page_size, 5);
}

#[test]
fn validate_rejects_zero_page_size_and_bad_urls() {
    let mut settings = Settings::default();
    settings.page_size = 0;
    assert!(settings.validate().is_err());

    let settings = Settings {
        source: MemberSourceConfig::Http("file:///tmp/members.json".to_string()),
        page_size: 10,
    };
    assert!(settings.validate().is_err());

    let settings = Settings {
        source: MemberSourceConfig::File(PathBuf::from("members.json")),
        page_size: 10,
    };
    settings.validate().expect("file sources skip url checks");
}
