use shopfront_runtime::{Config, FileStore, OpenOptions, Shopfront, THEME_KEY};
use shopfront_types::{ProductId, Theme};
use tempfile::TempDir;

#[test]
fn test_open_with_defaults_creates_nothing_until_write() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join(".shopfront");

    let shopfront = Shopfront::open(&data_dir, OpenOptions::default()).unwrap();

    assert_eq!(shopfront.preferences().theme(), Theme::Light);
    assert!(shopfront.preferences().favorites().is_empty());
    assert!(!data_dir.join(FileStore::FILE_NAME).exists());
}

#[test]
fn test_preferences_persist_between_sessions() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path();

    {
        let mut shopfront = Shopfront::open(data_dir, OpenOptions::default()).unwrap();
        shopfront.preferences_mut().toggle_theme();
        shopfront.preferences_mut().toggle_favorite(ProductId::new(3));
    }

    let shopfront = Shopfront::open(data_dir, OpenOptions::default()).unwrap();
    assert_eq!(shopfront.preferences().theme(), Theme::Dark);
    assert!(shopfront.preferences().is_favorite(ProductId::new(3)));

    let raw = std::fs::read_to_string(data_dir.join(FileStore::FILE_NAME)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[THEME_KEY], "dark");
    assert_eq!(json["favorites"], "[3]");
}

#[test]
fn test_corrupt_preferences_file_starts_over() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(FileStore::FILE_NAME), "][").unwrap();

    let mut shopfront = Shopfront::open(temp_dir.path(), OpenOptions::default()).unwrap();
    assert_eq!(shopfront.preferences().theme(), Theme::Light);

    shopfront.preferences_mut().toggle_theme();
    let reopened = Shopfront::open(temp_dir.path(), OpenOptions::default()).unwrap();
    assert_eq!(reopened.preferences().theme(), Theme::Dark);
}

#[test]
fn test_invalid_base_url_in_config_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        Config::path_in(temp_dir.path()),
        "[catalog]\nbase_url = \"ftp://example.com\"\n",
    )
    .unwrap();

    assert!(Shopfront::open(temp_dir.path(), OpenOptions::default()).is_err());
}

#[test]
fn test_explicit_base_url_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        Config::path_in(temp_dir.path()),
        "[catalog]\nbase_url = \"http://config.example\"\n",
    )
    .unwrap();

    let shopfront = Shopfront::open(
        temp_dir.path(),
        OpenOptions {
            base_url: Some("not a url".to_string()),
            timeout_secs: None,
        },
    );
    assert!(shopfront.is_err());
}
