//! Theme and favorites persist in `preferences.json` across invocations.

use shopfront_testing::TestWorld;

#[test]
fn test_theme_defaults_to_light() {
    let world = TestWorld::new();
    let result = world.run(&["theme", "show", "--format", "json"]).unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let json = result.json().unwrap();
    assert_eq!(json["content"]["theme"], "light");
    assert_eq!(json["content"]["toggle_glyph"], "🌙");
    // Reading never writes
    assert!(world.preferences().is_none());
}

#[test]
fn test_theme_toggle_persists() {
    let world = TestWorld::new();

    let result = world.run(&["theme", "toggle", "--format", "json"]).unwrap();
    assert!(result.success());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["theme"], "dark");
    assert_eq!(json["content"]["previous"], "light");
    assert_eq!(world.preferences().unwrap()["theme"], "dark");

    let result = world.run(&["theme", "show"]).unwrap();
    assert!(result.stdout().contains("dark ☀️"));

    world.run(&["theme", "toggle"]).unwrap();
    assert_eq!(world.preferences().unwrap()["theme"], "light");
}

#[test]
fn test_favorite_toggle_round_trip() {
    let world = TestWorld::new();

    let result = world
        .run(&["favorites", "toggle", "3", "--format", "json"])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json().unwrap();
    assert_eq!(json["content"]["favorite"], true);
    assert_eq!(json["content"]["total"], 1);
    assert_eq!(world.preferences().unwrap()["favorites"], "[3]");

    world.run(&["favorites", "toggle", "1"]).unwrap();
    let result = world.run(&["favorites", "list", "--format", "json"]).unwrap();
    assert_eq!(
        result.json().unwrap()["content"]["ids"],
        serde_json::json!([1, 3])
    );

    let result = world.run(&["favorites", "toggle", "3"]).unwrap();
    assert!(result.stdout().contains("Removed product 3 from favorites"));
    assert_eq!(world.preferences().unwrap()["favorites"], "[1]");
}

#[test]
fn test_favorites_empty_list() {
    let world = TestWorld::new();
    let result = world.run(&["favorites", "list"]).unwrap();
    assert!(result.success());
    assert!(result.stdout().contains("No favorites yet."));
}

#[test]
fn test_favorite_toggle_rejects_bad_id() {
    let world = TestWorld::new();
    let result = world.run(&["favorites", "toggle", "abc"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("Invalid product id"));
    assert!(world.preferences().is_none());
}

#[test]
fn test_show_reflects_favorite() {
    let world = TestWorld::with_sample_catalog();
    world.run(&["favorites", "toggle", "5"]).unwrap();

    let result = world.run(&["show", "5", "--format", "json"]).unwrap();
    let json = result.json().unwrap();
    assert_eq!(json["content"]["favorite"], true);
    assert_eq!(json["content"]["favorite_glyph"], "❤️");
}

#[test]
fn test_corrupt_preferences_are_replaced() {
    let world = TestWorld::new();
    std::fs::write(world.data_dir().join("preferences.json"), "{ broken").unwrap();

    let result = world.run(&["theme", "show", "--format", "json"]).unwrap();
    assert!(result.success());
    assert_eq!(result.json().unwrap()["content"]["theme"], "light");

    world.run(&["theme", "toggle"]).unwrap();
    assert_eq!(world.preferences().unwrap()["theme"], "dark");
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new();
    world
        .write_config("[catalog]\nbase_url = \"ftp://catalog\"\n")
        .unwrap();

    let result = world.run(&["theme", "show"]).unwrap();
    assert!(!result.success());
    assert!(result.stderr().contains("failed to open"));
}
