use crate::*;

#[test]
fn lookup_is_exact_and_falls_back_to_default() {
    let table = ColorTable::new("009e73").with_mapping("per, pers, pers", "a1b2c3");
    assert_eq!(table.lookup("per, pers, pers"), "a1b2c3");
    assert_eq!(table.lookup("Per, pers, pers"), "009e73");
    assert_eq!(table.lookup("per, pers, pers "), "009e73");
    assert_eq!(table.lookup("per,pers,pers"), "009e73");
    assert_eq!(table.get("unknown"), None);
}

#[test]
fn from_json_preserves_order() {
    let table =
        ColorTable::from_json_str(r#"{"she/her": "ff0000", "he/him": "00ff00", "they/them": "0000ff"}"#, "123456")
            .unwrap();
    let keys: Vec<&str> = table.mappings().keys().map(String::as_str).collect();
    assert_eq!(keys, ["she/her", "he/him", "they/them"]);
    assert_eq!(table.default_color(), "123456");
    assert_eq!(table.len(), 3);
}

#[test]
fn from_json_rejects_non_object() {
    let err = ColorTable::from_json_str("[1, 2]", "009e73").unwrap_err();
    assert!(matches!(err, Error::ColorMap(_)));
}

#[test]
fn builtin_table_has_valid_colors() {
    let table = ColorTable::builtin();
    assert!(!table.is_empty());
    assert_eq!(table.default_color(), DEFAULT_COLOR);
    for (pronouns, color) in table.mappings() {
        assert!(is_hex_color(color), "{pronouns}: {color}");
    }
    assert_eq!(ColorTable::default(), table);
}

#[test]
fn with_default_color_replaces_fallback() {
    let table = ColorTable::builtin().with_default_color("abcdef");
    assert_eq!(table.lookup("not in the table"), "abcdef");
}

#[test]
fn hex_color_shape() {
    assert!(is_hex_color("a1B2c3"));
    assert!(!is_hex_color("#a1b2c3"));
    assert!(!is_hex_color("a1b2c"));
    assert!(!is_hex_color("a1b2c3d"));
    assert!(!is_hex_color("g1b2c3"));
}
