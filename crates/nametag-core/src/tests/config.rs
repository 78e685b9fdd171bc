use crate::*;
use std::path::PathBuf;

#[test]
fn empty_object_yields_defaults() {
    let config = GeneratorConfig::from_json_str("{}").unwrap();
    assert_eq!(config, GeneratorConfig::default());
    assert_eq!(config.default_color, "009e73");
    assert_eq!(config.out_dir, PathBuf::from("rendered"));
}

#[test]
fn fields_are_overridable() {
    let config = GeneratorConfig::from_json_str(
        r#"{"default_color": "ffdd55", "color_map": "colors.json", "out_dir": "out"}"#,
    )
    .unwrap();
    assert_eq!(config.default_color, "ffdd55");
    assert_eq!(config.color_map, Some(PathBuf::from("colors.json")));
    assert_eq!(config.template, None);
    assert_eq!(config.out_dir, PathBuf::from("out"));
}

#[test]
fn unknown_fields_and_bad_colors_are_rejected() {
    assert!(matches!(
        GeneratorConfig::from_json_str(r#"{"colour": "ffdd55"}"#),
        Err(Error::Config { .. })
    ));
    let err = GeneratorConfig::from_json_str(r##"{"default_color": "#ffdd55"}"##).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(!err.is_request_error());
}
