use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ThemeverterError::invalid_color("#zz")
            .to_string()
            .contains("invalid color:")
    );
    assert!(
        ThemeverterError::missing_scope("comment")
            .to_string()
            .contains("missing scope:")
    );
    assert!(
        ThemeverterError::unsupported_source("sublime")
            .to_string()
            .contains("unsupported source format:")
    );
    assert!(
        ThemeverterError::unsupported_target("emacs")
            .to_string()
            .contains("unsupported target format:")
    );
    assert!(
        ThemeverterError::missing_field("name")
            .to_string()
            .contains("missing required field:")
    );
    assert!(
        ThemeverterError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_missing_scope_is_recoverable() {
    assert!(ThemeverterError::missing_scope("string").is_recoverable());
    assert!(!ThemeverterError::invalid_color("#1").is_recoverable());
    assert!(!ThemeverterError::missing_field("name").is_recoverable());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ThemeverterError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
