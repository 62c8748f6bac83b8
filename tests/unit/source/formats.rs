use super::*;
use serde_json::json;

#[test]
fn ids_round_trip_through_from_str() {
    for f in SourceFormat::ALL {
        assert_eq!(f.id().parse::<SourceFormat>().unwrap(), f);
        assert_eq!(f.adapter().format(), f);
        assert_eq!(f.to_string(), f.id());
    }
    assert_eq!(" VSCode ".parse::<SourceFormat>().unwrap(), SourceFormat::VsCode);
    assert_eq!("iterm".parse::<SourceFormat>().unwrap(), SourceFormat::ITerm2);
}

#[test]
fn unknown_id_is_unsupported_source() {
    let err = "sublime".parse::<SourceFormat>().unwrap_err();
    assert!(matches!(err, ThemeverterError::UnsupportedSource(ref id) if id == "sublime"));
}

#[test]
fn detect_uses_file_extension() {
    let d = |p: &str| SourceFormat::detect(Path::new(p));
    assert_eq!(d("themes/dracula-color-theme.json"), Some(SourceFormat::VsCode));
    assert_eq!(d("nord.JSONC"), Some(SourceFormat::VsCode));
    assert_eq!(d("Solarized Dark.itermcolors"), Some(SourceFormat::ITerm2));
    assert_eq!(d("out/dracula.canonical.json"), Some(SourceFormat::Canonical));
    assert_eq!(d("theme.toml"), None);
    assert_eq!(d("/"), None);
}

#[test]
fn name_resolution_order() {
    let doc = SourceDocument::new(json!({})).with_origin("a/b.json");
    let template = SchemeTemplate::named("Template");
    let resolver = |origin: Option<&Path>| {
        origin
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
    };

    assert_eq!(
        resolve_name(Some(" Doc "), &doc, &template, &resolver).unwrap(),
        "Doc"
    );
    assert_eq!(resolve_name(None, &doc, &template, &resolver).unwrap(), "b");
    assert_eq!(
        resolve_name(Some(""), &doc, &template, &NoNameResolver).unwrap(),
        "Template"
    );

    let blank = |_: Option<&Path>| Some("  ".to_owned());
    let err = resolve_name(None, &doc, &SchemeTemplate::default(), &blank).unwrap_err();
    assert!(matches!(err, ThemeverterError::MissingRequiredField(_)));
}

#[test]
fn strict_color_fails_on_malformed_value() {
    assert_eq!(strict_color("x", None).unwrap(), None);
    assert_eq!(
        strict_color("x", Some("#ABCDEF80")).unwrap().unwrap().as_str(),
        "#abcdef"
    );
    let err = strict_color("editor.background", Some("blue")).unwrap_err();
    assert!(err.to_string().contains("editor.background"));
}

#[test]
fn lenient_color_drops_malformed_value() {
    assert_eq!(lenient_color("x", Some("#zzz")), None);
    assert_eq!(lenient_color("x", None), None);
    assert_eq!(lenient_color("x", Some("#fff")).unwrap().as_str(), "#ffffff");
}

#[test]
fn overlay_keeps_existing_value_on_none() {
    let keep = HexColor::parse("#010203").unwrap();
    let mut slot = Some(keep.clone());
    overlay(&mut slot, None);
    assert_eq!(slot, Some(keep));
    let new = HexColor::parse("#040506").unwrap();
    overlay(&mut slot, Some(new.clone()));
    assert_eq!(slot, Some(new));
}

#[test]
fn resolved_name_never_spans_lines() {
    let doc = SourceDocument::new(serde_json::Value::Null);
    let template = SchemeTemplate::default();
    assert_eq!(
        resolve_name(Some("Evil\n!touch x\r\t"), &doc, &template, &NoNameResolver).unwrap(),
        "Evil !touch x"
    );
    let err = resolve_name(Some("\n\u{7}"), &doc, &template, &NoNameResolver).unwrap_err();
    assert!(matches!(err, ThemeverterError::MissingRequiredField(_)));
}
