use super::*;
use crate::color::codec::HexColor;
use crate::source::NoNameResolver;
use serde_json::json;

fn hex(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

fn parse(tree: serde_json::Value) -> ThemeResult<CanonicalScheme> {
    VsCodeAdapter.parse(
        &SourceDocument::new(tree),
        &SchemeTemplate::default(),
        &NoNameResolver,
    )
}

fn full_theme() -> serde_json::Value {
    json!({
        "name": "Dracula",
        "type": "dark",
        "colors": {
            "foreground": "#F8F8F2",
            "editor.background": "#282a36",
            "editorLineNumber.foreground": "#6272A4",
            "editorCursor.foreground": "#f8f8f0",
            "editorCursor.background": "#282a36ff",
            "editor.lineHighlightBackground": "#44475A75",
            "editor.selectionBackground": "#44475a",
            "terminal.ansiBlack": "#21222c",
            "terminal.ansiRed": "#ff5555",
            "terminal.ansiBrightWhite": "#ffffff"
        },
        "tokenColors": [
            {"scope": "comment", "settings": {"foreground": "#6272a4"}},
            {"scope": ["string", "string.quoted"], "settings": {"foreground": "#f1fa8c"}},
            {"scope": "constant.numeric", "settings": {"foreground": "#bd93f9"}},
            {"scope": ["constant.language.boolean"], "settings": {"foreground": "#BD93F9"}}
        ]
    })
}

#[test]
fn maps_ui_token_and_terminal_colors() {
    let s = parse(full_theme()).unwrap();
    assert_eq!(s.name, "Dracula");
    assert!(s.is_dark);
    assert_eq!(
        s.vim,
        Some(VimExtension {
            background: Some(VimBackground::Dark)
        })
    );
    assert_eq!(s.base.normal, Some(hex("#f8f8f2")));
    assert_eq!(s.base.background, Some(hex("#282a36")));
    assert_eq!(s.base.line_number, Some(hex("#6272a4")));
    assert_eq!(s.base.cursor, Some(hex("#f8f8f0")));
    assert_eq!(s.base.cursor_text, Some(hex("#282a36")));
    assert_eq!(s.base.cursor_line.as_ref().map(|c| c.as_str()), Some("#44475a"));
    assert_eq!(s.base.comment, Some(hex("#6272a4")));
    assert_eq!(s.base.string, Some(hex("#f1fa8c")));
    assert_eq!(s.base.number, Some(hex("#bd93f9")));
    assert_eq!(s.base.boolean, Some(hex("#bd93f9")));
    assert_eq!(s.base.selection_foreground, None);
    assert_eq!(s.ansi.get(AnsiSlot::Red), Some(&hex("#ff5555")));
    assert_eq!(s.ansi.get(AnsiSlot::BrightWhite), Some(&hex("#ffffff")));
    assert_eq!(s.ansi.get(AnsiSlot::Green), None);
}

#[test]
fn cursor_text_falls_back_to_editor_background() {
    let s = parse(json!({
        "name": "T",
        "colors": {"editor.background": "#112233"}
    }))
    .unwrap();
    assert_eq!(s.base.cursor_text, Some(hex("#112233")));
}

#[test]
fn missing_scopes_leave_fields_absent() {
    let s = parse(json!({
        "name": "T",
        "type": "light",
        "colors": {"foreground": "#000000", "editor.background": "#ffffff"},
        "tokenColors": [{"scope": "comment", "settings": {"foreground": "#888888"}}]
    }))
    .unwrap();
    assert!(!s.is_dark);
    assert_eq!(s.base.comment, Some(hex("#888888")));
    assert_eq!(s.base.string, None);
    assert_eq!(s.base.number, None);
    assert_eq!(s.base.boolean, None);
}

#[test]
fn missing_name_uses_resolver_then_template() {
    let doc = SourceDocument::new(json!({"colors": {}}));

    let from_resolver = VsCodeAdapter
        .parse(
            &doc,
            &SchemeTemplate::named("from template"),
            &|_: Option<&std::path::Path>| Some("Prompted".to_owned()),
        )
        .unwrap();
    assert_eq!(from_resolver.name, "Prompted");

    let from_template = VsCodeAdapter
        .parse(&doc, &SchemeTemplate::named("from template"), &NoNameResolver)
        .unwrap();
    assert_eq!(from_template.name, "from template");

    let err = VsCodeAdapter
        .parse(&doc, &SchemeTemplate::default(), &NoNameResolver)
        .unwrap_err();
    assert!(matches!(err, ThemeverterError::MissingRequiredField(_)));
}

#[test]
fn empty_document_name_is_not_accepted() {
    let err = parse(json!({"name": "   "})).unwrap_err();
    assert!(matches!(err, ThemeverterError::MissingRequiredField(_)));
}

#[test]
fn malformed_color_without_fallback_is_fatal() {
    let err = parse(json!({
        "name": "T",
        "colors": {"editor.background": "not-a-color"}
    }))
    .unwrap_err();
    assert!(matches!(err, ThemeverterError::InvalidColor(_)));
}

#[test]
fn malformed_color_with_fallback_is_dropped() {
    let s = parse(json!({
        "name": "T",
        "colors": {
            "editor.background": "#101010",
            "editorCursor.background": "oops",
            "editor.selectionForeground": "#12"
        }
    }))
    .unwrap();
    assert_eq!(s.base.cursor_text, Some(hex("#101010")));
    assert_eq!(s.base.selection_foreground, None);
}

#[test]
fn template_values_survive_where_source_is_silent() {
    let mut template = SchemeTemplate::default();
    template.base.cursor_line = Some(hex("#333333"));
    template.ansi.set(AnsiSlot::Blue, Some(hex("#0000aa")));
    let s = VsCodeAdapter
        .parse(
            &SourceDocument::new(json!({"name": "T", "colors": {"terminal.ansiRed": "#aa0000"}})),
            &template,
            &NoNameResolver,
        )
        .unwrap();
    assert_eq!(s.base.cursor_line, Some(hex("#333333")));
    assert_eq!(s.ansi.get(AnsiSlot::Blue), Some(&hex("#0000aa")));
    assert_eq!(s.ansi.get(AnsiSlot::Red), Some(&hex("#aa0000")));
}

#[test]
fn legacy_global_settings_fill_foreground_and_background() {
    let s = parse(json!({
        "name": "Legacy",
        "tokenColors": [
            {"settings": {"foreground": "#F8F8F2", "background": "#272822"}},
            {"scope": "comment", "settings": {"foreground": "#75715E"}}
        ]
    }))
    .unwrap();
    assert_eq!(s.base.normal, Some(hex("#f8f8f2")));
    assert_eq!(s.base.background, Some(hex("#272822")));
    assert_eq!(s.base.cursor_text, Some(hex("#272822")));
}

#[test]
fn token_colors_must_be_a_list() {
    let err = parse(json!({"name": "T", "tokenColors": 3})).unwrap_err();
    assert!(matches!(err, ThemeverterError::Serde(_)));

    // A path to an include file is tolerated and ignored.
    assert!(parse(json!({"name": "T", "tokenColors": "./tokens.json"})).is_ok());
}

#[test]
fn terminal_keys_are_camel_cased() {
    assert_eq!(terminal_key(AnsiSlot::Black), "terminal.ansiBlack");
    assert_eq!(terminal_key(AnsiSlot::BrightMagenta), "terminal.ansiBrightMagenta");
}
