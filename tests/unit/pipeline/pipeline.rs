use super::*;
use crate::scheme::model::AnsiSlot;
use serde_json::json;

fn minimal_theme() -> SourceDocument {
    SourceDocument::new(json!({
        "name": "Minimal",
        "type": "dark",
        "colors": {
            "foreground": "#ffffff",
            "editor.background": "#000000",
            "terminal.ansiRed": "#ff0000"
        },
        "tokenColors": [
            {"scope": "comment", "settings": {"foreground": "#888888"}}
        ]
    }))
}

#[test]
fn minimal_theme_to_vim_comment() {
    let rec = convert(&minimal_theme(), "vscode", "vim").unwrap();
    let comment = rec.get("colors.Comment").unwrap();
    assert_eq!(comment["guifg"], "#888888");
    assert_eq!(comment["guibg"], "#000000");
    assert!(comment["ctermfg"].is_u64());
    assert!(comment["ctermbg"].is_u64());
    assert_eq!(rec.get("background").unwrap(), "dark");
}

#[test]
fn unknown_formats_fail_before_parsing() {
    // The document is not a theme at all; only the format ids are checked.
    let garbage = SourceDocument::new(json!(42));
    assert!(matches!(
        convert(&garbage, "sublime", "vim").unwrap_err(),
        ThemeverterError::UnsupportedSource(_)
    ));
    assert!(matches!(
        convert(&garbage, "vscode", "emacs").unwrap_err(),
        ThemeverterError::UnsupportedTarget(_)
    ));
}

#[test]
fn name_resolver_and_template_are_used() {
    let doc = SourceDocument::new(json!({"colors": {"foreground": "#fff", "editor.background": "#000"}}))
        .with_origin("themes/solar.json");
    let pipeline = Pipeline::default().with_name_resolver(|origin: Option<&std::path::Path>| {
        origin
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
    });
    let rec = pipeline.convert(&doc, "vscode", "kitty").unwrap();
    assert_eq!(rec.get("name").unwrap(), "solar");

    let pipeline = Pipeline::new(SchemeTemplate::named("Default Name"));
    let rec = pipeline.convert(&doc, "vscode", "kitty").unwrap();
    assert_eq!(rec.get("name").unwrap(), "Default Name");

    assert!(matches!(
        convert(&doc, "vscode", "kitty").unwrap_err(),
        ThemeverterError::MissingRequiredField(_)
    ));
}

#[test]
fn convert_many_keeps_request_order() {
    let targets = [
        TargetFormat::SpotifyTui,
        TargetFormat::Vim,
        TargetFormat::Alacritty,
        TargetFormat::Kitty,
        TargetFormat::ITerm2,
    ];
    let (scheme, records) = Pipeline::default()
        .convert_many(&minimal_theme(), SourceFormat::VsCode, &targets)
        .unwrap();
    assert_eq!(scheme.ansi.get(AnsiSlot::Red).unwrap().as_str(), "#ff0000");
    let got: Vec<_> = records.iter().map(|r| r.target()).collect();
    assert_eq!(got, targets);
}

#[test]
fn parallel_and_sequential_agree() {
    let targets = TargetFormat::ALL;
    let seq = Pipeline::default()
        .convert_many(&minimal_theme(), SourceFormat::VsCode, &targets)
        .unwrap();
    let par = Pipeline::default()
        .with_threading(ConvertThreading {
            parallel: true,
            threads: Some(2),
        })
        .convert_many(&minimal_theme(), SourceFormat::VsCode, &targets)
        .unwrap();
    assert_eq!(seq, par);
}

#[test]
fn zero_threads_is_rejected() {
    let err = Pipeline::default()
        .with_threading(ConvertThreading {
            parallel: true,
            threads: Some(0),
        })
        .convert_many(
            &minimal_theme(),
            SourceFormat::VsCode,
            &[TargetFormat::Vim, TargetFormat::Kitty],
        )
        .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn zero_threads_is_rejected_without_a_pool() {
    let scheme = Pipeline::default()
        .parse(&minimal_theme(), SourceFormat::VsCode)
        .unwrap();
    for (parallel, targets) in [
        (false, vec![TargetFormat::Vim, TargetFormat::Kitty]),
        (true, vec![TargetFormat::Vim]),
    ] {
        let threading = ConvertThreading {
            parallel,
            threads: Some(0),
        };
        let err = format_all(&scheme, &targets, &threading).unwrap_err();
        assert!(err.to_string().contains("threads"));
    }
}

#[test]
fn first_failing_target_is_reported() {
    let doc = SourceDocument::new(json!({"name": "NoBg", "colors": {"foreground": "#ffffff"}}));
    let err = Pipeline::default()
        .convert_many(
            &doc,
            SourceFormat::VsCode,
            &[TargetFormat::SpotifyTui, TargetFormat::Vim],
        )
        .unwrap_err();
    assert!(matches!(err, ThemeverterError::MissingRequiredField(_)));
}
