use super::*;
use crate::color::codec::HexColor;
use crate::foundation::error::ThemeverterError;
use crate::scheme::model::{SchemeTemplate, VimExtension};

fn minimal() -> CanonicalScheme {
    let mut t = SchemeTemplate::named("Minimal");
    t.base.background = HexColor::parse("#000000").ok();
    t.base.normal = HexColor::parse("#ffffff").ok();
    t.base.comment = HexColor::parse("#888888").ok();
    t.into_scheme().unwrap()
}

#[test]
fn comment_group_has_gui_and_cterm_values() {
    let rec = VimFormatter.format(&minimal()).unwrap();
    let comment = rec.get("colors.Comment").unwrap();
    assert_eq!(comment["guifg"], "#888888");
    assert_eq!(comment["guibg"], "#000000");
    assert_eq!(comment["ctermfg"], 102);
    assert_eq!(comment["ctermbg"], 0);
}

#[test]
fn every_group_is_present_in_order() {
    let rec = VimFormatter.format(&minimal()).unwrap();
    let keys: Vec<_> = rec.tree()["colors"].as_object().unwrap().keys().cloned().collect();
    assert_eq!(keys, GROUPS);
    let string = rec.get("colors.String").unwrap();
    assert!(string["guifg"].is_null());
    assert_eq!(string["guibg"], "#000000");
}

#[test]
fn cursor_line_never_sets_a_foreground() {
    let mut s = minimal();
    s.base.cursor_line = HexColor::parse("#222222").ok();
    let rec = VimFormatter.format(&s).unwrap();
    let line = rec.get("colors.CursorLine").unwrap();
    assert!(line["guifg"].is_null());
    assert!(line["ctermfg"].is_null());
    assert_eq!(line["guibg"], "#222222");
    assert_eq!(line["ctermbg"], 235);
}

#[test]
fn background_comes_from_vim_namespace_then_dark_flag() {
    let mut s = minimal();
    assert_eq!(VimFormatter.format(&s).unwrap().get("background").unwrap(), "light");
    s.is_dark = true;
    assert_eq!(VimFormatter.format(&s).unwrap().get("background").unwrap(), "dark");
    s.vim = Some(VimExtension {
        background: Some(VimBackground::Light),
    });
    assert_eq!(VimFormatter.format(&s).unwrap().get("background").unwrap(), "light");
}

#[test]
fn normal_colors_are_required() {
    let mut s = minimal();
    s.base.background = None;
    assert!(matches!(
        VimFormatter.format(&s).unwrap_err(),
        ThemeverterError::MissingRequiredField(_)
    ));
}

#[test]
fn cterm_rules_mirror_gui_rules() {
    let rules = VimFormatter.rules();
    let gui = rules.iter().filter(|r| r.conversion == Conversion::Passthrough).count();
    let cterm = rules.iter().filter(|r| r.conversion == Conversion::Ansi256).count();
    assert_eq!(gui, cterm);
    assert_eq!(gui + cterm, rules.len());
}
