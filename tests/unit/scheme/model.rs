use super::*;
use serde_json::json;

fn hex(s: &str) -> HexColor {
    HexColor::parse(s).unwrap()
}

#[test]
fn slots_are_numbered_in_ansi_order() {
    for (n, slot) in AnsiSlot::ALL.into_iter().enumerate() {
        assert_eq!(slot.number(), n);
        assert_eq!(AnsiSlot::from_number(n), Some(slot));
        assert_eq!(AnsiSlot::from_name(slot.name()), Some(slot));
    }
    assert_eq!(AnsiSlot::from_number(16), None);
    assert_eq!(AnsiSlot::BrightWhite.name(), "brightWhite");
}

#[test]
fn ansi_colors_are_addressed_by_name() {
    let mut ansi = AnsiColors::default();
    ansi.set(AnsiSlot::BrightRed, Some(hex("#ff5555")));
    assert_eq!(ansi.get(AnsiSlot::BrightRed), Some(&hex("#ff5555")));
    assert_eq!(ansi.get(AnsiSlot::Red), None);
    assert_eq!(ansi.len_present(), 1);
}

#[test]
fn ansi_colors_serialize_all_sixteen_names() {
    let mut ansi = AnsiColors::default();
    ansi.set(AnsiSlot::Black, Some(hex("#000000")));
    let v = serde_json::to_value(&ansi).unwrap();
    let obj = v.as_object().unwrap();
    assert_eq!(obj.len(), 16);
    assert_eq!(obj["black"], json!("#000000"));
    assert!(obj["brightCyan"].is_null());
}

#[test]
fn ansi_colors_reject_unknown_slot_names() {
    let err = serde_json::from_value::<AnsiColors>(json!({"orange": "#ff8800"}));
    assert!(err.is_err());
}

#[test]
fn json_roundtrip_keeps_camel_case_shape() {
    let mut template = SchemeTemplate::named("Night Owl");
    template.is_dark = true;
    template.base.line_number = Some(hex("#4b6479"));
    template.ansi.set(AnsiSlot::Cyan, Some(hex("#21c7a8")));
    template.vim = Some(VimExtension {
        background: Some(VimBackground::Dark),
    });
    let scheme = template.into_scheme().unwrap();

    let v = serde_json::to_value(&scheme).unwrap();
    assert_eq!(v["isDark"], json!(true));
    assert_eq!(v["base"]["lineNumber"], json!("#4b6479"));
    assert_eq!(v["vim"]["background"], json!("dark"));

    let de: CanonicalScheme = serde_json::from_value(v).unwrap();
    assert_eq!(de, scheme);
}

#[test]
fn color_reads_base_and_ansi_fields() {
    let mut template = SchemeTemplate::named("x");
    template.base.cursor_text = Some(hex("#abcdef"));
    template.ansi.set(AnsiSlot::Blue, Some(hex("#0000ff")));
    let scheme = template.into_scheme().unwrap();

    assert_eq!(
        scheme.color(ColorField::Base(BaseField::CursorText)),
        Some(&hex("#abcdef"))
    );
    assert_eq!(
        scheme.color(ColorField::Ansi(AnsiSlot::Blue)),
        Some(&hex("#0000ff"))
    );
    assert_eq!(scheme.color(ColorField::Base(BaseField::Comment)), None);
    assert_eq!(ColorField::Ansi(AnsiSlot::BrightRed).path(), "ansi.brightRed");
}

#[test]
fn template_requires_a_non_empty_name() {
    assert!(matches!(
        SchemeTemplate::default().into_scheme(),
        Err(ThemeverterError::MissingRequiredField(_))
    ));
    assert!(SchemeTemplate::named("  ").into_scheme().is_err());
}

#[test]
fn validate_rejects_blank_name() {
    let mut scheme = SchemeTemplate::named("ok").into_scheme().unwrap();
    assert!(scheme.validate().is_ok());
    scheme.name = String::new();
    assert!(scheme.validate().is_err());
}
