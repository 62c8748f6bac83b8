use super::*;
use crate::color::codec::HexColor;
use crate::scheme::model::SchemeTemplate;

fn scheme() -> CanonicalScheme {
    let mut t = SchemeTemplate::named("Kit");
    t.base.background = HexColor::parse("#000000").ok();
    t.base.normal = HexColor::parse("#dddddd").ok();
    t.base.selection_background = HexColor::parse("#333333").ok();
    t.base.cursor_text = HexColor::parse("#111111").ok();
    for slot in AnsiSlot::ALL {
        let v = (slot.number() * 16) as u8;
        t.ansi.set(slot, Some(HexColor::from(crate::color::codec::Rgb8::new(v, v, v))));
    }
    t.into_scheme().unwrap()
}

#[test]
fn palette_keys_follow_slot_numbers() {
    let rec = KittyFormatter.format(&scheme()).unwrap();
    assert_eq!(rec.get("colors.color0").unwrap(), "#000000");
    assert_eq!(rec.get("colors.color1").unwrap(), "#101010");
    assert_eq!(rec.get("colors.color15").unwrap(), "#f0f0f0");
    assert_eq!(rec.get("colors.foreground").unwrap(), "#dddddd");
    assert_eq!(rec.get("colors.selection_background").unwrap(), "#333333");
    assert_eq!(rec.get("colors.cursor_text_color").unwrap(), "#111111");
    assert!(rec.get("colors.selection_foreground").unwrap().is_null());
}

#[test]
fn colors_pass_through_unchanged() {
    assert!(
        KittyFormatter
            .rules()
            .iter()
            .all(|r| r.conversion == Conversion::Passthrough)
    );
}

#[test]
fn formatting_is_idempotent() {
    let s = scheme();
    assert_eq!(KittyFormatter.format(&s).unwrap(), KittyFormatter.format(&s).unwrap());
}
