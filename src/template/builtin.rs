use serde_json::{Map, Value};

use crate::foundation::error::{ThemeResult, ThemeverterError};
use crate::target::vim::GROUPS;
use crate::target::{TargetFormat, TargetRecord};
use crate::template::TemplateRenderer;

/// spotify-tui UI slots and the palette entry each one is drawn with.
const SPOTIFY_SLOTS: [(&str, &str); 14] = [
    ("active", "cyan"),
    ("banner", "green"),
    ("error_border", "red"),
    ("error_text", "brightRed"),
    ("hint", "yellow"),
    ("hovered", "magenta"),
    ("inactive", "brightBlack"),
    ("playbar_background", "black"),
    ("playbar_progress", "green"),
    ("playbar_progress_text", "brightGreen"),
    ("playbar_text", "white"),
    ("selected", "brightCyan"),
    ("text", "white"),
    ("header", "brightWhite"),
];

/// Templates shipped with themeverter, one per [`TargetFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateRenderer for BuiltinTemplates {
    #[tracing::instrument(skip(self, record))]
    fn render(&self, target: TargetFormat, record: &TargetRecord) -> ThemeResult<String> {
        if record.target() != target {
            return Err(ThemeverterError::serde(format!(
                "record built for {} cannot be rendered as {target}",
                record.target()
            )));
        }
        let name = single_line(record.get("name").and_then(Value::as_str).unwrap_or_default());
        let name = name.as_str();
        match target {
            TargetFormat::Alacritty => render_alacritty(name, record),
            TargetFormat::ITerm2 => render_iterm2(record),
            TargetFormat::Vim => Ok(render_vim(name, record)),
            TargetFormat::Kitty => Ok(render_kitty(name, record)),
            TargetFormat::SpotifyTui => Ok(render_spotify_tui(name, record)),
        }
    }
}

/// `s` with every control character replaced by a space, safe inside a one-line comment.
fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

fn object<'a>(record: &'a TargetRecord, path: &str) -> ThemeResult<&'a Map<String, Value>> {
    record
        .get(path)
        .and_then(Value::as_object)
        .ok_or_else(|| {
            ThemeverterError::missing_field(format!("{} record: {path}", record.target()))
        })
}

fn render_alacritty(name: &str, record: &TargetRecord) -> ThemeResult<String> {
    let colors = object(record, "colors")?;
    let mut root = toml::Table::new();
    if let Some(table) = json_to_toml(&Value::Object(colors.clone())) {
        root.insert("colors".to_owned(), table);
    }
    let body = toml::to_string(&root)
        .map_err(|e| ThemeverterError::serde(format!("alacritty toml: {e}")))?;
    Ok(format!("# {name}\n\n{body}"))
}

/// TOML has no null; absent values are dropped.
fn json_to_toml(v: &Value) -> Option<toml::Value> {
    Some(match v {
        Value::Null => return None,
        Value::Bool(b) => toml::Value::Boolean(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => toml::Value::Integer(i),
            None => toml::Value::Float(n.as_f64()?),
        },
        Value::String(s) => toml::Value::String(s.clone()),
        Value::Array(items) => {
            toml::Value::Array(items.iter().filter_map(json_to_toml).collect())
        }
        Value::Object(map) => toml::Value::Table(
            map.iter()
                .filter_map(|(k, v)| json_to_toml(v).map(|v| (k.clone(), v)))
                .collect(),
        ),
    })
}

fn render_iterm2(record: &TargetRecord) -> ThemeResult<String> {
    let colors = object(record, "colors")?;
    let mut dict = plist::Dictionary::new();
    for (entry, value) in colors {
        let Some(label) = value.get("title").and_then(Value::as_str) else {
            tracing::debug!(entry = entry.as_str(), "skipping untitled iterm2 entry");
            continue;
        };
        let component = |key: &str| value.get(key).and_then(Value::as_f64).unwrap_or(0.0);
        let mut color = plist::Dictionary::new();
        color.insert("Alpha Component".to_owned(), plist::Value::Real(1.0));
        color.insert("Blue Component".to_owned(), plist::Value::Real(component("blue")));
        color.insert("Color Space".to_owned(), plist::Value::String("sRGB".to_owned()));
        color.insert("Green Component".to_owned(), plist::Value::Real(component("green")));
        color.insert("Red Component".to_owned(), plist::Value::Real(component("red")));
        dict.insert(format!("{label} Color"), plist::Value::Dictionary(color));
    }
    let mut out = Vec::new();
    plist::Value::Dictionary(dict)
        .to_writer_xml(&mut out)
        .map_err(|e| ThemeverterError::serde(format!("iterm2 plist: {e}")))?;
    String::from_utf8(out).map_err(|e| ThemeverterError::serde(format!("iterm2 plist: {e}")))
}

/// Body of a Vim double-quoted string.
fn vim_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out
}

/// `hi Group key=value ...`, or `None` when the group has no attribute set.
fn vim_highlight(group: &str, attrs: &Map<String, Value>) -> Option<String> {
    let parts: Vec<String> = ["guifg", "guibg", "ctermfg", "ctermbg"]
        .into_iter()
        .filter_map(|key| match attrs.get(key) {
            Some(Value::String(s)) => Some(format!("{key}={s}")),
            Some(Value::Number(n)) => Some(format!("{key}={n}")),
            _ => None,
        })
        .collect();
    (!parts.is_empty()).then(|| format!("hi {group} {}", parts.join(" ")))
}

fn render_vim(name: &str, record: &TargetRecord) -> String {
    let background = record
        .get("background")
        .and_then(Value::as_str)
        .unwrap_or("dark");
    let mut out = format!("\" Name: {name}\n\" Generated by themeverter\n\n");
    out.push_str(&format!("set background={background}\n"));
    out.push_str("hi clear\nif exists(\"syntax_on\")\n  syntax reset\nendif\n");
    out.push_str(&format!("let g:colors_name = \"{}\"\n\n", vim_string(name)));

    for group in GROUPS {
        let line = record
            .get(&format!("colors.{group}"))
            .and_then(Value::as_object)
            .and_then(|attrs| vim_highlight(group, attrs));
        if let Some(line) = line {
            out.push_str(&line);
            out.push('\n');
        }
    }
    out
}

fn render_kitty(name: &str, record: &TargetRecord) -> String {
    let mut out = format!("# {name}\n\n");
    if let Some(colors) = record.get("colors").and_then(Value::as_object) {
        for (key, value) in colors {
            if let Some(hex) = value.as_str() {
                out.push_str(&format!("{key:<22}{hex}\n"));
            }
        }
    }
    out
}

fn rgb_triple(v: &Value) -> Option<String> {
    let items = v.as_array()?;
    let parts = items
        .iter()
        .map(|c| c.as_u64().map(|c| c.to_string()))
        .collect::<Option<Vec<_>>>()?;
    (parts.len() == 3).then(|| parts.join(", "))
}

fn render_spotify_tui(name: &str, record: &TargetRecord) -> String {
    let dark = record.get("isDark").and_then(Value::as_bool).unwrap_or(false);
    let mut out = format!("# {name} ({})\n", if dark { "dark" } else { "light" });
    out.push_str("theme:\n");
    for (slot, palette) in SPOTIFY_SLOTS {
        if let Some(rgb) = record.get(&format!("theme.{palette}")).and_then(rgb_triple) {
            out.push_str(&format!("  {slot}: \"{rgb}\"\n"));
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/template/builtin.rs"]
mod tests;
