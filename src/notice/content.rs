use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One entry of a notice body exactly as it appears in the data file.
pub type RawContentEntry = Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentEntry {
    Text { text: String },
    Heading { text: String },
    ListItem { text: String },
    Image {
        src: String,
        #[serde(default, deserialize_with = "null_as_empty")]
        alt: String,
    },
    Markdown { source: String },
}

impl ContentEntry {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Normalizes raw entries, one output entry per input entry, in order.
///
/// Never fails: shapes that aren't recognized come out as [`ContentEntry::Text`].
pub fn parse(contents: &[RawContentEntry]) -> Vec<ContentEntry> {
    contents.iter().map(parse_entry).collect()
}

pub fn parse_entry(raw: &RawContentEntry) -> ContentEntry {
    match raw {
        Value::String(s) => parse_line(s),
        Value::Object(map) => {
            if map.contains_key("type") {
                serde_json::from_value::<ContentEntry>(raw.clone())
                    .unwrap_or_else(|_| degrade(raw))
            } else if let Some(Value::String(src)) = map.get("src") {
                let alt = map
                    .get("alt")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_owned();
                ContentEntry::Image {
                    src: src.clone(),
                    alt,
                }
            } else {
                degrade(raw)
            }
        }
        Value::Null => ContentEntry::text(""),
        Value::Bool(b) => ContentEntry::text(b.to_string()),
        Value::Number(n) => ContentEntry::text(n.to_string()),
        Value::Array(_) => degrade(raw),
    }
}

fn parse_line(line: &str) -> ContentEntry {
    if let Some(rest) = line.strip_prefix("# ") {
        return ContentEntry::Heading {
            text: rest.trim().to_owned(),
        };
    }
    for bullet in ["- ", "* ", "• "] {
        if let Some(rest) = line.strip_prefix(bullet) {
            return ContentEntry::ListItem {
                text: rest.trim().to_owned(),
            };
        }
    }
    if let Some((alt, src)) = image_shorthand(line) {
        return ContentEntry::Image {
            src: src.to_owned(),
            alt: alt.to_owned(),
        };
    }
    ContentEntry::text(line)
}

/// `![alt](src)` spanning the whole line.
fn image_shorthand(line: &str) -> Option<(&str, &str)> {
    let inner = line.trim().strip_prefix("![")?.strip_suffix(')')?;
    let (alt, src) = inner.split_once("](")?;
    if src.is_empty() || src.contains(char::is_whitespace) {
        return None;
    }
    Some((alt, src))
}

fn degrade(raw: &RawContentEntry) -> ContentEntry {
    match raw.get("text") {
        Some(Value::String(text)) => ContentEntry::text(text.clone()),
        _ => ContentEntry::text(raw.to_string()),
    }
}
