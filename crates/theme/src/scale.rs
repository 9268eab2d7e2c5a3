// Token storage for a single scale. Entries keep insertion order so that
// generated classes come out in the order the scale declares its keys.

/// A single design token, classified by the kind of CSS value it holds.
///
/// The classification drives the accepted-value filters on parameterized
/// generators (a color-typed generator skips length tokens, and so on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// A length or percentage, e.g. `1rem`, `100%`, `9999px`.
    Length(String),
    /// A bare number, e.g. `999` or `0.25`.
    Number(String),
    /// A parseable color, e.g. `#ef4444` or `transparent`.
    Color(String),
    /// A CSS-wide or property keyword, e.g. `auto`, `min-content`.
    Keyword(String),
    /// Anything else: `calc(...)`, `var(...)`, selector fragments, font stacks.
    Raw(String),
}

impl TokenValue {
    /// Classify a raw token string into a [`TokenValue`].
    pub fn classify(text: &str) -> Self {
        let trimmed = text.trim();
        if is_length(trimmed) {
            return Self::Length(trimmed.to_owned());
        }
        if trimmed.parse::<f32>().is_ok() {
            return Self::Number(trimmed.to_owned());
        }
        if csscolorparser::parse(trimmed).is_ok() {
            return Self::Color(trimmed.to_owned());
        }
        if trimmed.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Self::Keyword(trimmed.to_owned());
        }
        Self::Raw(trimmed.to_owned())
    }

    /// The literal text substituted into generated rules.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Length(text)
            | Self::Number(text)
            | Self::Color(text)
            | Self::Keyword(text)
            | Self::Raw(text) => text,
        }
    }

    /// Whether this token is a numeric value of exactly zero (`0`, `0px`).
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Length(text) | Self::Number(text) => {
                let (number, _unit) = split_number_and_unit(text);
                number.parse::<f32>().is_ok_and(|parsed| parsed == 0.0)
            }
            _ => false,
        }
    }
}

/// True for single-token lengths and percentages (`12px`, `1.5em`, `50%`, `.5rem`).
pub fn is_length(text: &str) -> bool {
    let (number, unit) = split_number_and_unit(text);
    if number.is_empty() || number.parse::<f32>().is_err() {
        return false;
    }
    unit == "%" || (!unit.is_empty() && unit.chars().all(|c| c.is_ascii_alphabetic()))
}

/// Split a leading signed decimal number from its trailing unit.
/// Returns `("", "")` when the string does not start with a number.
fn split_number_and_unit(text: &str) -> (&str, &str) {
    let bytes = text.as_bytes();
    let mut index = 0usize;
    if index < bytes.len() && (bytes[index] == b'+' || bytes[index] == b'-') {
        index += 1;
    }
    let mut has_digits = false;
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        index += 1;
        has_digits = true;
    }
    if index < bytes.len() && bytes[index] == b'.' {
        index += 1;
    }
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        index += 1;
        has_digits = true;
    }
    if !has_digits {
        return ("", "");
    }
    let (number, tail) = text.split_at(index);
    (number, tail.trim())
}

/// One ordered key-to-token scale, e.g. the spacing scale.
#[derive(Debug, Clone, Default)]
pub struct Scale {
    entries: Vec<(String, TokenValue)>,
}

impl Scale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used by the default theme tables.
    pub fn with(mut self, key: &str, text: &str) -> Self {
        self.push(key, text);
        self
    }

    /// Insert a token, replacing an existing key in place (overlays keep the
    /// original key order).
    pub fn push(&mut self, key: &str, text: &str) {
        let value = TokenValue::classify(text);
        if let Some(entry) = self.entries.iter_mut().find(|(existing, _)| existing == key) {
            entry.1 = value;
        } else {
            self.entries.push((key.to_owned(), value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_covers_the_value_kinds() {
        assert_eq!(TokenValue::classify("1rem"), TokenValue::Length("1rem".into()));
        assert_eq!(TokenValue::classify("100%"), TokenValue::Length("100%".into()));
        assert_eq!(TokenValue::classify("999"), TokenValue::Number("999".into()));
        assert_eq!(TokenValue::classify("#ef4444"), TokenValue::Color("#ef4444".into()));
        assert_eq!(TokenValue::classify("transparent"), TokenValue::Color("transparent".into()));
        assert_eq!(TokenValue::classify("min-content"), TokenValue::Keyword("min-content".into()));
        assert!(matches!(TokenValue::classify("1 1 0%"), TokenValue::Raw(_)));
    }

    #[test]
    fn zero_detection_spans_units() {
        assert!(TokenValue::classify("0").is_zero());
        assert!(TokenValue::classify("0px").is_zero());
        assert!(!TokenValue::classify("0.125rem").is_zero());
        assert!(!TokenValue::classify("auto").is_zero());
    }

    #[test]
    fn push_replaces_in_place() {
        let mut scale = Scale::new().with("4", "1rem").with("full", "100%");
        scale.push("4", "1.25rem");
        let keys: Vec<&str> = scale.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, ["4", "full"]);
        assert_eq!(scale.get("4").map(TokenValue::as_str), Some("1.25rem"));
    }
}
