use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Style parameters understood by the sample widget.
/// Names follow the widget attribute names shown on the settings buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleKey {
    Height,
    Width,
    Text,
    Anchor,
    Justify,
    WrapLength,
    PadX,
    PadY,
    Cursor,
    Foreground,
    Background,
    ActiveForeground,
    ActiveBackground,
    BorderWidth,
    Relief,
    HighlightBackground,
    HighlightColor,
    HighlightThickness,
    State,
}

impl StyleKey {
    pub const ALL: [StyleKey; 19] = [
        StyleKey::Height,
        StyleKey::Width,
        StyleKey::Text,
        StyleKey::Anchor,
        StyleKey::Justify,
        StyleKey::WrapLength,
        StyleKey::PadX,
        StyleKey::PadY,
        StyleKey::Cursor,
        StyleKey::Foreground,
        StyleKey::Background,
        StyleKey::ActiveForeground,
        StyleKey::ActiveBackground,
        StyleKey::BorderWidth,
        StyleKey::Relief,
        StyleKey::HighlightBackground,
        StyleKey::HighlightColor,
        StyleKey::HighlightThickness,
        StyleKey::State,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StyleKey::Height => "height",
            StyleKey::Width => "width",
            StyleKey::Text => "text",
            StyleKey::Anchor => "anchor",
            StyleKey::Justify => "justify",
            StyleKey::WrapLength => "wraplength",
            StyleKey::PadX => "padx",
            StyleKey::PadY => "pady",
            StyleKey::Cursor => "cursor",
            StyleKey::Foreground => "fg",
            StyleKey::Background => "bg",
            StyleKey::ActiveForeground => "activeforeground",
            StyleKey::ActiveBackground => "activebackground",
            StyleKey::BorderWidth => "bd",
            StyleKey::Relief => "relief",
            StyleKey::HighlightBackground => "highlightbackground",
            StyleKey::HighlightColor => "highlightcolor",
            StyleKey::HighlightThickness => "highlightthickness",
            StyleKey::State => "state",
        }
    }

    pub fn from_name(name: &str) -> Option<StyleKey> {
        Self::ALL.iter().copied().find(|key| key.name() == name)
    }

    /// The kind of value this key accepts
    pub fn kind(&self) -> ValueKind {
        match self {
            StyleKey::Height
            | StyleKey::Width
            | StyleKey::WrapLength
            | StyleKey::PadX
            | StyleKey::PadY
            | StyleKey::BorderWidth
            | StyleKey::HighlightThickness => ValueKind::Int,
            StyleKey::Text => ValueKind::Text,
            StyleKey::Foreground
            | StyleKey::Background
            | StyleKey::ActiveForeground
            | StyleKey::ActiveBackground
            | StyleKey::HighlightBackground
            | StyleKey::HighlightColor => ValueKind::Color,
            StyleKey::Anchor => ValueKind::Anchor,
            StyleKey::Justify => ValueKind::Justify,
            StyleKey::Relief => ValueKind::Relief,
            StyleKey::Cursor => ValueKind::Cursor,
            StyleKey::State => ValueKind::State,
        }
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Int,
    Text,
    Color,
    Anchor,
    Justify,
    Relief,
    Cursor,
    State,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Int => "integer",
            ValueKind::Text => "text",
            ValueKind::Color => "color",
            ValueKind::Anchor => "anchor",
            ValueKind::Justify => "justify",
            ValueKind::Relief => "relief",
            ValueKind::Cursor => "cursor",
            ValueKind::State => "state",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    N,
    S,
    W,
    E,
    Center,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [Anchor::N, Anchor::S, Anchor::W, Anchor::E, Anchor::Center];

    pub fn name(&self) -> &'static str {
        match self {
            Anchor::N => "n",
            Anchor::S => "s",
            Anchor::W => "w",
            Anchor::E => "e",
            Anchor::Center => "center",
        }
    }

    pub fn from_name(name: &str) -> Option<Anchor> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Justify {
    Left,
    Center,
    Right,
}

impl Justify {
    pub const ALL: [Justify; 3] = [Justify::Left, Justify::Center, Justify::Right];

    pub fn name(&self) -> &'static str {
        match self {
            Justify::Left => "left",
            Justify::Center => "center",
            Justify::Right => "right",
        }
    }

    pub fn from_name(name: &str) -> Option<Justify> {
        Self::ALL.iter().copied().find(|j| j.name() == name)
    }
}

/// Border decoration drawn around the sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relief {
    Flat,
    Raised,
    Sunken,
    Ridge,
    Groove,
    Solid,
}

impl Relief {
    pub const ALL: [Relief; 6] = [
        Relief::Flat,
        Relief::Raised,
        Relief::Sunken,
        Relief::Ridge,
        Relief::Groove,
        Relief::Solid,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Relief::Flat => "flat",
            Relief::Raised => "raised",
            Relief::Sunken => "sunken",
            Relief::Ridge => "ridge",
            Relief::Groove => "groove",
            Relief::Solid => "solid",
        }
    }

    pub fn from_name(name: &str) -> Option<Relief> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorShape {
    Arrow,
    Hand2,
    Cross,
    Watch,
}

impl CursorShape {
    pub const ALL: [CursorShape; 4] = [
        CursorShape::Arrow,
        CursorShape::Hand2,
        CursorShape::Cross,
        CursorShape::Watch,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CursorShape::Arrow => "arrow",
            CursorShape::Hand2 => "hand2",
            CursorShape::Cross => "cross",
            CursorShape::Watch => "watch",
        }
    }

    pub fn from_name(name: &str) -> Option<CursorShape> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Normal,
    Disabled,
}

impl WidgetState {
    pub fn name(&self) -> &'static str {
        match self {
            WidgetState::Normal => "normal",
            WidgetState::Disabled => "disabled",
        }
    }

    pub fn from_name(name: &str) -> Option<WidgetState> {
        match name {
            "normal" => Some(WidgetState::Normal),
            "disabled" => Some(WidgetState::Disabled),
            _ => None,
        }
    }
}

/// A typed style value. Colors stay as names until the view resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    Int(i32),
    Text(String),
    Color(String),
    Anchor(Anchor),
    Justify(Justify),
    Relief(Relief),
    Cursor(CursorShape),
    State(WidgetState),
}

impl StyleValue {
    pub fn text(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }

    pub fn color(name: &str) -> Self {
        StyleValue::Color(name.to_string())
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            StyleValue::Int(_) => ValueKind::Int,
            StyleValue::Text(_) => ValueKind::Text,
            StyleValue::Color(_) => ValueKind::Color,
            StyleValue::Anchor(_) => ValueKind::Anchor,
            StyleValue::Justify(_) => ValueKind::Justify,
            StyleValue::Relief(_) => ValueKind::Relief,
            StyleValue::Cursor(_) => ValueKind::Cursor,
            StyleValue::State(_) => ValueKind::State,
        }
    }
}

/// Button label text for a value
impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Int(n) => write!(f, "{}", n),
            StyleValue::Text(s) | StyleValue::Color(s) => f.write_str(s),
            StyleValue::Anchor(a) => f.write_str(a.name()),
            StyleValue::Justify(j) => f.write_str(j.name()),
            StyleValue::Relief(r) => f.write_str(r.name()),
            StyleValue::Cursor(c) => f.write_str(c.name()),
            StyleValue::State(s) => f.write_str(s.name()),
        }
    }
}

/// Errors raised when a style mapping cannot be rendered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("bad value for '{key}': expected {expected}, got {found} '{value}'")]
    KindMismatch {
        key: StyleKey,
        expected: ValueKind,
        found: ValueKind,
        value: String,
    },

    #[error("unknown color name \"{name}\" for '{key}'")]
    UnknownColor { key: StyleKey, name: String },

    #[error("bad value for '{key}': {value} must not be negative")]
    Negative { key: StyleKey, value: i32 },
}

/// Mapping from style key to value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDict(BTreeMap<StyleKey, StyleValue>);

impl StyleDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: StyleKey) -> Option<&StyleValue> {
        self.0.get(&key)
    }

    pub fn set(&mut self, key: StyleKey, value: StyleValue) {
        self.0.insert(key, value);
    }

    /// Builder-style `set`
    pub fn with(mut self, key: StyleKey, value: StyleValue) -> Self {
        self.set(key, value);
        self
    }

    pub fn contains_key(&self, key: StyleKey) -> bool {
        self.0.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (StyleKey, &StyleValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }
}

impl FromIterator<(StyleKey, StyleValue)> for StyleDict {
    fn from_iter<I: IntoIterator<Item = (StyleKey, StyleValue)>>(iter: I) -> Self {
        StyleDict(iter.into_iter().collect())
    }
}

/// One column of the settings panel: a parameter and its candidate values.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleOption {
    pub key: StyleKey,
    pub values: Vec<StyleValue>,
}

/// The parameters offered on the settings panel, in display order.
pub fn option_table() -> Vec<StyleOption> {
    fn ints(values: &[i32]) -> Vec<StyleValue> {
        values.iter().map(|n| StyleValue::Int(*n)).collect()
    }

    fn colors(names: &[&str]) -> Vec<StyleValue> {
        names.iter().map(|name| StyleValue::color(name)).collect()
    }

    vec![
        StyleOption {
            key: StyleKey::Height,
            values: ints(&[1, 2, 3]),
        },
        StyleOption {
            key: StyleKey::Width,
            values: ints(&[10, 20, 30]),
        },
        StyleOption {
            key: StyleKey::Text,
            values: vec![
                StyleValue::text("Hello World"),
                StyleValue::text("Hello\nWorld"),
            ],
        },
        StyleOption {
            key: StyleKey::Anchor,
            values: Anchor::ALL.map(StyleValue::Anchor).to_vec(),
        },
        StyleOption {
            key: StyleKey::Justify,
            values: Justify::ALL.map(StyleValue::Justify).to_vec(),
        },
        StyleOption {
            key: StyleKey::WrapLength,
            values: ints(&[40, 80]),
        },
        StyleOption {
            key: StyleKey::PadX,
            values: ints(&[0, 10, 20, 30]),
        },
        StyleOption {
            key: StyleKey::PadY,
            values: ints(&[0, 10, 20, 30]),
        },
        StyleOption {
            key: StyleKey::Cursor,
            values: CursorShape::ALL.map(StyleValue::Cursor).to_vec(),
        },
        StyleOption {
            key: StyleKey::Foreground,
            values: colors(&["black", "navy"]),
        },
        StyleOption {
            key: StyleKey::Background,
            values: colors(&["white", "azure", "black"]),
        },
        StyleOption {
            key: StyleKey::ActiveForeground,
            values: colors(&["blue"]),
        },
        StyleOption {
            key: StyleKey::ActiveBackground,
            values: colors(&["light blue"]),
        },
        StyleOption {
            key: StyleKey::BorderWidth,
            values: ints(&[0, 2, 5]),
        },
        StyleOption {
            key: StyleKey::Relief,
            values: Relief::ALL.map(StyleValue::Relief).to_vec(),
        },
        StyleOption {
            key: StyleKey::HighlightBackground,
            values: colors(&["light grey", "grey"]),
        },
        StyleOption {
            key: StyleKey::HighlightColor,
            values: colors(&["blue", "cyan"]),
        },
        StyleOption {
            key: StyleKey::HighlightThickness,
            values: ints(&[0, 2, 5]),
        },
        StyleOption {
            key: StyleKey::State,
            values: vec![
                StyleValue::State(WidgetState::Normal),
                StyleValue::State(WidgetState::Disabled),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_round_trip() {
        for key in StyleKey::ALL {
            assert_eq!(StyleKey::from_name(key.name()), Some(key));
        }
        assert_eq!(StyleKey::from_name("fg"), Some(StyleKey::Foreground));
        assert_eq!(StyleKey::from_name("font"), None);
    }

    #[test]
    fn test_token_names_round_trip() {
        for a in Anchor::ALL {
            assert_eq!(Anchor::from_name(a.name()), Some(a));
        }
        for j in Justify::ALL {
            assert_eq!(Justify::from_name(j.name()), Some(j));
        }
        for r in Relief::ALL {
            assert_eq!(Relief::from_name(r.name()), Some(r));
        }
        for c in CursorShape::ALL {
            assert_eq!(CursorShape::from_name(c.name()), Some(c));
        }
        assert_eq!(
            WidgetState::from_name("disabled"),
            Some(WidgetState::Disabled)
        );
        assert_eq!(Relief::from_name("bevelled"), None);
        assert_eq!(Anchor::from_name("ne"), None);
    }

    #[test]
    fn test_option_table_covers_every_key_once() {
        let table = option_table();
        assert_eq!(table.len(), StyleKey::ALL.len());
        let keys: Vec<StyleKey> = table.iter().map(|o| o.key).collect();
        assert_eq!(keys, StyleKey::ALL.to_vec());
    }

    #[test]
    fn test_option_table_values_match_key_kind() {
        for option in option_table() {
            assert!(!option.values.is_empty(), "{} has no values", option.key);
            for value in &option.values {
                assert_eq!(value.kind(), option.key.kind(), "{}", option.key);
            }
        }
    }

    #[test]
    fn test_option_table_relief_order() {
        let table = option_table();
        let relief = table.iter().find(|o| o.key == StyleKey::Relief).unwrap();
        let labels: Vec<String> = relief.values.iter().map(|v| v.to_string()).collect();
        assert_eq!(
            labels,
            ["flat", "raised", "sunken", "ridge", "groove", "solid"]
        );
    }

    #[test]
    fn test_value_display() {
        assert_eq!(StyleValue::Int(20).to_string(), "20");
        assert_eq!(StyleValue::color("light blue").to_string(), "light blue");
        assert_eq!(StyleValue::Anchor(Anchor::Center).to_string(), "center");
        assert_eq!(StyleValue::Cursor(CursorShape::Hand2).to_string(), "hand2");
        assert_eq!(
            StyleValue::State(WidgetState::Disabled).to_string(),
            "disabled"
        );
    }

    #[test]
    fn test_dict_set_overwrites() {
        let mut dict = StyleDict::new().with(StyleKey::Width, StyleValue::Int(10));
        dict.set(StyleKey::Width, StyleValue::Int(30));
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get(StyleKey::Width), Some(&StyleValue::Int(30)));
        assert!(!dict.contains_key(StyleKey::Height));
    }

    #[test]
    fn test_error_display() {
        let err = StyleError::UnknownColor {
            key: StyleKey::Background,
            name: "blurple".to_string(),
        };
        assert_eq!(err.to_string(), "unknown color name \"blurple\" for 'bg'");

        let err = StyleError::KindMismatch {
            key: StyleKey::Width,
            expected: ValueKind::Int,
            found: ValueKind::Text,
            value: "wide".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bad value for 'width': expected integer, got text 'wide'"
        );
    }
}
