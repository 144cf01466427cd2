use super::style::{Anchor, Justify, Relief, StyleDict, StyleKey, StyleValue};

/// Predefined style mappings substituted wholesale for the current style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// A fresh copy of the theme's mapping
    pub fn style(&self) -> StyleDict {
        let (fg, bg, bd, relief, hl_bg, hl_color) = match self {
            Theme::Light => ("black", "white", 2, Relief::Ridge, "lightgrey", "blue"),
            Theme::Dark => ("white", "black", 3, Relief::Groove, "grey", "cyan"),
        };

        StyleDict::new()
            .with(StyleKey::Foreground, StyleValue::color(fg))
            .with(StyleKey::Background, StyleValue::color(bg))
            .with(StyleKey::BorderWidth, StyleValue::Int(bd))
            .with(StyleKey::Relief, StyleValue::Relief(relief))
            .with(StyleKey::HighlightBackground, StyleValue::color(hl_bg))
            .with(StyleKey::HighlightColor, StyleValue::color(hl_color))
            .with(StyleKey::HighlightThickness, StyleValue::Int(2))
            .with(StyleKey::Justify, StyleValue::Justify(Justify::Center))
            .with(StyleKey::Anchor, StyleValue::Anchor(Anchor::Center))
            .with(StyleKey::Width, StyleValue::Int(20))
            .with(StyleKey::Height, StyleValue::Int(2))
    }
}

/// Style lab state: the captured default and the mapping currently shown.
///
/// Every transition replaces or overwrites owned data, so the default, the
/// theme constants and the current style never share storage.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleModel {
    default_style: StyleDict,
    current_style: StyleDict,
}

impl StyleModel {
    pub fn new(default_style: StyleDict) -> Self {
        Self {
            current_style: default_style.clone(),
            default_style,
        }
    }

    /// Switch to a theme by name. Unknown names leave the style untouched.
    pub fn set_theme(&mut self, name: &str) {
        if let Some(theme) = Theme::from_name(name) {
            self.apply_theme(theme);
        }
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.current_style = theme.style();
    }

    /// Overwrite one parameter. The value is not checked against the key;
    /// the view rejects mismatches when it renders.
    pub fn update_param(&mut self, key: StyleKey, value: StyleValue) {
        self.current_style.set(key, value);
    }

    /// `update_param` for a parameter given by name. Returns false and
    /// changes nothing when the name is not a known parameter.
    pub fn update_param_named(&mut self, name: &str, value: StyleValue) -> bool {
        match StyleKey::from_name(name) {
            Some(key) => {
                self.update_param(key, value);
                true
            }
            None => false,
        }
    }

    pub fn reset_default(&mut self) {
        self.current_style = self.default_style.clone();
    }

    pub fn style(&self) -> &StyleDict {
        &self.current_style
    }

    /// Owned copy of the current style
    pub fn snapshot(&self) -> StyleDict {
        self.current_style.clone()
    }

    pub fn default_style(&self) -> &StyleDict {
        &self.default_style
    }
}
