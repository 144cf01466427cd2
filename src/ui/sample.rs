//! The styled sample widget: its resolved attributes, geometry and painting.

use fltk::{
    draw,
    enums::{Align, Color, Cursor, Font},
};

use crate::app::domain::style::{
    Anchor, CursorShape, Justify, Relief, StyleDict, StyleError, StyleKey, StyleValue, WidgetState,
};

use super::colors::resolve_rgb;

/// Cell size used for `width` (characters) and `height` (lines)
pub const CHAR_WIDTH: i32 = 8;
pub const LINE_HEIGHT: i32 = 17;
pub const FONT_SIZE: i32 = 13;
const FONT: Font = Font::Courier;

/// A colour as given in the style mapping plus its resolved value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorSpec {
    pub name: String,
    pub rgb: (u8, u8, u8),
}

impl ColorSpec {
    fn resolve(key: StyleKey, name: &str) -> Result<Self, StyleError> {
        let rgb = resolve_rgb(name).ok_or_else(|| StyleError::UnknownColor {
            key,
            name: name.to_string(),
        })?;
        Ok(Self {
            name: name.to_string(),
            rgb,
        })
    }

    fn hex(name: &str, rgb: (u8, u8, u8)) -> Self {
        Self {
            name: name.to_string(),
            rgb,
        }
    }

    pub fn color(&self) -> Color {
        let (r, g, b) = self.rgb;
        Color::from_rgb(r, g, b)
    }
}

/// Fully resolved configuration of the sample widget.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStyle {
    pub text: String,
    pub width: i32,
    pub height: i32,
    pub anchor: Anchor,
    pub justify: Justify,
    pub wrap_length: i32,
    pub pad_x: i32,
    pub pad_y: i32,
    pub cursor: CursorShape,
    pub fg: ColorSpec,
    pub bg: ColorSpec,
    pub active_fg: ColorSpec,
    pub active_bg: ColorSpec,
    pub border_width: i32,
    pub relief: Relief,
    pub highlight_bg: ColorSpec,
    pub highlight_color: ColorSpec,
    pub highlight_thickness: i32,
    pub state: WidgetState,
}

impl Default for SampleStyle {
    fn default() -> Self {
        Self {
            text: String::new(),
            width: 0,
            height: 0,
            anchor: Anchor::Center,
            justify: Justify::Center,
            wrap_length: 0,
            pad_x: 1,
            pad_y: 1,
            cursor: CursorShape::Arrow,
            fg: ColorSpec::hex("#000000", (0, 0, 0)),
            bg: ColorSpec::hex("#d9d9d9", (217, 217, 217)),
            active_fg: ColorSpec::hex("#000000", (0, 0, 0)),
            active_bg: ColorSpec::hex("#ececec", (236, 236, 236)),
            border_width: 1,
            relief: Relief::Flat,
            highlight_bg: ColorSpec::hex("#d9d9d9", (217, 217, 217)),
            highlight_color: ColorSpec::hex("#000000", (0, 0, 0)),
            highlight_thickness: 0,
            state: WidgetState::Normal,
        }
    }
}

fn non_negative(key: StyleKey, value: i32) -> Result<i32, StyleError> {
    if value < 0 {
        Err(StyleError::Negative { key, value })
    } else {
        Ok(value)
    }
}

impl SampleStyle {
    /// A copy with every entry of `style` applied. Fails on the first entry
    /// that cannot be rendered, leaving `self` as it was.
    pub fn merged(&self, style: &StyleDict) -> Result<Self, StyleError> {
        let mut next = self.clone();
        for (key, value) in style.iter() {
            next.set(key, value)?;
        }
        Ok(next)
    }

    fn set(&mut self, key: StyleKey, value: &StyleValue) -> Result<(), StyleError> {
        match (key, value) {
            (StyleKey::Height, StyleValue::Int(n)) => self.height = non_negative(key, *n)?,
            (StyleKey::Width, StyleValue::Int(n)) => self.width = non_negative(key, *n)?,
            (StyleKey::WrapLength, StyleValue::Int(n)) => self.wrap_length = non_negative(key, *n)?,
            (StyleKey::PadX, StyleValue::Int(n)) => self.pad_x = non_negative(key, *n)?,
            (StyleKey::PadY, StyleValue::Int(n)) => self.pad_y = non_negative(key, *n)?,
            (StyleKey::BorderWidth, StyleValue::Int(n)) => {
                self.border_width = non_negative(key, *n)?
            }
            (StyleKey::HighlightThickness, StyleValue::Int(n)) => {
                self.highlight_thickness = non_negative(key, *n)?
            }
            (StyleKey::Text, StyleValue::Text(s)) => self.text = s.clone(),
            (StyleKey::Anchor, StyleValue::Anchor(a)) => self.anchor = *a,
            (StyleKey::Justify, StyleValue::Justify(j)) => self.justify = *j,
            (StyleKey::Relief, StyleValue::Relief(r)) => self.relief = *r,
            (StyleKey::Cursor, StyleValue::Cursor(c)) => self.cursor = *c,
            (StyleKey::State, StyleValue::State(s)) => self.state = *s,
            (StyleKey::Foreground, StyleValue::Color(name)) => {
                self.fg = ColorSpec::resolve(key, name)?
            }
            (StyleKey::Background, StyleValue::Color(name)) => {
                self.bg = ColorSpec::resolve(key, name)?
            }
            (StyleKey::ActiveForeground, StyleValue::Color(name)) => {
                self.active_fg = ColorSpec::resolve(key, name)?
            }
            (StyleKey::ActiveBackground, StyleValue::Color(name)) => {
                self.active_bg = ColorSpec::resolve(key, name)?
            }
            (StyleKey::HighlightBackground, StyleValue::Color(name)) => {
                self.highlight_bg = ColorSpec::resolve(key, name)?
            }
            (StyleKey::HighlightColor, StyleValue::Color(name)) => {
                self.highlight_color = ColorSpec::resolve(key, name)?
            }
            _ => {
                return Err(StyleError::KindMismatch {
                    key,
                    expected: key.kind(),
                    found: value.kind(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Read the whole configuration back as a style mapping.
    pub fn to_dict(&self) -> StyleDict {
        StyleKey::ALL
            .iter()
            .map(|key| (*key, self.value_of(*key)))
            .collect()
    }

    fn value_of(&self, key: StyleKey) -> StyleValue {
        match key {
            StyleKey::Height => StyleValue::Int(self.height),
            StyleKey::Width => StyleValue::Int(self.width),
            StyleKey::Text => StyleValue::Text(self.text.clone()),
            StyleKey::Anchor => StyleValue::Anchor(self.anchor),
            StyleKey::Justify => StyleValue::Justify(self.justify),
            StyleKey::WrapLength => StyleValue::Int(self.wrap_length),
            StyleKey::PadX => StyleValue::Int(self.pad_x),
            StyleKey::PadY => StyleValue::Int(self.pad_y),
            StyleKey::Cursor => StyleValue::Cursor(self.cursor),
            StyleKey::Foreground => StyleValue::Color(self.fg.name.clone()),
            StyleKey::Background => StyleValue::Color(self.bg.name.clone()),
            StyleKey::ActiveForeground => StyleValue::Color(self.active_fg.name.clone()),
            StyleKey::ActiveBackground => StyleValue::Color(self.active_bg.name.clone()),
            StyleKey::BorderWidth => StyleValue::Int(self.border_width),
            StyleKey::Relief => StyleValue::Relief(self.relief),
            StyleKey::HighlightBackground => StyleValue::Color(self.highlight_bg.name.clone()),
            StyleKey::HighlightColor => StyleValue::Color(self.highlight_color.name.clone()),
            StyleKey::HighlightThickness => StyleValue::Int(self.highlight_thickness),
            StyleKey::State => StyleValue::State(self.state),
        }
    }

    /// Text lines as drawn, wrapped at `wrap_length` pixels when set.
    pub fn display_lines(&self) -> Vec<String> {
        let max_chars = if self.wrap_length > 0 {
            Some((self.wrap_length / CHAR_WIDTH).max(1) as usize)
        } else {
            None
        };

        self.text
            .split('\n')
            .flat_map(|line| match max_chars {
                Some(max) => wrap_line(line, max),
                None => vec![line.to_string()],
            })
            .collect()
    }

    /// Outer size in pixels, including padding, border and highlight ring.
    pub fn size(&self) -> (i32, i32) {
        let lines = self.display_lines();
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let columns = if self.width > 0 {
            self.width
        } else {
            widest.max(1) as i32
        };
        let rows = if self.height > 0 {
            self.height
        } else {
            lines.len().max(1) as i32
        };
        let inset = self.inset();
        (
            columns * CHAR_WIDTH + 2 * (self.pad_x + inset),
            rows * LINE_HEIGHT + 2 * (self.pad_y + inset),
        )
    }

    fn inset(&self) -> i32 {
        self.highlight_thickness + self.border_width
    }

    pub fn fltk_cursor(&self) -> Cursor {
        match self.cursor {
            CursorShape::Arrow => Cursor::Arrow,
            CursorShape::Hand2 => Cursor::Hand,
            CursorShape::Cross => Cursor::Cross,
            CursorShape::Watch => Cursor::Wait,
        }
    }

    /// Draw the sample into the given box. Must be called from a draw callback.
    pub fn paint(&self, x: i32, y: i32, w: i32, h: i32, hovered: bool) {
        let active = hovered && self.state == WidgetState::Normal;
        let bg = if active {
            self.active_bg.color()
        } else {
            self.bg.color()
        };
        let fg = match self.state {
            WidgetState::Disabled => self.fg.color().inactive(),
            WidgetState::Normal if active => self.active_fg.color(),
            WidgetState::Normal => self.fg.color(),
        };

        draw::push_clip(x, y, w, h);

        let ht = self.highlight_thickness;
        if ht > 0 {
            draw::draw_rect_fill(x, y, w, h, self.highlight_bg.color());
        }
        let (bx, by, bw, bh) = (x + ht, y + ht, w - 2 * ht, h - 2 * ht);
        draw::draw_rect_fill(bx, by, bw, bh, bg);
        draw_relief((bx, by, bw, bh), self.border_width, self.relief, bg);

        let inset = self.inset();
        let content = (
            x + inset + self.pad_x,
            y + inset + self.pad_y,
            w - 2 * (inset + self.pad_x),
            h - 2 * (inset + self.pad_y),
        );
        self.paint_text(content, fg);

        draw::pop_clip();
    }

    fn paint_text(&self, content: (i32, i32, i32, i32), fg: Color) {
        let lines = self.display_lines();
        draw::set_font(FONT, FONT_SIZE);
        draw::set_draw_color(fg);

        let widths: Vec<i32> = lines.iter().map(|l| draw::width(l).ceil() as i32).collect();
        let block_w = widths.iter().copied().max().unwrap_or(0);
        let block_h = lines.len() as i32 * LINE_HEIGHT;
        let (ox, oy) = block_origin(self.anchor, content, (block_w, block_h));
        let align = Align::Left | Align::Inside;

        for (i, (line, line_w)) in lines.iter().zip(widths).enumerate() {
            let lx = ox + line_offset(self.justify, block_w, line_w);
            let ly = oy + i as i32 * LINE_HEIGHT;
            draw::draw_text2(line, lx, ly, line_w, LINE_HEIGHT, align);
        }
    }
}

/// Greedy word wrap to at most `max_chars` per line. Words longer than the
/// limit stay on a line of their own.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if !current.is_empty() && needed > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    lines.push(current);
    lines
}

/// Top-left corner of a text block placed in `content` by `anchor`.
fn block_origin(anchor: Anchor, content: (i32, i32, i32, i32), block: (i32, i32)) -> (i32, i32) {
    let (cx, cy, cw, ch) = content;
    let (bw, bh) = block;
    let center_x = cx + (cw - bw) / 2;
    let center_y = cy + (ch - bh) / 2;
    match anchor {
        Anchor::N => (center_x, cy),
        Anchor::S => (center_x, cy + ch - bh),
        Anchor::W => (cx, center_y),
        Anchor::E => (cx + cw - bw, center_y),
        Anchor::Center => (center_x, center_y),
    }
}

fn line_offset(justify: Justify, block_w: i32, line_w: i32) -> i32 {
    match justify {
        Justify::Left => 0,
        Justify::Center => (block_w - line_w) / 2,
        Justify::Right => block_w - line_w,
    }
}

fn draw_relief(rect: (i32, i32, i32, i32), width: i32, relief: Relief, bg: Color) {
    if width <= 0 {
        return;
    }
    let light = bg.lighter();
    let dark = bg.darker();
    let outer = width - width / 2;
    let (x, y, w, h) = rect;
    let inner = (x + outer, y + outer, w - 2 * outer, h - 2 * outer);
    match relief {
        Relief::Flat => {}
        Relief::Raised => bevel(rect, width, light, dark),
        Relief::Sunken => bevel(rect, width, dark, light),
        Relief::Ridge => {
            bevel(rect, outer, light, dark);
            bevel(inner, width / 2, dark, light);
        }
        Relief::Groove => {
            bevel(rect, outer, dark, light);
            bevel(inner, width / 2, light, dark);
        }
        Relief::Solid => bevel(rect, width, Color::Black, Color::Black),
    }
}

/// `width` nested rectangles, top/left edges in one colour and
/// bottom/right in the other.
fn bevel(rect: (i32, i32, i32, i32), width: i32, top_left: Color, bottom_right: Color) {
    let (x, y, w, h) = rect;
    for i in 0..width {
        let (l, t, r, b) = (x + i, y + i, x + w - 1 - i, y + h - 1 - i);
        if r <= l || b <= t {
            break;
        }
        draw::set_draw_color(top_left);
        draw::draw_line(l, t, r, t);
        draw::draw_line(l, t, l, b);
        draw::set_draw_color(bottom_right);
        draw::draw_line(l, b, r, b);
        draw::draw_line(r, t, r, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::style::ValueKind;
    use crate::app::domain::style_model::Theme;

    #[test]
    fn test_default_readback_is_complete() {
        let dict = SampleStyle::default().to_dict();
        assert_eq!(dict.len(), StyleKey::ALL.len());
        assert_eq!(
            dict.get(StyleKey::Background),
            Some(&StyleValue::color("#d9d9d9"))
        );
        assert_eq!(
            dict.get(StyleKey::Relief),
            Some(&StyleValue::Relief(Relief::Flat))
        );
    }

    #[test]
    fn test_default_readback_renders_back_to_itself() {
        let base = SampleStyle::default();
        let merged = base.merged(&base.to_dict()).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn test_merge_theme() {
        let dark = Theme::Dark.style();
        let merged = SampleStyle::default().merged(&dark).unwrap();
        assert_eq!(merged.fg.rgb, (255, 255, 255));
        assert_eq!(merged.bg.rgb, (0, 0, 0));
        assert_eq!(merged.relief, Relief::Groove);
        assert_eq!(merged.border_width, 3);
        assert_eq!(merged.width, 20);
        // Keys the theme does not mention keep their value
        assert_eq!(merged.pad_x, 1);
        assert_eq!(merged.text, "");
    }

    #[test]
    fn test_merge_is_atomic() {
        let base = SampleStyle::default();
        let style = StyleDict::new()
            .with(StyleKey::Width, StyleValue::Int(30))
            .with(StyleKey::Background, StyleValue::color("blurple"));
        let err = base.merged(&style).unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownColor {
                key: StyleKey::Background,
                name: "blurple".to_string(),
            }
        );
        assert_eq!(base, SampleStyle::default());
    }

    #[test]
    fn test_merge_rejects_kind_mismatch() {
        let style = StyleDict::new().with(StyleKey::Relief, StyleValue::Int(2));
        let err = SampleStyle::default().merged(&style).unwrap_err();
        assert_eq!(
            err,
            StyleError::KindMismatch {
                key: StyleKey::Relief,
                expected: ValueKind::Relief,
                found: ValueKind::Int,
                value: "2".to_string(),
            }
        );
    }

    #[test]
    fn test_merge_rejects_negative_sizes() {
        let style = StyleDict::new().with(StyleKey::PadY, StyleValue::Int(-1));
        assert_eq!(
            SampleStyle::default().merged(&style),
            Err(StyleError::Negative {
                key: StyleKey::PadY,
                value: -1,
            })
        );
    }

    #[test]
    fn test_every_offered_value_renders() {
        use crate::app::domain::style::option_table;

        let base = SampleStyle::default();
        for option in option_table() {
            for value in option.values {
                let style = StyleDict::new().with(option.key, value.clone());
                assert!(base.merged(&style).is_ok(), "{} = {}", option.key, value);
            }
        }
    }

    #[test]
    fn test_display_lines() {
        let mut style = SampleStyle {
            text: "Hello\nWorld".to_string(),
            ..Default::default()
        };
        assert_eq!(style.display_lines(), ["Hello", "World"]);

        style.text = "Hello World".to_string();
        assert_eq!(style.display_lines(), ["Hello World"]);

        // 40px is five characters
        style.wrap_length = 40;
        assert_eq!(style.display_lines(), ["Hello", "World"]);
    }

    #[test]
    fn test_wrap_line() {
        assert_eq!(wrap_line("a bb ccc dddd", 6), ["a bb", "ccc", "dddd"]);
        assert_eq!(wrap_line("extraordinary", 4), ["extraordinary"]);
        assert_eq!(wrap_line("", 4), [""]);
    }

    #[test]
    fn test_size_uses_character_cells() {
        let style = SampleStyle {
            width: 20,
            height: 2,
            pad_x: 10,
            pad_y: 0,
            border_width: 2,
            highlight_thickness: 2,
            ..Default::default()
        };
        assert_eq!(
            style.size(),
            (20 * CHAR_WIDTH + 2 * 14, 2 * LINE_HEIGHT + 2 * 4)
        );
    }

    #[test]
    fn test_size_natural_from_text() {
        let style = SampleStyle {
            text: "Hello\nWorld!".to_string(),
            pad_x: 0,
            pad_y: 0,
            border_width: 0,
            ..Default::default()
        };
        assert_eq!(style.size(), (6 * CHAR_WIDTH, 2 * LINE_HEIGHT));
    }

    #[test]
    fn test_block_origin() {
        let content = (10, 20, 100, 50);
        assert_eq!(block_origin(Anchor::Center, content, (40, 10)), (40, 40));
        assert_eq!(block_origin(Anchor::N, content, (40, 10)), (40, 20));
        assert_eq!(block_origin(Anchor::S, content, (40, 10)), (40, 60));
        assert_eq!(block_origin(Anchor::W, content, (40, 10)), (10, 40));
        assert_eq!(block_origin(Anchor::E, content, (40, 10)), (70, 40));
    }

    #[test]
    fn test_line_offset() {
        assert_eq!(line_offset(Justify::Left, 80, 40), 0);
        assert_eq!(line_offset(Justify::Center, 80, 40), 20);
        assert_eq!(line_offset(Justify::Right, 80, 40), 40);
    }
}
