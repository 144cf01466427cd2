use fltk::{enums::Color, prelude::*};

/// Colours for the window chrome. The style lab's sample widget paints
/// itself and ignores these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromePalette {
    pub background: Color,
    pub foreground: Color,
    pub button: Color,
    pub selection: Color,
    pub field: Color,
    pub field_text: Color,
    /// Text colour for de-emphasised list lines
    pub muted: Color,
}

impl ChromePalette {
    pub fn for_mode(is_dark: bool) -> Self {
        if is_dark {
            Self {
                background: Color::from_rgb(25, 25, 25),
                foreground: Color::from_rgb(220, 220, 220),
                button: Color::from_rgb(45, 45, 45),
                selection: Color::from_rgb(70, 70, 100),
                field: Color::from_rgb(30, 30, 30),
                field_text: Color::from_rgb(220, 220, 220),
                muted: Color::from_rgb(120, 120, 120),
            }
        } else {
            Self {
                background: Color::from_rgb(240, 240, 240),
                foreground: Color::Black,
                button: Color::from_rgb(225, 225, 225),
                selection: Color::from_rgb(173, 216, 230),
                field: Color::White,
                field_text: Color::Black,
                muted: Color::from_rgb(150, 150, 150),
            }
        }
    }
}

/// Recolour a group and everything inside it.
pub fn apply_chrome<G: GroupExt>(group: &mut G, palette: &ChromePalette) {
    group.set_color(palette.background);
    group.set_label_color(palette.foreground);

    for i in 0..group.children() {
        let Some(mut child) = group.child(i) else {
            continue;
        };
        if let Some(mut inner) = child.as_group() {
            apply_chrome(&mut inner, palette);
            continue;
        }
        child.set_color(palette.button);
        child.set_label_color(palette.foreground);
        child.set_selection_color(palette.selection);
    }

    group.redraw();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ() {
        let light = ChromePalette::for_mode(false);
        let dark = ChromePalette::for_mode(true);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.field_text, dark.field_text);
        assert_ne!(dark.muted, dark.field_text);
    }
}
