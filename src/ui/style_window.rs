use std::cell::{Cell, RefCell};
use std::rc::Rc;

use fltk::{
    app::Sender,
    button::Button,
    dialog,
    draw,
    enums::{Align, Cursor, Event, FrameType},
    frame::Frame,
    group::{Flex, FlexType, Group},
    prelude::*,
    window::Window,
};

use crate::app::controllers::style_lab::StyleView;
use crate::app::domain::messages::StyleMessage;
use crate::app::domain::settings::WindowSettings;
use crate::app::domain::style::{StyleDict, StyleError, StyleOption, option_table};
use crate::app::domain::style_model::Theme;

use super::sample::SampleStyle;
use super::theme::{ChromePalette, apply_chrome};

pub const STYLE_LAB_TITLE: &str = "LAB 03 - Variant 17";

/// Height of the Widget area unless the sample needs more
const WIDGET_AREA_HEIGHT: i32 = 130;
const THEME_ROW_HEIGHT: i32 = 48;
const DEFAULT_BUTTON_HEIGHT: i32 = 30;
const PARAM_BUTTON_HEIGHT: i32 = 22;
/// Room left above a section's children for its caption
const CAPTION_SPACE: i32 = 16;
/// Engraved frame edge kept clear below the sample
const FRAME_EDGE: i32 = 2;

pub struct StyleLabWindow {
    pub wind: Window,
    root: Flex,
    area: Group,
    sample: Frame,
    style: Rc<RefCell<SampleStyle>>,
}

impl StyleLabWindow {
    pub fn build(size: WindowSettings, sender: Sender<StyleMessage>) -> Self {
        let mut wind = Window::new(100, 100, size.width, size.height, STYLE_LAB_TITLE);
        wind.set_xclass("mvc-lab");

        let mut root = Flex::new(0, 0, size.width, size.height, None);
        root.set_type(FlexType::Column);
        root.set_margin(4);
        root.set_pad(4);

        // Widget
        let style = Rc::new(RefCell::new(SampleStyle::default()));
        let mut area = Group::default().with_label("Widget");
        caption(&mut area);
        let sample = build_sample(&style);
        area.end();
        root.fixed(&area, WIDGET_AREA_HEIGHT);

        // Themes
        let mut themes = section("Themes", FlexType::Row);
        for (label, theme) in [("LIGHT THEME", Theme::Light), ("DARK THEME", Theme::Dark)] {
            let mut btn = Button::default().with_label(label);
            btn.set_callback(move |_| sender.send(StyleMessage::Theme(theme)));
        }
        themes.end();
        root.fixed(&themes, THEME_ROW_HEIGHT);

        // Settings
        let mut settings_panel = section("Settings", FlexType::Row);
        settings_panel.set_pad(2);
        for option in option_table() {
            build_option_column(&option, sender);
        }
        settings_panel.end();

        let mut default_btn = Button::default().with_label("DEFAULT");
        default_btn.set_callback(move |_| sender.send(StyleMessage::ResetDefault));
        root.fixed(&default_btn, DEFAULT_BUTTON_HEIGHT);

        root.end();
        wind.resizable(&root);
        wind.end();

        {
            let mut sample = sample.clone();
            let style = style.clone();
            area.resize_callback(move |_, x, y, w, h| {
                place_sample((x, y, w, h), &mut sample, &style.borrow());
            });
        }

        let mut view = Self {
            wind,
            root,
            area,
            sample,
            style,
        };
        view.relayout();
        view
    }

    pub fn apply_chrome(&mut self, is_dark: bool) {
        apply_chrome(&mut self.wind, &ChromePalette::for_mode(is_dark));
    }

    pub fn show(&mut self) {
        self.wind.show();
    }

    /// Grow or shrink the Widget area to fit the sample, then re-centre it.
    fn relayout(&mut self) {
        let needed = area_height(&self.style.borrow());
        if needed != self.area.h() {
            self.root.fixed(&self.area, needed);
            self.root.layout();
        }
        let rect = (self.area.x(), self.area.y(), self.area.w(), self.area.h());
        place_sample(rect, &mut self.sample, &self.style.borrow());
        self.wind.redraw();
    }
}

impl StyleView for StyleLabWindow {
    fn apply_style(&mut self, style: &StyleDict) -> Result<(), StyleError> {
        let next = self.style.borrow().merged(style)?;
        *self.style.borrow_mut() = next;
        self.relayout();
        Ok(())
    }

    fn default_style(&self) -> StyleDict {
        self.style.borrow().to_dict()
    }

    fn show_error(&mut self, message: &str) {
        dialog::alert_default(message);
    }
}

/// Engraved frame with a caption in the top-left corner.
fn caption<W: WidgetExt>(widget: &mut W) {
    widget.set_frame(FrameType::EngravedFrame);
    widget.set_align(Align::TopLeft | Align::Inside);
    widget.set_label_size(12);
}

fn section(label: &str, kind: FlexType) -> Flex {
    let mut flex = Flex::default().with_label(label);
    flex.set_type(kind);
    caption(&mut flex);
    flex.set_margins(6, CAPTION_SPACE + 2, 6, 6);
    flex.set_pad(6);
    flex
}

/// One captioned column of buttons, one per candidate value.
fn build_option_column(option: &StyleOption, sender: Sender<StyleMessage>) {
    let mut column = section(option.key.name(), FlexType::Column);
    column.set_label_size(10);
    column.set_margins(2, CAPTION_SPACE, 2, 2);
    column.set_pad(2);

    for value in &option.values {
        let label = value.to_string();
        let lines = label.lines().count().max(1) as i32;
        let mut btn = Button::default().with_label(&label);
        btn.set_label_size(11);
        let msg = StyleMessage::SetParam(option.key, value.clone());
        btn.set_callback(move |_| sender.send(msg.clone()));
        column.fixed(&btn, PARAM_BUTTON_HEIGHT * lines);
    }

    // Filler keeps the buttons packed at the top
    Frame::default();
    column.end();
}

fn build_sample(style: &Rc<RefCell<SampleStyle>>) -> Frame {
    let mut sample = Frame::default();
    sample.set_frame(FrameType::NoBox);
    let hovered = Rc::new(Cell::new(false));

    {
        let style = style.clone();
        let hovered = hovered.clone();
        sample.draw(move |f| {
            style.borrow().paint(f.x(), f.y(), f.w(), f.h(), hovered.get());
        });
    }

    let style = style.clone();
    sample.handle(move |f, ev| match ev {
        Event::Enter => {
            hovered.set(true);
            draw::set_cursor(style.borrow().fltk_cursor());
            f.redraw();
            true
        }
        Event::Leave => {
            hovered.set(false);
            draw::set_cursor(Cursor::Default);
            f.redraw();
            true
        }
        _ => false,
    });

    sample
}

/// Height of the Widget area that holds `style` below the caption.
fn area_height(style: &SampleStyle) -> i32 {
    let (_, h) = style.size();
    WIDGET_AREA_HEIGHT.max(CAPTION_SPACE + h + FRAME_EDGE)
}

/// Sample box centred in the area's free space below the caption.
fn sample_rect(area: (i32, i32, i32, i32), size: (i32, i32)) -> (i32, i32, i32, i32) {
    let (ax, ay, aw, ah) = area;
    let (w, h) = size;
    let free = ah - CAPTION_SPACE - FRAME_EDGE;
    let x = ax + ((aw - w) / 2).max(0);
    let y = ay + CAPTION_SPACE + ((free - h) / 2).max(0);
    (x, y, w, h)
}

fn place_sample(area: (i32, i32, i32, i32), sample: &mut Frame, style: &SampleStyle) {
    let (x, y, w, h) = sample_rect(area, style.size());
    sample.resize(x, y, w, h);
    sample.redraw();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::style::StyleKey;

    /// Every combination of offered values for the parameters that make
    /// the sample taller.
    fn tall_combinations() -> Vec<StyleDict> {
        let vertical = [
            StyleKey::Height,
            StyleKey::Text,
            StyleKey::WrapLength,
            StyleKey::PadY,
            StyleKey::BorderWidth,
            StyleKey::HighlightThickness,
        ];
        let mut combos = vec![StyleDict::new()];
        for option in option_table() {
            if !vertical.contains(&option.key) {
                continue;
            }
            let mut next = Vec::new();
            for dict in &combos {
                for value in &option.values {
                    next.push(dict.clone().with(option.key, value.clone()));
                }
            }
            combos = next;
        }
        combos
    }

    #[test]
    fn test_default_sample_keeps_base_area() {
        assert_eq!(area_height(&SampleStyle::default()), WIDGET_AREA_HEIGHT);
        for theme in [Theme::Light, Theme::Dark] {
            let style = SampleStyle::default().merged(&theme.style()).unwrap();
            assert_eq!(area_height(&style), WIDGET_AREA_HEIGHT);
        }
    }

    #[test]
    fn test_offered_values_fit_inside_area() {
        let combos = tall_combinations();
        assert_eq!(combos.len(), 3 * 2 * 2 * 4 * 3 * 3);

        let mut grew = false;
        for dict in combos {
            let style = SampleStyle::default().merged(&dict).unwrap();
            let area = (0, 0, 1000, area_height(&style));
            let (_, y, _, h) = sample_rect(area, style.size());
            assert!(y >= CAPTION_SPACE, "{:?} overlaps the caption", dict);
            assert!(y + h <= area.3 - FRAME_EDGE, "{:?} overflows", dict);
            grew |= area.3 > WIDGET_AREA_HEIGHT;
        }
        // The tallest offered sample does not fit the base height
        assert!(grew);
    }

    #[test]
    fn test_sample_rect_centres_below_caption() {
        let area = (10, 20, 300, 130);
        let rect = sample_rect(area, (100, 40));
        let free = 130 - CAPTION_SPACE - FRAME_EDGE;
        assert_eq!(rect, (110, 20 + CAPTION_SPACE + (free - 40) / 2, 100, 40));
    }
}
