use crate::app::domain::messages::StyleMessage;
use crate::app::domain::style::{StyleDict, StyleError};
use crate::app::domain::style_model::StyleModel;

/// What the style lab controller needs from its window.
pub trait StyleView {
    /// Render the sample from `style`. Nothing changes on error.
    fn apply_style(&mut self, style: &StyleDict) -> Result<(), StyleError>;

    /// The sample's complete initial configuration.
    fn default_style(&self) -> StyleDict;

    fn show_error(&mut self, message: &str);
}

pub struct StyleLabController<V: StyleView> {
    model: StyleModel,
    view: V,
}

impl<V: StyleView> StyleLabController<V> {
    /// Capture the view's initial style as the default.
    pub fn new(view: V) -> Self {
        let default_style = view.default_style();
        tracing::info!(params = default_style.len(), "captured default style");
        Self {
            model: StyleModel::new(default_style),
            view,
        }
    }

    pub fn handle(&mut self, msg: StyleMessage) {
        tracing::debug!(?msg, "style lab message");
        match msg {
            StyleMessage::Theme(theme) => self.model.apply_theme(theme),
            StyleMessage::SetParam(key, value) => self.model.update_param(key, value),
            StyleMessage::ResetDefault => self.model.reset_default(),
        }
        self.render();
    }

    fn render(&mut self) {
        if let Err(e) = self.view.apply_style(self.model.style()) {
            tracing::warn!("cannot render style: {}", e);
            self.view.show_error(&e.to_string());
        }
    }

    pub fn model(&self) -> &StyleModel {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}
