use fltk::app;

use mvc_lab::app::infrastructure::logging;
use mvc_lab::app::{AppSettings, StyleLabController, StyleMessage};
use mvc_lab::ui::style_window::StyleLabWindow;

fn main() {
    let loaded = AppSettings::load();
    let settings = match &loaded {
        Ok(settings) => settings.clone(),
        Err(_) => AppSettings::default(),
    };
    logging::init(&settings.log_filter);
    if let Err(e) = loaded {
        tracing::warn!("{}. Using default settings.", e);
    }

    let app = app::App::default();
    let (sender, receiver) = app::channel::<StyleMessage>();

    let mut view = StyleLabWindow::build(settings.style_lab, sender);
    view.apply_chrome(settings.theme_mode.is_dark());
    view.show();

    let mut controller = StyleLabController::new(view);
    tracing::info!("style lab ready");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            controller.handle(msg);
        }
    }
}
