use fltk::app;

use mvc_lab::app::infrastructure::logging;
use mvc_lab::app::{AppSettings, TaskManagerController, TaskMessage};
use mvc_lab::ui::task_window::TaskManagerWindow;

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
    let (sender, receiver) = app::channel::<TaskMessage>();

    let mut view = TaskManagerWindow::build(settings.task_manager, sender);
    view.apply_chrome(settings.theme_mode.is_dark());
    view.show();

    let mut controller = TaskManagerController::new(view);
    controller.render();
    tracing::info!("task manager ready");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            controller.handle(msg);
        }
    }
}
