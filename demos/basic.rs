//! Standalone demo: opens a phone-shaped window with the picker screen.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_swatch::{PickerColor, swatch_picker};

fn main() {
    env_logger::init();

    let color = RwSignal::new(PickerColor::from_hex("#ff0000").unwrap());

    floem::Application::new()
        .window(
            move |_| {
                swatch_picker(color).on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 640.0))
                    .title("New color"),
            ),
        )
        .run();
}
