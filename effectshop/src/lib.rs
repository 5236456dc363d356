//! Photo effects desktop application
//!
//! Loads an image, applies one of the effects of the `image-effect` crate
//! with a chosen intensity, shows the source and the result in their own
//! viewer windows and saves the result.
//!
//! # Architecture
//! - `session`: the loaded image and the processed result
//! - `config`: global configuration loaded from the platform config dir
//! - `logic`: Slint callback wiring, dialogs and viewer windows

slint::include_modules!();

#[macro_use]
extern crate derivative;

mod config;
mod logic;
pub mod session;

/// Initializes the logger.
///
/// Each record is written as `[time level file line] message`.
pub fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .filter_module("zbus", log::LevelFilter::Warn)
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = cutil::time::local_now("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn ui_before() {
    init_logger();
    config::init();

    #[cfg(target_os = "linux")]
    {
        _ = slint::set_xdg_app_id("effectshop".to_string());
    }
}

fn ui_after(ui: &AppWindow) {
    logic::init(ui);
}

/// Main entry point for the desktop application.
pub fn desktop_main() -> anyhow::Result<()> {
    log::debug!("start...");

    ui_before();
    let ui = AppWindow::new()?;
    ui_after(&ui);

    ui.run()?;

    log::debug!("exit...");
    Ok(())
}
