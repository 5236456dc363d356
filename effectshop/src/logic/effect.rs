use super::{
    Context,
    notice::Notice,
    viewer::{LOADED_IMAGE, PROCESSED_IMAGE},
};
use crate::{
    config, global_store, logic_cb,
    session::intensity_label,
    slint_generatedAppWindow::AppWindow,
};
use image_effect::{Intensity, PhotoEffect};
use native_dialog::DialogBuilder;
use slint::ComponentHandle;
use std::path::PathBuf;

const OPEN_EXTENSIONS: &[&str] = &["png", "xpm", "jpg", "jpeg", "bmp"];
const SAVE_EXTENSIONS: &[&str] = &["png", "jpg", "bmp"];

pub fn init(ui: &AppWindow, ctx: &Context) {
    logic_cb!(load_image, ui, ctx);
    logic_cb!(apply_effect, ui, ctx);
    logic_cb!(save_image, ui, ctx);
    logic_cb!(reset_image, ui, ctx);
    logic_cb!(quit, ui, ctx);
    logic_cb!(intensity_changed, ui, ctx, value);
}

fn load_image(_ui: &AppWindow, ctx: &Context) {
    let Some(path) = pick_open_file() else {
        return;
    };

    let result = {
        let mut session = ctx.session.borrow_mut();
        session
            .load(&path)
            .map(|image| ctx.viewers.show(LOADED_IMAGE, image))
    };

    if let Err(e) = result {
        log::warn!("{e}");
        Notice::from(&e).show();
    }
}

fn apply_effect(ui: &AppWindow, ctx: &Context) {
    let store = global_store!(ui);
    let effect = match PhotoEffect::try_from(store.get_current_effect_index() as u8) {
        Ok(effect) => effect,
        Err(e) => {
            log::warn!("{e}");
            return;
        }
    };
    let intensity = Intensity::new(store.get_intensity());

    let result = {
        let mut session = ctx.session.borrow_mut();
        session
            .apply(effect, intensity)
            .map(|image| ctx.viewers.show(PROCESSED_IMAGE, image))
    };

    if let Err(e) = result {
        log::warn!("{e}");
        Notice::from(&e).show();
    }
}

fn save_image(_ui: &AppWindow, ctx: &Context) {
    let missing = ctx.session.borrow().ensure_result().err();
    if let Some(e) = missing {
        log::warn!("{e}");
        Notice::from(&e).show();
        return;
    }

    let Some(path) = pick_save_file() else {
        return;
    };

    let result = ctx.session.borrow().save(&path);

    match result {
        Ok(_) => Notice::info("Saved", format!("Image saved to {}", path.display())).show(),
        Err(e) => {
            log::warn!("{e}");
            Notice::from(&e).show();
        }
    }
}

fn reset_image(_ui: &AppWindow, ctx: &Context) {
    let mut session = ctx.session.borrow_mut();
    if let Some(source) = session.reset() {
        ctx.viewers.show(LOADED_IMAGE, source);
        log::info!("reset processed image");
    }
}

fn intensity_changed(ui: &AppWindow, _ctx: &Context, value: i32) {
    let intensity = Intensity::new(value);
    let store = global_store!(ui);

    store.set_intensity(intensity.value() as i32);
    store.set_intensity_label(intensity_label(intensity).into());
}

fn quit(ui: &AppWindow, ctx: &Context) {
    ctx.viewers.close_all();
    _ = ui.hide();

    if let Err(e) = slint::quit_event_loop() {
        log::warn!("{e}");
    }
}

fn pick_open_file() -> Option<PathBuf> {
    let mut dialog = DialogBuilder::file()
        .set_title("Open Image")
        .add_filter("Images", OPEN_EXTENSIONS);

    if let Some(dir) = config::all().effect.work_dir() {
        dialog = dialog.set_location(&dir);
    }

    match dialog.open_single_file().show() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("choose image failed: {e}");
            Notice::warning(format!("Choose image failed. Reason: {e}")).show();
            None
        }
    }
}

fn pick_save_file() -> Option<PathBuf> {
    let setting = config::all().effect;
    let mut dialog = DialogBuilder::file()
        .set_title("Save File")
        .set_filename(&setting.save_filename)
        .add_filter("Images", SAVE_EXTENSIONS);

    if let Some(dir) = setting.work_dir() {
        dialog = dialog.set_location(&dir);
    }

    match dialog.save_single_file().show() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("choose save path failed: {e}");
            Notice::warning(format!("Choose save path failed. Reason: {e}")).show();
            None
        }
    }
}
