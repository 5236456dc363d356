//! UI logic and callback management module
//!
//! Connects the Slint callbacks to the image session and owns the state the
//! handlers share.

use crate::{config, session::Session, slint_generatedAppWindow::AppWindow};
use image_effect::PhotoEffect;
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};
use std::{cell::RefCell, rc::Rc};

mod effect;
mod notice;
mod viewer;

use viewer::ViewerRegistry;

/// Macro to access the global Store component
#[macro_export]
macro_rules! global_store {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Store>()
    };
}

/// Macro to access the global Logic component
#[macro_export]
macro_rules! global_logic {
    ($ui:expr) => {
        $ui.global::<crate::slint_generatedAppWindow::Logic>()
    };
}

/// Macro to connect Slint callbacks to Rust functions
///
/// The handler receives the window, the shared handler context and the
/// callback arguments. The window is held weakly.
///
/// # Parameters
/// - `$callback_name`: Name of the callback function
/// - `$ui`: AppWindow instance
/// - `$ctx`: Handler context, cloned into the closure
/// - `$($arg:ident),*`: Callback arguments
#[macro_export]
macro_rules! logic_cb {
    ($callback_name:ident, $ui:expr, $ctx:expr, $($arg:ident),*) => {
        {{
            let ui_weak = $ui.as_weak();
            let ctx = $ctx.clone();
            paste::paste! {
                crate::global_logic!($ui)
                    .[<on_ $callback_name>](move |$($arg),*| {
                        $callback_name(&ui_weak.unwrap(), &ctx, $($arg),*)
                    });
            }
        }}
    };
    ($callback_name:ident, $ui:expr, $ctx:expr) => {
        {{
            let ui_weak = $ui.as_weak();
            let ctx = $ctx.clone();
            paste::paste! {
                crate::global_logic!($ui)
                    .[<on_ $callback_name>](move || {
                        $callback_name(&ui_weak.unwrap(), &ctx)
                    });
            }
        }}
    };
}

/// State shared by the UI handlers, all on the UI thread.
#[derive(Clone, Default)]
pub struct Context {
    pub session: Rc<RefCell<Session>>,
    pub viewers: Rc<ViewerRegistry>,
}

pub fn init(ui: &AppWindow) {
    let ctx = Context::default();

    init_store(ui);
    effect::init(ui, &ctx);

    let viewers = ctx.viewers.clone();
    ui.window().on_close_requested(move || {
        viewers.close_all();
        _ = slint::quit_event_loop();
        slint::CloseRequestResponse::HideWindow
    });
}

fn init_store(ui: &AppWindow) {
    let config = config::all();
    let store = global_store!(ui);

    let names = PhotoEffect::all_effects()
        .iter()
        .map(|effect| SharedString::from(effect.name()))
        .collect::<Vec<_>>();
    store.set_effect_names(ModelRc::new(VecModel::from(names)));

    let effect: u8 = config.effect.effect().into();
    store.set_current_effect_index(effect as i32);

    let intensity = config.effect.intensity();
    store.set_intensity(intensity.value() as i32);
    store.set_intensity_label(crate::session::intensity_label(intensity).into());

    store.set_always_on_top(config.preference.always_on_top);
    ui.window().set_size(slint::LogicalSize::new(
        config.preference.win_width as f32,
        config.preference.win_height as f32,
    ));
}
