#![windows_subsystem = "windows"]

fn main() {
    extern crate effectshop;

    if let Err(e) = effectshop::desktop_main() {
        log::error!("{e:?}");
        std::process::exit(1);
    }
}
