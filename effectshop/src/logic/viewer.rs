//! Image viewer windows
//!
//! One window per title. Showing an image under a title that is already
//! open replaces the content of that window instead of opening another.

use crate::slint_generatedAppWindow::ImageViewer;
use image::DynamicImage;
use slint::{ComponentHandle, Image, Rgb8Pixel, SharedPixelBuffer};
use std::{cell::RefCell, collections::HashMap};

pub const LOADED_IMAGE: &str = "Loaded Image";
pub const PROCESSED_IMAGE: &str = "Processed Image";

#[derive(Default)]
pub struct ViewerRegistry {
    viewers: RefCell<HashMap<&'static str, ImageViewer>>,
}

impl ViewerRegistry {
    pub fn show(&self, title: &'static str, image: &DynamicImage) {
        let source = to_slint_image(image);
        let mut viewers = self.viewers.borrow_mut();

        if let Some(viewer) = viewers.get(title) {
            viewer.set_source(source);
            if let Err(e) = viewer.show() {
                log::warn!("show `{title}` failed: {e}");
            }
            return;
        }

        let viewer = match ImageViewer::new() {
            Ok(viewer) => viewer,
            Err(e) => {
                log::warn!("create `{title}` viewer failed: {e}");
                return;
            }
        };

        viewer.set_caption(title.into());
        viewer.set_source(source);

        if let Err(e) = viewer.show() {
            log::warn!("show `{title}` failed: {e}");
        }
        viewers.insert(title, viewer);
    }

    pub fn close_all(&self) {
        for (title, viewer) in self.viewers.borrow_mut().drain() {
            if let Err(e) = viewer.hide() {
                log::warn!("close `{title}` failed: {e}");
            }
        }
    }
}

/// Copies `image` into an RGB buffer the UI can draw.
pub fn to_slint_image(image: &DynamicImage) -> Image {
    let rgb = image.to_rgb8();
    let buffer =
        SharedPixelBuffer::<Rgb8Pixel>::clone_from_slice(rgb.as_raw(), rgb.width(), rgb.height());
    Image::from_rgb8(buffer)
}
