//! Modal message boxes
//!
//! User facing outcomes are reported through native message dialogs.

use crate::session::SessionError;
use native_dialog::{DialogBuilder, MessageLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Warning".to_string(),
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            text: text.into(),
        }
    }

    /// Blocks until the user dismisses the dialog.
    pub fn show(&self) {
        let level = match self.level {
            NoticeLevel::Info => MessageLevel::Info,
            NoticeLevel::Warning => MessageLevel::Warning,
            NoticeLevel::Error => MessageLevel::Error,
        };

        let result = DialogBuilder::message()
            .set_level(level)
            .set_title(&self.title)
            .set_text(&self.text)
            .alert()
            .show();

        if let Err(e) = result {
            log::warn!("show message dialog failed: {e}. {}: {}", self.title, self.text);
        }
    }
}

impl From<&SessionError> for Notice {
    fn from(e: &SessionError) -> Self {
        match e {
            SessionError::Load { .. } => Notice::error("Failed to load image."),
            SessionError::NoSource | SessionError::NoResult => Notice::warning(e.to_string()),
            SessionError::Effect { .. } => Notice::error(e.to_string()),
            SessionError::Save { source, .. } => {
                Notice::error(format!("Failed to save image: {source}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageError;
    use std::{io, path::PathBuf};

    fn disk_full() -> ImageError {
        ImageError::IoError(io::Error::other("disk full"))
    }

    #[test]
    fn test_precondition_warnings() {
        assert_eq!(
            Notice::from(&SessionError::NoSource),
            Notice::warning("Please load an image first.")
        );
        assert_eq!(
            Notice::from(&SessionError::NoResult),
            Notice::warning("No processed image to save.")
        );
    }

    #[test]
    fn test_load_error() {
        let notice = Notice::from(&SessionError::Load {
            path: PathBuf::from("broken.png"),
            source: disk_full(),
        });

        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.title, "Error");
        assert_eq!(notice.text, "Failed to load image.");
    }

    #[test]
    fn test_save_error_carries_reason() {
        let notice = Notice::from(&SessionError::Save {
            path: PathBuf::from("out"),
            source: disk_full(),
        });

        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.text, "Failed to save image: disk full");
    }

    #[test]
    fn test_saved_info() {
        let notice = Notice::info("Saved", "Image saved to /tmp/processed_image.jpg");
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.title, "Saved");
    }
}
