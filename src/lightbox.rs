//! Gallery lightbox state.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

/// The image currently shown in the overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

/// Where a click inside an open lightbox landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxClick {
    /// The dimmed area around the content.
    Backdrop,
    /// The `.lightbox-close` button.
    CloseButton,
    /// The image or caption.
    Content,
}

impl LightboxClick {
    #[must_use]
    pub fn closes(self) -> bool {
        !matches!(self, Self::Content)
    }
}

/// At most one image is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    current: Option<LightboxImage>,
}

impl Lightbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on a gallery item. Replaces any image already shown. An item
    /// without an image source is not opened.
    pub fn open(&mut self, src: &str, alt: &str) -> Option<&LightboxImage> {
        if src.is_empty() {
            return None;
        }
        self.current = Some(LightboxImage { src: src.to_owned(), alt: alt.to_owned() });
        self.current.as_ref()
    }

    /// Returns `true` when the click closed the overlay.
    pub fn click(&mut self, target: LightboxClick) -> bool {
        if self.current.is_none() || !target.closes() {
            return false;
        }
        self.current = None;
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&LightboxImage> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}
