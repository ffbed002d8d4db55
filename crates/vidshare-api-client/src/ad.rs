//! Post-playback ad overlay.

/// Where a click landed relative to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdClick {
    Content,
    Outside,
}

/// Overlay shown when playback ends. The outbound link comes from server
/// configuration.
#[derive(Debug, Clone)]
pub struct AdOverlay {
    link: String,
    showing: bool,
}

impl AdOverlay {
    pub fn new(link: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            showing: false,
        }
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }

    /// Playback ended.
    pub fn show(&mut self) {
        self.showing = true;
    }

    /// Close button. Hides without opening the link.
    pub fn close(&mut self) {
        self.showing = false;
    }

    /// Returns the link to open, if the click should open it.
    pub fn click(&self, target: AdClick) -> Option<&str> {
        if !self.showing {
            return None;
        }
        match target {
            AdClick::Content | AdClick::Outside => Some(self.link.as_str()),
        }
    }
}
