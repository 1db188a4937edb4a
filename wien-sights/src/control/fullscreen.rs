/// Button switching the map between windowed and fullscreen mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullscreenControl {
    is_fullscreen: bool,
    title_windowed: String,
    title_fullscreen: String,
}

impl Default for FullscreenControl {
    fn default() -> Self {
        Self::new("View Fullscreen", "Exit Fullscreen")
    }
}

impl FullscreenControl {
    /// Creates a control with the given button titles for the windowed and fullscreen modes.
    pub fn new(title_windowed: impl Into<String>, title_fullscreen: impl Into<String>) -> Self {
        Self {
            is_fullscreen: false,
            title_windowed: title_windowed.into(),
            title_fullscreen: title_fullscreen.into(),
        }
    }

    /// Switches the mode. Returns true if the map is fullscreen afterwards.
    pub fn toggle(&mut self) -> bool {
        self.is_fullscreen = !self.is_fullscreen;
        self.is_fullscreen
    }

    /// Whether the map is fullscreen.
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen
    }

    /// Title of the button in the current mode.
    pub fn title(&self) -> &str {
        if self.is_fullscreen {
            &self.title_fullscreen
        } else {
            &self.title_windowed
        }
    }
}
