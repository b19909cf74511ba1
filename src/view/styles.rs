//! Browser styling configuration.
//!
//! Three styles cover the whole screen: normal text, the status bar and the
//! highlighted entry.

use ratatui::style::{Color, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Resolved from the `--no-color` flag, the `no_color` config key and the
/// `NO_COLOR` environment variable before it reaches the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig with colors on or off.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

// ===== BrowserStyles =====

/// Styles for the browser screen.
///
/// - Normal text: white on black
/// - Status bar: black on white
/// - Selected entry: white on green
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStyles {
    normal: Style,
    status: Style,
    selected: Style,
}

impl BrowserStyles {
    /// Create styles for the given color configuration.
    ///
    /// If colors are disabled, every style is the terminal default.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                normal: Style::default().fg(Color::White).bg(Color::Black),
                status: Style::default().fg(Color::Black).bg(Color::White),
                selected: Style::default().fg(Color::White).bg(Color::Green),
            }
        } else {
            Self {
                normal: Style::default(),
                status: Style::default(),
                selected: Style::default(),
            }
        }
    }

    /// Prompt, help line and unselected entries.
    pub fn normal(&self) -> Style {
        self.normal
    }

    /// Status bar.
    pub fn status(&self) -> Style {
        self.status
    }

    /// Highlighted entry.
    pub fn selected(&self) -> Style {
        self.selected
    }
}

impl Default for BrowserStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::default())
    }
}

// ===== Tests =====
