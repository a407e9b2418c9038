//! Responsive sidebar layout.

use serde::Serialize;

/// Width in logical pixels at which the layout switches to desktop.
pub const DEFAULT_BREAKPOINT: f64 = 768.0;

/// Viewport width category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    /// Narrower than the breakpoint.
    Mobile,
    /// At or above the breakpoint.
    Desktop,
}

impl ViewportClass {
    /// Classify a width: `< breakpoint` is mobile, `>= breakpoint` is desktop.
    #[must_use]
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Viewport class and mobile sidebar visibility.
///
/// `sidebar_visible` only affects rendering on mobile; desktop always shows
/// the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutState {
    viewport_class: ViewportClass,
    sidebar_visible: bool,
    #[serde(skip)]
    breakpoint: f64,
}

impl LayoutState {
    /// Initial layout for a viewport of `width`, sidebar hidden.
    ///
    /// An invalid width is treated as desktop.
    #[must_use]
    pub fn at_width(width: f64, breakpoint: f64) -> Self {
        let viewport_class = if is_valid_width(width) {
            ViewportClass::from_width(width, breakpoint)
        } else {
            tracing::warn!(width, "Invalid initial viewport width, assuming desktop");
            ViewportClass::Desktop
        };
        Self {
            viewport_class,
            sidebar_visible: false,
            breakpoint,
        }
    }

    /// Apply a resize signal.
    ///
    /// Entering desktop resets `sidebar_visible` to false; any other
    /// transition leaves the flag alone. Non-finite or negative widths are
    /// ignored.
    #[must_use]
    pub fn on_resize(self, width: f64) -> Self {
        if !is_valid_width(width) {
            tracing::warn!(width, "Ignoring resize with invalid width");
            return self;
        }

        let viewport_class = ViewportClass::from_width(width, self.breakpoint);
        let sidebar_visible = if self.viewport_class == ViewportClass::Mobile
            && viewport_class == ViewportClass::Desktop
        {
            false
        } else {
            self.sidebar_visible
        };

        Self {
            viewport_class,
            sidebar_visible,
            breakpoint: self.breakpoint,
        }
    }

    #[must_use]
    pub fn open_sidebar(self) -> Self {
        Self {
            sidebar_visible: true,
            ..self
        }
    }

    #[must_use]
    pub fn close_sidebar(self) -> Self {
        Self {
            sidebar_visible: false,
            ..self
        }
    }

    #[must_use]
    pub fn viewport_class(&self) -> ViewportClass {
        self.viewport_class
    }

    /// Raw visibility flag, as last set.
    #[must_use]
    pub fn sidebar_visible(&self) -> bool {
        self.sidebar_visible
    }

    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.viewport_class == ViewportClass::Mobile
    }

    /// Whether the renderer shows the sidebar.
    #[must_use]
    pub fn sidebar_shown(&self) -> bool {
        !self.is_mobile() || self.sidebar_visible
    }
}

fn is_valid_width(width: f64) -> bool {
    width.is_finite() && width >= 0.0
}
