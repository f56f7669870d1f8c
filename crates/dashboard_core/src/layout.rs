//! Responsive layout state machine: sidebar, device class, menu selection,
//! and the notifications panel.
//!
//! The controller never inspects its host. Mobile detection is a function of
//! the viewport width it is told about, so the whole machine can be driven
//! from tests or a replayed event script.

use serde::{Deserialize, Serialize};
use shared::{domain::MenuItemId, error::DashboardError};
use tracing::debug;

use crate::config::Settings;

pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;
pub const DEFAULT_DOUBLE_TAP_WINDOW_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Width classes reported by the mobile diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn classify(width: u32) -> Self {
        match width {
            0..=480 => Self::Xs,
            481..=768 => Self::Sm,
            769..=1024 => Self::Md,
            1025..=1200 => Self::Lg,
            _ => Self::Xl,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Xs => "XS (Mobile Small)",
            Self::Sm => "SM (Mobile Large)",
            Self::Md => "MD (Tablet)",
            Self::Lg => "LG (Desktop Small)",
            Self::Xl => "XL (Desktop Large)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn of(viewport: Viewport) -> Self {
        if viewport.width > viewport.height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }
}

/// Last measured viewport and what it classifies as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportInfo {
    pub viewport: Viewport,
    pub breakpoint: Breakpoint,
    pub orientation: Orientation,
}

impl ViewportInfo {
    pub fn measure(viewport: Viewport) -> Self {
        Self {
            viewport,
            breakpoint: Breakpoint::classify(viewport.width),
            orientation: Orientation::of(viewport),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutState {
    pub sidebar_open: bool,
    pub is_mobile_viewport: bool,
    pub active_menu_item: MenuItemId,
    pub notifications_panel_open: bool,
}

impl LayoutState {
    /// State after the first viewport measurement: the sidebar starts open on
    /// wide screens and collapsed on mobile.
    pub fn initial(is_mobile_viewport: bool, active_menu_item: MenuItemId) -> Self {
        Self {
            sidebar_open: !is_mobile_viewport,
            is_mobile_viewport,
            active_menu_item,
            notifications_panel_open: false,
        }
    }

    /// Pure transition function. Every (state, input) pair has exactly one
    /// successor.
    pub fn next(self, input: LayoutInput, mobile_breakpoint: u32) -> Self {
        match input {
            LayoutInput::ViewportMeasured(viewport) => {
                let is_mobile = viewport.width < mobile_breakpoint;
                if is_mobile == self.is_mobile_viewport {
                    self
                } else {
                    Self {
                        is_mobile_viewport: is_mobile,
                        sidebar_open: !is_mobile,
                        ..self
                    }
                }
            }
            LayoutInput::ToggleSidebar => Self {
                sidebar_open: !self.sidebar_open,
                ..self
            },
            LayoutInput::SelectMenuItem(id) => Self {
                active_menu_item: id,
                sidebar_open: self.sidebar_open && !self.is_mobile_viewport,
                ..self
            },
            LayoutInput::DismissSidebar => {
                if self.is_mobile_viewport && self.sidebar_open {
                    Self {
                        sidebar_open: false,
                        ..self
                    }
                } else {
                    self
                }
            }
            LayoutInput::ToggleNotifications => Self {
                notifications_panel_open: !self.notifications_panel_open,
                ..self
            },
        }
    }
}

/// Validated inputs of the layout machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutInput {
    ViewportMeasured(Viewport),
    ToggleSidebar,
    SelectMenuItem(MenuItemId),
    DismissSidebar,
    ToggleNotifications,
}

impl LayoutInput {
    fn name(self) -> &'static str {
        match self {
            Self::ViewportMeasured(_) => "viewport_measured",
            Self::ToggleSidebar => "toggle_sidebar",
            Self::SelectMenuItem(_) => "select_menu_item",
            Self::DismissSidebar => "dismiss_sidebar",
            Self::ToggleNotifications => "toggle_notifications",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapOutcome {
    Accepted,
    /// Second tap of a double tap; the host should cancel its default action.
    Suppressed,
}

/// Suppresses the second touch-end of a double tap so it does not zoom.
#[derive(Debug, Clone)]
pub struct DoubleTapGuard {
    window_ms: u64,
    last_touch_end_ms: Option<u64>,
}

impl DoubleTapGuard {
    pub fn new(window_ms: u64) -> Self {
        Self {
            window_ms,
            last_touch_end_ms: None,
        }
    }

    /// Timestamps are host milliseconds. A timestamp earlier than the
    /// previous one counts as inside the window.
    pub fn register(&mut self, at_ms: u64) -> TapOutcome {
        let outcome = match self.last_touch_end_ms {
            Some(last) if at_ms.saturating_sub(last) <= self.window_ms => TapOutcome::Suppressed,
            _ => TapOutcome::Accepted,
        };
        self.last_touch_end_ms = Some(at_ms);
        outcome
    }
}

impl Default for DoubleTapGuard {
    fn default() -> Self {
        Self::new(DEFAULT_DOUBLE_TAP_WINDOW_MS)
    }
}

/// Owns the one [`LayoutState`] of a session. Every input replaces the
/// whole state at once, so readers only ever see complete snapshots.
#[derive(Debug, Clone)]
pub struct LayoutController {
    state: LayoutState,
    viewport: ViewportInfo,
    mobile_breakpoint: u32,
    tap_guard: DoubleTapGuard,
}

impl LayoutController {
    pub fn new(first_measurement: Viewport, settings: &Settings) -> Self {
        let is_mobile = first_measurement.width < settings.mobile_breakpoint;
        let state = LayoutState::initial(is_mobile, settings.default_menu_item);
        debug!(
            width = first_measurement.width,
            height = first_measurement.height,
            is_mobile,
            "layout controller initialised"
        );
        Self {
            state,
            viewport: ViewportInfo::measure(first_measurement),
            mobile_breakpoint: settings.mobile_breakpoint,
            tap_guard: DoubleTapGuard::new(settings.double_tap_window_ms),
        }
    }

    /// Controller with default settings, first measured at `width` x `height`.
    pub fn with_viewport(width: u32, height: u32) -> Self {
        Self::new(Viewport::new(width, height), &Settings::default())
    }

    pub fn state(&self) -> LayoutState {
        self.state
    }

    pub fn viewport(&self) -> ViewportInfo {
        self.viewport
    }

    pub fn mobile_breakpoint(&self) -> u32 {
        self.mobile_breakpoint
    }

    pub fn apply(&mut self, input: LayoutInput) -> LayoutState {
        if let LayoutInput::ViewportMeasured(viewport) = input {
            self.viewport = ViewportInfo::measure(viewport);
        }
        let previous = self.state;
        self.state = previous.next(input, self.mobile_breakpoint);
        if self.state != previous {
            debug!(
                event = input.name(),
                sidebar_open = self.state.sidebar_open,
                is_mobile = self.state.is_mobile_viewport,
                active_menu_item = %self.state.active_menu_item,
                notifications_open = self.state.notifications_panel_open,
                "layout transition"
            );
        }
        self.state
    }

    pub fn viewport_measured(&mut self, width: u32, height: Option<u32>) -> LayoutState {
        let height = height.unwrap_or(self.viewport.viewport.height);
        self.apply(LayoutInput::ViewportMeasured(Viewport::new(width, height)))
    }

    pub fn toggle_sidebar(&mut self) -> LayoutState {
        self.apply(LayoutInput::ToggleSidebar)
    }

    pub fn select_menu_item(&mut self, id: MenuItemId) -> LayoutState {
        self.apply(LayoutInput::SelectMenuItem(id))
    }

    /// Menu selection by raw id. Unknown ids are rejected and leave the
    /// state unchanged.
    pub fn select_menu_item_by_id(&mut self, id: &str) -> Result<LayoutState, DashboardError> {
        let id = id.parse::<MenuItemId>().inspect_err(|err| {
            tracing::warn!(error = %err, "rejected menu selection");
        })?;
        Ok(self.select_menu_item(id))
    }

    pub fn dismiss_sidebar(&mut self) -> LayoutState {
        self.apply(LayoutInput::DismissSidebar)
    }

    pub fn toggle_notifications(&mut self) -> LayoutState {
        self.apply(LayoutInput::ToggleNotifications)
    }

    pub fn touch_end(&mut self, at_ms: u64) -> TapOutcome {
        let outcome = self.tap_guard.register(at_ms);
        if outcome == TapOutcome::Suppressed {
            debug!(at_ms, "suppressed double-tap touch end");
        }
        outcome
    }
}

#[cfg(test)]
#[path = "tests/layout_tests.rs"]
mod tests;
