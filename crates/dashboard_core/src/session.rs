//! One dashboard session: the users table, its query state, the layout
//! controller, and the chart time range.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use shared::{
    domain::{MenuItem, MenuItemId, Notification, SortField, TimeRange, UserRecord},
    error::DashboardError,
    fixtures,
    protocol::DashboardEvent,
};
use tracing::{debug, warn};

use crate::{
    config::Settings,
    layout::{LayoutController, LayoutInput, LayoutState, TapOutcome, Viewport, ViewportInfo},
    query::{query, QueryState},
    signals::{Subscription, ViewportSignal},
};

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub layout: LayoutState,
    pub viewport: ViewportInfo,
    pub menu: Vec<MenuItem>,
    pub query: QueryState,
    pub time_range: TimeRange,
    pub visible_users: Vec<UserRecord>,
    pub unread_notifications: usize,
}

/// Validated form of a [`DashboardEvent`]. Building one is the only step
/// that can fail and it runs before any state is touched.
enum Command {
    Viewport { width: u32, height: Option<u32> },
    Layout(LayoutInput),
    TouchEnd(u64),
    Search(String),
    SortBy(SortField),
    SelectTimeRange(TimeRange),
}

impl TryFrom<DashboardEvent> for Command {
    type Error = DashboardError;

    fn try_from(event: DashboardEvent) -> Result<Self, Self::Error> {
        Ok(match event {
            DashboardEvent::ViewportMeasured { width, height } => Self::Viewport { width, height },
            DashboardEvent::ToggleSidebar => Self::Layout(LayoutInput::ToggleSidebar),
            DashboardEvent::SelectMenuItem { id } => {
                Self::Layout(LayoutInput::SelectMenuItem(id.parse::<MenuItemId>()?))
            }
            DashboardEvent::DismissSidebar => Self::Layout(LayoutInput::DismissSidebar),
            DashboardEvent::ToggleNotifications => Self::Layout(LayoutInput::ToggleNotifications),
            DashboardEvent::TouchEnd { at_ms } => Self::TouchEnd(at_ms),
            DashboardEvent::Search { query } => Self::Search(query),
            DashboardEvent::SortBy { field } => Self::SortBy(field.parse()?),
            DashboardEvent::SelectTimeRange { range } => Self::SelectTimeRange(range.parse()?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct DashboardSession {
    records: Vec<UserRecord>,
    notifications: Vec<Notification>,
    menu: Vec<MenuItem>,
    query: QueryState,
    layout: LayoutController,
    time_range: TimeRange,
}

impl DashboardSession {
    /// Session over the built-in fixtures.
    pub fn new(settings: &Settings) -> Self {
        Self::with_data(fixtures::users(), fixtures::notifications(), settings)
    }

    pub fn with_data(
        records: Vec<UserRecord>,
        notifications: Vec<Notification>,
        settings: &Settings,
    ) -> Self {
        let first = Viewport::new(settings.initial_width, settings.initial_height);
        Self {
            records,
            notifications,
            menu: fixtures::menu_items(),
            query: QueryState::new(settings.default_sort_field, settings.default_sort_direction),
            layout: LayoutController::new(first, settings),
            time_range: settings.default_time_range,
        }
    }

    pub fn query_state(&self) -> &QueryState {
        &self.query
    }

    pub fn layout(&self) -> LayoutState {
        self.layout.state()
    }

    pub fn viewport(&self) -> ViewportInfo {
        self.layout.viewport()
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications.iter().filter(|n| n.unread).count()
    }

    pub fn visible_users(&self) -> Vec<UserRecord> {
        query(&self.records, &self.query)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            layout: self.layout.state(),
            viewport: self.layout.viewport(),
            menu: self.menu.clone(),
            query: self.query.clone(),
            time_range: self.time_range,
            visible_users: self.visible_users(),
            unread_notifications: self.unread_notifications(),
        }
    }

    /// Applies one event. Invalid events are rejected whole: the session is
    /// left exactly as it was. Touch-end events report whether the host
    /// should suppress the tap.
    pub fn handle(&mut self, event: DashboardEvent) -> Result<Option<TapOutcome>, DashboardError> {
        let name = event.name();
        let command = Command::try_from(event).inspect_err(|err| {
            warn!(event = name, error = %err, "rejected dashboard event");
        })?;
        debug!(event = name, "handling dashboard event");

        match command {
            Command::Viewport { width, height } => {
                self.layout.viewport_measured(width, height);
            }
            Command::Layout(input) => {
                self.layout.apply(input);
            }
            Command::TouchEnd(at_ms) => return Ok(Some(self.layout.touch_end(at_ms))),
            Command::Search(text) => self.query.set_search(text),
            Command::SortBy(field) => self.query.toggle_sort(field),
            Command::SelectTimeRange(range) => self.time_range = range,
        }
        Ok(None)
    }

    /// Feeds one host signal into the layout controller.
    pub fn handle_signal(&mut self, signal: ViewportSignal) -> Option<TapOutcome> {
        match signal {
            ViewportSignal::Resized(viewport) => {
                self.layout.apply(LayoutInput::ViewportMeasured(viewport));
                None
            }
            ViewportSignal::TouchEnd { at_ms } => Some(self.layout.touch_end(at_ms)),
            ViewportSignal::PointerOutside => {
                self.layout.dismiss_sidebar();
                None
            }
        }
    }

    /// Drains everything queued on `subscription` and returns how many
    /// signals were processed.
    pub fn pump(&mut self, subscription: &Subscription) -> usize {
        let signals = subscription.drain();
        for signal in &signals {
            self.handle_signal(*signal);
        }
        signals.len()
    }
}

/// Session handle for hosts that dispatch events from several threads. All
/// access goes through one lock, so events are applied one at a time and
/// readers never see a half-applied event.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<DashboardSession>>,
}

impl SharedSession {
    pub fn new(session: DashboardSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn handle(&self, event: DashboardEvent) -> Result<Option<TapOutcome>, DashboardError> {
        self.with(|session| session.handle(event))
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.with(|session| session.snapshot())
    }

    pub fn layout(&self) -> LayoutState {
        self.with(|session| session.layout())
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut DashboardSession) -> R) -> R {
        // Events replace state whole, so a poisoned lock still guards a
        // consistent session.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
