//! Dashboard core: the users-table query engine, the responsive layout state
//! machine, the viewport signal bus, and the session that ties them together.

pub mod config;
pub mod layout;
pub mod query;
pub mod session;
pub mod signals;

pub use config::{load_settings, ConfigError, Settings};
pub use layout::{
    Breakpoint, DoubleTapGuard, LayoutController, LayoutInput, LayoutState, Orientation,
    TapOutcome, Viewport, ViewportInfo,
};
pub use query::{query, query_with_field, QueryState};
pub use session::{DashboardSession, SessionSnapshot, SharedSession};
pub use signals::{Subscription, ViewportBus, ViewportSignal};
