//! Serialized vocabulary of inputs a front end can feed into a dashboard
//! session. Ids and field names stay as raw strings here so that validation
//! (and its errors) happens in one place, the session.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum DashboardEvent {
    ViewportMeasured {
        width: u32,
        #[serde(default)]
        height: Option<u32>,
    },
    ToggleSidebar,
    SelectMenuItem {
        id: String,
    },
    /// Outside click or touch while the sidebar overlays the page.
    DismissSidebar,
    ToggleNotifications,
    TouchEnd {
        at_ms: u64,
    },
    Search {
        query: String,
    },
    /// Column header click.
    SortBy {
        field: String,
    },
    SelectTimeRange {
        range: String,
    },
}

impl DashboardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ViewportMeasured { .. } => "viewport_measured",
            Self::ToggleSidebar => "toggle_sidebar",
            Self::SelectMenuItem { .. } => "select_menu_item",
            Self::DismissSidebar => "dismiss_sidebar",
            Self::ToggleNotifications => "toggle_notifications",
            Self::TouchEnd { .. } => "touch_end",
            Self::Search { .. } => "search",
            Self::SortBy { .. } => "sort_by",
            Self::SelectTimeRange { .. } => "select_time_range",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_event_script() {
        let raw = r#"[
            {"type": "viewport_measured", "payload": {"width": 600}},
            {"type": "toggle_sidebar"},
            {"type": "select_menu_item", "payload": {"id": "analytics"}},
            {"type": "sort_by", "payload": {"field": "email"}}
        ]"#;
        let events: Vec<DashboardEvent> = serde_json::from_str(raw).expect("parse script");
        assert_eq!(
            events,
            vec![
                DashboardEvent::ViewportMeasured {
                    width: 600,
                    height: None
                },
                DashboardEvent::ToggleSidebar,
                DashboardEvent::SelectMenuItem {
                    id: "analytics".into()
                },
                DashboardEvent::SortBy {
                    field: "email".into()
                },
            ]
        );
    }
}
