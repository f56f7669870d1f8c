use dashboard_core::{
    query, query_with_field, DashboardSession, LayoutController, QueryState, Settings,
};
use shared::{
    domain::{MenuItemId, Role, SortDirection, SortField, UserId, UserRecord, UserStatus},
    error::DashboardError,
    fixtures,
    protocol::DashboardEvent,
};

fn user(id: i64, name: &str, email: &str) -> UserRecord {
    UserRecord {
        id: UserId(id),
        name: name.to_string(),
        email: email.to_string(),
        role: Role::Admin,
        status: UserStatus::Active,
        last_active: "2 hours ago".to_string(),
    }
}

#[test]
fn search_for_mike_returns_only_mike() {
    let records = vec![
        user(1, "Sarah Johnson", "sarah@example.com"),
        user(2, "Mike Chen", "mike@example.com"),
    ];
    let mut state = QueryState::default();
    state.set_search("mike");

    let visible = query(&records, &state);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, UserId(2));
}

#[test]
fn fixture_users_by_name_descending() {
    let state = QueryState::new(SortField::Name, SortDirection::Desc);
    let names: Vec<String> = query(&fixtures::users(), &state)
        .into_iter()
        .map(|u| u.name)
        .collect();
    assert_eq!(
        names,
        vec!["Sarah Johnson", "Mike Chen", "Emma Davis", "Alex Rodriguez"]
    );
}

#[test]
fn desktop_shrinks_to_mobile_then_sidebar_toggles_and_dismisses() {
    let mut layout = LayoutController::with_viewport(1024, 768);
    assert!(layout.state().sidebar_open);
    assert!(!layout.state().is_mobile_viewport);

    let state = layout.viewport_measured(600, None);
    assert!(state.is_mobile_viewport);
    assert!(!state.sidebar_open);

    assert!(layout.toggle_sidebar().sidebar_open);
    assert!(!layout.dismiss_sidebar().sidebar_open);
}

#[test]
fn mobile_menu_selection_closes_open_sidebar() {
    let mut session = DashboardSession::new(&Settings::default());
    session
        .handle(DashboardEvent::ViewportMeasured {
            width: 600,
            height: Some(900),
        })
        .expect("resize");
    session.handle(DashboardEvent::ToggleSidebar).expect("open");
    assert!(session.layout().sidebar_open);

    session
        .handle(DashboardEvent::SelectMenuItem {
            id: "analytics".into(),
        })
        .expect("select");
    assert_eq!(session.layout().active_menu_item, MenuItemId::Analytics);
    assert!(!session.layout().sidebar_open);
}

#[test]
fn unknown_sort_field_fails_and_changes_nothing() {
    let records = fixtures::users();
    let before = records.clone();
    let result = query_with_field(&records, "", "unknown", SortDirection::Asc);
    assert_eq!(
        result,
        Err(DashboardError::InvalidField {
            field: "unknown".into()
        })
    );
    assert_eq!(records, before);

    let mut session = DashboardSession::new(&Settings::default());
    let query_before = session.query_state().clone();
    assert!(session
        .handle(DashboardEvent::SortBy {
            field: "unknown".into()
        })
        .is_err());
    assert_eq!(session.query_state(), &query_before);
}
