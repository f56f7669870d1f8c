use super::*;

fn desktop() -> LayoutController {
    LayoutController::with_viewport(1024, 768)
}

#[test]
fn first_measurement_decides_initial_sidebar() {
    let wide = desktop().state();
    assert!(!wide.is_mobile_viewport);
    assert!(wide.sidebar_open);
    assert_eq!(wide.active_menu_item, MenuItemId::Dashboard);
    assert!(!wide.notifications_panel_open);

    let narrow = LayoutController::with_viewport(375, 812).state();
    assert!(narrow.is_mobile_viewport);
    assert!(!narrow.sidebar_open);
}

#[test]
fn shrink_toggle_then_dismiss_on_mobile() {
    let mut layout = desktop();

    let state = layout.viewport_measured(600, None);
    assert!(state.is_mobile_viewport);
    assert!(!state.sidebar_open);

    assert!(layout.toggle_sidebar().sidebar_open);
    assert!(!layout.dismiss_sidebar().sidebar_open);
}

#[test]
fn menu_selection_on_mobile_closes_sidebar() {
    let mut layout = LayoutController::with_viewport(600, 900);
    layout.toggle_sidebar();
    assert!(layout.state().sidebar_open);

    let state = layout
        .select_menu_item_by_id("analytics")
        .expect("known menu item");
    assert_eq!(state.active_menu_item, MenuItemId::Analytics);
    assert!(!state.sidebar_open);
}

#[test]
fn menu_selection_on_desktop_keeps_sidebar() {
    let mut layout = desktop();
    let state = layout.select_menu_item(MenuItemId::Users);
    assert_eq!(state.active_menu_item, MenuItemId::Users);
    assert!(state.sidebar_open);

    layout.toggle_sidebar();
    let state = layout.select_menu_item(MenuItemId::Settings);
    assert!(!state.sidebar_open);
}

#[test]
fn unknown_menu_item_is_rejected_without_change() {
    let mut layout = desktop();
    let before = layout.state();
    let err = layout
        .select_menu_item_by_id("reports")
        .expect_err("unknown id");
    assert_eq!(
        err,
        DashboardError::InvalidMenuItem {
            id: "reports".into()
        }
    );
    assert_eq!(layout.state(), before);
}

#[test]
fn dismiss_is_ignored_on_desktop() {
    let mut layout = desktop();
    let before = layout.state();
    assert_eq!(layout.dismiss_sidebar(), before);
}

#[test]
fn growing_past_breakpoint_reopens_sidebar() {
    let mut layout = LayoutController::with_viewport(500, 900);
    let state = layout.viewport_measured(768, None);
    assert!(!state.is_mobile_viewport);
    assert!(state.sidebar_open);
}

#[test]
fn resize_within_same_class_keeps_manual_choice() {
    let mut layout = desktop();
    layout.toggle_sidebar();
    let state = layout.viewport_measured(1400, None);
    assert!(!state.sidebar_open);
    assert_eq!(layout.viewport().breakpoint, Breakpoint::Xl);

    let mut phone = LayoutController::with_viewport(400, 800);
    phone.toggle_sidebar();
    assert!(phone.viewport_measured(700, None).sidebar_open);
}

#[test]
fn mobile_flag_tracks_last_width() {
    let mut layout = desktop();
    let widths = [1024, 767, 768, 0, 320, 2000, 769, 100, 767, 768];
    for width in widths {
        let state = layout.viewport_measured(width, None);
        assert_eq!(state.is_mobile_viewport, width < 768, "width {width}");
    }
}

#[test]
fn notifications_panel_toggles_independently() {
    let mut layout = desktop();
    assert!(layout.toggle_notifications().notifications_panel_open);
    assert!(layout.state().sidebar_open);
    assert!(!layout.toggle_notifications().notifications_panel_open);
}

#[test]
fn custom_breakpoint_from_settings() {
    let settings = Settings {
        mobile_breakpoint: 1024,
        ..Settings::default()
    };
    let layout = LayoutController::new(Viewport::new(900, 700), &settings);
    assert!(layout.state().is_mobile_viewport);
    assert_eq!(layout.mobile_breakpoint(), 1024);
}

#[test]
fn breakpoints_follow_diagnostic_classes() {
    assert_eq!(Breakpoint::classify(480), Breakpoint::Xs);
    assert_eq!(Breakpoint::classify(481), Breakpoint::Sm);
    assert_eq!(Breakpoint::classify(768), Breakpoint::Sm);
    assert_eq!(Breakpoint::classify(1024), Breakpoint::Md);
    assert_eq!(Breakpoint::classify(1200), Breakpoint::Lg);
    assert_eq!(Breakpoint::classify(1201), Breakpoint::Xl);
}

#[test]
fn viewport_info_tracks_orientation() {
    let mut layout = desktop();
    assert_eq!(layout.viewport().orientation, Orientation::Landscape);
    layout.viewport_measured(600, Some(900));
    assert_eq!(layout.viewport().orientation, Orientation::Portrait);
    assert_eq!(layout.viewport().viewport, Viewport::new(600, 900));

    layout.viewport_measured(1000, None);
    assert_eq!(layout.viewport().viewport, Viewport::new(1000, 900));
    assert_eq!(layout.viewport().orientation, Orientation::Landscape);
}

#[test]
fn second_tap_inside_window_is_suppressed() {
    let mut guard = DoubleTapGuard::default();
    assert_eq!(guard.register(1_000), TapOutcome::Accepted);
    assert_eq!(guard.register(1_300), TapOutcome::Suppressed);
    assert_eq!(guard.register(1_601), TapOutcome::Accepted);
    assert_eq!(guard.register(1_500), TapOutcome::Suppressed);
}
