//! Static mock data the dashboard renders. Nothing here is fetched.

use crate::domain::{
    ActivityEntry, ActivityId, ActivityKind, ChartPoint, DeviceShare, MenuItem, MenuItemId,
    Metric, MetricId, Notification, NotificationId, Role, Trend, UserId, UserRecord, UserStatus,
};

fn user(
    id: i64,
    name: &str,
    email: &str,
    role: Role,
    status: UserStatus,
    last_active: &str,
) -> UserRecord {
    UserRecord {
        id: UserId(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        status,
        last_active: last_active.to_string(),
    }
}

pub fn users() -> Vec<UserRecord> {
    use Role::{Admin, Editor, Viewer};
    use UserStatus::{Active, Inactive};

    vec![
        user(1, "Sarah Johnson", "sarah@example.com", Admin, Active, "2 hours ago"),
        user(2, "Mike Chen", "mike@example.com", Editor, Active, "1 hour ago"),
        user(3, "Emma Davis", "emma@example.com", Viewer, Inactive, "2 days ago"),
        user(4, "Alex Rodriguez", "alex@example.com", Admin, Active, "30 minutes ago"),
    ]
}

pub fn menu_items() -> Vec<MenuItem> {
    MenuItemId::ALL
        .into_iter()
        .map(|id| MenuItem {
            id,
            label: id.label().to_string(),
        })
        .collect()
}

pub fn notifications() -> Vec<Notification> {
    [
        (1, "New user signup", "5 new users joined today", "10 min ago", true),
        (2, "Revenue milestone", "Monthly target achieved", "1 hour ago", true),
        (3, "System update", "Dashboard updated successfully", "2 hours ago", false),
    ]
    .into_iter()
    .map(|(id, title, message, time, unread)| Notification {
        id: NotificationId(id),
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        unread,
    })
    .collect()
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    [
        (1, "New user registered", "John Doe", "2 minutes ago", ActivityKind::User),
        (2, "Order #1234 completed", "Jane Smith", "15 minutes ago", ActivityKind::Order),
        (3, "Revenue goal achieved", "System", "1 hour ago", ActivityKind::Achievement),
        (4, "New feature deployed", "Dev Team", "2 hours ago", ActivityKind::System),
    ]
    .into_iter()
    .map(|(id, action, user, time, kind)| ActivityEntry {
        id: ActivityId(id),
        action: action.to_string(),
        user: user.to_string(),
        time: time.to_string(),
        kind,
    })
    .collect()
}

pub fn metrics() -> Vec<Metric> {
    [
        (1, "Total Revenue", "$847,392", "+12.5%", Trend::Up),
        (2, "Active Users", "24,891", "+8.2%", Trend::Up),
        (3, "Conversion Rate", "3.84%", "-2.1%", Trend::Down),
        (4, "Avg Order Value", "$156.32", "+5.7%", Trend::Up),
    ]
    .into_iter()
    .map(|(id, title, value, change, trend)| Metric {
        id: MetricId(id),
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        trend,
    })
    .collect()
}

pub fn chart_series() -> Vec<ChartPoint> {
    [
        ("Jan", 4000, 2400, 240),
        ("Feb", 3000, 1398, 221),
        ("Mar", 2000, 9800, 229),
        ("Apr", 2780, 3908, 200),
        ("May", 1890, 4800, 218),
        ("Jun", 2390, 3800, 250),
        ("Jul", 3490, 4300, 210),
    ]
    .into_iter()
    .map(|(name, revenue, users, orders)| ChartPoint {
        name: name.to_string(),
        revenue,
        users,
        orders,
    })
    .collect()
}

pub fn device_share() -> Vec<DeviceShare> {
    [("Desktop", 45), ("Mobile", 35), ("Tablet", 20)]
        .into_iter()
        .map(|(name, percent)| DeviceShare {
            name: name.to_string(),
            percent,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn user_ids_are_unique() {
        let users = users();
        let ids: HashSet<_> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids.len(), users.len());
    }

    #[test]
    fn device_share_sums_to_one_hundred() {
        let total: u32 = device_share().iter().map(|d| u32::from(d.percent)).sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn menu_lists_every_item_with_its_label() {
        let menu = menu_items();
        assert_eq!(menu.len(), MenuItemId::ALL.len());
        assert_eq!(menu[0].id, MenuItemId::Dashboard);
        assert_eq!(menu[3].label, "Settings");
    }

    #[test]
    fn two_notifications_start_unread() {
        assert_eq!(notifications().iter().filter(|n| n.unread).count(), 2);
    }
}
