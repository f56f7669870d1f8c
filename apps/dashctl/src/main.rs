use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dashboard_core::{
    load_settings, query_with_field, Breakpoint, DashboardSession, Orientation, Viewport,
    ViewportInfo,
};
use shared::{
    domain::{SortDirection, TimeRange, Trend},
    fixtures,
    protocol::DashboardEvent,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Inspect the dashboard core from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List users, filtered and sorted like the dashboard table.
    Users {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        sort: Option<String>,
        #[arg(long)]
        direction: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Replay a JSON event script through a session and print the result.
    Layout {
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        #[arg(long)]
        events: Option<PathBuf>,
    },
    /// Classify a viewport the way the mobile diagnostics do.
    Breakpoint {
        #[arg(long)]
        width: u32,
        #[arg(long, default_value_t = 800)]
        height: u32,
    },
    Notifications {
        #[arg(long)]
        unread: bool,
    },
    /// Sidebar entries, marking the one active after startup.
    Menu,
    /// Metric cards, chart series and recent activity.
    Overview {
        #[arg(long, default_value = "7d")]
        range: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    let mut settings = load_settings();

    match cli.command {
        Command::Users {
            search,
            sort,
            direction,
            json,
        } => {
            let field = sort.unwrap_or_else(|| settings.default_sort_field.to_string());
            let direction = match direction {
                Some(raw) => raw.parse::<SortDirection>()?,
                None => settings.default_sort_direction,
            };
            let users = query_with_field(&fixtures::users(), &search, &field, direction)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&users)?);
            } else {
                for user in users {
                    println!(
                        "{:<3} {:<16} {:<20} {:<7} {:<9} {}",
                        user.id.0,
                        user.name,
                        user.email,
                        user.role.as_str(),
                        user.status.as_str(),
                        user.last_active
                    );
                }
            }
        }
        Command::Layout {
            width,
            height,
            events,
        } => {
            if let Some(width) = width {
                settings.initial_width = width;
            }
            if let Some(height) = height {
                settings.initial_height = height;
            }
            let mut session = DashboardSession::new(&settings);
            if let Some(path) = events {
                let raw = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read event script '{}'", path.display()))?;
                let script: Vec<DashboardEvent> = serde_json::from_str(&raw)
                    .with_context(|| format!("invalid event script '{}'", path.display()))?;
                let total = script.len();
                for (index, event) in script.into_iter().enumerate() {
                    let name = event.name();
                    session
                        .handle(event)
                        .with_context(|| format!("event #{index} ({name}) rejected"))?;
                    debug!(index, event = name, "applied scripted event");
                }
                let layout = session.layout();
                info!(
                    events = total,
                    sidebar_open = layout.sidebar_open,
                    is_mobile = layout.is_mobile_viewport,
                    active_menu_item = %layout.active_menu_item,
                    "event script replayed"
                );
            }
            println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
        }
        Command::Breakpoint { width, height } => {
            let info = ViewportInfo::measure(Viewport::new(width, height));
            print_viewport(&info, width < settings.mobile_breakpoint);
        }
        Command::Notifications { unread } => {
            let session = DashboardSession::new(&settings);
            for notification in session
                .notifications()
                .iter()
                .filter(|n| !unread || n.unread)
            {
                let marker = if notification.unread { "*" } else { " " };
                println!(
                    "{marker} {:<18} {:<32} {}",
                    notification.title, notification.message, notification.time
                );
            }
        }
        Command::Menu => {
            let session = DashboardSession::new(&settings);
            let active = session.layout().active_menu_item;
            for item in session.menu_items() {
                let marker = if item.id == active { ">" } else { " " };
                println!("{marker} {:<10} {}", item.id.as_str(), item.label);
            }
        }
        Command::Overview { range } => {
            let range = range.parse::<TimeRange>()?;
            println!("Time range: {} ({} days)", range.as_str(), range.days());
            for metric in fixtures::metrics() {
                let arrow = match metric.trend {
                    Trend::Up => "up",
                    Trend::Down => "down",
                };
                println!(
                    "{:<16} {:>10} {:>7} {arrow}",
                    metric.title, metric.value, metric.change
                );
            }
            println!();
            for point in fixtures::chart_series() {
                println!(
                    "{:<4} revenue={:<5} users={:<5} orders={}",
                    point.name, point.revenue, point.users, point.orders
                );
            }
            println!();
            for share in fixtures::device_share() {
                println!("{:<8} {}%", share.name, share.percent);
            }
            println!();
            for entry in fixtures::recent_activity() {
                println!("{:<24} {:<12} {}", entry.action, entry.user, entry.time);
            }
        }
    }

    Ok(())
}

fn print_viewport(info: &ViewportInfo, is_mobile: bool) {
    let orientation = match info.orientation {
        Orientation::Landscape => "Landscape",
        Orientation::Portrait => "Portrait",
    };
    println!("Width: {}px", info.viewport.width);
    println!("Height: {}px", info.viewport.height);
    println!("Breakpoint: {}", info.breakpoint.label());
    println!("Orientation: {orientation}");
    println!("Mobile layout: {is_mobile}");
    if info.breakpoint <= Breakpoint::Sm && !is_mobile {
        println!("Note: width is in a mobile class but above the layout breakpoint");
    }
}
