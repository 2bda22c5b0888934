// Dashboard Rendering
//
// Pure formatting: every function returns a String so output is
// testable without a terminal.

use colored::Colorize;
use leadboard_core::domain::contact::{demo_contacts, least_visited, most_visited, Contact};
use leadboard_sdk::{ChartPoint, UserProfile};
use tabled::{Table, Tabled};

use crate::store::{DateRangeSlice, Theme};

#[derive(Tabled)]
struct ChartRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "People")]
    people: i64,
    #[tabled(rename = "Companies")]
    companies: i64,
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "")]
    badge: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Visits")]
    visits: i64,
}

impl ContactRow {
    fn from_contact(contact: &Contact) -> Self {
        Self {
            badge: contact.initials(),
            name: contact.name.clone(),
            visits: contact.visits,
        }
    }
}

/// Header line: organization, user badge and theme.
pub fn render_header(organization: &str, user: &UserProfile, theme: Theme) -> String {
    format!(
        "{}  |  [{}] {}  |  theme: {}",
        organization.bold(),
        user.initials(),
        user.name,
        theme
    )
}

/// Echo of the active window, e.g. `Range 7d: 2024-03-09 .. 2024-03-15`.
pub fn render_range_line(slice: &DateRangeSlice) -> String {
    format!(
        "Range {}: {} .. {}",
        slice.active_tab.to_string().bold(),
        slice.from,
        slice.to
    )
}

/// The lead generation card: per-series totals plus the daily table.
pub fn render_chart(points: &[ChartPoint]) -> String {
    if points.is_empty() {
        return format!(
            "{}\n{}",
            "Lead generation".cyan().bold(),
            "No chart data for the selected range.".yellow()
        );
    }

    let people_total: i64 = points.iter().map(|p| p.people).sum();
    let companies_total: i64 = points.iter().map(|p| p.companies).sum();

    let rows: Vec<ChartRow> = points
        .iter()
        .map(|point| ChartRow {
            date: point.date.to_string(),
            people: point.people,
            companies: point.companies,
        })
        .collect();

    format!(
        "{}  {} people / {} companies\n{}",
        "Lead generation".cyan().bold(),
        people_total,
        companies_total,
        Table::new(rows)
    )
}

/// Both visited-contacts cards, backed by the fixed demo pool.
pub fn render_contact_cards() -> String {
    let pool = demo_contacts();

    let most: Vec<ContactRow> = most_visited(&pool)
        .iter()
        .map(ContactRow::from_contact)
        .collect();
    let least: Vec<ContactRow> = least_visited(&pool)
        .iter()
        .map(ContactRow::from_contact)
        .collect();

    format!(
        "{}\n{}\n\n{}\n{}",
        "Most visited contacts".cyan().bold(),
        Table::new(most),
        "Least visited contacts".cyan().bold(),
        Table::new(least)
    )
}
