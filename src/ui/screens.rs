//! Plain-text renderings of the collections and reports shown by the shell.

use crate::billing::RouteSummary;
use crate::store::{RouteStore, StudentStore};

use super::forms::MenuChoice;

pub(crate) const MENU_TITLE: &str = "===== College Bus Fee & Route Manager =====";

/// Numbered menu entries, one per line.
pub(crate) fn menu_lines() -> Vec<String> {
    MenuChoice::ALL
        .iter()
        .map(|choice| format!("{}. {}", choice.number(), choice.label()))
        .collect()
}

pub(crate) fn route_lines(routes: &RouteStore) -> Vec<String> {
    if routes.is_empty() {
        return vec!["(none)".to_string()];
    }
    routes.iter().map(ToString::to_string).collect()
}

pub(crate) fn student_lines(students: &StudentStore) -> Vec<String> {
    if students.is_empty() {
        return vec!["(none)".to_string()];
    }
    students.iter().map(ToString::to_string).collect()
}

/// One line per route with its ridership and revenue.
pub(crate) fn summary_lines(summary: &[RouteSummary]) -> Vec<String> {
    if summary.is_empty() {
        return vec!["No routes.".to_string()];
    }
    summary
        .iter()
        .map(|entry| {
            format!(
                "Route {} (ID {}): {} students | Revenue: {:.2}",
                entry.route_name, entry.route_id, entry.students, entry.revenue
            )
        })
        .collect()
}
