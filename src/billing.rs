//! Fee computation, fee slips and the per-route revenue summary.

use std::path::Path;

use chrono::{DateTime, Local};
use tracing::info;

use crate::db::append_fee_slip;
use crate::error::{Error, Result};
use crate::models::{Route, Student};
use crate::store::{RouteStore, StudentStore};

/// Flat charge added to every fee.
pub const BASE_FARE: f64 = 50.0;
/// Routes strictly shorter than this get [`SHORT_ROUTE_DISCOUNT`].
pub const SHORT_ROUTE_KM: f64 = 5.0;
/// Multiplier applied to short-route fees (a 5% discount).
pub const SHORT_ROUTE_DISCOUNT: f64 = 0.95;

/// Separator line framing each slip in the receipt log.
const SLIP_RULE: &str = "-------------------------------";
/// `ctime`-style timestamp, e.g. `Thu Oct 15 09:05:00 2026`.
const SLIP_DATE_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Fee charged for riding `route`.
pub fn route_fee(route: &Route) -> f64 {
    let fee = BASE_FARE + route.distance_km * route.rate_per_km;
    if route.distance_km < SHORT_ROUTE_KM {
        fee * SHORT_ROUTE_DISCOUNT
    } else {
        fee
    }
}

/// Fee owed by `student`. A student whose route id matches no route owes
/// nothing.
pub fn calculate_fee(student: &Student, routes: &RouteStore) -> f64 {
    routes.get(student.route_id).map_or(0.0, route_fee)
}

/// A computed fee, ready to be appended to the receipt log.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeSlip {
    pub issued_at: DateTime<Local>,
    pub student_id: u32,
    pub student_name: String,
    pub route_id: u32,
    pub route_name: String,
    pub distance_km: f64,
    pub rate_per_km: f64,
    pub amount: f64,
}

impl FeeSlip {
    /// Compute the slip for `student` at `issued_at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RouteNotFound`] when the student's route does not
    /// exist, including unassigned students.
    pub fn issue(student: &Student, routes: &RouteStore, issued_at: DateTime<Local>) -> Result<Self> {
        let route = routes.get(student.route_id).ok_or(Error::RouteNotFound {
            route_id: student.route_id,
        })?;

        Ok(Self {
            issued_at,
            student_id: student.id,
            student_name: student.name.clone(),
            route_id: route.id,
            route_name: route.name.clone(),
            distance_km: route.distance_km,
            rate_per_km: route.rate_per_km,
            amount: route_fee(route),
        })
    }

    /// The text block written to the receipt log.
    pub fn render(&self) -> String {
        format!(
            "{SLIP_RULE}\n\
             Date: {date}\n\
             Student ID: {student_id}\n\
             Name: {student_name}\n\
             Route: {route_name} (ID {route_id})\n\
             Distance: {distance:.2} km | Rate: {rate:.2} | Amount: {amount:.2}\n\
             {SLIP_RULE}\n\n",
            date = self.issued_at.format(SLIP_DATE_FORMAT),
            student_id = self.student_id,
            student_name = self.student_name,
            route_name = self.route_name,
            route_id = self.route_id,
            distance = self.distance_km,
            rate = self.rate_per_km,
            amount = self.amount,
        )
    }
}

/// Issue a slip for `student` now and append it to the receipt log at
/// `receipts`.
///
/// # Errors
///
/// Fails if the route is missing or the log cannot be opened for append.
pub fn generate_fee_slip(student: &Student, routes: &RouteStore, receipts: &Path) -> Result<FeeSlip> {
    let slip = FeeSlip::issue(student, routes, Local::now())?;
    append_fee_slip(receipts, &slip)?;
    info!(
        student_id = slip.student_id,
        route_id = slip.route_id,
        amount = slip.amount,
        "fee slip issued"
    );
    Ok(slip)
}

/// Ridership and revenue of one route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSummary {
    pub route_id: u32,
    pub route_name: String,
    pub students: usize,
    pub revenue: f64,
}

/// One entry per route, in stored route order. Routes nobody rides report
/// zero students and zero revenue.
pub fn summarize(students: &StudentStore, routes: &RouteStore) -> Vec<RouteSummary> {
    routes
        .iter()
        .map(|route| {
            let (count, revenue) = students
                .on_route(route.id)
                .fold((0, 0.0), |(count, total), student| {
                    (count + 1, total + calculate_fee(student, routes))
                });
            RouteSummary {
                route_id: route.id,
                route_name: route.name.clone(),
                students: count,
                revenue,
            }
        })
        .collect()
}
