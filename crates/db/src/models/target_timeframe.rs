//! Target timeframe entity model.
//!
//! Records the planned and actual completion dates for a target, optionally
//! linked to a supporting document.

use serde::Serialize;
use sqlx::FromRow;
use timeframe_core::types::{CalendarDate, DbId};

/// A row from the `targettimeframes` table.
///
/// Dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TargetTimeframe {
    pub id: DbId,
    pub target_id: DbId,
    pub planned_date: Option<CalendarDate>,
    pub actual_date: Option<CalendarDate>,
    pub comments: Option<String>,
    pub document_id: Option<DbId>,
}
