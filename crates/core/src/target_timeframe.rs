//! Target timeframe payload validation.
//!
//! Request bodies reach this module as raw JSON. Every field is normalized
//! here into a strict typed value (ids become [`DbId`], dates become
//! [`CalendarDate`]) so nothing downstream has to guess at types. A payload
//! either converts completely or is rejected with a
//! [`CoreError::Validation`]; there is no partially accepted payload.

use chrono::DateTime;
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::{CalendarDate, DbId};

/// Human-readable entity name used in not-found errors.
pub const ENTITY_NAME: &str = "Target timeframe";

pub const FIELD_TARGET_ID: &str = "target_id";
pub const FIELD_PLANNED_DATE: &str = "planned_date";
pub const FIELD_ACTUAL_DATE: &str = "actual_date";
pub const FIELD_COMMENTS: &str = "comments";
pub const FIELD_DOCUMENT_ID: &str = "document_id";

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Validated payloads
// ---------------------------------------------------------------------------

/// A create payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTargetTimeframe {
    pub target_id: DbId,
    pub planned_date: Option<CalendarDate>,
    pub actual_date: Option<CalendarDate>,
    pub comments: Option<String>,
    pub document_id: Option<DbId>,
}

/// What an update does to a single nullable column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Field absent from the payload: leave the column untouched.
    Keep,
    /// Field sent as `null`: write `NULL`.
    Clear,
    /// Field sent with a value: write it.
    Set(T),
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Keep
    }
}

impl<T> FieldUpdate<T> {
    /// Whether the column is written at all.
    pub fn is_supplied(&self) -> bool {
        !matches!(self, FieldUpdate::Keep)
    }

    /// The value to write, `None` for both `Keep` and `Clear`.
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            FieldUpdate::Keep | FieldUpdate::Clear => None,
        }
    }

    /// Resolve the new column value given the current one.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            FieldUpdate::Keep => current,
            FieldUpdate::Clear => None,
            FieldUpdate::Set(value) => Some(value),
        }
    }
}

/// An update payload that passed validation. Absent fields stay `Keep`.
///
/// `target_id` is never nullable, so it only has "keep" (`None`) and
/// "set" (`Some`) states.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetTimeframeUpdate {
    pub target_id: Option<DbId>,
    pub planned_date: FieldUpdate<CalendarDate>,
    pub actual_date: FieldUpdate<CalendarDate>,
    pub comments: FieldUpdate<String>,
    pub document_id: FieldUpdate<DbId>,
}

impl TargetTimeframeUpdate {
    /// True when the payload names no known field.
    pub fn is_empty(&self) -> bool {
        self.target_id.is_none()
            && !self.planned_date.is_supplied()
            && !self.actual_date.is_supplied()
            && !self.comments.is_supplied()
            && !self.document_id.is_supplied()
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Validate a create payload.
///
/// `target_id` is required and must be integer-like. Optional fields may be
/// absent or `null`. `id` and unknown keys are ignored; the store assigns ids.
pub fn validate_create(body: &Value) -> Result<NewTargetTimeframe, CoreError> {
    let fields = as_object(body)?;

    let target_id = match fields.get(FIELD_TARGET_ID) {
        None | Some(Value::Null) => {
            return Err(CoreError::invalid_field(FIELD_TARGET_ID, "is required"))
        }
        Some(value) => parse_db_id(FIELD_TARGET_ID, value)?,
    };

    Ok(NewTargetTimeframe {
        target_id,
        planned_date: optional(fields, FIELD_PLANNED_DATE, parse_date_value)?,
        actual_date: optional(fields, FIELD_ACTUAL_DATE, parse_date_value)?,
        comments: optional(fields, FIELD_COMMENTS, parse_text)?,
        document_id: optional(fields, FIELD_DOCUMENT_ID, parse_db_id)?,
    })
}

/// Validate a partial update payload.
///
/// Only supplied fields are checked. `target_id` may be changed but not
/// cleared.
pub fn validate_update(body: &Value) -> Result<TargetTimeframeUpdate, CoreError> {
    let fields = as_object(body)?;

    let target_id = match field_update(fields, FIELD_TARGET_ID, parse_db_id)? {
        FieldUpdate::Keep => None,
        FieldUpdate::Set(id) => Some(id),
        FieldUpdate::Clear => {
            return Err(CoreError::invalid_field(FIELD_TARGET_ID, "cannot be null"))
        }
    };

    Ok(TargetTimeframeUpdate {
        target_id,
        planned_date: field_update(fields, FIELD_PLANNED_DATE, parse_date_value)?,
        actual_date: field_update(fields, FIELD_ACTUAL_DATE, parse_date_value)?,
        comments: field_update(fields, FIELD_COMMENTS, parse_text)?,
        document_id: field_update(fields, FIELD_DOCUMENT_ID, parse_db_id)?,
    })
}

/// Parse a calendar date string.
///
/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp, whose own calendar date is
/// kept. Impossible dates such as `2022-02-30` are rejected.
pub fn parse_calendar_date(field: &str, raw: &str) -> Result<CalendarDate, CoreError> {
    let trimmed = raw.trim();
    if let Ok(date) = CalendarDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.date_naive())
        .map_err(|_| {
            CoreError::invalid_field(field, format!("'{raw}' is not a valid calendar date"))
        })
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

type FieldParser<T> = fn(&str, &Value) -> Result<T, CoreError>;

fn as_object(body: &Value) -> Result<&Map<String, Value>, CoreError> {
    body.as_object()
        .ok_or_else(|| CoreError::Validation("request body must be a JSON object".to_string()))
}

fn optional<T>(
    fields: &Map<String, Value>,
    field: &str,
    parse: FieldParser<T>,
) -> Result<Option<T>, CoreError> {
    match fields.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => parse(field, value).map(Some),
    }
}

fn field_update<T>(
    fields: &Map<String, Value>,
    field: &str,
    parse: FieldParser<T>,
) -> Result<FieldUpdate<T>, CoreError> {
    match fields.get(field) {
        None => Ok(FieldUpdate::Keep),
        Some(Value::Null) => Ok(FieldUpdate::Clear),
        Some(value) => parse(field, value).map(FieldUpdate::Set),
    }
}

/// Integer-like: a JSON integer, a whole-valued float, or a decimal string.
fn parse_db_id(field: &str, value: &Value) -> Result<DbId, CoreError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as DbId)
        }),
        Value::String(s) => s.trim().parse::<DbId>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| CoreError::invalid_field(field, "must be an integer"))
}

fn parse_date_value(field: &str, value: &Value) -> Result<CalendarDate, CoreError> {
    match value {
        Value::String(s) => parse_calendar_date(field, s),
        _ => Err(CoreError::invalid_field(field, "must be a date string")),
    }
}

fn parse_text(field: &str, value: &Value) -> Result<String, CoreError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        _ => Err(CoreError::invalid_field(field, "must be a string")),
    }
}
