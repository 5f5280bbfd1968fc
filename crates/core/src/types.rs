/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Calendar dates are exchanged as `YYYY-MM-DD` and stored as `DATE`.
pub type CalendarDate = chrono::NaiveDate;
