/// All database primary keys are SQLite INTEGER rowids.
pub type DbId = i64;

/// All timestamps are UTC, stored as RFC 3339 text.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
