/// Row identifier, matching the BIGSERIAL columns in the schema.
pub type DbId = i64;

/// Timestamps are stored and served in UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
