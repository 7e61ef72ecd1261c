/// Internal database primary keys are PostgreSQL BIGSERIAL.
///
/// User identifiers are the exception: they are externally-issued
/// city-pass ids and stay `String` end to end.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
