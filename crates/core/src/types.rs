/// Order identities are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Caller-supplied user reference. Opaque; no referential check is made.
pub type UserId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
