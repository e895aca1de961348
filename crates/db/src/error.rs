/// Failure talking to the order database.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Connection refusal, constraint violation, or query failure.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// The connectivity round-trip answered with something other than `1`.
    #[error("Unexpected DB response: {0}")]
    UnexpectedResult(i32),
}
