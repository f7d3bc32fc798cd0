use uuid::Uuid;

/// Failure surface of the service and repository layers. Transport mapping
/// (status codes, response bodies) belongs to whatever embeds this crate.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{resource} not found with id {id}")]
    NotFoundError { resource: &'static str, id: Uuid },
    #[error("Sqlx error: {0}")]
    SqlxError(#[from] sqlx::Error),
    #[error("Decimal conversion error: {0}")]
    DecimalError(#[from] bigdecimal::ParseBigDecimalError),
}
