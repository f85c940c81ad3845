#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid radius: {0} (expected 0..={max})", max = crate::ops::MAX_RADIUS)]
    InvalidRadius(i32),
    #[error("Invalid {name}: {value} (expected 0..=100)")]
    InvalidPercentile { name: &'static str, value: f64 },
    #[error("Invalid region: {0}")]
    InvalidRegion(String),
    #[error("Invalid color format: {0}")]
    InvalidColorFormat(String),
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("Allocation failed: {0}")]
    Allocation(String),
}

impl From<std::collections::TryReserveError> for Error {
    fn from(e: std::collections::TryReserveError) -> Self {
        Error::Allocation(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
