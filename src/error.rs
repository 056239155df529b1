#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("Invalid GPX: {0}")]
    InvalidGpx(String),
    #[error("No track found in GPX document")]
    MissingTrack,
    #[error("Invalid FIT: {0}")]
    InvalidFit(String),
    #[error("No track points found in file")]
    NoTrackPoints,
    #[error("No valid points after filtering")]
    NoValidPoints,
}
