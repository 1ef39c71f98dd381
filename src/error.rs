use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The listings endpoint answered with a non-success status. The message is fixed and carries no status or body.
  #[error("Failed to fetch listings")]
  LoadFailure,
  #[error("Health check failed with status {0}")]
  HealthCheck(u16),
  #[error(transparent)]
  Parse(#[from] serde_json::Error),
  #[error(transparent)]
  Transport(#[from] reqwest::Error),
  #[error("Invalid base url: {0}")]
  InvalidBaseUrl(#[from] url::ParseError),
  #[error("Fetch failed: {0}")]
  Fetch(String),
}
