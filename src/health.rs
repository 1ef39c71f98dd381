use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::Error, fetch::Fetch};

pub const HEALTH_PATH: &str = "/api/v1/health";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
  pub success: bool,
  pub message: String,
  pub version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct HealthEnvelope {
  #[serde(default)]
  success: bool,
  #[serde(default)]
  message: String,
  data: Option<HealthData>,
}

#[derive(Debug, Default, Deserialize)]
struct HealthData {
  version: Option<String>,
}

/// Probes the API's health endpoint.
pub async fn check(fetch: &dyn Fetch) -> Result<HealthStatus, Error> {
  let response = fetch.get(HEALTH_PATH).await?;
  let status = response.status();
  if !response.ok() {
    return Err(Error::HealthCheck(status));
  }

  let envelope: HealthEnvelope = serde_json::from_value(response.json().await?)?;
  debug!("Health check returned {}: {}", status, envelope.message);
  Ok(HealthStatus {
    success: envelope.success,
    message: envelope.message,
    version: envelope.data.and_then(|data| data.version),
  })
}
