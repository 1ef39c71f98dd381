use async_trait::async_trait;
use serde_json::Value;

use crate::error::Error;

/// A response returned by a [`Fetch`] capability.
///
/// The body is not read until [`FetchResponse::json`] is awaited, so checking the status never touches the body.
#[async_trait]
pub trait FetchResponse: Send {
  fn status(&self) -> u16;

  /// Whether the status is in the 2xx success range.
  fn ok(&self) -> bool {
    (200..300).contains(&self.status())
  }

  /// Reads the body and parses it as JSON.
  async fn json(self: Box<Self>) -> Result<Value, Error>;
}

/// An HTTP GET capability handed to loaders by their caller.
#[async_trait]
pub trait Fetch: Send + Sync {
  async fn get(&self, path: &str) -> Result<Box<dyn FetchResponse>, Error>;
}
