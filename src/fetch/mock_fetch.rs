use std::{
  collections::HashMap,
  sync::{Mutex, PoisonError},
};

use async_trait::async_trait;
use serde_json::Value;

use super::{Fetch, FetchResponse};
use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockRoute {
  Respond { status: u16, body: String },
  Fail(String),
}

/// In-memory [`Fetch`] that serves canned responses per path and records every request it sees.
/// Paths without a route answer with a 404 and an empty body.
#[derive(Debug, Default)]
pub struct MockFetch {
  routes: HashMap<String, MockRoute>,
  requests: Mutex<Vec<String>>,
}

impl MockFetch {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn respond(mut self, path: &str, status: u16, body: impl Into<String>) -> Self {
    self.routes.insert(path.to_string(), MockRoute::Respond { status, body: body.into() });
    self
  }

  pub fn fail(mut self, path: &str, message: &str) -> Self {
    self.routes.insert(path.to_string(), MockRoute::Fail(message.to_string()));
    self
  }

  /// Requests received so far, formatted as `METHOD path`.
  pub fn requests(&self) -> Vec<String> {
    self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }
}

#[derive(Debug)]
struct MockResponse {
  status: u16,
  body: String,
}

#[async_trait]
impl FetchResponse for MockResponse {
  fn status(&self) -> u16 {
    self.status
  }

  async fn json(self: Box<Self>) -> Result<Value, Error> {
    Ok(serde_json::from_str(&self.body)?)
  }
}

#[async_trait]
impl Fetch for MockFetch {
  async fn get(&self, path: &str) -> Result<Box<dyn FetchResponse>, Error> {
    self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(format!("GET {}", path));

    match self.routes.get(path) {
      Some(MockRoute::Respond { status, body }) => Ok(Box::new(MockResponse { status: *status, body: body.clone() })),
      Some(MockRoute::Fail(message)) => Err(Error::Fetch(message.clone())),
      None => Ok(Box::new(MockResponse { status: 404, body: String::new() })),
    }
  }
}
