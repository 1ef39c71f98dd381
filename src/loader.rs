use serde::{
  Deserialize, Serialize,
  de::{self, DeserializeOwned, Unexpected},
};
use serde_json::Value;
use tracing::debug;

use crate::{error::Error, fetch::Fetch};

/// Path of the listings resource.
pub const ITEMS_PATH: &str = "/api/v1/items";

/// The render-ready collection handed to the display layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadResult {
  /// Item records in the order the API returned them. Always present, possibly empty.
  pub listings: Vec<Value>,
}

impl LoadResult {
  /// Deserializes every listing into `T`, failing on the first record that does not fit.
  pub fn listings_as<T: DeserializeOwned>(&self) -> Result<Vec<T>, Error> {
    self.listings.iter().map(|listing| T::deserialize(listing).map_err(Error::from)).collect()
  }
}

/// Parsed response body. Only `data` matters for loading; the other fields are the API's standard envelope and are
/// kept untyped so their contents never fail a load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemoteEnvelope {
  pub success: Option<Value>,
  pub message: Option<Value>,
  pub error: Option<Value>,
  pub data: Option<Vec<Value>>,
}

impl RemoteEnvelope {
  /// Reads an envelope from a parsed body. Anything but a JSON object is a parse error.
  pub fn from_body(body: Value) -> Result<Self, Error> {
    if !body.is_object() {
      return Err(Error::Parse(de::Error::invalid_type(unexpected(&body), &"a JSON object")));
    }
    Ok(serde_json::from_value(body)?)
  }

  /// `data` verbatim when present, an empty collection when absent or null.
  pub fn into_listings(self) -> Vec<Value> {
    self.data.unwrap_or_default()
  }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
  match value {
    Value::Null => Unexpected::Unit,
    Value::Bool(b) => Unexpected::Bool(*b),
    Value::Number(n) => n.as_f64().map_or(Unexpected::Other("number"), Unexpected::Float),
    Value::String(s) => Unexpected::Str(s),
    Value::Array(_) => Unexpected::Seq,
    Value::Object(_) => Unexpected::Map,
  }
}

/// Issues one GET for the listings resource and normalizes the body into a [`LoadResult`].
///
/// A non-success status fails with [`Error::LoadFailure`] without reading the body. Parse and transport errors are
/// returned as they come from the body parser and the fetch capability.
pub async fn load(fetch: &dyn Fetch) -> Result<LoadResult, Error> {
  let response = fetch.get(ITEMS_PATH).await?;
  if !response.ok() {
    return Err(Error::LoadFailure);
  }

  let body = response.json().await?;
  let envelope = RemoteEnvelope::from_body(body)?;
  let listings = envelope.into_listings();
  debug!("Loaded {} listings", listings.len());

  Ok(LoadResult { listings })
}
