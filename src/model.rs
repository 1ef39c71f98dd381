use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Typed view of a listing as served by the listings API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
  pub id: i64,
  pub title: String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<&Value> for Listing {
  type Error = serde_json::Error;

  fn try_from(value: &Value) -> Result<Self, Self::Error> {
    Listing::deserialize(value)
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;

  #[test]
  fn test_listing_from_api_record() {
    let value = json!({
      "id": 1,
      "title": "Vintage bike",
      "description": "Barely used",
      "created_at": "2024-03-01T10:00:00.123456789Z",
      "updated_at": "2024-03-02T08:30:00+02:00"
    });

    let listing = Listing::try_from(&value).unwrap();

    assert_eq!(listing.id, 1);
    assert_eq!(listing.title, "Vintage bike");
    assert_eq!(listing.description, "Barely used");
    assert_eq!(listing.updated_at, Some(Utc.with_ymd_and_hms(2024, 3, 2, 6, 30, 0).unwrap()));
    assert!(listing.created_at.is_some());
  }

  #[test]
  fn test_listing_optional_fields() {
    let listing = Listing::try_from(&json!({"id": 2, "title": "Desk"})).unwrap();

    assert_eq!(
      listing,
      Listing { id: 2, title: "Desk".to_string(), description: String::new(), created_at: None, updated_at: None }
    );
  }

  #[test]
  fn test_listing_requires_id_and_title() {
    assert!(Listing::try_from(&json!({"title": "No id"})).is_err());
    assert!(Listing::try_from(&json!({"id": 3})).is_err());
    assert!(Listing::try_from(&json!(42)).is_err());
  }
}
