use std::io::Write;

use color_eyre::eyre::Result;
use tracing::info;

use crate::{
  cli::{Command, OutputFormat},
  fetch::Fetch,
  health,
  loader::{self, LoadResult},
  model::Listing,
};

/// Drives a single load on behalf of the command line, standing in for a page render.
pub struct App {
  pub fetch: Box<dyn Fetch>,
  pub format: OutputFormat,
}

impl App {
  pub fn new(fetch: Box<dyn Fetch>, format: OutputFormat) -> Self {
    Self { fetch, format }
  }

  pub async fn run(&self, command: Command, out: &mut dyn Write) -> Result<()> {
    match command {
      Command::List => {
        let result = loader::load(self.fetch.as_ref()).await?;
        info!("Rendering {} listings as {}", result.listings.len(), self.format);
        match self.format {
          OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?,
          OutputFormat::Table => write!(out, "{}", render_table(&result))?,
        }
      },
      Command::Health => {
        let status = health::check(self.fetch.as_ref()).await?;
        match status.version {
          Some(version) => writeln!(out, "{} (version {})", status.message, version)?,
          None => writeln!(out, "{}", status.message)?,
        }
      },
    }
    Ok(())
  }
}

/// One `id title` row per listing. Records that are not shaped like a [`Listing`] are printed as raw JSON.
fn render_table(result: &LoadResult) -> String {
  if result.listings.is_empty() {
    return String::from("No listings\n");
  }

  let mut table = format!("{:<6} {}\n", "ID", "TITLE");
  for item in &result.listings {
    let row = match Listing::try_from(item) {
      Ok(listing) => format!("{:<6} {}\n", listing.id, listing.title),
      Err(_) => format!("{:<6} {}\n", "-", item),
    };
    table.push_str(&row);
  }
  table
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use serde_json::json;

  use super::*;
  use crate::{error::Error, fetch::MockFetch, health::HEALTH_PATH, loader::ITEMS_PATH};

  async fn run(fetch: MockFetch, format: OutputFormat, command: Command) -> Result<String> {
    let app = App::new(Box::new(fetch), format);
    let mut out = Vec::new();
    app.run(command, &mut out).await?;
    Ok(String::from_utf8(out)?)
  }

  #[tokio::test]
  async fn test_list_as_json() {
    let fetch = MockFetch::new().respond(ITEMS_PATH, 200, r#"{"data": [{"id": 1}]}"#);

    let output = run(fetch, OutputFormat::Json, Command::List).await.unwrap();

    let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(printed, json!({"listings": [{"id": 1}]}));
  }

  #[tokio::test]
  async fn test_list_as_json_without_data() {
    let fetch = MockFetch::new().respond(ITEMS_PATH, 200, "{}");

    let output = run(fetch, OutputFormat::Json, Command::List).await.unwrap();

    let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(printed, json!({"listings": []}));
  }

  #[tokio::test]
  async fn test_list_as_table() {
    let fetch =
      MockFetch::new().respond(ITEMS_PATH, 200, r#"{"data": [{"id": 1, "title": "Bike"}, {"id": 2, "title": "Desk"}]}"#);

    let output = run(fetch, OutputFormat::Table, Command::List).await.unwrap();

    assert_eq!(output, "ID     TITLE\n1      Bike\n2      Desk\n");
  }

  #[tokio::test]
  async fn test_table_prints_unrecognized_records_raw() {
    let fetch = MockFetch::new().respond(ITEMS_PATH, 200, r#"{"data": [{"name": "x"}]}"#);

    let output = run(fetch, OutputFormat::Table, Command::List).await.unwrap();

    assert_eq!(output, "ID     TITLE\n-      {\"name\":\"x\"}\n");
  }

  #[tokio::test]
  async fn test_table_without_listings() {
    let fetch = MockFetch::new().respond(ITEMS_PATH, 200, r#"{"data": null}"#);

    let output = run(fetch, OutputFormat::Table, Command::List).await.unwrap();

    assert_eq!(output, "No listings\n");
  }

  #[tokio::test]
  async fn test_list_failure_is_reported() {
    let fetch = MockFetch::new().respond(ITEMS_PATH, 500, "");

    let err = run(fetch, OutputFormat::Json, Command::List).await.unwrap_err();

    assert!(matches!(err.downcast_ref::<Error>(), Some(Error::LoadFailure)));
    assert_eq!(err.to_string(), "Failed to fetch listings");
  }

  #[tokio::test]
  async fn test_health() {
    let fetch = MockFetch::new().respond(
      HEALTH_PATH,
      200,
      r#"{"success": true, "message": "Listing API is running", "data": {"version": "1.0.0"}}"#,
    );

    let output = run(fetch, OutputFormat::Json, Command::Health).await.unwrap();

    assert_eq!(output, "Listing API is running (version 1.0.0)\n");
  }
}
