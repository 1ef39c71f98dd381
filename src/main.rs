use clap::Parser;
use color_eyre::eyre::Result;
use listing_loader::{
  app::App,
  cli::Cli,
  config::Config,
  fetch::HttpFetch,
  utils::{initialize_logging, initialize_panic_handler},
};
use tracing::info;

async fn tokio_main() -> Result<()> {
  initialize_logging()?;
  initialize_panic_handler()?;

  let cli = Cli::parse();
  let config = Config::new()?.with_overrides(cli.base_url.clone(), cli.timeout_secs);
  info!("Loading from {} with a {}s timeout", config.base_url, config.timeout_secs);

  let fetch = HttpFetch::new(&config)?;
  let app = App::new(Box::new(fetch), cli.format);
  let mut stdout = std::io::stdout();
  app.run(cli.command.unwrap_or_default(), &mut stdout).await
}

#[tokio::main]
async fn main() -> Result<()> {
  if let Err(e) = tokio_main().await {
    eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
    Err(e)
  } else {
    Ok(())
  }
}
