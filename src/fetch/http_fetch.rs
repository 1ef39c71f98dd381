use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info};
use url::Url;

use super::{Fetch, FetchResponse};
use crate::{config::Config, error::Error};

/// [`Fetch`] backed by a `reqwest` client. Request paths are resolved against the configured base url.
#[derive(Debug, Clone)]
pub struct HttpFetch {
  client: Client,
  base_url: Url,
}

impl HttpFetch {
  pub fn new(config: &Config) -> Result<HttpFetch, Error> {
    let base_url = Url::parse(&config.base_url)?;
    let client = Client::builder().timeout(config.timeout()).user_agent(config.user_agent.as_str()).build()?;
    Ok(HttpFetch { client, base_url })
  }

  pub fn base_url(&self) -> &Url {
    &self.base_url
  }
}

struct HttpResponse {
  response: reqwest::Response,
}

#[async_trait]
impl FetchResponse for HttpResponse {
  fn status(&self) -> u16 {
    self.response.status().as_u16()
  }

  async fn json(self: Box<Self>) -> Result<Value, Error> {
    let body = self.response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
  }
}

#[async_trait]
impl Fetch for HttpFetch {
  async fn get(&self, path: &str) -> Result<Box<dyn FetchResponse>, Error> {
    let url = self.base_url.join(path)?;
    info!("GET {}", url);
    let response = match self.client.get(url.clone()).send().await {
      Ok(response) => response,
      Err(err) => {
        error!("GET {} failed: {}", url, err);
        return Err(Error::Transport(err));
      },
    };
    debug!("GET {} returned {}", url, response.status());
    Ok(Box::new(HttpResponse { response }))
  }
}
