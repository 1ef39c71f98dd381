pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod health;
pub mod loader;
pub mod model;
pub mod utils;

pub use error::Error;
pub use loader::{ITEMS_PATH, LoadResult, load};
