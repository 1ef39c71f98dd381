pub mod http_fetch;
pub mod mock_fetch;
pub mod types;

pub use http_fetch::HttpFetch;
pub use mock_fetch::MockFetch;
pub use types::{Fetch, FetchResponse};
