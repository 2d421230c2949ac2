//! Fetcher and searcher implementations.
//!
//! - `HttpFetcher` - plain HTTP GET via reqwest
//! - `BrowserSearch` - search-engine results through a headless browser
//! - `MockFetcher`, `MockSearcher` - for testing

mod browser;
mod http;
mod mock;

pub use browser::BrowserSearch;
pub use http::HttpFetcher;
pub use mock::{MockFetcher, MockSearcher};

// Re-export from traits for convenience
pub use crate::traits::fetcher::{FetchedPage, PageFetcher};
pub use crate::traits::searcher::{SearchHit, Searcher};
