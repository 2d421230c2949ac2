//! Source acquisition strategies.
//!
//! - `UrlListSource` - URLs from a plain-text file, fetched one by one
//! - `SearchSource` - search results fetched by a `Searcher`

mod search;
mod url_list;

pub use search::SearchSource;
pub use url_list::{parse_url_list, UrlListSource};

// Re-export from traits for convenience
pub use crate::traits::source::{SourceContent, SourceContext, SourceStrategy};
