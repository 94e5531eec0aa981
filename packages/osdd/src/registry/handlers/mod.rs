//! Element handlers for OpenSearch description documents.

mod metadata;
mod search_url;

pub use metadata::*;
pub use search_url::*;
