//! XML utilities for navigating description documents.

mod utils;

pub use utils::*;
