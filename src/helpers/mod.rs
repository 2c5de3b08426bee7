//! Shared helper functions for page rendering and export

mod html;
mod url;

pub use html::*;
pub use url::*;
