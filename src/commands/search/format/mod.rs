//! Output formatting for search results

mod human;
mod json;

pub use human::{output_human, write_human};
pub use json::output_json;
