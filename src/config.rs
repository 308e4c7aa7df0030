//! Configuration loader and schema types.
//!
//! Settings drive directory scanning, record post-processing and how the
//! command line tool prints records.

mod load;
mod schema;

pub use load::{default_config_path, resolve_config_path};
pub use schema::*;
