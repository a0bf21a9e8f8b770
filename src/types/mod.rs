mod client_metadata;
mod metadata_value;

pub use client_metadata::*;
pub use metadata_value::*;
