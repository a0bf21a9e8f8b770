mod config;
mod error;
mod helpers;
mod parser;
mod types;

pub use config::{
    default_configuration, Configuration, DEFAULT_ENVIRONMENTS, DEFAULT_HEADER_NAME,
    DEFAULT_PLATFORMS,
};
pub use error::{Error, Result, ValidationError, EXPECTED_FORMAT};
pub use parser::{parse, HeaderParser};
pub use types::*;
