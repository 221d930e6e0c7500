#![doc = include_str!("../README.md")]

pub mod body;
pub mod error;
pub mod header;
pub mod response;
pub mod status;

pub use body::Body;
pub use error::{Error, Result};
pub use header::{HeaderBatch, is_valid_header_name, trim_header_value};
pub use response::{Payload, ProxyResponse};
pub use status::{HttpStatus, is_registered};
