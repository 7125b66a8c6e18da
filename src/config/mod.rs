pub mod credentials;
pub mod parser;
pub mod types;

pub use types::*;
pub use credentials::{redact_credential, resolve_credential};
pub use parser::{parse_config, validate_config};
