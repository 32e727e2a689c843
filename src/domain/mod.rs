pub mod error;
pub mod version;

pub use error::GateError;
pub use version::{Compatibility, Version};
