// Application layer - use cases and orchestration.
// Clients build typed commands from raw input, then hand them to LedgerService.

pub mod builder;
pub mod error;
pub mod reporting;
pub mod service;

pub use builder::*;
pub use error::*;
pub use reporting::*;
pub use service::*;
