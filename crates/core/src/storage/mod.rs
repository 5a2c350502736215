mod error;
mod traits;
mod types;

pub use error::{Result, StoreError, UnknownVariant};
pub use traits::OrderRepository;
pub use types::{ScanMode, WritePolicy};
