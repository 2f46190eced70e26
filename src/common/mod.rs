pub mod error;
pub mod result;

pub use error::ProviderError;
pub use result::ProviderResult;
