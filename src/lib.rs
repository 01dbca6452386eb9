pub use error::{LookbackError, Result};
pub use lookback::{LastNExtractor, LookbackConfig, WindowPolicy};
pub use model::*;
pub use reshape::reshape;

pub mod error;
pub mod loader;
pub mod lookback;
pub mod model;
pub mod reshape;
