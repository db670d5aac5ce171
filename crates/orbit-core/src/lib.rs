pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{OrbitError, Result};
pub use tolerance::Tolerance;
