// Keycase Core Library
// Key naming convention transforms for nested serialization payloads

pub mod cache;
pub mod convention;
pub mod inflection;
pub mod transform;
pub mod value;

#[cfg(feature = "config")]
pub mod config;

pub use cache::{CacheStats, KeyCache};
pub use convention::Convention;
pub use transform::KeyTransform;
pub use value::{Key, Mapping, Scalar, Symbol, Value};

#[cfg(feature = "config")]
pub use config::{ConfigError, Direction, TransformSettings};
