pub mod charset;
pub mod config;
pub mod nested;
pub mod registry;

pub use charset::{Charset, CharsetError, Feature, FeatureAnnotation, Id, Language, Symbol};
pub use config::CodecConfig;
pub use nested::Nested;
pub use registry::{get_charset, global, CharsetRegistry, RegistryBuilder};
