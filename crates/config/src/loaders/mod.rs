//! Source loaders

pub mod composite;
pub mod env;
pub mod file;

pub use composite::CompositeLoader;
pub use env::EnvLoader;
pub use file::FileLoader;
