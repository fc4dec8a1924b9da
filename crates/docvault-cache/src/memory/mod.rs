//! In-process backend.

pub mod store;

pub use store::MemoryCacheProvider;
