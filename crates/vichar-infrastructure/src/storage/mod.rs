//! Storage primitives shared by the repository implementations.

mod atomic_file;

pub use atomic_file::AtomicTomlFile;
