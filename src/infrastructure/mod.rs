/// Infrastructure layer modules
///
/// Concrete implementations for external system interactions:
/// - Git metadata (remote lookup through libgit2)
/// - File system operations (configuration files)
pub mod filesystem;
pub mod git;

pub use filesystem::ConfigStore;
pub use git::{GitRemoteReader, RemoteInfo};
