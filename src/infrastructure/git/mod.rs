pub mod remote;

pub use remote::{validate_remote_name, GitRemoteError, GitRemoteReader, RemoteInfo};
