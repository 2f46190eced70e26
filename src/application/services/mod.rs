pub mod provider_resolver;

pub use provider_resolver::{
    detect_provider, parse_remote_url, RemoteDescription, RepositoryProviderResolver,
};
