/// Application layer: provider resolution services built on the domain
/// model and the infrastructure readers.
pub mod services;
