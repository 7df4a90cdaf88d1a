/// Network adapters for external API calls
mod npm_registry_client;

pub use npm_registry_client::{NpmRegistryClient, DEFAULT_REGISTRY_URL};
