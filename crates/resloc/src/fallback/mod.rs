//! Language fallback: chain configuration and probe order resolution.

mod chain;
mod config;
mod resolver;

pub use chain::{
    ChainBuilder, FallbackChainRegistry, FallbackChainRegistryBuilder, ScopedChainBuilder,
};
pub use config::FallbackConfig;
pub use resolver::FallbackResolver;
