//! Connection to the `anchor_store` SpacetimeDB module.
//!
//! Built only with the `stdb` feature; without it [`connect`] refuses and the viewer stays on
//! the in-process store.

#[cfg(feature = "stdb")]
mod connection;
// Only the connection feeds the store outside tests.
#[cfg_attr(not(feature = "stdb"), allow(dead_code))]
pub mod store;

use std::sync::Arc;

use anchor_sync::RemoteStore;

pub const DEFAULT_MODULE: &str = "anchor-store";

/// Where the shared store lives and who we are to it.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub uri: String,
    pub module: String,
    /// SpacetimeDB JWT. Without one the identity is ephemeral for this run.
    pub token: Option<String>,
    /// Hex identity to promote on connect. Only honored when our own identity is an admin.
    pub grant_admin: Option<String>,
}

impl ServerConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            module: DEFAULT_MODULE.to_owned(),
            token: None,
            grant_admin: None,
        }
    }
}

#[cfg(feature = "stdb")]
pub fn connect(config: &ServerConfig) -> Result<Arc<dyn RemoteStore>, String> {
    let store: Arc<dyn RemoteStore> = connection::connect(config)?;
    Ok(store)
}

#[cfg(not(feature = "stdb"))]
pub fn connect(config: &ServerConfig) -> Result<Arc<dyn RemoteStore>, String> {
    Err(format!(
        "cannot reach {}: this build has no SpacetimeDB support; rebuild with `--features stdb`",
        config.uri
    ))
}
