//! Application state shared across handlers.

use std::sync::Arc;

use crate::clients::InstrumentClient;
use crate::profile::CatalogProfile;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// It holds a client of the store actor, never the collection itself.
#[derive(Clone)]
pub struct AppState {
    client: InstrumentClient,
    profile: Arc<CatalogProfile>,
}

impl AppState {
    pub fn new(client: InstrumentClient, profile: CatalogProfile) -> Self {
        Self {
            client,
            profile: Arc::new(profile),
        }
    }

    /// Get the store client.
    pub fn client(&self) -> &InstrumentClient {
        &self.client
    }

    /// Get the active profile.
    pub fn profile(&self) -> &CatalogProfile {
        &self.profile
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("profile", &self.profile)
            .finish_non_exhaustive()
    }
}
