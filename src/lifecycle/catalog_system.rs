use tracing::{error, info};

use crate::clients::InstrumentClient;
use crate::config::CatalogConfig;
use crate::model::IdGenerator;

/// The runtime orchestrator of the catalog.
///
/// `CatalogSystem` is responsible for:
/// - **Lifecycle Management**: starting the store actor and stopping it again
/// - **Seeding**: loading the profile's sample records before the first request
/// - **Id Policy**: handing the configured [`IdGenerator`] to the actor, which owns it from then on
///
/// # Example
///
/// ```rust
/// use catalog_service::config::CatalogConfig;
/// use catalog_service::lifecycle::CatalogSystem;
///
/// #[tokio::main]
/// async fn main() {
///     let config = CatalogConfig::from_lookup(|_| None).unwrap();
///     let system = CatalogSystem::new(&config);
///
///     let items = system.instrument_client.list_instruments().await.unwrap();
///     assert_eq!(items.len(), 10);
///
///     system.shutdown().await.unwrap();
/// }
/// ```
pub struct CatalogSystem {
    /// Client for interacting with the store actor.
    pub instrument_client: InstrumentClient,

    /// Task handle of the store actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl CatalogSystem {
    /// Creates the generator, seeds it, and spawns the store actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: &CatalogConfig) -> Self {
        let profile = &config.profile;
        let mut generator = IdGenerator::new(profile.id_policy);

        let seed = if config.seed {
            profile.seed_records(&mut generator, &config.public_url)
        } else {
            Vec::new()
        };
        info!(
            collection = %profile.collection_path,
            policy = ?profile.id_policy,
            seeded = seed.len(),
            "Starting catalog"
        );

        let (actor, instrument_client) =
            crate::instrument_actor::new(config.channel_capacity, generator, seed);
        let handle = tokio::spawn(actor.run());

        Self {
            instrument_client,
            handle,
        }
    }

    /// Gracefully shuts down the store actor.
    ///
    /// Drops this system's client and waits for the actor task. The actor
    /// only stops once every clone of the client is gone, so callers must
    /// drop the clones they handed out (e.g. the router state) first.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down catalog...");
        drop(self.instrument_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e);
        }

        info!("Catalog shutdown complete.");
        Ok(())
    }
}
