use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::instrument_actor::InstrumentError;
use crate::model::{Instrument, InstrumentCreate, InstrumentId, InstrumentPatch};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Instrument actor.
#[derive(Clone)]
pub struct InstrumentClient {
    inner: ResourceClient<Instrument>,
}

impl InstrumentClient {
    pub fn new(inner: ResourceClient<Instrument>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn create_instrument(
        &self,
        params: InstrumentCreate,
    ) -> Result<Instrument, InstrumentError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn list_instruments(&self) -> Result<Vec<Instrument>, InstrumentError> {
        debug!("Sending request");
        self.inner.list().await.map_err(Self::map_error)
    }

    /// `Ok(None)` when no instrument has this id.
    #[instrument(skip(self))]
    pub async fn update_instrument(
        &self,
        id: InstrumentId,
        patch: InstrumentPatch,
    ) -> Result<Option<Instrument>, InstrumentError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Instrument> for InstrumentClient {
    type Error = InstrumentError;

    fn inner(&self) -> &ResourceClient<Instrument> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<InstrumentError>() {
                Ok(err) => *err,
                Err(other) => InstrumentError::ActorCommunicationError(other.to_string()),
            },
            other => InstrumentError::ActorCommunicationError(other.to_string()),
        }
    }
}
