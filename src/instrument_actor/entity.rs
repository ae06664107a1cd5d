//! Entity trait implementation for the Instrument domain type.
//!
//! Validation proper happens before a request reaches the actor; the hooks
//! here re-check the catalog invariants on the final record so that no code
//! path can store a record that breaks them.

use super::error::InstrumentError;
use crate::framework::ActorEntity;
use crate::model::{Instrument, InstrumentCreate, InstrumentId, InstrumentPatch};

impl ActorEntity for Instrument {
    type Id = InstrumentId;
    type Create = InstrumentCreate;
    type Update = InstrumentPatch;
    type Error = InstrumentError;

    fn id(&self) -> &InstrumentId {
        &self.id
    }

    fn from_create_params(id: InstrumentId, params: InstrumentCreate) -> Result<Self, Self::Error> {
        let item = Instrument::from_create(id, params);
        check_invariants(&item)?;
        Ok(item)
    }

    /// Applies the patch to a copy first; the stored record only changes if
    /// the result is valid.
    fn on_update(&mut self, update: InstrumentPatch) -> Result<(), Self::Error> {
        let next = update.apply(self);
        check_invariants(&next)?;
        *self = next;
        Ok(())
    }
}

/// Checks the invariants every stored record must hold.
pub fn check_invariants(item: &Instrument) -> Result<(), InstrumentError> {
    let violation = |msg: &str| Err(InstrumentError::InvariantViolated(msg.to_string()));

    if item.name.trim().is_empty() {
        return violation("name is empty");
    }
    if [&item.category, &item.description]
        .into_iter()
        .flatten()
        .any(|text| text.trim().is_empty())
    {
        return violation("text field is empty");
    }
    if !item.price.is_finite() || item.price <= 0.0 {
        return violation("price must be a finite number greater than 0");
    }
    if let Some(rating) = item.rating {
        if !(0.0..=5.0).contains(&rating) {
            return violation("rating must be between 0 and 5");
        }
    }
    Ok(())
}
