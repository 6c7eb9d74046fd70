use tracing::{debug, info, instrument, warn};
use crate::domain::{Plant, PlantCreate, PlantPatch};
use crate::plant_actor::{Direction, PlantAction, PlantActionResult, PlantError};
use crate::actor_framework::ResourceClient;

/// Client for the catalog (plant) actor.
///
/// Every stock change goes through [`PlantClient::adjust_quantity`], which the
/// plant actor applies as one atomic step.
#[derive(Clone)]
pub struct PlantClient {
    inner: ResourceClient<Plant>,
}

crate::impl_basic_client!(PlantClient, Plant, PlantError, plant);

impl PlantClient {
    #[instrument(skip(self, plant), fields(plant_name = %plant.name, seller = %plant.seller.email))]
    pub async fn create_plant(&self, plant: PlantCreate) -> Result<String, PlantError> {
        debug!("Sending request");
        let id = self.inner.create(plant).await?;
        info!(plant_id = %id, "Plant listed");
        Ok(id)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_plant(&self, id: String, patch: PlantPatch) -> Result<Plant, PlantError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Plants listed by one seller.
    #[instrument(skip(self))]
    pub async fn list_plants_by_seller(&self, email: String) -> Result<Vec<Plant>, PlantError> {
        debug!("Sending request");
        Ok(self.inner.list_where(move |p: &Plant| p.seller.email == email).await?)
    }

    /// Fetches every plant whose id is in `ids` in a single round trip.
    #[instrument(skip(self, ids), fields(count = ids.len()))]
    pub async fn list_plants_by_ids(&self, ids: Vec<String>) -> Result<Vec<Plant>, PlantError> {
        debug!("Sending request");
        Ok(self.inner.list_where(move |p: &Plant| ids.contains(&p.id)).await?)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<u32, PlantError> {
        debug!("Sending request");
        match self.inner.perform_action(id, PlantAction::CheckStock).await? {
            PlantActionResult::StockLevel(level) => Ok(level),
            other => Err(PlantError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Moves a plant's stock by `delta` units and returns the plant afterwards.
    ///
    /// # Errors
    /// - [`PlantError::InvalidQuantity`] when `delta` is zero
    /// - [`PlantError::NotFound`] when no plant has this id
    /// - [`PlantError::InsufficientStock`] when a decrease asks for more than is available;
    ///   the stock is left unchanged in that case
    #[instrument(skip(self))]
    pub async fn adjust_quantity(
        &self,
        id: String,
        delta: u32,
        direction: Direction,
    ) -> Result<Plant, PlantError> {
        debug!("Sending request");
        if delta == 0 {
            return Err(PlantError::InvalidQuantity(delta));
        }
        match self.inner.perform_action(id, PlantAction::Adjust { delta, direction }).await? {
            PlantActionResult::Adjusted(plant) => {
                info!(quantity = plant.quantity, "Stock adjusted");
                Ok(plant)
            }
            PlantActionResult::Insufficient { requested, available } => {
                warn!(requested, available, "Stock adjustment refused");
                Err(PlantError::InsufficientStock { requested, available })
            }
            other => Err(PlantError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }
}
