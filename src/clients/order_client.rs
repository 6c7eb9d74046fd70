use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use tracing::{debug, error, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::clients::PlantClient;
use crate::domain::{Order, OrderCreate, OrderView, Plant, Purchase};
use crate::order_actor::OrderError;
use crate::plant_actor::{Direction, PlantError};

/// Outcome of a successful purchase: the new order and the plant after its
/// stock was reduced.
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    pub order_id: String,
    pub plant: Plant,
}

/// Client for interacting with the Order actor.
///
/// This client owns the order lifecycle: it reserves stock through the
/// [`PlantClient`] before an order exists and gives it back when one is cancelled.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    plant_client: PlantClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, plant_client: PlantClient) -> Self {
        Self { inner, plant_client }
    }

    /// Places an order for `purchase.quantity` units of a plant.
    ///
    /// Stock is taken with a conditional decrement before the order is written,
    /// so a purchase either reserves its units or is rejected without side effects.
    /// The order price is the plant's unit price at that moment times the quantity.
    #[instrument(
        skip(self, purchase),
        fields(plant_id = %purchase.plant_id, customer = %purchase.customer.email, quantity = purchase.quantity)
    )]
    pub async fn create_order(&self, purchase: Purchase) -> Result<OrderReceipt, OrderError> {
        info!("Processing create_order request");
        validate_purchase(&purchase)?;

        // Step 1: Reserve stock
        let plant = match self
            .plant_client
            .adjust_quantity(purchase.plant_id.clone(), purchase.quantity, Direction::Decrease)
            .await
        {
            Ok(plant) => plant,
            Err(e) => {
                warn!(error = %e, "Stock reservation failed");
                return Err(e.into());
            }
        };
        info!(remaining = plant.quantity, "Stock reserved successfully");

        // Step 2: Price the order; an unrepresentable total gives the units back
        let Some(total) = plant.price.checked_mul(Decimal::from(purchase.quantity)) else {
            warn!(unit_price = %plant.price, "Order total out of range, releasing reserved stock");
            self.release_stock(plant.id.clone(), purchase.quantity).await;
            return Err(OrderError::ValidationError(format!(
                "Order total out of range: {} x {}",
                plant.price, purchase.quantity
            )));
        };

        // Step 3: Write the order with its price frozen
        let payload = OrderCreate {
            plant_id: plant.id.clone(),
            customer: purchase.customer,
            seller: plant.seller.email.clone(),
            quantity: purchase.quantity,
            price: total,
            address: purchase.address,
        };

        match self.inner.create(payload).await {
            Ok(order_id) => {
                info!(order_id = %order_id, "Order created successfully");
                Ok(OrderReceipt { order_id, plant })
            }
            Err(e) => {
                error!(error = %e, "Order insert failed, releasing reserved stock");
                self.release_stock(plant.id.clone(), purchase.quantity).await;
                Err(e.into())
            }
        }
    }

    /// Deletes an order and returns its units to the plant.
    ///
    /// Returns the number of orders removed: `0` when the order was already gone.
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: String) -> Result<u64, OrderError> {
        info!("Processing cancel_order request");
        let Some(order) = self.inner.delete(id).await? else {
            info!("Order already gone");
            return Ok(0);
        };

        match self
            .plant_client
            .adjust_quantity(order.plant_id.clone(), order.quantity, Direction::Increase)
            .await
        {
            Ok(plant) => {
                info!(plant_id = %plant.id, quantity = plant.quantity, "Stock restored");
                Ok(1)
            }
            Err(PlantError::NotFound(plant_id)) => {
                warn!(plant_id = %plant_id, "Plant no longer listed, nothing to restore");
                Ok(1)
            }
            Err(e) => {
                error!(error = %e, "Stock restore failed, putting order back");
                if let Err(reinsert) = self.inner.insert(order).await {
                    error!(error = %reinsert, "Order could not be put back");
                }
                Err(e.into())
            }
        }
    }

    /// Orders placed by `email`, newest first, with current plant details.
    #[instrument(skip(self))]
    pub async fn list_orders_for_customer(&self, email: String) -> Result<Vec<OrderView>, OrderError> {
        debug!("Sending request");
        let orders = self.inner.list_where(move |o: &Order| o.customer.email == email).await?;
        self.enrich(orders).await
    }

    /// Orders for plants sold by `email`, newest first, with current plant details.
    #[instrument(skip(self))]
    pub async fn list_orders_for_seller(&self, email: String) -> Result<Vec<OrderView>, OrderError> {
        debug!("Sending request");
        let orders = self.inner.list_where(move |o: &Order| o.seller == email).await?;
        self.enrich(orders).await
    }

    /// Joins each order with the plant it references. The order keeps its own price.
    async fn enrich(&self, mut orders: Vec<Order>) -> Result<Vec<OrderView>, OrderError> {
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let ids: HashSet<String> = orders.iter().map(|o| o.plant_id.clone()).collect();
        let plants: HashMap<String, Plant> = self
            .plant_client
            .list_plants_by_ids(ids.into_iter().collect())
            .await?
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();

        let views = orders
            .into_iter()
            .map(|order| {
                let plant = plants.get(&order.plant_id);
                OrderView {
                    name: plant.map(|p| p.name.clone()),
                    image: plant.map(|p| p.image.clone()),
                    category: plant.map(|p| p.category),
                    order,
                }
            })
            .collect::<Vec<_>>();
        debug!(count = views.len(), "Orders enriched");
        Ok(views)
    }

    async fn release_stock(&self, plant_id: String, quantity: u32) {
        if let Err(e) = self
            .plant_client
            .adjust_quantity(plant_id, quantity, Direction::Increase)
            .await
        {
            error!(error = %e, "Compensating stock release failed");
        }
    }
}

fn validate_purchase(purchase: &Purchase) -> Result<(), OrderError> {
    if purchase.quantity == 0 {
        return Err(OrderError::ValidationError("Quantity must be at least 1".to_string()));
    }
    if purchase.address.trim().is_empty() {
        return Err(OrderError::ValidationError("Delivery address required".to_string()));
    }
    if purchase.customer.email.trim().is_empty() {
        return Err(OrderError::ValidationError("Customer email required".to_string()));
    }
    Ok(())
}
