use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderStatus};

impl Entity for Order {
    type Id = String;
    type CreatePayload = OrderCreate;
    type Patch = (); // Orders are immutable once placed
    type Action = ();
    type ActionResult = ();

    fn id(&self) -> &String { &self.id }

    /// Creates a new Order from creation parameters.
    ///
    /// # Notes
    /// The order is initialized with status [`OrderStatus::Pending`] and stamped
    /// with the current time.
    fn from_create(id: String, payload: OrderCreate) -> Result<Self, String> {
        if payload.quantity == 0 {
            return Err("Order quantity must be at least 1".to_string());
        }
        Ok(Self {
            id,
            plant_id: payload.plant_id,
            customer: payload.customer,
            seller: payload.seller,
            quantity: payload.quantity,
            price: payload.price,
            address: payload.address,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Err("Orders cannot be edited".to_string())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
