use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::{Plant, PlantCreate, PlantPatch};
use super::actions::{Direction, PlantAction, PlantActionResult};

fn validate_listing(name: &str, price: Decimal) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Plant name required".to_string());
    }
    if price.is_sign_negative() {
        return Err(format!("Price must not be negative: {}", price));
    }
    Ok(())
}

impl Entity for Plant {
    type Id = String;
    type CreatePayload = PlantCreate;
    type Patch = PlantPatch;
    type Action = PlantAction;
    type ActionResult = PlantActionResult;

    fn id(&self) -> &String { &self.id }

    /// Creates a new Plant from a seller's listing.
    ///
    /// # Errors
    /// Rejects an empty name or a negative price.
    fn from_create(id: String, payload: PlantCreate) -> Result<Self, String> {
        validate_listing(&payload.name, payload.price)?;
        Ok(Self {
            id,
            name: payload.name,
            category: payload.category,
            description: payload.description,
            image: payload.image,
            price: payload.price,
            quantity: payload.quantity,
            seller: payload.seller,
        })
    }

    /// Replaces every editable field. The seller is never changed by an edit.
    fn on_update(&mut self, patch: PlantPatch) -> Result<(), String> {
        validate_listing(&patch.name, patch.price)?;
        self.name = patch.name;
        self.category = patch.category;
        self.description = patch.description;
        self.image = patch.image;
        self.price = patch.price;
        self.quantity = patch.quantity;
        Ok(())
    }

    /// Handles plant-specific actions.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `Adjust`: Conditional decrement or increment of the stock level
    ///
    /// # Errors
    /// Returns an error if an increase would overflow the stock counter.
    fn handle_action(&mut self, action: PlantAction) -> Result<PlantActionResult, String> {
        match action {
            PlantAction::CheckStock => Ok(PlantActionResult::StockLevel(self.quantity)),
            PlantAction::Adjust { delta, direction: Direction::Decrease } => {
                match self.quantity.checked_sub(delta) {
                    Some(left) => {
                        self.quantity = left;
                        Ok(PlantActionResult::Adjusted(self.clone()))
                    }
                    None => Ok(PlantActionResult::Insufficient {
                        requested: delta,
                        available: self.quantity,
                    }),
                }
            }
            PlantAction::Adjust { delta, direction: Direction::Increase } => {
                self.quantity = self
                    .quantity
                    .checked_add(delta)
                    .ok_or_else(|| format!("Stock overflow: {} + {}", self.quantity, delta))?;
                Ok(PlantActionResult::Adjusted(self.clone()))
            }
        }
    }
}
