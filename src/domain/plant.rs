use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog grouping shown on the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Indoor,
    Outdoor,
    Succulent,
    Flowering,
}

/// Seller identity embedded in every plant listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: String,
}

/// A sellable catalog entry with its stock level.
///
/// `quantity` is unsigned: stock can only be reduced through the conditional
/// decrement in [`PlantAction::Adjust`](crate::plant_actor::PlantAction::Adjust).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub image: String,
    pub price: Decimal,
    pub quantity: u32,
    pub seller: Seller,
}

#[cfg(test)]
impl Plant {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        price: Decimal,
        quantity: u32,
        seller: Seller,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            image: String::new(),
            price,
            quantity,
            seller,
        }
    }
}

/// Payload for listing a new plant.
#[derive(Debug, Clone, Deserialize)]
pub struct PlantCreate {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: Decimal,
    pub quantity: u32,
    pub seller: Seller,
}

/// Seller edit: replaces every editable field at once.
#[derive(Debug, Clone, Deserialize)]
pub struct PlantPatch {
    pub name: String,
    pub category: Category,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    pub price: Decimal,
    pub quantity: u32,
}
