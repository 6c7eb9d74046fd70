use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// Buyer identity copied into the order at purchase time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
    Cancelled,
}

/// Represents a customer order.
///
/// `price` is the total for `quantity` units, fixed when the order is placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub plant_id: String,
    pub customer: Customer,
    pub seller: String,
    pub quantity: u32,
    pub price: Decimal,
    pub address: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order, assembled after stock has been reserved.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub plant_id: String,
    pub customer: Customer,
    pub seller: String,
    pub quantity: u32,
    pub price: Decimal,
    pub address: String,
}

/// What a customer asks for when buying a plant.
///
/// Client-sent `price`, `seller` and `status` fields are not part of the
/// request; they are derived from the plant when the order is placed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    pub customer: Customer,
    pub plant_id: String,
    pub quantity: u32,
    pub address: String,
}

/// An order row joined with the current catalog data of its plant.
///
/// Plant fields are `None` when the plant has been removed since the purchase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    pub name: Option<String>,
    pub image: Option<String>,
    pub category: Option<Category>,
}
