use crate::utils::id;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};
use tokio::sync::RwLock;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid OrderStatus", s))
    }
}

/// A dish line on an order: the dish fields as sent by the client plus a quantity.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderDish {
    #[serde(flatten)]
    pub dish: Map<String, Value>,
    pub quantity: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

/// The order collection. Only the functions in this module touch the records.
#[derive(Default)]
pub struct Store(RwLock<Vec<Order>>);

impl Store {
    pub fn new(orders: Vec<Order>) -> Self {
        Self(RwLock::new(orders))
    }
}

const SEED: &str = include_str!("../../../data/orders.json");

pub fn load_seed() -> Result<Vec<Order>, serde_json::Error> {
    serde_json::from_str(SEED)
}

pub struct CreateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

pub async fn create(store: &Store, payload: CreateOrderPayload) -> Order {
    let mut orders = store.0.write().await;

    let order = Order {
        id: id::generate(|id| orders.iter().any(|order| order.id == id)),
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: payload.status,
        dishes: payload.dishes,
    };
    orders.push(order.clone());

    order
}

pub async fn find_many(store: &Store) -> Vec<Order> {
    store.0.read().await.clone()
}

pub async fn find_by_id(store: &Store, id: &str) -> Option<Order> {
    store
        .0
        .read()
        .await
        .iter()
        .find(|order| order.id == id)
        .cloned()
}

pub struct UpdateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

pub async fn update_by_id(store: &Store, id: &str, payload: UpdateOrderPayload) -> Option<Order> {
    let mut orders = store.0.write().await;
    let order = orders.iter_mut().find(|order| order.id == id)?;

    order.deliver_to = payload.deliver_to;
    order.mobile_number = payload.mobile_number;
    order.status = payload.status;
    order.dishes = payload.dishes;

    Some(order.clone())
}

/// Removes the order once `guard` accepts it. The guard runs under the same write lock as
/// the removal, so the order it sees is the order that goes. `None` means no such order.
pub async fn delete_by_id<E>(
    store: &Store,
    id: &str,
    guard: impl FnOnce(&Order) -> Result<(), E>,
) -> Option<Result<Order, E>> {
    let mut orders = store.0.write().await;
    let index = orders.iter().position(|order| order.id == id)?;

    Some(guard(&orders[index]).map(|()| orders.remove(index)))
}
