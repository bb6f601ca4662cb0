use crate::utils::id;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// The dish collection. Only the functions in this module touch the records.
#[derive(Default)]
pub struct Store(RwLock<Vec<Dish>>);

impl Store {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self(RwLock::new(dishes))
    }
}

const SEED: &str = include_str!("../../../data/dishes.json");

pub fn load_seed() -> Result<Vec<Dish>, serde_json::Error> {
    serde_json::from_str(SEED)
}

pub struct CreateDishPayload {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

pub async fn create(store: &Store, payload: CreateDishPayload) -> Dish {
    let mut dishes = store.0.write().await;

    let dish = Dish {
        id: id::generate(|id| dishes.iter().any(|dish| dish.id == id)),
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
    };
    dishes.push(dish.clone());

    dish
}

pub async fn find_many(store: &Store) -> Vec<Dish> {
    store.0.read().await.clone()
}

pub async fn find_by_id(store: &Store, id: &str) -> Option<Dish> {
    store
        .0
        .read()
        .await
        .iter()
        .find(|dish| dish.id == id)
        .cloned()
}

pub struct UpdateDishPayload {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

pub async fn update_by_id(store: &Store, id: &str, payload: UpdateDishPayload) -> Option<Dish> {
    let mut dishes = store.0.write().await;
    let dish = dishes.iter_mut().find(|dish| dish.id == id)?;

    dish.name = payload.name;
    dish.description = payload.description;
    dish.price = payload.price;
    dish.image_url = payload.image_url;

    Some(dish.clone())
}
