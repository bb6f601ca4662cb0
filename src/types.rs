use crate::{
    modules::{dish, order},
    utils::config::{AppConfig, Config},
};
use async_trait::async_trait;

pub struct Context {
    pub app: AppConfig,
    pub dishes: dish::repository::Store,
    pub orders: order::repository::Store,
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Context;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Context {
        let (dishes, orders) = if self.data.seed {
            let dishes = dish::repository::load_seed().unwrap_or_else(|err| {
                tracing::error!("Failed to load seed dishes: {}", err);
                vec![]
            });
            let orders = order::repository::load_seed().unwrap_or_else(|err| {
                tracing::error!("Failed to load seed orders: {}", err);
                vec![]
            });
            tracing::info!(
                "Seeded {} dishes and {} orders",
                dishes.len(),
                orders.len()
            );
            (dishes, orders)
        } else {
            (vec![], vec![])
        };

        Context {
            app: self.app,
            dishes: dish::repository::Store::new(dishes),
            orders: order::repository::Store::new(orders),
        }
    }
}
