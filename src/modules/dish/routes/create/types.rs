pub mod request {
    use crate::utils::validation::Data;

    pub struct Payload {
        pub data: Data,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::dish::repository::Dish;
    pub use crate::utils::error::Error;

    pub enum Success {
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => {
                    (StatusCode::CREATED, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
