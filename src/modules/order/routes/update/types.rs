pub mod request {
    use crate::utils::validation::Data;

    pub struct Payload {
        pub id: String,
        pub data: Data,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::order::repository::Order;
    pub use crate::utils::error::Error;

    pub enum Success {
        OrderUpdated(Order),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::OrderUpdated(order) => {
                    (StatusCode::OK, Json(json!({ "data": order }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
