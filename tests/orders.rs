mod common;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

fn order() -> Value {
    json!({
        "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
        "mobileNumber": "(505) 143-3369",
        "status": "pending",
        "dishes": [
            {
                "id": "90c3d873684bf381dfab29034b5bba73",
                "name": "Falafel and tahini bagel",
                "description": "A warm bagel filled with falafel and tahini",
                "image_url": "https://images.example.com/bagel.jpg",
                "price": 6,
                "quantity": 2
            }
        ]
    })
}

async fn create_order(client: &Client, base: &str, data: Value) -> reqwest::Response {
    client
        .post(format!("{base}/orders"))
        .json(&json!({ "data": data }))
        .send()
        .await
        .unwrap()
}

async fn created_id(client: &Client, base: &str, data: Value) -> String {
    let response = create_order(client, base, data).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    response.json::<Value>().await.unwrap()["data"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

async fn update_order(client: &Client, base: &str, id: &str, data: Value) -> reqwest::Response {
    client
        .put(format!("{base}/orders/{id}"))
        .json(&json!({ "data": data }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn create_then_read_round_trips() {
    let base = common::spawn_app().await;
    let client = Client::new();

    let response = create_order(&client, &base, order()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response.json::<Value>().await.unwrap()["data"].clone();
    let id = created["id"].as_str().unwrap().to_string();

    let mut expected = order();
    expected["id"] = json!(id);
    assert_eq!(created, expected);

    let read = client
        .get(format!("{base}/orders/{id}"))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    assert_eq!(read["data"], created);

    let listed = client
        .get(format!("{base}/orders"))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    assert_eq!(listed["data"], json!([created]));
}

#[tokio::test]
async fn create_defaults_status_to_pending() {
    let base = common::spawn_app().await;
    let client = Client::new();

    let mut data = order();
    data.as_object_mut().unwrap().remove("status");

    let response = create_order(&client, &base, data).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        response.json::<Value>().await.unwrap()["data"]["status"],
        "pending"
    );
}

#[tokio::test]
async fn create_accepts_an_unknown_status() {
    let base = common::spawn_app().await;
    let client = Client::new();

    let mut data = order();
    data["status"] = json!("lost");

    let response = create_order(&client, &base, data).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = response.json::<Value>().await.unwrap()["data"].clone();
    assert_eq!(created["status"], "pending");

    let response = client
        .delete(format!("{base}/orders/{}", created["id"].as_str().unwrap()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn create_requires_at_least_one_dish() {
    let base = common::spawn_app().await;
    let client = Client::new();

    let mut data = order();
    data["dishes"] = json!([]);

    let response = create_order(&client, &base, data).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::error_of(response).await,
        "Order must include at least one dish"
    );
}

#[tokio::test]
async fn create_rejects_bad_quantities_by_index() {
    let base = common::spawn_app().await;
    let client = Client::new();

    for quantity in [json!(0), json!("2"), json!(1.5), Value::Null] {
        let mut data = order();
        let line = data["dishes"][0].clone();
        let mut bad_line = line.clone();
        bad_line["quantity"] = quantity.clone();
        data["dishes"] = json!([line, bad_line]);

        let response = create_order(&client, &base, data).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "quantity {quantity}");
        assert_eq!(
            common::error_of(response).await,
            "Dish 1 must have a quantity that is an integer greater than 0"
        );
    }

    let listed = client
        .get(format!("{base}/orders"))
        .send()
        .await
        .unwrap()
        .json::<Value>()
        .await
        .unwrap();
    assert_eq!(listed["data"], json!([]));
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let base = common::spawn_app().await;
    let client = Client::new();

    for field in ["deliverTo", "mobileNumber", "dishes"] {
        let mut data = order();
        data.as_object_mut().unwrap().remove(field);

        let response = create_order(&client, &base, data).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            common::error_of(response).await,
            format!("Order must include a {field}")
        );
    }
}

#[tokio::test]
async fn reading_an_unknown_order_is_not_found() {
    let base = common::spawn_app().await;

    let response = Client::new()
        .get(format!("{base}/orders/unknown"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        common::error_of(response).await,
        "Order Id not found: unknown"
    );
}

#[tokio::test]
async fn update_accepts_matching_or_absent_body_id() {
    let base = common::spawn_app().await;
    let client = Client::new();
    let id = created_id(&client, &base, order()).await;

    let mut data = order();
    data["status"] = json!("preparing");
    let response = update_order(&client, &base, &id, data.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>().await.unwrap()["data"]["status"],
        "preparing"
    );

    data["id"] = json!(id);
    data["status"] = json!("out-for-delivery");
    data["deliverTo"] = json!("12 Grimmauld Place, London");
    let response = update_order(&client, &base, &id, data).await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = response.json::<Value>().await.unwrap()["data"].clone();
    assert_eq!(updated["id"], json!(id));
    assert_eq!(updated["status"], "out-for-delivery");
    assert_eq!(updated["deliverTo"], "12 Grimmauld Place, London");
}

#[tokio::test]
async fn update_rejects_mismatched_body_id() {
    let base = common::spawn_app().await;
    let client = Client::new();
    let id = created_id(&client, &base, order()).await;

    let mut data = order();
    data["id"] = json!("someone-else");

    let response = update_order(&client, &base, &id, data).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::error_of(response).await,
        format!("Order id does not match route id. Order: someone-else, Route: {id}")
    );
}

#[tokio::test]
async fn update_validates_status() {
    let base = common::spawn_app().await;
    let client = Client::new();
    let id = created_id(&client, &base, order()).await;

    let mut data = order();
    data["status"] = json!("invalid");
    let response = update_order(&client, &base, &id, data).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::error_of(response).await,
        "Order must have a status of pending, preparing, out-for-delivery, delivered"
    );

    let mut data = order();
    data["status"] = json!("delivered");
    let response = update_order(&client, &base, &id, data).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::error_of(response).await,
        "A delivered order cannot be changed"
    );
}

#[tokio::test]
async fn update_of_unknown_order_is_not_found() {
    let base = common::spawn_app().await;

    let response = update_order(&Client::new(), &base, "unknown", order()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn only_pending_orders_can_be_deleted() {
    let base = common::spawn_app().await;
    let client = Client::new();

    let mut preparing = order();
    preparing["status"] = json!("preparing");
    let preparing_id = created_id(&client, &base, preparing).await;

    let response = client
        .delete(format!("{base}/orders/{preparing_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        common::error_of(response).await,
        "An order cannot be deleted unless it is pending."
    );

    let pending_id = created_id(&client, &base, order()).await;
    let response = client
        .delete(format!("{base}/orders/{pending_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.text().await.unwrap().is_empty());

    let response = client
        .get(format!("{base}/orders/{pending_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = client
        .get(format!("{base}/orders/{preparing_id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn deleting_an_unknown_order_is_not_found() {
    let base = common::spawn_app().await;

    let response = Client::new()
        .delete(format!("{base}/orders/unknown"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
