use super::repository::{OrderDish, OrderStatus};
use crate::utils::{
    error::Error,
    validation::{self, has_property, positive_integer, rejection, Chain, Data},
};
use serde_json::Value;
use validator::ValidationError;

const RESOURCE: &str = "Order";

const INVALID_STATUS: &str =
    "Order must have a status of pending, preparing, out-for-delivery, delivered";

fn has_dishes(data: &Data) -> Result<(), ValidationError> {
    match data.get("dishes").and_then(Value::as_array) {
        Some(dishes) if !dishes.is_empty() => Ok(()),
        _ => Err(rejection(
            "MISSING_ORDER_DISHES",
            "Order must include at least one dish".to_string(),
        )),
    }
}

fn invalid_quantity(index: usize) -> ValidationError {
    rejection(
        "INVALID_DISH_QUANTITY",
        format!("Dish {index} must have a quantity that is an integer greater than 0"),
    )
}

/// Rejects with the index of the first line whose quantity is not a positive integer.
fn dish_quantities_are_valid(data: &Data) -> Result<(), ValidationError> {
    let lines = data
        .get("dishes")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    match lines
        .iter()
        .position(|line| line.get("quantity").and_then(positive_integer).is_none())
    {
        Some(index) => Err(invalid_quantity(index)),
        None => Ok(()),
    }
}

/// A proposed status of `delivered` is refused outright, whatever the current status.
fn status_is_valid(data: &Data) -> Result<(), Error> {
    let status = data
        .get("status")
        .and_then(Value::as_str)
        .and_then(|status| status.parse::<OrderStatus>().ok())
        .ok_or_else(|| Error::Validation(INVALID_STATUS.to_string()))?;

    match status {
        OrderStatus::Delivered => Err(Error::Conflict(
            "A delivered order cannot be changed".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Field checks run on create, in the order they are reported.
pub fn fields<'a>() -> Chain<'a, Data> {
    Chain::new()
        .check(has_property(RESOURCE, "deliverTo"))
        .check(has_property(RESOURCE, "mobileNumber"))
        .check(has_property(RESOURCE, "dishes"))
        .check(has_dishes)
        .check(dish_quantities_are_valid)
}

/// Update runs the create checks behind a route id match and ahead of a status check.
pub fn update_fields<'a>(route_id: &'a str) -> Chain<'a, Data> {
    Chain::new()
        .check(move |data: &Data| validation::id_matches_route(RESOURCE, route_id, data))
        .check(move |data: &Data| fields().run(data))
        .check(status_is_valid)
}

pub fn is_pending(status: OrderStatus) -> Result<(), Error> {
    match status {
        OrderStatus::Pending => Ok(()),
        _ => Err(Error::Conflict(
            "An order cannot be deleted unless it is pending.".to_string(),
        )),
    }
}

pub struct Fields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderDish>,
}

fn into_dish(index: usize, line: &Value) -> Result<OrderDish, Error> {
    let mut dish = line.as_object().cloned().unwrap_or_default();
    let quantity = dish
        .remove("quantity")
        .as_ref()
        .and_then(positive_integer)
        .ok_or_else(|| Error::from(invalid_quantity(index)))?;

    Ok(OrderDish { dish, quantity })
}

/// Reads the checked body into typed fields. A status that is absent or names none of the
/// known statuses reads as `None`; update has already refused those in its chain.
pub fn into_fields(data: &Data) -> Result<Fields, Error> {
    let status = data
        .get("status")
        .and_then(Value::as_str)
        .and_then(|status| status.parse::<OrderStatus>().ok());

    let dishes = data
        .get("dishes")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(index, line)| into_dish(index, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Fields {
        deliver_to: validation::string_property(data, RESOURCE, "deliverTo")?,
        mobile_number: validation::string_property(data, RESOURCE, "mobileNumber")?,
        status,
        dishes,
    })
}
