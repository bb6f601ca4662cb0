use crate::utils::{
    error::Error,
    validation::{self, has_property, positive_integer, rejection, Chain, Data},
};
use validator::ValidationError;

const RESOURCE: &str = "Dish";

fn invalid_price() -> ValidationError {
    rejection(
        "INVALID_DISH_PRICE",
        "Dish must have a price that is an integer greater than 0".to_string(),
    )
}

fn price_is_valid(data: &Data) -> Result<(), ValidationError> {
    data.get("price")
        .and_then(positive_integer)
        .map(|_| ())
        .ok_or_else(invalid_price)
}

/// Field checks shared by create and update, in the order they are reported.
pub fn fields<'a>() -> Chain<'a, Data> {
    Chain::new()
        .check(has_property(RESOURCE, "name"))
        .check(has_property(RESOURCE, "description"))
        .check(has_property(RESOURCE, "price"))
        .check(price_is_valid)
        .check(has_property(RESOURCE, "image_url"))
}

pub fn id_matches_route(route_id: &str, data: &Data) -> Result<(), Error> {
    validation::id_matches_route(RESOURCE, route_id, data)
}

pub struct Fields {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

/// Reads the checked body into typed fields.
pub fn into_fields(data: &Data) -> Result<Fields, Error> {
    Ok(Fields {
        name: validation::string_property(data, RESOURCE, "name")?,
        description: validation::string_property(data, RESOURCE, "description")?,
        price: data
            .get("price")
            .and_then(positive_integer)
            .ok_or_else(|| Error::from(invalid_price()))?,
        image_url: validation::string_property(data, RESOURCE, "image_url")?,
    })
}
