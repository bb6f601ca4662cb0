use super::error::Error;
use serde_json::{Map, Value};
use std::borrow::Cow;
use validator::ValidationError;

/// The `data` object of a request body.
pub type Data = Map<String, Value>;

type Check<'a, T> = Box<dyn Fn(&T) -> Result<(), Error> + Send + Sync + 'a>;

/// An ordered list of guards. `run` stops at the first guard that rejects.
pub struct Chain<'a, T> {
    checks: Vec<Check<'a, T>>,
}

impl<'a, T> Default for Chain<'a, T> {
    fn default() -> Self {
        Self { checks: vec![] }
    }
}

impl<'a, T> Chain<'a, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check<E, F>(mut self, check: F) -> Self
    where
        E: Into<Error>,
        F: Fn(&T) -> Result<(), E> + Send + Sync + 'a,
    {
        self.checks
            .push(Box::new(move |target: &T| check(target).map_err(Into::into)));
        self
    }

    pub fn run(&self, target: &T) -> Result<(), Error> {
        self.checks.iter().try_for_each(|check| check(target))
    }
}

pub fn rejection(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::from(message))
}

/// JSON truthiness: `null`, `false`, `0`, `""` are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(value) => *value,
        Value::Number(number) => number.as_f64().map_or(true, |number| number != 0.0),
        Value::String(value) => !value.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Integral values greater than zero, including floats with no fractional part. Values
/// past the `u64` range are refused.
pub fn positive_integer(value: &Value) -> Option<u64> {
    if let Some(number) = value.as_u64() {
        return (number > 0).then_some(number);
    }

    value
        .as_f64()
        .filter(|number| number.fract() == 0.0 && *number > 0.0 && *number <= u64::MAX as f64)
        .map(|number| number as u64)
}

pub fn has_property<'a>(
    resource: &'a str,
    property: &'a str,
) -> impl Fn(&Data) -> Result<(), ValidationError> + Send + Sync + 'a {
    move |data| match data.get(property) {
        Some(value) if is_truthy(value) => Ok(()),
        _ => Err(rejection(
            "MISSING_PROPERTY",
            format!("{resource} must include a {property}"),
        )),
    }
}

pub fn string_property(data: &Data, resource: &str, property: &str) -> Result<String, Error> {
    match data.get(property) {
        Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
        Some(value) if is_truthy(value) => Err(rejection(
            "INVALID_PROPERTY",
            format!("{resource} {property} must be a string"),
        )
        .into()),
        _ => Err(rejection(
            "MISSING_PROPERTY",
            format!("{resource} must include a {property}"),
        )
        .into()),
    }
}

/// A body id, when truthy, must equal the id in the route.
pub fn id_matches_route(resource: &str, route_id: &str, data: &Data) -> Result<(), Error> {
    let body_id = match data.get("id") {
        Some(value) if is_truthy(value) => value,
        _ => return Ok(()),
    };

    if body_id.as_str() == Some(route_id) {
        return Ok(());
    }

    let body_id = body_id
        .as_str()
        .map(String::from)
        .unwrap_or_else(|| body_id.to_string());

    Err(Error::Conflict(format!(
        "{resource} id does not match route id. {resource}: {body_id}, Route: {route_id}"
    )))
}
