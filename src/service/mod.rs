use crate::data::models::Address;
use crate::data::validation::ValidationError;

pub mod addresses;

/// Outcome of an address operation, independent of the wire encoding.
#[derive(Debug, PartialEq)]
pub enum AddressResponse {
    Ok(Address),
    Listed(Vec<Address>),
    Created(Address),
    NoContent(String),
    BadRequest(String),
    UnprocessableEntity(Vec<ValidationError>),
    InternalError,
}

/// Request details the orchestrators need besides path and body.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    /// Identifier of the calling system, if it sent one.
    pub touchpoint_id: Option<String>,
    pub request_url: String,
}

impl RequestContext {
    pub fn touchpoint_id(&self) -> Option<&str> {
        self.touchpoint_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}
