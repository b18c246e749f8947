use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::schema::addresses;

/// A customer's postal address as persisted in the `addresses` table.
#[derive(Queryable, Insertable, Identifiable, AsChangeset)]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[table_name = "addresses"]
#[primary_key(address_id)]
#[changeset_options(treat_none_as_null = "true")]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub address_id: Uuid,
    pub customer_id: Uuid,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub address4: Option<String>,
    pub address5: Option<String>,
    pub post_code: Option<String>,
    pub alternative_post_code: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub effective_from: Option<NaiveDateTime>,
    pub effective_to: Option<NaiveDateTime>,
    pub last_modified_date: Option<NaiveDateTime>,
    pub last_modified_touchpoint_id: Option<String>,
    pub subcontractor_id: Option<String>,
}

/// Partial update of an [`Address`]. A `None` field is left untouched.
///
/// Also used as the body of a create request, where the identifiers and
/// audit fields are filled in by the service.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AddressPatch {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub address3: Option<String>,
    pub address4: Option<String>,
    pub address5: Option<String>,
    pub post_code: Option<String>,
    pub alternative_post_code: Option<String>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub effective_from: Option<NaiveDateTime>,
    pub effective_to: Option<NaiveDateTime>,
    pub last_modified_date: Option<NaiveDateTime>,
    pub last_modified_touchpoint_id: Option<String>,
    pub subcontractor_id: Option<String>,
}

impl Address {
    /// Builds a brand new address for `customer_id` out of a request body.
    pub fn create(
        customer_id: Uuid,
        touchpoint_id: &str,
        request: AddressPatch,
        now: NaiveDateTime
    ) -> Address {
        Address {
            address_id: Uuid::new_v4(),
            customer_id,
            address1: request.address1,
            address2: request.address2,
            address3: request.address3,
            address4: request.address4,
            address5: request.address5,
            post_code: request.post_code,
            alternative_post_code: request.alternative_post_code,
            longitude: request.longitude,
            latitude: request.latitude,
            effective_from: request.effective_from,
            effective_to: request.effective_to,
            last_modified_date: Some(now),
            last_modified_touchpoint_id: Some(touchpoint_id.to_owned()),
            subcontractor_id: request.subcontractor_id,
        }
    }
}
