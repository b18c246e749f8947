use chrono::Utc;
use log::{error, info, warn};
use uuid::Uuid;

use crate::data::models::{Address, AddressPatch};
use crate::data::patch::merge;
use crate::data::repo::{AddressStore, StoreError};
use crate::data::validation::validate;
use crate::notify::{ChangeNotification, ChangeNotifier};
use crate::service::{AddressResponse, RequestContext};

/// Unwraps `Ok`, or returns the `Err` response as the final outcome.
macro_rules! respond_on_err {
    ($expr:expr) => {
        match $expr {
            Ok(value) => value,
            Err(response) => return Ok(response),
        }
    };
}

fn parse_id(kind: &str, id: &str) -> Result<Uuid, AddressResponse> {
    Uuid::parse_str(id).map_err(|_| {
        info!("Malformed {} id: {}", kind, id);
        AddressResponse::BadRequest(format!("Invalid {} id: {}", kind, id))
    })
}

fn parse_body(body: &[u8]) -> Result<AddressPatch, AddressResponse> {
    serde_json::from_slice(body).map_err(|err| {
        info!("Unable to read address from request body: {}", err);
        AddressResponse::BadRequest(format!("Malformed request body: {}", err))
    })
}

fn customer_not_found(customer_id: Uuid) -> AddressResponse {
    info!("Unable to find a customer with Id of : {}", customer_id);
    AddressResponse::NoContent(format!("Unable to find a customer with Id of : {}", customer_id))
}

fn address_not_found(address_id: Uuid) -> AddressResponse {
    info!("Unable to find an address with Id of : {}", address_id);
    AddressResponse::NoContent(format!("Unable to find an address with Id of : {}", address_id))
}

fn publish<N: ChangeNotifier>(notifier: &N, notification: ChangeNotification) {
    if let Err(err) = notifier.publish(&notification) {
        error!("Error while publishing '{}': {}", notification.title, err);
    }
}

pub fn get_address<S: AddressStore>(
    store: &S,
    customer_id: &str,
    address_id: &str
) -> Result<AddressResponse, StoreError> {
    let customer_guid = respond_on_err!(parse_id("customer", customer_id));
    let address_guid = respond_on_err!(parse_id("address", address_id));

    if !store.customer_exists(customer_guid)? {
        return Ok(customer_not_found(customer_guid));
    }

    match store.find_address(customer_guid, address_guid)? {
        Some(address) => Ok(AddressResponse::Ok(address)),
        None => Ok(address_not_found(address_guid)),
    }
}

pub fn get_addresses<S: AddressStore>(
    store: &S,
    customer_id: &str
) -> Result<AddressResponse, StoreError> {
    let customer_guid = respond_on_err!(parse_id("customer", customer_id));

    if !store.customer_exists(customer_guid)? {
        return Ok(customer_not_found(customer_guid));
    }

    let addresses = store.list_addresses(customer_guid)?;
    if addresses.is_empty() {
        info!("Customer {} has no addresses", customer_guid);
        return Ok(AddressResponse::NoContent(
            format!("Unable to find addresses for customer with Id of : {}", customer_guid)
        ));
    }
    Ok(AddressResponse::Listed(addresses))
}

pub fn post_address<S: AddressStore, N: ChangeNotifier>(
    store: &S,
    notifier: &N,
    context: &RequestContext,
    customer_id: &str,
    body: &[u8]
) -> Result<AddressResponse, StoreError> {
    let touchpoint_id = match context.touchpoint_id() {
        Some(id) => id,
        None => {
            info!("Unable to locate touchpoint id in request header");
            return Ok(AddressResponse::BadRequest("Missing touchpoint id".to_string()));
        },
    };
    info!("Post address request by touchpoint {}", touchpoint_id);

    let customer_guid = respond_on_err!(parse_id("customer", customer_id));
    let mut request = respond_on_err!(parse_body(body));
    request.last_modified_touchpoint_id = Some(touchpoint_id.to_owned());

    let errors = validate(&request, true);
    if !errors.is_empty() {
        info!("Address for customer {} failed validation with {} error(s)", customer_guid, errors.len());
        return Ok(AddressResponse::UnprocessableEntity(errors));
    }

    if !store.customer_exists(customer_guid)? {
        return Ok(customer_not_found(customer_guid));
    }

    let address = Address::create(customer_guid, touchpoint_id, request, Utc::now().naive_utc());

    match store.create_address(&address) {
        Ok(created) => {
            info!("Created address {} for customer {}", created.address_id, customer_guid);
            publish(notifier, ChangeNotification::created(&created, customer_guid, &context.request_url));
            Ok(AddressResponse::Created(created))
        },
        Err(err) => {
            error!("Error while creating address for customer {}: {}", customer_guid, err);
            Ok(AddressResponse::BadRequest(
                format!("Unable to create address for customer with Id of : {}", customer_guid)
            ))
        },
    }
}

pub fn patch_address<S: AddressStore, N: ChangeNotifier>(
    store: &S,
    notifier: &N,
    context: &RequestContext,
    customer_id: &str,
    address_id: &str,
    body: &[u8]
) -> Result<AddressResponse, StoreError> {
    let customer_guid = respond_on_err!(parse_id("customer", customer_id));
    let address_guid = respond_on_err!(parse_id("address", address_id));
    let mut patch = respond_on_err!(parse_body(body));

    if let Some(touchpoint_id) = context.touchpoint_id() {
        patch.last_modified_touchpoint_id = Some(touchpoint_id.to_owned());
    }

    let errors = validate(&patch, false);
    if !errors.is_empty() {
        info!("Patch for address {} failed validation with {} error(s)", address_guid, errors.len());
        return Ok(AddressResponse::UnprocessableEntity(errors));
    }

    if !store.customer_exists(customer_guid)? {
        return Ok(customer_not_found(customer_guid));
    }

    let existing = match store.find_address(customer_guid, address_guid)? {
        Some(address) => address,
        None => return Ok(address_not_found(address_guid)),
    };

    let updated = merge(&existing, &patch);

    match store.replace_address(&updated) {
        Ok(replaced) => {
            info!("Updated address {} for customer {}", address_guid, customer_guid);
            publish(notifier, ChangeNotification::updated(&replaced, customer_guid, &context.request_url));
            Ok(AddressResponse::Ok(replaced))
        },
        Err(err) => {
            warn!("Error while updating address {}: {}", address_guid, err);
            Ok(AddressResponse::BadRequest(
                format!("Unable to update address with Id of : {}", address_guid)
            ))
        },
    }
}
