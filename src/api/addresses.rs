use actix_web::{Error, HttpRequest, HttpResponse, web};
use actix_web::error::BlockingError;
use log::error;
use serde::Deserialize;

use crate::api::TOUCHPOINT_HEADER;
use crate::data::repo::{AddressStore, StoreError};
use crate::notify::ChangeNotifier;
use crate::service::{addresses, AddressResponse, RequestContext};

#[derive(Deserialize)]
pub struct CustomerPath {
    customer_id: String
}

#[derive(Deserialize)]
pub struct AddressPath {
    customer_id: String,
    address_id: String
}

fn request_context(req: &HttpRequest) -> RequestContext {
    let touchpoint_id = req
        .headers()
        .get(TOUCHPOINT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    let info = req.connection_info();
    let request_url = format!("{}://{}{}", info.scheme(), info.host(), req.path());

    RequestContext { touchpoint_id, request_url }
}

fn respond(result: Result<AddressResponse, BlockingError<StoreError>>) -> HttpResponse {
    match result {
        Ok(response) => response.into(),
        Err(err) => {
            error!("Error while accessing addresses: {}", err);
            AddressResponse::InternalError.into()
        },
    }
}

pub async fn get_address<S: AddressStore + 'static>(
    path: web::Path<AddressPath>,
    store: web::Data<S>
) -> Result<HttpResponse, Error> {
    let path = path.into_inner();
    let result = web::block(move || {
        addresses::get_address(store.get_ref(), &path.customer_id, &path.address_id)
    })
        .await;

    Ok(respond(result))
}

pub async fn get_addresses<S: AddressStore + 'static>(
    path: web::Path<CustomerPath>,
    store: web::Data<S>
) -> Result<HttpResponse, Error> {
    let path = path.into_inner();
    let result = web::block(move || {
        addresses::get_addresses(store.get_ref(), &path.customer_id)
    })
        .await;

    Ok(respond(result))
}

pub async fn post_address<S: AddressStore + 'static, N: ChangeNotifier + 'static>(
    req: HttpRequest,
    path: web::Path<CustomerPath>,
    body: web::Bytes,
    store: web::Data<S>,
    notifier: web::Data<N>
) -> Result<HttpResponse, Error> {
    let context = request_context(&req);
    let path = path.into_inner();
    let result = web::block(move || {
        addresses::post_address(
            store.get_ref(),
            notifier.get_ref(),
            &context,
            &path.customer_id,
            &body
        )
    })
        .await;

    Ok(respond(result))
}

pub async fn patch_address<S: AddressStore + 'static, N: ChangeNotifier + 'static>(
    req: HttpRequest,
    path: web::Path<AddressPath>,
    body: web::Bytes,
    store: web::Data<S>,
    notifier: web::Data<N>
) -> Result<HttpResponse, Error> {
    let context = request_context(&req);
    let path = path.into_inner();
    let result = web::block(move || {
        addresses::patch_address(
            store.get_ref(),
            notifier.get_ref(),
            &context,
            &path.customer_id,
            &path.address_id,
            &body
        )
    })
        .await;

    Ok(respond(result))
}
