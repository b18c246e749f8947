use actix_web::{HttpResponse, web};

use crate::data::repo::AddressStore;
use crate::notify::ChangeNotifier;
use crate::service::AddressResponse;

pub mod addresses;

pub const TOUCHPOINT_HEADER: &str = "APIM-TouchpointId";

impl From<AddressResponse> for HttpResponse {
    fn from(response: AddressResponse) -> Self {
        match response {
            AddressResponse::Ok(address) => HttpResponse::Ok().json(address),
            AddressResponse::Listed(addresses) => HttpResponse::Ok().json(addresses),
            AddressResponse::Created(address) => HttpResponse::Created().json(address),
            AddressResponse::NoContent(_) => HttpResponse::NoContent().finish(),
            AddressResponse::BadRequest(reason) => HttpResponse::BadRequest().body(reason),
            AddressResponse::UnprocessableEntity(errors) => {
                HttpResponse::UnprocessableEntity().json(errors)
            },
            AddressResponse::InternalError => HttpResponse::InternalServerError().finish(),
        }
    }
}

pub fn configure<S, N>(cfg: &mut web::ServiceConfig)
    where
        S: AddressStore + 'static,
        N: ChangeNotifier + 'static,
{
    cfg
        .service(
            web::resource("/customers/{customer_id}/addresses")
                .route(web::get().to(addresses::get_addresses::<S>))
                .route(web::post().to(addresses::post_address::<S, N>))
        )
        .service(
            web::resource("/customers/{customer_id}/addresses/{address_id}")
                .route(web::get().to(addresses::get_address::<S>))
                .route(web::patch().to(addresses::patch_address::<S, N>))
        );
}
