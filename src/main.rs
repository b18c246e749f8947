#[macro_use]
extern crate diesel;
#[macro_use]
extern crate diesel_migrations;
extern crate dotenv;

use std::env;
use std::io;

use actix_web::{App, HttpServer, web};
use actix_web::middleware::Logger;
use env_logger::Env;
use log::info;

use crate::api::configure;
use crate::data::repo::PgAddressStore;
use crate::db::init_connection_pool;
use crate::notify::HttpNotifier;

mod api;
mod data;
mod db;
mod notify;
mod service;
mod utils;
#[cfg(test)]
mod testing;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

embed_migrations!("./migrations");

#[actix_rt::main]
async fn main() -> io::Result<()> {
    env_logger::from_env(Env::default().default_filter_or("info")).init();

    let pool = init_connection_pool();
    let conn = pool.get().expect("Could not get a database connection");

    web::block(move || { embedded_migrations::run(&conn) })
        .await
        .expect("Error while running migrations");

    let store = PgAddressStore::new(pool);
    let notifier = HttpNotifier::from_env();

    let bind_address = env::var("BIND_ADDRESS")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
    info!("Listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .data(store.clone())
            .data(notifier.clone())
            .wrap(Logger::default())
            .configure(configure::<PgAddressStore, HttpNotifier>)
    })
    .bind(bind_address)?
    .run()
    .await
}
