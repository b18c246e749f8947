use std::env;

use diesel::pg::PgConnection;
use diesel::r2d2::ConnectionManager;
use dotenv::dotenv;
use log::info;

pub type Pool = r2d2::Pool<ConnectionManager<PgConnection>>;

const DEFAULT_DB_POOL_SIZE: u32 = 15;

pub fn init_connection_pool() -> Pool {
    dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set");

    let pool_size = env::var("DATABASE_POOL_SIZE")
        .map(|size| size
            .parse::<u32>()
            .expect("DATABASE_POOL_SIZE must be an integer")
        )
        .unwrap_or(DEFAULT_DB_POOL_SIZE);

    info!("Creating database pool of size {}", pool_size);
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    r2d2::Pool::builder()
        .max_size(pool_size)
        .build(manager)
        .expect("Failed to create db pool")
}
