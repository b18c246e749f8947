use uuid::Uuid;

use crate::data::models::Address;
use crate::db::Pool;

pub use self::error::StoreError;

pub mod addresses;
pub mod customers;
pub mod error;

/// Everything the address service needs from the backing store.
pub trait AddressStore: Send + Sync {
    fn customer_exists(&self, customer_id: Uuid) -> Result<bool, StoreError>;

    /// Looks up an address, scoped to its owning customer.
    fn find_address(
        &self,
        customer_id: Uuid,
        address_id: Uuid
    ) -> Result<Option<Address>, StoreError>;

    fn list_addresses(&self, customer_id: Uuid) -> Result<Vec<Address>, StoreError>;

    fn create_address(&self, address: &Address) -> Result<Address, StoreError>;

    fn replace_address(&self, address: &Address) -> Result<Address, StoreError>;
}

/// [`AddressStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgAddressStore {
    pool: Pool,
}

impl PgAddressStore {
    pub fn new(pool: Pool) -> Self {
        PgAddressStore { pool }
    }
}

impl AddressStore for PgAddressStore {
    fn customer_exists(&self, customer_id: Uuid) -> Result<bool, StoreError> {
        let conn = self.pool.get()?;
        Ok(customers::customer_exists(&conn, customer_id)?)
    }

    fn find_address(
        &self,
        customer_id: Uuid,
        address_id: Uuid
    ) -> Result<Option<Address>, StoreError> {
        let conn = self.pool.get()?;
        Ok(addresses::find_address(&conn, customer_id, address_id)?)
    }

    fn list_addresses(&self, customer_id: Uuid) -> Result<Vec<Address>, StoreError> {
        let conn = self.pool.get()?;
        Ok(addresses::get_addresses(&conn, customer_id)?)
    }

    fn create_address(&self, address: &Address) -> Result<Address, StoreError> {
        let conn = self.pool.get()?;
        Ok(addresses::create_address(&conn, address)?)
    }

    fn replace_address(&self, address: &Address) -> Result<Address, StoreError> {
        let conn = self.pool.get()?;
        Ok(addresses::replace_address(&conn, address)?)
    }
}
