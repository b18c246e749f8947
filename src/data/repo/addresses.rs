use diesel::prelude::*;
use uuid::Uuid;

use crate::data::models::Address;

pub fn find_address(
    conn: &PgConnection,
    customer: Uuid,
    address: Uuid
) -> Result<Option<Address>, diesel::result::Error> {
    use crate::data::schema::addresses::dsl::*;

    addresses
        .filter(customer_id.eq(customer))
        .filter(address_id.eq(address))
        .first(conn)
        .optional()
}

/// Every address of the customer, most recently modified first.
pub fn get_addresses(
    conn: &PgConnection,
    customer: Uuid
) -> Result<Vec<Address>, diesel::result::Error> {
    use crate::data::schema::addresses::dsl::*;

    addresses
        .filter(customer_id.eq(customer))
        .order(last_modified_date.desc())
        .load(conn)
}

pub fn create_address(
    conn: &PgConnection,
    address: &Address
) -> Result<Address, diesel::result::Error> {
    use crate::data::schema::addresses::dsl::*;

    diesel::insert_into(addresses)
        .values(address)
        .get_result(conn)
}

/// Overwrites every column of the stored row. Fails with `NotFound` when
/// the row is gone.
pub fn replace_address(
    conn: &PgConnection,
    address: &Address
) -> Result<Address, diesel::result::Error> {
    use crate::data::schema::addresses::dsl::*;

    diesel::update(addresses.find(address.address_id))
        .set(address)
        .get_result(conn)
}
