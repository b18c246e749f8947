use diesel::dsl::exists;
use diesel::prelude::*;
use uuid::Uuid;

pub fn customer_exists(
    conn: &PgConnection,
    customer: Uuid
) -> Result<bool, diesel::result::Error> {
    use crate::data::schema::customers::dsl::*;

    diesel::select(exists(customers.filter(customer_id.eq(customer))))
        .get_result(conn)
}
