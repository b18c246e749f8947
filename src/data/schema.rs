table! {
    addresses (address_id) {
        address_id -> Uuid,
        customer_id -> Uuid,
        address1 -> Nullable<Varchar>,
        address2 -> Nullable<Varchar>,
        address3 -> Nullable<Varchar>,
        address4 -> Nullable<Varchar>,
        address5 -> Nullable<Varchar>,
        post_code -> Nullable<Varchar>,
        alternative_post_code -> Nullable<Varchar>,
        longitude -> Nullable<Float8>,
        latitude -> Nullable<Float8>,
        effective_from -> Nullable<Timestamp>,
        effective_to -> Nullable<Timestamp>,
        last_modified_date -> Nullable<Timestamp>,
        last_modified_touchpoint_id -> Nullable<Text>,
        subcontractor_id -> Nullable<Text>,
    }
}

table! {
    customers (customer_id) {
        customer_id -> Uuid,
    }
}

allow_tables_to_appear_in_same_query!(
    addresses,
    customers,
);
