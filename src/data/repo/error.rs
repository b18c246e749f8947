use std::fmt::Formatter;

#[derive(Debug)]
pub enum StoreError {
    Pool(r2d2::Error),
    Query(diesel::result::Error),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let msg = match self {
            StoreError::Pool(inner) => {
                format!("Could not get a database connection: {}", inner)
            },
            StoreError::Query(inner) => {
                format!("Query failed: {}", inner)
            },
        };
        write!(f, "Store error: {}", msg)
    }
}

impl std::error::Error for StoreError {}

impl From<r2d2::Error> for StoreError {
    fn from(error: r2d2::Error) -> Self {
        StoreError::Pool(error)
    }
}

impl From<diesel::result::Error> for StoreError {
    fn from(error: diesel::result::Error) -> Self {
        StoreError::Query(error)
    }
}
