use std::env;
use std::time::Duration;

use chrono::NaiveDateTime;
use dotenv::dotenv;
use log::info;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::data::models::Address;

pub use self::error::NotifyError;

pub mod error;

const NOTIFICATION_TIMEOUT_SECS: u64 = 10;

/// Message sent to downstream systems whenever an address is written.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeNotification {
    pub title: String,
    pub customer_guid: Uuid,
    pub last_modified_date: Option<NaiveDateTime>,
    #[serde(rename = "URL")]
    pub url: String,
    pub is_new_customer: bool,
    pub touchpoint_id: Option<String>,
}

impl ChangeNotification {
    /// Notification for a freshly created address. `request_url` is the
    /// collection url the address was posted to.
    pub fn created(address: &Address, customer_id: Uuid, request_url: &str) -> Self {
        ChangeNotification {
            title: format!("New Address record {}", address.address_id),
            customer_guid: customer_id,
            last_modified_date: address.last_modified_date,
            url: format!("{}/{}", request_url.trim_end_matches('/'), address.address_id),
            is_new_customer: false,
            touchpoint_id: address.last_modified_touchpoint_id.clone(),
        }
    }

    pub fn updated(address: &Address, customer_id: Uuid, request_url: &str) -> Self {
        ChangeNotification {
            title: format!("Updated Address record {}", address.address_id),
            customer_guid: customer_id,
            last_modified_date: address.last_modified_date,
            url: request_url.to_owned(),
            is_new_customer: false,
            touchpoint_id: address.last_modified_touchpoint_id.clone(),
        }
    }
}

pub trait ChangeNotifier: Send + Sync {
    fn publish(&self, notification: &ChangeNotification) -> Result<(), NotifyError>;
}

/// Posts notifications as JSON to a webhook. Without an endpoint the
/// notification is only logged.
#[derive(Clone, Debug)]
pub struct HttpNotifier {
    endpoint: Option<String>,
}

impl HttpNotifier {
    pub fn new(endpoint: Option<String>) -> Self {
        HttpNotifier { endpoint }
    }

    pub fn from_env() -> Self {
        dotenv().ok();

        let endpoint = env::var("NOTIFICATION_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        match &endpoint {
            Some(url) => info!("Publishing address changes to {}", url),
            None => info!("NOTIFICATION_URL not set, address changes will only be logged"),
        }
        HttpNotifier::new(endpoint)
    }
}

impl ChangeNotifier for HttpNotifier {
    fn publish(&self, notification: &ChangeNotification) -> Result<(), NotifyError> {
        let endpoint = match &self.endpoint {
            Some(endpoint) => endpoint,
            None => {
                info!("{} ({})", notification.title, notification.url);
                return Ok(());
            },
        };

        let body = serde_json::to_vec(notification)?;
        reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(NOTIFICATION_TIMEOUT_SECS))
            .build()?
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?
            .error_for_status()?;

        info!("Published '{}' to {}", notification.title, endpoint);
        Ok(())
    }
}
