//! In-memory stand-ins for the store and the notifier.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::data::models::{Address, AddressPatch};
use crate::data::repo::{AddressStore, StoreError};
use crate::notify::{ChangeNotification, ChangeNotifier, NotifyError};

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Created(Uuid),
    Replaced(Uuid),
    Published(String),
}

/// Ordered record of the side effects seen by the fakes.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
    pub fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    customers: Arc<Mutex<HashSet<Uuid>>>,
    addresses: Arc<Mutex<HashMap<Uuid, Address>>>,
    fail_reads: bool,
    fail_writes: bool,
    pub events: EventLog,
}

impl MemoryStore {
    pub fn new(events: EventLog) -> Self {
        MemoryStore { events, ..MemoryStore::default() }
    }

    pub fn with_customer(self, customer_id: Uuid) -> Self {
        self.customers.lock().unwrap().insert(customer_id);
        self
    }

    pub fn with_address(self, address: Address) -> Self {
        self.addresses.lock().unwrap().insert(address.address_id, address);
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn stored(&self, address_id: Uuid) -> Option<Address> {
        self.addresses.lock().unwrap().get(&address_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.addresses.lock().unwrap().len()
    }

    fn check_reads(&self) -> Result<(), StoreError> {
        if self.fail_reads {
            let cause = "connection reset by peer".into();
            return Err(StoreError::Query(diesel::result::Error::QueryBuilderError(cause)));
        }
        Ok(())
    }
}

impl AddressStore for MemoryStore {
    fn customer_exists(&self, customer_id: Uuid) -> Result<bool, StoreError> {
        self.check_reads()?;
        Ok(self.customers.lock().unwrap().contains(&customer_id))
    }

    fn find_address(
        &self,
        customer_id: Uuid,
        address_id: Uuid
    ) -> Result<Option<Address>, StoreError> {
        self.check_reads()?;
        Ok(self
            .stored(address_id)
            .filter(|a| a.customer_id == customer_id))
    }

    fn list_addresses(&self, customer_id: Uuid) -> Result<Vec<Address>, StoreError> {
        self.check_reads()?;
        Ok(self.addresses
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.customer_id == customer_id)
            .cloned()
            .collect())
    }

    fn create_address(&self, address: &Address) -> Result<Address, StoreError> {
        if self.fail_writes {
            return Err(StoreError::Query(diesel::result::Error::RollbackTransaction));
        }
        self.addresses.lock().unwrap().insert(address.address_id, address.clone());
        self.events.push(Event::Created(address.address_id));
        Ok(address.clone())
    }

    fn replace_address(&self, address: &Address) -> Result<Address, StoreError> {
        if self.fail_writes {
            return Err(StoreError::Query(diesel::result::Error::RollbackTransaction));
        }
        let mut addresses = self.addresses.lock().unwrap();
        if !addresses.contains_key(&address.address_id) {
            return Err(StoreError::Query(diesel::result::Error::NotFound));
        }
        addresses.insert(address.address_id, address.clone());
        self.events.push(Event::Replaced(address.address_id));
        Ok(address.clone())
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    fail: bool,
    pub events: EventLog,
}

impl RecordingNotifier {
    pub fn new(events: EventLog) -> Self {
        RecordingNotifier { fail: false, events }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl ChangeNotifier for RecordingNotifier {
    fn publish(&self, notification: &ChangeNotification) -> Result<(), NotifyError> {
        self.events.push(Event::Published(notification.url.clone()));
        if self.fail {
            let err = serde_json::from_str::<u8>("not a number").unwrap_err();
            return Err(NotifyError::Encoding(err));
        }
        Ok(())
    }
}

/// A complete, valid address owned by `customer_id`.
pub fn stored_address(customer_id: Uuid) -> Address {
    let request = AddressPatch {
        address1: Some("10 Station Road".to_string()),
        address2: Some("Coventry".to_string()),
        post_code: Some("CV1 1VC".to_string()),
        longitude: Some(-1.50812),
        latitude: Some(52.401),
        effective_from: Some(NaiveDate::from_ymd(2018, 6, 19).and_hms(9, 1, 0)),
        ..AddressPatch::default()
    };
    let mut address = Address::create(customer_id, "0000000001", request, Utc::now().naive_utc());
    address.last_modified_date = Some(NaiveDate::from_ymd(2018, 6, 21).and_hms(13, 45, 0));
    address
}
