use chrono::Utc;
use log::warn;

use crate::data::models::{Address, AddressPatch};

macro_rules! apply_fields {
    ($target:ident, $patch:ident, [$($field:ident),* $(,)?]) => {
        $(
            if let Some(value) = &$patch.$field {
                $target.$field = Some(value.clone());
            }
        )*
    };
}

/// Returns a copy of `existing` with every field carried by `patch`
/// overwritten.
///
/// `last_modified_date` is always stamped with the current time, even when
/// the patch changes nothing else. A `last_modified_date` carried by the
/// patch is ignored.
pub fn merge(existing: &Address, patch: &AddressPatch) -> Address {
    let mut address = existing.clone();

    apply_fields!(address, patch, [
        address1,
        address2,
        address3,
        address4,
        address5,
        post_code,
        alternative_post_code,
        longitude,
        latitude,
        effective_from,
        effective_to,
        last_modified_touchpoint_id,
        subcontractor_id,
    ]);

    address.last_modified_date = Some(Utc::now().naive_utc());
    address
}

/// Merges `patch` onto an address stored as a JSON document.
///
/// Entry point for callers that hold the stored address as raw JSON rather
/// than a decoded `Address`; the orchestrators use [`merge`] directly.
///
/// Returns `None` when the document is empty or not a valid address, or
/// when there is no patch.
pub fn merge_document(existing: &str, patch: Option<&AddressPatch>) -> Option<Address> {
    let patch = patch?;
    if existing.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<Address>(existing) {
        Ok(address) => Some(merge(&address, patch)),
        Err(err) => {
            warn!("Could not read stored address document: {}", err);
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use uuid::Uuid;

    use super::*;

    fn existing() -> Address {
        Address {
            address_id: Uuid::new_v4(),
            customer_id: Uuid::new_v4(),
            address1: Some("1 Old Street".to_string()),
            address2: Some("Old Town".to_string()),
            address3: Some("Old County".to_string()),
            address4: None,
            address5: Some("England".to_string()),
            post_code: Some("B33 8TH".to_string()),
            alternative_post_code: None,
            longitude: Some(-1.9),
            latitude: Some(52.48),
            effective_from: Some(NaiveDate::from_ymd(2018, 6, 19).and_hms(9, 1, 0)),
            effective_to: None,
            last_modified_date: Some(NaiveDate::from_ymd(2018, 6, 21).and_hms(13, 45, 0)),
            last_modified_touchpoint_id: Some("0000000001".to_string()),
            subcontractor_id: None,
        }
    }

    fn far_future() -> NaiveDateTime {
        NaiveDate::from_ymd(9999, 12, 31).and_hms(23, 59, 59)
    }

    /// Patches a single field and checks nothing else moved, apart from
    /// the modification date.
    macro_rules! merge_field_test {
        ($name:ident, $field:ident, $value:expr) => {
            #[test]
            fn $name() {
                let existing = existing();
                let patch = AddressPatch { $field: Some($value), ..AddressPatch::default() };

                let merged = merge(&existing, &patch);

                assert_eq!(merged.$field, patch.$field);
                let mut expected = existing.clone();
                expected.$field = patch.$field.clone();
                expected.last_modified_date = merged.last_modified_date;
                assert_eq!(merged, expected);
            }
        };
    }

    merge_field_test!(test_merge_address1, address1, "Address 1".to_string());
    merge_field_test!(test_merge_address2, address2, "Address 2".to_string());
    merge_field_test!(test_merge_address3, address3, "Address 3".to_string());
    merge_field_test!(test_merge_address4, address4, "Address 4".to_string());
    merge_field_test!(test_merge_address5, address5, "Address 5".to_string());
    merge_field_test!(test_merge_post_code, post_code, "CV1 1VC".to_string());
    merge_field_test!(test_merge_alternative_post_code, alternative_post_code, "CV1 1VC".to_string());
    merge_field_test!(test_merge_longitude, longitude, 64.7511);
    merge_field_test!(test_merge_latitude, latitude, 47.3494);
    merge_field_test!(test_merge_effective_from, effective_from, far_future());
    merge_field_test!(test_merge_effective_to, effective_to, far_future());
    merge_field_test!(test_merge_last_modified_touchpoint_id, last_modified_touchpoint_id, "0000000111".to_string());
    merge_field_test!(test_merge_subcontractor_id, subcontractor_id, "0000000111".to_string());

    #[test]
    fn test_merge_empty_patch_only_refreshes_modified_date() {
        let existing = existing();
        let before = Utc::now().naive_utc();

        let merged = merge(&existing, &AddressPatch::default());

        assert!(merged.last_modified_date.unwrap() >= before);
        let mut expected = existing.clone();
        expected.last_modified_date = merged.last_modified_date;
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_ignores_patched_modified_date() {
        let before = Utc::now().naive_utc();
        let patch = AddressPatch { last_modified_date: Some(far_future()), ..AddressPatch::default() };

        let merged = merge(&existing(), &patch);

        let stamped = merged.last_modified_date.unwrap();
        assert!(stamped >= before);
        assert!(stamped <= Utc::now().naive_utc());
    }

    #[test]
    fn test_merge_keeps_identifiers() {
        let existing = existing();
        let patch = AddressPatch { address1: Some("New".to_string()), ..AddressPatch::default() };

        let merged = merge(&existing, &patch);

        assert_eq!(merged.address_id, existing.address_id);
        assert_eq!(merged.customer_id, existing.customer_id);
    }

    #[test]
    fn test_merge_document_empty_existing_returns_none() {
        let patch = AddressPatch::default();
        assert_eq!(merge_document("", Some(&patch)), None);
    }

    #[test]
    fn test_merge_document_without_patch_returns_none() {
        let json = serde_json::to_string(&existing()).unwrap();
        assert_eq!(merge_document(&json, None), None);
    }

    #[test]
    fn test_merge_document_invalid_json_returns_none() {
        let patch = AddressPatch::default();
        assert_eq!(merge_document("{\"Address1\": 12", Some(&patch)), None);
    }

    #[test]
    fn test_merge_document_applies_patch() {
        let existing = existing();
        let json = serde_json::to_string(&existing).unwrap();
        let patch = AddressPatch { post_code: Some("CV1 1VC".to_string()), ..AddressPatch::default() };

        let merged = merge_document(&json, Some(&patch)).unwrap();

        assert_eq!(merged.post_code.as_deref(), Some("CV1 1VC"));
        assert_eq!(merged.address1, existing.address1);
        assert_eq!(merged.address_id, existing.address_id);
    }
}
