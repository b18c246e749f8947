use std::borrow::Cow;
use std::fmt::Formatter;

use chrono::{NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::models::{Address, AddressPatch};
use crate::utils::ExistsExtension;

pub const ADDRESS_LINE_PATTERN: &str = r"^[A-Za-z0-9 ~!@&'()*+,\-./:;]{1,100}$";
pub const POSTCODE_PATTERN: &str = r"^(?:([Gg][Ii][Rr] 0[Aa]{2})|((([A-Za-z][0-9]{1,2})|(([A-Za-z][A-Ha-hJ-Yj-y][0-9]{1,2})|(([A-Za-z][0-9][A-Za-z])|([A-Za-z][A-Ha-hJ-Yj-y][0-9]?[A-Za-z]))))\s?[0-9][A-Za-z]{2}))$";
pub const LONGITUDE_PATTERN: &str = r"^(\+|-)?(?:180(?:(?:\.0{1,6})?)|(?:[0-9]|[1-9][0-9]|1[0-7][0-9])(?:(?:\.[0-9]{1,6})?))$";
pub const LATITUDE_PATTERN: &str = r"^(\+|-)?(?:90(?:(?:\.0{1,6})?)|(?:[0-9]|[1-8][0-9])(?:(?:\.[0-9]{1,6})?))$";

const ADDRESS_LINE_MAX_LENGTH: usize = 100;
const POSTCODE_MAX_LENGTH: usize = 10;

lazy_static! {
    static ref ADDRESS_LINE_REGEX: Regex =
        Regex::new(ADDRESS_LINE_PATTERN).expect("Could not create address line regex");
    static ref POSTCODE_REGEX: Regex =
        Regex::new(POSTCODE_PATTERN).expect("Could not create postcode regex");
    static ref LONGITUDE_REGEX: Regex =
        Regex::new(LONGITUDE_PATTERN).expect("Could not create longitude regex");
    static ref LATITUDE_REGEX: Regex =
        Regex::new(LATITUDE_PATTERN).expect("Could not create latitude regex");
}

/// Fields subject to a format rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Field {
    Address1,
    Address2,
    Address3,
    Address4,
    Address5,
    PostCode,
    AlternativePostCode,
    Longitude,
    Latitude,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Address1 => "Address1",
            Field::Address2 => "Address2",
            Field::Address3 => "Address3",
            Field::Address4 => "Address4",
            Field::Address5 => "Address5",
            Field::PostCode => "PostCode",
            Field::AlternativePostCode => "AlternativePostCode",
            Field::Longitude => "Longitude",
            Field::Latitude => "Latitude",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Rule {
    AddressLine,
    PostCode,
    Longitude,
    Latitude,
}

impl Rule {
    fn regex(self) -> &'static Regex {
        match self {
            Rule::AddressLine => &ADDRESS_LINE_REGEX,
            Rule::PostCode => &POSTCODE_REGEX,
            Rule::Longitude => &LONGITUDE_REGEX,
            Rule::Latitude => &LATITUDE_REGEX,
        }
    }

    fn max_length(self) -> Option<usize> {
        match self {
            Rule::AddressLine => Some(ADDRESS_LINE_MAX_LENGTH),
            Rule::PostCode => Some(POSTCODE_MAX_LENGTH),
            Rule::Longitude | Rule::Latitude => None,
        }
    }

    fn format_message(self, field: Field) -> String {
        match self {
            Rule::AddressLine => format!("{} contains invalid characters", field.name()),
            Rule::PostCode => "Please enter a valid postcode".to_string(),
            Rule::Longitude => {
                "Longitude must be between -180 and 180 with at most 6 decimal places".to_string()
            },
            Rule::Latitude => {
                "Latitude must be between -90 and 90 with at most 6 decimal places".to_string()
            },
        }
    }

    /// Returns the failure message, if `value` breaks this rule.
    pub fn check(self, field: Field, value: &str) -> Option<String> {
        if let Some(max) = self.max_length() {
            if value.chars().count() > max {
                return Some(format!("{} must be no more than {} characters", field.name(), max));
            }
        }
        if !self.regex().is_match(value) {
            return Some(self.format_message(field));
        }
        None
    }
}

pub const FIELD_RULES: [(Field, Rule); 9] = [
    (Field::Address1, Rule::AddressLine),
    (Field::Address2, Rule::AddressLine),
    (Field::Address3, Rule::AddressLine),
    (Field::Address4, Rule::AddressLine),
    (Field::Address5, Rule::AddressLine),
    (Field::PostCode, Rule::PostCode),
    (Field::AlternativePostCode, Rule::PostCode),
    (Field::Longitude, Rule::Longitude),
    (Field::Latitude, Rule::Latitude),
];

const REQUIRED_ON_CREATE: [Field; 2] = [Field::Address1, Field::PostCode];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: String) -> Self {
        ValidationError { field: field.to_owned(), message }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Read access to the fields the validator inspects.
pub trait Validatable {
    /// Text rendering of `field`, `None` when it is not set.
    fn value(&self, field: Field) -> Option<Cow<'_, str>>;

    fn last_modified_date(&self) -> Option<NaiveDateTime>;
}

macro_rules! impl_validatable {
    ($resource:ty) => {
        impl Validatable for $resource {
            fn value(&self, field: Field) -> Option<Cow<'_, str>> {
                match field {
                    Field::Address1 => self.address1.as_deref().map(Cow::Borrowed),
                    Field::Address2 => self.address2.as_deref().map(Cow::Borrowed),
                    Field::Address3 => self.address3.as_deref().map(Cow::Borrowed),
                    Field::Address4 => self.address4.as_deref().map(Cow::Borrowed),
                    Field::Address5 => self.address5.as_deref().map(Cow::Borrowed),
                    Field::PostCode => self.post_code.as_deref().map(Cow::Borrowed),
                    Field::AlternativePostCode => {
                        self.alternative_post_code.as_deref().map(Cow::Borrowed)
                    },
                    Field::Longitude => self.longitude.map(|v| Cow::Owned(v.to_string())),
                    Field::Latitude => self.latitude.map(|v| Cow::Owned(v.to_string())),
                }
            }

            fn last_modified_date(&self) -> Option<NaiveDateTime> {
                self.last_modified_date
            }
        }
    };
}

impl_validatable!(Address);
impl_validatable!(AddressPatch);

/// Checks `resource` against the field rules. `is_create` additionally
/// requires `Address1` and `PostCode` to be present and not blank.
///
/// An empty result is the only success signal.
pub fn validate<R: Validatable>(resource: &R, is_create: bool) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if is_create {
        for field in REQUIRED_ON_CREATE.iter() {
            let present = resource
                .value(*field)
                .exists(|v| !v.trim().is_empty());
            if !present {
                errors.push(ValidationError::new(
                    field.name(),
                    format!("{} is required", field.name())
                ));
            }
        }
    }

    for (field, rule) in FIELD_RULES.iter() {
        if let Some(value) = resource.value(*field) {
            if let Some(message) = rule.check(*field, &value) {
                errors.push(ValidationError::new(field.name(), message));
            }
        }
    }

    if let Some(date) = resource.last_modified_date() {
        if date > Utc::now().naive_utc() {
            errors.push(ValidationError::new(
                "LastModifiedDate",
                "Last Modified Date must be less than the current date/time".to_string()
            ));
        }
    }

    errors
}
