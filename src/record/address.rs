//! Postal address record.
//!
//! JSON shape (every key optional, unknown keys rejected):
//! {
//!   "city": "Springfield",
//!   "street": "742 Evergreen Terrace",
//!   "zip": "49007"
//! }
//!
//! `None` means the field is unset; `Some("")` is a set, empty value.

use crate::record::Field;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

const KEYS: &[&str] = &["city", "street", "zip"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AddressRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    street: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    zip: Option<String>,
}

impl AddressRecord {
    /// Empty record, all fields unset.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }

    pub fn set_city(&mut self, city: impl Into<Option<String>>) {
        self.city = city.into();
    }

    pub fn set_street(&mut self, street: impl Into<Option<String>>) {
        self.street = street.into();
    }

    pub fn set_zip(&mut self, zip: impl Into<Option<String>>) {
        self.zip = zip.into();
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.set_city(city.into());
        self
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.set_street(street.into());
        self
    }

    pub fn with_zip(mut self, zip: impl Into<String>) -> Self {
        self.set_zip(zip.into());
        self
    }

    /// Read a field through the key mapping table.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::City => self.city(),
            Field::Street => self.street(),
            Field::Zip => self.zip(),
        }
    }

    /// Replace a field through the key mapping table. `None` unsets it.
    pub fn set(&mut self, field: Field, value: impl Into<Option<String>>) {
        match field {
            Field::City => self.set_city(value),
            Field::Street => self.set_street(value),
            Field::Zip => self.set_zip(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_none())
    }
}

// Only a JSON object is accepted; the derived impl would also take a sequence
// and assign it by position.
impl<'de> Deserialize<'de> for AddressRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = AddressRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with optional string keys city, street, zip")
            }

            fn visit_map<A>(self, mut map: A) -> Result<AddressRecord, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut rec = AddressRecord::new();
                let mut seen: Vec<Field> = Vec::new();

                while let Some(key) = map.next_key::<String>()? {
                    let field: Field = key
                        .parse()
                        .map_err(|_| <A::Error as de::Error>::unknown_field(&key, KEYS))?;
                    if seen.contains(&field) {
                        return Err(de::Error::duplicate_field(field.key()));
                    }
                    seen.push(field);

                    // null reads as unset
                    let value: Option<String> = map.next_value()?;
                    rec.set(field, value);
                }

                Ok(rec)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
