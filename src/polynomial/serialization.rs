// src/polynomial/serialization.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

/// Serialized as the highest-first coefficient array.
impl<T: Coefficient + Serialize> Serialize for Polynomial<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.coefficients().serialize(serializer)
    }
}

/// Deserialized through the normalizing constructor.
impl<'de, T: Coefficient + Deserialize<'de>> Deserialize<'de> for Polynomial<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Polynomial::new)
    }
}

impl<T: Coefficient + Serialize + DeserializeOwned> Polynomial<T> {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
