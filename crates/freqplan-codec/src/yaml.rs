//! Text and serde entry points.
//!
//! `FrequencyPlan` implements `Serialize`/`Deserialize` by delegating to
//! [`encode()`] and [`decode()`], so the custom rules (band validation, strict
//! keys, omitted optionals) apply whenever a plan goes through serde, not
//! only through the free functions.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::Value;

use crate::decode::{decode, decode_str};
use crate::encode::{encode, encode_to_string};
use crate::error::CodecResult;
use crate::plan::FrequencyPlan;

impl FrequencyPlan {
    /// Parse and decode a YAML document.
    pub fn from_yaml_str(text: &str) -> CodecResult<Self> {
        decode_str(text)
    }

    /// Encode into canonical YAML text.
    pub fn to_yaml_string(&self) -> CodecResult<String> {
        encode_to_string(self)
    }
}

impl Serialize for FrequencyPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        encode(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FrequencyPlan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Value::deserialize(deserializer)?;
        value.apply_merge().map_err(D::Error::custom)?;
        decode(&value).map_err(D::Error::custom)
    }
}
