#![deny(missing_docs)]

//! # freqplan-codec — Frequency Plan Codec
//!
//! Converts LoRaWAN frequency plan documents to and from a typed model.
//!
//! ```yaml
//! band: KR_920_923
//! lbt:
//!   rssi-target: -80
//!   scan-time: 128
//! radios:
//! - frequency: 922700000
//!   tx:
//!     min-frequency: 920900000
//!     max-frequency: 923300000
//! channels:
//! - frequency: 922100000
//!   data-rate:
//!     index: 5
//! ```
//!
//! ## Decode ([`decode()`])
//!
//! A strict tree walk over `serde_yaml::Value`. The band is validated
//! against a [`BandRegistry`](freqplan_band::BandRegistry) before anything
//! else is read. Unknown keys, wrong shapes and wrong scalar kinds abort
//! with a single [`CodecError`] naming the offending path.
//!
//! ## Encode ([`encode()`])
//!
//! Builds the canonical mapping with a fixed key order, emitting optional
//! substructures only when they are set.
//!
//! ## Serde
//!
//! [`FrequencyPlan`] implements `Serialize` and `Deserialize` through the
//! codec, so `serde_yaml::from_str::<FrequencyPlan>` validates the band too.
//!
//! ## Crate Policy
//!
//! - Depends only on `freqplan-band` internally.
//! - No I/O. Callers hand in text or a value tree and get one back.
//! - No `.unwrap()` outside tests.

pub mod decode;
pub mod encode;
pub mod error;
pub mod keys;
pub mod plan;
mod yaml;

pub use decode::{decode, decode_str, decode_with_registry};
pub use encode::{encode, encode_to_string};
pub use error::{CodecError, CodecResult};
pub use plan::{Channel, ChannelDataRate, FrequencyPlan, Lbt, Radio, TxConfig};
