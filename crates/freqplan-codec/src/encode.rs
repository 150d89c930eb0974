//! # Encode — Model to Document
//!
//! Builds the canonical document for a [`FrequencyPlan`]. Key order is
//! fixed: `band`, `lbt`, `radios`, `channels`. Within a radio `frequency`
//! precedes `tx`. Within a channel `frequency` precedes `data-rate`.
//!
//! Unset optional substructures are omitted entirely, never emitted as null
//! or as an empty mapping. The band is written as-is. Encode does not
//! consult the registry, so hand-built plans always encode.

use serde_yaml::{Mapping, Value};

use crate::error::{CodecError, CodecResult};
use crate::keys;
use crate::plan::{Channel, FrequencyPlan, Lbt, Radio};

/// Encode a plan into a YAML value tree.
pub fn encode(plan: &FrequencyPlan) -> Value {
    let mut root = Mapping::new();
    root.insert(keys::BAND.into(), plan.band_id.as_str().into());
    if let Some(lbt) = &plan.lbt {
        root.insert(keys::LBT.into(), encode_lbt(lbt));
    }
    root.insert(
        keys::RADIOS.into(),
        Value::Sequence(plan.radios.iter().map(encode_radio).collect()),
    );
    root.insert(
        keys::CHANNELS.into(),
        Value::Sequence(plan.channels.iter().map(encode_channel).collect()),
    );

    tracing::debug!(
        band = %plan.band_id,
        channels = plan.channels.len(),
        radios = plan.radios.len(),
        lbt = plan.lbt.is_some(),
        "encoded frequency plan"
    );

    Value::Mapping(root)
}

/// Encode a plan and render it as YAML text.
pub fn encode_to_string(plan: &FrequencyPlan) -> CodecResult<String> {
    serde_yaml::to_string(&encode(plan)).map_err(CodecError::Yaml)
}

fn encode_lbt(lbt: &Lbt) -> Value {
    let mut map = Mapping::new();
    map.insert(keys::RSSI_TARGET.into(), lbt.rssi_target.into());
    map.insert(keys::SCAN_TIME.into(), lbt.scan_time.into());
    Value::Mapping(map)
}

fn encode_radio(radio: &Radio) -> Value {
    let mut map = Mapping::new();
    map.insert(keys::FREQUENCY.into(), radio.frequency.into());
    if let Some(tx) = &radio.tx_config {
        let mut tx_map = Mapping::new();
        tx_map.insert(keys::MIN_FREQUENCY.into(), tx.min_frequency.into());
        tx_map.insert(keys::MAX_FREQUENCY.into(), tx.max_frequency.into());
        map.insert(keys::TX.into(), Value::Mapping(tx_map));
    }
    Value::Mapping(map)
}

fn encode_channel(channel: &Channel) -> Value {
    let mut map = Mapping::new();
    map.insert(keys::FREQUENCY.into(), channel.frequency.into());
    if let Some(data_rate) = &channel.data_rate {
        let mut dr_map = Mapping::new();
        dr_map.insert(keys::INDEX.into(), data_rate.index.into());
        map.insert(keys::DATA_RATE.into(), Value::Mapping(dr_map));
    }
    Value::Mapping(map)
}
