//! # Decode — Document to Model
//!
//! Walks a `serde_yaml::Value` tree and builds a [`FrequencyPlan`].
//!
//! ## Rules
//!
//! - The root must be a mapping. Its `band` is checked against the
//!   registry before anything else is read, so an unregistered band fails
//!   fast regardless of the rest of the document.
//! - Every mapping is strict. A key that does not belong at its level
//!   (`tx` next to `radios`, `min-frequency` directly under a radio) is a
//!   structural error, not something to skip.
//! - `channels` and `radios` may be absent (empty list). `lbt`, `data-rate`
//!   and `tx` may be absent (`None`). Null counts as absent.
//! - Integers must be YAML integers within the field's range. Quoted
//!   numbers and floats are type mismatches.
//! - YAML merge keys (`<<: *anchor`) are expanded by [`decode_str`] before
//!   the walk. A value tree handed to [`decode`] must already be merged.
//!
//! The first fault aborts the decode.

use freqplan_band::{BandRegistry, StaticBandRegistry};
use serde_yaml::{Mapping, Value};

use crate::error::{CodecError, CodecResult};
use crate::keys;
use crate::plan::{Channel, ChannelDataRate, FrequencyPlan, Lbt, Radio, TxConfig};

const ROOT_PATH: &str = "$";

/// Decode a plan, validating its band against the static registry.
pub fn decode(value: &Value) -> CodecResult<FrequencyPlan> {
    decode_with_registry(value, &StaticBandRegistry)
}

/// Parse YAML text, expand merge keys and decode it.
pub fn decode_str(text: &str) -> CodecResult<FrequencyPlan> {
    let mut value: Value = serde_yaml::from_str(text).map_err(CodecError::Syntax)?;
    value.apply_merge().map_err(CodecError::Syntax)?;
    decode(&value)
}

/// Decode a plan, validating its band against `registry`.
pub fn decode_with_registry<R>(value: &Value, registry: &R) -> CodecResult<FrequencyPlan>
where
    R: BandRegistry + ?Sized,
{
    let root = Node::mapping(value, ROOT_PATH.to_string())?;

    let band_id = root.required_string(keys::BAND)?;
    if !registry.is_registered(&band_id) {
        tracing::debug!(band = %band_id, "rejected frequency plan with unregistered band");
        return Err(CodecError::UnknownBand { band: band_id });
    }
    root.expect_keys(keys::ROOT_KEYS)?;

    let channels = root
        .sequence(keys::CHANNELS)?
        .into_iter()
        .map(|(item, path)| decode_channel(item, path))
        .collect::<CodecResult<Vec<_>>>()?;

    let radios = root
        .sequence(keys::RADIOS)?
        .into_iter()
        .map(|(item, path)| decode_radio(item, path))
        .collect::<CodecResult<Vec<_>>>()?;

    let lbt = root
        .optional_child(keys::LBT, keys::LBT_KEYS)?
        .map(|node| decode_lbt(&node))
        .transpose()?;

    tracing::debug!(
        band = %band_id,
        channels = channels.len(),
        radios = radios.len(),
        lbt = lbt.is_some(),
        "decoded frequency plan"
    );

    Ok(FrequencyPlan {
        band_id,
        lbt,
        channels,
        radios,
    })
}

fn decode_channel(value: &Value, path: String) -> CodecResult<Channel> {
    let node = Node::mapping(value, path)?;
    node.expect_keys(keys::CHANNEL_KEYS)?;

    let frequency = node.required_u64(keys::FREQUENCY)?;
    let data_rate = match node.optional_child(keys::DATA_RATE, keys::DATA_RATE_KEYS)? {
        Some(dr) => Some(ChannelDataRate {
            index: dr.required_u32(keys::INDEX)?,
        }),
        None => None,
    };

    Ok(Channel {
        frequency,
        data_rate,
    })
}

fn decode_radio(value: &Value, path: String) -> CodecResult<Radio> {
    let node = Node::mapping(value, path)?;
    node.expect_keys(keys::RADIO_KEYS)?;

    let frequency = node.required_u64(keys::FREQUENCY)?;
    let tx_config = match node.optional_child(keys::TX, keys::TX_KEYS)? {
        Some(tx) => Some(TxConfig {
            min_frequency: tx.required_u64(keys::MIN_FREQUENCY)?,
            max_frequency: tx.required_u64(keys::MAX_FREQUENCY)?,
        }),
        None => None,
    };

    Ok(Radio {
        frequency,
        tx_config,
    })
}

fn decode_lbt(node: &Node<'_>) -> CodecResult<Lbt> {
    Ok(Lbt {
        rssi_target: node.required_i32(keys::RSSI_TARGET)?,
        scan_time: node.required_u32(keys::SCAN_TIME)?,
    })
}

// ---------------------------------------------------------------------------
// Tree walking
// ---------------------------------------------------------------------------

/// A mapping in the document together with its path.
struct Node<'a> {
    map: &'a Mapping,
    path: String,
}

impl<'a> Node<'a> {
    fn mapping(value: &'a Value, path: String) -> CodecResult<Self> {
        match untag(value) {
            Value::Mapping(map) => Ok(Self { map, path }),
            other => Err(CodecError::Structural {
                detail: format!("expected a mapping, found {}", kind(other)),
                path,
            }),
        }
    }

    /// Reject any key not in `allowed`.
    fn expect_keys(&self, allowed: &[&str]) -> CodecResult<()> {
        for key in self.map.keys() {
            match untag(key) {
                Value::String(s) if allowed.contains(&s.as_str()) => {}
                Value::String(s) => {
                    return Err(CodecError::Structural {
                        path: self.path.clone(),
                        detail: format!("unexpected key {s:?}"),
                    })
                }
                other => {
                    return Err(CodecError::Structural {
                        path: self.path.clone(),
                        detail: format!("mapping key must be a string, found {}", kind(other)),
                    })
                }
            }
        }
        Ok(())
    }

    fn child_path(&self, key: &str) -> String {
        if self.path == ROOT_PATH {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    /// The value at `key`, with null treated as absent.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).map(untag).filter(|v| !v.is_null())
    }

    fn required(&self, key: &str) -> CodecResult<(&'a Value, String)> {
        let path = self.child_path(key);
        match self.get(key) {
            Some(value) => Ok((value, path)),
            None => Err(CodecError::MissingField { path }),
        }
    }

    fn required_string(&self, key: &str) -> CodecResult<String> {
        match self.required(key)? {
            (Value::String(s), _) => Ok(s.clone()),
            (other, path) => Err(type_mismatch(path, "string", other)),
        }
    }

    fn required_u64(&self, key: &str) -> CodecResult<u64> {
        let (value, path) = self.required(key)?;
        value
            .as_u64()
            .ok_or_else(|| type_mismatch(path, "unsigned integer", value))
    }

    fn required_u32(&self, key: &str) -> CodecResult<u32> {
        let (value, path) = self.required(key)?;
        value
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| type_mismatch(path, "unsigned 32-bit integer", value))
    }

    fn required_i32(&self, key: &str) -> CodecResult<i32> {
        let (value, path) = self.required(key)?;
        value
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| type_mismatch(path, "signed 32-bit integer", value))
    }

    /// Elements of the sequence at `key` paired with their paths. Absent
    /// yields an empty list.
    fn sequence(&self, key: &str) -> CodecResult<Vec<(&'a Value, String)>> {
        let path = self.child_path(key);
        match self.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Sequence(items)) => Ok(items
                .iter()
                .enumerate()
                .map(|(i, item)| (item, format!("{path}[{i}]")))
                .collect()),
            Some(other) => Err(CodecError::Structural {
                detail: format!("expected a sequence, found {}", kind(other)),
                path,
            }),
        }
    }

    /// The strict sub-mapping at `key`, if present.
    fn optional_child(&self, key: &str, allowed: &[&str]) -> CodecResult<Option<Node<'a>>> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        let node = Node::mapping(value, self.child_path(key))?;
        node.expect_keys(allowed)?;
        Ok(Some(node))
    }
}

/// Strip YAML tags; the codec does not assign meaning to them.
fn untag(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untag(&tagged.value),
        other => other,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(n) if n.is_i64() && !n.is_u64() => "negative integer",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

fn type_mismatch(path: String, expected: &'static str, found: &Value) -> CodecError {
    let found = match found {
        Value::Number(n) => format!("{} {n}", kind(found)),
        Value::String(s) => format!("string {s:?}"),
        other => kind(other).to_string(),
    };
    CodecError::TypeMismatch {
        path,
        expected,
        found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Value {
        serde_yaml::from_str(text).unwrap()
    }

    #[test]
    fn minimal_plan() {
        let plan = decode(&parse("band: EU_863_870")).unwrap();
        assert_eq!(plan.band_id, "EU_863_870");
        assert!(plan.channels.is_empty());
        assert!(plan.radios.is_empty());
        assert!(plan.lbt.is_none());
    }

    #[test]
    fn root_must_be_mapping() {
        let err = decode(&parse("- frequency: 868100000")).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.path(), Some("$"));
    }

    #[test]
    fn band_missing() {
        let err = decode(&parse("channels: []")).unwrap_err();
        assert!(matches!(err, CodecError::MissingField { ref path } if path == "band"));
    }

    #[test]
    fn band_null_is_missing() {
        let err = decode(&parse("band: ~")).unwrap_err();
        assert!(matches!(err, CodecError::MissingField { .. }));
    }

    #[test]
    fn band_not_a_string() {
        let err = decode(&parse("band: 868")).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { expected: "string", .. }));
    }

    #[test]
    fn unknown_band_fails_before_shape_checks() {
        // The channel list is malformed, but the band is checked first.
        let err = decode(&parse("band: UNKNOWN_BAND\nchannels: 5")).unwrap_err();
        assert!(matches!(err, CodecError::UnknownBand { ref band } if band == "UNKNOWN_BAND"));
    }

    #[test]
    fn unknown_root_key() {
        let err = decode(&parse("band: EU_863_870\ndatarate-index: 7")).unwrap_err();
        assert!(err.is_structural());
        assert!(err.to_string().contains("datarate-index"));
    }

    #[test]
    fn non_string_key() {
        let err = decode(&parse("band: EU_863_870\n7: seven")).unwrap_err();
        assert!(err.is_structural());
    }

    #[test]
    fn channels_must_be_sequence() {
        let err = decode(&parse("band: EU_863_870\nchannels:\n  frequency: 1")).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.path(), Some("channels"));
    }

    #[test]
    fn channel_must_be_mapping() {
        let err = decode(&parse("band: EU_863_870\nchannels:\n- 868100000")).unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.path(), Some("channels[0]"));
    }

    #[test]
    fn channel_frequency_missing() {
        let err = decode(&parse(
            "band: EU_863_870\nchannels:\n- frequency: 868100000\n- data-rate:\n    index: 3",
        ))
        .unwrap_err();
        assert!(
            matches!(err, CodecError::MissingField { ref path } if path == "channels[1].frequency")
        );
    }

    #[test]
    fn channel_frequency_quoted() {
        let err =
            decode(&parse("band: EU_863_870\nchannels:\n- frequency: \"868100000\"")).unwrap_err();
        match err {
            CodecError::TypeMismatch { path, found, .. } => {
                assert_eq!(path, "channels[0].frequency");
                assert!(found.contains("string"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn channel_frequency_float() {
        let err = decode(&parse("band: EU_863_870\nchannels:\n- frequency: 868.1")).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { .. }));
    }

    #[test]
    fn channel_frequency_negative() {
        let err = decode(&parse("band: EU_863_870\nchannels:\n- frequency: -1")).unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { .. }));
    }

    #[test]
    fn data_rate_requires_index() {
        let err = decode(&parse(
            "band: EU_863_870\nchannels:\n- frequency: 868100000\n  data-rate: {}",
        ))
        .unwrap_err();
        assert!(
            matches!(err, CodecError::MissingField { ref path } if path == "channels[0].data-rate.index")
        );
    }

    #[test]
    fn data_rate_index_out_of_range() {
        let err = decode(&parse(
            "band: EU_863_870\nchannels:\n- frequency: 868100000\n  data-rate:\n    index: 4294967296",
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            CodecError::TypeMismatch {
                expected: "unsigned 32-bit integer",
                ..
            }
        ));
    }

    #[test]
    fn data_rate_scalar_is_structural() {
        let err = decode(&parse(
            "band: EU_863_870\nchannels:\n- frequency: 868100000\n  data-rate: 7",
        ))
        .unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.path(), Some("channels[0].data-rate"));
    }

    #[test]
    fn null_optionals_are_absent() {
        let plan = decode(&parse(
            "band: EU_863_870\nlbt: ~\nchannels:\n- frequency: 868100000\n  data-rate: ~\nradios:\n- frequency: 868500000\n  tx: ~",
        ))
        .unwrap();
        assert!(plan.lbt.is_none());
        assert!(plan.channels[0].data_rate.is_none());
        assert!(plan.radios[0].tx_config.is_none());
    }

    #[test]
    fn tx_requires_both_bounds() {
        let err = decode(&parse(
            "band: EU_863_870\nradios:\n- frequency: 867500000\n  tx:\n    min-frequency: 863000000",
        ))
        .unwrap_err();
        assert!(
            matches!(err, CodecError::MissingField { ref path } if path == "radios[0].tx.max-frequency")
        );
    }

    #[test]
    fn tx_bound_under_radio_is_structural() {
        let err = decode(&parse(
            "band: EU_863_870\nradios:\n- frequency: 867500000\n  min-frequency: 863000000",
        ))
        .unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.path(), Some("radios[0]"));
    }

    #[test]
    fn lbt_fields() {
        let plan = decode(&parse(
            "band: KR_920_923\nlbt:\n  rssi-target: -80\n  scan-time: 128",
        ))
        .unwrap();
        assert_eq!(
            plan.lbt,
            Some(Lbt {
                rssi_target: -80,
                scan_time: 128,
            })
        );
    }

    #[test]
    fn lbt_scan_time_negative() {
        let err = decode(&parse(
            "band: KR_920_923\nlbt:\n  rssi-target: -80\n  scan-time: -1",
        ))
        .unwrap_err();
        assert!(matches!(err, CodecError::TypeMismatch { ref path, .. } if path == "lbt.scan-time"));
    }

    #[test]
    fn lbt_unknown_key() {
        let err = decode(&parse(
            "band: KR_920_923\nlbt:\n  rssi-target: -80\n  scan-time: 128\n  rssi-offset: -4",
        ))
        .unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.path(), Some("lbt"));
    }

    #[test]
    fn tagged_values_are_untagged() {
        let plan = decode(&parse("band: !band EU_863_870")).unwrap();
        assert_eq!(plan.band_id, "EU_863_870");
    }

    #[test]
    fn custom_registry() {
        struct Nothing;
        impl BandRegistry for Nothing {
            fn is_registered(&self, _id: &str) -> bool {
                false
            }
        }
        let err = decode_with_registry(&parse("band: EU_863_870"), &Nothing).unwrap_err();
        assert!(matches!(err, CodecError::UnknownBand { .. }));
    }

    #[test]
    fn decode_str_reports_syntax() {
        let err = decode_str("band: EU_863_870\n- frequency: 1").unwrap_err();
        assert!(matches!(err, CodecError::Syntax(_)));
        assert!(err.is_structural());
    }

    #[test]
    fn decode_str_empty_document() {
        let err = decode_str("").unwrap_err();
        assert!(err.is_structural());
    }

    #[test]
    fn radio_frequency_missing() {
        let err = decode(&parse(
            "band: EU_863_870\nradios:\n- tx:\n    min-frequency: 863000000\n    max-frequency: 870000000",
        ))
        .unwrap_err();
        assert!(
            matches!(err, CodecError::MissingField { ref path } if path == "radios[0].frequency")
        );
    }

    #[test]
    fn tx_min_frequency_missing() {
        let err = decode(&parse(
            "band: EU_863_870\nradios:\n- frequency: 867500000\n  tx:\n    max-frequency: 870000000",
        ))
        .unwrap_err();
        assert!(
            matches!(err, CodecError::MissingField { ref path } if path == "radios[0].tx.min-frequency")
        );
    }

    #[test]
    fn lbt_rssi_target_missing() {
        let err = decode(&parse("band: KR_920_923\nlbt: {}")).unwrap_err();
        assert!(matches!(err, CodecError::MissingField { ref path } if path == "lbt.rssi-target"));
    }

    #[test]
    fn lbt_scan_time_missing() {
        let err = decode(&parse("band: KR_920_923\nlbt:\n  rssi-target: -80")).unwrap_err();
        assert!(matches!(err, CodecError::MissingField { ref path } if path == "lbt.scan-time"));
    }

    #[test]
    fn radios_must_be_sequence() {
        let err = decode(&parse("band: EU_863_870\nradios:\n  frequency: 867500000")).unwrap_err();
        assert!(matches!(err, CodecError::Structural { ref path, .. } if path == "radios"));
    }

    #[test]
    fn lbt_must_be_mapping() {
        let err = decode(&parse("band: KR_920_923\nlbt:\n- 1")).unwrap_err();
        assert!(matches!(err, CodecError::Structural { ref path, .. } if path == "lbt"));
    }

    #[test]
    fn decode_str_expands_merge_keys() {
        let plan = decode_str(
            "band: EU_863_870
radios:
- &tx_radio
  frequency: 867500000
  tx:
    min-frequency: 863000000
    max-frequency: 870000000
- <<: *tx_radio
  frequency: 868500000",
        )
        .unwrap();
        assert_eq!(plan.radios.len(), 2);
        assert_eq!(plan.radios[1].frequency, 868_500_000);
        assert_eq!(plan.radios[1].tx_config, plan.radios[0].tx_config);
    }

    #[test]
    fn unmerged_value_rejects_merge_key() {
        let err = decode(&parse(
            "band: EU_863_870\nradios:\n- &r\n  frequency: 867500000\n- <<: *r",
        ))
        .unwrap_err();
        assert!(err.is_structural());
        assert_eq!(err.path(), Some("radios[1]"));
    }
}
