//! Document key spellings.
//!
//! Plans use hyphenated lower-case keys. Decode and encode both read from
//! these constants so the two directions cannot drift apart.

/// Root: regulatory band identifier.
pub const BAND: &str = "band";
/// Root: listen-before-talk parameters.
pub const LBT: &str = "lbt";
/// Root: channel list.
pub const CHANNELS: &str = "channels";
/// Root: radio list.
pub const RADIOS: &str = "radios";

/// Channel and radio: frequency in Hz.
pub const FREQUENCY: &str = "frequency";
/// Channel: data-rate sub-mapping.
pub const DATA_RATE: &str = "data-rate";
/// Data-rate: index into the band's data-rate table.
pub const INDEX: &str = "index";

/// Radio: transmit configuration sub-mapping.
pub const TX: &str = "tx";
/// Transmit configuration: lower bound in Hz.
pub const MIN_FREQUENCY: &str = "min-frequency";
/// Transmit configuration: upper bound in Hz.
pub const MAX_FREQUENCY: &str = "max-frequency";

/// LBT: RSSI threshold in dBm.
pub const RSSI_TARGET: &str = "rssi-target";
/// LBT: scan duration in microseconds.
pub const SCAN_TIME: &str = "scan-time";

/// Keys accepted at the document root.
pub(crate) const ROOT_KEYS: &[&str] = &[BAND, LBT, CHANNELS, RADIOS];
/// Keys accepted in a channel entry.
pub(crate) const CHANNEL_KEYS: &[&str] = &[FREQUENCY, DATA_RATE];
/// Keys accepted in a data-rate mapping.
pub(crate) const DATA_RATE_KEYS: &[&str] = &[INDEX];
/// Keys accepted in a radio entry.
pub(crate) const RADIO_KEYS: &[&str] = &[FREQUENCY, TX];
/// Keys accepted in a transmit configuration mapping.
pub(crate) const TX_KEYS: &[&str] = &[MIN_FREQUENCY, MAX_FREQUENCY];
/// Keys accepted in an LBT mapping.
pub(crate) const LBT_KEYS: &[&str] = &[RSSI_TARGET, SCAN_TIME];
