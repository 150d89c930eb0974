//! # Frequency Plan Model
//!
//! The typed form of a frequency plan document. Optional substructures are
//! `Option`s: `None` means the key was absent from the document and will be
//! absent from the encoded output. A present-but-zero value is a different
//! plan.
//!
//! All fields are public so fixtures can be built by hand and encoded
//! without going through [`decode()`](crate::decode()).

use freqplan_band::Band;

/// Root aggregate: band, optional LBT, channels and radios.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyPlan {
    /// Regulatory band identifier, e.g. `EU_863_870`.
    pub band_id: String,
    /// Listen-before-talk parameters, if the band requires them.
    pub lbt: Option<Lbt>,
    /// Channels in index order.
    pub channels: Vec<Channel>,
    /// Radios in index order.
    pub radios: Vec<Radio>,
}

impl FrequencyPlan {
    /// Create an empty plan for a band.
    pub fn new(band_id: impl Into<String>) -> Self {
        Self {
            band_id: band_id.into(),
            ..Self::default()
        }
    }

    /// Resolve `band_id` against the registered bands.
    ///
    /// Returns `None` for hand-built plans naming an unregistered band.
    pub fn band(&self) -> Option<Band> {
        self.band_id.parse().ok()
    }

    /// Set the LBT parameters.
    pub fn with_lbt(mut self, lbt: Lbt) -> Self {
        self.lbt = Some(lbt);
        self
    }

    /// Append a channel.
    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channels.push(channel);
        self
    }

    /// Append a radio.
    pub fn with_radio(mut self, radio: Radio) -> Self {
        self.radios.push(radio);
        self
    }
}

/// A single uplink channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Channel {
    /// Center frequency in Hz.
    pub frequency: u64,
    /// Fixed data rate. `None` uses the band default.
    pub data_rate: Option<ChannelDataRate>,
}

impl Channel {
    /// A channel at `frequency` Hz using the band's default data rate.
    pub fn new(frequency: u64) -> Self {
        Self {
            frequency,
            data_rate: None,
        }
    }

    /// Pin the channel to a data-rate index.
    pub fn with_data_rate(mut self, index: u32) -> Self {
        self.data_rate = Some(ChannelDataRate { index });
        self
    }
}

/// Data-rate reference of a channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelDataRate {
    /// Index into the band's data-rate table. Not resolved here.
    pub index: u32,
}

/// A radio (RF chain) of a gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Radio {
    /// Reference frequency in Hz.
    pub frequency: u64,
    /// Transmit range. `None` for receive-only radios.
    pub tx_config: Option<TxConfig>,
}

impl Radio {
    /// A receive-only radio at `frequency` Hz.
    pub fn new(frequency: u64) -> Self {
        Self {
            frequency,
            tx_config: None,
        }
    }

    /// Allow transmission between `min_frequency` and `max_frequency` Hz.
    pub fn with_tx(mut self, min_frequency: u64, max_frequency: u64) -> Self {
        self.tx_config = Some(TxConfig {
            min_frequency,
            max_frequency,
        });
        self
    }
}

/// Transmit range of a radio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TxConfig {
    /// Lowest transmit frequency in Hz.
    pub min_frequency: u64,
    /// Highest transmit frequency in Hz.
    pub max_frequency: u64,
}

/// Listen-before-talk parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lbt {
    /// RSSI threshold in dBm above which the channel counts as busy.
    pub rssi_target: i32,
    /// Scan duration in microseconds.
    pub scan_time: u32,
}
