#![deny(missing_docs)]

//! # freqplan-band — Regulatory Band Registry
//!
//! Leaf crate of the workspace. It defines the closed set of regulatory
//! bands a frequency plan may declare, and the lookup the codec uses to
//! reject plans naming anything else.
//!
//! ## Design Principles
//!
//! 1. **Single [`Band`] enum.** One definition of the registered bands.
//!    Adding a band means adding a variant, and every exhaustive `match`
//!    in the workspace has to handle it.
//!
//! 2. **[`BandRegistry`] is the validation seam.** The codec only asks
//!    "is this identifier registered?". [`StaticBandRegistry`] answers from
//!    the static enum, and tests may supply their own registry.
//!
//! 3. **No mutable state.** The registry is a `'static` slice, safe to
//!    query from any number of threads without locking.

pub mod band;
pub mod error;
pub mod registry;

pub use band::Band;
pub use error::UnknownBandError;
pub use registry::{is_registered, BandRegistry, StaticBandRegistry};
