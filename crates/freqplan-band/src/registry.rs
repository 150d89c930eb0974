//! # Band Registry
//!
//! The lookup interface the codec validates `band` values against.
//!
//! [`StaticBandRegistry`] is backed by [`Band::all()`] and carries no
//! state, so a single value can be shared freely across threads. Other
//! implementations (a restricted deployment list, a test double) plug in
//! through [`BandRegistry`].

use crate::band::Band;

/// Answers whether a band identifier is registered.
pub trait BandRegistry {
    /// Returns `true` if `id` names a registered band. Never fails.
    fn is_registered(&self, id: &str) -> bool;
}

/// The process-wide registry of every [`Band`] variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticBandRegistry;

impl BandRegistry for StaticBandRegistry {
    fn is_registered(&self, id: &str) -> bool {
        is_registered(id)
    }
}

impl<R: BandRegistry + ?Sized> BandRegistry for &R {
    fn is_registered(&self, id: &str) -> bool {
        (**self).is_registered(id)
    }
}

/// Returns `true` if `id` is the canonical identifier of a [`Band`].
pub fn is_registered(id: &str) -> bool {
    Band::all().iter().any(|band| band.as_str() == id)
}
