//! The pipeline-node contract.
//!
//! A component is a callable with declared named outputs that can be wired
//! into a larger processing graph. Components serialize their settings into
//! a [`ComponentConfig`] mapping and are reconstructed from one via
//! [`FromConfig`], so a pipeline definition can be persisted and rebuilt.

use crate::Result;

/// Configuration mapping for a component: unique string keys, JSON values.
pub type ComponentConfig = serde_json::Map<String, serde_json::Value>;

/// Base trait implemented by every pipeline component.
///
/// # Thread Safety
///
/// Components must be `Send + Sync`; a component holds only immutable
/// configuration during a call, so one instance may serve any number of
/// concurrent callers.
pub trait Component: Send + Sync {
    /// Unique component name, lowercase with hyphens.
    fn name(&self) -> &str;

    /// The output names this component declares, in declaration order.
    ///
    /// Downstream nodes wire against these names.
    fn output_names(&self) -> &'static [&'static str];

    /// Serialize this component's settings into a configuration mapping.
    ///
    /// The mapping must contain everything [`FromConfig::from_config`] needs
    /// to reconstruct an equivalent instance (round-trip law: reconstructing
    /// from `to_config()` and serializing again yields an equal mapping).
    fn to_config(&self) -> ComponentConfig;
}

/// Reconstruction of a component from its configuration mapping.
///
/// Separate from [`Component`] so that the base trait stays object-safe.
pub trait FromConfig: Sized {
    /// Build an instance from the values in `config`.
    ///
    /// Must accept exactly what [`Component::to_config`] produces. Missing
    /// optional keys fall back to their defaults; values of the wrong shape
    /// are a `Serialization` error.
    fn from_config(config: &ComponentConfig) -> Result<Self>;
}
