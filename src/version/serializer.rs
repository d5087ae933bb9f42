//! Configuration snapshot serialization.
//!
//! The version store never interprets a configuration snapshot. It hands it
//! to a [`ConfigSerializer`] on the way out and back in.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::errors::ConfigError;

/// Converts an application configuration to and from JSON.
pub trait ConfigSerializer: Send + Sync {
    /// The opaque configuration type embedded in a version.
    type Config;

    fn to_json(&self, config: &Self::Config) -> Result<Value, ConfigError>;

    fn from_json(&self, value: Value) -> Result<Self::Config, ConfigError>;
}

/// serde-backed serializer for any `Serialize + DeserializeOwned` config.
pub struct JsonConfigSerializer<C> {
    _config: PhantomData<fn() -> C>,
}

impl<C> JsonConfigSerializer<C> {
    pub fn new() -> Self {
        Self {
            _config: PhantomData,
        }
    }
}

impl<C> Default for JsonConfigSerializer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for JsonConfigSerializer<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C> fmt::Debug for JsonConfigSerializer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonConfigSerializer").finish()
    }
}

impl<C> ConfigSerializer for JsonConfigSerializer<C>
where
    C: Serialize + DeserializeOwned,
{
    type Config = C;

    fn to_json(&self, config: &C) -> Result<Value, ConfigError> {
        Ok(serde_json::to_value(config)?)
    }

    fn from_json(&self, value: Value) -> Result<C, ConfigError> {
        Ok(serde_json::from_value(value)?)
    }
}
