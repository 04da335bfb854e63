//! The settings envelope: `version` + `name` + `properties`.
//!
//! [`SettingsEnvelope<P>`] wraps a module's properties type `P` with the
//! metadata every persisted document carries.  Modules do not subclass the
//! envelope; they implement [`ModuleProperties`] for their properties type and
//! use `SettingsEnvelope<TheirProperties>` directly.
//!
//! # Lifecycle
//!
//! ```text
//! default / from_serialized_form ──► (mutate properties) ──► upgrade? ──► save
//! ```
//!
//! Each load produces a fresh envelope.  Nothing is cached between loads.
//!
//! # Lenient loading
//!
//! A persisted document may be missing `version` or `properties` (or carry
//! `"properties": null`); those fields fall back to defaults.  Inside
//! `properties`, each module schema uses `#[serde(default)]`, so missing
//! nested fields take their default values and unknown fields are ignored.
//! A field with the wrong JSON type is still a parse error.

use std::fmt;

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::version::SchemaVersion;
use crate::error::SettingsError;
use crate::store::SettingsStore;

/// Serialization strategy used by [`SettingsEnvelope::save`].
pub type SerializeFn<P> = fn(&SettingsEnvelope<P>) -> Result<String, SettingsError>;

/// Per-module contract implemented by each module's properties type.
pub trait ModuleProperties:
    Default + Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned
{
    /// Well-known module identifier, used as the storage key.  Must not be
    /// empty.
    const MODULE_NAME: &'static str;

    /// Newest schema version this build understands.
    const LATEST_VERSION: &'static str = crate::domain::version::DEFAULT_VERSION;

    /// Migrates `properties` loaded under schema `from` to
    /// [`Self::LATEST_VERSION`].
    ///
    /// Returns `true` if a migration was applied.  Only called when `from`
    /// differs from the latest version.  Changes made by an implementation
    /// that returns `false` are discarded.
    fn migrate(_from: &SchemaVersion, _properties: &mut Self) -> bool {
        false
    }

    /// Serialization step [`SettingsEnvelope::save`] uses for this module.
    /// Every envelope of the module starts with it, whether built or loaded.
    fn serializer() -> SerializeFn<Self> {
        pretty_json::<Self>
    }
}

/// Capability set shared by every module's settings, usable as a trait
/// object when the properties type is not known statically.
pub trait ModuleSettings {
    /// The module's well-known identifier.
    fn module_name(&self) -> &str;

    /// The schema version of the loaded document.
    fn version(&self) -> &SchemaVersion;

    /// Pretty-printed JSON for the whole envelope.
    fn to_serialized_form(&self) -> Result<String, SettingsError>;

    /// Serializes the envelope and hands it to `store` under the module name.
    fn save(&self, store: &dyn SettingsStore) -> Result<(), SettingsError>;

    /// Applies pending schema migrations.  Returns `true` if anything changed.
    fn upgrade_settings_configuration(&mut self) -> bool;
}

/// Versioned settings document for the module described by `P`.
#[derive(Clone)]
pub struct SettingsEnvelope<P: ModuleProperties> {
    version: SchemaVersion,
    properties: P,
    serializer: SerializeFn<P>,
}

/// Default serialization strategy: indented JSON.
pub fn pretty_json<P: ModuleProperties>(
    envelope: &SettingsEnvelope<P>,
) -> Result<String, SettingsError> {
    serde_json::to_string_pretty(envelope).map_err(SettingsError::Serialize)
}

/// Single-line JSON, for modules whose consumers expect compact documents.
pub fn compact_json<P: ModuleProperties>(
    envelope: &SettingsEnvelope<P>,
) -> Result<String, SettingsError> {
    serde_json::to_string(envelope).map_err(SettingsError::Serialize)
}

impl<P: ModuleProperties> SettingsEnvelope<P> {
    /// Creates an envelope with version `"1"`, default properties and the
    /// module's serializer.
    pub fn new() -> Self {
        debug_assert!(!P::MODULE_NAME.is_empty(), "module name must not be empty");
        Self {
            version: SchemaVersion::default(),
            properties: P::default(),
            serializer: P::serializer(),
        }
    }

    /// Creates an envelope around existing properties with version `"1"`.
    pub fn with_properties(properties: P) -> Self {
        Self {
            properties,
            ..Self::new()
        }
    }

    /// Replaces the serialization step used by [`Self::save`] for this
    /// instance only.  Envelopes loaded later use
    /// [`ModuleProperties::serializer`] again.
    pub fn with_serializer(mut self, serializer: SerializeFn<P>) -> Self {
        self.serializer = serializer;
        self
    }

    /// Parses a persisted document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] if the text is not a JSON object
    /// matching the module schema, and [`SettingsError::ModuleMismatch`] if
    /// its `name` field belongs to another module.
    pub fn from_serialized_form(text: &str) -> Result<Self, SettingsError> {
        let raw: RawEnvelope<P> = serde_json::from_str(text).map_err(SettingsError::Parse)?;
        Self::from_raw(raw)
    }

    /// Loads this module's document from `store`, falling back to defaults
    /// when the store has none.
    ///
    /// # Errors
    ///
    /// Propagates store failures and the errors of
    /// [`Self::from_serialized_form`].
    pub fn load(store: &dyn SettingsStore) -> Result<Self, SettingsError> {
        match store.load_settings(P::MODULE_NAME)? {
            Some(text) => Self::from_serialized_form(&text),
            None => {
                debug!(module = P::MODULE_NAME, "no settings document; using defaults");
                Ok(Self::new())
            }
        }
    }

    pub fn module_name(&self) -> &'static str {
        P::MODULE_NAME
    }

    pub fn version(&self) -> &SchemaVersion {
        &self.version
    }

    pub fn properties(&self) -> &P {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut P {
        &mut self.properties
    }

    pub fn into_properties(self) -> P {
        self.properties
    }

    /// Pretty-printed JSON with fields in the order `version`, `name`,
    /// `properties`.  Parsing the output and serializing again yields the
    /// same text.
    pub fn to_serialized_form(&self) -> Result<String, SettingsError> {
        pretty_json(self)
    }

    /// Serializes with the envelope's strategy and writes the result to
    /// `store` keyed by [`Self::module_name`].
    ///
    /// # Errors
    ///
    /// Store failures are returned as [`SettingsError::Store`] unchanged.
    pub fn save(&self, store: &dyn SettingsStore) -> Result<(), SettingsError> {
        let text = (self.serializer)(self)?;
        store.save_settings(&text, P::MODULE_NAME)?;
        debug!(module = P::MODULE_NAME, bytes = text.len(), "settings saved");
        Ok(())
    }

    /// Runs the module's migration hook if the loaded version is not the
    /// latest.  On success the version is bumped to
    /// [`ModuleProperties::LATEST_VERSION`]; otherwise nothing changes.
    pub fn upgrade_settings_configuration(&mut self) -> bool {
        let latest = latest_version::<P>();
        if self.version == latest {
            return false;
        }

        let mut migrated = self.properties.clone();
        if !P::migrate(&self.version, &mut migrated) {
            return false;
        }

        info!(
            module = P::MODULE_NAME,
            from = %self.version,
            to = %latest,
            "settings schema upgraded"
        );
        self.properties = migrated;
        self.version = latest;
        true
    }

    fn from_raw(raw: RawEnvelope<P>) -> Result<Self, SettingsError> {
        if let Some(found) = raw.name.filter(|name| !name.is_empty()) {
            if found != P::MODULE_NAME {
                return Err(SettingsError::ModuleMismatch {
                    expected: P::MODULE_NAME.to_string(),
                    found,
                });
            }
        }

        let version = raw
            .version
            .as_deref()
            .and_then(SchemaVersion::parse)
            .unwrap_or_default();

        Ok(Self {
            version,
            properties: raw.properties.unwrap_or_default(),
            serializer: P::serializer(),
        })
    }
}

fn latest_version<P: ModuleProperties>() -> SchemaVersion {
    SchemaVersion::parse(P::LATEST_VERSION).unwrap_or_default()
}

impl<P: ModuleProperties> Default for SettingsEnvelope<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ModuleProperties> PartialEq for SettingsEnvelope<P> {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.properties == other.properties
    }
}

impl<P: ModuleProperties> fmt::Debug for SettingsEnvelope<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsEnvelope")
            .field("version", &self.version)
            .field("name", &P::MODULE_NAME)
            .field("properties", &self.properties)
            .finish_non_exhaustive()
    }
}

impl<P: ModuleProperties> Serialize for SettingsEnvelope<P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SettingsEnvelope", 3)?;
        state.serialize_field("version", &self.version)?;
        state.serialize_field("name", P::MODULE_NAME)?;
        state.serialize_field("properties", &self.properties)?;
        state.end()
    }
}

impl<'de, P: ModuleProperties> Deserialize<'de> for SettingsEnvelope<P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawEnvelope::<P>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(de::Error::custom)
    }
}

impl<P: ModuleProperties> ModuleSettings for SettingsEnvelope<P> {
    fn module_name(&self) -> &str {
        P::MODULE_NAME
    }

    fn version(&self) -> &SchemaVersion {
        &self.version
    }

    fn to_serialized_form(&self) -> Result<String, SettingsError> {
        SettingsEnvelope::to_serialized_form(self)
    }

    fn save(&self, store: &dyn SettingsStore) -> Result<(), SettingsError> {
        SettingsEnvelope::save(self, store)
    }

    fn upgrade_settings_configuration(&mut self) -> bool {
        SettingsEnvelope::upgrade_settings_configuration(self)
    }
}

/// On-disk shape before defaults are applied.  Every field is optional so a
/// partial document still loads.
#[derive(Deserialize)]
struct RawEnvelope<P> {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    properties: Option<P>,
}

// ── Tests ─────────────────────────────────────────────────────────────────────
