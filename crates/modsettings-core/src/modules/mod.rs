//! Property schemas for the modules shipped with the suite.
//!
//! Each sub-module defines one properties type, implements
//! [`ModuleProperties`](crate::ModuleProperties) for it, and exposes a
//! `<Module>Settings` alias for its envelope.
//!
//! [`ModuleKind`] lets tooling work with any module by name and get back a
//! `Box<dyn ModuleSettings>`.

pub mod altdrag;
pub mod image_resizer;

use std::fmt;
use std::str::FromStr;

use crate::domain::envelope::{ModuleSettings, SettingsEnvelope};
use crate::error::SettingsError;
use crate::store::SettingsStore;

use altdrag::AltDragProperties;
use image_resizer::ImageResizerProperties;

/// Every module known to this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    AltDrag,
    ImageResizer,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 2] = [ModuleKind::AltDrag, ModuleKind::ImageResizer];

    /// The module's well-known identifier (also its storage key).
    pub fn name(self) -> &'static str {
        match self {
            ModuleKind::AltDrag => altdrag::MODULE_NAME,
            ModuleKind::ImageResizer => image_resizer::MODULE_NAME,
        }
    }

    /// Looks a module up by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
    }

    /// A default-constructed envelope for this module.
    pub fn default_settings(self) -> Box<dyn ModuleSettings> {
        match self {
            ModuleKind::AltDrag => Box::new(SettingsEnvelope::<AltDragProperties>::new()),
            ModuleKind::ImageResizer => Box::new(SettingsEnvelope::<ImageResizerProperties>::new()),
        }
    }

    /// Loads this module's envelope from `store`, or defaults if absent.
    ///
    /// # Errors
    ///
    /// See [`SettingsEnvelope::load`].
    pub fn load_settings(
        self,
        store: &dyn SettingsStore,
    ) -> Result<Box<dyn ModuleSettings>, SettingsError> {
        let settings: Box<dyn ModuleSettings> = match self {
            ModuleKind::AltDrag => Box::new(SettingsEnvelope::<AltDragProperties>::load(store)?),
            ModuleKind::ImageResizer => {
                Box::new(SettingsEnvelope::<ImageResizerProperties>::load(store)?)
            }
        };
        Ok(settings)
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModuleKind {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SettingsError::UnknownModule(s.to_string()))
    }
}
