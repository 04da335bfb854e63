//! AltDrag: drag windows into zones while holding a modifier.
//!
//! The property keys keep the `fancyzones_` prefix used by the zone engine
//! AltDrag shares; changing them would orphan existing documents.

use serde::{Deserialize, Serialize};

use crate::domain::envelope::{ModuleProperties, SettingsEnvelope};
use crate::domain::property::{BoolProperty, HotkeySettings, IntProperty, Property, StringProperty};

/// Well-known module identifier.
pub const MODULE_NAME: &str = "AltDrag";

/// Virtual key code for the `` ` `` key (VK_OEM_3).
const VK_OEM_3: u32 = 0xC0;

/// Settings envelope for AltDrag.
pub type AltDragSettings = SettingsEnvelope<AltDragProperties>;

/// AltDrag's `properties` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AltDragProperties {
    #[serde(rename = "fancyzones_span_zones_across_monitors")]
    pub span_zones_across_monitors: BoolProperty,

    #[serde(rename = "fancyzones_makeDraggedWindowTransparent")]
    pub make_dragged_window_transparent: BoolProperty,

    #[serde(rename = "fancyzones_zoneColor")]
    pub zone_color: StringProperty,

    #[serde(rename = "fancyzones_zoneBorderColor")]
    pub zone_border_color: StringProperty,

    #[serde(rename = "fancyzones_zoneHighlightColor")]
    pub zone_highlight_color: StringProperty,

    /// Highlight opacity in percent (0-100).
    #[serde(rename = "fancyzones_highlight_opacity")]
    pub highlight_opacity: IntProperty,

    #[serde(rename = "fancyzones_editor_hotkey")]
    pub editor_hotkey: Property<HotkeySettings>,

    /// Newline-separated executable names AltDrag ignores.
    #[serde(rename = "fancyzones_excluded_apps")]
    pub excluded_apps: StringProperty,
}

impl Default for AltDragProperties {
    fn default() -> Self {
        Self {
            span_zones_across_monitors: Property::new(false),
            make_dragged_window_transparent: Property::new(true),
            zone_color: Property::new("#F5FCFF".to_string()),
            zone_border_color: Property::new("#FFFFFF".to_string()),
            zone_highlight_color: Property::new("#0078D7".to_string()),
            highlight_opacity: Property::new(50),
            editor_hotkey: Property::new(HotkeySettings::new(
                true,
                false,
                false,
                false,
                VK_OEM_3,
                "`",
            )),
            excluded_apps: Property::new(String::new()),
        }
    }
}

impl ModuleProperties for AltDragProperties {
    const MODULE_NAME: &'static str = MODULE_NAME;
}

impl AltDragProperties {
    /// Excluded apps as upper-cased entries, one per non-empty line.
    ///
    /// Both `\n` and `\r\n` line endings are accepted.
    pub fn excluded_apps_list(&self) -> Vec<String> {
        self.excluded_apps
            .value
            .to_uppercase()
            .split(['\r', '\n'])
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}
