//! ImageResizer: batch-resize images from the shell context menu.

use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};

use crate::domain::envelope::{ModuleProperties, SettingsEnvelope};
use crate::domain::property::{BoolProperty, IntProperty, Property, StringProperty};

/// Well-known module identifier.
pub const MODULE_NAME: &str = "ImageResizer";

/// CLSID of the PNG encoder, used when the source format cannot be written.
pub const PNG_ENCODER_ID: &str = "19e4a5aa-5662-4fc5-a0c0-1758028e1057";

/// Settings envelope for ImageResizer.
pub type ImageResizerSettings = SettingsEnvelope<ImageResizerProperties>;

/// How an image is fitted into the target box.  Stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ResizeFit {
    Fill = 0,
    #[default]
    Fit = 1,
    Stretch = 2,
}

impl From<ResizeFit> for u8 {
    fn from(fit: ResizeFit) -> Self {
        fit as u8
    }
}

impl TryFrom<u8> for ResizeFit {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Fill),
            1 => Ok(Self::Fit),
            2 => Ok(Self::Stretch),
            other => Err(format!("unknown resize fit: {other}")),
        }
    }
}

/// Unit of an [`ImageSize`]'s width and height.  Stored as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ResizeUnit {
    Centimeter = 0,
    Inch = 1,
    Percent = 2,
    #[default]
    Pixel = 3,
}

impl From<ResizeUnit> for u8 {
    fn from(unit: ResizeUnit) -> Self {
        unit as u8
    }
}

impl TryFrom<u8> for ResizeUnit {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Self::Centimeter),
            1 => Ok(Self::Inch),
            2 => Ok(Self::Percent),
            3 => Ok(Self::Pixel),
            other => Err(format!("unknown resize unit: {other}")),
        }
    }
}

/// A named target size.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSize {
    pub id: u32,
    pub name: String,
    pub fit: ResizeFit,
    #[serde(serialize_with = "finite_dimension")]
    pub width: f64,
    #[serde(serialize_with = "finite_dimension")]
    pub height: f64,
    pub unit: ResizeUnit,
}

impl ImageSize {
    pub fn new(id: u32, name: &str, width: f64, height: f64) -> Self {
        Self {
            id,
            name: name.to_string(),
            fit: ResizeFit::Fit,
            width,
            height,
            unit: ResizeUnit::Pixel,
        }
    }
}

/// JSON has no NaN or infinity; serde_json would write `null`, which the
/// loader then rejects.  Refuse to write such a document instead.
fn finite_dimension<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(S::Error::custom(format!(
            "image size dimension must be finite, got {value}"
        )))
    }
}

/// ImageResizer's `properties` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageResizerProperties {
    /// Index into `sizes`; an index past the end selects `custom_size`.
    #[serde(rename = "imageresizer_selectedSizeIndex")]
    pub selected_size_index: IntProperty,

    /// Never enlarge images.
    #[serde(rename = "imageresizer_shrinkOnly")]
    pub shrink_only: BoolProperty,

    /// Overwrite originals instead of writing copies.
    #[serde(rename = "imageresizer_replace")]
    pub replace: BoolProperty,

    #[serde(rename = "imageresizer_ignoreOrientation")]
    pub ignore_orientation: BoolProperty,

    /// JPEG quality, 1-100.
    #[serde(rename = "imageresizer_jpegQualityLevel")]
    pub jpeg_quality_level: IntProperty,

    #[serde(rename = "imageresizer_pngInterlaceOption")]
    pub png_interlace_option: IntProperty,

    #[serde(rename = "imageresizer_tiffCompressOption")]
    pub tiff_compress_option: IntProperty,

    /// Output file name template: `%1` original name, `%2` size name.
    #[serde(rename = "imageresizer_fileName")]
    pub file_name: StringProperty,

    #[serde(rename = "imageresizer_sizes")]
    pub sizes: Property<Vec<ImageSize>>,

    #[serde(rename = "imageresizer_keepDateModified")]
    pub keep_date_modified: BoolProperty,

    #[serde(rename = "imageresizer_fallbackEncoder")]
    pub fallback_encoder: StringProperty,

    #[serde(rename = "imageresizer_customSize")]
    pub custom_size: Property<ImageSize>,
}

impl Default for ImageResizerProperties {
    fn default() -> Self {
        Self {
            selected_size_index: Property::new(0),
            shrink_only: Property::new(false),
            replace: Property::new(false),
            ignore_orientation: Property::new(true),
            jpeg_quality_level: Property::new(90),
            png_interlace_option: Property::new(0),
            tiff_compress_option: Property::new(0),
            file_name: Property::new("%1 (%2)".to_string()),
            sizes: Property::new(vec![
                ImageSize::new(0, "Small", 854.0, 480.0),
                ImageSize::new(1, "Medium", 1366.0, 768.0),
                ImageSize::new(2, "Large", 1920.0, 1080.0),
                ImageSize::new(3, "Phone", 320.0, 568.0),
            ]),
            keep_date_modified: Property::new(false),
            fallback_encoder: Property::new(PNG_ENCODER_ID.to_string()),
            custom_size: Property::new(ImageSize::new(4, "Custom", 1024.0, 640.0)),
        }
    }
}

impl ModuleProperties for ImageResizerProperties {
    const MODULE_NAME: &'static str = MODULE_NAME;
}

impl ImageResizerProperties {
    /// The size currently selected in the UI.
    pub fn selected_size(&self) -> &ImageSize {
        usize::try_from(self.selected_size_index.value)
            .ok()
            .and_then(|index| self.sizes.value.get(index))
            .unwrap_or(&self.custom_size.value)
    }
}
