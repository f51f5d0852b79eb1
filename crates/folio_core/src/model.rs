//! Portfolio data model: image records, categories and the catalog.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A category reference attached to an image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryRef {
    /// Display name, also the value compared against filter tokens
    #[serde(default)]
    pub name: String,
    /// Hex color used to badge the category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_code: Option<String>,
}

impl CategoryRef {
    /// Create a category reference with only a name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// A metadata value shown verbatim in the lightbox.
///
/// Manifests carry camera settings either as strings (`"2.8"`) or numbers
/// (`100`); both are kept as-is and rendered through `Display`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayValue(serde_json::Value);

impl DisplayValue {
    /// Wrap a textual value.
    pub fn text(value: &str) -> Self {
        Self(serde_json::Value::String(value.to_string()))
    }

    /// Wrap an integer value.
    pub fn number(value: i64) -> Self {
        Self(serde_json::Value::from(value))
    }

    /// True when the value carries nothing to display.
    pub fn is_blank(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => true,
            serde_json::Value::String(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            serde_json::Value::Null => Ok(()),
            serde_json::Value::String(s) => f.write_str(s),
            // Whole floats print without a fraction: 8.0 -> "8", 1e2 -> "100"
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() => write!(f, "{}", x),
                _ => write!(f, "{}", n),
            },
            other => write!(f, "{}", other),
        }
    }
}

/// One portfolio image as described by the manifest.
///
/// Records are immutable once loaded. Missing text fields deserialize as
/// empty strings and a `null` category list as an empty one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Database identifier, when the manifest comes from the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Path of the image relative to the asset root
    #[serde(default, alias = "image_path", deserialize_with = "null_as_default")]
    pub filename: String,
    /// Image title
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Free-form description
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Categories in manifest order
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<CategoryRef>,
    /// Camera manufacturer
    #[serde(default)]
    pub camera_make: DisplayValue,
    /// Camera name as served by the portfolio API, used when `camera_make`
    /// is blank
    #[serde(default, skip_serializing_if = "DisplayValue::is_blank")]
    pub camera: DisplayValue,
    /// Camera body model
    #[serde(default)]
    pub camera_model: DisplayValue,
    /// Lens description
    #[serde(default)]
    pub lens: DisplayValue,
    /// Aperture as an f-number without the `f/` prefix
    #[serde(default)]
    pub aperture: DisplayValue,
    /// Shutter speed, usually a fraction such as `1/500`
    #[serde(default)]
    pub shutter_speed: DisplayValue,
    /// ISO sensitivity
    #[serde(default)]
    pub iso: DisplayValue,
    /// Focal length
    #[serde(default)]
    pub focal_length: DisplayValue,
    /// Where the photo was taken
    #[serde(default)]
    pub location: DisplayValue,
}

impl ImageRecord {
    /// Create a record with a filename and title; everything else empty.
    pub fn new(filename: &str, title: &str) -> Self {
        Self {
            filename: filename.to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    /// Builder: set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    /// Builder: append a category by name.
    pub fn with_category(mut self, name: &str) -> Self {
        self.categories.push(CategoryRef::new(name));
        self
    }

    /// Builder: set the camera fields shown in the lightbox.
    pub fn with_camera(
        mut self,
        make: DisplayValue,
        lens: DisplayValue,
        aperture: DisplayValue,
        iso: DisplayValue,
    ) -> Self {
        self.camera_make = make;
        self.lens = lens;
        self.aperture = aperture;
        self.iso = iso;
        self
    }

    /// Name of the first category, or an empty string.
    pub fn primary_category(&self) -> &str {
        self.categories.first().map_or("", |c| c.name.as_str())
    }

    /// The camera name, preferring `camera_make` over the API's `camera`.
    pub fn camera_name(&self) -> &DisplayValue {
        if self.camera_make.is_blank() {
            &self.camera
        } else {
            &self.camera_make
        }
    }

    /// Camera line shown under the lightbox image.
    pub fn camera_info(&self) -> String {
        format!(
            "{} | {} | f/{} | ISO {}",
            self.camera_name(),
            self.lens,
            self.aperture,
            self.iso
        )
    }

    /// Optional shot details that are present, as `(label, value)` pairs.
    pub fn shot_details(&self) -> Vec<(&'static str, String)> {
        [
            ("Body", &self.camera_model),
            ("Shutter", &self.shutter_speed),
            ("Focal length", &self.focal_length),
            ("Location", &self.location),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_blank())
        .map(|(label, value)| (label, value.to_string()))
        .collect()
    }
}

/// The full, ordered list of images loaded from the manifest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    images: Vec<ImageRecord>,
    /// Categories the manifest declares up front, possibly empty
    categories: Vec<CategoryRef>,
}

impl Catalog {
    /// Create a catalog from records in manifest order.
    pub fn new(images: Vec<ImageRecord>) -> Self {
        Self {
            images,
            categories: Vec::new(),
        }
    }

    /// Builder: attach the manifest's declared category list.
    pub fn with_categories(mut self, categories: Vec<CategoryRef>) -> Self {
        self.categories = categories;
        self
    }

    /// Declared categories, in manifest order.
    pub fn categories(&self) -> &[CategoryRef] {
        &self.categories
    }

    /// All records in manifest order.
    pub fn images(&self) -> &[ImageRecord] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Distinct lowercase category tokens in first-seen order.
    ///
    /// The declared category list wins when the manifest has one; otherwise
    /// tokens are collected from the images.
    pub fn category_tokens(&self) -> Vec<String> {
        let source: Vec<&CategoryRef> = if self.categories.is_empty() {
            self.images.iter().flat_map(|img| img.categories.iter()).collect()
        } else {
            self.categories.iter().collect()
        };

        let mut tokens: Vec<String> = Vec::new();
        for category in source {
            let token = category.name.to_lowercase();
            if !token.is_empty() && !tokens.contains(&token) {
                tokens.push(token);
            }
        }
        tokens
    }
}

/// Treat an explicit JSON `null` like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
