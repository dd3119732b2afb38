//! Table presentation settings.
//!
//! Every field has a default, so a TOML document only needs to name the
//! settings it overrides:
//!
//! ```rust
//! use purchase_table::TableStyle;
//!
//! let style = TableStyle::from_toml_str(r##"
//!     free_label = "Gratis"
//!     accent_color = "#0a84ff"
//!
//!     [footer_padding]
//!     bottom = 24
//! "##).unwrap();
//!
//! assert_eq!(style.free_label, "Gratis");
//! assert_eq!(style.footer_padding.bottom, 24);
//! assert_eq!(style.footer_padding.leading, 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::slot::ControlColor;

/// Insets around a row's content, in host layout units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub leading: u16,
    pub trailing: u16,
    pub top: u16,
    pub bottom: u16,
}

impl Padding {
    pub const fn new(leading: u16, trailing: u16, top: u16, bottom: u16) -> Self {
        Self {
            leading,
            trailing,
            top,
            bottom,
        }
    }

    pub const fn uniform(value: u16) -> Self {
        Self::new(value, value, value, value)
    }
}

/// Presentation settings shared by every row of a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Action title shown for free entries.
    pub free_label: String,
    /// Asset name of the icon placed at the start of every item row.
    pub icon: String,
    /// Action title color while the entry is on sale (`#rrggbb`).
    pub accent_color: String,
    /// Action title color while the entry is unavailable (`#rrggbb`).
    pub muted_color: String,
    pub content_insets: Padding,
    pub footer_padding: Padding,
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            free_label: "Free".to_string(),
            icon: "coin_large".to_string(),
            accent_color: "#1b2a4a".to_string(),
            muted_color: "#8e8e93".to_string(),
            content_insets: Padding::uniform(10),
            footer_padding: Padding::new(20, 20, 20, 40),
        }
    }
}

impl TableStyle {
    /// Parse and validate a style from TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, StyleError> {
        let style: Self = toml::from_str(text)?;
        style.validate()?;
        Ok(style)
    }

    pub fn to_toml_string(&self) -> Result<String, StyleError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if self.free_label.trim().is_empty() {
            return Err(StyleError::EmptyFreeLabel);
        }
        for (field, value) in [
            ("accent_color", &self.accent_color),
            ("muted_color", &self.muted_color),
        ] {
            if !is_hex_color(value) {
                return Err(StyleError::InvalidColor {
                    field,
                    value: value.clone(),
                });
            }
        }
        Ok(())
    }

    /// The concrete color for a control color role.
    pub fn color(&self, color: ControlColor) -> &str {
        match color {
            ControlColor::Accent => &self.accent_color,
            ControlColor::Muted => &self.muted_color,
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..].bytes().all(|b| b.is_ascii_hexdigit())
}
