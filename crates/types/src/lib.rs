use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&s[0..2], 16).ok()?;
        let g = u8::from_str_radix(&s[2..4], 16).ok()?;
        let b = u8::from_str_radix(&s[4..6], 16).ok()?;
        Some(Rgb([r, g, b]))
    }

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Icon background, `#2462bd`.
pub const BRAND_COLOR: Rgb = Rgb([0x24, 0x62, 0xbd]);

/// Edge length of the canvas the brand icon is drawn on.
pub const CANVAS_SIZE: u32 = 512;

/// Chevron polyline in canvas coordinates.
pub const CHEVRON: [[f32; 2]; 3] = [[100.0, 150.0], [256.0, 450.0], [412.0, 150.0]];
pub const CHEVRON_WIDTH: f32 = 40.0;

/// A square PNG asset written into the output directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconTarget {
    pub file_name: &'static str,
    pub size: u32,
}

impl IconTarget {
    pub fn manifest_entry(&self) -> ManifestIcon {
        ManifestIcon {
            src: self.file_name.to_string(),
            sizes: format!("{}x{}", self.size, self.size),
            mime: "image/png".to_string(),
        }
    }
}

pub const PWA_512: IconTarget = IconTarget { file_name: "pwa-512x512.png", size: 512 };
pub const PWA_192: IconTarget = IconTarget { file_name: "pwa-192x192.png", size: 192 };
pub const APPLE_TOUCH: IconTarget = IconTarget { file_name: "apple-touch-icon.png", size: 180 };

/// One element of a web app manifest `icons` array.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime: String,
}
