use log::Level;
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_PAGE: &str = include_str!("../assets/page.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("page config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("gallery must contain at least one image")]
    EmptyGallery,
    #[error("evade footprint must be positive and finite, got {width}x{height}")]
    InvalidFootprint { width: f64, height: f64 },
    #[error("shake duration must be at least one millisecond")]
    ZeroShakeDuration,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct GalleryItem {
    pub url: String,
    pub caption: String,
}

impl GalleryItem {
    fn new(url: &str, caption: &str) -> Self {
        Self {
            url: url.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// Size reserved for the "No" button when picking its next spot, plus how
/// long it shakes afterwards.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct EvadeGeometry {
    pub footprint_width: f64,
    pub footprint_height: f64,
    pub shake_ms: u32,
}

impl Default for EvadeGeometry {
    fn default() -> Self {
        Self {
            footprint_width: 150.0,
            footprint_height: 100.0,
            shake_ms: 500,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PageConfig {
    pub greeting: String,
    pub teaser: String,
    pub question: String,
    pub taunt: String,
    pub gallery: Vec<GalleryItem>,
    pub evade: EvadeGeometry,
    pub floating_hearts: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            greeting: "Hey Beautiful,".to_string(),
            teaser: "I have something to tell you...".to_string(),
            question: "Do you accept my proposal if I propose you?".to_string(),
            taunt: "Nice try! But you can't say no! 😉".to_string(),
            gallery: vec![
                GalleryItem::new("https://picsum.photos/seed/love1/800/1000", "The first time I saw you..."),
                GalleryItem::new("https://picsum.photos/seed/love2/800/1000", "That smile that brightens my day."),
                GalleryItem::new("https://picsum.photos/seed/love3/800/1000", "Every moment with you is a treasure."),
                GalleryItem::new("https://picsum.photos/seed/love4/800/1000", "You make the world a better place."),
            ],
            evade: EvadeGeometry::default(),
            floating_hearts: 15,
        }
    }
}

impl PageConfig {
    /// Parses the page document compiled into the binary.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_PAGE)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.gallery.is_empty() {
            return Err(ConfigError::EmptyGallery);
        }
        let EvadeGeometry { footprint_width: width, footprint_height: height, shake_ms } = self.evade;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidFootprint { width, height });
        }
        if shake_ms == 0 {
            return Err(ConfigError::ZeroShakeDuration);
        }
        Ok(())
    }

    /// Falls back to the built-in page when the embedded document is broken.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load page config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
