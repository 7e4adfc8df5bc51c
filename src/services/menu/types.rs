use std::sync::LazyLock;

use chrono::{NaiveTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Default serving window start when the backend row carries none.
pub const DEFAULT_TIMING_FROM: &str = "09:00";

/// Default serving window end when the backend row carries none.
pub const DEFAULT_TIMING_TO: &str = "22:00";

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([a-zA-Z0-9_-]{11})")
        .expect("static video id pattern")
});

static SLUG_STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"[^a-z0-9]+").expect("static slug pattern")
});

/// One restaurant as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    /// Backend row id.
    pub id: String,

    /// URL-safe restaurant id, unique across the platform.
    pub slug: String,

    /// Display name of the restaurant.
    pub name: String,

    /// Name of the owner account.
    pub owner_name: String,

    /// State the restaurant is in.
    pub state: String,

    /// City the restaurant is in.
    pub city: String,

    /// Owner contact address.
    pub gmail: String,

    /// Uploaded logo image URL, if any.
    #[serde(default)]
    pub logo_url: Option<String>,

    /// Uploaded cover image URL, if any.
    #[serde(default)]
    pub cover_url: Option<String>,
}

/// Payload for creating a hotel.
#[derive(Debug, Clone, Serialize)]
pub struct NewHotel {
    /// URL-safe restaurant id.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Owner account name.
    pub owner_name: String,
    /// State.
    pub state: String,
    /// City.
    pub city: String,
    /// Owner contact address.
    pub gmail: String,
    /// Owner password, sent as-is; hashing is the backend's job.
    pub password: String,
}

/// Partial hotel update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct HotelPatch {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New logo image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// New cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
}

/// One dish row as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    /// Backend row id.
    pub id: String,

    /// Owning hotel row id.
    pub hotel_id: String,

    /// Dish name.
    pub name: String,

    /// Vegetarian flag; absent when the owner never chose one.
    #[serde(default)]
    pub veg: Option<bool>,

    /// Price in the restaurant's currency.
    pub price: f64,

    /// Serving size label ("250 g", "2 pcs").
    #[serde(default)]
    pub quantity: Option<String>,

    /// Short description shown under the name.
    #[serde(default)]
    pub description: Option<String>,

    /// Serving window start ("HH:MM").
    #[serde(default)]
    pub timing_from: Option<String>,

    /// Serving window end ("HH:MM").
    #[serde(default)]
    pub timing_to: Option<String>,

    /// Photo slide URL.
    #[serde(default)]
    pub photo_url: Option<String>,

    /// YouTube video URL for the video slide, if the dish has one.
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Dish {
    /// Serving window start, with the platform default applied.
    pub fn timing_from(&self) -> &str {
        self.timing_from.as_deref().unwrap_or(DEFAULT_TIMING_FROM)
    }

    /// Serving window end, with the platform default applied.
    pub fn timing_to(&self) -> &str {
        self.timing_to.as_deref().unwrap_or(DEFAULT_TIMING_TO)
    }

    /// The embeddable video id, when the dish has a usable video URL.
    pub fn video_id(&self) -> Option<String> {
        self.video_url
            .as_deref()
            .and_then(|url| extract_video_id(url.trim()))
    }

    /// Whether the dish is inside its serving window at the given time.
    ///
    /// Windows wrapping midnight ("22:00" to "02:00") are honored.
    /// Unparseable times fall back to "always available", matching the
    /// forgiving behavior of the diner surface.
    pub fn available_at(&self, time: NaiveTime) -> bool {
        let (Ok(from), Ok(to)) = (
            NaiveTime::parse_from_str(self.timing_from(), "%H:%M"),
            NaiveTime::parse_from_str(self.timing_to(), "%H:%M"),
        ) else {
            return true;
        };
        if from <= to {
            time >= from && time <= to
        } else {
            time >= from || time <= to
        }
    }

    /// Whether the dish is inside its serving window right now.
    pub fn available_now(&self) -> bool {
        self.available_at(Utc::now().time())
    }
}

/// Payload for creating a dish.
#[derive(Debug, Clone, Serialize)]
pub struct NewDish {
    /// Owning hotel row id.
    pub hotel_id: String,
    /// Dish name.
    pub name: String,
    /// Vegetarian flag.
    pub veg: bool,
    /// Price.
    pub price: f64,
    /// Serving size label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Short description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Serving window start.
    pub timing_from: String,
    /// Serving window end.
    pub timing_to: String,
    /// Photo slide URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// YouTube video URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Partial dish update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DishPatch {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New photo URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// New video URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

/// Derives a URL-safe restaurant id from free-form input.
///
/// Lowercases, collapses every non-alphanumeric run into a single `-`,
/// and trims leading/trailing dashes. Input that reduces to nothing gets
/// a timestamped fallback id so the flow never dead-ends.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let replaced = SLUG_STRIP_RE.replace_all(lowered.trim(), "-");
    let trimmed = replaced.trim_matches('-');
    if trimmed.is_empty() {
        format!("id-{}", Utc::now().timestamp_millis())
    } else {
        trimmed.to_string()
    }
}

/// Extracts the 11-character video id from a YouTube watch, embed, or
/// short-form URL. Returns `None` for anything else.
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
