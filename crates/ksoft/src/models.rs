// SPDX-License-Identifier: GPL-3.0-or-later

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request parameters
// ---------------------------------------------------------------------------

/// Listing options for reddit-backed endpoints.
///
/// Fields left unset are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    /// Listing time span (e.g. "hour", "day", "week").
    pub span: Option<String>,
    /// Listing sort order (e.g. "hot", "top", "new").
    pub sort: Option<String>,
    /// Only return animated posts.
    pub gifs_only: Option<bool>,
}

impl ListingQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn gifs_only(mut self, gifs_only: bool) -> Self {
        self.gifs_only = Some(gifs_only);
        self
    }
}

/// Ban record submitted to the global ban list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBan {
    /// Discord user id of the banned user.
    pub user: u64,
    /// Reason for the ban.
    pub reason: String,
    /// Link to proof of the offence.
    pub proof: String,
    /// Username, for display in the ban list.
    pub user_name: Option<String>,
    /// Four-digit discriminator of the user.
    pub user_discriminator: Option<u16>,
    /// Discord user id of the moderator who issued the ban.
    pub moderator: Option<u64>,
    /// Whether the ban can be appealed.
    pub appeal_possible: Option<bool>,
}

impl NewBan {
    pub fn new(user: u64, reason: impl Into<String>, proof: impl Into<String>) -> Self {
        Self {
            user,
            reason: reason.into(),
            proof: proof.into(),
            user_name: None,
            user_discriminator: None,
            moderator: None,
            appeal_possible: None,
        }
    }

    pub fn user_name(mut self, name: impl Into<String>) -> Self {
        self.user_name = Some(name.into());
        self
    }

    pub fn user_discriminator(mut self, discriminator: u16) -> Self {
        self.user_discriminator = Some(discriminator);
        self
    }

    pub fn moderator(mut self, moderator: u64) -> Self {
        self.moderator = Some(moderator);
        self
    }

    pub fn appeal_possible(mut self, appeal_possible: bool) -> Self {
        self.appeal_possible = Some(appeal_possible);
        self
    }

    /// Form fields for the ban-creation POST. Unset optionals are omitted.
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("user", self.user.to_string()),
            ("reason", self.reason.clone()),
            ("proof", self.proof.clone()),
        ];
        if let Some(name) = &self.user_name {
            fields.push(("user_name", name.clone()));
        }
        if let Some(discriminator) = self.user_discriminator {
            fields.push(("user_discriminator", discriminator.to_string()));
        }
        if let Some(moderator) = self.moderator {
            fields.push(("mod", moderator.to_string()));
        }
        if let Some(appeal_possible) = self.appeal_possible {
            fields.push(("appeal_possible", appeal_possible.to_string()));
        }
        fields
    }
}

/// Pagination for the ban list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BanListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl BanListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Location search against the GIS endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GisQuery {
    /// Free-text location, e.g. "Montreal".
    pub location: String,
    /// Faster but less detailed lookup.
    pub fast: bool,
    /// Return multiple matches instead of the best one.
    pub more: bool,
    /// Zoom level of the included map, 1-20.
    pub map_zoom: Option<u8>,
    /// Include a rendered map image URL in the response.
    pub include_map: bool,
}

impl GisQuery {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            ..Self::default()
        }
    }

    pub fn fast(mut self, fast: bool) -> Self {
        self.fast = fast;
        self
    }

    pub fn more(mut self, more: bool) -> Self {
        self.more = more;
        self
    }

    pub fn map_zoom(mut self, zoom: u8) -> Self {
        self.map_zoom = Some(zoom);
        self
    }

    pub fn include_map(mut self, include_map: bool) -> Self {
        self.include_map = include_map;
        self
    }
}

/// Weather lookup by place name.
///
/// `report_type` selects the report block, e.g. "currently", "hourly",
/// "daily".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeatherQuery {
    pub location: String,
    pub report_type: String,
    /// Unit system: "si", "us", "ca", "uk2" or "auto".
    pub units: Option<String>,
    /// Summary language code.
    pub lang: Option<String>,
    /// Icon pack for the `icon_url` field.
    pub icons: Option<String>,
}

impl WeatherQuery {
    pub fn new(location: impl Into<String>, report_type: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            report_type: report_type.into(),
            ..Self::default()
        }
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn icons(mut self, icons: impl Into<String>) -> Self {
        self.icons = Some(icons.into());
        self
    }
}

/// Weather lookup by geographic coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordinatesWeatherQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub report_type: String,
    pub units: Option<String>,
    pub lang: Option<String>,
    pub icons: Option<String>,
}

impl CoordinatesWeatherQuery {
    pub fn new(latitude: f64, longitude: f64, report_type: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            report_type: report_type.into(),
            ..Self::default()
        }
    }

    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn icons(mut self, icons: impl Into<String>) -> Self {
        self.icons = Some(icons.into());
        self
    }
}

/// Lyrics search parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LyricsQuery {
    /// Free-text search query, artist and/or title and/or a lyrics excerpt.
    pub query: String,
    /// Strip markup and only search lyrics text.
    pub text_only: Option<bool>,
    /// Maximum number of results.
    pub limit: Option<u32>,
}

impl LyricsQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn text_only(mut self, text_only: bool) -> Self {
        self.text_only = Some(text_only);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A tagged image from the image store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Image {
    pub url: String,
    /// Opaque image identifier, usable with [`crate::KSoftClient::image`].
    pub snowflake: String,
    pub nsfw: bool,
    pub tag: String,
}

/// All tags known to the image store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagCollection {
    #[serde(default)]
    pub models: Vec<TagModel>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub nsfw_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagModel {
    pub name: String,
    pub nsfw: bool,
}

/// A reddit post, as returned by the meme endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RedditPost {
    pub title: String,
    pub image_url: String,
    /// Permalink of the post.
    pub source: String,
    pub subreddit: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comments: i64,
    /// Unix timestamp with fractional seconds.
    pub created_at: f64,
    pub nsfw: bool,
    pub author: String,
}

/// Wire shape of the ban-check response; the facade returns the flag.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BanCheck {
    pub is_banned: bool,
}

/// Full ban record for a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BanInfo {
    pub id: String,
    pub name: String,
    pub discriminator: String,
    pub moderator_id: String,
    pub reason: String,
    pub proof: String,
    pub is_ban_active: bool,
    pub can_be_appealed: bool,
    pub timestamp: String,
    #[serde(default)]
    pub appeal_reason: Option<String>,
    /// Null until an appeal is filed; string timestamp afterwards.
    #[serde(default)]
    pub appeal_date: Option<serde_json::Value>,
    #[serde(default)]
    pub requested_by: String,
    pub exists: bool,
}

/// One page of the global ban list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BanList {
    pub ban_count: i64,
    pub page_count: i64,
    pub per_page: i64,
    pub page: i64,
    pub on_page: i64,
    #[serde(default)]
    pub next_page: Option<i64>,
    #[serde(default)]
    pub previous_page: Option<i64>,
    pub data: Vec<BanEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BanEntry {
    pub id: String,
    pub name: String,
    pub discriminator: String,
    pub moderator_id: String,
    pub reason: String,
    pub proof: String,
    pub is_ban_active: bool,
    pub can_be_appealed: bool,
    pub timestamp: String,
    #[serde(default)]
    pub appeal_reason: Option<String>,
    #[serde(default)]
    pub appeal_date: Option<serde_json::Value>,
}

/// Geocoding result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Gis {
    pub error: bool,
    pub code: i64,
    pub data: GisData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GisData {
    pub address: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub bounding_box: Vec<String>,
    #[serde(rename = "type", default)]
    pub kind: Vec<String>,
    /// Rendered map URL, present when the query asked for one.
    #[serde(default)]
    pub map: Option<String>,
}

/// Weather report for a location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Weather {
    pub error: bool,
    pub status: i64,
    pub data: WeatherReport,
}

/// A single report block. Fields that the requested report type does not
/// carry are left at their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherReport {
    pub time: Option<String>,
    pub summary: String,
    pub icon: String,
    pub precip_intensity: f64,
    pub precip_probability: f64,
    pub temperature: f64,
    pub apparent_temperature: f64,
    pub dew_point: f64,
    pub humidity: f64,
    pub pressure: f64,
    pub wind_speed: f64,
    pub wind_gust: f64,
    pub wind_bearing: f64,
    pub cloud_cover: f64,
    pub uv_index: f64,
    pub visibility: f64,
    pub ozone: f64,
    pub sunrise_time: Option<f64>,
    pub sunset_time: Option<f64>,
    #[serde(rename = "icon_url")]
    pub icon_url: String,
    pub alerts: Vec<WeatherAlert>,
    pub units: String,
    pub location: WeatherLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeatherAlert {
    pub title: String,
    #[serde(default)]
    pub regions: Vec<String>,
    pub severity: String,
    pub time: i64,
    pub expires: i64,
    pub description: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WeatherLocation {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub address: Option<String>,
}

/// IP geolocation result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoIp {
    pub error: bool,
    pub code: i64,
    pub data: GeoIpData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoIpData {
    pub city: String,
    pub continent_code: String,
    pub continent_name: String,
    pub country_code: String,
    pub country_name: String,
    /// US TV market code; null outside the US, string or number inside.
    #[serde(default)]
    pub dma_code: Option<serde_json::Value>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub postal_code: String,
    pub region: String,
    pub time_zone: String,
    pub apis: GeoIpApis,
}

/// Follow-up API URLs for the located coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GeoIpApis {
    pub weather: String,
    pub gis: String,
    pub openstreetmap: String,
    pub googlemaps: String,
}

/// Currency conversion result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Currency {
    pub value: f64,
    /// Human-readable converted amount, e.g. "741.08 USD".
    pub pretty: String,
}

/// Lyrics search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LyricsSearch {
    pub total: i64,
    /// Search duration in milliseconds.
    pub took: i64,
    pub data: Vec<LyricsHit>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LyricsHit {
    pub artist: String,
    pub artist_id: i64,
    pub album: String,
    /// Comma-separated list of album ids the track appears on.
    pub album_ids: String,
    pub album_year: String,
    pub name: String,
    pub lyrics: String,
    pub search_str: String,
    pub album_art: String,
    pub popularity: i64,
    pub id: String,
    pub search_score: f64,
    pub url: String,
}

/// Artist with album and track listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub albums: Vec<AlbumSummary>,
    #[serde(default)]
    pub tracks: Vec<TrackSummary>,
}

/// Album with its artist and track listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Album {
    pub id: i64,
    pub name: String,
    pub year: i64,
    pub artist: ArtistSummary,
    #[serde(default)]
    pub tracks: Vec<TrackSummary>,
}

/// Track with its artist, albums and lyrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: ArtistSummary,
    #[serde(default)]
    pub albums: Vec<AlbumSummary>,
    pub lyrics: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlbumSummary {
    pub id: i64,
    pub name: String,
    pub year: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackSummary {
    pub id: i64,
    pub name: String,
}
