// SPDX-License-Identifier: GPL-3.0-or-later

//! Client for the KSoft.Si REST API.
//!
//! This crate wraps the KSoft.Si HTTP API (random images and memes,
//! moderation ban lists, geolocation/weather/currency lookups, lyrics
//! search) behind a typed async client. Every operation is a single
//! stateless request/response round trip; the crate performs no caching,
//! no retries, and no client-side rate limiting. A 429 response surfaces
//! as [`KSoftError::RateLimited`] so callers can apply their own backoff.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::{KSoftClient, KSoftClientBuilder};
pub use error::{ApiErrorMessage, ErrorResponse, KSoftError, Result};
pub use models::{
    Album, Artist, BanEntry, BanInfo, BanList, BanListQuery, CoordinatesWeatherQuery, Currency,
    GeoIp, Gis, GisQuery, Image, ListingQuery, LyricsQuery, LyricsSearch, NewBan, RedditPost,
    TagCollection, Track, Weather, WeatherQuery,
};
