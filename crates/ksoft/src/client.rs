// SPDX-License-Identifier: GPL-3.0-or-later

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::endpoints;
use crate::error::{ErrorResponse, KSoftError, Result};
use crate::models::{
    Album, Artist, BanCheck, BanInfo, BanList, BanListQuery, CoordinatesWeatherQuery, Currency,
    GeoIp, Gis, GisQuery, Image, ListingQuery, LyricsQuery, LyricsSearch, NewBan, RedditPost,
    TagCollection, Track, Weather, WeatherQuery,
};

const KSOFT_API_BASE: &str = "https://api.ksoft.si";
const USER_AGENT: &str = concat!(
    "ksoft-rs/",
    env!("CARGO_PKG_VERSION"),
    " ( https://api.ksoft.si )"
);

/// Authenticated session against the KSoft.Si API.
///
/// Holds the bearer token and one shared connection-pooling HTTP client;
/// cloning is cheap and clones share the pool. All operations are a single
/// request/response round trip with no caching and no retries.
#[derive(Debug, Clone)]
pub struct KSoftClient {
    client: Client,
    token: String,
    base_url: Url,
}

impl KSoftClient {
    /// Create a client with default settings.
    ///
    /// Fails with [`KSoftError::MissingToken`] when `token` is empty.
    ///
    /// # Example
    /// ```no_run
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ksoft::KSoftClient::new("api-token")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().build(token)
    }

    /// Create a client builder for custom configuration.
    pub fn builder() -> KSoftClientBuilder {
        KSoftClientBuilder::default()
    }

    // --------- images ------------------------------------------------------

    /// Get a random image for a tag.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example(client: &ksoft::KSoftClient) -> ksoft::Result<()> {
    /// let image = client.random_image("doge", false).await?;
    /// println!("{}", image.url);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn random_image(&self, tag: &str, nsfw: bool) -> Result<Image> {
        self.get(endpoints::random_image(&self.base_url, tag, nsfw))
            .await
    }

    /// Get a random meme.
    pub async fn random_meme(&self) -> Result<RedditPost> {
        self.get(endpoints::random_meme(&self.base_url)).await
    }

    /// Get a random cute-animal post.
    pub async fn random_aww(&self) -> Result<RedditPost> {
        self.get(endpoints::random_aww(&self.base_url)).await
    }

    /// Get a random NSFW post.
    pub async fn random_nsfw(&self, options: &ListingQuery) -> Result<RedditPost> {
        self.get(endpoints::random_nsfw(&self.base_url, options))
            .await
    }

    /// Get a random post from a named subreddit.
    pub async fn random_reddit(
        &self,
        subreddit: &str,
        options: &ListingQuery,
    ) -> Result<RedditPost> {
        self.get(endpoints::random_reddit(&self.base_url, subreddit, options))
            .await
    }

    /// Get a random WikiHow article image.
    pub async fn random_wikihow(&self, nsfw: bool) -> Result<Image> {
        self.get(endpoints::random_wikihow(&self.base_url, nsfw))
            .await
    }

    /// Get an image by its snowflake.
    pub async fn image(&self, snowflake: &str) -> Result<Image> {
        self.get(endpoints::image(&self.base_url, snowflake)).await
    }

    /// List all available image tags.
    pub async fn tags(&self) -> Result<TagCollection> {
        self.get(endpoints::tags(&self.base_url)).await
    }

    // --------- bans --------------------------------------------------------

    /// Add a ban to the global ban list. The API's echoed body is discarded.
    pub async fn add_ban(&self, ban: &NewBan) -> Result<()> {
        self.post_form(endpoints::ban_add(&self.base_url), &ban.form_fields())
            .await?;
        Ok(())
    }

    /// Get the full ban record for a user.
    pub async fn ban_info(&self, user: u64) -> Result<BanInfo> {
        self.get(endpoints::ban_info(&self.base_url, user)).await
    }

    /// Check whether a user is banned.
    pub async fn check_ban(&self, user: u64) -> Result<bool> {
        let check: BanCheck = self.get(endpoints::ban_check(&self.base_url, user)).await?;
        Ok(check.is_banned)
    }

    /// Delete a ban. With `force`, deletes the record entirely instead of
    /// only deactivating it.
    pub async fn delete_ban(&self, user: u64, force: bool) -> Result<()> {
        self.request(Method::DELETE, endpoints::ban_delete(&self.base_url, user, force))
            .await?;
        Ok(())
    }

    /// List bans, one page at a time.
    pub async fn bans(&self, query: &BanListQuery) -> Result<BanList> {
        self.get(endpoints::ban_list(&self.base_url, query)).await
    }

    // --------- kumo --------------------------------------------------------

    /// Geocode a free-text location.
    pub async fn gis(&self, query: &GisQuery) -> Result<Gis> {
        self.get(endpoints::gis(&self.base_url, query)).await
    }

    /// Get a weather report for a place name.
    ///
    /// # Example
    /// ```no_run
    /// # async fn example(client: &ksoft::KSoftClient) -> ksoft::Result<()> {
    /// let query = ksoft::WeatherQuery::new("Montreal", "currently").units("si");
    /// let weather = client.weather(&query).await?;
    /// println!("{}", weather.data.summary);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn weather(&self, query: &WeatherQuery) -> Result<Weather> {
        self.get(endpoints::weather(&self.base_url, query)).await
    }

    /// Get a weather report for exact coordinates.
    pub async fn weather_by_coordinates(
        &self,
        query: &CoordinatesWeatherQuery,
    ) -> Result<Weather> {
        self.get(endpoints::weather_by_coordinates(&self.base_url, query))
            .await
    }

    /// Geolocate an IP address.
    pub async fn geoip(&self, ip: &str) -> Result<GeoIp> {
        self.get(endpoints::geoip(&self.base_url, ip)).await
    }

    /// Convert an amount between currencies.
    pub async fn convert_currency(&self, from: &str, to: &str, value: f64) -> Result<Currency> {
        self.get(endpoints::currency(&self.base_url, from, to, value))
            .await
    }

    // --------- lyrics ------------------------------------------------------

    /// Search lyrics by free text.
    pub async fn search_lyrics(&self, query: &LyricsQuery) -> Result<LyricsSearch> {
        self.get(endpoints::lyrics_search(&self.base_url, query))
            .await
    }

    /// Get an artist by id.
    pub async fn artist(&self, id: i64) -> Result<Artist> {
        self.get(endpoints::lyrics_artist(&self.base_url, id)).await
    }

    /// Get an album by id.
    pub async fn album(&self, id: i64) -> Result<Album> {
        self.get(endpoints::lyrics_album(&self.base_url, id)).await
    }

    /// Get a track by id.
    pub async fn track(&self, id: i64) -> Result<Track> {
        self.get(endpoints::lyrics_track(&self.base_url, id)).await
    }

    // --------- transport ---------------------------------------------------

    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let body = self.request(Method::GET, url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn request(&self, method: Method, url: Url) -> Result<Vec<u8>> {
        let request = self.client.request(method.clone(), url.clone());
        self.dispatch(method, url, request).await
    }

    async fn post_form(&self, url: Url, fields: &[(&str, String)]) -> Result<Vec<u8>> {
        trace!(target: "ksoft", ?fields, "form payload");
        let request = self.client.post(url.clone()).form(fields);
        self.dispatch(Method::POST, url, request).await
    }

    /// Single round trip shared by every operation: attach the bearer
    /// token, send, read the whole body, classify the status.
    async fn dispatch(
        &self,
        method: Method,
        url: Url,
        request: reqwest::RequestBuilder,
    ) -> Result<Vec<u8>> {
        debug!(target: "ksoft", %method, %url, "sending request");

        let response = request
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        debug!(target: "ksoft", %status, "response received");

        let body = response.bytes().await?.to_vec();
        trace!(target: "ksoft", body = %String::from_utf8_lossy(&body), "response body");

        match status {
            StatusCode::OK | StatusCode::CREATED | StatusCode::NO_CONTENT => Ok(body),
            StatusCode::TOO_MANY_REQUESTS => Err(KSoftError::RateLimited(ErrorResponse::new(
                method, url, status, headers, body,
            ))),
            StatusCode::UNAUTHORIZED => Err(KSoftError::Unauthorized(ErrorResponse::new(
                method, url, status, headers, body,
            ))),
            _ => Err(KSoftError::Api(ErrorResponse::new(
                method, url, status, headers, body,
            ))),
        }
    }
}

/// Builder for configuring a KSoft client.
#[derive(Debug)]
pub struct KSoftClientBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for KSoftClientBuilder {
    fn default() -> Self {
        Self {
            base_url: KSOFT_API_BASE.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl KSoftClientBuilder {
    /// Set a custom base URL (useful for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the whole-request timeout (connect plus read).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the client. Fails when the token is empty or the base URL is
    /// not a usable HTTP origin.
    pub fn build(self, token: impl Into<String>) -> Result<KSoftClient> {
        let token = token.into();
        if token.is_empty() {
            return Err(KSoftError::MissingToken);
        }

        let base_url = Url::parse(&self.base_url)
            .map_err(|e| KSoftError::InvalidBaseUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(KSoftError::InvalidBaseUrl(self.base_url));
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()?;

        Ok(KSoftClient {
            client,
            token,
            base_url,
        })
    }
}
