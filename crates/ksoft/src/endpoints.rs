// SPDX-License-Identifier: GPL-3.0-or-later

//! Pure endpoint builders: each function maps an operation and its
//! parameters to a fully-qualified URL against the given base. No I/O and
//! no shared state; the client owns the base URL and passes it in.
//!
//! Optional fields at their zero value are never emitted. Query values are
//! percent-encoded by `Url::query_pairs_mut`; path segments are escaped by
//! `Url::path_segments_mut`, which leaves snowflakes, numeric ids and
//! ordinary subreddit names unchanged.

use url::Url;

use crate::models::{
    BanListQuery, CoordinatesWeatherQuery, GisQuery, ListingQuery, LyricsQuery, WeatherQuery,
};

fn route(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // The client builder rejects cannot-be-a-base URLs, so this never fails.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn listing_pairs(url: &mut Url, options: &ListingQuery) {
    let mut pairs = url.query_pairs_mut();
    if let Some(span) = &options.span {
        pairs.append_pair("span", span);
    }
    if let Some(sort) = &options.sort {
        pairs.append_pair("sort", sort);
    }
    if let Some(gifs_only) = options.gifs_only {
        pairs.append_pair("gifs", &gifs_only.to_string());
    }
}

fn weather_option_pairs(url: &mut Url, units: Option<&str>, lang: Option<&str>, icons: Option<&str>) {
    let mut pairs = url.query_pairs_mut();
    if let Some(units) = units {
        pairs.append_pair("units", units);
    }
    if let Some(lang) = lang {
        pairs.append_pair("lang", lang);
    }
    if let Some(icons) = icons {
        pairs.append_pair("icons", icons);
    }
}

pub fn random_image(base: &Url, tag: &str, nsfw: bool) -> Url {
    let mut url = route(base, &["images", "random-image"]);
    url.query_pairs_mut()
        .append_pair("tag", tag)
        .append_pair("nsfw", &nsfw.to_string());
    url
}

pub fn random_meme(base: &Url) -> Url {
    route(base, &["images", "random-meme"])
}

pub fn random_aww(base: &Url) -> Url {
    route(base, &["images", "random-aww"])
}

pub fn random_nsfw(base: &Url, options: &ListingQuery) -> Url {
    let mut url = route(base, &["images", "random-nsfw"]);
    listing_pairs(&mut url, options);
    url
}

pub fn random_reddit(base: &Url, subreddit: &str, options: &ListingQuery) -> Url {
    let mut url = route(base, &["images", "rand-reddit", subreddit]);
    listing_pairs(&mut url, options);
    url
}

pub fn random_wikihow(base: &Url, nsfw: bool) -> Url {
    let mut url = route(base, &["images", "random-wikihow"]);
    if nsfw {
        url.query_pairs_mut().append_pair("nsfw", "true");
    }
    url
}

pub fn image(base: &Url, snowflake: &str) -> Url {
    route(base, &["images", "image", snowflake])
}

pub fn tags(base: &Url) -> Url {
    route(base, &["images", "tags"])
}

pub fn ban_add(base: &Url) -> Url {
    route(base, &["bans", "add"])
}

pub fn ban_info(base: &Url, user: u64) -> Url {
    let mut url = route(base, &["bans", "info"]);
    url.query_pairs_mut()
        .append_pair("user", &user.to_string());
    url
}

pub fn ban_check(base: &Url, user: u64) -> Url {
    let mut url = route(base, &["bans", "check"]);
    url.query_pairs_mut()
        .append_pair("user", &user.to_string());
    url
}

pub fn ban_delete(base: &Url, user: u64, force: bool) -> Url {
    let mut url = route(base, &["bans", "delete"]);
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("user", &user.to_string());
        if force {
            pairs.append_pair("force", "true");
        }
    }
    url
}

pub fn ban_list(base: &Url, query: &BanListQuery) -> Url {
    let mut url = route(base, &["bans", "list"]);
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(page) = query.page {
            pairs.append_pair("page", &page.to_string());
        }
        if let Some(per_page) = query.per_page {
            pairs.append_pair("per_page", &per_page.to_string());
        }
    }
    url
}

pub fn gis(base: &Url, query: &GisQuery) -> Url {
    let mut url = route(base, &["kumo", "gis"]);
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("q", &query.location);
        if query.fast {
            pairs.append_pair("fast", "true");
        }
        if query.more {
            pairs.append_pair("more", "true");
        }
        if let Some(zoom) = query.map_zoom {
            pairs.append_pair("map_zoom", &zoom.to_string());
        }
        if query.include_map {
            pairs.append_pair("include_map", "true");
        }
    }
    url
}

pub fn weather(base: &Url, query: &WeatherQuery) -> Url {
    let mut url = route(base, &["kumo", "weather", &query.report_type]);
    url.query_pairs_mut().append_pair("q", &query.location);
    weather_option_pairs(
        &mut url,
        query.units.as_deref(),
        query.lang.as_deref(),
        query.icons.as_deref(),
    );
    url
}

pub fn weather_by_coordinates(base: &Url, query: &CoordinatesWeatherQuery) -> Url {
    // Coordinates use Rust's shortest round-trip float formatting.
    let point = format!("{},{}", query.latitude, query.longitude);
    let mut url = route(base, &["kumo", "weather", &point, &query.report_type]);
    weather_option_pairs(
        &mut url,
        query.units.as_deref(),
        query.lang.as_deref(),
        query.icons.as_deref(),
    );
    url
}

pub fn geoip(base: &Url, ip: &str) -> Url {
    let mut url = route(base, &["kumo", "geoip"]);
    url.query_pairs_mut().append_pair("ip", ip);
    url
}

pub fn currency(base: &Url, from: &str, to: &str, value: f64) -> Url {
    let mut url = route(base, &["kumo", "currency"]);
    url.query_pairs_mut()
        .append_pair("from", from)
        .append_pair("to", to)
        .append_pair("value", &value.to_string());
    url
}

pub fn lyrics_search(base: &Url, query: &LyricsQuery) -> Url {
    let mut url = route(base, &["lyrics", "search"]);
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("q", &query.query);
        if let Some(text_only) = query.text_only {
            pairs.append_pair("text_only", &text_only.to_string());
        }
        if let Some(limit) = query.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
    }
    url
}

pub fn lyrics_artist(base: &Url, id: i64) -> Url {
    route(base, &["lyrics", "artist", &id.to_string()])
}

pub fn lyrics_album(base: &Url, id: i64) -> Url {
    route(base, &["lyrics", "album", &id.to_string()])
}

pub fn lyrics_track(base: &Url, id: i64) -> Url {
    route(base, &["lyrics", "track", &id.to_string()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://api.ksoft.si").unwrap()
    }

    #[test]
    fn random_image_includes_tag_and_nsfw() {
        let url = random_image(&base(), "doge", false);
        assert_eq!(
            url.as_str(),
            "https://api.ksoft.si/images/random-image?tag=doge&nsfw=false"
        );
    }

    #[test]
    fn random_meme_has_no_query() {
        let url = random_meme(&base());
        assert_eq!(url.as_str(), "https://api.ksoft.si/images/random-meme");
    }

    #[test]
    fn listing_defaults_are_omitted() {
        let url = random_nsfw(&base(), &ListingQuery::new());
        assert_eq!(url.query(), None);

        let url = random_reddit(&base(), "aww", &ListingQuery::new());
        assert_eq!(url.as_str(), "https://api.ksoft.si/images/rand-reddit/aww");
    }

    #[test]
    fn listing_options_append_one_pair_each() {
        let options = ListingQuery::new().span("day").sort("top").gifs_only(true);
        let url = random_nsfw(&base(), &options);
        assert_eq!(url.query(), Some("span=day&sort=top&gifs=true"));
    }

    #[test]
    fn subreddit_path_segment_is_escaped() {
        let url = random_reddit(&base(), "r/evil path", &ListingQuery::new());
        assert_eq!(
            url.as_str(),
            "https://api.ksoft.si/images/rand-reddit/r%2Fevil%20path"
        );
    }

    #[test]
    fn wikihow_nsfw_only_when_true() {
        assert_eq!(random_wikihow(&base(), false).query(), None);
        assert_eq!(random_wikihow(&base(), true).query(), Some("nsfw=true"));
    }

    #[test]
    fn image_embeds_snowflake_in_path() {
        let url = image(&base(), "i-ix63ra_m-12");
        assert_eq!(
            url.as_str(),
            "https://api.ksoft.si/images/image/i-ix63ra_m-12"
        );
    }

    #[test]
    fn ban_delete_force_only_when_set() {
        let url = ban_delete(&base(), 12345, false);
        assert_eq!(url.query(), Some("user=12345"));

        let url = ban_delete(&base(), 12345, true);
        assert_eq!(url.query(), Some("user=12345&force=true"));
    }

    #[test]
    fn ban_list_pagination_is_optional() {
        assert_eq!(ban_list(&base(), &BanListQuery::new()).query(), None);

        let query = BanListQuery::new().page(2).per_page(50);
        assert_eq!(
            ban_list(&base(), &query).query(),
            Some("page=2&per_page=50")
        );
    }

    #[test]
    fn gis_encodes_location_and_flags() {
        let query = GisQuery::new("New York, NY").include_map(true).map_zoom(12);
        let url = gis(&base(), &query);
        assert_eq!(
            url.query(),
            Some("q=New+York%2C+NY&map_zoom=12&include_map=true")
        );
    }

    #[test]
    fn weather_report_type_in_path() {
        let query = WeatherQuery::new("Montreal", "currently").units("si");
        let url = weather(&base(), &query);
        assert_eq!(
            url.as_str(),
            "https://api.ksoft.si/kumo/weather/currently?q=Montreal&units=si"
        );
    }

    #[test]
    fn coordinates_use_shortest_float_form() {
        let query = CoordinatesWeatherQuery::new(45.508888, -73.561668, "currently");
        let url = weather_by_coordinates(&base(), &query);
        assert_eq!(
            url.as_str(),
            "https://api.ksoft.si/kumo/weather/45.508888,-73.561668/currently"
        );
    }

    #[test]
    fn currency_value_round_trips() {
        let url = currency(&base(), "CAD", "USD", 1000.25);
        assert_eq!(url.query(), Some("from=CAD&to=USD&value=1000.25"));

        let value: f64 = url
            .query_pairs()
            .find(|(k, _)| k == "value")
            .map(|(_, v)| v.parse().unwrap())
            .unwrap();
        assert_eq!(value, 1000.25);
    }

    #[test]
    fn lyrics_search_encodes_free_text() {
        let query = LyricsQuery::new("never gonna give you up").limit(3);
        let url = lyrics_search(&base(), &query);
        assert_eq!(
            url.query(),
            Some("q=never+gonna+give+you+up&limit=3")
        );
    }

    #[test]
    fn lyrics_lookups_embed_numeric_ids() {
        assert_eq!(
            lyrics_artist(&base(), 628942).as_str(),
            "https://api.ksoft.si/lyrics/artist/628942"
        );
        assert_eq!(
            lyrics_album(&base(), 88287).as_str(),
            "https://api.ksoft.si/lyrics/album/88287"
        );
        assert_eq!(
            lyrics_track(&base(), 680639).as_str(),
            "https://api.ksoft.si/lyrics/track/680639"
        );
    }
}
