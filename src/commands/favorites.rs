use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::get_json;
use crate::config::FavoritesConfig;
use crate::error::UiError;
use crate::models::FavoriteResponse;

// A single path segment: slashes and the escape char must be encoded too
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}');

/// `{base}{auction_id}/toggle/`
pub fn favorite_toggle_url(base: &str, auction_id: &str) -> String {
    let sep = if base.ends_with('/') { "" } else { "/" };
    format!(
        "{}{}{}/toggle/",
        base,
        sep,
        utf8_percent_encode(auction_id, SEGMENT_ENCODE_SET)
    )
}

/// Flip the favorite flag of an auction and return the new state.
pub async fn toggle_favorite(config: &FavoritesConfig, auction_id: &str) -> Result<FavoriteResponse, UiError> {
    let url = favorite_toggle_url(&config.endpoint_base, auction_id);
    let body = get_json(&url, config.check_status).await?;
    Ok(serde_wasm_bindgen::from_value(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_url() {
        assert_eq!(favorite_toggle_url("/favorites/", "42"), "/favorites/42/toggle/");
        assert_eq!(favorite_toggle_url("/favorites", "42"), "/favorites/42/toggle/");
        assert_eq!(favorite_toggle_url("/shop/favorites/", "7"), "/shop/favorites/7/toggle/");
    }

    #[test]
    fn test_toggle_url_encodes_segment() {
        assert_eq!(favorite_toggle_url("/favorites/", "1/../2"), "/favorites/1%2F..%2F2/toggle/");
        assert_eq!(favorite_toggle_url("/favorites/", "a b?"), "/favorites/a%20b%3F/toggle/");
    }
}
