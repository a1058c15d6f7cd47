//! Typed page routing.
//!
//! Maps a request path onto one of the two page modes. Character ids are
//! taken from the `/npc/{id}` segment and percent-decoded.

use crate::error::RouteError;

/// Path prefix of character chat pages.
const CHAT_PREFIX: &str = "npc";

/// A page the browser can land on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRoute {
    /// `/`: the character listing.
    Listing,
    /// `/npc/{id}`: chat with one character.
    Chat { id: String },
}

impl PageRoute {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::Listing);
        }

        let mut segments = trimmed.split('/');
        match (segments.next(), segments.next(), segments.next()) {
            (Some(CHAT_PREFIX), Some(raw_id), None) if !raw_id.is_empty() => {
                let id = urlencoding::decode(raw_id)
                    .map_err(|_| RouteError::InvalidEncoding(path.to_string()))?;
                Ok(Self::Chat { id: id.into_owned() })
            }
            _ => Err(RouteError::NoMatch(path.to_string())),
        }
    }

    /// Browser path for this page.
    pub fn href(&self) -> String {
        match self {
            Self::Listing => "/".to_string(),
            Self::Chat { id } => chat_href(id),
        }
    }
}

/// `/npc/{id}` with the id percent-encoded.
pub fn chat_href(id: &str) -> String {
    format!("/{CHAT_PREFIX}/{}", urlencoding::encode(id))
}

/// Base path of the HTMX fragment endpoints for a character.
pub fn fragment_base(id: &str) -> String {
    format!("/ui/{CHAT_PREFIX}/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_paths() {
        assert_eq!(PageRoute::parse("/"), Ok(PageRoute::Listing));
        assert_eq!(PageRoute::parse(""), Ok(PageRoute::Listing));
    }

    #[test]
    fn test_chat_path() {
        assert_eq!(
            PageRoute::parse("/npc/abc"),
            Ok(PageRoute::Chat { id: "abc".to_string() })
        );
        assert_eq!(
            PageRoute::parse("/npc/abc/"),
            Ok(PageRoute::Chat { id: "abc".to_string() })
        );
    }

    #[test]
    fn test_chat_path_is_percent_decoded() {
        assert_eq!(
            PageRoute::parse("/npc/li%20bai"),
            Ok(PageRoute::Chat { id: "li bai".to_string() })
        );
    }

    #[test]
    fn test_no_match() {
        for path in ["/npc", "/npc/", "/npc/a/b", "/other", "/npcs/a"] {
            assert!(
                matches!(PageRoute::parse(path), Err(RouteError::NoMatch(_))),
                "{path} should not match"
            );
        }
    }

    #[test]
    fn test_invalid_encoding() {
        assert!(matches!(
            PageRoute::parse("/npc/%FF"),
            Err(RouteError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_href_round_trips() {
        let route = PageRoute::Chat { id: "li bai/2".to_string() };
        assert_eq!(route.href(), "/npc/li%20bai%2F2");
        assert_eq!(PageRoute::parse(&route.href()), Ok(route));
    }
}
