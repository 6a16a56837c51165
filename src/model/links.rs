//! Nested URL records attached to a user.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::wire::{optional_string, WireMap, WireWriter};
use crate::error::CodecError;

/// Related API and web URLs for a user. Every entry is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UserLinks {
    /// API URL of the user resource itself (wire key `self`).
    pub self_link: Option<String>,
    /// Public profile page.
    pub html: Option<String>,
    /// API URL listing the user's photos.
    pub photos: Option<String>,
    /// API URL listing the user's liked photos.
    pub likes: Option<String>,
    /// API URL of the user's portfolio.
    pub portfolio: Option<String>,
    /// API URL listing followed users.
    pub following: Option<String>,
    /// API URL listing followers.
    pub followers: Option<String>,
}

impl UserLinks {
    /// Decode from a wire map. Unknown keys are ignored.
    pub fn decode(map: &WireMap) -> Result<Self, CodecError> {
        Ok(Self {
            self_link: optional_string(map, "self")?,
            html: optional_string(map, "html")?,
            photos: optional_string(map, "photos")?,
            likes: optional_string(map, "likes")?,
            portfolio: optional_string(map, "portfolio")?,
            following: optional_string(map, "following")?,
            followers: optional_string(map, "followers")?,
        })
    }

    /// Encode to a wire map, omitting absent entries.
    #[must_use]
    pub fn encode(&self) -> WireMap {
        let mut w = WireWriter::new();
        w.opt_string("self", self.self_link.as_deref());
        w.opt_string("html", self.html.as_deref());
        w.opt_string("photos", self.photos.as_deref());
        w.opt_string("likes", self.likes.as_deref());
        w.opt_string("portfolio", self.portfolio.as_deref());
        w.opt_string("following", self.following.as_deref());
        w.opt_string("followers", self.followers.as_deref());
        w.finish()
    }
}

/// Avatar URLs in the sizes the API serves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProfileImage {
    /// 32px avatar.
    pub small: Option<String>,
    /// 64px avatar.
    pub medium: Option<String>,
    /// 128px avatar.
    pub large: Option<String>,
}

impl ProfileImage {
    /// Decode from a wire map. Unknown keys are ignored.
    pub fn decode(map: &WireMap) -> Result<Self, CodecError> {
        Ok(Self {
            small: optional_string(map, "small")?,
            medium: optional_string(map, "medium")?,
            large: optional_string(map, "large")?,
        })
    }

    /// Encode to a wire map, omitting absent entries.
    #[must_use]
    pub fn encode(&self) -> WireMap {
        let mut w = WireWriter::new();
        w.opt_string("small", self.small.as_deref());
        w.opt_string("medium", self.medium.as_deref());
        w.opt_string("large", self.large.as_deref());
        w.finish()
    }
}

impl Serialize for UserLinks {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(s)
    }
}

impl<'de> Deserialize<'de> for UserLinks {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let map = WireMap::deserialize(d)?;
        Self::decode(&map).map_err(serde::de::Error::custom)
    }
}

impl Serialize for ProfileImage {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(s)
    }
}

impl<'de> Deserialize<'de> for ProfileImage {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let map = WireMap::deserialize(d)?;
        Self::decode(&map).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn self_key_maps_to_self_link() {
        let links: UserLinks = serde_json::from_value(json!({
            "self": "https://api.example.com/users/jo",
            "html": "https://example.com/@jo",
            "download_location": "ignored"
        }))
        .unwrap();
        assert_eq!(
            links.self_link.as_deref(),
            Some("https://api.example.com/users/jo")
        );
        assert_eq!(links.photos, None);

        let encoded = links.encode();
        assert!(encoded.contains_key("self"));
        assert!(!encoded.contains_key("self_link"));
        assert!(!encoded.contains_key("download_location"));
    }

    #[test]
    fn empty_links_encode_to_empty_map() {
        assert!(UserLinks::default().encode().is_empty());
    }

    #[test]
    fn profile_image_serde_goes_through_codec() {
        let image: ProfileImage = serde_json::from_value(json!({
            "small": "https://img.example.com/s",
            "medium": null
        }))
        .unwrap();
        assert_eq!(image.small.as_deref(), Some("https://img.example.com/s"));
        assert_eq!(image.medium, None);
        assert_eq!(
            serde_json::to_value(&image).unwrap(),
            json!({ "small": "https://img.example.com/s" })
        );

        let err = serde_json::from_value::<ProfileImage>(json!({ "large": 128 }))
            .unwrap_err();
        assert!(err.to_string().contains("type mismatch for `large`"));
    }

    #[test]
    fn profile_image_rejects_non_string() {
        let map = match json!({ "small": 32 }) {
            serde_json::Value::Object(m) => m,
            _ => unreachable!(),
        };
        assert!(matches!(
            ProfileImage::decode(&map),
            Err(CodecError::TypeMismatch { .. })
        ));
    }
}
