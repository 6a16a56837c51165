//! The photo API's `User` record and its builder.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::links::{ProfileImage, UserLinks};
use super::wire::{
    optional_int, optional_object, optional_string, required_string, WireMap,
    WireWriter,
};
use crate::error::CodecError;

const ID: &str = "id";
const USERNAME: &str = "username";
const NAME: &str = "name";

/// Immutable user record.
///
/// Construct with [`UserRecord::decode`], [`UserRecord::from_json`] or
/// [`UserRecordBuilder`]. Equality and hashing cover every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserRecord {
    id: String,
    username: String,
    name: String,
    updated_at: Option<String>,
    portfolio_url: Option<String>,
    bio: Option<String>,
    location: Option<String>,
    total_likes: Option<i64>,
    total_photos: Option<i64>,
    total_collections: Option<i64>,
    profile_image: Option<ProfileImage>,
    links: Option<UserLinks>,
}

impl UserRecord {
    /// Start an empty builder.
    #[must_use]
    pub fn builder() -> UserRecordBuilder {
        UserRecordBuilder::default()
    }

    /// Decode from a wire map.
    ///
    /// Unknown keys are ignored and `null` optional values count as absent.
    /// A missing, `null` or empty `id` fails with
    /// [`CodecError::MissingRequiredField`].
    pub fn decode(map: &WireMap) -> Result<Self, CodecError> {
        let id = required_string(map, ID)?;
        if id.is_empty() {
            return Err(CodecError::MissingRequiredField(ID));
        }
        Ok(Self {
            id,
            username: required_string(map, USERNAME)?,
            name: required_string(map, NAME)?,
            updated_at: optional_string(map, "updated_at")?,
            portfolio_url: optional_string(map, "portfolio_url")?,
            bio: optional_string(map, "bio")?,
            location: optional_string(map, "location")?,
            total_likes: optional_int(map, "total_likes")?,
            total_photos: optional_int(map, "total_photos")?,
            total_collections: optional_int(map, "total_collections")?,
            profile_image: optional_object(
                map,
                "profile_image",
                ProfileImage::decode,
            )?,
            links: optional_object(map, "links", UserLinks::decode)?,
        })
    }

    /// Encode to a wire map. Required fields come first; absent optional
    /// fields are left out entirely.
    #[must_use]
    pub fn encode(&self) -> WireMap {
        let mut w = WireWriter::new();
        w.string(ID, &self.id);
        w.string(USERNAME, &self.username);
        w.string(NAME, &self.name);
        w.opt_string("updated_at", self.updated_at.as_deref());
        w.opt_string("portfolio_url", self.portfolio_url.as_deref());
        w.opt_string("bio", self.bio.as_deref());
        w.opt_string("location", self.location.as_deref());
        w.opt_int("total_likes", self.total_likes);
        w.opt_int("total_photos", self.total_photos);
        w.opt_int("total_collections", self.total_collections);
        w.opt_object(
            "profile_image",
            self.profile_image.as_ref().map(ProfileImage::encode),
        );
        w.opt_object("links", self.links.as_ref().map(UserLinks::encode));
        w.finish()
    }

    /// Parse a JSON object and decode it.
    pub fn from_json(text: &str) -> Result<Self, CodecError> {
        let map: WireMap = serde_json::from_str(text)?;
        Self::decode(&map)
    }

    /// Encode and render as compact JSON.
    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(&self.encode())?)
    }

    /// Builder pre-filled with this record's fields.
    #[must_use]
    pub fn to_builder(&self) -> UserRecordBuilder {
        UserRecordBuilder {
            id: Some(self.id.clone()),
            username: Some(self.username.clone()),
            name: Some(self.name.clone()),
            updated_at: self.updated_at.clone(),
            portfolio_url: self.portfolio_url.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            total_likes: self.total_likes,
            total_photos: self.total_photos,
            total_collections: self.total_collections,
            profile_image: self.profile_image.clone(),
            links: self.links.clone(),
        }
    }

    /// Copy with modifications applied through a builder, re-validated.
    pub fn rebuild(
        &self,
        update: impl FnOnce(&mut UserRecordBuilder),
    ) -> Result<Self, CodecError> {
        let mut builder = self.to_builder();
        update(&mut builder);
        builder.build()
    }

    /// Unique, non-empty user id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Login handle.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last modification timestamp as sent by the API.
    #[must_use]
    pub fn updated_at(&self) -> Option<&str> {
        self.updated_at.as_deref()
    }

    /// External portfolio URL.
    #[must_use]
    pub fn portfolio_url(&self) -> Option<&str> {
        self.portfolio_url.as_deref()
    }

    /// Free-text biography.
    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Free-text location.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Number of photos the user liked.
    #[must_use]
    pub fn total_likes(&self) -> Option<i64> {
        self.total_likes
    }

    /// Number of photos the user uploaded.
    #[must_use]
    pub fn total_photos(&self) -> Option<i64> {
        self.total_photos
    }

    /// Number of collections the user owns.
    #[must_use]
    pub fn total_collections(&self) -> Option<i64> {
        self.total_collections
    }

    /// Avatar URLs.
    #[must_use]
    pub fn profile_image(&self) -> Option<&ProfileImage> {
        self.profile_image.as_ref()
    }

    /// Related URLs.
    #[must_use]
    pub fn links(&self) -> Option<&UserLinks> {
        self.links.as_ref()
    }
}

impl Serialize for UserRecord {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        self.encode().serialize(s)
    }
}

impl<'de> Deserialize<'de> for UserRecord {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let map = WireMap::deserialize(d)?;
        Self::decode(&map).map_err(serde::de::Error::custom)
    }
}

/// Mutable builder for [`UserRecord`].
///
/// Fields are public so callers can assign or clear them freely; the
/// chainable setters cover the common path. [`build`](Self::build) checks
/// the required fields again, so clearing one after the fact is caught.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecordBuilder {
    /// Required, non-empty.
    pub id: Option<String>,
    /// Required.
    pub username: Option<String>,
    /// Required.
    pub name: Option<String>,
    /// Optional update timestamp.
    pub updated_at: Option<String>,
    /// Optional portfolio URL.
    pub portfolio_url: Option<String>,
    /// Optional biography.
    pub bio: Option<String>,
    /// Optional location.
    pub location: Option<String>,
    /// Optional like count.
    pub total_likes: Option<i64>,
    /// Optional photo count.
    pub total_photos: Option<i64>,
    /// Optional collection count.
    pub total_collections: Option<i64>,
    /// Optional avatar URLs.
    pub profile_image: Option<ProfileImage>,
    /// Optional related URLs.
    pub links: Option<UserLinks>,
}

impl UserRecordBuilder {
    /// Set the id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the username.
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the update timestamp.
    #[must_use]
    pub fn updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    /// Set the portfolio URL.
    #[must_use]
    pub fn portfolio_url(mut self, url: impl Into<String>) -> Self {
        self.portfolio_url = Some(url.into());
        self
    }

    /// Set the biography.
    #[must_use]
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = Some(bio.into());
        self
    }

    /// Set the location.
    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set the three counters at once.
    #[must_use]
    pub fn totals(mut self, likes: i64, photos: i64, collections: i64) -> Self {
        self.total_likes = Some(likes);
        self.total_photos = Some(photos);
        self.total_collections = Some(collections);
        self
    }

    /// Set the avatar URLs.
    #[must_use]
    pub fn profile_image(mut self, image: ProfileImage) -> Self {
        self.profile_image = Some(image);
        self
    }

    /// Set the related URLs.
    #[must_use]
    pub fn links(mut self, links: UserLinks) -> Self {
        self.links = Some(links);
        self
    }

    /// Mutable access to the related URLs, creating an empty set if absent.
    pub fn links_mut(&mut self) -> &mut UserLinks {
        self.links.get_or_insert_with(UserLinks::default)
    }

    /// Validate required fields and produce the record.
    pub fn build(&self) -> Result<UserRecord, CodecError> {
        let id = match self.id.as_deref() {
            Some(id) if !id.is_empty() => id.to_owned(),
            _ => return Err(CodecError::MissingRequiredField(ID)),
        };
        let username = self
            .username
            .clone()
            .ok_or(CodecError::MissingRequiredField(USERNAME))?;
        let name = self
            .name
            .clone()
            .ok_or(CodecError::MissingRequiredField(NAME))?;
        Ok(UserRecord {
            id,
            username,
            name,
            updated_at: self.updated_at.clone(),
            portfolio_url: self.portfolio_url.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            total_likes: self.total_likes,
            total_photos: self.total_photos,
            total_collections: self.total_collections,
            profile_image: self.profile_image.clone(),
            links: self.links.clone(),
        })
    }
}
