//! Content-store documents.
//!
//! These mirror the Sanity document shapes projected by the queries in
//! [`crate::content::queries`]. They are read-only from this application's
//! point of view: fetched per request, rendered, then dropped.

use serde::{Deserialize, Deserializer, Serialize};

/// GROQ projections return `null` for unset fields; read those as the default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Shared fragments
// =============================================================================

/// A URL-friendly identifier, stored by Sanity as `{ "current": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self { current: current.into() }
    }
}

/// Pointer to an image asset.
///
/// Depending on the projection the asset is either a bare reference
/// (`_ref`) or already expanded with its `url`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An image field on a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    #[serde(default)]
    pub asset: Option<ImageAsset>,
}

impl ImageRef {
    /// Image pointing at a Sanity asset reference.
    pub fn from_ref(reference: impl Into<String>) -> Self {
        Self {
            asset: Some(ImageAsset { reference: Some(reference.into()), url: None }),
        }
    }

    /// Image whose asset has already been expanded to a URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            asset: Some(ImageAsset { reference: None, url: Some(url.into()) }),
        }
    }
}

// =============================================================================
// Documents
// =============================================================================

/// The person or studio behind a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Creator's wallet address
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub slug: Option<Slug>,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// A curated NFT drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub slug: Slug,
    /// Name shown next to the preview image on the mint page
    #[serde(default, deserialize_with = "null_as_default")]
    pub nft_collection_name: String,
    /// Drop contract address. Never validated here; the SDK reports bad ones.
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preview_image: ImageRef,
    #[serde(default, deserialize_with = "null_as_default")]
    pub main_image: ImageRef,
    #[serde(default)]
    pub creator: Option<Creator>,
}

impl Collection {
    /// Path of this collection's mint page.
    pub fn mint_path(&self) -> String {
        format!("/nft/{}", self.slug.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_deserialization() {
        let json = r#"{
            "_id": "0b2f6e8c",
            "title": "Ape Escape",
            "description": "Apes, escaping.",
            "nftCollectionName": "Papafam Apes",
            "address": "0x6C5AE80Bcf0Ec85002FE8eb3Ce267232614127C0",
            "slug": { "current": "ape-escape" },
            "mainImage": { "asset": { "_ref": "image-abc123-2000x3000-png", "_type": "reference" } },
            "previewImage": { "asset": { "url": "https://cdn.example.com/preview.png" } },
            "creator": {
                "_id": "creator-1",
                "name": "Papa",
                "address": "0x0000000000000000000000000000000000000001",
                "slug": { "current": "papa" }
            }
        }"#;

        let collection: Collection = serde_json::from_str(json).unwrap();

        assert_eq!(collection.id, "0b2f6e8c");
        assert_eq!(collection.nft_collection_name, "Papafam Apes");
        assert_eq!(collection.mint_path(), "/nft/ape-escape");
        assert_eq!(
            collection.main_image.asset.as_ref().and_then(|a| a.reference.as_deref()),
            Some("image-abc123-2000x3000-png")
        );
        assert_eq!(
            collection.preview_image.asset.as_ref().and_then(|a| a.url.as_deref()),
            Some("https://cdn.example.com/preview.png")
        );

        let creator = collection.creator.unwrap();
        assert_eq!(creator.name, "Papa");
        assert!(creator.bio.is_none());
    }

    #[test]
    fn test_missing_images_default_to_empty() {
        let json = r#"{
            "_id": "x",
            "title": "Bare",
            "slug": { "current": "bare" },
            "nftCollectionName": "Bare",
            "address": "0x1"
        }"#;

        let collection: Collection = serde_json::from_str(json).unwrap();
        assert!(collection.main_image.asset.is_none());
        assert!(collection.creator.is_none());
        assert_eq!(collection.description, "");
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let json = r#"{
            "_id": "x",
            "title": "Half Done",
            "description": null,
            "slug": { "current": "half-done" },
            "nftCollectionName": "Half Done",
            "address": "0x1",
            "mainImage": null,
            "previewImage": null,
            "creator": { "_id": "c", "name": null, "address": null, "slug": null, "image": null, "bio": null }
        }"#;

        let collection: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(collection.description, "");
        assert_eq!(collection.main_image, ImageRef::default());
        assert_eq!(collection.preview_image, ImageRef::default());

        let creator = collection.creator.unwrap();
        assert_eq!(creator.name, "");
        assert!(creator.slug.is_none());
    }

    #[test]
    fn test_null_creator_is_none() {
        let json = r#"{
            "_id": "x",
            "title": "Solo",
            "slug": { "current": "solo" },
            "nftCollectionName": "Solo",
            "address": "0x1",
            "creator": null
        }"#;

        let collection: Collection = serde_json::from_str(json).unwrap();
        assert!(collection.creator.is_none());
    }
}
