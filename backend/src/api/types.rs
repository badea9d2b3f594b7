//! Types shared with the wasm frontend.
//!
//! The mint page embeds [`MintPageProps`] as JSON for the client widget.
//! Field names match the frontend's `MintPageProps` exactly.

use serde::{Deserialize, Serialize};

use crate::image::ImageUrlBuilder;
use crate::models::Collection;

/// Props injected into the mint page for the client widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintPageProps {
    /// Collection slug (the page identifier)
    pub slug: String,

    /// Display title
    pub title: String,

    /// Collection-level name
    pub nft_collection_name: String,

    pub description: String,

    /// Drop contract address, passed to the SDK as-is
    pub address: String,

    /// Resolved main image URL (empty when unresolvable)
    pub main_image_url: String,
}

impl MintPageProps {
    pub fn new(collection: &Collection, images: &ImageUrlBuilder) -> Self {
        Self {
            slug: collection.slug.current.clone(),
            title: collection.title.clone(),
            nft_collection_name: collection.nft_collection_name.clone(),
            description: collection.description.clone(),
            address: collection.address.clone(),
            main_image_url: images.src_for(&collection.main_image),
        }
    }

    /// Serialize for embedding inside a `<script type="application/json">`.
    ///
    /// `<` is written as `\u003c` so the payload can never close the tag.
    pub fn to_script_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageRef, Slug};

    fn collection() -> Collection {
        Collection {
            id: "1".into(),
            title: "Ape </script> Escape".into(),
            description: "Apes".into(),
            slug: Slug::new("ape-escape"),
            nft_collection_name: "Papafam Apes".into(),
            address: "0x6C5AE80Bcf0Ec85002FE8eb3Ce267232614127C0".into(),
            preview_image: ImageRef::default(),
            main_image: ImageRef::from_url("https://example.com/main.png"),
            creator: None,
        }
    }

    #[test]
    fn test_props_camel_case() {
        let props = MintPageProps::new(&collection(), &ImageUrlBuilder::new("p", "d"));
        let value = serde_json::to_value(&props).unwrap();

        assert_eq!(value["nftCollectionName"], "Papafam Apes");
        assert_eq!(value["mainImageUrl"], "https://example.com/main.png");
        assert_eq!(value["address"], "0x6C5AE80Bcf0Ec85002FE8eb3Ce267232614127C0");
    }

    #[test]
    fn test_script_json_cannot_close_tag() {
        let props = MintPageProps::new(&collection(), &ImageUrlBuilder::new("p", "d"));
        let json = props.to_script_json().unwrap();

        assert!(!json.contains("</script>"));
        let back: MintPageProps = serde_json::from_str(&json).unwrap();
        assert_eq!(back.title, "Ape </script> Escape");
    }
}
