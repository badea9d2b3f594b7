//! Image URL resolution.
//!
//! Sanity stores image fields as asset references such as
//! `image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg`. The CDN serves them at
//! `https://cdn.sanity.io/images/{project}/{dataset}/{id}-{w}x{h}.{format}`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::SanityConfig;
use crate::models::ImageRef;

const CDN_BASE: &str = "https://cdn.sanity.io/images";

static ASSET_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^image-([A-Za-z0-9]+)-(\d+x\d+)-([a-z0-9]+)$").expect("asset ref pattern")
});

/// Builds CDN URLs for image references of one project/dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn from_config(config: &SanityConfig) -> Self {
        Self::new(&config.project_id, &config.dataset)
    }

    /// Resolve an image field to a displayable URL.
    ///
    /// Already-expanded assets are returned untouched. Returns `None` when
    /// the field has no asset or the reference is not an image reference.
    pub fn url_for(&self, image: &ImageRef) -> Option<String> {
        let asset = image.asset.as_ref()?;
        if let Some(url) = &asset.url {
            return Some(url.clone());
        }

        let reference = asset.reference.as_deref()?;
        let caps = ASSET_REF.captures(reference)?;
        Some(format!(
            "{}/{}/{}/{}-{}.{}",
            CDN_BASE, self.project_id, self.dataset, &caps[1], &caps[2], &caps[3]
        ))
    }

    /// Like [`url_for`](Self::url_for) but falls back to an empty string,
    /// which renders as a broken image rather than failing the page.
    pub fn src_for(&self, image: &ImageRef) -> String {
        self.url_for(image).unwrap_or_else(|| {
            tracing::warn!(?image, "unresolvable image reference");
            String::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("abc123", "production")
    }

    #[test]
    fn test_resolves_asset_reference() {
        let image = ImageRef::from_ref("image-Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000-jpg");
        assert_eq!(
            builder().url_for(&image).as_deref(),
            Some("https://cdn.sanity.io/images/abc123/production/Tb9Ew8CXIwaY6R1kjMvI0uRR-2000x3000.jpg")
        );
    }

    #[test]
    fn test_expanded_url_passes_through() {
        let image = ImageRef::from_url("https://example.com/a.png");
        assert_eq!(builder().url_for(&image).as_deref(), Some("https://example.com/a.png"));
    }

    #[test]
    fn test_unresolvable_references() {
        assert_eq!(builder().url_for(&ImageRef::default()), None);
        assert_eq!(builder().url_for(&ImageRef::from_ref("file-abc-pdf")), None);
        assert_eq!(builder().src_for(&ImageRef::from_ref("image-abc")), "");
    }
}
