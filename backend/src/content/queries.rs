//! GROQ query text.
//!
//! Both queries project the same document shape so that [`Collection`]
//! deserializes from either.
//!
//! [`Collection`]: crate::models::Collection

/// Fields shared by every collection projection.
const COLLECTION_PROJECTION: &str = r#"{
  _id,
  title,
  description,
  nftCollectionName,
  address,
  slug {
    current
  },
  mainImage {
    asset
  },
  previewImage {
    asset
  },
  creator-> {
    _id,
    name,
    address,
    slug {
      current
    },
    image {
      asset
    },
    bio
  }
}"#;

/// Every collection, newest first.
pub fn all_collections() -> String {
    format!(
        r#"*[_type == "collection"] | order(_createdAt desc) {}"#,
        COLLECTION_PROJECTION
    )
}

/// One collection by slug, bound to the `$id` parameter.
pub fn collection_by_id() -> String {
    format!(
        r#"*[_type == "collection" && slug.current == $id][0] {}"#,
        COLLECTION_PROJECTION
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queries_are_not_empty() {
        assert!(all_collections().starts_with(r#"*[_type == "collection"]"#));
        assert!(collection_by_id().contains("slug.current == $id"));
        assert!(collection_by_id().contains("[0]"));
    }

    #[test]
    fn test_creator_is_dereferenced() {
        assert!(all_collections().contains("creator->"));
        assert!(collection_by_id().contains("creator->"));
    }
}
