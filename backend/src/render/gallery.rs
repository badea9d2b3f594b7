//! Gallery page: one tile per collection.

use super::{brand_heading, escape, escape_attr, layout};
use crate::image::ImageUrlBuilder;
use crate::models::Collection;

/// Render the gallery for `collections`.
pub fn gallery_page(collections: &[Collection], images: &ImageUrlBuilder) -> String {
    let tiles: String = collections.iter().map(|c| tile(c, images)).collect();

    let body = format!(
        r#"<div class="mx-auto flex max-w-7xl flex-col py-20 px-10 2xl:px-0">
<header class="flex items-center justify-between">
<a href="/">{heading}</a>
</header>
<main class="bg-slate-100 p-10 shadow-xl shadow-rose-400/20">
<div class="grid space-x-3 md:grid-cols-2 lg:grid-cols-3 2xl:grid-cols-4">
{tiles}</div>
</main>
</div>"#,
        heading = brand_heading("mb-10 cursor-pointer text-4xl font-extrabold"),
        tiles = tiles,
    );

    layout(&body, "")
}

fn tile(collection: &Collection, images: &ImageUrlBuilder) -> String {
    format!(
        r#"<a href="{href}">
<div class="flex cursor-pointer flex-col items-center transition-all duration-200 hover:scale-105">
<img src="{src}" alt="" class="h-96 w-60 rounded-2xl object-cover">
<div class="p-5">
<h2 class="text-3xl">{title}</h2>
<p class="mt-2 text-sm text-gray-400">{description}</p>
</div>
</div>
</a>
"#,
        href = escape_attr(&collection.mint_path()),
        src = escape_attr(&images.src_for(&collection.main_image)),
        title = escape(&collection.title),
        description = escape(&collection.description),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageRef, Slug};

    fn collection(slug: &str, title: &str) -> Collection {
        Collection {
            id: slug.to_string(),
            title: title.to_string(),
            description: "A drop".to_string(),
            slug: Slug::new(slug),
            nft_collection_name: title.to_string(),
            address: "0xA".to_string(),
            preview_image: ImageRef::default(),
            main_image: ImageRef::from_ref("image-abc-100x100-png"),
            creator: None,
        }
    }

    #[test]
    fn test_one_tile_per_collection() {
        let images = ImageUrlBuilder::new("p", "production");
        let html = gallery_page(
            &[collection("ape-escape", "Ape Escape"), collection("moon-cats", "Moon Cats")],
            &images,
        );

        assert!(html.contains(r#"href="/nft/ape-escape""#));
        assert!(html.contains(r#"href="/nft/moon-cats""#));
        assert!(html.contains("https://cdn.sanity.io/images/p/production/abc-100x100.png"));
        assert_eq!(html.matches("<h2 ").count(), 2);
    }

    #[test]
    fn test_empty_gallery_renders_empty_grid() {
        let html = gallery_page(&[], &ImageUrlBuilder::new("p", "production"));
        assert!(html.contains("PAPAFAM"));
        assert!(!html.contains("<h2 "));
    }

    #[test]
    fn test_content_is_escaped() {
        let html = gallery_page(
            &[collection("x", "<script>alert(1)</script>")],
            &ImageUrlBuilder::new("p", "production"),
        );
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
