//! Mint page.
//!
//! The left panel (preview image, name, description) is rendered here. The
//! right panel is an empty `#mint-app` mount point that the wasm widget
//! fills in from the embedded `#mint-page-props` JSON.

use super::{brand_heading, escape, escape_attr, layout};
use crate::api::types::MintPageProps;
use crate::image::ImageUrlBuilder;
use crate::models::Collection;

/// Id of the element the wasm widget mounts into.
pub const MOUNT_ID: &str = "mint-app";

/// Id of the props script element.
pub const PROPS_ID: &str = "mint-page-props";

/// Module path of the wasm-bindgen JS glue under `/pkg`.
pub const WIDGET_MODULE: &str = "/pkg/nftdrop_frontend.js";

/// Render the mint page for `collection`.
pub fn mint_page(
    collection: &Collection,
    images: &ImageUrlBuilder,
) -> Result<String, serde_json::Error> {
    let props = MintPageProps::new(collection, images);

    let body = format!(
        r#"<div class="flex h-screen flex-col lg:grid lg:grid-cols-10">
<div class="bg-gradient-to-br from-cyan-800 to-rose-500 lg:col-span-4">
<div class="flex flex-col items-center justify-center py-2 lg:min-h-screen">
<div class="rounded-xl bg-gradient-to-br from-yellow-400 to-purple-600 p-2">
<img class="w-44 rounded-xl object-cover lg:h-96 lg:w-72" src="{preview}" alt="">
</div>
<div class="space-y-2 p-5 text-center">
<h1 class="text-4xl font-bold text-white">{name}</h1>
<h2 class="text-xl text-gray-300">{description}</h2>
</div>
</div>
</div>
<div id="{mount}" class="flex flex-1 flex-col p-12 lg:col-span-6">
<noscript>
<header class="flex items-center justify-between">{heading}</header>
<hr class="my-2 border">
<p class="mt-10 text-center text-xl">Enable JavaScript and connect a wallet to mint from {title}.</p>
</noscript>
</div>
</div>"#,
        preview = escape_attr(&images.src_for(&collection.preview_image)),
        name = escape(&collection.nft_collection_name),
        description = escape(&collection.description),
        mount = MOUNT_ID,
        heading = brand_heading("w-52 text-xl font-extralight sm:w-80"),
        title = escape(&collection.title),
    );

    let scripts = format!(
        r#"<script id="{id}" type="application/json">{json}</script>
<script type="module">import init from '{module}'; init();</script>"#,
        id = PROPS_ID,
        json = props.to_script_json()?,
        module = WIDGET_MODULE,
    );

    Ok(layout(&body, &scripts))
}
