//! Collecting `<meta>` tags from the document head.

use sharecard_core::SocialMeta;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

/// `og:*` tags use `property`, `twitter:*` tags conventionally use `name`.
const META_SELECTOR: &str = "meta[property], meta[name]";

fn pair(element: &Element) -> Option<(String, String)> {
    let key = element
        .get_attribute("property")
        .or_else(|| element.get_attribute("name"))?;
    let content = element.get_attribute("content")?;
    Some((key, content))
}

/// Read the page's social-preview tags in document order.
pub fn read_social_meta(document: &Document) -> SocialMeta {
    let nodes = match document.query_selector_all(META_SELECTOR) {
        Ok(nodes) => nodes,
        Err(e) => {
            tracing::warn!("meta query failed: {:?}", e);
            return SocialMeta::default();
        }
    };
    let pairs = (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|element| pair(&element));
    SocialMeta::from_pairs(pairs)
}
