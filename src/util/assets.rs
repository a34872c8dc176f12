use std::{borrow::Cow, sync::OnceLock};

use dioxus_logger::tracing;
use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

/// Tailwind output; empty until `tailwind.css` has been compiled into `assets/`.
pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS.get_or_init(|| load_text("tailwind.css")).as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| svg_data_uri(&load_text("favicon.svg")))
        .as_str()
}

fn load_text(name: &str) -> String {
    let Some(asset) = load_asset(name) else {
        tracing::warn!("Embedded asset {name} is missing");
        return String::new();
    };
    String::from_utf8(asset.into_owned()).unwrap_or_else(|_| {
        tracing::warn!("Embedded asset {name} is not valid UTF-8");
        String::new()
    })
}

fn load_asset(name: &str) -> Option<Cow<'static, [u8]>> {
    EmbeddedAssets::get(name.trim_start_matches('/')).map(|file| file.data)
}

/// SVG is text, so it can travel percent-encoded instead of base64.
fn svg_data_uri(svg: &str) -> String {
    let mut uri = String::from("data:image/svg+xml,");
    for byte in svg.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b' ' | b'/'
            | b'=' | b':' | b';' | b',' | b'(' | b')' | b'\'' => uri.push(byte as char),
            _ => uri.push_str(&format!("%{byte:02X}")),
        }
    }
    uri
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_markup_is_percent_encoded() {
        let uri = svg_data_uri(r##"<svg fill="#fff"/>"##);
        assert_eq!(uri, "data:image/svg+xml,%3Csvg fill=%22%23fff%22/%3E");
    }

    #[test]
    fn missing_asset_loads_as_empty_text() {
        assert!(load_text("does-not-exist.css").is_empty());
    }
}
