//! Stylesheets and icon compiled into the binary.

use std::{borrow::Cow, path::Path, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

pub fn main_css() -> &'static str {
    static CSS: OnceLock<String> = OnceLock::new();
    CSS.get_or_init(|| embedded_text("main.css"))
}

pub fn tailwind_css() -> &'static str {
    static CSS: OnceLock<String> = OnceLock::new();
    CSS.get_or_init(|| embedded_text("tailwind.css"))
}

/// `data:` URI so the desktop webview needs no asset server for the icon.
pub fn favicon_data_uri() -> &'static str {
    static URI: OnceLock<String> = OnceLock::new();
    URI.get_or_init(|| {
        let bytes = embedded_bytes("favicon.svg");
        format!("data:{};base64,{}", mime_type("favicon.svg"), STANDARD.encode(bytes.as_ref()))
    })
}

fn embedded_bytes(name: &str) -> Cow<'static, [u8]> {
    match EmbeddedAssets::get(name) {
        Some(file) => file.data,
        None => {
            tracing::warn!(asset = name, "missing embedded asset");
            Cow::Borrowed(&[])
        }
    }
}

fn embedded_text(name: &str) -> String {
    String::from_utf8(embedded_bytes(name).into_owned()).unwrap_or_else(|_| {
        tracing::warn!(asset = name, "embedded asset is not valid UTF-8");
        String::new()
    })
}

fn mime_type(name: &str) -> &'static str {
    match Path::new(name).extension().and_then(|ext| ext.to_str()) {
        Some("css") => "text/css",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheets_are_embedded() {
        assert!(main_css().contains(".app-shell"));
        assert!(tailwind_css().contains(".rounded-xl"));
    }

    #[test]
    fn favicon_is_an_svg_data_uri() {
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
        assert!(favicon_data_uri().len() > "data:image/svg+xml;base64,".len());
    }

    #[test]
    fn mime_types_follow_extension() {
        assert_eq!(mime_type("main.css"), "text/css");
        assert_eq!(mime_type("logo.PNG"), "application/octet-stream");
        assert_eq!(mime_type("README"), "application/octet-stream");
    }
}
