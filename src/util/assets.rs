use std::{borrow::Cow, sync::OnceLock};

use rust_embed::RustEmbed;

/// Embed the entire `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static CONTAINERS_JSON: OnceLock<String> = OnceLock::new();
static PORTS_JSON: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/containers.json` as a static string.
pub fn containers_json() -> &'static str {
    CONTAINERS_JSON
        .get_or_init(|| load_text("/assets/containers.json"))
        .as_str()
}

/// Returns the contents of `assets/ports.json` as a static string.
pub fn ports_json() -> &'static str {
    PORTS_JSON
        .get_or_init(|| load_text("/assets/ports.json"))
        .as_str()
}

fn load_text(path: &str) -> String {
    let asset = load_asset(path);
    String::from_utf8(asset.into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {path} is not valid UTF-8"))
}

fn load_asset(path: &str) -> Cow<'static, [u8]> {
    let canonical = canonical_asset_path(path);
    EmbeddedAssets::get(&canonical)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {path}"))
}

fn canonical_asset_path(path: &str) -> String {
    let trimmed = path.trim_start_matches('/');
    if let Some(rest) = trimmed.strip_prefix("assets/") {
        rest.to_string()
    } else {
        trimmed.to_string()
    }
}
