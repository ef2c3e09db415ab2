pub const APP_NAME: &str = "Unit Price Checker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Human-readable version string: the release tag when the binary was built
/// from one, otherwise the crate version.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{APP_VERSION}")
    }
}
