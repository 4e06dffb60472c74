pub const APP_NAME: &str = "Carbon Emissions Optimization Engine";
pub const APP_SHORT_NAME: &str = "CEOE";
/// Directory name under the platform data dir.
pub const APP_DIR_NAME: &str = "ceoe-dashboard";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_has_version_prefix() {
        let label = version_label();
        match GIT_TAG {
            Some(tag) => assert_eq!(label, tag),
            None => assert_eq!(label, format!("v{APP_VERSION}")),
        }
    }
}
