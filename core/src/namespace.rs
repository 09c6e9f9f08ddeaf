use log::debug;

/// Used when the host bundle identifier is unknown.
pub const FALLBACK_NAMESPACE: &str = "group.com.bee1an.easy";
pub const NAMESPACE_PREFIX: &str = "group.";
/// Suffix the widget extension adds to the app's bundle identifier.
pub const EXTENSION_SUFFIX: &str = ".EasyWidget";

/// Shared-store namespace for the given host bundle identifier.
///
/// Sideloading tools may rewrite the identifier (team prefix, suffixes), so the
/// namespace is derived from it rather than hardcoded: strip the extension
/// suffix and prefix the result with `group.`.
pub fn shared_namespace(bundle_id: Option<&str>) -> String {
    let bundle_id = match bundle_id.map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => {
            debug!("no bundle identifier, using {}", FALLBACK_NAMESPACE);
            return FALLBACK_NAMESPACE.to_string();
        }
    };

    let base = bundle_id.strip_suffix(EXTENSION_SUFFIX).unwrap_or(bundle_id);
    let namespace = format!("{}{}", NAMESPACE_PREFIX, base);
    debug!("bundle {} -> namespace {}", bundle_id, namespace);
    namespace
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_suffix_is_stripped() {
        assert_eq!(
            shared_namespace(Some("com.bee1an.easy.EasyWidget")),
            "group.com.bee1an.easy"
        );
    }

    #[test]
    fn test_rewritten_identifier_is_kept() {
        assert_eq!(
            shared_namespace(Some("ABCDE12345.com.bee1an.easy.EasyWidget")),
            "group.ABCDE12345.com.bee1an.easy"
        );
        assert_eq!(shared_namespace(Some("com.other.app")), "group.com.other.app");
    }

    #[test]
    fn test_missing_identifier_uses_fallback() {
        assert_eq!(shared_namespace(None), FALLBACK_NAMESPACE);
        assert_eq!(shared_namespace(Some("  ")), FALLBACK_NAMESPACE);
    }
}
