//! Browser alias resolution
//!
//! Test authors write short names like `chrome`, `ie10` or
//! `android tablet landscape`; the platform expects fixed browser/viewport
//! identifiers. Checks run in order and the first match wins, so the mac
//! variants must be tested before plain `chrome`/`firefox`.

/// Resolve one browser alias to its platform identifier.
///
/// Matching is case-insensitive and substring based. Input that matches no
/// pattern is returned unchanged so canonical identifiers pass through.
///
/// ```
/// assert_eq!(rfml::browser::resolve_browser("IE10"), "ie10_1440_900");
/// assert_eq!(rfml::browser::resolve_browser("windows10_edge"), "windows10_edge");
/// ```
pub fn resolve_browser(alias: &str) -> String {
    let name = alias.to_lowercase();
    let has = |needle: &str| name.contains(needle);

    if has("mac") || has("osx") {
        if has("chrome") {
            return "osx_chrome_1440_900".to_string();
        } else if has("ff") || has("firefox") {
            return "osx_firefox_1440_900".to_string();
        }
    }

    if has("android") {
        let device = if has("tablet") { "tablet" } else { "phone" };
        let orientation = if has("landscape") { "landscape" } else { "portrait" };
        return format!("android_{}_{}", device, orientation);
    }

    let canonical = if has("chrome") {
        "chrome_1440_900"
    } else if has("firefox") {
        "firefox_1440_900"
    } else if has("safari") {
        "safari_1440_900"
    } else if has("ie8") {
        "ie8_1440_900"
    } else if has("ie9") {
        "ie9_1440_900"
    } else if has("ie10") {
        "ie10_1440_900"
    } else if has("ie") {
        "ie11_1440_900"
    } else if has("edge") {
        "windows10_edge"
    } else {
        return alias.to_string();
    };
    canonical.to_string()
}

/// Resolve every alias, keeping order.
pub fn resolve_browsers<S: AsRef<str>>(aliases: &[S]) -> Vec<String> {
    aliases.iter().map(|a| resolve_browser(a.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_aliases() {
        assert_eq!(resolve_browser("chrome"), "chrome_1440_900");
        assert_eq!(resolve_browser("firefox"), "firefox_1440_900");
        assert_eq!(resolve_browser("Safari"), "safari_1440_900");
        assert_eq!(resolve_browser("ie8"), "ie8_1440_900");
        assert_eq!(resolve_browser("ie9"), "ie9_1440_900");
        assert_eq!(resolve_browser("ie10"), "ie10_1440_900");
        assert_eq!(resolve_browser("ie"), "ie11_1440_900");
        assert_eq!(resolve_browser("ie11"), "ie11_1440_900");
    }

    #[test]
    fn mac_variants_win_over_desktop() {
        assert_eq!(resolve_browser("mac chrome"), "osx_chrome_1440_900");
        assert_eq!(resolve_browser("osx ff"), "osx_firefox_1440_900");
        assert_eq!(resolve_browser("mac firefox"), "osx_firefox_1440_900");
        // no mac browser matched, falls through to the desktop table
        assert_eq!(resolve_browser("mac safari"), "safari_1440_900");
    }

    #[test]
    fn android_device_and_orientation() {
        assert_eq!(resolve_browser("android tablet landscape"), "android_tablet_landscape");
        assert_eq!(resolve_browser("android"), "android_phone_portrait");
        assert_eq!(resolve_browser("Android Phone Landscape"), "android_phone_landscape");
    }

    #[test]
    fn edge_is_checked_after_ie() {
        // no "ie" substring, so these reach the edge check
        assert_eq!(resolve_browser("edge"), "windows10_edge");
        assert_eq!(resolve_browser("windows10_edge"), "windows10_edge");
    }

    #[test]
    fn unknown_aliases_pass_through() {
        assert_eq!(resolve_browser("foo"), "foo");
        assert_eq!(resolve_browser(""), "");
    }

    #[test]
    fn resolve_keeps_order() {
        assert_eq!(
            resolve_browsers(&["firefox", "chrome"]),
            vec!["firefox_1440_900".to_string(), "chrome_1440_900".to_string()]
        );
    }
}
