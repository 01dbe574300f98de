//! User agent generation

use rand::seq::SliceRandom;

/// Generate a random but realistic browser user agent string.
///
/// The DuckDuckGo lite endpoint serves a stripped-down page to anything that
/// does not look like a browser, so requests carry a plausible desktop UA.
pub fn generate_user_agent() -> String {
    let mut rng = rand::thread_rng();

    let chrome_versions = ["120.0.0.0", "121.0.0.0", "122.0.0.0", "123.0.0.0"];

    let os_strings = [
        "Windows NT 10.0; Win64; x64",
        "Macintosh; Intel Mac OS X 10_15_7",
        "X11; Linux x86_64",
    ];

    let os = os_strings.choose(&mut rng).unwrap();
    let chrome = chrome_versions.choose(&mut rng).unwrap();

    format!(
        "Mozilla/5.0 ({}) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
        os, chrome
    )
}

/// Standard accept header for HTML requests
pub fn accept_html() -> &'static str {
    "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_agent() {
        let ua = generate_user_agent();
        assert!(ua.starts_with("Mozilla/5.0"));
        assert!(ua.len() > 50);
    }
}
