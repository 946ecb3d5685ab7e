/// Markers of interstitials served instead of real content.
const BLOCK_PATTERNS: [&str; 14] = [
    "enter the characters you see below",
    "to discuss automated access to amazon data",
    "api-services-support@amazon.com",
    "verify you are a human",
    "please complete the captcha",
    "solve this captcha",
    "captcha challenge",
    "cf-browser-verification",
    "cf-captcha-container",
    "px-captcha",
    "blocked by cloudflare",
    "please enable javascript and cookies",
    "suspicious activity",
    "access denied",
];

/// First anti-bot marker found in `body`, if any.
///
/// Only used to explain an empty page in the logs.
pub fn block_hint(body: &str) -> Option<&'static str> {
    let lower = body.to_ascii_lowercase();
    BLOCK_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lower.contains(pattern))
}
