use regex::Regex;
use std::sync::OnceLock;

fn leading_fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Optional language tag after the fence, e.g. ```json
    RE.get_or_init(|| Regex::new(r"^```[A-Za-z0-9_-]*[ \t]*\r?\n?").expect("valid fence regex"))
}

fn trailing_fence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\r?\n?```$").expect("valid fence regex"))
}

/// Removes one Markdown code fence wrapped around a response body.
///
/// Model-backed services sometimes relay their output verbatim, fences and all.
pub fn strip_code_fences(text: &str) -> String {
    let out = text.trim();
    let out = leading_fence_re().replace(out, "");
    let out = trailing_fence_re().replace(&out, "");
    out.trim().to_string()
}
