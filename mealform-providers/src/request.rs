/// A JSON POST, the only request shape the menu client sends.
#[derive(Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub json: String,
}

impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The body carries the user's pantry text; log its size, not its content.
        f.debug_struct("HttpRequest")
            .field("url", &self.url)
            .field("headers", &self.headers)
            .field("json_len", &self.json.len())
            .finish()
    }
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> HttpRequest {
        HttpRequest {
            url: "https://example.com/menu".into(),
            headers: vec![("Content-Type".into(), "application/json".into())],
            json: json.into(),
        }
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let req = request("{}");
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("accept"), None);
    }

    #[test]
    fn debug_hides_ingredient_text() {
        let json = r#"{"ingredients":"secret pantry","allowExtras":false}"#;
        let s = format!("{:?}", request(json));
        assert!(!s.contains("secret pantry"));
        assert!(s.contains(&format!("json_len: {}", json.len())));
        assert!(s.contains("https://example.com/menu"));
    }
}
