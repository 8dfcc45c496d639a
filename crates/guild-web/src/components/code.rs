use askama::Template;

/// Preformatted code block. Content is HTML-escaped.
#[derive(Debug, Clone, Template)]
#[template(path = "components/code.html")]
pub struct Code {
    pub code: String,
    pub language: Option<String>,
}

impl Code {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: None,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_content() {
        let html = Code::new("<script>alert(1)</script>").render().unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains("language-"));
    }

    #[test]
    fn test_language_class() {
        let html = Code::new("fn main() {}").language("rust").render().unwrap();
        assert!(html.contains(r#"class="language-rust""#));
    }
}
