//! Markdown rendering and the error fallback panel.

use pulldown_cmark::{html, Options, Parser};

/// Fixed fallback panel shown when a document cannot be loaded.
///
/// The text is static; nothing from the failure is interpolated into it.
pub const ERROR_PANEL: &str = r#"<div class="alert alert-danger" role="alert">
  <h4 class="alert-title">Fehler beim Laden</h4>
  <div class="text-secondary">Der Inhalt konnte nicht geladen werden. Bitte versuchen Sie es später erneut.</div>
</div>"#;

/// Render markdown to an HTML fragment.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_heading_and_paragraph() {
        let html = to_html("# Title\n\nHello");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<p>Hello</p>"));
    }

    #[test]
    fn test_to_html_tables_enabled() {
        let html = to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_error_panel_text() {
        assert!(ERROR_PANEL.contains("Fehler beim Laden"));
        assert!(ERROR_PANEL.contains("Bitte versuchen Sie es später erneut."));
    }
}
