//! Combined header/footer template synthesis
//!
//! The print engine renders `headerTemplate` in a strip at the top of every
//! page. To place custom content at both the top and the bottom of the page,
//! both fragments are folded into that one template: a container sized to the
//! whole page holds the header fragment at its top edge and the footer
//! fragment at its bottom edge. Fragments are trusted HTML and are embedded
//! without escaping.

use crate::layout::{Length, PageDimensions};

/// Template used to blank out the engine's native footer when the footer
/// content has been folded into the header template
pub const EMPTY_FOOTER_TEMPLATE: &str = "<span></span>";

/// Builds a single header template from separate header and footer HTML
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HtmlTemplateBuilder {
    page: PageDimensions,
}

impl HtmlTemplateBuilder {
    /// Create a builder for a page of the given size in inches
    pub fn new(width: f64, height: f64) -> Self {
        Self::for_page(PageDimensions::new(
            Length::from_inches(width),
            Length::from_inches(height),
        ))
    }

    pub fn for_page(page: PageDimensions) -> Self {
        Self { page }
    }

    pub fn page(&self) -> PageDimensions {
        self.page
    }

    /// Compose the header and footer fragments into one template
    ///
    /// Only the boxes for fragments that are present and non-empty are
    /// emitted. Output is deterministic for identical inputs.
    pub fn create_template(&self, header_html: Option<&str>, footer_html: Option<&str>) -> String {
        let width = format_px(self.page.width.px());
        let height = format_px(self.page.height.px());

        let mut html = String::new();
        html.push_str("<style>");
        html.push_str("#header{padding:0!important;}");
        html.push_str(".hf-page{position:relative;margin:0;padding:0;box-sizing:border-box;");
        html.push_str(&format!("width:{}px;height:{}px;", width, height));
        html.push_str("font-size:12px;-webkit-print-color-adjust:exact;}");
        html.push_str(".hf-header,.hf-footer{position:absolute;left:0;right:0;overflow:hidden;}");
        html.push_str(".hf-header{top:0;}");
        // The footer's bottom edge sits on the page's bottom edge.
        html.push_str(&format!(".hf-footer{{top:{}px;transform:translateY(-100%);}}", height));
        html.push_str("</style>");

        html.push_str("<div class=\"hf-page\">");

        if let Some(header) = header_html.filter(|h| !h.is_empty()) {
            html.push_str("<div class=\"hf-header\">");
            html.push_str(header);
            html.push_str("</div>");
        }

        if let Some(footer) = footer_html.filter(|f| !f.is_empty()) {
            html.push_str("<div class=\"hf-footer\">");
            html.push_str(footer);
            html.push_str("</div>");
        }

        html.push_str("</div>");
        html
    }
}

/// Format a pixel value without trailing zeros
fn format_px(px: f64) -> String {
    // f64 Display never prints a trailing ".0"
    format!("{}", (px * 100.0).round() / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        let template = HtmlTemplateBuilder::new(8.5, 11.0).create_template(Some("<b>H</b>"), None);

        assert!(template.contains("<div class=\"hf-header\"><b>H</b></div>"));
        assert!(!template.contains("<div class=\"hf-footer\""));
        assert!(template.contains("width:816px;height:1056px;"));
    }

    #[test]
    fn test_footer_only() {
        let template = HtmlTemplateBuilder::new(8.5, 11.0).create_template(None, Some("<i>F</i>"));

        assert!(!template.contains("<div class=\"hf-header\">"));
        assert!(template.contains("<i>F</i></div>"));
        assert!(template.contains("top:1056px;"));
    }

    #[test]
    fn test_both_fragments_in_order() {
        let template =
            HtmlTemplateBuilder::new(8.5, 11.0).create_template(Some("<b>H</b>"), Some("<i>F</i>"));

        let header_at = template.find("<b>H</b>").unwrap();
        let footer_at = template.find("<i>F</i>").unwrap();
        assert!(header_at < footer_at);
    }

    #[test]
    fn test_fragments_not_escaped() {
        let html = "<span class=\"pageNumber\"></span> & <em>co</em>";
        let template = HtmlTemplateBuilder::new(8.5, 11.0).create_template(Some(html), None);
        assert!(template.contains(html));
    }

    #[test]
    fn test_empty_fragment_skipped() {
        let template = HtmlTemplateBuilder::new(8.5, 11.0).create_template(Some(""), Some("<i>F</i>"));
        assert!(!template.contains("<div class=\"hf-header\">"));
    }

    #[test]
    fn test_container_follows_page_size() {
        let template = HtmlTemplateBuilder::new(11.0, 17.0).create_template(Some("x"), Some("y"));
        assert!(template.contains("width:1056px;height:1632px;"));
        assert!(template.contains("top:1632px;"));
    }

    #[test]
    fn test_deterministic() {
        let builder = HtmlTemplateBuilder::new(8.27, 11.69);
        let first = builder.create_template(Some("<b>H</b>"), Some("<i>F</i>"));
        let second = builder.create_template(Some("<b>H</b>"), Some("<i>F</i>"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_px() {
        assert_eq!(format_px(816.0), "816");
        assert_eq!(format_px(793.92), "793.92");
        assert_eq!(format_px(793.9212), "793.92");
        assert_eq!(format_px(1e20), "100000000000000000000");
    }
}
