//! JSON settings files
//!
//! A settings file holds the same options as the builder setters so a print
//! configuration can be kept alongside the documents it is used for:
//!
//! ```json
//! {
//!   "paperFormat": "a4",
//!   "margin": 0.5,
//!   "printBackground": true,
//!   "footerHtml": "Page [page] of [pages]",
//!   "expandPlaceholders": true
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::PdfRequestBuilder;
use crate::error::{Error, Result};
use crate::layout::{Length, Margins, PaperFormat};
use crate::placeholders::expand_placeholders;

/// Print options loaded from a settings file
///
/// Only fields present in the file are applied; everything else leaves the
/// builder as it was.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PrintSettings {
    pub landscape: Option<bool>,
    pub display_header_footer: Option<bool>,
    pub print_background: Option<bool>,
    pub scale: Option<f64>,
    /// Named paper size, applied before `paperWidth`/`paperHeight`
    pub paper_format: Option<PaperFormat>,
    pub paper_width: Option<f64>,
    pub paper_height: Option<f64>,
    /// Uniform margin, applied before the per-side margins
    pub margin: Option<f64>,
    pub margin_top: Option<f64>,
    pub margin_bottom: Option<f64>,
    pub margin_left: Option<f64>,
    pub margin_right: Option<f64>,
    pub page_ranges: Option<String>,
    pub ignore_invalid_page_ranges: Option<bool>,
    pub header_template: Option<String>,
    pub footer_template: Option<String>,
    pub header_html: Option<String>,
    pub footer_html: Option<String>,
    #[serde(rename = "preferCSSPageSize")]
    pub prefer_css_page_size: Option<bool>,
    /// Expand `[page]`-style placeholders in the header/footer HTML
    pub expand_placeholders: bool,
    /// Text substituted for `[date]`; only used when `expandPlaceholders` is set
    pub date: Option<String>,
}

impl PrintSettings {
    /// Load settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }

        let contents = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&contents)?;
        debug!(path = %path.display(), "loaded print settings");
        Ok(settings)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply every option present in these settings to `builder`
    pub fn apply_to(&self, builder: &mut PdfRequestBuilder) {
        if let Some(format) = self.paper_format {
            builder.set_paper_format(format);
        }
        if let Some(margin) = self.margin {
            builder.set_margins(Margins::uniform(Length::from_inches(margin)));
        }

        // Setters treat None as "unset", so skip absent fields rather than
        // clearing what the builder already holds.
        if let Some(v) = self.landscape {
            builder.set_landscape(v);
        }
        if let Some(v) = self.display_header_footer {
            builder.set_display_header_footer(v);
        }
        if let Some(v) = self.print_background {
            builder.set_print_background(v);
        }
        if let Some(v) = self.scale {
            builder.set_scale(v);
        }
        if let Some(v) = self.paper_width {
            builder.set_paper_width(v);
        }
        if let Some(v) = self.paper_height {
            builder.set_paper_height(v);
        }
        if let Some(v) = self.margin_top {
            builder.set_margin_top(v);
        }
        if let Some(v) = self.margin_bottom {
            builder.set_margin_bottom(v);
        }
        if let Some(v) = self.margin_left {
            builder.set_margin_left(v);
        }
        if let Some(v) = self.margin_right {
            builder.set_margin_right(v);
        }
        if let Some(v) = &self.page_ranges {
            builder.set_page_ranges(v.as_str());
        }
        if let Some(v) = self.ignore_invalid_page_ranges {
            builder.set_ignore_invalid_page_ranges(v);
        }
        if let Some(v) = &self.header_template {
            builder.set_header_template(v.as_str());
        }
        if let Some(v) = &self.footer_template {
            builder.set_footer_template(v.as_str());
        }
        if self.date.is_some() && !self.expand_placeholders {
            debug!("ignoring date: placeholder expansion is off");
        }
        if let Some(v) = &self.header_html {
            builder.set_header_html(self.render_html(v));
        }
        if let Some(v) = &self.footer_html {
            builder.set_footer_html(self.render_html(v));
        }
        if let Some(v) = self.prefer_css_page_size {
            builder.set_prefer_css_page_size(v);
        }
    }

    /// Build a fresh builder configured from these settings
    pub fn to_builder(&self) -> PdfRequestBuilder {
        let mut builder = PdfRequestBuilder::new();
        self.apply_to(&mut builder);
        builder
    }

    fn render_html(&self, html: &str) -> String {
        if self.expand_placeholders {
            expand_placeholders(html, self.date.as_deref())
        } else {
            html.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_settings_change_nothing() {
        let settings = PrintSettings::from_json("{}").unwrap();
        assert_eq!(settings, PrintSettings::default());

        let mut builder = PdfRequestBuilder::new();
        builder.set_scale(1.5);
        settings.apply_to(&mut builder);
        assert_eq!(builder.request().scale, Some(1.5));
    }

    #[test]
    fn test_format_then_explicit_size() {
        let settings = PrintSettings::from_json(
            r#"{"paperFormat": "legal", "paperHeight": 13, "margin": 0.5, "marginTop": 1}"#,
        )
        .unwrap();

        let request = settings.to_builder().build_pdf_request();
        assert_eq!(request.paper_width, Some(8.5));
        assert_eq!(request.paper_height, Some(13.0));
        assert_eq!(request.margin_top, Some(1.0));
        assert_eq!(request.margin_bottom, Some(0.5));
    }

    #[test]
    fn test_camel_case_fields() {
        let settings = PrintSettings::from_json(
            r#"{"printBackground": true, "preferCSSPageSize": true, "pageRanges": "2-4"}"#,
        )
        .unwrap();

        let request = settings.to_builder().build_pdf_request();
        assert_eq!(request.print_background, Some(true));
        assert_eq!(request.prefer_css_page_size, Some(true));
        assert_eq!(request.page_ranges.as_deref(), Some("2-4"));
    }

    #[test]
    fn test_placeholders_expanded_when_enabled() {
        let settings = PrintSettings::from_json(
            r#"{"footerHtml": "Page [page] - [date]", "expandPlaceholders": true, "date": "May 1, 2025"}"#,
        )
        .unwrap();

        let builder = settings.to_builder();
        assert_eq!(
            builder.footer_html(),
            Some("Page <span class=\"pageNumber\"></span> - May 1, 2025")
        );
    }

    #[test]
    fn test_placeholders_kept_when_disabled() {
        let settings = PrintSettings::from_json(r#"{"headerHtml": "[title]"}"#).unwrap();
        assert_eq!(settings.to_builder().header_html(), Some("[title]"));
    }

    #[test]
    fn test_date_needs_placeholder_expansion() {
        let settings = PrintSettings::from_json(
            r#"{"footerHtml": "Printed [date]", "date": "May 1, 2025"}"#,
        )
        .unwrap();

        assert_eq!(settings.to_builder().footer_html(), Some("Printed [date]"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = PrintSettings::from_json(r#"{"papersize": [1, 2]}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = PrintSettings::from_file(Path::new("no-such-settings.json"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }
}
