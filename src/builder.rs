//! Fluent builder for print requests
//!
//! Each setter stores its value on the builder's working request and returns
//! the same builder, so calls can be chained:
//!
//! ```
//! use devtools_pdf::PdfRequestBuilder;
//!
//! let mut builder = PdfRequestBuilder::new();
//! builder
//!     .set_landscape(true)
//!     .set_margin_top(0.4)
//!     .set_page_ranges("1-3,5")
//!     .set_footer_html("<span class=\"pageNumber\"></span>");
//!
//! let request = builder.build_pdf_request();
//! assert_eq!(request.display_header_footer, Some(true));
//! ```

use tracing::debug;

use crate::error::{Error, Result};
use crate::layout::{Margins, PaperFormat};
use crate::request::PrintToPdfRequest;
use crate::template::{HtmlTemplateBuilder, EMPTY_FOOTER_TEMPLATE};
use crate::value::{OptionalValue, PaperDimension};

/// Paper width used for template sizing when none is set (US Letter)
pub const DEFAULT_PAPER_WIDTH: f64 = 8.5;

/// Paper height used for template sizing when none is set (US Letter)
pub const DEFAULT_PAPER_HEIGHT: f64 = 11.0;

/// Accumulates print options and produces [`PrintToPdfRequest`] snapshots
#[derive(Debug, Clone, Default)]
pub struct PdfRequestBuilder {
    request: PrintToPdfRequest,
    header_html: Option<String>,
    footer_html: Option<String>,
}

impl PdfRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The working request as currently configured (before header/footer synthesis)
    pub fn request(&self) -> &PrintToPdfRequest {
        &self.request
    }

    pub fn header_html(&self) -> Option<&str> {
        self.header_html.as_deref()
    }

    pub fn footer_html(&self) -> Option<&str> {
        self.footer_html.as_deref()
    }

    /// Whether non-empty header or footer HTML is staged
    pub fn has_header_footer_html(&self) -> bool {
        non_empty(&self.header_html).is_some() || non_empty(&self.footer_html).is_some()
    }

    /// Produce an independent request from the current configuration
    ///
    /// When header or footer HTML is staged, both are folded into a single
    /// header template sized to the paper (US Letter if unset), header/footer
    /// display is forced on, and the native footer is blanked if footer HTML
    /// was given. The builder itself is left unchanged.
    pub fn build_pdf_request(&self) -> PrintToPdfRequest {
        let mut request = self.request.clone();

        let header = non_empty(&self.header_html);
        let footer = non_empty(&self.footer_html);

        if header.is_some() || footer.is_some() {
            let width = request.paper_width.unwrap_or(DEFAULT_PAPER_WIDTH);
            let height = request.paper_height.unwrap_or(DEFAULT_PAPER_HEIGHT);

            debug!(
                width,
                height,
                has_header = header.is_some(),
                has_footer = footer.is_some(),
                "synthesizing header/footer template"
            );

            let template = HtmlTemplateBuilder::new(width, height).create_template(header, footer);
            request.display_header_footer = Some(true);
            request.header_template = Some(template);
            if footer.is_some() {
                request.footer_template = Some(EMPTY_FOOTER_TEMPLATE.to_string());
            }
        }

        request
    }

    pub fn set_landscape(&mut self, landscape: impl OptionalValue<bool>) -> &mut Self {
        self.request.landscape = landscape.into_optional();
        self
    }

    /// Explicitly toggle the engine's header/footer rendering
    ///
    /// Staged header or footer HTML forces this back on at build time.
    pub fn set_display_header_footer(&mut self, display: impl OptionalValue<bool>) -> &mut Self {
        self.request.display_header_footer = display.into_optional();
        self
    }

    pub fn set_print_background(&mut self, print_background: impl OptionalValue<bool>) -> &mut Self {
        self.request.print_background = print_background.into_optional();
        self
    }

    pub fn set_scale(&mut self, scale: impl OptionalValue<f64>) -> &mut Self {
        self.request.scale = scale.into_optional();
        self
    }

    /// Paper width in inches
    pub fn set_paper_width(&mut self, width: impl OptionalValue<f64>) -> &mut Self {
        self.request.paper_width = width.into_optional();
        self
    }

    /// Paper height in inches
    pub fn set_paper_height(&mut self, height: impl OptionalValue<f64>) -> &mut Self {
        self.request.paper_height = height.into_optional();
        self
    }

    /// Set width and height from a `[width, height]` collection
    ///
    /// Items are taken in iteration order, so keyed collections such as map
    /// values work too. A `None` item unsets that dimension. Anything after
    /// the second item is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if fewer than two items are given;
    /// the builder is not modified in that case.
    pub fn set_paper_size<I>(&mut self, paper_size: I) -> Result<&mut Self>
    where
        I: IntoIterator,
        I::Item: PaperDimension,
    {
        let mut values = paper_size.into_iter().map(|value| value.into_dimension());

        let (width, height) = match (values.next(), values.next()) {
            (Some(width), Some(height)) => (width, height),
            _ => {
                return Err(Error::InvalidArgument(
                    "Invalid paper size. Expected both width and height.".to_string(),
                ))
            }
        };

        Ok(self.set_paper_width(width).set_paper_height(height))
    }

    /// Set the paper size from a named format (portrait)
    pub fn set_paper_format(&mut self, format: PaperFormat) -> &mut Self {
        let page = format.dimensions();
        self.set_paper_width(page.width.inches())
            .set_paper_height(page.height.inches())
    }

    /// Margin above the page content, in inches
    pub fn set_margin_top(&mut self, margin: impl OptionalValue<f64>) -> &mut Self {
        self.request.margin_top = margin.into_optional();
        self
    }

    pub fn set_margin_bottom(&mut self, margin: impl OptionalValue<f64>) -> &mut Self {
        self.request.margin_bottom = margin.into_optional();
        self
    }

    pub fn set_margin_left(&mut self, margin: impl OptionalValue<f64>) -> &mut Self {
        self.request.margin_left = margin.into_optional();
        self
    }

    pub fn set_margin_right(&mut self, margin: impl OptionalValue<f64>) -> &mut Self {
        self.request.margin_right = margin.into_optional();
        self
    }

    /// Set all four margins at once
    pub fn set_margins(&mut self, margins: Margins) -> &mut Self {
        self.set_margin_top(margins.top.inches())
            .set_margin_bottom(margins.bottom.inches())
            .set_margin_left(margins.left.inches())
            .set_margin_right(margins.right.inches())
    }

    /// Page ranges to print, e.g. `"1-5, 8, 11-13"`
    pub fn set_page_ranges(&mut self, page_ranges: impl OptionalValue<String>) -> &mut Self {
        self.request.page_ranges = page_ranges.into_optional();
        self
    }

    pub fn set_ignore_invalid_page_ranges(&mut self, ignore: impl OptionalValue<bool>) -> &mut Self {
        self.request.ignore_invalid_page_ranges = ignore.into_optional();
        self
    }

    /// Raw engine header template; replaced at build time if header or footer HTML is staged
    pub fn set_header_template(&mut self, template: impl OptionalValue<String>) -> &mut Self {
        self.request.header_template = template.into_optional();
        self
    }

    /// Raw engine footer template; replaced at build time if footer HTML is staged
    pub fn set_footer_template(&mut self, template: impl OptionalValue<String>) -> &mut Self {
        self.request.footer_template = template.into_optional();
        self
    }

    /// HTML shown at the top of every page
    pub fn set_header_html(&mut self, html: impl OptionalValue<String>) -> &mut Self {
        self.header_html = html.into_optional();
        self
    }

    /// HTML shown at the bottom of every page
    pub fn set_footer_html(&mut self, html: impl OptionalValue<String>) -> &mut Self {
        self.footer_html = html.into_optional();
        self
    }

    pub fn set_prefer_css_page_size(&mut self, prefer: impl OptionalValue<bool>) -> &mut Self {
        self.request.prefer_css_page_size = prefer.into_optional();
        self
    }
}

fn non_empty(html: &Option<String>) -> Option<&str> {
    html.as_deref().filter(|s| !s.is_empty())
}
