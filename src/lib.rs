//! DevTools PDF Library
//!
//! Builds `Page.printToPDF` requests for a browser's remote-debugging
//! protocol. This library provides functionality to:
//! - Accumulate print options with a chainable builder
//! - Fold custom header and footer HTML into a single page-sized template
//! - Expand `[page]`-style placeholders into the engine's magic spans
//! - Load print options from JSON settings files
//! - Hand requests to a page printer and inspect the returned PDF
//!
//! # Example
//!
//! ```
//! use devtools_pdf::PdfRequestBuilder;
//!
//! let mut builder = PdfRequestBuilder::new();
//! builder
//!     .set_paper_size([8.27, 11.69])
//!     .expect("two dimensions given")
//!     .set_print_background(true)
//!     .set_header_html("<div style=\"font-size:10px\">Quarterly report</div>")
//!     .set_footer_html("<span class=\"pageNumber\"></span>");
//!
//! let request = builder.build_pdf_request();
//! assert_eq!(request.footer_template.as_deref(), Some("<span></span>"));
//! ```

pub mod builder;
pub mod error;
pub mod layout;
pub mod pdf;
pub mod placeholders;
pub mod request;
pub mod settings;
pub mod template;
pub mod value;

// Re-export commonly used items
pub use builder::PdfRequestBuilder;
pub use error::{Error, Result};
pub use request::PrintToPdfRequest;
pub use settings::PrintSettings;
pub use template::HtmlTemplateBuilder;
