//! Submitting print requests to a page printer
//!
//! The crate does not talk to a browser itself. A [`PagePrinter`] is whatever
//! sends `Page.printToPDF` to a live page (a DevTools client, a pooled tab,
//! a test double) and hands back the decoded PDF bytes.

use std::path::Path;
use tracing::{debug, info};

use crate::builder::PdfRequestBuilder;
use crate::error::{Error, Result};
use crate::pdf::metadata::count_pages_in_bytes;
use crate::request::PrintToPdfRequest;

/// Executes a print request against a rendered page
pub trait PagePrinter {
    fn print_to_pdf(&mut self, request: &PrintToPdfRequest) -> Result<Vec<u8>>;
}

impl<F> PagePrinter for F
where
    F: FnMut(&PrintToPdfRequest) -> Result<Vec<u8>>,
{
    fn print_to_pdf(&mut self, request: &PrintToPdfRequest) -> Result<Vec<u8>> {
        self(request)
    }
}

/// PDF bytes returned by a printer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintedPdf {
    bytes: Vec<u8>,
}

impl PrintedPdf {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of pages, read from the document's page tree
    pub fn page_count(&self) -> Result<usize> {
        count_pages_in_bytes(&self.bytes)
    }

    /// Write the PDF to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes)?;
        info!(path = %path.display(), bytes = self.bytes.len(), "saved PDF");
        Ok(())
    }
}

/// Builds requests and runs them through a [`PagePrinter`]
#[derive(Debug)]
pub struct PdfGenerator<P> {
    printer: P,
}

impl<P: PagePrinter> PdfGenerator<P> {
    pub fn new(printer: P) -> Self {
        Self { printer }
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    pub fn into_printer(self) -> P {
        self.printer
    }

    /// Build a request from `builder` and print it
    pub fn print(&mut self, builder: &PdfRequestBuilder) -> Result<PrintedPdf> {
        let request = builder.build_pdf_request();
        self.print_request(&request)
    }

    /// Print an already built request
    ///
    /// # Errors
    ///
    /// Propagates printer failures; an empty byte stream is reported as
    /// [`Error::EmptyOutput`].
    pub fn print_request(&mut self, request: &PrintToPdfRequest) -> Result<PrintedPdf> {
        debug!(?request, "printing page to PDF");

        let bytes = self.printer.print_to_pdf(request)?;
        if bytes.is_empty() {
            return Err(Error::EmptyOutput);
        }

        info!(bytes = bytes.len(), "page printed");
        Ok(PrintedPdf::new(bytes))
    }
}
