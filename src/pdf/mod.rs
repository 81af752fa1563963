//! Printing and printed-PDF inspection

pub mod metadata;
pub mod printer;

// Re-export commonly used items
pub use metadata::{count_pages, count_pages_in_bytes};
pub use printer::{PagePrinter, PdfGenerator, PrintedPdf};
