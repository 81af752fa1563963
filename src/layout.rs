//! Page size and margin units
//!
//! The print request measures paper and margins in inches, while the
//! header/footer template is laid out in CSS pixels.

/// CSS pixels per inch
pub const PX_PER_INCH: f64 = 96.0;

/// PDF points per inch
pub const PT_PER_INCH: f64 = 72.0;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Simple length type stored in inches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(pub f64);

impl Length {
    /// Create a length from inches
    pub fn from_inches(inches: f64) -> Self {
        Length(inches)
    }

    /// Create a length from millimetres
    pub fn from_mm(mm: f64) -> Self {
        Length(mm / MM_PER_INCH)
    }

    /// Get the value in inches
    pub fn inches(&self) -> f64 {
        self.0
    }

    /// Get the value in millimetres
    pub fn mm(&self) -> f64 {
        self.0 * MM_PER_INCH
    }

    /// Get the value in points (1/72 inch)
    pub fn pt(&self) -> f64 {
        self.0 * PT_PER_INCH
    }

    /// Get the value in CSS pixels (1/96 inch)
    pub fn px(&self) -> f64 {
        self.0 * PX_PER_INCH
    }
}

/// Page dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDimensions {
    pub width: Length,
    pub height: Length,
}

impl PageDimensions {
    pub fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }

    /// US Letter size (8.5" × 11"), the print engine's default paper
    pub fn letter() -> Self {
        Self::new(Length::from_inches(8.5), Length::from_inches(11.0))
    }

    /// A4 size (210mm × 297mm)
    pub fn a4() -> Self {
        Self::new(Length::from_mm(210.0), Length::from_mm(297.0))
    }

    /// Swap width and height
    pub fn landscape(self) -> Self {
        Self::new(self.height, self.width)
    }
}

impl Default for PageDimensions {
    fn default() -> Self {
        Self::letter()
    }
}

/// Named paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperFormat {
    Letter,
    Legal,
    Tabloid,
    Ledger,
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
}

impl PaperFormat {
    /// Portrait dimensions of this format
    pub fn dimensions(self) -> PageDimensions {
        let inches = |w: f64, h: f64| PageDimensions::new(Length::from_inches(w), Length::from_inches(h));
        let mm = |w: f64, h: f64| PageDimensions::new(Length::from_mm(w), Length::from_mm(h));

        match self {
            PaperFormat::Letter => inches(8.5, 11.0),
            PaperFormat::Legal => inches(8.5, 14.0),
            PaperFormat::Tabloid => inches(11.0, 17.0),
            PaperFormat::Ledger => inches(17.0, 11.0),
            PaperFormat::A0 => mm(841.0, 1189.0),
            PaperFormat::A1 => mm(594.0, 841.0),
            PaperFormat::A2 => mm(420.0, 594.0),
            PaperFormat::A3 => mm(297.0, 420.0),
            PaperFormat::A4 => mm(210.0, 297.0),
            PaperFormat::A5 => mm(148.0, 210.0),
            PaperFormat::A6 => mm(105.0, 148.0),
        }
    }
}

impl std::str::FromStr for PaperFormat {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "letter" => Ok(PaperFormat::Letter),
            "legal" => Ok(PaperFormat::Legal),
            "tabloid" => Ok(PaperFormat::Tabloid),
            "ledger" => Ok(PaperFormat::Ledger),
            "a0" => Ok(PaperFormat::A0),
            "a1" => Ok(PaperFormat::A1),
            "a2" => Ok(PaperFormat::A2),
            "a3" => Ok(PaperFormat::A3),
            "a4" => Ok(PaperFormat::A4),
            "a5" => Ok(PaperFormat::A5),
            "a6" => Ok(PaperFormat::A6),
            other => Err(crate::Error::InvalidArgument(format!("Unknown paper format: {}", other))),
        }
    }
}

/// Margins around page content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl Margins {
    /// Create margins with same value on all sides
    pub fn uniform(margin: Length) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }

    /// Standard 1-inch margins on all sides
    pub fn standard() -> Self {
        Self::uniform(Length::from_inches(1.0))
    }

    /// Narrow margins (0.5 inches)
    pub fn narrow() -> Self {
        Self::uniform(Length::from_inches(0.5))
    }

    /// No margins at all
    pub fn none() -> Self {
        Self::uniform(Length::from_inches(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let len = Length::from_inches(1.0);
        assert!((len.mm() - 25.4).abs() < 0.01);
        assert!((len.pt() - 72.0).abs() < 0.01);
        assert!((len.px() - 96.0).abs() < 0.01);

        let len = Length::from_mm(25.4);
        assert!((len.inches() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_letter_size() {
        let letter = PageDimensions::letter();
        assert_eq!(letter.width.inches(), 8.5);
        assert_eq!(letter.height.inches(), 11.0);
        // 8.5 inches = 816 px, 11 inches = 1056 px
        assert_eq!(letter.width.px(), 816.0);
        assert_eq!(letter.height.px(), 1056.0);
    }

    #[test]
    fn test_a4_matches_format() {
        let a4 = PaperFormat::A4.dimensions();
        assert_eq!(a4, PageDimensions::a4());
        assert!((a4.width.inches() - 8.2677).abs() < 0.001);
        assert!((a4.height.inches() - 11.6929).abs() < 0.001);
    }

    #[test]
    fn test_landscape_swaps() {
        let page = PageDimensions::letter().landscape();
        assert_eq!(page.width.inches(), 11.0);
        assert_eq!(page.height.inches(), 8.5);
    }

    #[test]
    fn test_parse_paper_format() {
        assert_eq!("A4".parse::<PaperFormat>().unwrap(), PaperFormat::A4);
        assert_eq!(" letter ".parse::<PaperFormat>().unwrap(), PaperFormat::Letter);
        assert!("B5".parse::<PaperFormat>().is_err());
    }

    #[test]
    fn test_standard_margins() {
        let margins = Margins::standard();
        assert_eq!(margins.top.inches(), 1.0);
        assert_eq!(margins.bottom.inches(), 1.0);
        assert_eq!(margins.left.inches(), 1.0);
        assert_eq!(margins.right.inches(), 1.0);
        assert_eq!(Margins::narrow().left.inches(), 0.5);
        assert_eq!(Margins::none().right.inches(), 0.0);
    }
}
