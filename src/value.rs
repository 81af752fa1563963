//! Optional setter arguments
//!
//! Every builder setter accepts either a plain value (which sets the field)
//! or `None` (which unsets it). Integral numbers are widened to `f64`.
//!
//! Each setter family has exactly one `Option` impl (`Option<f64>`,
//! `Option<bool>`, `Option<&str>`) so that a bare `None` infers its type.
//! Paper size items go through [`PaperDimension`], which also takes
//! optional integers such as `[Some(5), None]`.

/// Conversion into an optional request field value
pub trait OptionalValue<T> {
    fn into_optional(self) -> Option<T>;
}

/// One item of a `[width, height]` paper size collection
pub trait PaperDimension {
    fn into_dimension(self) -> Option<f64>;
}

impl OptionalValue<f64> for f64 {
    fn into_optional(self) -> Option<f64> {
        Some(self)
    }
}

impl OptionalValue<f64> for Option<f64> {
    fn into_optional(self) -> Option<f64> {
        self
    }
}

impl PaperDimension for f64 {
    fn into_dimension(self) -> Option<f64> {
        Some(self)
    }
}

impl PaperDimension for Option<f64> {
    fn into_dimension(self) -> Option<f64> {
        self
    }
}

macro_rules! widening_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl OptionalValue<f64> for $t {
                fn into_optional(self) -> Option<f64> {
                    Some(self as f64)
                }
            }

            impl PaperDimension for $t {
                fn into_dimension(self) -> Option<f64> {
                    Some(self as f64)
                }
            }

            impl PaperDimension for Option<$t> {
                fn into_dimension(self) -> Option<f64> {
                    self.map(|v| v as f64)
                }
            }
        )*
    };
}

widening_number!(f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl OptionalValue<bool> for bool {
    fn into_optional(self) -> Option<bool> {
        Some(self)
    }
}

impl OptionalValue<bool> for Option<bool> {
    fn into_optional(self) -> Option<bool> {
        self
    }
}

impl OptionalValue<String> for &str {
    fn into_optional(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl OptionalValue<String> for String {
    fn into_optional(self) -> Option<String> {
        Some(self)
    }
}

// Owned `Option<String>` callers pass `.as_deref()`.
impl OptionalValue<String> for Option<&str> {
    fn into_optional(self) -> Option<String> {
        self.map(str::to_string)
    }
}
