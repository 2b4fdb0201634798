/// An unsigned rational: a pair of 32-bit unsigned integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExifRational {
    pub numerator: u32,
    pub denominator: u32,
}

/// A signed rational: a pair of 32-bit signed integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExifSRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl ExifRational {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl ExifSRational {
    pub fn new(numerator: i32, denominator: i32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }
}

impl std::fmt::Display for ExifRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl std::fmt::Display for ExifSRational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
