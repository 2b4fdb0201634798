/// The storage format of an entry's components.
///
/// Wire codes follow TIFF 6.0. Codes outside the supported set are kept as
/// `Unknown` and have an element size of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ExifFormat {
    /// 8-bit unsigned integer.
    Byte = 1,
    /// 8-bit byte holding a 7-bit ASCII code.
    Ascii = 2,
    /// 16-bit unsigned integer.
    Short = 3,
    /// 32-bit unsigned integer.
    Long = 4,
    /// Two `Long`s: numerator then denominator.
    Rational = 5,
    /// 8-bit byte whose meaning depends on the tag.
    Undefined = 7,
    /// 32-bit signed integer.
    SLong = 9,
    /// Two `SLong`s: numerator then denominator.
    SRational = 10,
    /// Any other format code, stores the raw value.
    Unknown(u16),
}

impl From<u16> for ExifFormat {
    fn from(code: u16) -> Self {
        match code {
            1 => ExifFormat::Byte,
            2 => ExifFormat::Ascii,
            3 => ExifFormat::Short,
            4 => ExifFormat::Long,
            5 => ExifFormat::Rational,
            7 => ExifFormat::Undefined,
            9 => ExifFormat::SLong,
            10 => ExifFormat::SRational,
            other => ExifFormat::Unknown(other),
        }
    }
}

impl ExifFormat {
    /// The wire code of this format.
    pub fn code(self) -> u16 {
        match self {
            ExifFormat::Byte => 1,
            ExifFormat::Ascii => 2,
            ExifFormat::Short => 3,
            ExifFormat::Long => 4,
            ExifFormat::Rational => 5,
            ExifFormat::Undefined => 7,
            ExifFormat::SLong => 9,
            ExifFormat::SRational => 10,
            ExifFormat::Unknown(code) => code,
        }
    }

    /// Size in bytes of one component, 0 for unknown formats.
    pub fn size(self) -> usize {
        match self {
            ExifFormat::Byte | ExifFormat::Ascii | ExifFormat::Undefined => 1,
            ExifFormat::Short => 2,
            ExifFormat::Long | ExifFormat::SLong => 4,
            ExifFormat::Rational | ExifFormat::SRational => 8,
            ExifFormat::Unknown(_) => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExifFormat::Byte => "Byte",
            ExifFormat::Ascii => "Ascii",
            ExifFormat::Short => "Short",
            ExifFormat::Long => "Long",
            ExifFormat::Rational => "Rational",
            ExifFormat::Undefined => "Undefined",
            ExifFormat::SLong => "SLong",
            ExifFormat::SRational => "SRational",
            ExifFormat::Unknown(_) => "Unknown",
        }
    }
}
