//! Byte orders an EXIF block can declare, and element accessors over raw bytes.
//!
//! All `get_*`/`set_*` helpers panic if the slice is shorter than the element,
//! the same contract as [`byteorder::ByteOrder`]. Callers slice to a checked
//! range first.
use crate::exif_rational::{ExifRational, ExifSRational};
use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// The byte order of an EXIF block, named after the TIFF `MM`/`II` markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExifByteOrder {
    /// Big-endian (`MM`).
    #[default]
    Motorola,
    /// Little-endian (`II`).
    Intel,
}

impl ExifByteOrder {
    pub fn name(self) -> &'static str {
        match self {
            ExifByteOrder::Motorola => "Motorola",
            ExifByteOrder::Intel => "Intel",
        }
    }
}

impl std::fmt::Display for ExifByteOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub fn get_short(buf: &[u8], order: ExifByteOrder) -> u16 {
    match order {
        ExifByteOrder::Motorola => BigEndian::read_u16(buf),
        ExifByteOrder::Intel => LittleEndian::read_u16(buf),
    }
}

pub fn set_short(buf: &mut [u8], order: ExifByteOrder, value: u16) {
    match order {
        ExifByteOrder::Motorola => BigEndian::write_u16(buf, value),
        ExifByteOrder::Intel => LittleEndian::write_u16(buf, value),
    }
}

pub fn get_long(buf: &[u8], order: ExifByteOrder) -> u32 {
    match order {
        ExifByteOrder::Motorola => BigEndian::read_u32(buf),
        ExifByteOrder::Intel => LittleEndian::read_u32(buf),
    }
}

pub fn set_long(buf: &mut [u8], order: ExifByteOrder, value: u32) {
    match order {
        ExifByteOrder::Motorola => BigEndian::write_u32(buf, value),
        ExifByteOrder::Intel => LittleEndian::write_u32(buf, value),
    }
}

pub fn get_slong(buf: &[u8], order: ExifByteOrder) -> i32 {
    match order {
        ExifByteOrder::Motorola => BigEndian::read_i32(buf),
        ExifByteOrder::Intel => LittleEndian::read_i32(buf),
    }
}

pub fn set_slong(buf: &mut [u8], order: ExifByteOrder, value: i32) {
    match order {
        ExifByteOrder::Motorola => BigEndian::write_i32(buf, value),
        ExifByteOrder::Intel => LittleEndian::write_i32(buf, value),
    }
}

/// Reads a numerator/denominator pair (8 bytes).
pub fn get_rational(buf: &[u8], order: ExifByteOrder) -> ExifRational {
    ExifRational::new(get_long(buf, order), get_long(&buf[4..], order))
}

pub fn set_rational(buf: &mut [u8], order: ExifByteOrder, value: ExifRational) {
    set_long(buf, order, value.numerator);
    set_long(&mut buf[4..], order, value.denominator);
}

pub fn get_srational(buf: &[u8], order: ExifByteOrder) -> ExifSRational {
    ExifSRational::new(get_slong(buf, order), get_slong(&buf[4..], order))
}

pub fn set_srational(buf: &mut [u8], order: ExifByteOrder, value: ExifSRational) {
    set_slong(buf, order, value.numerator);
    set_slong(&mut buf[4..], order, value.denominator);
}
