use crate::exif_byte_order::{self, ExifByteOrder};
use crate::exif_format::ExifFormat;
use crate::exif_rational::{ExifRational, ExifSRational};

/// One decoded tag record of a maker note.
///
/// Entries are only created by a load and are only mutated by a byte-order
/// change of the owning maker note. `data.len()` always equals
/// `format.size() * components` and is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnoteEntry {
    /// The vendor-specific tag identifier.
    pub(crate) tag: u16,
    /// The storage format of each component.
    pub(crate) format: ExifFormat,
    /// The number of components in the value.
    pub(crate) components: u32,
    /// The raw value bytes, encoded in `order`.
    pub(crate) data: Vec<u8>,
    /// The byte order `data` is currently encoded in.
    pub(crate) order: ExifByteOrder,
}

impl MnoteEntry {
    pub(crate) fn new(
        tag: u16,
        format: ExifFormat,
        components: u32,
        data: Vec<u8>,
        order: ExifByteOrder,
    ) -> Self {
        Self {
            tag,
            format,
            components,
            data,
            order,
        }
    }

    pub fn tag(&self) -> u16 {
        self.tag
    }

    pub fn format(&self) -> ExifFormat {
        self.format
    }

    pub fn components(&self) -> u32 {
        self.components
    }

    /// The raw value bytes, encoded in [`MnoteEntry::order`].
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn order(&self) -> ExifByteOrder {
        self.order
    }

    /// Bytes of component `index`, if the entry has the given format and the
    /// component exists.
    fn component(&self, format: ExifFormat, index: usize) -> Option<&[u8]> {
        if self.format != format {
            return None;
        }
        let size = format.size();
        let start = index.checked_mul(size)?;
        let end = start.checked_add(size)?;
        self.data.get(start..end)
    }

    pub fn short(&self, index: usize) -> Option<u16> {
        self.component(ExifFormat::Short, index)
            .map(|b| exif_byte_order::get_short(b, self.order))
    }

    pub fn long(&self, index: usize) -> Option<u32> {
        self.component(ExifFormat::Long, index)
            .map(|b| exif_byte_order::get_long(b, self.order))
    }

    pub fn slong(&self, index: usize) -> Option<i32> {
        self.component(ExifFormat::SLong, index)
            .map(|b| exif_byte_order::get_slong(b, self.order))
    }

    pub fn rational(&self, index: usize) -> Option<ExifRational> {
        self.component(ExifFormat::Rational, index)
            .map(|b| exif_byte_order::get_rational(b, self.order))
    }

    pub fn srational(&self, index: usize) -> Option<ExifSRational> {
        self.component(ExifFormat::SRational, index)
            .map(|b| exif_byte_order::get_srational(b, self.order))
    }
}
