//! Parses the entry table of a maker note.
//!
//! Layout, relative to the start of the 6-byte structural header:
//!
//! | offset | field | size |
//! |---|---|---|
//! | `6 + o` | entry count | 2 |
//! | `6 + o + 2 + 12 * i` | tag | 2 |
//! | `+2` | format | 2 |
//! | `+4` | component count | 4 |
//! | `+8` | inline value, or value offset relative to the header | 4 |
use crate::error::MnoteError;
use crate::exif_byte_order::{self, ExifByteOrder};
use crate::exif_format::ExifFormat;
use crate::mnote_entry::MnoteEntry;
use log::trace;

/// Size of the structural header preceding the entry count.
pub const HEADER_SIZE: usize = 6;
/// Size of one entry record.
pub const ENTRY_SIZE: usize = 12;
/// Values larger than this are stored out of line.
const INLINE_VALUE_SIZE: usize = 4;

/// Returns `len` bytes at `offset`, or `TruncatedBuffer` if they are not all in `buf`.
fn slice_at<'a>(
    buf: &'a [u8],
    offset: usize,
    len: usize,
    what: &str,
) -> Result<&'a [u8], MnoteError> {
    offset
        .checked_add(len)
        .and_then(|end| buf.get(offset..end))
        .ok_or_else(|| {
            MnoteError::TruncatedBuffer(format!(
                "{what} needs {len} bytes at {offset:#x} (buffer is {} bytes)",
                buf.len()
            ))
        })
}

/// Number of records worth reserving: never more than the buffer can hold.
fn table_capacity(buf_len: usize, table_offset: usize, count: u16) -> usize {
    let available = buf_len.saturating_sub(table_offset) / ENTRY_SIZE;
    (count as usize).min(available)
}

fn overflow(what: &str) -> MnoteError {
    MnoteError::TruncatedBuffer(format!("{what} offset overflows"))
}

/// Parses every entry of the table at `HEADER_SIZE + offset` in `buf`.
///
/// Either every declared entry is returned or nothing is: the first malformed
/// record fails the whole table.
pub(crate) fn load_entries(
    buf: &[u8],
    offset: u32,
    order: ExifByteOrder,
) -> Result<Vec<MnoteEntry>, MnoteError> {
    let count_offset = HEADER_SIZE
        .checked_add(offset as usize)
        .ok_or_else(|| overflow("entry count"))?;
    let count = exif_byte_order::get_short(slice_at(buf, count_offset, 2, "entry count")?, order);
    let table_offset = count_offset + 2;

    let mut entries = Vec::new();
    entries.try_reserve_exact(table_capacity(buf.len(), table_offset, count))?;

    for i in 0..count as usize {
        let record_offset = ENTRY_SIZE
            .checked_mul(i)
            .and_then(|o| o.checked_add(table_offset))
            .ok_or_else(|| overflow("entry record"))?;
        let record = slice_at(buf, record_offset, 8, "entry record")?;

        let tag = exif_byte_order::get_short(record, order);
        let format = ExifFormat::from(exif_byte_order::get_short(&record[2..], order));
        let components = exif_byte_order::get_long(&record[4..], order);

        let size = format
            .size()
            .checked_mul(components as usize)
            .ok_or_else(|| overflow(&format!("tag {tag:#06x} value")))?;
        if size == 0 {
            return Err(MnoteError::InvalidFormat(format!(
                "tag {tag:#06x} has format {:#06x} with {components} components",
                format.code()
            )));
        }

        let field_offset = record_offset + 8;
        let value_offset = if size > INLINE_VALUE_SIZE {
            let pointer = slice_at(buf, field_offset, 4, "value offset")?;
            (exif_byte_order::get_long(pointer, order) as usize)
                .checked_add(HEADER_SIZE)
                .ok_or_else(|| overflow(&format!("tag {tag:#06x} value")))?
        } else {
            field_offset
        };
        let value = slice_at(buf, value_offset, size, &format!("tag {tag:#06x} value"))?;

        let mut data = Vec::new();
        data.try_reserve_exact(size)?;
        data.extend_from_slice(value);

        trace!(
            "entry {i}: tag {tag:#06x} {} x{components} at {value_offset:#x}",
            format.name()
        );
        entries.push(MnoteEntry::new(tag, format, components, data, order));
    }

    Ok(entries)
}
