use crate::exif_format::ExifFormat;
use crate::mnote_entry::MnoteEntry;

/// Renders an entry's raw value as a display string.
pub trait ValueFormatter {
    fn format(&self, entry: &MnoteEntry) -> String;
}

/// Renders any entry from its format alone, without tag-specific knowledge.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericValueFormatter;

fn join<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values.map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}

impl ValueFormatter for GenericValueFormatter {
    fn format(&self, entry: &MnoteEntry) -> String {
        let components = entry.components() as usize;
        match entry.format() {
            ExifFormat::Ascii => {
                let data = entry.data();
                let end = data.iter().position(|&b| b == 0).unwrap_or(data.len());
                String::from_utf8_lossy(&data[..end]).into_owned()
            }
            ExifFormat::Byte => join(entry.data().iter()),
            ExifFormat::Undefined => entry
                .data()
                .iter()
                .map(|b| hex::encode([*b]))
                .collect::<Vec<_>>()
                .join(" "),
            ExifFormat::Short => join((0..components).filter_map(|i| entry.short(i))),
            ExifFormat::Long => join((0..components).filter_map(|i| entry.long(i))),
            ExifFormat::SLong => join((0..components).filter_map(|i| entry.slong(i))),
            ExifFormat::Rational => join((0..components).filter_map(|i| entry.rational(i))),
            ExifFormat::SRational => join((0..components).filter_map(|i| entry.srational(i))),
            ExifFormat::Unknown(code) => format!("{} bytes of format {code:#06x}", entry.size()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif_byte_order::ExifByteOrder;

    fn render(format: ExifFormat, components: u32, data: &[u8], order: ExifByteOrder) -> String {
        let entry = MnoteEntry::new(0x0001, format, components, data.to_vec(), order);
        GenericValueFormatter.format(&entry)
    }

    #[test]
    fn ascii_stops_at_nul() {
        let s = render(ExifFormat::Ascii, 8, b"Canon\0\0\0", ExifByteOrder::Motorola);
        assert_eq!(s, "Canon");
    }

    #[test]
    fn undefined_is_hex() {
        let s = render(ExifFormat::Undefined, 3, &[0x00, 0xAB, 0x10], ExifByteOrder::Intel);
        assert_eq!(s, "00 ab 10");
    }

    #[test]
    fn numbers_follow_entry_order() {
        let be = render(ExifFormat::Short, 2, &[0, 1, 0, 2], ExifByteOrder::Motorola);
        let le = render(ExifFormat::Short, 2, &[1, 0, 2, 0], ExifByteOrder::Intel);
        assert_eq!(be, "1, 2");
        assert_eq!(le, "1, 2");

        let s = render(ExifFormat::SLong, 1, &[0xFF, 0xFF, 0xFF, 0xFB], ExifByteOrder::Motorola);
        assert_eq!(s, "-5");
    }

    #[test]
    fn rationals_render_as_fractions() {
        let s = render(
            ExifFormat::Rational,
            2,
            &[0, 0, 0, 1, 0, 0, 0, 250, 0, 0, 0, 7, 0, 0, 0, 0],
            ExifByteOrder::Motorola,
        );
        assert_eq!(s, "1/250, 7/0");
    }
}
