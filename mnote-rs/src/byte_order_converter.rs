//! Re-encodes entry values when the declared byte order of the block changes.
use crate::exif_byte_order::{self, ExifByteOrder};
use crate::exif_format::ExifFormat;
use crate::mnote_entry::MnoteEntry;

/// Re-encodes `entry.data` from the entry's current order into `new_order`
/// and records the new order on the entry. The length of `data` is unchanged.
///
/// Single-byte formats are left as they are.
pub(crate) fn convert_entry(entry: &mut MnoteEntry, new_order: ExifByteOrder) {
    let old_order = entry.order;
    entry.order = new_order;
    if old_order == new_order {
        return;
    }

    let size = entry.format.size();
    match entry.format {
        ExifFormat::Short => {
            for component in entry.data.chunks_exact_mut(size) {
                let value = exif_byte_order::get_short(component, old_order);
                exif_byte_order::set_short(component, new_order, value);
            }
        }
        ExifFormat::Long => {
            for component in entry.data.chunks_exact_mut(size) {
                let value = exif_byte_order::get_long(component, old_order);
                exif_byte_order::set_long(component, new_order, value);
            }
        }
        ExifFormat::SLong => {
            for component in entry.data.chunks_exact_mut(size) {
                let value = exif_byte_order::get_slong(component, old_order);
                exif_byte_order::set_slong(component, new_order, value);
            }
        }
        ExifFormat::Rational => {
            for component in entry.data.chunks_exact_mut(size) {
                let value = exif_byte_order::get_rational(component, old_order);
                exif_byte_order::set_rational(component, new_order, value);
            }
        }
        ExifFormat::SRational => {
            for component in entry.data.chunks_exact_mut(size) {
                let value = exif_byte_order::get_srational(component, old_order);
                exif_byte_order::set_srational(component, new_order, value);
            }
        }
        ExifFormat::Byte | ExifFormat::Ascii | ExifFormat::Undefined | ExifFormat::Unknown(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exif_rational::{ExifRational, ExifSRational};

    fn entry(format: ExifFormat, components: u32, data: Vec<u8>) -> MnoteEntry {
        MnoteEntry::new(0x0001, format, components, data, ExifByteOrder::Motorola)
    }

    #[test]
    fn shorts_are_swapped_per_component() {
        let mut e = entry(ExifFormat::Short, 2, vec![0x00, 0x01, 0x00, 0x02]);
        convert_entry(&mut e, ExifByteOrder::Intel);
        assert_eq!(e.data(), &[0x01, 0x00, 0x02, 0x00]);
        assert_eq!(e.order(), ExifByteOrder::Intel);
        assert_eq!(e.short(0), Some(1));
        assert_eq!(e.short(1), Some(2));
    }

    #[test]
    fn every_component_is_converted() {
        let mut longs = entry(
            ExifFormat::Long,
            3,
            vec![0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 3],
        );
        convert_entry(&mut longs, ExifByteOrder::Intel);
        assert_eq!(longs.data(), &[1, 0, 0, 0, 2, 0, 0, 0, 3, 0, 0, 0]);
    }

    #[test]
    fn rational_halves_are_swapped_independently() {
        let mut r = entry(ExifFormat::Rational, 1, vec![0, 0, 0, 1, 0, 0, 0, 250]);
        convert_entry(&mut r, ExifByteOrder::Intel);
        assert_eq!(r.data(), &[1, 0, 0, 0, 250, 0, 0, 0]);
        assert_eq!(r.rational(0), Some(ExifRational::new(1, 250)));

        let mut s = entry(
            ExifFormat::SRational,
            1,
            vec![0xFF, 0xFF, 0xFF, 0xFF, 0, 0, 0, 3],
        );
        convert_entry(&mut s, ExifByteOrder::Intel);
        assert_eq!(s.srational(0), Some(ExifSRational::new(-1, 3)));
    }

    #[test]
    fn round_trip_restores_bytes() {
        let originals = [
            entry(ExifFormat::Short, 3, vec![1, 2, 3, 4, 5, 6]),
            entry(ExifFormat::Long, 1, vec![1, 2, 3, 4]),
            entry(ExifFormat::SLong, 2, vec![0x80, 0, 0, 1, 0xFF, 0xFE, 0xFD, 0xFC]),
            entry(ExifFormat::Rational, 1, vec![1, 2, 3, 4, 5, 6, 7, 8]),
            entry(ExifFormat::SRational, 1, vec![0xF1, 2, 3, 4, 5, 6, 7, 0x88]),
        ];
        for original in originals {
            let mut e = original.clone();
            convert_entry(&mut e, ExifByteOrder::Intel);
            assert_ne!(e.data(), original.data(), "{:?}", original.format());
            convert_entry(&mut e, ExifByteOrder::Motorola);
            assert_eq!(e, original);
        }
    }

    #[test]
    fn single_byte_formats_are_untouched() {
        for format in [ExifFormat::Byte, ExifFormat::Ascii, ExifFormat::Undefined] {
            let mut e = entry(format, 4, vec![1, 2, 3, 4]);
            convert_entry(&mut e, ExifByteOrder::Intel);
            assert_eq!(e.data(), &[1, 2, 3, 4]);
            assert_eq!(e.order(), ExifByteOrder::Intel);
        }
    }

    #[test]
    fn same_order_is_a_no_op() {
        let mut e = entry(ExifFormat::Short, 1, vec![0x12, 0x34]);
        convert_entry(&mut e, ExifByteOrder::Motorola);
        assert_eq!(e.data(), &[0x12, 0x34]);
    }
}
