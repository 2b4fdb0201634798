use crate::{
    byte_order_converter::convert_entry,
    entry_table::load_entries,
    error::MnoteError,
    exif_byte_order::ExifByteOrder,
    maker_note::MakerNote,
    mnote_entry::MnoteEntry,
    mnote_tag::{CanonTagRegistry, TagRegistry},
    mnote_value::{GenericValueFormatter, ValueFormatter},
};
use log::{debug, trace, warn};

/// A decoded Canon maker note.
///
/// `CanonMakerNote` owns the entries parsed from the maker-note sub-block of
/// an EXIF segment, together with the byte order they are encoded in and the
/// position of the entry table.
///
/// Tag names and value strings are delegated to a [`TagRegistry`] and a
/// [`ValueFormatter`]; by default the built-in [`CanonTagRegistry`] and
/// [`GenericValueFormatter`] are used.
///
/// ```rust
/// use mnote_rs::{CanonMakerNote, ExifByteOrder, MakerNote};
///
/// // header, count = 1, OwnerName: Ascii x4 inline
/// let buf = [
///     0, 0, 0, 0, 0, 0,
///     0, 1,
///     0, 9, 0, 2, 0, 0, 0, 4, b'J', b'o', b'e', 0,
/// ];
/// let mut note = CanonMakerNote::with_byte_order(ExifByteOrder::Motorola);
/// note.load(&buf).unwrap();
/// assert_eq!(note.count(), 1);
/// assert_eq!(note.name(0), Some("OwnerName"));
/// assert_eq!(note.value(0).as_deref(), Some("Joe"));
/// assert_eq!(note.value(1), None);
/// ```
///
/// # Thread Safety
///
/// Mutating operations take `&mut self`, so a shared `&CanonMakerNote` only
/// allows concurrent reads.
#[derive(Debug, Clone)]
pub struct CanonMakerNote<T = CanonTagRegistry, F = GenericValueFormatter> {
    /// Entries in table order.
    entries: Vec<MnoteEntry>,
    /// The byte order every entry is encoded in.
    order: ExifByteOrder,
    /// Position of the entry count, relative to the end of the structural header.
    offset: u32,
    registry: T,
    formatter: F,
}

impl CanonMakerNote {
    /// Creates an empty maker note with the built-in registry and formatter.
    pub fn new() -> Self {
        Self::with_collaborators(CanonTagRegistry, GenericValueFormatter)
    }

    /// Creates an empty maker note declared in `order`.
    pub fn with_byte_order(order: ExifByteOrder) -> Self {
        let mut note = Self::new();
        note.order = order;
        note
    }
}

impl Default for CanonMakerNote {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F> CanonMakerNote<T, F>
where
    T: TagRegistry,
    F: ValueFormatter,
{
    /// Creates an empty maker note resolving tags with `registry` and
    /// rendering values with `formatter`.
    pub fn with_collaborators(registry: T, formatter: F) -> Self {
        Self {
            entries: Vec::new(),
            order: ExifByteOrder::default(),
            offset: 0,
            registry,
            formatter,
        }
    }

    pub fn byte_order(&self) -> ExifByteOrder {
        self.order
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn entries(&self) -> &[MnoteEntry] {
        &self.entries
    }

    pub fn entry(&self, index: usize) -> Option<&MnoteEntry> {
        self.entries.get(index)
    }

    pub fn registry(&self) -> &T {
        &self.registry
    }

    fn tag(&self, index: usize) -> Option<u16> {
        self.entry(index).map(MnoteEntry::tag)
    }
}

impl<T, F> MakerNote for CanonMakerNote<T, F>
where
    T: TagRegistry,
    F: ValueFormatter,
{
    fn set_byte_order(&mut self, order: ExifByteOrder) {
        if order == self.order {
            return;
        }
        trace!(
            "Converting {} entries from {} to {}",
            self.entries.len(),
            self.order,
            order
        );
        for entry in &mut self.entries {
            convert_entry(entry, order);
        }
        self.order = order;
    }

    fn set_offset(&mut self, offset: u32) {
        self.offset = offset;
    }

    fn load(&mut self, buf: &[u8]) -> Result<(), MnoteError> {
        match load_entries(buf, self.offset, self.order) {
            Ok(entries) => {
                self.entries = entries;
                debug!("Loaded {} entries.", self.entries.len());
                Ok(())
            }
            Err(err) => {
                warn!("Rejected maker note of {} bytes: {err}", buf.len());
                Err(err)
            }
        }
    }

    fn count(&self) -> usize {
        self.entries.len()
    }

    fn name(&self, index: usize) -> Option<&str> {
        self.registry.name(self.tag(index)?)
    }

    fn title(&self, index: usize) -> Option<&str> {
        self.registry.title(self.tag(index)?)
    }

    fn description(&self, index: usize) -> Option<&str> {
        self.registry.description(self.tag(index)?)
    }

    fn value(&self, index: usize) -> Option<String> {
        self.entry(index).map(|entry| self.formatter.format(entry))
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}
