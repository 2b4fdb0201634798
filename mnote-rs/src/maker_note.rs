use crate::error::MnoteError;
use crate::exif_byte_order::ExifByteOrder;

/// The operations an EXIF container drives on a vendor maker note.
///
/// Index-based accessors return `None` for any `index >= count()`.
pub trait MakerNote {
    /// Changes the declared byte order, re-encoding every loaded value.
    fn set_byte_order(&mut self, order: ExifByteOrder);
    /// Sets the entry table position relative to the end of the 6-byte header.
    fn set_offset(&mut self, offset: u32);
    /// Replaces all entries with the ones parsed from `buf`.
    ///
    /// On error the previously loaded entries are kept.
    fn load(&mut self, buf: &[u8]) -> Result<(), MnoteError>;
    fn count(&self) -> usize;
    fn name(&self, index: usize) -> Option<&str>;
    fn title(&self, index: usize) -> Option<&str>;
    fn description(&self, index: usize) -> Option<&str>;
    /// The rendered value of entry `index`.
    fn value(&self, index: usize) -> Option<String>;
    /// Drops every entry. Calling it on an empty maker note does nothing.
    fn clear(&mut self);
}
