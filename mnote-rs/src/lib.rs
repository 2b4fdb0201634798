//! # mnote-rs
//!
//! `mnote-rs` is a pure Rust decoder for the Canon maker-note sub-block found
//! inside the EXIF segment of an image file.
//! It turns the raw sub-block into a list of tagged, typed entries and keeps
//! their values consistent when the container changes its byte order.
//!
//! ## Features
//! - Bounds-checked parsing of the entry table, inline and out-of-line values
//! - Atomic loads: a malformed buffer never replaces previously loaded entries
//! - In-place byte-order conversion of every numeric format
//! - Pluggable tag registry and value formatter, with Canon defaults
//!
//! ## Usage
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! mnote-rs = "0.1"
//! ```
//!
//! ### Example: Loading and Listing Entries
//! ```rust
//! use mnote_rs::{CanonMakerNote, ExifByteOrder, MakerNote};
//!
//! // 6-byte header, one ImageNumber entry (Long x1, inline)
//! let buf = [
//!     0, 0, 0, 0, 0, 0,
//!     1, 0,
//!     8, 0, 4, 0, 1, 0, 0, 0, 0x39, 0x30, 0, 0,
//! ];
//!
//! let mut note = CanonMakerNote::with_byte_order(ExifByteOrder::Intel);
//! note.load(&buf).unwrap();
//!
//! for i in 0..note.count() {
//!     println!("{}: {}", note.title(i).unwrap_or("?"), note.value(i).unwrap());
//! }
//! assert_eq!(note.value(0).as_deref(), Some("12345"));
//! ```
//!
//! The crate logs through the [`log`] facade; install any logger in the
//! embedding application to see load diagnostics.

mod byte_order_converter;
mod entry_table;
pub mod error;
pub mod exif_byte_order;
pub mod exif_format;
pub mod exif_rational;
pub mod maker_note;
pub mod mnote_data_canon;
pub mod mnote_entry;
pub mod mnote_tag;
pub mod mnote_value;

pub use entry_table::{ENTRY_SIZE, HEADER_SIZE};
pub use error::MnoteError;
pub use exif_byte_order::ExifByteOrder;
pub use exif_format::ExifFormat;
pub use exif_rational::{ExifRational, ExifSRational};
pub use maker_note::MakerNote;
pub use mnote_data_canon::CanonMakerNote;
pub use mnote_entry::MnoteEntry;
pub use mnote_tag::{CanonTag, CanonTagRegistry, TagRegistry};
pub use mnote_value::{GenericValueFormatter, ValueFormatter};
