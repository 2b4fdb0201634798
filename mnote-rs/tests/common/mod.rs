#![allow(dead_code)]
use mnote_rs::ExifByteOrder;

/// Builds a maker-note buffer: 6-byte header, optional padding of `offset`
/// bytes, the entry table, then an area holding out-of-line values.
pub struct NoteBuilder {
    order: ExifByteOrder,
    offset: u32,
    records: Vec<(u16, u16, u32, Vec<u8>)>,
}

impl NoteBuilder {
    pub fn new(order: ExifByteOrder) -> Self {
        Self {
            order,
            offset: 0,
            records: Vec::new(),
        }
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Adds a record; `value` must already be encoded in the builder's order.
    pub fn entry(mut self, tag: u16, format: u16, components: u32, value: &[u8]) -> Self {
        self.records.push((tag, format, components, value.to_vec()));
        self
    }

    fn u16(&self, v: u16) -> [u8; 2] {
        match self.order {
            ExifByteOrder::Motorola => v.to_be_bytes(),
            ExifByteOrder::Intel => v.to_le_bytes(),
        }
    }

    fn u32(&self, v: u32) -> [u8; 4] {
        match self.order {
            ExifByteOrder::Motorola => v.to_be_bytes(),
            ExifByteOrder::Intel => v.to_le_bytes(),
        }
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = vec![0u8; 6 + self.offset as usize];
        buf.extend_from_slice(&self.u16(self.records.len() as u16));
        let data_start = buf.len() + 12 * self.records.len();
        let mut data = Vec::new();
        for (tag, format, components, value) in &self.records {
            buf.extend_from_slice(&self.u16(*tag));
            buf.extend_from_slice(&self.u16(*format));
            buf.extend_from_slice(&self.u32(*components));
            if value.len() > 4 {
                let pointer = (data_start + data.len() - 6) as u32;
                buf.extend_from_slice(&self.u32(pointer));
                data.extend_from_slice(value);
            } else {
                let mut inline = [0u8; 4];
                inline[..value.len()].copy_from_slice(value);
                buf.extend_from_slice(&inline);
            }
        }
        buf.extend_from_slice(&data);
        buf
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
