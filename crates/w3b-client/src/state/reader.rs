use crate::error::LayoutError;
use anchor_lang::prelude::Pubkey;

/// Positional cursor over raw account bytes.
///
/// Every read takes the field name, checks that the whole field fits, and
/// advances past it. Layouts are therefore described as an ordered list of
/// reads; no offset is ever written down by hand.
pub struct FieldReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> FieldReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    /// Offset of the next unread byte
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn take(&mut self, field: &'static str, width: usize) -> Result<&'a [u8], LayoutError> {
        let start = self.offset;
        let end = start
            .checked_add(width)
            .filter(|end| *end <= self.data.len())
            .ok_or(LayoutError::BufferTooShort {
                field,
                offset: start,
                required: start.saturating_add(width),
                actual: self.data.len(),
            })?;
        self.offset = end;
        Ok(&self.data[start..end])
    }

    pub fn read_bytes<const N: usize>(&mut self, field: &'static str) -> Result<[u8; N], LayoutError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(field, N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self, field: &'static str) -> Result<u8, LayoutError> {
        Ok(self.take(field, 1)?[0])
    }

    pub fn read_bool(&mut self, field: &'static str) -> Result<bool, LayoutError> {
        let offset = self.offset;
        match self.read_u8(field)? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(LayoutError::InvalidBool {
                field,
                offset,
                value,
            }),
        }
    }

    pub fn read_u16_le(&mut self, field: &'static str) -> Result<u16, LayoutError> {
        Ok(u16::from_le_bytes(self.read_bytes(field)?))
    }

    pub fn read_u64_le(&mut self, field: &'static str) -> Result<u64, LayoutError> {
        Ok(u64::from_le_bytes(self.read_bytes(field)?))
    }

    pub fn read_i64_le(&mut self, field: &'static str) -> Result<i64, LayoutError> {
        Ok(i64::from_le_bytes(self.read_bytes(field)?))
    }

    pub fn read_pubkey(&mut self, field: &'static str) -> Result<Pubkey, LayoutError> {
        Ok(Pubkey::new_from_array(self.read_bytes(field)?))
    }

    /// Advances over an opaque region without interpreting it
    pub fn skip(&mut self, field: &'static str, width: usize) -> Result<(), LayoutError> {
        self.take(field, width).map(|_| ())
    }
}
