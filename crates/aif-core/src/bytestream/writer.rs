/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

mod no_std_writer;

/// Encapsulates a simple Byte writer with
/// support for little endian writes
pub struct ZWriter<T: ZByteWriterTrait> {
    buffer:        T,
    bytes_written: usize
}

impl<T: ZByteWriterTrait> ZWriter<T> {
    /// Create a new writer for the sink
    pub fn new(data: T) -> ZWriter<T> {
        ZWriter {
            buffer:        data,
            bytes_written: 0
        }
    }

    /// Write all bytes or error out if the sink refused some of them
    pub fn write_all(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.buffer.write_all_bytes(buf)?;
        self.bytes_written += buf.len();
        Ok(())
    }

    pub fn write_const_bytes<const N: usize>(
        &mut self, byte: &[u8; N]
    ) -> Result<(), ZByteIoError> {
        self.buffer.write_const_bytes(byte)?;
        self.bytes_written += N;
        Ok(())
    }

    /// Write a `u16` in little endian or error out
    /// if there is not enough space
    ///
    /// # Example
    /// ```
    /// use aif_core::bytestream::ZWriter;
    /// let mut buf = [0; 2];
    /// let mut stream = ZWriter::new(&mut buf[..]);
    /// assert!(stream.write_u16_le_err(0x0102).is_ok());
    /// assert_eq!(buf, [0x02, 0x01]);
    /// ```
    #[inline]
    pub fn write_u16_le_err(&mut self, value: u16) -> Result<(), ZByteIoError> {
        self.write_const_bytes(&value.to_le_bytes())
    }

    /// Return the number of bytes the writer has written
    pub const fn bytes_written(&self) -> usize {
        self.bytes_written
    }

    pub fn reserve(&mut self, additional: usize) -> Result<(), ZByteIoError> {
        self.buffer.reserve_capacity(additional)
    }

    pub fn flush(&mut self) -> Result<(), ZByteIoError> {
        self.buffer.flush_bytes()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::bytestream::{ZByteIoError, ZWriter};

    #[test]
    fn little_endian_layout() {
        let mut sink = Vec::new();
        let mut writer = ZWriter::new(&mut sink);
        writer.write_u16_le_err(0xBEEF).unwrap();
        writer.write_const_bytes(b"AIF").unwrap();
        writer.write_all(&[0x01, 0x02]).unwrap();
        assert_eq!(writer.bytes_written(), 7);

        assert_eq!(sink, [0xEF, 0xBE, b'A', b'I', b'F', 0x01, 0x02]);
    }

    #[test]
    fn slice_overflow_is_an_error() {
        let mut storage = [0_u8; 3];
        let mut writer = ZWriter::new(&mut storage[..]);

        writer.write_u16_le_err(7).unwrap();
        let result = writer.write_u16_le_err(7);
        assert!(matches!(result, Err(ZByteIoError::NotEnoughBuffer(1, 2))));
    }
}
