/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteReaderTrait, ZSeekFrom};

/// A cursor over an in memory buffer
///
/// This works in `no_std` environments and is the fastest way
/// to feed the decoder bytes that are already in memory
pub struct ZCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ZCursor<T> {
    pub fn new(buffer: T) -> ZCursor<T> {
        ZCursor {
            stream:   buffer,
            position: 0
        }
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.stream.as_ref().len()
    }
}

impl<T: AsRef<[u8]>> ZByteReaderTrait for ZCursor<T> {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ZByteIoError> {
        let start = core::cmp::min(self.position, self.len());
        let available = self.len() - start;

        if available < buf.len() {
            return Err(ZByteIoError::NotEnoughBytes(buf.len(), available));
        }
        buf.copy_from_slice(&self.stream.as_ref()[start..start + buf.len()]);
        self.position = start + buf.len();

        Ok(())
    }

    fn z_seek(&mut self, from: ZSeekFrom) -> Result<u64, ZByteIoError> {
        let new_position = match from {
            ZSeekFrom::Start(position) => {
                usize::try_from(position).map_err(ZByteIoError::from)?
            }
            ZSeekFrom::End(position) => {
                let end = i64::try_from(self.len())?;
                usize::try_from(end + position)
                    .map_err(|_| ZByteIoError::SeekError("Seek before start of buffer"))?
            }
            ZSeekFrom::Current(position) => {
                let current = i64::try_from(self.position)?;
                usize::try_from(current + position)
                    .map_err(|_| ZByteIoError::SeekError("Seek before start of buffer"))?
            }
        };
        self.position = new_position;

        Ok(self.position as u64)
    }

    #[inline(always)]
    fn is_eof(&mut self) -> Result<bool, ZByteIoError> {
        Ok(self.position >= self.len())
    }

    #[inline(always)]
    fn z_position(&mut self) -> Result<u64, ZByteIoError> {
        Ok(self.position as u64)
    }

    fn read_remaining(&mut self, sink: &mut alloc::vec::Vec<u8>) -> Result<usize, ZByteIoError> {
        let start = core::cmp::min(self.position, self.len());
        let remaining = &self.stream.as_ref()[start..];
        sink.extend_from_slice(remaining);
        self.position = self.len();

        Ok(remaining.len())
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::bytestream::{ZByteReaderTrait, ZCursor, ZSeekFrom};

    #[test]
    fn seek_before_start_fails() {
        let mut cursor = ZCursor::new([1_u8, 2, 3]);
        assert!(cursor.z_seek(ZSeekFrom::Current(-1)).is_err());
        assert_eq!(cursor.z_seek(ZSeekFrom::End(-1)).unwrap(), 2);
    }

    #[test]
    fn short_exact_read_keeps_position() {
        let mut cursor = ZCursor::new(vec![1_u8, 2, 3]);
        let mut buf = [0; 5];
        assert!(cursor.read_exact_bytes(&mut buf).is_err());
        assert_eq!(cursor.z_position().unwrap(), 0);

        let mut buf = [0; 3];
        cursor.read_exact_bytes(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert!(cursor.is_eof().unwrap());
    }
}
