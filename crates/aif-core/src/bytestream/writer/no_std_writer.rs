/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::bytestream::{ZByteIoError, ZByteWriterTrait};

impl ZByteWriterTrait for &mut [u8] {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        if buf.len() > self.len() {
            return Err(ZByteIoError::NotEnoughBuffer(self.len(), buf.len()));
        }
        let (a, b) = core::mem::take(self).split_at_mut(buf.len());
        a.copy_from_slice(buf);
        *self = b;

        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, _: usize) -> Result<(), ZByteIoError> {
        // can't really pre-allocate anything here
        Ok(())
    }
}

impl ZByteWriterTrait for &mut alloc::vec::Vec<u8> {
    fn write_all_bytes(&mut self, buf: &[u8]) -> Result<(), ZByteIoError> {
        self.extend_from_slice(buf);
        Ok(())
    }

    fn flush_bytes(&mut self) -> Result<(), ZByteIoError> {
        Ok(())
    }

    fn reserve_capacity(&mut self, size: usize) -> Result<(), ZByteIoError> {
        self.reserve(size);
        Ok(())
    }
}
