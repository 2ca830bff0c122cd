/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use aif::{AifDecoder, AifEncoder, AifImage, AifInfo};
use aif_core::options::DecoderOptions;
use log::{debug, info};

use crate::errors::CmdErrors;

pub struct AifFile {
    file_path: PathBuf,
    options:   DecoderOptions
}

impl AifFile {
    pub fn new(file_path: PathBuf, options: DecoderOptions) -> AifFile {
        AifFile { file_path, options }
    }

    fn decoder(&self) -> Result<AifDecoder<BufReader<File>>, CmdErrors> {
        let fd = File::open(&self.file_path).map_err(|err| open_error(&self.file_path, err))?;
        let fd = BufReader::new(fd);

        Ok(AifDecoder::new_with_options(fd, self.options))
    }

    /// Read header and checksum information without decoding pixels
    pub fn inspect(&self) -> Result<AifInfo, CmdErrors> {
        Ok(self.decoder()?.inspect()?)
    }

    pub fn into_image(self) -> Result<AifImage, CmdErrors> {
        let image = self.decoder()?.decode_image()?;

        debug!(
            "Decoded {}, {}x{} {}",
            self.file_path.display(),
            image.width,
            image.height,
            image.pixel_format.name()
        );
        Ok(image)
    }
}

/// A missing or unreadable input is reported as not found,
/// anything else as a plain I/O error
fn open_error(path: &Path, err: std::io::Error) -> CmdErrors {
    match err.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => {
            CmdErrors::NotFound(path.to_path_buf())
        }
        _ => CmdErrors::Io(err)
    }
}

/// Encode the image into a complete file in memory
///
/// The image compression and pixel data offset are kept.
pub fn encode_image(image: &AifImage) -> Result<Vec<u8>, CmdErrors> {
    let mut encoder = AifEncoder::new(&image.pixels, image.encoder_options());
    encoder
        .set_compression(image.compression)
        .set_pixel_data_offset(image.pixel_data_offset);

    let mut file = Vec::with_capacity(encoder.max_size());
    encoder.encode(&mut file)?;

    Ok(file)
}

/// Create or truncate `path` and write `contents` to it
pub fn write_output(path: &Path, contents: &[u8]) -> Result<(), CmdErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)
        .map_err(CmdErrors::WriteFailure)?;

    let mut buf_writer = BufWriter::new(file);

    buf_writer
        .write_all(contents)
        .and_then(|()| buf_writer.flush())
        .map_err(CmdErrors::WriteFailure)?;

    info!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::{Error, ErrorKind};
    use std::path::{Path, PathBuf};

    use aif_core::options::DecoderOptions;

    use crate::errors::CmdErrors;
    use crate::file_io::{open_error, AifFile};

    #[test]
    fn unreadable_input_is_not_found() {
        let path = Path::new("locked.aif");

        let err = open_error(path, Error::from(ErrorKind::PermissionDenied));
        assert!(matches!(err, CmdErrors::NotFound(p) if p == path));

        let err = open_error(path, Error::from(ErrorKind::NotFound));
        assert!(matches!(err, CmdErrors::NotFound(_)));

        let err = open_error(path, Error::from(ErrorKind::Interrupted));
        assert!(matches!(err, CmdErrors::Io(_)));
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let path: PathBuf = dir.path().join("missing.aif");

        let result = AifFile::new(path.clone(), DecoderOptions::default()).inspect();
        assert!(matches!(result, Err(CmdErrors::NotFound(p)) if p == path));
    }
}
