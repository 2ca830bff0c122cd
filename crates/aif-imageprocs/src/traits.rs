/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use aif::AifImage;
use aif_core::log::trace;

use crate::errors::ImageOperationsErrors;

/// An operation that manipulates a decoded image in place
pub trait OperationsTrait {
    /// Get the name of this operation
    fn get_name(&self) -> &'static str;

    /// Run the operation
    ///
    /// Callers should use [`execute`](Self::execute), which checks
    /// the image before handing it over.
    fn execute_impl(&self, image: &mut AifImage) -> Result<(), ImageOperationsErrors>;

    /// Execute the operation on the image
    ///
    /// # Errors
    /// - The pixel buffer length doesn't match the image dimensions
    /// - Any error the operation itself raises
    fn execute(&self, image: &mut AifImage) -> Result<(), ImageOperationsErrors> {
        let colorspace = image.colorspace();
        let expected = image.width * image.height * colorspace.num_components();

        if image.pixels.len() != expected {
            return Err(ImageOperationsErrors::WrongPixelLength(
                expected,
                image.pixels.len()
            ));
        }
        trace!("Running {} on a {:?} image", self.get_name(), colorspace);

        self.execute_impl(image)
    }
}
