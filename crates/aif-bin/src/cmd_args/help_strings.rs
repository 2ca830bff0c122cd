pub static INFO_HELP: &str = "Print header information of AIF files

Every header field is checked on its own and invalid fields are
marked instead of stopping the report. The checksum is recomputed
over the whole file and compared with the stored one.";

pub static BRIGHTEN_HELP: &str = "Brighten or darken an image

Range is between -100 to 100. -100 gives a black image,
100 doubles the lightness of every pixel";

pub static CONVERT_COLOR_HELP: &str = "Change the pixel format of an image

Converting RGB to grayscale weighs the channels as
(299 * r + 587 * g + 114 * b) / 1000.
Converting grayscale to RGB replicates the value into every channel.";

pub static DECOMPRESS_HELP: &str = "Rewrite an image with uncompressed pixel data";

pub static COMPRESS_HELP: &str = "Rewrite an image with run-length encoded rows

Works on both compressed and uncompressed input files";

pub static STRICT_HELP: &str = "Treat recoverable problems as errors

A checksum mismatch or unused bytes at the end of a compressed row
are reported as warnings unless this is set.";
