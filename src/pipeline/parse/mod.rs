mod fit;
mod gpx;

use crate::error::FormatError;
use crate::types::activity::{FileFormat, ParsedTrack};

pub trait Parser {
    fn parse(&self, bytes: &[u8], fallback_name: &str) -> Result<ParsedTrack, FormatError>;
}

pub fn parse(
    bytes: &[u8],
    format: FileFormat,
    fallback_name: &str,
) -> Result<ParsedTrack, FormatError> {
    match format {
        FileFormat::Gpx => gpx::GpxParser.parse(bytes, fallback_name),
        FileFormat::Fit => fit::FitParser.parse(bytes, fallback_name),
    }
}
