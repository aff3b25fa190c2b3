//! Output format tokens

use std::fmt;

use log::warn;

/// A supported output format
///
/// Variants are declared in export order: vector formats first, then
/// raster formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Format {
    Svg,
    Pdf,
    Eps,
    Png,
    Gif,
    Jpg,
}

impl Format {
    pub const ALL: [Format; 6] = [
        Format::Svg,
        Format::Pdf,
        Format::Eps,
        Format::Png,
        Format::Gif,
        Format::Jpg,
    ];

    /// Parse one case-insensitive token; `jpeg` is accepted for JPEG
    pub fn parse(token: &str) -> Option<Format> {
        match token.trim().to_ascii_lowercase().as_str() {
            "svg" => Some(Format::Svg),
            "pdf" => Some(Format::Pdf),
            "eps" => Some(Format::Eps),
            "png" => Some(Format::Png),
            "gif" => Some(Format::Gif),
            "jpg" | "jpeg" => Some(Format::Jpg),
            _ => None,
        }
    }

    /// Parse a list of tokens, each of which may hold several formats
    /// separated by commas or whitespace
    ///
    /// Unknown tokens are skipped with a warning. The result is sorted in
    /// export order without duplicates.
    pub fn parse_list<I, S>(tokens: I) -> Vec<Format>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut formats = Vec::new();
        for token in tokens {
            for part in token
                .as_ref()
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
            {
                match Format::parse(part) {
                    Some(format) => formats.push(format),
                    None => warn!("ignoring unknown format '{}'", part),
                }
            }
        }
        formats.sort();
        formats.dedup();
        formats
    }

    pub fn extension(self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Pdf => "pdf",
            Format::Eps => "eps",
            Format::Png => "png",
            Format::Gif => "gif",
            Format::Jpg => "jpg",
        }
    }

    /// Whether the format is resolution independent
    pub fn is_vector(self) -> bool {
        matches!(self, Format::Svg | Format::Pdf | Format::Eps)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.extension().to_ascii_uppercase())
    }
}
