// src/converter.rs

use base64::Engine;
use log::{debug, info};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::ConvertError;

/// File the font tool always writes to.
pub const FONT_HEADER_FILE: &str = "Font.h";
/// Identifier of the array declared in the generated header.
pub const FONT_ARRAY_NAME: &str = "Custom";

// -------------- Converter trait --------------

/// One "read bytes, render text, write file" transformation.
pub trait Converter {
    fn name(&self) -> &'static str;
    fn render(&self, input: &[u8]) -> String;
    /// Where the rendered text for `input` goes inside `out_dir`.
    fn output_path(&self, input: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError>;
}

// -------------- Font header --------------

/// Renders each byte as `0xNN` (lowercase), separated by `", "`.
pub fn encode_hex_literals(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{}", hex::encode([*b])))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds the complete `Font.h` contents for `bytes`.
///
/// The declared array size is the character length of the hex literal
/// string, not the byte count. Headers produced by earlier versions of this
/// tool carry the same size, so it is kept for byte-for-byte compatibility.
pub fn render_font_header(bytes: &[u8]) -> String {
    let hex_data = encode_hex_literals(bytes);
    format!(
        "#pragma once\n#include <cstdint>\nconst std::uint8_t {}[{}]\n{{\n{}\n}};",
        FONT_ARRAY_NAME,
        hex_data.len(),
        hex_data
    )
}

pub struct FontHeader;

impl Converter for FontHeader {
    fn name(&self) -> &'static str {
        "font-header"
    }

    fn render(&self, input: &[u8]) -> String {
        render_font_header(input)
    }

    fn output_path(&self, _input: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError> {
        Ok(out_dir.join(FONT_HEADER_FILE))
    }
}

// -------------- Image base64 --------------

/// Standard alphabet, `=` padded, no line wrapping.
pub fn image_to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// `photo.jpeg` becomes `photo.txt`; only the final extension is replaced
/// and directory components are dropped.
pub fn output_file_name(input: &Path) -> Result<PathBuf, ConvertError> {
    let stem = input.file_stem().ok_or_else(|| {
        ConvertError::InvalidPath(format!("{} has no file name", input.display()))
    })?;
    // `with_extension` on the stem would strip a second extension
    let mut name = stem.to_os_string();
    name.push(".txt");
    Ok(PathBuf::from(name))
}

pub struct ImageBase64;

impl Converter for ImageBase64 {
    fn name(&self) -> &'static str {
        "image-base64"
    }

    fn render(&self, input: &[u8]) -> String {
        image_to_base64(input)
    }

    fn output_path(&self, input: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError> {
        Ok(out_dir.join(output_file_name(input)?))
    }
}

// -------------- Driver --------------

/// Reads the whole file, rejecting it when it exceeds `max_size` bytes.
pub fn read_input(path: &Path, max_size: Option<usize>) -> Result<Vec<u8>, ConvertError> {
    let bytes =
        fs::read(path).map_err(|e| ConvertError::Io(format!("{}: {}", path.display(), e)))?;
    if let Some(max) = max_size {
        if bytes.len() > max {
            return Err(ConvertError::MaxSizeExceeded(max, bytes.len()));
        }
    }
    Ok(bytes)
}

/// Runs `converter` on `input`, overwriting its output file in `out_dir`.
/// Nothing is written when the input cannot be read.
pub fn convert(
    converter: &dyn Converter,
    input: &Path,
    out_dir: &Path,
    max_size: Option<usize>,
) -> Result<PathBuf, ConvertError> {
    let out_path = converter.output_path(input, out_dir)?;
    let bytes = read_input(input, max_size)?;
    info!(
        "{}: read {} bytes from {}",
        converter.name(),
        bytes.len(),
        input.display()
    );

    let text = converter.render(&bytes);
    debug!("{}: rendered {} chars", converter.name(), text.len());

    fs::write(&out_path, text)
        .map_err(|e| ConvertError::Io(format!("{}: {}", out_path.display(), e)))?;
    info!("{}: wrote {}", converter.name(), out_path.display());
    Ok(out_path)
}

pub fn convert_font(input: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError> {
    convert(&FontHeader, input, out_dir, None)
}

pub fn convert_image(input: &Path, out_dir: &Path) -> Result<PathBuf, ConvertError> {
    convert(&ImageBase64, input, out_dir, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_literals_are_lowercase_and_comma_separated() {
        assert_eq!(encode_hex_literals(&[0x00, 0xab, 0x7f]), "0x00, 0xab, 0x7f");
        assert_eq!(encode_hex_literals(&[0xff]), "0xff");
        assert_eq!(encode_hex_literals(&[]), "");
    }

    #[test]
    fn declared_size_is_hex_string_length() {
        let bytes = [0x01u8, 0x02, 0x03];
        let header = render_font_header(&bytes);
        // 3 * 4 chars of literals + 2 * 2 chars of separators
        assert!(header.contains("Custom[16]"));
        assert_eq!(encode_hex_literals(&bytes).len(), 6 * bytes.len() - 2);
    }

    #[test]
    fn font_header_layout() {
        assert_eq!(
            render_font_header(&[0x10, 0x20]),
            "#pragma once\n#include <cstdint>\nconst std::uint8_t Custom[10]\n{\n0x10, 0x20\n};"
        );
    }

    #[test]
    fn empty_font_header() {
        assert_eq!(
            render_font_header(&[]),
            "#pragma once\n#include <cstdint>\nconst std::uint8_t Custom[0]\n{\n\n};"
        );
    }

    #[test]
    fn base64_uses_standard_padded_alphabet() {
        assert_eq!(image_to_base64(b"Man"), "TWFu");
        assert_eq!(image_to_base64(b"M"), "TQ==");
        assert_eq!(image_to_base64(&[0xfb, 0xff]), "+/8=");
        assert_eq!(image_to_base64(&[]), "");
    }

    #[test]
    fn output_name_replaces_final_extension_only() {
        let name = |p: &str| output_file_name(Path::new(p)).unwrap();
        assert_eq!(name("photo.jpeg"), PathBuf::from("photo.txt"));
        assert_eq!(name("archive.tar.gz"), PathBuf::from("archive.tar.txt"));
        assert_eq!(name("/tmp/images/icon.png"), PathBuf::from("icon.txt"));
        assert_eq!(name("noext"), PathBuf::from("noext.txt"));
    }

    #[test]
    fn output_name_requires_file_name() {
        assert!(matches!(
            output_file_name(Path::new("..")),
            Err(ConvertError::InvalidPath(_))
        ));
    }

    #[test]
    fn font_output_is_fixed() {
        let p = FontHeader
            .output_path(Path::new("fonts/Roboto.ttf"), Path::new("out"))
            .unwrap();
        assert_eq!(p, Path::new("out").join("Font.h"));
    }
}
