// src/lib.rs

pub mod config;
pub mod converter;
pub mod error;

use clap::Parser;
use log::info;
use simplelog::{ConfigBuilder, WriteLogger};
use std::{
    error::Error,
    fs::OpenOptions,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use crate::config::{Cli, Config};
use crate::converter::{FontHeader, ImageBase64};
use crate::error::ConvertError;

pub const FONT_PROMPT: &str = "Enter Font Path: ";
pub const IMAGE_PROMPT: &str = "Enter the path to the image file: ";

// -------------- Logging --------------

fn init_logging(cfg: &Config) -> Result<(), ConvertError> {
    if !cfg.log_enabled {
        return Ok(());
    }
    let file = OpenOptions::new()
        .write(true)
        .append(cfg.log_append)
        .truncate(!cfg.log_append)
        .create(true)
        .open(&cfg.log_file)
        .map_err(|e| ConvertError::Io(format!("{}: {}", cfg.log_file, e)))?;
    let log_cfg = ConfigBuilder::new().set_time_format_str("%+").build();
    WriteLogger::init(cfg.log_level, log_cfg, file)
        .map_err(|e| ConvertError::InvalidConfiguration(e.to_string()))
}

// -------------- Prompt --------------

/// Writes `prompt` to `output` and reads one trimmed line from `input`.
pub fn prompt_for_path<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf, ConvertError> {
    write!(output, "{}", prompt).map_err(|e| ConvertError::Io(e.to_string()))?;
    output.flush().map_err(|e| ConvertError::Io(e.to_string()))?;

    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .map_err(|e| ConvertError::Io(e.to_string()))?;
    let path = line.trim();
    if n == 0 || path.is_empty() {
        return Err(ConvertError::InvalidPath("no input path given".into()));
    }
    Ok(PathBuf::from(path))
}

fn input_path(cfg: &Config, prompt: &str) -> Result<PathBuf, ConvertError> {
    match &cfg.input {
        Some(p) => Ok(p.clone()),
        None => prompt_for_path(prompt, &mut io::stdin().lock(), &mut io::stdout()),
    }
}

// -------------- Entry points --------------

/// `font2header`: writes `Font.h` for a TTF/OTF file.
pub fn run_font_header() -> Result<(), Box<dyn Error>> {
    let cfg = Config::from(Cli::parse())?;
    init_logging(&cfg)?;

    if cfg.clear_screen {
        print!("\x1B[2J\x1B[1;1H");
    }
    println!("This tool supports TTF and OTF fonts");
    let input = input_path(&cfg, FONT_PROMPT)?;

    let out = converter::convert(&FontHeader, &input, &cfg.output_dir, cfg.max_input_size)?;
    info!("font header written to {}", out.display());
    println!("Done");
    Ok(())
}

/// `img2base64`: writes `<stem>.txt` holding the Base64 of an image.
pub fn run_image_base64() -> Result<(), Box<dyn Error>> {
    let cfg = Config::from(Cli::parse())?;
    init_logging(&cfg)?;

    let input = input_path(&cfg, IMAGE_PROMPT)?;
    let out = converter::convert(&ImageBase64, &input, &cfg.output_dir, cfg.max_input_size)?;
    println!("Base64 encoded image saved to {}", out.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_trims_line_and_echoes_prompt() {
        let mut stdin = io::Cursor::new(b"  fonts/Roboto.ttf \n".to_vec());
        let mut stdout = Vec::new();
        let p = prompt_for_path(FONT_PROMPT, &mut stdin, &mut stdout).unwrap();
        assert_eq!(p, PathBuf::from("fonts/Roboto.ttf"));
        assert_eq!(stdout, FONT_PROMPT.as_bytes());
    }

    #[test]
    fn prompt_rejects_eof_and_blank_line() {
        let mut out = Vec::new();
        let mut empty = io::Cursor::new(Vec::new());
        assert!(matches!(
            prompt_for_path(IMAGE_PROMPT, &mut empty, &mut out),
            Err(ConvertError::InvalidPath(_))
        ));
        let mut blank = io::Cursor::new(b"\n".to_vec());
        assert!(prompt_for_path(IMAGE_PROMPT, &mut blank, &mut out).is_err());
    }
}
