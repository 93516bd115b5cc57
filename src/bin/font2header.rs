// src/bin/font2header.rs

use asset2text::run_font_header;

fn main() {
    if let Err(e) = run_font_header() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
