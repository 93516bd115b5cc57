// src/bin/img2base64.rs

use asset2text::run_image_base64;

fn main() {
    if let Err(e) = run_image_base64() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
