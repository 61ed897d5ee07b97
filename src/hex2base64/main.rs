use std::process;

use clap::{arg, Command};

use byte_codecs::convert;

pub fn main() {
    let matches = Command::new("hex2base64")
        .arg(arg!([hex] "The hex string to encode as base64").required(true))
        .get_matches();

    match convert::hex_to_base64(matches.value_of("hex").unwrap()) {
        Ok(encoded) => {
            println!("{}", encoded);
        },
        Err(e) => {
            eprintln!("Failed to decode hex input: {}", e);
            process::exit(1);
        }
    }
}
