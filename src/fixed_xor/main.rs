use std::process;

use clap::{arg, Command};

use byte_codecs::convert;

pub fn main() {
    let matches = Command::new("fixed_xor")
        .arg(arg!([x] "The first hex string").required(true))
        .arg(arg!([y] "The second hex string, the same length as the first").required(true))
        .get_matches();

    let hex_x = matches.value_of("x").unwrap();
    let hex_y = matches.value_of("y").unwrap();

    match convert::hex_fixed_xor(hex_x, hex_y) {
        Ok(combined) => {
            println!("{}", combined);
        },
        Err(e) => {
            eprintln!("Failed to combine inputs: {}", e);
            process::exit(1);
        }
    }
}
