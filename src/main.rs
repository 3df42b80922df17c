//! Binary entry point for `scaffold-init`.

use std::process;

fn main() {
    if let Err(e) = scaffold_init::run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
