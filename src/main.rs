//! ecc_elgamal - toy elliptic-curve ElGamal demo
//!
//! Sets up a curve, encrypts one message point and decrypts it again.

mod cli;

fn main() {
    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
