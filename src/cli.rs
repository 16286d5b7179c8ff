//! Command-line interface

use clap::Parser;
use ecc_elgamal::{curve_points, Curve, DefaultCurve, Ecc, Scalar};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Parser)]
#[command(name = "ecc_elgamal")]
#[command(author = "ecc_elgamal Contributors")]
#[command(version = "1.0.0")]
#[command(about = "Toy elliptic-curve ElGamal", long_about = "Toy elliptic-curve ElGamal\n\nEncrypts a message point on y^2 = x^3 + ax + b (mod p) and recovers it\nthrough the backdoor decryption path. p must be a prime of the form 4n + 3.")]
pub struct Cli {
    /// Field prime, of the form 4n + 3
    #[arg(short, long, default_value_t = DefaultCurve::P, allow_negative_numbers = true)]
    pub p: Scalar,

    /// Curve coefficient a
    #[arg(short, long, default_value_t = DefaultCurve::A, allow_negative_numbers = true)]
    pub a: Scalar,

    /// Curve coefficient b
    #[arg(short, long, default_value_t = DefaultCurve::B, allow_negative_numbers = true)]
    pub b: Scalar,

    /// Message x coordinate
    #[arg(short, long, default_value_t = DefaultCurve::MESSAGE.0, allow_negative_numbers = true)]
    pub x: Scalar,

    /// Message y coordinate
    #[arg(short, long, default_value_t = DefaultCurve::MESSAGE.1, allow_negative_numbers = true)]
    pub y: Scalar,

    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// List the generator candidates of the curve and exit
    #[arg(long)]
    pub points: bool,
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.points {
        list_points(&cli)?;
        return Ok(());
    }

    match cli.seed {
        Some(seed) => run(&cli, StdRng::seed_from_u64(seed)),
        None => run(&cli, rand::thread_rng()),
    }
}

fn run<R: Rng>(cli: &Cli, rng: R) -> anyhow::Result<()> {
    let mut ecc = Ecc::with_rng(cli.p, cli.a, cli.b, rng)?;

    println!("Generator: {}", ecc.generator());
    println!("Public Key: {}", ecc.public_key());

    let message = ecc.create_message(cli.x, cli.y);
    if !ecc.curve().is_on_curve(&message.to_point()) {
        eprintln!(
            "Warning: {} is not on the curve, decryption will not recover it",
            message
        );
    }

    let ciphered = ecc.encrypt(&message)?;
    println!("{}", "=".repeat(60));
    println!("Ciphered Text Message");
    println!("C1: {}", ciphered.c1);
    println!("C2: {}", ciphered.c2);
    println!("{}", "=".repeat(60));

    let decrypted = ecc.decrypt_backdoor(&ciphered)?;
    println!("Decrypted Message: {}", decrypted);
    Ok(())
}

fn list_points(cli: &Cli) -> anyhow::Result<()> {
    let curve = Curve::new(cli.p, cli.a, cli.b)?;
    let points = curve_points(&curve);

    println!(
        "\ny^2 = x^3 + {}x + {} (mod {}): {} candidate points\n",
        curve.a(),
        curve.b(),
        curve.p(),
        points.len()
    );
    for point in points {
        println!("  {}", point);
    }
    println!();
    Ok(())
}
