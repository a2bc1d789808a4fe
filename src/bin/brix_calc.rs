//! One-shot sugar addition calculator
//! Usage: cargo run --bin brix_calc -- [pulp_mass_kg] [initial_brix] [target_brix]

use tracing_subscriber::EnvFilter;

use brix::models::{
    AdjustmentRequest, DEFAULT_INITIAL_BRIX, DEFAULT_INITIAL_PULP_MASS, DEFAULT_TARGET_BRIX,
};
use brix::tools::sweetener;

fn parse_arg(args: &[String], index: usize, name: &str, default: f64) -> Result<f64, String> {
    match args.get(index) {
        Some(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| format!("Invalid {}: '{}' is not a number", name, s)),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("brix=warn".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let req = AdjustmentRequest::new(
        parse_arg(&args, 1, "pulp mass", DEFAULT_INITIAL_PULP_MASS)?,
        parse_arg(&args, 2, "initial Brix", DEFAULT_INITIAL_BRIX)?,
        parse_arg(&args, 3, "target Brix", DEFAULT_TARGET_BRIX)?,
    );

    println!("Initial pulp mass (M1): {} kg", req.initial_pulp_mass);
    println!("Initial Brix (X1): {}%", req.initial_brix);
    println!("Target Brix (X3): {}%", req.target_brix);

    match sweetener::calculate_sweetener_addition(&req) {
        Ok(result) => {
            println!();
            println!("Sugar to add (M2): {}", result.sweetener_mass_display);
            println!("Final pulp mass (M3): {}", result.final_pulp_mass_display);
            println!();
            println!("{}", result.note);
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
