//! Reg Probe - one-shot smoke probe for the organization registration API
//!
//! Sends the canonical organization registration payload to the local API
//! server and prints the HTTP status and JSON body it answers with.

use reg_probe::{build_payload, RegProbeError, Result, SmokeRunner};
use std::env;
use std::process;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = reg_probe::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    reg_probe::logger::init_logging();

    // Get command line arguments
    let args: Vec<String> = env::args().collect();

    // Check for help
    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        print_help();
        return Ok(());
    }

    // The probe takes no inputs; anything else on the command line is a mistake
    if args.len() > 1 {
        let e = RegProbeError::cli(format!("unexpected argument '{}'", args[1]));
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    // Run the probe
    if let Err(e) = run_probe().await {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    Ok(())
}

/// Main probe workflow
async fn run_probe() -> Result<()> {
    println!("🔥 Reg Probe - registration API smoke test");
    println!("═══════════════════════════════════════════");
    println!();

    let payload = build_payload();
    let runner = SmokeRunner::new();

    println!("📤 POST {}", runner.config().endpoint_url());
    println!();

    let report = runner.run(&payload).await?;

    println!("{}", report.summary());

    Ok(())
}

/// Print help information
fn print_help() {
    println!("🔥 Reg Probe - registration API smoke test");
    println!("═══════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    reg-probe");
    println!();
    println!("Sends a fixed organization registration payload to");
    println!("http://localhost:5000/api/auth/register-organization and prints");
    println!("the HTTP status code and JSON response body as one line:");
    println!();
    println!("    Register Org: <status> <body>");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    RUST_LOG    Log filter for diagnostics (default: warn)");
    println!();
    println!("The probe exits non-zero if the server is unreachable or answers");
    println!("with a body that is not JSON.");
}
