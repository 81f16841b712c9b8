use asg_lookup::azure::{authenticate, provider_from_env, ArmClient};
use asg_lookup::config::{Args, Config};
use asg_lookup::output::print_report;
use asg_lookup::run_asg_lookup;
use clap::Parser;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("WARN: logging disabled, could not load log4rs.yml: {e}");
    }
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config = Config::from_args(Args::parse())?;

    let tokens = provider_from_env();
    authenticate(tokens.as_ref()).await?;
    let arm = ArmClient::new(tokens, &config.arm_endpoint);

    let report = run_asg_lookup(
        &arm,
        &config.requested_ids,
        &config.target_dir,
        config.failure_policy,
    )
    .await?;
    print_report(&report);

    if !report.failed.is_empty() {
        return Err(format!("{} subscription(s) failed", report.failed.len()).into());
    }
    Ok(())
}
