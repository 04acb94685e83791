use std::io;
use anyhow::Result;
use log::{error, info};
use crate::errors::RunError;
use crate::initialization::init;
use crate::worker::{run, Outcome};

mod config;
mod errors;
mod initialization;
mod logging;
mod manager_climate;
mod parsing;
mod report;
pub mod models;
mod worker;

fn main() -> Result<()> {
    // Load config and set up the api client. If initialization fails there is nothing to report.
    let (_config, mgr) = match init() {
        Ok((c, m)) => (c, m),
        Err(e) => {
            return Err(RunError(format!("Initialization failed: {}", e)))?;
        }
    };

    let mut stdout = io::stdout().lock();
    match run(&mgr.climate, &mut stdout) {
        Ok(Outcome::Reported(n)) => info!("reported {} records", n),
        Ok(Outcome::Failed(status)) => info!("no data, status {}", status),
        Err(e) => {
            error!("Run failed: {}", e);
            return Err(RunError(format!("Run failed: {}", e)))?;
        }
    }

    Ok(())
}
