pub mod actions;
pub mod cli;
pub mod config;
pub mod driver;
pub mod errors;
pub mod explorer;
pub mod keypair;
pub mod rpc;
pub mod telemetry;
pub mod token;

pub use driver::{execute, run, run_with_config};
pub use errors::PaymentsError;
