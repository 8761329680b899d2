use solana_sdk::signature::Keypair;
use tracing::{info, warn};

use crate::{
    actions::{
        instructions::{ReceivePaymentsInstructions, SendPaymentsInstructions},
        ActionOutcome, Operation, PaymentAction, ReceivePayments, SendPayments, UnwrapToSpl,
    },
    cli::Commands,
    config::{ConfigError, PaymentConfig, ValidatedConfig},
    errors::PaymentsError,
    explorer::ExplorerLink,
    keypair::load_keypair,
    rpc::{connect, PaymentRpc},
};

pub fn build_action(
    operation: Operation,
    config: &ValidatedConfig,
) -> Result<Box<dyn PaymentAction>, ConfigError> {
    let mint = config.mint;
    let amount = config.amount;
    let action: Box<dyn PaymentAction> = match operation {
        Operation::Receive => Box::new(ReceivePayments {
            mint,
            recipient: config.require_recipient(operation)?,
        }),
        Operation::Send => Box::new(SendPayments {
            mint,
            recipient: config.require_recipient(operation)?,
            amount,
        }),
        Operation::Unwrap => Box::new(UnwrapToSpl { mint, amount }),
        Operation::ReceiveInstructions => Box::new(ReceivePaymentsInstructions {
            mint,
            recipient: config.require_recipient(operation)?,
        }),
        Operation::SendInstructions => Box::new(SendPaymentsInstructions {
            mint,
            recipient: config.require_recipient(operation)?,
            amount,
        }),
    };
    Ok(action)
}

/// Runs one operation against `rpc` with an already validated configuration.
pub async fn run<R: PaymentRpc>(
    operation: Operation,
    config: &ValidatedConfig,
    rpc: &mut R,
    payer: &Keypair,
) -> Result<ActionOutcome, PaymentsError> {
    let action = build_action(operation, config)?;
    let url = rpc.get_url();
    // drop the query string, it may carry an api key
    let endpoint = url.split('?').next().unwrap_or_default();
    info!("Running {} against {}", action.operation(), endpoint);
    Ok(action.execute(rpc, payer).await?)
}

/// Validates `config` for `operation` and only then runs it. Placeholder or
/// malformed values fail before `rpc` sees a single request.
pub async fn run_with_config<R: PaymentRpc>(
    operation: Operation,
    config: &PaymentConfig,
    rpc: &mut R,
    payer: &Keypair,
) -> Result<ActionOutcome, PaymentsError> {
    let config = config.validate(operation)?;
    run(operation, &config, rpc, payer).await
}

/// Validates the configuration, loads the payer and runs the command
/// against the configured endpoint.
pub async fn execute(command: &Commands) -> Result<ExplorerLink, PaymentsError> {
    let operation = command.operation();
    let args = command.args();

    let config = args.payment_config();
    // fail on placeholders before touching the keypair or the network
    config.validate(operation)?;
    let payer = load_keypair(&args.keypair_path())?;

    if args.rpc_url.is_none() && args.helius_api_key.is_none() {
        warn!("HELIUS_API_KEY is not set, requests to the devnet endpoint will be rejected");
    }
    let mut rpc = connect(args.rpc_url()).await?;

    let outcome = run_with_config(operation, &config, &mut rpc, &payer).await?;
    Ok(outcome.explorer_link(&args.cluster))
}
