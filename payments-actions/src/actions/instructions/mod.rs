//! Variants that assemble the instructions locally and submit them as a
//! single transaction signed by the payer.

mod receive_payments;
mod send_payments;

pub use receive_payments::ReceivePaymentsInstructions;
pub use send_payments::SendPaymentsInstructions;
