//! Amount type for custody values
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Amounts are denominated in whole ETH-equivalent units with fractional
//! precision.

use rust_decimal::Decimal;

/// Value held in custody or released from it.
pub type Amount = Decimal;

/// Whether an amount is acceptable as a deposit.
pub fn is_positive(amount: &Amount) -> bool {
    *amount > Decimal::ZERO
}
