//! Decay engine implementing the [`DecayCalculator`] trait.

use boost_core::traits::DecayCalculator;
use boost_core::types::{Amount, Timestamp};

/// The production decay calculator: straight-line decay to zero at expiry.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearDecay;

impl LinearDecay {
    pub fn new() -> Self {
        Self
    }
}

/// `floor(amount * numer / denom)` for `numer <= denom`, without overflow.
///
/// Splits `amount = q * denom + r` so the result is `q * numer + r * numer / denom`.
/// Both partial products fit in `u128`: `q * numer <= amount` and
/// `r * numer < denom^2 <= (2^64 - 1)^2`.
///
/// Returns 0 when `denom == 0`.
pub fn mul_div_floor(amount: Amount, numer: u64, denom: u64) -> Amount {
    if denom == 0 {
        return 0;
    }
    let numer = numer.min(denom) as u128;
    let denom = denom as u128;
    let q = amount / denom;
    let r = amount % denom;
    q * numer + r * numer / denom
}

impl DecayCalculator for LinearDecay {
    fn remaining(
        &self,
        amount: Amount,
        issue_time: Timestamp,
        expire_time: Timestamp,
        now: Timestamp,
    ) -> Amount {
        if now >= expire_time || issue_time >= expire_time {
            return 0;
        }
        // Before issuance the boost holds its full amount.
        let from = now.max(issue_time);
        let left = expire_time.saturating_since(from);
        let span = expire_time.saturating_since(issue_time);
        mul_div_floor(amount, left, span)
    }
}
