//! The literal end-to-end scenarios for a 4-year boost of 10^24.

use boost_core::constants::{DAY, YEAR};
use boost_core::error::BoostError;
use boost_core::types::Timestamp;
use boost_tests::helpers::*;

#[test]
fn scenario_receiver_cancels_at_issue() {
    let (mut ledger, clock, token) = alice_boosts_bob();
    clock.set(Timestamp::new(0));
    assert_eq!(ledger.token_boost(&token).unwrap(), BOOST_AMOUNT);
    ledger.cancel_boost(&token, &bob()).unwrap();
    assert_eq!(ledger.token_boost(&token).unwrap(), 0);
}

#[test]
fn scenario_delegator_waits_for_cancel_time() {
    let (mut ledger, clock, token) = alice_boosts_bob();
    clock.set(Timestamp::new(365 * DAY));
    assert_eq!(
        ledger.cancel_boost(&token, &alice()).unwrap_err().to_string(),
        "dev: must wait for cancel time"
    );
    clock.set(Timestamp::new(2 * 365 * DAY));
    ledger.cancel_boost(&token, &alice()).unwrap();
    assert_eq!(ledger.token_boost(&token).unwrap(), 0);
}

#[test]
fn scenario_third_party_waits_for_expiry() {
    let (mut ledger, clock, token) = alice_boosts_bob();
    clock.set(Timestamp::new(YEAR));
    assert_eq!(
        ledger.cancel_boost(&token, &charlie()).unwrap_err().to_string(),
        "Not allowed!"
    );
    clock.set(Timestamp::new(4 * YEAR));
    ledger.cancel_boost(&token, &charlie()).unwrap();
    assert_eq!(ledger.token_boost(&token).unwrap(), 0);
}

#[test]
fn scenario_eleventh_token_does_not_exist() {
    let (mut ledger, _clock, _) = alice_boosts_bob();
    assert_eq!(ledger.total_minted(&alice()), 1);
    let token = ledger.get_token_id(&alice(), 10);
    assert_eq!(
        ledger.cancel_boost(&token, &alice()),
        Err(BoostError::NotFound)
    );
}

#[test]
fn scenario_operator_cancels_for_receiver() {
    let (mut ledger, _clock, token) = alice_boosts_bob();
    let op = account(0x0e);
    ledger.set_approval_for_all(&bob(), &op, true);
    ledger.cancel_boost(&token, &op).unwrap();
    assert_eq!(ledger.token_boost(&token).unwrap(), 0);
}

#[test]
fn value_halves_at_cancel_time() {
    let (ledger, clock, token) = alice_boosts_bob();
    clock.set(Timestamp::new(CANCEL_TIME));
    assert_eq!(ledger.token_boost(&token).unwrap(), BOOST_AMOUNT / 2);
    clock.set(Timestamp::new(EXPIRE_TIME));
    assert_eq!(ledger.token_boost(&token).unwrap(), 0);
}
