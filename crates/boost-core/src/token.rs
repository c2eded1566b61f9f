//! Deterministic token identities.
//!
//! A token id is the 256-bit big-endian value `delegator << 96 | index`:
//! the 20-byte delegator address fills the high 160 bits and the
//! per-delegator sequence index fills the low 96 bits. Ids therefore depend
//! only on `(delegator, index)`, never on global call order, and two ids
//! collide only when the same delegator re-uses an index.

use crate::constants::{ACCOUNT_LEN, TOKEN_ID_LEN};
use crate::types::{Account, TokenId};

/// Width of the index field in bytes.
const INDEX_LEN: usize = TOKEN_ID_LEN - ACCOUNT_LEN;

/// Derive the token id of the `index`-th boost created by `delegator`.
pub fn derive_id(delegator: &Account, index: u64) -> TokenId {
    let mut bytes = [0u8; TOKEN_ID_LEN];
    bytes[..ACCOUNT_LEN].copy_from_slice(delegator.as_bytes());
    bytes[TOKEN_ID_LEN - 8..].copy_from_slice(&index.to_be_bytes());
    TokenId(bytes)
}

/// Recover `(delegator, index)` from a token id.
///
/// Returns `None` if the index field holds a value wider than 64 bits,
/// which no call to [`derive_id`] produces.
pub fn decode_id(id: &TokenId) -> Option<(Account, u64)> {
    let bytes = id.as_bytes();
    let index_field = &bytes[ACCOUNT_LEN..];
    if index_field[..INDEX_LEN - 8].iter().any(|&b| b != 0) {
        return None;
    }
    let mut delegator = [0u8; ACCOUNT_LEN];
    delegator.copy_from_slice(&bytes[..ACCOUNT_LEN]);
    let mut index = [0u8; 8];
    index.copy_from_slice(&bytes[TOKEN_ID_LEN - 8..]);
    Some((Account(delegator), u64::from_be_bytes(index)))
}

/// The delegator encoded in a token id.
pub fn delegator_of(id: &TokenId) -> Account {
    let mut delegator = [0u8; ACCOUNT_LEN];
    delegator.copy_from_slice(&id.as_bytes()[..ACCOUNT_LEN]);
    Account(delegator)
}
