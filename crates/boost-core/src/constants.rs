//! Protocol constants. All durations are in seconds.

/// One day.
pub const DAY: u64 = 86_400;

/// One week.
pub const WEEK: u64 = 7 * DAY;

/// One (non-leap) year.
pub const YEAR: u64 = 365 * DAY;

/// Longest boost window accepted by default. Matches the maximum vote-escrow lock.
pub const MAX_BOOST_DURATION: u64 = 4 * YEAR;

/// Number of low bits of a token id reserved for the per-delegator index.
pub const TOKEN_INDEX_BITS: u32 = 96;

/// Byte length of an account address.
pub const ACCOUNT_LEN: usize = 20;

/// Byte length of a token id.
pub const TOKEN_ID_LEN: usize = 32;
