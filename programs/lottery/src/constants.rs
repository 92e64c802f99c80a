/// Seed for the singleton configuration PDA.
pub const CONFIG_SEED: &[u8] = b"config";

/// Seed prefix for round PDAs; the full seed appends the extraction date
/// as little-endian bytes, so there is exactly one round per distinct date.
pub const ROUND_SEED: &[u8] = b"round";

/// Seed prefix for randomness request PDAs, keyed by correlation id.
pub const REQUEST_SEED: &[u8] = b"request";

/// Seed prefix for the per-round collectible mint.
pub const COLLECTIBLE_MINT_SEED: &[u8] = b"collectible_mint";

/// Upper bound on registrations per round. Round accounts are sized at
/// creation, so the user list needs a fixed capacity.
pub const MAX_ROUND_USERS: usize = 200;

/// Fungible reward minted to the winner, in base units.
pub const REWARD_AMOUNT: u64 = 50_000;

pub const COLLECTIBLE_NAME: &str = "Lottery Winner";
pub const COLLECTIBLE_SYMBOL: &str = "LOTW";
pub const COLLECTIBLE_BASE_URI: &str = "ipfs://QmP1zg6hipRoW6EGgz2RtgPtYu9A5HK2zvyyy7dnnhdiqG/";
