use anchor_lang::prelude::*;

#[event]
pub struct UserRegistered {
    pub round_date: i64,
    pub user: Pubkey,
    pub total_users: u32,
}

#[event]
pub struct ExtractionDateUpdated {
    pub previous: i64,
    pub current: i64,
}

/// The oracle's work order: it watches for this event and later submits
/// `fulfill_random_words` carrying the same request id.
#[event]
pub struct RandomnessRequested {
    pub request_id: u64,
    pub round_date: i64,
    pub subscription_id: u64,
    pub key_hash: [u8; 32],
}

#[event]
pub struct WinnerSelected {
    pub request_id: u64,
    pub round_date: i64,
    pub winner: Pubkey,
    pub random_word: u64,
}
