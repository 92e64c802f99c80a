use anchor_lang::prelude::*;

use crate::constants::MAX_ROUND_USERS;
use crate::error::LotteryError;

#[account]
#[derive(InitSpace)]
pub struct LotteryConfig {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Admin allowed to move the extraction date.
    pub authority: Pubkey,

    /// The only signer accepted on `fulfill_random_words`.
    pub oracle_authority: Pubkey,

    /// The currently scheduled extraction date (UNIX timestamp). Winner
    /// selection is gated on this value, not on the round being advanced.
    pub extraction_date: i64,

    /// Oracle subscription funding the randomness requests.
    pub subscription_id: u64,

    /// Verification key hash forwarded with every randomness request.
    pub key_hash: [u8; 32],

    /// Correlation ids handed out so far; the next request gets
    /// `request_counter + 1`, so id 0 always means "no request".
    pub request_counter: u64,
}

impl LotteryConfig {
    pub fn extraction_due(&self, now: i64) -> bool {
        now >= self.extraction_date
    }

    pub fn next_request_id(&mut self) -> u64 {
        self.request_counter += 1;
        self.request_counter
    }
}

/// Where a round stands in its lifecycle. Transitions only move forward:
/// `Open -> Requested -> Resolved`.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace,
)]
pub enum RoundPhase {
    #[default]
    Open,
    Requested,
    Resolved,
}

/// One lottery round, keyed by its extraction date. Rounds come into
/// existence the first time a date is referenced and are never deleted.
#[account]
#[derive(InitSpace, Default)]
pub struct LotteryRound {
    pub bump: u8,

    /// The date this round is keyed by (also part of the PDA seed).
    pub extraction_date: i64,

    /// Registered users in registration order.
    #[max_len(MAX_ROUND_USERS)]
    pub users: Vec<Pubkey>,

    /// Zero until the round is resolved.
    pub winner: Pubkey,

    /// The raw random value delivered by the oracle; 0 until fulfilled.
    pub random_word: u64,

    pub fulfilled: bool,

    /// Correlation id of the outstanding randomness request; 0 means none.
    pub pending_request_id: u64,

    pub phase: RoundPhase,
}

impl LotteryRound {
    /// Appends a user to the round. A user can be registered at most once
    /// per extraction, and only while the round is still open.
    pub fn register(&mut self, user: Pubkey) -> Result<()> {
        require!(
            self.phase == RoundPhase::Open,
            LotteryError::RegistrationClosed
        );
        require!(
            !self.users.contains(&user),
            LotteryError::DuplicateRegistration
        );
        require!(self.users.len() < MAX_ROUND_USERS, LotteryError::RoundFull);
        self.users.push(user);
        Ok(())
    }

    /// Records an outstanding randomness request. Arming is rejected while
    /// a request is already pending, after resolution, and for rounds with
    /// no registered users (an empty round can never produce a winner, so
    /// it is never armed in the first place).
    pub fn arm(&mut self, request_id: u64) -> Result<()> {
        match self.phase {
            RoundPhase::Resolved => return Err(LotteryError::AlreadyFulfilled.into()),
            RoundPhase::Requested => return Err(LotteryError::RequestPending.into()),
            RoundPhase::Open => {}
        }
        require!(!self.users.is_empty(), LotteryError::EmptyRound);
        self.pending_request_id = request_id;
        self.phase = RoundPhase::Requested;
        Ok(())
    }

    /// Consumes the oracle's answer: picks `users[random_word % len]`,
    /// marks the round resolved and returns the winner. A resolved round
    /// rejects any further delivery, so a replayed callback cannot mint
    /// rewards twice.
    pub fn resolve(&mut self, request_id: u64, random_word: u64) -> Result<Pubkey> {
        match self.phase {
            RoundPhase::Resolved => return Err(LotteryError::AlreadyFulfilled.into()),
            RoundPhase::Open => return Err(LotteryError::UnknownRequest.into()),
            RoundPhase::Requested => {}
        }
        require!(
            self.pending_request_id == request_id,
            LotteryError::UnknownRequest
        );
        require!(!self.users.is_empty(), LotteryError::EmptyRound);

        let index = (random_word % self.users.len() as u64) as usize;
        self.winner = self.users[index];
        self.random_word = random_word;
        self.fulfilled = true;
        self.phase = RoundPhase::Resolved;
        Ok(self.winner)
    }
}

/// Maps an oracle correlation id back to the round that requested it.
/// The oracle callback carries only the id, not the round key.
#[account]
#[derive(InitSpace)]
pub struct RandomnessRequest {
    pub bump: u8,
    pub request_id: u64,
    pub round_date: i64,
}

/// Projection of a round returned by the query instructions.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LotteryInfo {
    pub winner: Pubkey,
    pub random_word: u64,
    pub fulfilled: bool,
    pub users: Vec<Pubkey>,
    pub pending_request_id: u64,
}

impl LotteryInfo {
    /// The canonical empty round, projected for dates never referenced.
    pub fn empty() -> Self {
        Self {
            winner: Pubkey::default(),
            random_word: 0,
            fulfilled: false,
            users: Vec::new(),
            pending_request_id: 0,
        }
    }

    pub fn from_round(round: &LotteryRound) -> Self {
        Self {
            winner: round.winner,
            random_word: round.random_word,
            fulfilled: round.fulfilled,
            users: round.users.clone(),
            pending_request_id: round.pending_request_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    fn error_name(err: Error) -> String {
        match err {
            Error::AnchorError(e) => e.error_name.clone(),
            Error::ProgramError(e) => panic!("unexpected program error: {:?}", e),
        }
    }

    fn round_with_users(n: usize) -> (LotteryRound, Vec<Pubkey>) {
        let mut round = LotteryRound {
            extraction_date: 1_700_000_000,
            ..Default::default()
        };
        let users: Vec<Pubkey> = (0..n).map(|_| Pubkey::new_unique()).collect();
        for user in &users {
            round.register(*user).unwrap();
        }
        (round, users)
    }

    #[test]
    fn registration_preserves_insertion_order() {
        let (round, users) = round_with_users(3);
        assert_eq!(round.users, users);
        assert_eq!(round.users.len(), 3);
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let (mut round, users) = round_with_users(2);
        let err = round.register(users[0]).unwrap_err();
        assert_eq!(
            error_name(err),
            LotteryError::DuplicateRegistration.name()
        );
        assert_eq!(round.users.len(), 2);
    }

    #[test]
    fn registration_caps_at_max_users() {
        let (mut round, _) = round_with_users(MAX_ROUND_USERS);
        let err = round.register(Pubkey::new_unique()).unwrap_err();
        assert_eq!(error_name(err), LotteryError::RoundFull.name());
    }

    #[test]
    fn registration_closes_once_armed() {
        let (mut round, _) = round_with_users(1);
        round.arm(1).unwrap();
        let err = round.register(Pubkey::new_unique()).unwrap_err();
        assert_eq!(error_name(err), LotteryError::RegistrationClosed.name());
    }

    #[test]
    fn arming_an_empty_round_is_rejected() {
        let mut round = LotteryRound::default();
        let err = round.arm(1).unwrap_err();
        assert_eq!(error_name(err), LotteryError::EmptyRound.name());
        assert_eq!(round.phase, RoundPhase::Open);
        assert_eq!(round.pending_request_id, 0);
    }

    #[test]
    fn arming_records_the_request() {
        let (mut round, _) = round_with_users(2);
        round.arm(7).unwrap();
        assert_eq!(round.phase, RoundPhase::Requested);
        assert_eq!(round.pending_request_id, 7);
        assert!(!round.fulfilled);
    }

    #[test]
    fn double_arming_is_rejected() {
        let (mut round, _) = round_with_users(2);
        round.arm(7).unwrap();
        let err = round.arm(8).unwrap_err();
        assert_eq!(error_name(err), LotteryError::RequestPending.name());
        assert_eq!(round.pending_request_id, 7);
    }

    #[test]
    fn resolution_picks_winner_by_modulo() {
        let (mut round, users) = round_with_users(2);
        round.arm(7).unwrap();
        let winner = round.resolve(7, 5).unwrap();
        // 5 % 2 == 1
        assert_eq!(winner, users[1]);
        assert_eq!(round.winner, users[1]);
        assert_eq!(round.random_word, 5);
        assert!(round.fulfilled);
        assert_eq!(round.phase, RoundPhase::Resolved);
    }

    #[test]
    fn resolution_winner_is_always_a_registered_user() {
        for word in [0u64, 1, 2, 3, 1_000_003, u64::MAX] {
            let (mut round, users) = round_with_users(3);
            round.arm(1).unwrap();
            let winner = round.resolve(1, word).unwrap();
            assert!(users.contains(&winner));
        }
    }

    #[test]
    fn resolution_without_a_request_is_rejected() {
        let (mut round, _) = round_with_users(2);
        let err = round.resolve(7, 5).unwrap_err();
        assert_eq!(error_name(err), LotteryError::UnknownRequest.name());
        assert!(!round.fulfilled);
    }

    #[test]
    fn resolution_with_a_stale_request_id_is_rejected() {
        let (mut round, _) = round_with_users(2);
        round.arm(7).unwrap();
        let err = round.resolve(8, 5).unwrap_err();
        assert_eq!(error_name(err), LotteryError::UnknownRequest.name());
        assert!(!round.fulfilled);
        assert_eq!(round.pending_request_id, 7);
    }

    #[test]
    fn second_resolution_is_rejected_and_leaves_state_unchanged() {
        let (mut round, users) = round_with_users(2);
        round.arm(7).unwrap();
        round.resolve(7, 5).unwrap();

        let err = round.resolve(7, 9).unwrap_err();
        assert_eq!(error_name(err), LotteryError::AlreadyFulfilled.name());
        assert_eq!(round.winner, users[1]);
        assert_eq!(round.random_word, 5);
    }

    #[test]
    fn arming_a_resolved_round_is_rejected() {
        let (mut round, _) = round_with_users(1);
        round.arm(1).unwrap();
        round.resolve(1, 0).unwrap();
        let err = round.arm(2).unwrap_err();
        assert_eq!(error_name(err), LotteryError::AlreadyFulfilled.name());
    }

    #[test]
    fn extraction_gate_compares_against_schedule() {
        let config = LotteryConfig {
            bump: 0,
            authority: Pubkey::new_unique(),
            oracle_authority: Pubkey::new_unique(),
            extraction_date: 1_700_000_000,
            subscription_id: 1,
            key_hash: [0; 32],
            request_counter: 0,
        };
        assert!(!config.extraction_due(1_699_999_999));
        assert!(config.extraction_due(1_700_000_000));
        assert!(config.extraction_due(1_700_000_001));
    }

    #[test]
    fn request_ids_are_monotonic_and_never_zero() {
        let mut config = LotteryConfig {
            bump: 0,
            authority: Pubkey::new_unique(),
            oracle_authority: Pubkey::new_unique(),
            extraction_date: 0,
            subscription_id: 1,
            key_hash: [0; 32],
            request_counter: 0,
        };
        assert_eq!(config.next_request_id(), 1);
        assert_eq!(config.next_request_id(), 2);
        assert_eq!(config.next_request_id(), 3);
    }

    #[test]
    fn empty_projection_is_zero_valued() {
        let info = LotteryInfo::empty();
        assert_eq!(info.winner, Pubkey::default());
        assert_eq!(info.random_word, 0);
        assert!(!info.fulfilled);
        assert!(info.users.is_empty());
        assert_eq!(info.pending_request_id, 0);
    }

    #[test]
    fn projection_mirrors_round_fields() {
        let (mut round, users) = round_with_users(2);
        round.arm(4).unwrap();
        round.resolve(4, 2).unwrap();
        let info = LotteryInfo::from_round(&round);
        assert_eq!(info.winner, users[0]);
        assert_eq!(info.random_word, 2);
        assert!(info.fulfilled);
        assert_eq!(info.users, users);
        assert_eq!(info.pending_request_id, 4);
    }
}
