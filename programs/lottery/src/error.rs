use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("User can be added only one time for the same extraction")]
    DuplicateRegistration,

    #[msg("Round has reached the maximum number of registered users")]
    RoundFull,

    #[msg("Round no longer accepts registrations")]
    RegistrationClosed,

    #[msg("This function can only be executed after extraction date")]
    ExtractionNotDue,

    #[msg("A randomness request is already pending for this round")]
    RequestPending,

    #[msg("Round has already been fulfilled")]
    AlreadyFulfilled,

    #[msg("Request id does not match any outstanding request")]
    UnknownRequest,

    #[msg("No users registered for this round")]
    EmptyRound,

    #[msg("Oracle delivered no random words")]
    EmptyRandomness,

    #[msg("Winner account does not match the drawn user")]
    WinnerAccountMismatch,

    #[msg("Program is not the mint authority for the reward token")]
    MissingMintAuthority,

    #[msg("Signer is not authorized")]
    Unauthorized,
}
