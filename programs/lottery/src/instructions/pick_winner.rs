use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, REQUEST_SEED, ROUND_SEED};
use crate::error::LotteryError;
use crate::events::RandomnessRequested;
use crate::state::{LotteryConfig, LotteryRound, RandomnessRequest};

/// Accounts required to arm winner selection for a round. This is the
/// request half of the two-phase protocol: it records an outstanding
/// randomness request and returns; the winner is only determined when the
/// oracle answers through `fulfill_random_words`.
#[derive(Accounts)]
#[instruction(extraction_date: i64)]
pub struct PickWinner<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, LotteryConfig>,

    /// The round being advanced. Its date may differ from the scheduled
    /// extraction date; the timing gate always checks the schedule.
    #[account(
        mut,
        seeds = [ROUND_SEED, extraction_date.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, LotteryRound>,

    /// Index entry routing the oracle's eventual callback back to the
    /// round. Seeded by the correlation id the counter is about to issue.
    #[account(
        init,
        payer = payer,
        space = 8 + RandomnessRequest::INIT_SPACE,
        seeds = [REQUEST_SEED, (config.request_counter + 1).to_le_bytes().as_ref()],
        bump,
    )]
    pub request: Account<'info, RandomnessRequest>,

    pub system_program: Program<'info, System>,
}

pub fn process_pick_winner(ctx: Context<PickWinner>, extraction_date: i64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.config;
    require!(config.extraction_due(now), LotteryError::ExtractionNotDue);

    let request_id = config.next_request_id();
    let round = &mut ctx.accounts.round;
    round.arm(request_id)?;

    let request = &mut ctx.accounts.request;
    request.bump = ctx.bumps.request;
    request.request_id = request_id;
    request.round_date = round.extraction_date;

    msg!("requesting randomness, request id {}", request_id);

    emit!(RandomnessRequested {
        request_id,
        round_date: extraction_date,
        subscription_id: config.subscription_id,
        key_hash: config.key_hash,
    });
    Ok(())
}
