use anchor_lang::prelude::*;

use crate::constants::ROUND_SEED;
use crate::state::{LotteryInfo, LotteryRound};

/// Read-only projection of a round. The round account is optional: a date
/// that was never referenced projects the canonical empty round instead of
/// failing.
#[derive(Accounts)]
#[instruction(extraction_date: i64)]
pub struct QueryRound<'info> {
    #[account(
        seeds = [ROUND_SEED, extraction_date.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: Option<Account<'info, LotteryRound>>,
}

pub fn process_get_lottery_info(
    ctx: Context<QueryRound>,
    _extraction_date: i64,
) -> Result<LotteryInfo> {
    Ok(match &ctx.accounts.round {
        Some(round) => LotteryInfo::from_round(round),
        None => LotteryInfo::empty(),
    })
}

pub fn process_get_lottery_users(
    ctx: Context<QueryRound>,
    _extraction_date: i64,
) -> Result<Vec<Pubkey>> {
    Ok(match &ctx.accounts.round {
        Some(round) => round.users.clone(),
        None => Vec::new(),
    })
}

pub fn process_get_lottery_users_length(
    ctx: Context<QueryRound>,
    _extraction_date: i64,
) -> Result<u32> {
    Ok(match &ctx.accounts.round {
        Some(round) => round.users.len() as u32,
        None => 0,
    })
}
