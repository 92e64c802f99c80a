use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, ROUND_SEED};
use crate::events::UserRegistered;
use crate::state::{LotteryConfig, LotteryRound};

/// Accounts required to register a user for the round keyed by the
/// currently scheduled extraction date. The round account is created on
/// first touch; every later registration for the same date reuses it.
#[derive(Accounts)]
pub struct AddUserToLottery<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, LotteryConfig>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + LotteryRound::INIT_SPACE,
        seeds = [ROUND_SEED, config.extraction_date.to_le_bytes().as_ref()],
        bump,
    )]
    pub round: Account<'info, LotteryRound>,

    pub system_program: Program<'info, System>,
}

pub fn process_add_user_to_lottery(ctx: Context<AddUserToLottery>, user: Pubkey) -> Result<()> {
    let round = &mut ctx.accounts.round;
    round.bump = ctx.bumps.round;
    round.extraction_date = ctx.accounts.config.extraction_date;

    round.register(user)?;

    emit!(UserRegistered {
        round_date: round.extraction_date,
        user,
        total_users: round.users.len() as u32,
    });
    Ok(())
}
