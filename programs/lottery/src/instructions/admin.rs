use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::error::LotteryError;
use crate::events::ExtractionDateUpdated;
use crate::state::LotteryConfig;

/// Accounts required to create the lottery configuration. This is the
/// deployment-time constructor: it records the admin, the oracle signer and
/// the oracle parameters, and sets the first extraction date.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The account paying for account creation; becomes the admin.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The key the randomness oracle will sign fulfillments with.
    /// CHECK: only stored; never read as data.
    pub oracle_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + LotteryConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, LotteryConfig>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct UpdateExtractionDate<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ LotteryError::Unauthorized,
    )]
    pub config: Account<'info, LotteryConfig>,
}

#[derive(Accounts)]
pub struct GetExtractionDate<'info> {
    #[account(seeds = [CONFIG_SEED], bump = config.bump)]
    pub config: Account<'info, LotteryConfig>,
}

pub fn process_initialize_config(
    ctx: Context<InitializeConfig>,
    extraction_date: i64,
    subscription_id: u64,
    key_hash: [u8; 32],
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.bump = ctx.bumps.config;
    config.authority = ctx.accounts.payer.key();
    config.oracle_authority = ctx.accounts.oracle_authority.key();
    config.extraction_date = extraction_date;
    config.subscription_id = subscription_id;
    config.key_hash = key_hash;
    config.request_counter = 0;
    Ok(())
}

/// Overwrites the scheduled extraction date. Deliberately unconditional:
/// the admin may move the date backwards or into the past, which is how a
/// draw is brought forward.
pub fn process_update_extraction_date(
    ctx: Context<UpdateExtractionDate>,
    new_extraction_date: i64,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous = config.extraction_date;
    config.extraction_date = new_extraction_date;

    emit!(ExtractionDateUpdated {
        previous,
        current: new_extraction_date,
    });
    Ok(())
}

pub fn process_get_extraction_date(ctx: Context<GetExtractionDate>) -> Result<i64> {
    Ok(ctx.accounts.config.extraction_date)
}
