use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::metadata::{
    create_master_edition_v3, create_metadata_accounts_v3, mpl_token_metadata::types::DataV2,
    CreateMasterEditionV3, CreateMetadataAccountsV3, Metadata,
};
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{mint_to, Mint, MintTo, TokenAccount, TokenInterface},
};

use crate::constants::{
    COLLECTIBLE_BASE_URI, COLLECTIBLE_MINT_SEED, COLLECTIBLE_NAME, COLLECTIBLE_SYMBOL, CONFIG_SEED,
    REQUEST_SEED, REWARD_AMOUNT, ROUND_SEED,
};
use crate::error::LotteryError;
use crate::events::WinnerSelected;
use crate::state::{LotteryConfig, LotteryRound, RandomnessRequest};

/// Accounts required to deliver the oracle's answer and resolve a round.
///
/// This is the fulfillment half of the two-phase protocol. It is invoked by
/// the oracle, not by users:
/// 1. Only the configured oracle authority may sign.
/// 2. The request account routes the correlation id back to its round.
/// 3. The winner wallet passed in must match the drawn user.
/// 4. Rewards are minted under the config PDA's mint authority.
#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct FulfillRandomWords<'info> {
    /// The oracle's signing key; also pays for the accounts created for
    /// the winner.
    #[account(mut)]
    pub oracle_authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = oracle_authority @ LotteryError::Unauthorized,
    )]
    pub config: Account<'info, LotteryConfig>,

    /// The index entry created when the request was armed. An id that was
    /// never issued has no such account, so a desynchronized callback
    /// cannot reach the handler at all.
    #[account(
        seeds = [REQUEST_SEED, request_id.to_le_bytes().as_ref()],
        bump = request.bump,
    )]
    pub request: Account<'info, RandomnessRequest>,

    /// The round the request was armed for, derived from the index entry.
    #[account(
        mut,
        seeds = [ROUND_SEED, request.round_date.to_le_bytes().as_ref()],
        bump = round.bump,
    )]
    pub round: Account<'info, LotteryRound>,

    /// The wallet of the drawn user. The oracle caller computes it from
    /// the random value off-chain; the handler re-derives and verifies it.
    /// CHECK: compared against the winner drawn inside the handler.
    pub winner: UncheckedAccount<'info>,

    /// The fungible reward mint. The config PDA must hold its mint
    /// authority, granted out-of-band at deployment.
    #[account(mut)]
    pub reward_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = oracle_authority,
        associated_token::mint = reward_mint,
        associated_token::authority = winner,
        associated_token::token_program = token_program,
    )]
    pub winner_reward_account: InterfaceAccount<'info, TokenAccount>,

    /// A fresh 1-of-1 mint for this round's collectible.
    #[account(
        init,
        payer = oracle_authority,
        seeds = [COLLECTIBLE_MINT_SEED, request.round_date.to_le_bytes().as_ref()],
        bump,
        mint::decimals = 0,
        mint::authority = config,
        mint::freeze_authority = config,
        mint::token_program = token_program,
    )]
    pub collectible_mint: InterfaceAccount<'info, Mint>,

    #[account(
        init,
        payer = oracle_authority,
        associated_token::mint = collectible_mint,
        associated_token::authority = winner,
        associated_token::token_program = token_program,
    )]
    pub winner_collectible_account: InterfaceAccount<'info, TokenAccount>,

    /// Metadata account for the collectible (initialized by Metaplex).
    /// CHECK: validated by seeds against the metadata program.
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), collectible_mint.key().as_ref()],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub metadata: UncheckedAccount<'info>,

    /// Master edition account for the collectible.
    /// CHECK: validated by seeds against the metadata program.
    #[account(
        mut,
        seeds = [b"metadata", token_metadata_program.key().as_ref(), collectible_mint.key().as_ref(), b"edition"],
        bump,
        seeds::program = token_metadata_program.key(),
    )]
    pub master_edition: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn process_fulfill_random_words(
    ctx: Context<FulfillRandomWords>,
    request_id: u64,
    random_words: Vec<u64>,
) -> Result<()> {
    require!(!random_words.is_empty(), LotteryError::EmptyRandomness);
    require!(
        ctx.accounts.reward_mint.mint_authority == COption::Some(ctx.accounts.config.key()),
        LotteryError::MissingMintAuthority
    );

    let random_word = random_words[0];
    let round = &mut ctx.accounts.round;
    let winner = round.resolve(request_id, random_word)?;
    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner,
        LotteryError::WinnerAccountMismatch
    );

    msg!("Randomness result: {}", random_word);
    msg!("Winner: {}", winner);

    let round_date = ctx.accounts.request.round_date;
    let signer_seeds: &[&[&[u8]]] = &[&[CONFIG_SEED, &[ctx.accounts.config.bump]]];

    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.reward_mint.to_account_info(),
                to: ctx.accounts.winner_reward_account.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer_seeds,
        ),
        REWARD_AMOUNT,
    )?;

    msg!("Minting winner collectible");
    mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint: ctx.accounts.collectible_mint.to_account_info(),
                to: ctx.accounts.winner_collectible_account.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer_seeds,
        ),
        1,
    )?;

    create_metadata_accounts_v3(
        CpiContext::new_with_signer(
            ctx.accounts.token_metadata_program.to_account_info(),
            CreateMetadataAccountsV3 {
                metadata: ctx.accounts.metadata.to_account_info(),
                mint: ctx.accounts.collectible_mint.to_account_info(),
                mint_authority: ctx.accounts.config.to_account_info(),
                update_authority: ctx.accounts.config.to_account_info(),
                payer: ctx.accounts.oracle_authority.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
            signer_seeds,
        ),
        DataV2 {
            name: format!("{} #{}", COLLECTIBLE_NAME, round_date),
            symbol: COLLECTIBLE_SYMBOL.to_string(),
            uri: format!("{}{}.json", COLLECTIBLE_BASE_URI, round_date),
            seller_fee_basis_points: 0,
            creators: None,
            collection: None,
            uses: None,
        },
        true,
        true,
        None,
    )?;

    create_master_edition_v3(
        CpiContext::new_with_signer(
            ctx.accounts.token_metadata_program.to_account_info(),
            CreateMasterEditionV3 {
                payer: ctx.accounts.oracle_authority.to_account_info(),
                mint: ctx.accounts.collectible_mint.to_account_info(),
                edition: ctx.accounts.master_edition.to_account_info(),
                mint_authority: ctx.accounts.config.to_account_info(),
                update_authority: ctx.accounts.config.to_account_info(),
                metadata: ctx.accounts.metadata.to_account_info(),
                token_program: ctx.accounts.token_program.to_account_info(),
                system_program: ctx.accounts.system_program.to_account_info(),
                rent: ctx.accounts.rent.to_account_info(),
            },
            signer_seeds,
        ),
        Some(0),
    )?;

    emit!(WinnerSelected {
        request_id,
        round_date,
        winner,
        random_word,
    });
    Ok(())
}
