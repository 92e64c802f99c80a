use anchor_lang::prelude::*;
use instructions::*;
use state::LotteryInfo;

mod constants;
mod error;
mod events;
mod instructions;
mod state;

declare_id!("2eJhgNJLRFBCGvtTgdvBKvdobR5XyKvnnR7Wby4A2pwh");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        extraction_date: i64,
        subscription_id: u64,
        key_hash: [u8; 32],
    ) -> Result<()> {
        process_initialize_config(ctx, extraction_date, subscription_id, key_hash)
    }

    pub fn update_extraction_date(
        ctx: Context<UpdateExtractionDate>,
        new_extraction_date: i64,
    ) -> Result<()> {
        process_update_extraction_date(ctx, new_extraction_date)
    }

    pub fn get_extraction_date(ctx: Context<GetExtractionDate>) -> Result<i64> {
        process_get_extraction_date(ctx)
    }

    pub fn add_user_to_lottery(ctx: Context<AddUserToLottery>, user: Pubkey) -> Result<()> {
        process_add_user_to_lottery(ctx, user)
    }

    pub fn pick_winner(ctx: Context<PickWinner>, extraction_date: i64) -> Result<()> {
        process_pick_winner(ctx, extraction_date)
    }

    pub fn fulfill_random_words(
        ctx: Context<FulfillRandomWords>,
        request_id: u64,
        random_words: Vec<u64>,
    ) -> Result<()> {
        process_fulfill_random_words(ctx, request_id, random_words)
    }

    pub fn get_lottery_info(ctx: Context<QueryRound>, extraction_date: i64) -> Result<LotteryInfo> {
        process_get_lottery_info(ctx, extraction_date)
    }

    pub fn get_lottery_users(ctx: Context<QueryRound>, extraction_date: i64) -> Result<Vec<Pubkey>> {
        process_get_lottery_users(ctx, extraction_date)
    }

    pub fn get_lottery_users_length(ctx: Context<QueryRound>, extraction_date: i64) -> Result<u32> {
        process_get_lottery_users_length(ctx, extraction_date)
    }
}
