#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod address;
pub mod constants;
pub mod errors;
pub mod escrow_helpers;
pub mod events;
pub mod instructions;
pub mod state;
pub mod validation;

pub use instructions::*;

declare_id!("HBUba6LqBPZSh2QNGwVDFxVq1vaj9Sav9vhVoAt1Ti6w");

#[program]
pub mod adwiser {
    use super::*;

    #[allow(clippy::too_many_arguments)]
    pub fn initialize_campaign(
        ctx: Context<InitializeCampaign>,
        campaign_id: u64,
        campaign_name: String,
        advertiser_pubkey: Pubkey,
        cost_per_click: u64,
        ad_duration_days: u64,
        publishers: Vec<Pubkey>,
        locked_sol: u64,
    ) -> Result<()> {
        ctx.accounts.init_campaign(
            campaign_id,
            campaign_name,
            advertiser_pubkey,
            cost_per_click,
            ad_duration_days,
            publishers,
            locked_sol,
            &ctx.bumps,
        )
    }

    pub fn pay_publisher(
        ctx: Context<PayPublisher>,
        campaign_id: u64,
        no_of_clicks: u64,
    ) -> Result<()> {
        ctx.accounts.pay_publisher(campaign_id, no_of_clicks)
    }

    pub fn pay_commission(
        ctx: Context<PayCommission>,
        campaign_id: u64,
        percentage: u64,
    ) -> Result<()> {
        ctx.accounts.pay_commission(campaign_id, percentage)
    }

    pub fn update_campaign(
        ctx: Context<UpdateCampaign>,
        campaign_id: u64,
        ad_duration_days: u64,
        locked_sol: u64,
    ) -> Result<()> {
        ctx.accounts
            .update_campaign(campaign_id, ad_duration_days, locked_sol)
    }

    pub fn close_campaign(ctx: Context<CloseCampaign>) -> Result<()> {
        ctx.accounts.close_campaign(&ctx.bumps)
    }

    pub fn close_escrow(ctx: Context<CloseEscrow>, campaign_id: u64) -> Result<()> {
        ctx.accounts.close_escrow(campaign_id)
    }
}
