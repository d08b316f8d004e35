use anchor_lang::prelude::*;

use crate::constants::{CAMPAIGN_SEED, ESCROW_SEED, TOMBSTONE_SEED};
use crate::errors::AdwiserError;
use crate::escrow_helpers::fund_escrow;
use crate::events::CampaignInitialized;
use crate::state::{Campaign, Escrow};
use crate::validation::validate_campaign_terms;

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct InitializeCampaign<'info> {
    /// CHECK: must still be empty; a closed campaign id is never reopened
    #[account(
        seeds = [TOMBSTONE_SEED, campaign_id.to_le_bytes().as_ref()],
        bump,
        constraint = tombstone.data_is_empty() @ AdwiserError::CampaignAlreadyClosed,
    )]
    pub tombstone: UncheckedAccount<'info>,

    #[account(
        init,
        payer = adwiser,
        space = 8 + Campaign::INIT_SPACE,
        seeds = [CAMPAIGN_SEED, campaign_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub campaign_acc: Box<Account<'info, Campaign>>,

    #[account(
        init,
        payer = adwiser,
        space = 8 + Escrow::INIT_SPACE,
        seeds = [ESCROW_SEED, campaign_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    #[account(mut)]
    pub adwiser: Signer<'info>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeCampaign<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn init_campaign(
        &mut self,
        campaign_id: u64,
        campaign_name: String,
        advertiser_pubkey: Pubkey,
        cost_per_click: u64,
        ad_duration_days: u64,
        publishers: Vec<Pubkey>,
        locked_sol: u64,
        bumps: &InitializeCampaignBumps,
    ) -> Result<()> {
        validate_campaign_terms(&campaign_name, cost_per_click, &publishers, locked_sol)?;

        let created_at = Clock::get()?.unix_timestamp;
        let publisher_count = publishers.len() as u8;

        self.campaign_acc.set_inner(Campaign {
            campaign_id,
            campaign_name,
            authority: self.adwiser.key(),
            advertiser_pubkey,
            cost_per_click,
            ad_duration_days,
            publishers,
            locked_sol,
            remaining_sol: locked_sol,
            total_clicks: 0,
            commission_clicks: 0,
            no_of_txns: 0,
            created_at,
            bump: bumps.campaign_acc,
            escrow_bump: bumps.escrow,
        });
        self.escrow.set_inner(Escrow {
            campaign_id,
            advertiser: advertiser_pubkey,
            bump: bumps.escrow,
        });

        fund_escrow(
            &self.adwiser,
            &self.escrow.to_account_info(),
            &self.system_program,
            locked_sol,
        )?;

        msg!(
            "Campaign {} created: record {}, escrow {}",
            campaign_id,
            self.campaign_acc.key(),
            self.escrow.key()
        );
        msg!("Transferred {} lamports to campaign escrow", locked_sol);

        emit!(CampaignInitialized {
            campaign_id,
            campaign: self.campaign_acc.key(),
            escrow: self.escrow.key(),
            authority: self.adwiser.key(),
            advertiser: advertiser_pubkey,
            cost_per_click,
            locked_sol,
            publisher_count,
            created_at,
        });

        Ok(())
    }
}
