use anchor_lang::prelude::*;

use crate::constants::{CAMPAIGN_SEED, ESCROW_SEED};
use crate::errors::AdwiserError;
use crate::escrow_helpers::fund_escrow;
use crate::events::CampaignUpdated;
use crate::state::{Campaign, Escrow};

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct UpdateCampaign<'info> {
    #[account(
        mut,
        seeds = [CAMPAIGN_SEED, campaign_id.to_le_bytes().as_ref()],
        bump = campaign_acc.bump,
        constraint = campaign_acc.authority == adwiser.key() @ AdwiserError::Unauthorized,
    )]
    pub campaign_acc: Box<Account<'info, Campaign>>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, campaign_id.to_le_bytes().as_ref()],
        bump = campaign_acc.escrow_bump,
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    #[account(mut)]
    pub adwiser: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> UpdateCampaign<'info> {
    pub fn update_campaign(
        &mut self,
        campaign_id: u64,
        ad_duration_days: u64,
        locked_sol: u64,
    ) -> Result<()> {
        let extension = self
            .campaign_acc
            .quote_extension(ad_duration_days, locked_sol)?;

        msg!(
            "Before update: {} days, {} locked, {} remaining",
            self.campaign_acc.ad_duration_days,
            self.campaign_acc.locked_sol,
            self.campaign_acc.remaining_sol
        );

        if locked_sol > 0 {
            fund_escrow(
                &self.adwiser,
                &self.escrow.to_account_info(),
                &self.system_program,
                locked_sol,
            )?;
            msg!("Transferred {} lamports to campaign escrow", locked_sol);
        }
        self.campaign_acc.commit_extension(&extension);

        msg!(
            "After update: {} days, {} locked, {} remaining",
            extension.ad_duration_days,
            extension.locked_sol,
            extension.remaining_sol
        );

        emit!(CampaignUpdated {
            campaign_id,
            added_duration_days: extension.added_duration_days,
            added_locked_sol: extension.added_locked_sol,
            ad_duration_days: extension.ad_duration_days,
            locked_sol: extension.locked_sol,
            remaining_sol: extension.remaining_sol,
        });

        Ok(())
    }
}
