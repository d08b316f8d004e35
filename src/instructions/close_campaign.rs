use anchor_lang::prelude::*;

use crate::constants::{CAMPAIGN_SEED, TOMBSTONE_SEED};
use crate::errors::AdwiserError;
use crate::events::CampaignClosed;
use crate::state::{Campaign, CampaignTombstone};

#[derive(Accounts)]
pub struct CloseCampaign<'info> {
    #[account(
        mut,
        seeds = [CAMPAIGN_SEED, campaign_acc.campaign_id.to_le_bytes().as_ref()],
        bump = campaign_acc.bump,
        constraint = campaign_acc.authority == adwiser.key() @ AdwiserError::UnauthorizedCloser,
        close = adwiser,
    )]
    pub campaign_acc: Box<Account<'info, Campaign>>,

    #[account(
        init,
        payer = adwiser,
        space = 8 + CampaignTombstone::INIT_SPACE,
        seeds = [TOMBSTONE_SEED, campaign_acc.campaign_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub tombstone: Account<'info, CampaignTombstone>,

    #[account(mut)]
    pub adwiser: Signer<'info>,
    pub system_program: Program<'info, System>,
}

impl<'info> CloseCampaign<'info> {
    pub fn close_campaign(&mut self, bumps: &CloseCampaignBumps) -> Result<()> {
        let campaign_id = self.campaign_acc.campaign_id;
        let closed_at = Clock::get()?.unix_timestamp;

        self.tombstone.set_inner(CampaignTombstone {
            campaign_id,
            closed_at,
            bump: bumps.tombstone,
        });

        msg!(
            "Campaign {} closed by {}, escrow left open for the advertiser",
            campaign_id,
            self.adwiser.key()
        );

        emit!(CampaignClosed {
            campaign_id,
            authority: self.adwiser.key(),
            closed_at,
        });

        Ok(())
    }
}
