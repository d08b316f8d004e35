use anchor_lang::prelude::*;

use crate::constants::{CAMPAIGN_SEED, ESCROW_SEED};
use crate::errors::AdwiserError;
use crate::escrow_helpers::release_from_escrow;
use crate::events::CommissionPaid;
use crate::state::{Campaign, Escrow};

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct PayCommission<'info> {
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

    /// Platform authority, receives the commission
    #[account(mut)]
    pub adwiser: Signer<'info>,
}

impl<'info> PayCommission<'info> {
    pub fn pay_commission(&mut self, campaign_id: u64, percentage: u64) -> Result<()> {
        let commission_clicks = self.campaign_acc.commission_clicks;
        let commission = self.campaign_acc.quote_commission(percentage)?;

        release_from_escrow(
            &self.escrow.to_account_info(),
            &self.adwiser.to_account_info(),
            commission.amount,
        )?;
        self.campaign_acc.commit_commission(&commission);

        msg!(
            "Commission of {} lamports ({}% of {} clicks + {} fee refund) paid to {}",
            commission.amount,
            percentage,
            commission_clicks,
            commission.reimbursement,
            self.adwiser.key()
        );
        msg!("Remaining campaign budget: {}", commission.remaining_sol);

        emit!(CommissionPaid {
            campaign_id,
            authority: self.adwiser.key(),
            percentage,
            commission_clicks,
            base: commission.base,
            reimbursement: commission.reimbursement,
            amount: commission.amount,
            remaining_sol: commission.remaining_sol,
        });

        Ok(())
    }
}
