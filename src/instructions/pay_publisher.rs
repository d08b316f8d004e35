use anchor_lang::prelude::*;

use crate::constants::{CAMPAIGN_SEED, ESCROW_SEED};
use crate::errors::AdwiserError;
use crate::escrow_helpers::release_from_escrow;
use crate::events::PublisherPaid;
use crate::state::{Campaign, Escrow};
use crate::validation::require_positive;

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct PayPublisher<'info> {
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

    /// CHECK: payee only; membership is checked against the campaign's publishers
    #[account(mut)]
    pub publisher: UncheckedAccount<'info>,

    pub adwiser: Signer<'info>,
}

impl<'info> PayPublisher<'info> {
    pub fn pay_publisher(&mut self, campaign_id: u64, no_of_clicks: u64) -> Result<()> {
        require_positive(no_of_clicks)?;
        let publisher = self.publisher.key();
        require!(
            self.campaign_acc.is_publisher(&publisher),
            AdwiserError::PublisherNotAuthorized
        );

        let payout = self.campaign_acc.quote_publisher_payout(no_of_clicks)?;

        release_from_escrow(
            &self.escrow.to_account_info(),
            &self.publisher.to_account_info(),
            payout.amount,
        )?;
        self.campaign_acc.commit_publisher_payout(&payout);

        msg!(
            "Paid {} lamports to publisher {} for {} clicks",
            payout.amount,
            publisher,
            no_of_clicks
        );
        msg!("Remaining campaign budget: {}", payout.remaining_sol);

        emit!(PublisherPaid {
            campaign_id,
            publisher,
            clicks: no_of_clicks,
            amount: payout.amount,
            remaining_sol: payout.remaining_sol,
            total_clicks: payout.total_clicks,
        });

        Ok(())
    }
}
