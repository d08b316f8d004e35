use anchor_lang::prelude::*;

use crate::constants::ESCROW_SEED;
use crate::errors::AdwiserError;
use crate::escrow_helpers::withdrawable_lamports;
use crate::events::EscrowClosed;
use crate::state::Escrow;

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct CloseEscrow<'info> {
    /// CHECK: loaded in the handler so a missing or already closed escrow
    /// reports NothingToWithdraw instead of a deserialization failure
    #[account(
        mut,
        seeds = [ESCROW_SEED, campaign_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub escrow: UncheckedAccount<'info>,

    #[account(mut)]
    pub advertiser: Signer<'info>,
}

impl<'info> CloseEscrow<'info> {
    pub fn close_escrow(&mut self, campaign_id: u64) -> Result<()> {
        let escrow_info: &'info AccountInfo<'info> =
            Box::leak(Box::new(self.escrow.to_account_info()));
        require!(
            escrow_info.owner == &crate::ID && !escrow_info.data_is_empty(),
            AdwiserError::NothingToWithdraw
        );

        let escrow = Account::<Escrow>::try_from(escrow_info)?;
        require_keys_eq!(
            escrow.advertiser,
            self.advertiser.key(),
            AdwiserError::UnauthorizedAdvertiser
        );

        let withdrawn = withdrawable_lamports(escrow_info, &Rent::get()?);
        require!(withdrawn > 0, AdwiserError::NothingToWithdraw);
        let total_returned = escrow_info.lamports();

        escrow.close(self.advertiser.to_account_info())?;

        msg!(
            "Escrow for campaign {} closed, returned {} lamports to {}",
            campaign_id,
            total_returned,
            self.advertiser.key()
        );

        emit!(EscrowClosed {
            campaign_id,
            advertiser: self.advertiser.key(),
            withdrawn,
            total_returned,
        });

        Ok(())
    }
}
