use anchor_lang::prelude::*;

/// Custody account for one campaign. Lamports above the rent-exempt reserve
/// are the campaign's spendable funds; the payload only binds the advertiser
/// so the escrow can still be reclaimed after the campaign record is closed.
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    pub campaign_id: u64,
    pub advertiser: Pubkey,
    pub bump: u8,
}
