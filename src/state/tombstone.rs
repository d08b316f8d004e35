use anchor_lang::prelude::*;

/// Left behind by `close_campaign` so a closed campaign id can never be
/// initialized again.
#[account]
#[derive(InitSpace)]
pub struct CampaignTombstone {
    pub campaign_id: u64,
    pub closed_at: i64,
    pub bump: u8,
}
