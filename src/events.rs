use anchor_lang::prelude::*;

#[event]
pub struct CampaignInitialized {
    pub campaign_id: u64,
    pub campaign: Pubkey,
    pub escrow: Pubkey,
    pub authority: Pubkey,
    pub advertiser: Pubkey,
    pub cost_per_click: u64,
    pub locked_sol: u64,
    pub publisher_count: u8,
    pub created_at: i64,
}

#[event]
pub struct PublisherPaid {
    pub campaign_id: u64,
    pub publisher: Pubkey,
    pub clicks: u64,
    pub amount: u64,
    pub remaining_sol: u64,
    pub total_clicks: u64,
}

#[event]
pub struct CommissionPaid {
    pub campaign_id: u64,
    pub authority: Pubkey,
    pub percentage: u64,
    pub commission_clicks: u64,
    pub base: u64,
    pub reimbursement: u64,
    pub amount: u64,
    pub remaining_sol: u64,
}

#[event]
pub struct CampaignUpdated {
    pub campaign_id: u64,
    pub added_duration_days: u64,
    pub added_locked_sol: u64,
    pub ad_duration_days: u64,
    pub locked_sol: u64,
    pub remaining_sol: u64,
}

#[event]
pub struct CampaignClosed {
    pub campaign_id: u64,
    pub authority: Pubkey,
    pub closed_at: i64,
}

/// `withdrawn` is the spendable balance. `total_returned` also includes the
/// escrow's rent-exempt reserve, which the authority paid at initialization
/// and which goes to the advertiser with the rest of the balance.
#[event]
pub struct EscrowClosed {
    pub campaign_id: u64,
    pub advertiser: Pubkey,
    pub withdrawn: u64,
    pub total_returned: u64,
}
