pub const CAMPAIGN_SEED: &[u8] = b"campaign";
pub const ESCROW_SEED: &[u8] = b"escrow";
pub const TOMBSTONE_SEED: &[u8] = b"tombstone";

pub const MAX_CAMPAIGN_NAME_LEN: usize = 50;
pub const MAX_PUBLISHERS: usize = 10;

/// Lamports reimbursed to the authority for every payout transaction it signed,
/// plus one for the commission transaction itself.
pub const PER_TXN_FEE_LAMPORTS: u64 = 5_000;

pub const PERCENT_DENOMINATOR: u64 = 100;

/// What happens to `no_of_txns` once a commission has been paid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxnCountPolicy {
    /// Each commission reimburses only the payouts since the previous one.
    ResetOnCommission,
    /// The reimbursed transaction count keeps growing for the whole campaign.
    Accumulate,
}

pub const TXN_COUNT_POLICY: TxnCountPolicy = TxnCountPolicy::ResetOnCommission;
