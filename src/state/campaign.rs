use anchor_lang::prelude::*;

use crate::constants::{
    TxnCountPolicy, PERCENT_DENOMINATOR, PER_TXN_FEE_LAMPORTS, TXN_COUNT_POLICY,
};
use crate::errors::AdwiserError;
use crate::validation::{require_positive, validate_update};

#[account]
#[derive(InitSpace)]
pub struct Campaign {
    pub campaign_id: u64,
    #[max_len(50)]
    pub campaign_name: String,
    pub authority: Pubkey,
    pub advertiser_pubkey: Pubkey,
    pub cost_per_click: u64,
    pub ad_duration_days: u64,
    #[max_len(10)]
    pub publishers: Vec<Pubkey>,
    pub locked_sol: u64,
    pub remaining_sol: u64,
    pub total_clicks: u64,
    pub commission_clicks: u64,
    pub no_of_txns: u64,
    pub created_at: i64,
    pub bump: u8,
    pub escrow_bump: u8,
}

/// Campaign counters after a publisher payout, quoted before any lamports move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublisherPayout {
    pub clicks: u64,
    pub amount: u64,
    pub remaining_sol: u64,
    pub total_clicks: u64,
    pub commission_clicks: u64,
    pub no_of_txns: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommissionPayout {
    pub base: u64,
    pub reimbursement: u64,
    pub amount: u64,
    pub remaining_sol: u64,
    pub no_of_txns: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BudgetExtension {
    pub added_duration_days: u64,
    pub added_locked_sol: u64,
    pub ad_duration_days: u64,
    pub locked_sol: u64,
    pub remaining_sol: u64,
}

impl Campaign {
    pub fn is_publisher(&self, key: &Pubkey) -> bool {
        self.publishers.contains(key)
    }

    /// Sum of everything released from the budget so far, publisher payouts
    /// and commissions alike.
    pub fn paid_out(&self) -> u64 {
        self.locked_sol.saturating_sub(self.remaining_sol)
    }

    pub fn quote_publisher_payout(&self, clicks: u64) -> Result<PublisherPayout> {
        require_positive(clicks)?;
        let amount = self
            .cost_per_click
            .checked_mul(clicks)
            .ok_or(AdwiserError::ArithmeticOverflow)?;
        require_positive(amount)?;
        require!(amount <= self.remaining_sol, AdwiserError::InsufficientFunds);

        Ok(PublisherPayout {
            clicks,
            amount,
            remaining_sol: self
                .remaining_sol
                .checked_sub(amount)
                .ok_or(AdwiserError::ArithmeticOverflow)?,
            total_clicks: self
                .total_clicks
                .checked_add(clicks)
                .ok_or(AdwiserError::ArithmeticOverflow)?,
            commission_clicks: self
                .commission_clicks
                .checked_add(clicks)
                .ok_or(AdwiserError::ArithmeticOverflow)?,
            no_of_txns: self
                .no_of_txns
                .checked_add(1)
                .ok_or(AdwiserError::ArithmeticOverflow)?,
        })
    }

    pub fn commit_publisher_payout(&mut self, payout: &PublisherPayout) {
        self.remaining_sol = payout.remaining_sol;
        self.total_clicks = payout.total_clicks;
        self.commission_clicks = payout.commission_clicks;
        self.no_of_txns = payout.no_of_txns;
    }

    pub fn quote_commission(&self, percentage: u64) -> Result<CommissionPayout> {
        self.quote_commission_with_policy(percentage, TXN_COUNT_POLICY)
    }

    /// `cost_per_click * commission_clicks * percentage / 100` plus a fee
    /// reimbursement for every payout since the last commission and for the
    /// commission transaction itself. The commission is drawn from
    /// `remaining_sol`, so the escrow always covers what the record promises.
    pub fn quote_commission_with_policy(
        &self,
        percentage: u64,
        policy: TxnCountPolicy,
    ) -> Result<CommissionPayout> {
        require!(
            self.commission_clicks > 0,
            AdwiserError::CommissionClicksZero
        );
        require!(
            percentage <= PERCENT_DENOMINATOR,
            AdwiserError::InvalidPercentage
        );

        let base = (self.cost_per_click as u128)
            .checked_mul(self.commission_clicks as u128)
            .and_then(|v| v.checked_mul(percentage as u128))
            .and_then(|v| v.checked_div(PERCENT_DENOMINATOR as u128))
            .ok_or(AdwiserError::ArithmeticOverflow)?;
        let base: u64 = base
            .try_into()
            .map_err(|_| AdwiserError::ArithmeticOverflow)?;

        let reimbursement = self
            .no_of_txns
            .checked_add(1)
            .and_then(|txns| txns.checked_mul(PER_TXN_FEE_LAMPORTS))
            .ok_or(AdwiserError::ArithmeticOverflow)?;
        let amount = base
            .checked_add(reimbursement)
            .ok_or(AdwiserError::ArithmeticOverflow)?;
        require!(amount <= self.remaining_sol, AdwiserError::InsufficientFunds);

        let no_of_txns = match policy {
            TxnCountPolicy::ResetOnCommission => 0,
            TxnCountPolicy::Accumulate => self.no_of_txns,
        };

        Ok(CommissionPayout {
            base,
            reimbursement,
            amount,
            remaining_sol: self
                .remaining_sol
                .checked_sub(amount)
                .ok_or(AdwiserError::ArithmeticOverflow)?,
            no_of_txns,
        })
    }

    pub fn commit_commission(&mut self, payout: &CommissionPayout) {
        self.remaining_sol = payout.remaining_sol;
        self.commission_clicks = 0;
        self.no_of_txns = payout.no_of_txns;
    }

    pub fn quote_extension(
        &self,
        added_duration_days: u64,
        added_locked_sol: u64,
    ) -> Result<BudgetExtension> {
        validate_update(added_duration_days, added_locked_sol)?;

        Ok(BudgetExtension {
            added_duration_days,
            added_locked_sol,
            ad_duration_days: self
                .ad_duration_days
                .checked_add(added_duration_days)
                .ok_or(AdwiserError::ArithmeticOverflow)?,
            locked_sol: self
                .locked_sol
                .checked_add(added_locked_sol)
                .ok_or(AdwiserError::ArithmeticOverflow)?,
            remaining_sol: self
                .remaining_sol
                .checked_add(added_locked_sol)
                .ok_or(AdwiserError::ArithmeticOverflow)?,
        })
    }

    pub fn commit_extension(&mut self, extension: &BudgetExtension) {
        self.ad_duration_days = extension.ad_duration_days;
        self.locked_sol = extension.locked_sol;
        self.remaining_sol = extension.remaining_sol;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::error::Error;

    const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

    fn campaign() -> Campaign {
        Campaign {
            campaign_id: 1,
            campaign_name: "Test Campaign".to_string(),
            authority: Pubkey::new_unique(),
            advertiser_pubkey: Pubkey::new_unique(),
            cost_per_click: 50_000_000,
            ad_duration_days: 7,
            publishers: vec![Pubkey::new_unique(), Pubkey::new_unique()],
            locked_sol: 2 * LAMPORTS_PER_SOL,
            remaining_sol: 2 * LAMPORTS_PER_SOL,
            total_clicks: 0,
            commission_clicks: 0,
            no_of_txns: 0,
            created_at: 0,
            bump: 255,
            escrow_bump: 254,
        }
    }

    fn code(err: Error) -> u32 {
        match err {
            Error::AnchorError(e) => e.error_code_number,
            Error::ProgramError(e) => panic!("expected an anchor error, got {:?}", e),
        }
    }

    #[test]
    fn payout_moves_budget_into_click_counters() {
        let mut c = campaign();
        let payout = c.quote_publisher_payout(10).unwrap();
        assert_eq!(payout.amount, 500_000_000);
        assert_eq!(payout.remaining_sol, 1_500_000_000);

        c.commit_publisher_payout(&payout);
        assert_eq!(c.remaining_sol, 1_500_000_000);
        assert_eq!(c.total_clicks, 10);
        assert_eq!(c.commission_clicks, 10);
        assert_eq!(c.no_of_txns, 1);
        assert_eq!(c.paid_out(), 500_000_000);
    }

    #[test]
    fn quote_does_not_touch_the_record() {
        let c = campaign();
        let before = c.clone();
        c.quote_publisher_payout(3).unwrap();
        assert_eq!(c.remaining_sol, before.remaining_sol);
        assert_eq!(c.total_clicks, before.total_clicks);
    }

    #[test]
    fn payout_rejects_zero_clicks() {
        let err = campaign().quote_publisher_payout(0).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::AmountMustBePositive));
    }

    #[test]
    fn payout_rejects_more_than_remaining() {
        let c = campaign();
        // 41 clicks * 0.05 SOL = 2.05 SOL > 2 SOL
        let err = c.quote_publisher_payout(41).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::InsufficientFunds));

        let exact = c.quote_publisher_payout(40).unwrap();
        assert_eq!(exact.remaining_sol, 0);
    }

    #[test]
    fn payout_detects_overflow() {
        let err = campaign().quote_publisher_payout(u64::MAX).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::ArithmeticOverflow));
    }

    #[test]
    fn repeated_payouts_never_go_negative() {
        let mut c = campaign();
        let mut paid = 0u64;
        for clicks in [7u64, 11, 13, 5, 3] {
            let payout = c.quote_publisher_payout(clicks).unwrap();
            paid += payout.amount;
            c.commit_publisher_payout(&payout);
        }
        assert_eq!(c.remaining_sol, c.locked_sol - paid);
        assert_eq!(c.total_clicks, 39);

        let err = c.quote_publisher_payout(2).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::InsufficientFunds));
        assert_eq!(c.remaining_sol, 50_000_000);
    }

    #[test]
    fn commission_multiplies_before_dividing() {
        let mut c = campaign();
        c.commission_clicks = 10;
        c.no_of_txns = 1;

        let commission = c.quote_commission(5).unwrap();
        assert_eq!(commission.base, 25_000_000);
        assert_eq!(commission.reimbursement, 2 * PER_TXN_FEE_LAMPORTS);
        assert_eq!(commission.amount, 25_010_000);
    }

    #[test]
    fn commission_truncates_fractions() {
        let mut c = campaign();
        c.cost_per_click = 3;
        c.commission_clicks = 1;
        let commission = c.quote_commission(50).unwrap();
        assert_eq!(commission.base, 1);
    }

    #[test]
    fn commission_requires_clicks() {
        let err = campaign().quote_commission(10).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::CommissionClicksZero));

        // zero clicks wins over a bad percentage
        let err = campaign().quote_commission(500).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::CommissionClicksZero));
    }

    #[test]
    fn commission_rejects_percentage_above_hundred() {
        let mut c = campaign();
        c.commission_clicks = 1;
        let err = c.quote_commission(101).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::InvalidPercentage));
    }

    #[test]
    fn commission_resets_counters_and_draws_on_budget() {
        let mut c = campaign();
        let payout = c.quote_publisher_payout(10).unwrap();
        c.commit_publisher_payout(&payout);

        let commission = c.quote_commission(5).unwrap();
        assert_eq!(commission.remaining_sol, 1_474_990_000);
        c.commit_commission(&commission);
        assert_eq!(c.commission_clicks, 0);
        assert_eq!(c.no_of_txns, 0);
        assert_eq!(c.remaining_sol, 1_474_990_000);
        assert_eq!(c.total_clicks, 10);
        assert_eq!(c.paid_out(), 525_010_000);

        // the budget left after the commission is fully payable
        let clicks = c.remaining_sol / c.cost_per_click;
        let payout = c.quote_publisher_payout(clicks).unwrap();
        assert_eq!(payout.remaining_sol, 24_990_000);
    }

    #[test]
    fn commission_larger_than_budget_is_rejected() {
        let mut c = campaign();
        c.commission_clicks = 40;
        c.remaining_sol = 10_000;
        let err = c.quote_commission(100).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::InsufficientFunds));
    }

    #[test]
    fn accumulate_policy_keeps_txn_count() {
        let mut c = campaign();
        c.commission_clicks = 4;
        c.no_of_txns = 3;
        let commission = c
            .quote_commission_with_policy(10, TxnCountPolicy::Accumulate)
            .unwrap();
        assert_eq!(commission.reimbursement, 4 * PER_TXN_FEE_LAMPORTS);

        c.commit_commission(&commission);
        assert_eq!(c.no_of_txns, 3);
        assert_eq!(c.commission_clicks, 0);
    }

    #[test]
    fn commission_base_overflowing_u64_is_rejected() {
        let mut c = campaign();
        c.cost_per_click = u64::MAX;
        c.commission_clicks = u64::MAX;
        let err = c.quote_commission(100).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::ArithmeticOverflow));
    }

    #[test]
    fn extension_adds_to_both_balances() {
        let mut c = campaign();
        let ext = c.quote_extension(3, 10 * LAMPORTS_PER_SOL).unwrap();
        c.commit_extension(&ext);
        assert_eq!(c.ad_duration_days, 10);
        assert_eq!(c.locked_sol, 12 * LAMPORTS_PER_SOL);
        assert_eq!(c.remaining_sol, 12 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn duration_only_extension_leaves_funds() {
        let mut c = campaign();
        let ext = c.quote_extension(5, 0).unwrap();
        c.commit_extension(&ext);
        assert_eq!(c.ad_duration_days, 12);
        assert_eq!(c.locked_sol, 2 * LAMPORTS_PER_SOL);
        assert_eq!(c.remaining_sol, 2 * LAMPORTS_PER_SOL);
    }

    #[test]
    fn empty_extension_is_rejected() {
        let err = campaign().quote_extension(0, 0).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::InvalidUpdate));
    }

    #[test]
    fn extension_overflow_is_rejected() {
        let err = campaign().quote_extension(0, u64::MAX).unwrap_err();
        assert_eq!(code(err), u32::from(AdwiserError::ArithmeticOverflow));
    }
}
