//! PDA derivation shared by the account constraints and off-chain callers.
//! Campaign ids are encoded as 8 little-endian bytes.

use anchor_lang::prelude::*;

use crate::constants::{CAMPAIGN_SEED, ESCROW_SEED, TOMBSTONE_SEED};

pub fn campaign_address(campaign_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CAMPAIGN_SEED, &campaign_id.to_le_bytes()], &crate::ID)
}

pub fn escrow_address(campaign_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_SEED, &campaign_id.to_le_bytes()], &crate::ID)
}

pub fn tombstone_address(campaign_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TOMBSTONE_SEED, &campaign_id.to_le_bytes()], &crate::ID)
}
