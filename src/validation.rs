use anchor_lang::prelude::*;

use crate::constants::{MAX_CAMPAIGN_NAME_LEN, MAX_PUBLISHERS};
use crate::errors::AdwiserError;

pub fn require_positive(amount: u64) -> Result<()> {
    require!(amount > 0, AdwiserError::AmountMustBePositive);
    Ok(())
}

pub fn validate_campaign_name(name: &str) -> Result<()> {
    require!(!name.is_empty(), AdwiserError::EmptyName);
    require!(
        name.len() <= MAX_CAMPAIGN_NAME_LEN,
        AdwiserError::NameTooLong
    );
    Ok(())
}

pub fn validate_publishers(publishers: &[Pubkey]) -> Result<()> {
    require!(!publishers.is_empty(), AdwiserError::NoPublishers);
    require!(
        publishers.len() <= MAX_PUBLISHERS,
        AdwiserError::TooManyPublishers
    );
    let duplicated = publishers
        .iter()
        .enumerate()
        .any(|(i, publisher)| publishers[..i].contains(publisher));
    require!(!duplicated, AdwiserError::DuplicatePublisher);
    Ok(())
}

/// Checks run by `initialize_campaign` before anything is written.
pub fn validate_campaign_terms(
    name: &str,
    cost_per_click: u64,
    publishers: &[Pubkey],
    locked_sol: u64,
) -> Result<()> {
    require_positive(locked_sol)?;
    require_positive(cost_per_click)?;
    validate_campaign_name(name)?;
    validate_publishers(publishers)
}

pub fn validate_update(added_duration_days: u64, added_locked_sol: u64) -> Result<()> {
    require!(
        added_duration_days > 0 || added_locked_sol > 0,
        AdwiserError::InvalidUpdate
    );
    Ok(())
}
