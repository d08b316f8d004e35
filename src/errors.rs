use anchor_lang::prelude::*;

#[error_code]
pub enum AdwiserError {
    #[msg("Amount must be greater than zero")]
    AmountMustBePositive,
    #[msg("Not enough funds in campaign")]
    InsufficientFunds,
    #[msg("Publisher not authorized")]
    PublisherNotAuthorized,
    #[msg("Campaign name cannot be empty")]
    EmptyName,
    #[msg("Campaign name exceeds 50 characters")]
    NameTooLong,
    #[msg("No publishers provided")]
    NoPublishers,
    #[msg("Too many publishers, at most 10 are allowed")]
    TooManyPublishers,
    #[msg("Publisher listed more than once")]
    DuplicatePublisher,
    #[msg("Only the adwiser can close this campaign")]
    UnauthorizedCloser,
    #[msg("Signer is not the campaign authority")]
    Unauthorized,
    #[msg("Only the advertiser can withdraw from treasury")]
    UnauthorizedAdvertiser,
    #[msg("Nothing to withdraw from treasury")]
    NothingToWithdraw,
    #[msg("Commission clicks are zero")]
    CommissionClicksZero,
    #[msg("Commission percentage cannot exceed 100")]
    InvalidPercentage,
    #[msg("Either Locked SOL or AD Duration should be greater than zero")]
    InvalidUpdate,
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Campaign id has already been closed")]
    CampaignAlreadyClosed,
}
