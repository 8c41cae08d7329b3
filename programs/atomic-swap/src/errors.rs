use anchor_lang::prelude::*;

#[error_code]
pub enum SwapError {
    #[msg("Account already initialized")]
    AlreadyInitialized,
    #[msg("Instruction not allowed in the current swap phase")]
    InvalidPhase,
    #[msg("Signer is not the required authority for this record")]
    Unauthorized,
    #[msg("Source token account holds less than the required amount")]
    InsufficientFunds,
    #[msg("Escrow still holds the asset of an open swap")]
    EscrowNotEmpty,
    #[msg("Supplied account does not match its expected derivation")]
    DerivationMismatch,
    #[msg("Invalid amount: amount must be greater than zero")]
    InvalidAmount,
    #[msg("Offeree mint has not been offered yet")]
    MintOfferMissing,
    #[msg("Mint does not match the one recorded for this swap")]
    InvalidMint,
    #[msg("Escrow token account has not been initialized")]
    EscrowNotInitialized,
    #[msg("Open swap counter overflow")]
    OpenSwapOverflow,
    #[msg("Open swap counter underflow")]
    OpenSwapUnderflow,
    #[msg("Escrow already backs another swap")]
    EscrowInUse,
}
