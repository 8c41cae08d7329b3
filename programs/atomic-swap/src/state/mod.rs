use anchor_lang::prelude::*;

pub mod escrow_state;
pub use escrow_state::*;
pub mod swap_state;
pub use swap_state::*;
pub mod user_state;
pub use user_state::*;

use crate::errors::SwapError;

/// Result of an idempotent record bootstrap
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// The record was written by this call
    Created,
    /// The record already held data and was left as is
    AlreadyExisted,
}

impl InitOutcome {
    /// Turns a repeated bootstrap into `AlreadyInitialized`, for the strict `initialize_*` instructions
    pub fn require_created(self) -> Result<()> {
        require!(self == InitOutcome::Created, SwapError::AlreadyInitialized);
        Ok(())
    }
}
