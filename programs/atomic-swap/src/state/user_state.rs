use anchor_lang::prelude::*;

use crate::{errors::SwapError, InitOutcome};

/// Per-user record, PDA `["user_state", owner]`
///
/// `open_swap_count` is informational: it is kept in step with initiate, accept and cancel
/// but no instruction gates on it.
#[account]
#[derive(InitSpace)]
pub struct UserState {
    pub owner: Pubkey,        // wallet this record belongs to
    pub open_swap_count: u32, // swaps initiated by the owner that are not yet accepted or cancelled
    pub bump: u8,
}

impl UserState {
    /// Writes a fresh record unless `owner` is already set
    pub fn ensure(&mut self, owner: Pubkey, bump: u8) -> InitOutcome {
        if self.owner != Pubkey::default() {
            return InitOutcome::AlreadyExisted;
        }
        *self = UserState {
            owner,
            open_swap_count: 0,
            bump,
        };
        InitOutcome::Created
    }

    pub fn open_swap(&mut self) -> Result<()> {
        self.open_swap_count = self
            .open_swap_count
            .checked_add(1)
            .ok_or(error!(SwapError::OpenSwapOverflow))?;
        Ok(())
    }

    pub fn close_swap(&mut self) -> Result<()> {
        self.open_swap_count = self
            .open_swap_count
            .checked_sub(1)
            .ok_or(error!(SwapError::OpenSwapUnderflow))?;
        Ok(())
    }
}
