use anchor_lang::prelude::*;

use crate::{constants::ESCROW_STATE_SEED, errors::SwapError, InitOutcome};

/// Escrow descriptor for one (offeror, mint), PDA `["escrow_state", offeror, mint]`.
///
/// The PDA of this record is the token authority of the escrow account, so only this
/// program, signing with the stored bump, can move escrowed tokens.
#[account]
#[derive(InitSpace)]
pub struct EscrowState {
    pub offeror: Pubkey,
    pub mint: Pubkey,
    pub authority: Pubkey,   // address of this record, authority of `escrow`
    pub escrow: Pubkey,      // live escrow token account, default when none
    pub active_swap: Pubkey, // swap whose asset the escrow currently holds, default when idle
    pub bump: u8,
    pub escrow_bump: u8,
}

impl EscrowState {
    /// Writes a fresh descriptor unless `mint` is already set
    pub fn ensure(&mut self, offeror: Pubkey, mint: Pubkey, authority: Pubkey, bump: u8) -> InitOutcome {
        if self.mint != Pubkey::default() {
            return InitOutcome::AlreadyExisted;
        }
        *self = EscrowState {
            offeror,
            mint,
            authority,
            escrow: Pubkey::default(),
            active_swap: Pubkey::default(),
            bump,
            escrow_bump: 0,
        };
        InitOutcome::Created
    }

    pub fn has_escrow(&self) -> bool {
        self.escrow != Pubkey::default()
    }

    /// Records the escrow token account unless one is already live
    pub fn bind_escrow(&mut self, escrow: Pubkey, escrow_bump: u8) -> InitOutcome {
        if self.has_escrow() {
            return InitOutcome::AlreadyExisted;
        }
        self.escrow = escrow;
        self.escrow_bump = escrow_bump;
        InitOutcome::Created
    }

    pub fn unbind_escrow(&mut self) {
        self.escrow = Pubkey::default();
        self.escrow_bump = 0;
    }

    /// Checks that `escrow` is the live escrow token account of this descriptor
    pub fn require_escrow(&self, escrow: Pubkey) -> Result<()> {
        require!(self.has_escrow(), SwapError::EscrowNotInitialized);
        require_keys_eq!(self.escrow, escrow, SwapError::DerivationMismatch);
        Ok(())
    }

    pub fn has_active_swap(&self) -> bool {
        self.active_swap != Pubkey::default()
    }

    /// Reserves the escrow for `swap`; an escrow backs at most one swap at a time
    pub fn claim(&mut self, swap: Pubkey) -> Result<()> {
        require!(!self.has_active_swap(), SwapError::EscrowInUse);
        self.active_swap = swap;
        Ok(())
    }

    pub fn require_active_swap(&self, swap: Pubkey) -> Result<()> {
        require_keys_eq!(self.active_swap, swap, SwapError::EscrowInUse);
        Ok(())
    }

    /// Frees the escrow once `swap` has been accepted or cancelled
    pub fn release(&mut self, swap: Pubkey) -> Result<()> {
        self.require_active_swap(swap)?;
        self.active_swap = Pubkey::default();
        Ok(())
    }

    /// An escrow holding a swap's asset cannot be torn down
    pub fn require_idle(&self) -> Result<()> {
        require!(!self.has_active_swap(), SwapError::EscrowNotEmpty);
        Ok(())
    }

    /// Seeds the program signs with when acting as escrow authority
    pub fn signer_seeds(&self) -> [&[u8]; 4] {
        [
            ESCROW_STATE_SEED,
            self.offeror.as_ref(),
            self.mint.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }
}

/// Amount the escrow actually gained from a deposit; fee-bearing mints deliver less than was sent
pub fn deposited_amount(before: u64, after: u64) -> Result<u64> {
    let received = after
        .checked_sub(before)
        .ok_or(error!(SwapError::InsufficientFunds))?;
    require_gt!(received, 0, SwapError::InvalidAmount);
    Ok(received)
}
