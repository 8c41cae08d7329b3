use anchor_lang::prelude::*;

use crate::{errors::SwapError, InitOutcome};

/// Lifecycle of a swap between one ordered (offeror, offeree) pair
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapPhase {
    /// Pair declared, nothing requested or locked yet
    Created,
    /// Offeror has named the mint and amount expected from the offeree
    Offered,
    /// Offeror's asset sits in escrow
    Initiated,
    /// Both legs settled (terminal)
    Completed,
    /// Escrowed asset returned to the offeror (terminal)
    Cancelled,
}

impl SwapPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SwapPhase::Completed | SwapPhase::Cancelled)
    }
}

/// Defines the data stored for one swap:
/// - the two counterparties,
/// - the mint and amount each side brings (the offeror's side is fixed on initiate),
/// - the current phase,
/// - and the bump of `["swap_state", offeror, offeree]`.
#[account]
#[derive(InitSpace)]
pub struct SwapState {
    pub offeror: Pubkey,
    pub offeree: Pubkey,
    pub mint_offeror: Option<Pubkey>, // asset locked in escrow by the offeror
    pub amount_offeror: u64,
    pub mint_offeree: Option<Pubkey>, // asset the offeree must hand over on accept
    pub amount_offeree: u64,
    pub phase: SwapPhase,
    pub bump: u8,
}

impl SwapState {
    /// Writes a fresh record in phase `Created` unless the pair is already recorded
    pub fn ensure(&mut self, offeror: Pubkey, offeree: Pubkey, bump: u8) -> InitOutcome {
        if self.offeror != Pubkey::default() {
            return InitOutcome::AlreadyExisted;
        }
        *self = SwapState {
            offeror,
            offeree,
            mint_offeror: None,
            amount_offeror: 0,
            mint_offeree: None,
            amount_offeree: 0,
            phase: SwapPhase::Created,
            bump,
        };
        InitOutcome::Created
    }

    pub fn require_phase(&self, allowed: &[SwapPhase]) -> Result<()> {
        if !allowed.contains(&self.phase) {
            msg!("swap phase {:?} not in {:?}", self.phase, allowed);
            return err!(SwapError::InvalidPhase);
        }
        Ok(())
    }

    /// Records (or replaces) the asset requested from the offeree
    pub fn add_mint_offer(&mut self, mint: Pubkey, amount: u64) -> Result<()> {
        self.require_phase(&[SwapPhase::Created, SwapPhase::Offered])?;
        require_gt!(amount, 0, SwapError::InvalidAmount);

        self.mint_offeree = Some(mint);
        self.amount_offeree = amount;
        self.phase = SwapPhase::Offered;
        Ok(())
    }

    /// Records the asset the offeror has just locked in escrow
    pub fn initiate(&mut self, mint: Pubkey, amount: u64) -> Result<()> {
        self.require_phase(&[SwapPhase::Created, SwapPhase::Offered])?;
        require_gt!(amount, 0, SwapError::InvalidAmount);

        self.mint_offeror = Some(mint);
        self.amount_offeror = amount;
        self.phase = SwapPhase::Initiated;
        Ok(())
    }

    /// Checks that `mint` is the asset currently held in escrow for this swap
    pub fn require_escrowed_mint(&self, mint: Pubkey) -> Result<()> {
        self.require_phase(&[SwapPhase::Initiated])?;
        let escrowed = self.mint_offeror.ok_or(error!(SwapError::InvalidPhase))?;
        require_keys_eq!(escrowed, mint, SwapError::InvalidMint);
        Ok(())
    }

    /// Checks that both legs of an accept refer to the recorded mints
    pub fn require_accept_terms(&self, mint_offeror: Pubkey, mint_offeree: Pubkey) -> Result<()> {
        self.require_escrowed_mint(mint_offeror)?;
        let requested = self
            .mint_offeree
            .ok_or(error!(SwapError::MintOfferMissing))?;
        require_keys_eq!(requested, mint_offeree, SwapError::InvalidMint);
        Ok(())
    }

    pub fn complete(&mut self) -> Result<()> {
        self.require_phase(&[SwapPhase::Initiated])?;
        self.phase = SwapPhase::Completed;
        Ok(())
    }

    pub fn cancel(&mut self) -> Result<()> {
        self.require_phase(&[SwapPhase::Initiated])?;
        self.phase = SwapPhase::Cancelled;
        Ok(())
    }

    /// Only settled or cancelled swaps may release their record
    pub fn require_closable(&self) -> Result<()> {
        require!(self.phase.is_terminal(), SwapError::InvalidPhase);
        Ok(())
    }
}
