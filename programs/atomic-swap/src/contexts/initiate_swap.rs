use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::{ESCROW_SEED, ESCROW_STATE_SEED, SWAP_STATE_SEED, USER_STATE_SEED},
    errors::SwapError,
    events::SwapInitiated,
    deposited_amount, EscrowState, SwapPhase, SwapState, UserState,
};

/// Accounts needed to lock the offeror's asset in escrow
#[derive(Accounts)]
pub struct InitiateSwap<'info> {
    /// Owner of the asset being locked, signs the deposit
    #[account(mut)]
    pub offeror: Signer<'info>,

    pub offeree: SystemAccount<'info>,

    #[account(
        mut,
        has_one = offeror @ SwapError::Unauthorized,
        has_one = offeree @ SwapError::Unauthorized,
        seeds = [SWAP_STATE_SEED, offeror.key().as_ref(), offeree.key().as_ref()],
        bump = swap_state.bump
    )]
    pub swap_state: Box<Account<'info, SwapState>>,

    /// Tracks how many swaps the offeror has open
    #[account(
        mut,
        seeds = [USER_STATE_SEED, offeror.key().as_ref()],
        bump = offeror_state.bump
    )]
    pub offeror_state: Box<Account<'info, UserState>>,

    /// The asset the offeror puts up
    #[account(
        mint::token_program = token_program
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    /// Source of the deposit
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = offeror,
        associated_token::token_program = token_program
    )]
    pub offeror_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        has_one = mint @ SwapError::InvalidMint,
        seeds = [ESCROW_STATE_SEED, offeror.key().as_ref(), mint.key().as_ref()],
        bump = escrow_state.bump
    )]
    pub escrow_state: Box<Account<'info, EscrowState>>,

    /// Must be the live escrow of `escrow_state`, with `escrow_state` as token authority
    #[account(
        mut,
        seeds = [ESCROW_SEED, offeror.key().as_ref(), mint.key().as_ref()],
        bump = escrow_state.escrow_bump,
        constraint = escrow.owner == escrow_state.key() @ SwapError::DerivationMismatch,
        constraint = escrow.mint == mint.key() @ SwapError::InvalidMint
    )]
    pub escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> InitiateSwap<'info> {
    /// Moves `amount` from the offeror's wallet into the escrow and returns what the escrow received
    pub fn deposit(&mut self, amount: u64) -> Result<u64> {
        self.swap_state
            .require_phase(&[SwapPhase::Created, SwapPhase::Offered])?;
        self.escrow_state.require_escrow(self.escrow.key())?;
        require_gt!(amount, 0, SwapError::InvalidAmount);
        require_gte!(self.offeror_ata.amount, amount, SwapError::InsufficientFunds);

        let before = self.escrow.amount;
        let transfer_accounts = TransferChecked {
            from: self.offeror_ata.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.escrow.to_account_info(),
            authority: self.offeror.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);
        transfer_checked(cpi_ctx, amount, self.mint.decimals)?;

        self.escrow.reload()?;
        deposited_amount(before, self.escrow.amount)
    }

    /// Reserves the escrow, advances the swap to `Initiated` and counts it against the offeror
    pub fn save_swap(&mut self, received: u64) -> Result<()> {
        let mint = self.mint.key();
        self.escrow_state.claim(self.swap_state.key())?;
        self.swap_state.initiate(mint, received)?;
        self.offeror_state.open_swap()?;

        msg!(
            "swap initiated, {} of {} escrowed, offeror has {} open",
            received,
            mint,
            self.offeror_state.open_swap_count
        );
        emit!(SwapInitiated {
            offeror: self.offeror.key(),
            offeree: self.offeree.key(),
            mint,
            amount: received,
            escrow: self.escrow.key(),
        });
        Ok(())
    }
}
