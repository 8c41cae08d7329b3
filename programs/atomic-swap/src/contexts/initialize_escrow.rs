use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::{ESCROW_SEED, ESCROW_STATE_SEED},
    errors::SwapError,
    EscrowState, InitOutcome,
};

/// Accounts for `initialize_escrow` and `ensure_escrow`
#[derive(Accounts)]
pub struct InitializeEscrow<'info> {
    #[account(mut)]
    pub offeror: Signer<'info>,

    #[account(
        mint::token_program = token_program
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        has_one = offeror @ SwapError::Unauthorized,
        has_one = mint @ SwapError::InvalidMint,
        seeds = [ESCROW_STATE_SEED, offeror.key().as_ref(), mint.key().as_ref()],
        bump = escrow_state.bump
    )]
    pub escrow_state: Account<'info, EscrowState>,

    /// Holding account for the offeror's asset; only `escrow_state` can sign for it
    #[account(
        init_if_needed,
        payer = offeror,
        seeds = [ESCROW_SEED, offeror.key().as_ref(), mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = escrow_state,
        token::token_program = token_program
    )]
    pub escrow: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeEscrow<'info> {
    pub fn ensure_escrow(&mut self, bumps: &InitializeEscrowBumps) -> Result<InitOutcome> {
        let escrow = self.escrow.key();
        let outcome = self.escrow_state.bind_escrow(escrow, bumps.escrow);

        if outcome == InitOutcome::Created {
            msg!("escrow {} bound to {}", escrow, self.escrow_state.key());
        }
        Ok(outcome)
    }
}
