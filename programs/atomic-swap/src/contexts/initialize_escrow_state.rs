use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

use crate::{constants::ESCROW_STATE_SEED, EscrowState, InitOutcome};

/// Accounts for `initialize_escrow_state` and `ensure_escrow_state`
#[derive(Accounts)]
pub struct InitializeEscrowState<'info> {
    #[account(mut)]
    pub offeror: Signer<'info>,

    /// The asset the escrow will guard
    #[account(
        mint::token_program = token_program
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    /// Its PDA becomes the token authority of the escrow account
    #[account(
        init_if_needed,
        payer = offeror,
        space = 8 + EscrowState::INIT_SPACE,
        seeds = [ESCROW_STATE_SEED, offeror.key().as_ref(), mint.key().as_ref()],
        bump
    )]
    pub escrow_state: Account<'info, EscrowState>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeEscrowState<'info> {
    pub fn ensure_escrow_state(
        &mut self,
        bumps: &InitializeEscrowStateBumps,
    ) -> Result<InitOutcome> {
        let authority = self.escrow_state.key();
        let outcome = self.escrow_state.ensure(
            self.offeror.key(),
            self.mint.key(),
            authority,
            bumps.escrow_state,
        );

        if outcome == InitOutcome::Created {
            msg!("escrow state {} created for mint {}", authority, self.mint.key());
        }
        Ok(outcome)
    }
}
