use anchor_lang::prelude::*;

use crate::{
    constants::{SWAP_STATE_SEED, USER_STATE_SEED},
    events::SwapStateInitialized,
    InitOutcome, SwapState, UserState,
};

/// Accounts for `initialize_swap_state` and `ensure_swap_state`
#[derive(Accounts)]
pub struct InitializeSwapState<'info> {
    /// The party proposing the swap, pays for the swap record
    #[account(mut)]
    pub offeror: Signer<'info>,

    /// The counterparty the offer is addressed to
    pub offeree: SystemAccount<'info>,

    // Both parties must be bootstrapped before they can appear in a swap
    #[account(
        seeds = [USER_STATE_SEED, offeror.key().as_ref()],
        bump = offeror_state.bump
    )]
    pub offeror_state: Account<'info, UserState>,

    #[account(
        seeds = [USER_STATE_SEED, offeree.key().as_ref()],
        bump = offeree_state.bump
    )]
    pub offeree_state: Account<'info, UserState>,

    /// One record per ordered (offeror, offeree) pair
    #[account(
        init_if_needed,
        payer = offeror,
        space = 8 + SwapState::INIT_SPACE,
        seeds = [SWAP_STATE_SEED, offeror.key().as_ref(), offeree.key().as_ref()],
        bump
    )]
    pub swap_state: Account<'info, SwapState>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeSwapState<'info> {
    pub fn ensure_swap_state(&mut self, bumps: &InitializeSwapStateBumps) -> Result<InitOutcome> {
        let offeror = self.offeror.key();
        let offeree = self.offeree.key();
        let outcome = self.swap_state.ensure(offeror, offeree, bumps.swap_state);

        if outcome == InitOutcome::Created {
            msg!("swap state created: {} -> {}", offeror, offeree);
            emit!(SwapStateInitialized { offeror, offeree });
        }
        Ok(outcome)
    }
}
