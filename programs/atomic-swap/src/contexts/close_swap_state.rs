use anchor_lang::prelude::*;

use crate::{constants::SWAP_STATE_SEED, errors::SwapError, SwapState};

/// Reclaims a settled or cancelled swap record so the pair can trade again
#[derive(Accounts)]
pub struct CloseSwapState<'info> {
    #[account(mut)]
    pub offeror: Signer<'info>,

    pub offeree: SystemAccount<'info>,

    #[account(
        mut,
        close = offeror,
        has_one = offeror @ SwapError::Unauthorized,
        has_one = offeree @ SwapError::Unauthorized,
        seeds = [SWAP_STATE_SEED, offeror.key().as_ref(), offeree.key().as_ref()],
        bump = swap_state.bump
    )]
    pub swap_state: Account<'info, SwapState>,
}

impl<'info> CloseSwapState<'info> {
    pub fn close_swap_state(&self) -> Result<()> {
        self.swap_state.require_closable()?;
        msg!("swap state {} closed in phase {:?}", self.swap_state.key(), self.swap_state.phase);
        Ok(())
    }
}
