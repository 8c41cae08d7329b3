use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenInterface};

use crate::{constants::SWAP_STATE_SEED, errors::SwapError, events::MintOffered, SwapState};

#[derive(Accounts)]
pub struct AddMintOffer<'info> {
    /// Only the offeror sets the terms
    pub offeror: Signer<'info>,

    pub offeree: SystemAccount<'info>,

    /// The asset the offeree is expected to hand over
    #[account(
        mint::token_program = token_program
    )]
    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        has_one = offeror @ SwapError::Unauthorized,
        has_one = offeree @ SwapError::Unauthorized,
        seeds = [SWAP_STATE_SEED, offeror.key().as_ref(), offeree.key().as_ref()],
        bump = swap_state.bump
    )]
    pub swap_state: Account<'info, SwapState>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> AddMintOffer<'info> {
    pub fn add_mint_offer(&mut self, amount: u64) -> Result<()> {
        let mint = self.mint.key();
        self.swap_state.add_mint_offer(mint, amount)?;

        msg!("offeree asked for {} of {}", amount, mint);
        emit!(MintOffered {
            offeror: self.offeror.key(),
            offeree: self.offeree.key(),
            mint,
            amount,
        });
        Ok(())
    }
}
