use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::{ESCROW_SEED, ESCROW_STATE_SEED, SWAP_STATE_SEED, USER_STATE_SEED},
    errors::SwapError,
    events::SwapCancelled,
    EscrowState, SwapState, UserState,
};

#[derive(Accounts)]
pub struct CancelSwap<'info> {
    /// Only the offeror can take the escrowed asset back
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

    #[account(
        mut,
        seeds = [USER_STATE_SEED, offeror.key().as_ref()],
        bump = offeror_state.bump
    )]
    pub offeror_state: Box<Account<'info, UserState>>,

    /// The escrowed asset
    #[account(
        mint::token_program = token_program
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        has_one = mint @ SwapError::InvalidMint,
        seeds = [ESCROW_STATE_SEED, offeror.key().as_ref(), mint.key().as_ref()],
        bump = escrow_state.bump
    )]
    pub escrow_state: Box<Account<'info, EscrowState>>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, offeror.key().as_ref(), mint.key().as_ref()],
        bump = escrow_state.escrow_bump,
        constraint = escrow.owner == escrow_state.key() @ SwapError::DerivationMismatch
    )]
    pub escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Where the asset is returned; recreated if the offeror closed it meanwhile
    #[account(
        init_if_needed,
        payer = offeror,
        associated_token::mint = mint,
        associated_token::authority = offeror,
        associated_token::token_program = token_program
    )]
    pub offeror_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> CancelSwap<'info> {
    /// Returns everything the escrow holds to the offeror, signed by the escrow authority
    pub fn refund(&self) -> Result<()> {
        self.swap_state.require_escrowed_mint(self.mint.key())?;
        self.escrow_state.require_escrow(self.escrow.key())?;
        self.escrow_state.require_active_swap(self.swap_state.key())?;

        let seeds = self.escrow_state.signer_seeds();
        let signer_seeds: [&[&[u8]]; 1] = [&seeds];

        let xfer_accounts = TransferChecked {
            from: self.escrow.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.offeror_ata.to_account_info(),
            authority: self.escrow_state.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            xfer_accounts,
            &signer_seeds,
        );
        transfer_checked(ctx, self.escrow.amount, self.mint.decimals)
    }

    pub fn save_cancel(&mut self) -> Result<()> {
        self.escrow_state.release(self.swap_state.key())?;
        self.swap_state.cancel()?;
        self.offeror_state.close_swap()?;

        msg!("swap {} cancelled by offeror", self.swap_state.key());
        emit!(SwapCancelled {
            offeror: self.offeror.key(),
            offeree: self.offeree.key(),
            mint: self.mint.key(),
            amount: self.swap_state.amount_offeror,
        });
        Ok(())
    }
}
