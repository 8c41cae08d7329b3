use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
        TransferChecked,
    },
};

use crate::{
    constants::{ESCROW_SEED, ESCROW_STATE_SEED},
    errors::SwapError,
    events::EscrowClosed,
    EscrowState,
};

/// Tears down an idle escrow. Only the offeror can close it; stray tokens and rent go back to them.
#[derive(Accounts)]
pub struct CloseEscrow<'info> {
    #[account(mut)]
    pub offeror: Signer<'info>,

    #[account(
        mint::token_program = token_program
    )]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        has_one = offeror @ SwapError::Unauthorized,
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

    /// Receives whatever was sent to the escrow outside a swap
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

impl<'info> CloseEscrow<'info> {
    pub fn close_escrow(&mut self) -> Result<()> {
        let escrow = self.escrow.key();
        self.escrow_state.require_escrow(escrow)?;
        self.escrow_state.require_idle()?;

        let seeds = self.escrow_state.signer_seeds();
        let signer_seeds: [&[&[u8]]; 1] = [&seeds];

        let swept = self.escrow.amount;
        if swept > 0 {
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
            transfer_checked(ctx, swept, self.mint.decimals)?;
        }

        let close_accounts = CloseAccount {
            account: self.escrow.to_account_info(),
            destination: self.offeror.to_account_info(),
            authority: self.escrow_state.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            close_accounts,
            &signer_seeds,
        );
        close_account(ctx)?;

        self.escrow_state.unbind_escrow();

        msg!("escrow {} closed, {} stray tokens returned", escrow, swept);
        emit!(EscrowClosed {
            offeror: self.offeror.key(),
            mint: self.mint.key(),
            escrow,
        });
        Ok(())
    }
}
