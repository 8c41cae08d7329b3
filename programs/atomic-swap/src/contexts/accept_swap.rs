use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{
    constants::{ESCROW_SEED, ESCROW_STATE_SEED, SWAP_STATE_SEED, USER_STATE_SEED},
    errors::SwapError,
    events::SwapAccepted,
    EscrowState, SwapState, UserState,
};

/// Accounts for settling both legs of a swap in one instruction
#[derive(Accounts)]
pub struct AcceptSwap<'info> {
    /// The counterparty accepting the offer; pays for any token account created below
    #[account(mut)]
    pub offeree: Signer<'info>,

    pub offeror: SystemAccount<'info>,

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

    /// Asset held in escrow, goes to the offeree
    #[account(
        mint::token_program = token_program
    )]
    pub mint_offeror: Box<InterfaceAccount<'info, Mint>>,

    /// Asset requested by the offeror, paid by the offeree
    #[account(
        mint::token_program = token_program
    )]
    pub mint_offeree: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        constraint = escrow_state.mint == mint_offeror.key() @ SwapError::InvalidMint,
        seeds = [ESCROW_STATE_SEED, offeror.key().as_ref(), mint_offeror.key().as_ref()],
        bump = escrow_state.bump
    )]
    pub escrow_state: Box<Account<'info, EscrowState>>,

    #[account(
        mut,
        seeds = [ESCROW_SEED, offeror.key().as_ref(), mint_offeror.key().as_ref()],
        bump = escrow_state.escrow_bump,
        constraint = escrow.owner == escrow_state.key() @ SwapError::DerivationMismatch
    )]
    pub escrow: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the escrowed asset
    #[account(
        init_if_needed,
        payer = offeree,
        associated_token::mint = mint_offeror,
        associated_token::authority = offeree,
        associated_token::token_program = token_program
    )]
    pub offeree_receive_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Source of the offeree's payment
    #[account(
        mut,
        associated_token::mint = mint_offeree,
        associated_token::authority = offeree,
        associated_token::token_program = token_program
    )]
    pub offeree_pay_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the offeree's payment
    #[account(
        init_if_needed,
        payer = offeree,
        associated_token::mint = mint_offeree,
        associated_token::authority = offeror,
        associated_token::token_program = token_program
    )]
    pub offeror_receive_ata: Box<InterfaceAccount<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> AcceptSwap<'info> {
    /// Phase gate and term check, run before either leg moves anything
    pub fn check_terms(&self) -> Result<()> {
        self.swap_state
            .require_accept_terms(self.mint_offeror.key(), self.mint_offeree.key())?;
        self.escrow_state.require_escrow(self.escrow.key())?;
        self.escrow_state.require_active_swap(self.swap_state.key())?;
        require_gte!(
            self.offeree_pay_ata.amount,
            self.swap_state.amount_offeree,
            SwapError::InsufficientFunds
        );
        Ok(())
    }

    /// First leg: the escrow authority releases everything it holds to the offeree
    pub fn release_escrow(&self) -> Result<()> {
        let seeds = self.escrow_state.signer_seeds();
        let signer_seeds: [&[&[u8]]; 1] = [&seeds];

        let accounts = TransferChecked {
            from: self.escrow.to_account_info(),
            mint: self.mint_offeror.to_account_info(),
            to: self.offeree_receive_ata.to_account_info(),
            authority: self.escrow_state.to_account_info(),
        };
        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            &signer_seeds,
        );
        transfer_checked(ctx, self.escrow.amount, self.mint_offeror.decimals)
    }

    /// Second leg: the offeree pays the requested asset straight to the offeror
    pub fn pay_offeror(&self) -> Result<()> {
        let accounts = TransferChecked {
            from: self.offeree_pay_ata.to_account_info(),
            mint: self.mint_offeree.to_account_info(),
            to: self.offeror_receive_ata.to_account_info(),
            authority: self.offeree.to_account_info(),
        };
        let ctx = CpiContext::new(self.token_program.to_account_info(), accounts);
        transfer_checked(ctx, self.swap_state.amount_offeree, self.mint_offeree.decimals)
    }

    pub fn settle(&mut self) -> Result<()> {
        self.escrow_state.release(self.swap_state.key())?;
        self.swap_state.complete()?;
        self.offeror_state.close_swap()?;

        msg!("swap {} settled", self.swap_state.key());
        emit!(SwapAccepted {
            offeror: self.offeror.key(),
            offeree: self.offeree.key(),
            mint_offeror: self.mint_offeror.key(),
            amount_offeror: self.swap_state.amount_offeror,
            mint_offeree: self.mint_offeree.key(),
            amount_offeree: self.swap_state.amount_offeree,
        });
        Ok(())
    }
}
