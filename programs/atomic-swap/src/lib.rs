use anchor_lang::prelude::*;

declare_id!("8qS3mYxQ9Tw5aD8zRHf4nKcVJ2bLpE7uW1xGvNtC6sZo");

pub mod constants;
pub mod errors;
pub mod events;
pub mod pda;
pub mod state;
pub use state::*;
pub mod contexts;
pub use contexts::*;

#[cfg(test)]
mod tests;

#[program]
pub mod atomic_swap {
    use super::*;

    /// Creates the caller's user record. Fails with `AlreadyInitialized` if it exists
    pub fn initialize_user_state(ctx: Context<InitializeUserState>) -> Result<()> {
        ctx.accounts.ensure_user_state(&ctx.bumps)?.require_created()
    }

    /// Idempotent variant of `initialize_user_state`, reports whether the record was created
    pub fn ensure_user_state(ctx: Context<InitializeUserState>) -> Result<InitOutcome> {
        ctx.accounts.ensure_user_state(&ctx.bumps)
    }

    /// Opens a swap between the signing offeror and the named offeree
    /// Both must already have a user record
    pub fn initialize_swap_state(ctx: Context<InitializeSwapState>) -> Result<()> {
        ctx.accounts.ensure_swap_state(&ctx.bumps)?.require_created()
    }

    pub fn ensure_swap_state(ctx: Context<InitializeSwapState>) -> Result<InitOutcome> {
        ctx.accounts.ensure_swap_state(&ctx.bumps)
    }

    /// Creates the escrow descriptor for (offeror, mint), whose PDA will own the escrow
    pub fn initialize_escrow_state(ctx: Context<InitializeEscrowState>) -> Result<()> {
        ctx.accounts.ensure_escrow_state(&ctx.bumps)?.require_created()
    }

    pub fn ensure_escrow_state(ctx: Context<InitializeEscrowState>) -> Result<InitOutcome> {
        ctx.accounts.ensure_escrow_state(&ctx.bumps)
    }

    /// Creates the escrow token account under the descriptor's authority
    pub fn initialize_escrow(ctx: Context<InitializeEscrow>) -> Result<()> {
        ctx.accounts.ensure_escrow(&ctx.bumps)?.require_created()
    }

    pub fn ensure_escrow(ctx: Context<InitializeEscrow>) -> Result<InitOutcome> {
        ctx.accounts.ensure_escrow(&ctx.bumps)
    }

    /// Sets or replaces the mint and amount the offeree must provide
    /// Allowed until the offeror commits with `initiate_swap`
    pub fn add_mint_offer(ctx: Context<AddMintOffer>, amount: u64) -> Result<()> {
        ctx.accounts.add_mint_offer(amount)
    }

    /// Locks `amount` of the offeror's asset in escrow
    /// The swap records what the escrow actually received
    pub fn initiate_swap(ctx: Context<InitiateSwap>, amount: u64) -> Result<()> {
        let received = ctx.accounts.deposit(amount)?;
        ctx.accounts.save_swap(received)
    }

    /// Settles both legs at once: escrow to offeree, then offeree to offeror
    /// If either transfer fails the whole instruction fails and nothing moves
    pub fn accept_swap(ctx: Context<AcceptSwap>) -> Result<()> {
        ctx.accounts.check_terms()?;
        ctx.accounts.release_escrow()?;
        ctx.accounts.pay_offeror()?;
        ctx.accounts.settle()
    }

    /// Returns the escrowed asset to the offeror
    /// Only possible while the swap is `Initiated`
    pub fn cancel_swap(ctx: Context<CancelSwap>) -> Result<()> {
        ctx.accounts.refund()?;
        ctx.accounts.save_cancel()
    }

    /// Closes an idle escrow token account, returning stray tokens and rent to the offeror
    pub fn close_escrow(ctx: Context<CloseEscrow>) -> Result<()> {
        ctx.accounts.close_escrow()
    }

    /// Closes a completed or cancelled swap record
    pub fn close_swap_state(ctx: Context<CloseSwapState>) -> Result<()> {
        ctx.accounts.close_swap_state()
    }
}
