use anchor_lang::prelude::*;

use crate::{constants::USER_STATE_SEED, events::UserStateInitialized, InitOutcome, UserState};

/// Accounts for `initialize_user_state` and `ensure_user_state`
#[derive(Accounts)]
pub struct InitializeUserState<'info> {
    /// The wallet the record is derived from; also pays for the account
    #[account(mut)]
    pub user: Signer<'info>,

    /// Created on first use, loaded unchanged afterwards so the handler can tell the two apart
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserState::INIT_SPACE,
        seeds = [USER_STATE_SEED, user.key().as_ref()],
        bump
    )]
    pub user_state: Account<'info, UserState>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeUserState<'info> {
    pub fn ensure_user_state(&mut self, bumps: &InitializeUserStateBumps) -> Result<InitOutcome> {
        let owner = self.user.key();
        let outcome = self.user_state.ensure(owner, bumps.user_state);

        match outcome {
            InitOutcome::Created => {
                msg!("user state created for {}", owner);
                emit!(UserStateInitialized { owner });
            }
            InitOutcome::AlreadyExisted => msg!("user state for {} already exists", owner),
        }
        Ok(outcome)
    }
}
