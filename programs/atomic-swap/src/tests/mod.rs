//! Record-level walkthroughs of the accept and cancel paths.
//!
//! These cover the state each instruction leaves behind. Token balances are checked
//! end to end in `tests/swap.rs`.

use anchor_lang::prelude::*;

use crate::{errors::SwapError, pda, EscrowState, InitOutcome, SwapPhase, SwapState, UserState};

struct Fixture {
    offeror: Pubkey,
    offeree: Pubkey,
    mint_a: Pubkey,
    mint_b: Pubkey,
    offeror_state: UserState,
    offeree_state: UserState,
    swap_state: SwapState,
    escrow_state: EscrowState,
    escrow: Pubkey,
}

fn empty_user() -> UserState {
    UserState {
        owner: Pubkey::default(),
        open_swap_count: 0,
        bump: 0,
    }
}

/// Offeror A holds M1, offeree B holds M2; everything bootstrapped and M2 requested
fn offered() -> Fixture {
    let offeror = Pubkey::new_unique();
    let offeree = Pubkey::new_unique();
    let mint_a = Pubkey::new_unique();
    let mint_b = Pubkey::new_unique();

    let mut offeror_state = empty_user();
    let mut offeree_state = empty_user();
    assert_eq!(
        offeror_state.ensure(offeror, pda::user_state_address(&offeror).1),
        InitOutcome::Created
    );
    assert_eq!(
        offeree_state.ensure(offeree, pda::user_state_address(&offeree).1),
        InitOutcome::Created
    );

    let mut swap_state = SwapState {
        offeror: Pubkey::default(),
        offeree: Pubkey::default(),
        mint_offeror: None,
        amount_offeror: 0,
        mint_offeree: None,
        amount_offeree: 0,
        phase: SwapPhase::Created,
        bump: 0,
    };
    let (_, swap_bump) = pda::swap_state_address(&offeror, &offeree);
    assert_eq!(
        swap_state.ensure(offeror, offeree, swap_bump),
        InitOutcome::Created
    );
    swap_state.add_mint_offer(mint_b, 1).unwrap();

    let mut escrow_state = EscrowState {
        offeror: Pubkey::default(),
        mint: Pubkey::default(),
        authority: Pubkey::default(),
        escrow: Pubkey::default(),
        active_swap: Pubkey::default(),
        bump: 0,
        escrow_bump: 0,
    };
    let (authority, state_bump) = pda::escrow_state_address(&offeror, &mint_a);
    escrow_state.ensure(offeror, mint_a, authority, state_bump);
    let (escrow, escrow_bump) = pda::escrow_address(&offeror, &mint_a);
    escrow_state.bind_escrow(escrow, escrow_bump);

    Fixture {
        offeror,
        offeree,
        mint_a,
        mint_b,
        offeror_state,
        offeree_state,
        swap_state,
        escrow_state,
        escrow,
    }
}

fn swap_key(f: &Fixture) -> Pubkey {
    pda::swap_state_address(&f.offeror, &f.offeree).0
}

/// What `initiate_swap` writes after the deposit
fn initiate(f: &mut Fixture) {
    let swap = swap_key(f);
    f.escrow_state.require_escrow(f.escrow).unwrap();
    f.escrow_state.claim(swap).unwrap();
    f.swap_state.initiate(f.mint_a, 1).unwrap();
    f.offeror_state.open_swap().unwrap();
}

#[test]
fn accept_path_completes_and_releases_counters() {
    let mut f = offered();
    initiate(&mut f);
    assert_eq!(f.swap_state.phase, SwapPhase::Initiated);
    assert_eq!(f.offeror_state.open_swap_count, 1);
    assert_eq!(f.offeree_state.open_swap_count, 0);

    f.swap_state.require_accept_terms(f.mint_a, f.mint_b).unwrap();
    f.escrow_state.require_active_swap(swap_key(&f)).unwrap();
    // the escrow cannot be closed while it backs the swap
    assert_eq!(
        f.escrow_state.require_idle().unwrap_err(),
        error!(SwapError::EscrowNotEmpty)
    );
    f.escrow_state.release(swap_key(&f)).unwrap();
    f.swap_state.complete().unwrap();
    f.offeror_state.close_swap().unwrap();

    assert_eq!(f.swap_state.phase, SwapPhase::Completed);
    assert_eq!(f.offeror_state.open_swap_count, 0);
    assert_eq!(f.offeree_state.open_swap_count, 0);

    // nothing leads out of Completed
    assert_eq!(f.swap_state.cancel().unwrap_err(), error!(SwapError::InvalidPhase));
    assert!(f.swap_state.require_closable().is_ok());

    // the idle escrow can be torn down and set up again for the next swap
    f.escrow_state.require_idle().unwrap();
    f.escrow_state.unbind_escrow();
    assert_eq!(
        f.escrow_state.require_escrow(f.escrow).unwrap_err(),
        error!(SwapError::EscrowNotInitialized)
    );
}

#[test]
fn cancel_path_reverts_offeror_leg_only() {
    let mut f = offered();
    initiate(&mut f);

    f.swap_state.require_escrowed_mint(f.mint_a).unwrap();
    f.escrow_state.release(swap_key(&f)).unwrap();
    f.swap_state.cancel().unwrap();
    f.offeror_state.close_swap().unwrap();

    assert_eq!(f.swap_state.phase, SwapPhase::Cancelled);
    assert_eq!(f.offeror_state.open_swap_count, 0);
    assert_eq!(f.offeree_state.open_swap_count, 0);
    assert_eq!(f.offeree_state.owner, f.offeree);

    // accepting a cancelled swap is a phase error
    assert_eq!(
        f.swap_state
            .require_accept_terms(f.mint_a, f.mint_b)
            .unwrap_err(),
        error!(SwapError::InvalidPhase)
    );
    assert_eq!(f.swap_state.complete().unwrap_err(), error!(SwapError::InvalidPhase));
}

#[test]
fn accept_before_initiate_is_rejected() {
    let f = offered();

    assert_eq!(f.swap_state.phase, SwapPhase::Offered);
    assert_eq!(
        f.swap_state
            .require_accept_terms(f.mint_a, f.mint_b)
            .unwrap_err(),
        error!(SwapError::InvalidPhase)
    );
}

#[test]
fn repeated_bootstrap_leaves_records_untouched() {
    let mut f = offered();
    initiate(&mut f);

    let before = (
        f.offeror_state.open_swap_count,
        f.swap_state.phase,
        f.swap_state.mint_offeree,
        f.escrow_state.escrow,
    );

    assert_eq!(
        f.offeror_state.ensure(f.offeror, 0).require_created().unwrap_err(),
        error!(SwapError::AlreadyInitialized)
    );
    assert_eq!(
        f.swap_state.ensure(f.offeror, f.offeree, 0),
        InitOutcome::AlreadyExisted
    );
    assert_eq!(
        f.escrow_state
            .ensure(f.offeror, f.mint_a, Pubkey::new_unique(), 0),
        InitOutcome::AlreadyExisted
    );
    assert_eq!(
        f.escrow_state.bind_escrow(Pubkey::new_unique(), 0),
        InitOutcome::AlreadyExisted
    );

    let after = (
        f.offeror_state.open_swap_count,
        f.swap_state.phase,
        f.swap_state.mint_offeree,
        f.escrow_state.escrow,
    );
    assert_eq!(before, after);
}

#[test]
fn escrow_authority_is_the_escrow_state_pda() {
    let f = offered();
    let (authority, _) = pda::escrow_state_address(&f.offeror, &f.mint_a);

    assert_eq!(f.escrow_state.authority, authority);
    assert_ne!(f.escrow_state.authority, f.offeror);
    assert_ne!(f.escrow_state.authority, f.offeree);
    assert!(!f.escrow_state.authority.is_on_curve());
}

#[test]
fn stray_tokens_in_idle_escrow_do_not_block_initiate() {
    let mut f = offered();

    // someone sent 3 units to the escrow before the offeror deposited 1
    let received = crate::deposited_amount(3, 4).unwrap();
    let swap = swap_key(&f);
    f.escrow_state.claim(swap).unwrap();
    f.swap_state.initiate(f.mint_a, received).unwrap();

    assert_eq!(f.swap_state.amount_offeror, 1);
    assert_eq!(f.swap_state.phase, SwapPhase::Initiated);
}

#[test]
fn second_swap_cannot_share_a_busy_escrow() {
    let mut f = offered();
    initiate(&mut f);

    // another offeree's swap over the same (offeror, mint) escrow
    let other = pda::swap_state_address(&f.offeror, &Pubkey::new_unique()).0;
    assert_eq!(
        f.escrow_state.claim(other).unwrap_err(),
        error!(SwapError::EscrowInUse)
    );
    assert_eq!(
        f.escrow_state.require_active_swap(other).unwrap_err(),
        error!(SwapError::EscrowInUse)
    );

    // once the first swap is cancelled the escrow is free again
    f.escrow_state.release(swap_key(&f)).unwrap();
    f.swap_state.cancel().unwrap();
    f.escrow_state.claim(other).unwrap();
}
