use anchor_lang::prelude::*;

#[constant]
pub const USER_STATE_SEED: &[u8] = b"user_state";

#[constant]
pub const SWAP_STATE_SEED: &[u8] = b"swap_state";

#[constant]
pub const ESCROW_STATE_SEED: &[u8] = b"escrow_state";

/// Seed tag of the token account that holds the offeror's asset
#[constant]
pub const ESCROW_SEED: &[u8] = b"escrow";
