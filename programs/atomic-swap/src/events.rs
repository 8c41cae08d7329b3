use anchor_lang::prelude::*;

#[event]
pub struct UserStateInitialized {
    pub owner: Pubkey,
}

#[event]
pub struct SwapStateInitialized {
    pub offeror: Pubkey,
    pub offeree: Pubkey,
}

#[event]
pub struct MintOffered {
    pub offeror: Pubkey,
    pub offeree: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

#[event]
pub struct SwapInitiated {
    pub offeror: Pubkey,
    pub offeree: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
    pub escrow: Pubkey,
}

#[event]
pub struct SwapAccepted {
    pub offeror: Pubkey,
    pub offeree: Pubkey,
    pub mint_offeror: Pubkey,
    pub amount_offeror: u64,
    pub mint_offeree: Pubkey,
    pub amount_offeree: u64,
}

#[event]
pub struct SwapCancelled {
    pub offeror: Pubkey,
    pub offeree: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}

#[event]
pub struct EscrowClosed {
    pub offeror: Pubkey,
    pub mint: Pubkey,
    pub escrow: Pubkey,
}
