//! Address derivation for every record of the program.
//!
//! Clients use these to locate accounts without a lookup table; the on-chain
//! `seeds` constraints use the same tags from [`crate::constants`].

use anchor_lang::prelude::*;

use crate::constants::{ESCROW_SEED, ESCROW_STATE_SEED, SWAP_STATE_SEED, USER_STATE_SEED};

pub fn user_state_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_STATE_SEED, owner.as_ref()], &crate::ID)
}

pub fn swap_state_address(offeror: &Pubkey, offeree: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[SWAP_STATE_SEED, offeror.as_ref(), offeree.as_ref()],
        &crate::ID,
    )
}

/// Also the token authority of the escrow for `(offeror, mint)`
pub fn escrow_state_address(offeror: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[ESCROW_STATE_SEED, offeror.as_ref(), mint.as_ref()],
        &crate::ID,
    )
}

pub fn escrow_address(offeror: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_SEED, offeror.as_ref(), mint.as_ref()], &crate::ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let offeror = Pubkey::new_unique();
        let offeree = Pubkey::new_unique();

        assert_eq!(user_state_address(&offeror), user_state_address(&offeror));
        assert_eq!(
            swap_state_address(&offeror, &offeree),
            swap_state_address(&offeror, &offeree)
        );
    }

    #[test]
    fn swap_state_is_per_ordered_pair() {
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();

        assert_ne!(swap_state_address(&a, &b).0, swap_state_address(&b, &a).0);
    }

    #[test]
    fn tags_separate_records_with_same_keys() {
        let offeror = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        let (escrow_state, _) = escrow_state_address(&offeror, &mint);
        let (escrow, _) = escrow_address(&offeror, &mint);
        let (swap_state, _) = swap_state_address(&offeror, &mint);

        assert_ne!(escrow_state, escrow);
        assert_ne!(escrow_state, swap_state);
        assert_ne!(escrow, swap_state);
    }

    #[test]
    fn addresses_are_off_curve() {
        let offeror = Pubkey::new_unique();
        let mint = Pubkey::new_unique();

        for (address, _) in [
            user_state_address(&offeror),
            swap_state_address(&offeror, &mint),
            escrow_state_address(&offeror, &mint),
            escrow_address(&offeror, &mint),
        ] {
            assert!(!address.is_on_curve());
        }
    }

    #[test]
    fn stored_bump_recreates_address() {
        let owner = Pubkey::new_unique();
        let (address, bump) = user_state_address(&owner);

        let recreated =
            Pubkey::create_program_address(&[USER_STATE_SEED, owner.as_ref(), &[bump]], &crate::ID)
                .unwrap();
        assert_eq!(recreated, address);
    }
}
