pub mod accept_swap;
pub use accept_swap::*;
pub mod add_mint_offer;
pub use add_mint_offer::*;
pub mod cancel_swap;
pub use cancel_swap::*;
pub mod close_escrow;
pub use close_escrow::*;
pub mod close_swap_state;
pub use close_swap_state::*;
pub mod initialize_escrow;
pub use initialize_escrow::*;
pub mod initialize_escrow_state;
pub use initialize_escrow_state::*;
pub mod initialize_swap_state;
pub use initialize_swap_state::*;
pub mod initialize_user_state;
pub use initialize_user_state::*;
pub mod initiate_swap;
pub use initiate_swap::*;
