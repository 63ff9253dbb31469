//! Use cases - application operations

pub mod handle_turn;
