//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `legality.rs` - Per-piece geometry, occupancy and self-check rules
//! - `castling.rs` - Castling legality and application, both colors and wings
//! - `en_passant.rs` - En passant timing and capture
//! - `promotion.rs` - Pawn promotion on the far row
//! - `checks.rs` - Check, checkmate and missing-king handling
//! - `search.rs` - Bot move selection
//! - `proptest.rs` - Property-based tests over random games

mod legality;
