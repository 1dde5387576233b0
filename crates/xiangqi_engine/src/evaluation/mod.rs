//! Position evaluation with phase-aware piece-square tables
//!
//! Evaluates Xiangqi positions using:
//! - Material count (phase-dependent piece values)
//! - Positional bonuses (piece-square tables, one set per phase)
//! - Mobility (weighted count of candidate moves)
//! - Cohesion (cannon/horse pairing, missing defenders against specific attackers)
//! - Checkmate (scaled by remaining depth so nearer mates score higher)
//! - Threat/defense relations (pieces hanging or losing an exchange)
//!
//! Scores are always Red minus Black. The search converts to side-to-move perspective.
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `material` - Material, mobility and cohesion terms for one side
//! - `relation` - Attack/defense exchange scoring
//! - `position` - Full position evaluation and its breakdown

mod material;
mod position;
mod pst;
mod relation;

pub use position::{EvalBreakdown, Evaluator};
pub use pst::position_value;
pub use relation::exchange_loss;
