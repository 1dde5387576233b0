//! # Xiangqi Engine Constants - Evaluation Values & Search Parameters
//!
//! ## Overview
//!
//! This module centralizes the constant values used throughout the engine: board geometry, the
//! enumerated palace and elephant point sets, per-phase material values, move-ordering priorities,
//! mobility weights and alpha-beta search tuning parameters.
//!
//! ## Board Geometry
//!
//! The board is a 10x9 grid. Row 0 is Black's back rank and row 9 is Red's back rank, so Red
//! advances towards row 0 and Black towards row 9. The river lies between rows 4 and 5.
//!
//! ## Phase-Dependent Material
//!
//! Material is indexed by [`crate::types::GamePhase`] (opening, middle, end). A soldier is nearly
//! worthless in the opening and becomes a real attacker in the ending; cannons lose value as the
//! board empties (fewer screens), chariots and horses gain.
//!
//! | Piece    | Opening | Middle | End  |
//! |----------|---------|--------|------|
//! | Soldier  | 30      | 45     | 80   |
//! | Advisor  | 120     | 120    | 110  |
//! | Elephant | 120     | 120    | 110  |
//! | Horse    | 270     | 280    | 300  |
//! | Cannon   | 285     | 285    | 260  |
//! | Chariot  | 600     | 600    | 620  |
//! | General  | 6000    | 6000   | 6000 |
//!
//! ## Search Parameters
//!
//! Scores are `i32`. A checkmate is worth [`CHECKMATE_BONUS`] scaled by `(depth + 1)` where
//! `depth` is the remaining search depth at the leaf, so shallower mates score higher.

use crate::types::Coordinate;

pub const NUM_ROWS: i8 = 10;
pub const NUM_COLS: i8 = 9;
pub const NUM_SQUARES: usize = (NUM_ROWS as usize) * (NUM_COLS as usize);

/// Last row on Black's side of the river
pub const BLACK_RIVER_ROW: i8 = 4;
/// First row on Red's side of the river
pub const RED_RIVER_ROW: i8 = 5;

pub const NUM_PIECE_TYPES: usize = 7;

pub const RED_PALACE_ROWS: (i8, i8) = (7, 9);
pub const BLACK_PALACE_ROWS: (i8, i8) = (0, 2);
pub const PALACE_COLS: (i8, i8) = (3, 5);

/// Advisor points, enumerated per alliance
pub const RED_ADVISOR_POINTS: [Coordinate; 5] = [
    Coordinate::at(9, 3),
    Coordinate::at(9, 5),
    Coordinate::at(8, 4),
    Coordinate::at(7, 3),
    Coordinate::at(7, 5),
];
pub const BLACK_ADVISOR_POINTS: [Coordinate; 5] = [
    Coordinate::at(0, 3),
    Coordinate::at(0, 5),
    Coordinate::at(1, 4),
    Coordinate::at(2, 3),
    Coordinate::at(2, 5),
];

/// Elephant points, enumerated per alliance
pub const RED_ELEPHANT_POINTS: [Coordinate; 7] = [
    Coordinate::at(9, 2),
    Coordinate::at(9, 6),
    Coordinate::at(7, 0),
    Coordinate::at(7, 4),
    Coordinate::at(7, 8),
    Coordinate::at(5, 2),
    Coordinate::at(5, 6),
];
pub const BLACK_ELEPHANT_POINTS: [Coordinate; 7] = [
    Coordinate::at(0, 2),
    Coordinate::at(0, 6),
    Coordinate::at(2, 0),
    Coordinate::at(2, 4),
    Coordinate::at(2, 8),
    Coordinate::at(4, 2),
    Coordinate::at(4, 6),
];

pub const ORTHOGONAL_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Horse moves as (leg, destination) offsets
pub const HORSE_JUMPS: [((i8, i8), (i8, i8)); 8] = [
    ((-1, 0), (-2, -1)),
    ((-1, 0), (-2, 1)),
    ((1, 0), (2, -1)),
    ((1, 0), (2, 1)),
    ((0, -1), (-1, -2)),
    ((0, -1), (1, -2)),
    ((0, 1), (-1, 2)),
    ((0, 1), (1, 2)),
];

/// Standard opening position
pub const START_FEN: &str = "rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR w";

// Material values indexed by phase: [opening, middle, end]
pub const SOLDIER_VALUE: [i32; 3] = [30, 45, 80];
pub const ADVISOR_VALUE: [i32; 3] = [120, 120, 110];
pub const ELEPHANT_VALUE: [i32; 3] = [120, 120, 110];
pub const HORSE_VALUE: [i32; 3] = [270, 280, 300];
pub const CANNON_VALUE: [i32; 3] = [285, 285, 260];
pub const CHARIOT_VALUE: [i32; 3] = [600, 600, 620];
pub const GENERAL_VALUE: [i32; 3] = [6000, 6000, 6000];

/// Phase classification: more pieces than this is the opening
pub const OPENING_PIECE_COUNT: usize = 29;
/// Phase classification: more weighted attacking units than this is the middle game
pub const MIDDLE_ATTACK_UNITS: i32 = 8;
pub const CHARIOT_ATTACK_UNITS: i32 = 2;
pub const HORSE_ATTACK_UNITS: i32 = 1;
pub const CANNON_ATTACK_UNITS: i32 = 1;

/// Quiet-move ordering priorities, indexed by `PieceType as usize`
/// (Soldier, Advisor, Elephant, Horse, Cannon, Chariot, General)
pub const MOVE_PRIORITY: [i32; NUM_PIECE_TYPES] = [20, 5, 5, 40, 50, 60, 0];
/// Offset that lifts every capture above every quiet move
pub const CAPTURE_ORDER_BASE: i32 = 10_000;

/// Mobility weight per legal move, indexed by `PieceType as usize`
pub const MOBILITY_WEIGHT: [i32; NUM_PIECE_TYPES] = [1, 1, 1, 3, 1, 1, 0];

// Cohesion adjustments
pub const CANNON_HORSE_BONUS: i32 = 20;
pub const ELEPHANT_SCARCITY_PENALTY: i32 = 30;
pub const ADVISOR_SCARCITY_PENALTY: i32 = 40;

// Threat/defense relation weighting
pub const THREAT_ON_MOVER_DIVISOR: i32 = 8;
pub const THREAT_ON_WAITER_DIVISOR: i32 = 2;

// Search parameters
pub const CHECKMATE_BONUS: i32 = 100_000;
pub const SCORE_INF: i32 = 1_000_000_000;
pub const DRAW_SCORE: i32 = 0;
pub const MAX_DEPTH: u8 = 32;
pub const NULL_MOVE_REDUCTION: u8 = 3;
pub const NULL_MOVE_MIN_ATTACK_UNITS: i32 = 3;
pub const MAX_QUIESCENCE_DEPTH: u8 = 4;
pub const DEFAULT_TT_ENTRIES: usize = 1 << 18;
pub const TT_BUCKET_SLOTS: usize = 4;
