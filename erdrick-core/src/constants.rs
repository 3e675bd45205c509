//! Fixed growth tables for the hero leveling math.
//!
//! Every table here is compiled-in immutable data lifted from the game's
//! internal growth tables. Keeping them together ensures the calculator can
//! only change through reviewed code edits rather than external assets.

/// Number of rows in a stat table, one per hero level.
pub const LEVEL_COUNT: usize = 30;

/// Number of name classes the hash reduces to.
pub const CLASS_COUNT: usize = 16;

// Experience thresholds ----------------------------------------------------

/// Cumulative experience required to reach each level. The final entry is
/// the 16-bit counter cap, not a reachable threshold.
pub(crate) const EXPERIENCE_POINTS: [u16; LEVEL_COUNT] = [
    0, 7, 23, 47, 110, 220, 450, 800, 1300, 2000, 2900, 4000, 5500, 7500, 10000, 13000, 17000,
    21000, 25000, 29000, 33000, 37000, 41000, 45000, 49000, 53000, 57000, 61000, 65000, 65535,
];

// Growth curves ------------------------------------------------------------
// Per-level deltas added to the starting stat. Row 0 is always zero so the
// level-1 row reproduces the starting stats exactly.

pub(crate) const STRENGTH_CURVE_1: [u16; LEVEL_COUNT] = [
    0, 1, 3, 3, 8, 12, 14, 18, 26, 31, 36, 44, 48, 56, 64, 68, 68, 81, 83, 88, 91, 93, 95, 99,
    109, 113, 121, 126, 131, 136,
];

pub(crate) const STRENGTH_CURVE_2: [u16; LEVEL_COUNT] = [
    0, 1, 3, 3, 7, 11, 13, 16, 24, 28, 33, 40, 43, 51, 58, 61, 61, 73, 75, 79, 82, 84, 86, 89, 98,
    102, 109, 114, 118, 123,
];

pub(crate) const AGILITY_CURVE_1: [u16; LEVEL_COUNT] = [
    0, 0, 2, 4, 6, 6, 13, 16, 18, 27, 31, 36, 44, 51, 60, 66, 74, 80, 82, 84, 86, 86, 90, 94, 96,
    101, 103, 111, 116, 126,
];

pub(crate) const AGILITY_CURVE_2: [u16; LEVEL_COUNT] = [
    0, 0, 2, 4, 6, 6, 12, 15, 16, 24, 28, 33, 40, 46, 54, 60, 67, 72, 74, 76, 78, 78, 81, 85, 87,
    91, 93, 100, 105, 114,
];

pub(crate) const HP_CURVE_1: [u16; LEVEL_COUNT] = [
    0, 7, 9, 16, 20, 23, 25, 31, 35, 39, 47, 48, 55, 63, 71, 77, 85, 100, 115, 123, 134, 143, 150,
    155, 159, 165, 174, 180, 185, 195,
];

pub(crate) const HP_CURVE_2: [u16; LEVEL_COUNT] = [
    0, 6, 8, 14, 18, 21, 23, 28, 32, 35, 42, 43, 50, 57, 64, 69, 77, 90, 104, 111, 121, 129, 135,
    140, 143, 149, 157, 162, 167, 176,
];

pub(crate) const MP_CURVE_1: [u16; LEVEL_COUNT] = [
    0, 0, 0, 11, 15, 19, 21, 24, 31, 35, 45, 53, 59, 65, 67, 90, 95, 103, 110, 123, 130, 141, 148,
    156, 156, 163, 170, 175, 185, 195,
];

pub(crate) const MP_CURVE_2: [u16; LEVEL_COUNT] = [
    0, 0, 0, 10, 14, 17, 19, 22, 28, 32, 41, 48, 53, 59, 60, 81, 86, 93, 99, 111, 117, 127, 133,
    140, 140, 148, 153, 158, 167, 176,
];

// Starting stats -----------------------------------------------------------
// Level-1 stat lines keyed by name class.

pub(crate) const STARTING_STRENGTH: [u16; CLASS_COUNT] =
    [3, 4, 3, 4, 4, 4, 4, 4, 5, 4, 5, 4, 6, 4, 6, 4];

pub(crate) const STARTING_AGILITY: [u16; CLASS_COUNT] =
    [3, 3, 4, 4, 4, 4, 4, 4, 5, 5, 4, 4, 6, 6, 4, 4];

pub(crate) const STARTING_HP: [u16; CLASS_COUNT] =
    [15, 15, 13, 13, 15, 15, 14, 14, 15, 15, 15, 15, 15, 15, 16, 16];

pub(crate) const STARTING_MP: [u16; CLASS_COUNT] =
    [5, 4, 5, 4, 5, 5, 5, 5, 5, 6, 5, 6, 5, 7, 5, 7];
