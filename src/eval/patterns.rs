//! Pattern scores for Omok evaluation
//!
//! Line shapes are written over the alphabet `1` (own stone), `2`
//! (opponent stone) and `0` (empty), five or six cells long. Only the
//! own-side shapes are listed; each one is mirrored into an opponent
//! shape with the same magnitude and opposite sign.
//!
//! Lines are padded with an edge cell (`3`) at both ends. A shape whose
//! end is blocked by an enemy stone scores the same when the board edge
//! blocks it instead, for either side.

use lazy_static::lazy_static;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i64 = 30_000_000;
    /// Open four: _OOOO_
    pub const OPEN_FOUR: i64 = 20_000_000;
    /// Four blocked on one side, or a four with one gap
    pub const CLOSED_FOUR: i64 = 50_000;
    /// Open three: _OOO_
    pub const OPEN_THREE: i64 = 30_000;
    /// Open broken three: _O_OO_ / _OO_O_
    pub const BROKEN_THREE: i64 = 15_000;
    /// Three blocked on one side
    pub const CLOSED_THREE: i64 = 2_000;
    /// Open two
    pub const OPEN_TWO: i64 = 500;

    /// Any position whose static score reaches this magnitude is decided.
    pub const DECIDED: i64 = Self::OPEN_FOUR;
}

/// Own-side shapes and their scores
const OWN_PATTERNS: &[(&str, i64)] = &[
    ("11111", PatternScore::FIVE),
    ("011110", PatternScore::OPEN_FOUR),
    ("011112", PatternScore::CLOSED_FOUR),
    ("211110", PatternScore::CLOSED_FOUR),
    ("10111", PatternScore::CLOSED_FOUR),
    ("11011", PatternScore::CLOSED_FOUR),
    ("11101", PatternScore::CLOSED_FOUR),
    ("01110", PatternScore::OPEN_THREE),
    ("010110", PatternScore::BROKEN_THREE),
    ("011010", PatternScore::BROKEN_THREE),
    ("211100", PatternScore::CLOSED_THREE),
    ("001112", PatternScore::CLOSED_THREE),
    ("211010", PatternScore::CLOSED_THREE),
    ("010112", PatternScore::CLOSED_THREE),
    ("210110", PatternScore::CLOSED_THREE),
    ("011012", PatternScore::CLOSED_THREE),
    ("001100", PatternScore::OPEN_TWO),
    ("011000", PatternScore::OPEN_TWO),
    ("000110", PatternScore::OPEN_TWO),
    ("001010", PatternScore::OPEN_TWO),
    ("010100", PatternScore::OPEN_TWO),
];

/// Cell codes used in line encodings
pub const EMPTY_CELL: u8 = 0;
pub const OWN_CELL: u8 = 1;
pub const OPPONENT_CELL: u8 = 2;
/// Outside the board, only ever at either end of a padded line
pub const EDGE_CELL: u8 = 3;

/// Number of distinct cell codes
const CELL_KINDS: usize = 4;

/// Shortest and longest shapes in the table
pub const MIN_PATTERN_LEN: usize = 5;
pub const MAX_PATTERN_LEN: usize = 6;

/// Base-4 code of a window of cell codes
#[inline]
pub fn window_code(cells: &[u8]) -> usize {
    cells.iter().fold(0, |acc, &c| acc * CELL_KINDS + c as usize)
}

fn cells_of(pattern: &str) -> Vec<u8> {
    pattern.bytes().map(|b| b - b'0').collect()
}

fn mirror(cells: &[u8]) -> Vec<u8> {
    cells
        .iter()
        .map(|&c| match c {
            OWN_CELL => OPPONENT_CELL,
            OPPONENT_CELL => OWN_CELL,
            other => other,
        })
        .collect()
}

/// `cells` plus every variant with an end `blocker` replaced by the edge.
fn with_edge_variants(cells: Vec<u8>, blocker: u8) -> Vec<Vec<u8>> {
    let last = cells.len() - 1;
    let mut variants = vec![cells];
    for end in [0, last] {
        let blocked: Vec<Vec<u8>> = variants
            .iter()
            .filter(|v| v[end] == blocker)
            .map(|v| {
                let mut edged = v.clone();
                edged[end] = EDGE_CELL;
                edged
            })
            .collect();
        variants.extend(blocked);
    }
    variants
}

/// Dense lookup tables indexed by window code, one per window length.
struct PatternTables {
    five: Vec<i64>,
    six: Vec<i64>,
}

impl PatternTables {
    fn build() -> Self {
        let mut tables = Self {
            five: vec![0; CELL_KINDS.pow(5)],
            six: vec![0; CELL_KINDS.pow(6)],
        };
        for &(pattern, score) in OWN_PATTERNS {
            let own = cells_of(pattern);
            let opp = mirror(&own);
            let table = match own.len() {
                5 => &mut tables.five,
                _ => &mut tables.six,
            };
            for cells in with_edge_variants(own, OPPONENT_CELL) {
                table[window_code(&cells)] = score;
            }
            for cells in with_edge_variants(opp, OWN_CELL) {
                table[window_code(&cells)] = -score;
            }
        }
        tables
    }
}

lazy_static! {
    static ref TABLES: PatternTables = PatternTables::build();
}

/// Score of a window of 5 or 6 cell codes; 0 when the shape is not listed.
#[inline]
pub fn window_score(len: usize, code: usize) -> i64 {
    match len {
        5 => TABLES.five[code],
        6 => TABLES.six[code],
        _ => 0,
    }
}

/// Look up a shape written as a `0`/`1`/`2`/`3` string.
#[must_use]
pub fn pattern_score(pattern: &str) -> Option<i64> {
    if !(MIN_PATTERN_LEN..=MAX_PATTERN_LEN).contains(&pattern.len())
        || !pattern.bytes().all(|b| matches!(b, b'0'..=b'3'))
    {
        return None;
    }
    match window_score(pattern.len(), window_code(&cells_of(pattern))) {
        0 => None,
        score => Some(score),
    }
}

/// Every shape in the table with its score, own and opponent side.
#[must_use]
pub fn pattern_table() -> Vec<(String, i64)> {
    OWN_PATTERNS
        .iter()
        .flat_map(|&(pattern, score)| {
            let opp: String = mirror(&cells_of(pattern))
                .iter()
                .map(|&c| char::from(b'0' + c))
                .collect();
            [(pattern.to_string(), score), (opp, -score)]
        })
        .collect()
}
