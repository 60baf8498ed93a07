use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::cell::Coord;
use crate::cell::LiveSet;
use crate::cell::live_set;

const GLIDER: &[(Coord, Coord)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

const BLINKER: &[(Coord, Coord)] = &[(0, 0), (1, 0), (2, 0)];

const BLOCK: &[(Coord, Coord)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];

const R_PENTOMINO: &[(Coord, Coord)] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];

// See: https://conwaylife.com/wiki/Gosper_glider_gun
#[rustfmt::skip]
const GOSPER_GUN: &[(Coord, Coord)] = &[
    (24, 0),
    (22, 1), (24, 1),
    (12, 2), (13, 2), (20, 2), (21, 2), (34, 2), (35, 2),
    (11, 3), (15, 3), (20, 3), (21, 3), (34, 3), (35, 3),
    (0, 4), (1, 4), (10, 4), (16, 4), (20, 4), (21, 4),
    (0, 5), (1, 5), (10, 5), (14, 5), (16, 5), (17, 5), (22, 5), (24, 5),
    (10, 6), (16, 6), (24, 6),
    (11, 7), (15, 7),
    (12, 8), (13, 8),
];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PatternError {
    #[error("Unknown pattern \"{0}\", expected one of: glider, blinker, block, r-pentomino, gosper-gun")]
    Unknown(String),
}

/// The built-in starting patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pattern {
    #[default]
    Glider,
    Blinker,
    Block,
    RPentomino,
    GosperGun,
}

impl Pattern {
    pub const ALL: [Pattern; 5] = [
        Pattern::Glider,
        Pattern::Blinker,
        Pattern::Block,
        Pattern::RPentomino,
        Pattern::GosperGun,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pattern::Glider => "glider",
            Pattern::Blinker => "blinker",
            Pattern::Block => "block",
            Pattern::RPentomino => "r-pentomino",
            Pattern::GosperGun => "gosper-gun",
        }
    }

    pub fn offsets(self) -> &'static [(Coord, Coord)] {
        match self {
            Pattern::Glider => GLIDER,
            Pattern::Blinker => BLINKER,
            Pattern::Block => BLOCK,
            Pattern::RPentomino => R_PENTOMINO,
            Pattern::GosperGun => GOSPER_GUN,
        }
    }

    /// A fresh set holding the cells of this pattern
    pub fn cells(self) -> LiveSet {
        live_set(self.offsets())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();

        Pattern::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or(PatternError::Unknown(s))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names_round_trip() {
        for p in Pattern::ALL {
            assert_eq!(p.name().parse::<Pattern>(), Ok(p));
        }
    }

    #[test]
    fn parsing_ignores_case() {
        assert_eq!("Gosper-Gun".parse::<Pattern>(), Ok(Pattern::GosperGun));
    }

    #[test]
    fn unknown_pattern() {
        let err = "pulsar".parse::<Pattern>().unwrap_err();

        assert_eq!(err, PatternError::Unknown("pulsar".to_string()));
    }

    #[test]
    fn offsets_have_no_duplicates() {
        for p in Pattern::ALL {
            assert_eq!(p.cells().len(), p.offsets().len(), "{p}");
        }
    }

    #[test]
    fn gosper_gun_has_36_cells() {
        assert_eq!(Pattern::GosperGun.cells().len(), 36);
    }
}
