//! Position fingerprints for repetition detection
//!
//! A fingerprint encodes which piece (type and color) stands on which square,
//! and nothing else: side to move, castling rights and en passant rights are
//! not part of it. Two boards with the same pieces on the same squares always
//! produce equal fingerprints, whatever order the pieces were placed in.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Canonical text encoding of a piece layout, e.g. `"Ra1 Nb1 ... ke8"`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint of the current board; pieces are listed in square order
    pub fn of(board: &Board) -> Self {
        let encoded: Vec<String> = board
            .pieces()
            .map(|piece| format!("{}{}", piece.symbol(), piece.position))
            .collect();
        Self(encoded.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Highest number of times any single fingerprint occurs in `history`
pub fn max_occurrences(history: &[Fingerprint]) -> usize {
    let mut counts = std::collections::HashMap::new();
    for fingerprint in history {
        *counts.entry(fingerprint).or_insert(0usize) += 1;
    }
    counts.into_values().max().unwrap_or(0)
}
