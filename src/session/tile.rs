//! Word tiles: the session's view of each word on the board.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;
use crate::puzzle::Puzzle;

/// One word on the board.
///
/// `visible` flips to false, permanently, once the word's category is solved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTile {
    /// The word.
    pub word: String,

    /// Position of the word's category in the puzzle.
    pub category_index: usize,

    /// Still on the board (category unsolved).
    pub visible: bool,
}

impl WordTile {
    /// Create a visible tile.
    pub fn new(word: impl Into<String>, category_index: usize) -> Self {
        Self {
            word: word.into(),
            category_index,
            visible: true,
        }
    }
}

/// Flatten a puzzle into visible tiles in random display order.
pub fn deal(puzzle: &Puzzle, rng: &mut GameRng) -> Vec<WordTile> {
    let mut tiles: Vec<WordTile> = puzzle
        .words()
        .map(|(category_index, word)| WordTile::new(word, category_index))
        .collect();
    rng.shuffle(&mut tiles);
    tiles
}

/// Shuffle only the visible tiles among the slots they occupy.
///
/// Hidden tiles keep their slots, so their relative order never changes.
pub fn shuffle_visible(tiles: &mut [WordTile], rng: &mut GameRng) {
    let slots: Vec<usize> = tiles
        .iter()
        .enumerate()
        .filter(|(_, tile)| tile.visible)
        .map(|(slot, _)| slot)
        .collect();

    let mut visible: Vec<WordTile> = slots.iter().map(|&slot| tiles[slot].clone()).collect();
    rng.shuffle(&mut visible);

    for (slot, tile) in slots.into_iter().zip(visible) {
        tiles[slot] = tile;
    }
}
