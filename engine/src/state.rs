use serde::Serialize;

use crate::dense_map::DenseMap;

/// One step of an edit script, encoded in two bits.
///
/// `Undefined` must stay 0: the state table reads zeroed storage as "node not
/// yet reached".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Undefined = 0,
    /// Consume one line from the right document.
    AddRight = 1,
    /// Consume one line from the left document.
    RemoveLeft = 2,
    /// Consume one line from each document.
    Equal = 3,
}

impl Action {
    fn from_bits(bits: u64) -> Action {
        match bits & 0b11 {
            0 => Action::Undefined,
            1 => Action::AddRight,
            2 => Action::RemoveLeft,
            3 => Action::Equal,
            _ => unreachable!(),
        }
    }

    /// Display prefix used by the renderers: `+`, `-`, or a space.
    pub fn prefix(&self) -> &'static str {
        match self {
            Action::AddRight => "+",
            Action::RemoveLeft => "-",
            Action::Equal => " ",
            Action::Undefined => "?",
        }
    }
}

/// A coordinate in the search grid: lines consumed from each document.
///
/// Origin is `(0, 0)`; the goal is `(size_left, size_right)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeKey {
    pub left: usize,
    pub right: usize,
}

impl NodeKey {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// `right - left`. Constant along a run of equal lines.
    pub fn diagonal(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    /// Position along the diagonal.
    pub fn antidiagonal(&self) -> usize {
        self.right
    }

    /// The key reached by applying `action` at this node.
    pub fn walk(&self, action: Action) -> NodeKey {
        match action {
            Action::Equal => NodeKey::new(self.left + 1, self.right + 1),
            Action::RemoveLeft => NodeKey::new(self.left + 1, self.right),
            Action::AddRight => NodeKey::new(self.left, self.right + 1),
            Action::Undefined => unreachable!("walked an undefined action"),
        }
    }

    /// Inverse of [`walk`](Self::walk); used during path recovery.
    pub fn backout(&self, action: Action) -> NodeKey {
        match action {
            Action::Equal => NodeKey::new(self.left - 1, self.right - 1),
            Action::RemoveLeft => NodeKey::new(self.left - 1, self.right),
            Action::AddRight => NodeKey::new(self.left, self.right - 1),
            Action::Undefined => unreachable!("backed out an undefined action"),
        }
    }
}

const ACTIONS_PER_WORD: usize = 32;

/// A map from a non-negative index to an [`Action`], packed 32 per word.
#[derive(Debug, Default)]
pub struct PackedActionMap {
    words: DenseMap<u64>,
}

impl PackedActionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, idx: usize) -> Action {
        let word = self
            .words
            .get((idx / ACTIONS_PER_WORD) as i64)
            .copied()
            .unwrap_or(0);
        Action::from_bits(word >> (2 * (idx % ACTIONS_PER_WORD)))
    }

    /// Record `action` at `idx`. The slot is ORed in, so the caller must
    /// only write where the current value is `Undefined`.
    pub fn set(&mut self, idx: usize, action: Action) {
        let word = self.words.get_mut((idx / ACTIONS_PER_WORD) as i64);
        *word |= (action as u64) << (2 * (idx % ACTIONS_PER_WORD));
    }
}

/// Per-node record of the action that reached each search coordinate.
///
/// Keys are re-addressed from `(left, right)` to `(diagonal, antidiagonal)`:
/// with edit distance `D` only diagonals in `[-D, D]` are ever touched, so a
/// dense per-diagonal layout stays far smaller than the full left x right
/// rectangle.
#[derive(Debug, Default)]
pub struct StateTable {
    diagonals: DenseMap<PackedActionMap>,
}

impl StateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: NodeKey) -> Action {
        match self.diagonals.get(key.diagonal()) {
            Some(map) => map.get(key.antidiagonal()),
            None => Action::Undefined,
        }
    }

    pub fn set(&mut self, key: NodeKey, action: Action) {
        self.diagonals
            .get_mut(key.diagonal())
            .set(key.antidiagonal(), action);
    }
}
