//! The fixed 7×7 grid of (valence, arousal) conditioning labels.
//!
//! Both dimensions range over the same seven quarter steps from 0.75 down
//! to −0.75. Valence varies slowest (seven repeats), arousal fastest
//! (cycling every seven entries), so the pair order matches the row-major
//! cell order of the tiled outputs.

/// The seven label steps, most positive first.
pub const LABEL_STEPS: [f32; 7] = [0.75, 0.5, 0.25, 0.0, -0.25, -0.5, -0.75];

/// Number of (valence, arousal) combinations.
pub const GRID_LEN: usize = LABEL_STEPS.len() * LABEL_STEPS.len();

/// Ordered, immutable sequence of the 49 (valence, arousal) pairs.
#[derive(Clone, Debug)]
pub struct LabelGrid {
    pairs: Vec<(f32, f32)>,
    neutral: usize,
}

impl LabelGrid {
    /// Build the fixed emotion grid.
    pub fn emotion_7x7() -> Self {
        let mut pairs = Vec::with_capacity(GRID_LEN);
        for &valence in &LABEL_STEPS {
            for &arousal in &LABEL_STEPS {
                pairs.push((valence, arousal));
            }
        }
        // The steps are exact quarter values, so exact comparison is sound.
        let neutral = pairs
            .iter()
            .position(|&(v, a)| v == 0.0 && a == 0.0)
            .expect("label steps contain the neutral pair");
        Self { pairs, neutral }
    }

    /// All pairs in enumeration order.
    pub fn pairs(&self) -> &[(f32, f32)] {
        &self.pairs
    }

    /// Number of pairs (always 49).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Index of the (0.0, 0.0) pair, found by lookup rather than convention.
    pub fn neutral_index(&self) -> usize {
        self.neutral
    }

    /// Valence components as a column, in pair order.
    pub fn valence(&self) -> Vec<f32> {
        self.pairs.iter().map(|&(v, _)| v).collect()
    }

    /// Arousal components as a column, in pair order.
    pub fn arousal(&self) -> Vec<f32> {
        self.pairs.iter().map(|&(_, a)| a).collect()
    }
}
