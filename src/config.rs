use crate::encode::{Alphabet, BASE62};

/// Which MurmurHash3 variant feeds the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashVariant {
    /// 32-bit hash, widened to `u64`.
    #[default]
    X86_32,
    /// 128-bit hash, projected to its first 64-bit word.
    X64_128,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeConfig {
    pub alphabet: Alphabet,
    pub variant: HashVariant,
    pub seed: u32,
    /// Fixed code length; `None` plans it from the item count.
    pub length: Option<usize>,
    pub min_length: usize,
    pub max_length: usize,
    pub max_collision_prob: f64,
    pub max_attempts: u32,
}

impl CodeConfig {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            variant: HashVariant::X86_32,
            seed: 0,
            length: None,
            min_length: 3,
            max_length: 11,
            max_collision_prob: 0.25,
            max_attempts: 16,
        }
    }

    pub fn variant(mut self, variant: HashVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn length(mut self, len: usize) -> Self {
        self.length = Some(len);
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = len;
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = len;
        self
    }

    pub fn max_collision_prob(mut self, prob: f64) -> Self {
        self.max_collision_prob = prob;
        self
    }

    pub fn max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self::new(BASE62)
    }
}
