//! Bundled demo problem class: fill a bin with item weights.
//!
//! Input format: the first non-empty line holds the capacity, every further
//! whitespace-separated integer is an item weight. The score is the packed
//! weight, so the best possible score equals the capacity.

use crate::strategy::{Solution, SolveError, Strategy};

/// Parsed demo instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub capacity: i64,
    pub weights: Vec<i64>,
}

/// A set of chosen items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packing {
    chosen: Vec<usize>,
    total: i64,
}

impl Packing {
    /// Indices of the packed items, ascending.
    #[must_use]
    pub fn chosen(&self) -> &[usize] {
        &self.chosen
    }
}

impl Solution for Packing {
    type Score = i64;

    fn score(&self) -> i64 {
        self.total
    }

    fn to_text(&self) -> String {
        let mut out = self
            .chosen
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        out.push('\n');
        out
    }
}

/// Greedy and randomized fill strategies.
#[derive(Debug, Default, Clone, Copy)]
pub struct KnapsackStrategy;

impl KnapsackStrategy {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Take items in the given order while they fit.
    fn fill(instance: &Instance, order: impl IntoIterator<Item = usize>) -> Packing {
        let mut total = 0i64;
        let mut chosen = Vec::new();
        for idx in order {
            let w = instance.weights[idx];
            if total + w <= instance.capacity {
                total += w;
                chosen.push(idx);
            }
        }
        chosen.sort_unstable();
        Packing { chosen, total }
    }
}

impl Strategy for KnapsackStrategy {
    type Input = Instance;
    type Solution = Packing;

    fn name(&self) -> &str {
        "knapsack"
    }

    fn parse_input(&self, raw: &str) -> Result<Instance, SolveError> {
        let mut lines = raw.lines().map(str::trim).filter(|l| !l.is_empty());
        let capacity = lines
            .next()
            .ok_or_else(|| SolveError::InvalidInput("missing capacity line".into()))?
            .parse::<i64>()
            .map_err(|e| SolveError::InvalidInput(format!("capacity: {e}")))?;
        if capacity < 0 {
            return Err(SolveError::InvalidInput(format!(
                "negative capacity {capacity}"
            )));
        }

        let mut weights = Vec::new();
        for token in lines.flat_map(str::split_whitespace) {
            let w = token
                .parse::<i64>()
                .map_err(|e| SolveError::InvalidInput(format!("weight {token:?}: {e}")))?;
            if w < 0 {
                return Err(SolveError::InvalidInput(format!("negative weight {w}")));
            }
            weights.push(w);
        }

        Ok(Instance { capacity, weights })
    }

    fn simple_solve(&self, input: &Instance) -> Result<Packing, SolveError> {
        let mut order: Vec<usize> = (0..input.weights.len()).collect();
        order.sort_by(|&a, &b| input.weights[b].cmp(&input.weights[a]));
        Ok(Self::fill(input, order))
    }

    fn brute_force_solve(&self, input: &Instance, iteration: u64) -> Result<Packing, SolveError> {
        let mut rng = SplitMix64::new(iteration);
        let mut order: Vec<usize> = (0..input.weights.len()).collect();
        // Fisher-Yates
        for i in (1..order.len()).rev() {
            let j = rng.below(i + 1);
            order.swap(i, j);
        }
        Ok(Self::fill(input, order))
    }
}

/// Small deterministic generator seeded by the iteration index.
struct SplitMix64(u64);

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}
