use smallvec::SmallVec;

use crate::math::RandomSource;

/// Inline capacity of the run lists; longer results spill to the heap.
pub const MAX_RUNS: usize = 32;

pub type Runs = SmallVec<[usize; MAX_RUNS]>;

/// Random gate patterns made of alternating high and low runs.
///
/// The result of [`generate`](Self::generate) lists run lengths, starting
/// with a high run: `[high, low, high, low, ...]`. The runs of one pattern
/// always add up to its size.
#[derive(Debug, Clone, Default)]
pub struct FlipFlopWeaver {
    rng: RandomSource,
}

impl FlipFlopWeaver {
    pub fn new(rng: RandomSource) -> Self {
        Self { rng }
    }

    /// Split `total` steps into `slices` random parts of at least `minimum`.
    ///
    /// Returns an empty list when that is impossible.
    pub fn distribute_steps(&mut self, slices: usize, total: usize, minimum: usize) -> Runs {
        let mut result = Runs::new();
        if slices == 0 || total < slices * minimum {
            return result;
        }

        let mut remaining = total;
        for i in 0..slices - 1 {
            // Leave enough for every slice still to come.
            let reserved = (slices - 1 - i) * minimum;
            let available = remaining - reserved;
            let allocated = ((available as f32 * self.rng.next_f32()) as usize).clamp(minimum, available);
            remaining -= allocated;
            result.push(allocated);
        }
        result.push(remaining);
        result
    }

    /// `cycles` high/low pairs spread over `size` steps.
    ///
    /// `density` (0..=1) is the share of steps spent high. Every run is at
    /// least one step long, so `size` must be at least `2 * cycles`;
    /// otherwise the result is empty.
    pub fn generate(&mut self, size: usize, cycles: usize, density: f32) -> Runs {
        if cycles == 0 || size < 2 * cycles {
            return Runs::new();
        }

        let high_count = ((size as f32 * density.clamp(0.0, 1.0)) as usize).clamp(cycles, size - cycles);
        let low_count = size - high_count;

        let high = self.distribute_steps(cycles, high_count, 1);
        let low = self.distribute_steps(cycles, low_count, 1);

        high.iter()
            .zip(low.iter())
            .flat_map(|(&h, &l)| [h, l])
            .collect()
    }
}

/// Expand run lengths into one gate value per step.
pub fn runs_to_gates(runs: &[usize]) -> SmallVec<[bool; 64]> {
    runs.iter()
        .enumerate()
        .flat_map(|(i, &len)| std::iter::repeat(i % 2 == 0).take(len))
        .collect()
}
