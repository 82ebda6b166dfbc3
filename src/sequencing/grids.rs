/*
Pattern Engine
==============

A topographic drum sequencer. Reference patterns ("nodes") sit on a small
square map; a pair of coordinates picks a point on the map and the pattern
at that point is the bilinear blend of the four surrounding nodes.

    y
    ▲  N02 ─── N12 ─── N22
    │   │       │       │
    │  N01 ─── N11 ─── N21
    │   │   •   │       │      • = (x, y) blends N00, N10, N01, N11
    │  N00 ─── N10 ─── N20
    └───────────────────────▶ x

Every step of a node holds a level 0..=255 per channel. Levels are read as
a priority: `density` sets a threshold, and a step fires when its level is
above `255 - density`. Low density plays only the backbone of the pattern,
high density fills in the ghost notes.

Chaos adds a random amount to every level, drawn once per pattern cycle, so
repeats of the same bar vary a little.

All arithmetic is 8-bit with 32-bit intermediates:

    cell     = coordinate >> 7             (which pair of nodes)
    fraction = (coordinate & 0x7f) << 1    (0..254 between them)
    mix      = a + ((b - a) * fraction) >> 8

so a fraction of 0 returns the first node bit-exactly.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::drum_map::{NODES, NODE_MAP, NODE_STEPS};
use crate::config::PatternConfig;
use crate::math::RandomSource;

/// Steps in a full pattern.
pub const STEPS_PER_PATTERN: usize = NODE_STEPS;

/// Levels above this play accented.
pub const ACCENT_THRESHOLD: u8 = 192;

/// Percussion role of a pattern channel.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Kick,
    Snare,
    HiHat,
}

impl Selector {
    pub const ALL: [Selector; 3] = [Selector::Kick, Selector::Snare, Selector::HiHat];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Selector::Kick => 0,
            Selector::Snare => 1,
            Selector::HiHat => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Selector::Kick => "kick",
            Selector::Snare => "snare",
            Selector::HiHat => "hi-hat",
        }
    }
}

#[inline]
fn mix(a: u8, b: u8, fraction: u8) -> u8 {
    let a = a as i32;
    let b = b as i32;
    (a + (((b - a) * fraction as i32) >> 8)) as u8
}

#[inline]
fn split(coordinate: u8) -> (usize, u8) {
    ((coordinate >> 7) as usize, (coordinate & 0x7f) << 1)
}

/// Step counter plus blended lookup into the drum map.
#[derive(Debug, Clone)]
pub struct PatternEngine {
    step: u8,
    length: u8,
    chaos: u8,
    perturbation: [u8; 3], // per channel, redrawn at the start of each cycle
    rng: RandomSource,
}

impl PatternEngine {
    pub fn new(config: &PatternConfig) -> Self {
        Self::with_random(config, RandomSource::from_clock())
    }

    /// Engine with an explicit random source, for repeatable chaos.
    pub fn with_random(config: &PatternConfig, rng: RandomSource) -> Self {
        Self {
            step: 0,
            length: Self::clamp_length(config.length),
            chaos: 0,
            perturbation: [0; 3],
            rng,
        }
    }

    fn clamp_length(length: u8) -> u8 {
        length.clamp(1, STEPS_PER_PATTERN as u8)
    }

    /// Back to step 0.
    pub fn reset(&mut self) {
        self.step = 0;
        self.draw_perturbation();
    }

    /// Move to the next step, wrapping at the pattern length.
    pub fn advance(&mut self) {
        self.step += 1;
        if self.step >= self.length {
            self.step = 0;
            self.draw_perturbation();
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    /// Clamped to `1..=32`. The current step wraps if it is now past the end.
    pub fn set_length(&mut self, length: u8) {
        self.length = Self::clamp_length(length);
        if self.step >= self.length {
            self.step = 0;
        }
    }

    /// Amount of random variation, 0 disables it. Applies from the next cycle.
    pub fn set_chaos(&mut self, chaos: u8) {
        self.chaos = chaos;
        if chaos == 0 {
            self.perturbation = [0; 3];
        }
    }

    pub fn chaos(&self) -> u8 {
        self.chaos
    }

    /// Blended level of the current step at `(x, y)`.
    pub fn level(&self, selector: Selector, x: u8, y: u8) -> u8 {
        let (i, xf) = split(x);
        let (j, yf) = split(y);
        let offset = selector.index() * NODE_STEPS + self.step as usize;

        let at = |xi: usize, yi: usize| NODES[NODE_MAP[xi][yi]][offset];

        let low = mix(at(i, j), at(i + 1, j), xf);
        let high = mix(at(i, j + 1), at(i + 1, j + 1), xf);
        mix(low, high, yf)
    }

    /// [`level`](Self::level) with this cycle's chaos added, saturating.
    pub fn perturbed_level(&self, selector: Selector, x: u8, y: u8) -> u8 {
        self.level(selector, x, y)
            .saturating_add(self.perturbation[selector.index()])
    }

    /// Whether the current step fires at the given density.
    pub fn trigger(&self, selector: Selector, x: u8, y: u8, density: u8) -> bool {
        self.perturbed_level(selector, x, y) > 255 - density
    }

    pub fn is_accent(&self, selector: Selector, x: u8, y: u8) -> bool {
        self.perturbed_level(selector, x, y) > ACCENT_THRESHOLD
    }

    fn draw_perturbation(&mut self) {
        if self.chaos == 0 {
            self.perturbation = [0; 3];
            return;
        }
        // Quarter of the chaos amount at most.
        for p in self.perturbation.iter_mut() {
            *p = ((self.rng.next_u8() as u32 * (self.chaos >> 2) as u32) >> 8) as u8;
        }
    }
}

impl Default for PatternEngine {
    fn default() -> Self {
        Self::new(&PatternConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> PatternEngine {
        PatternEngine::with_random(&PatternConfig::default(), RandomSource::new(1))
    }

    #[test]
    fn origin_reproduces_first_node() {
        let mut engine = engine();
        for step in 0..STEPS_PER_PATTERN {
            for selector in Selector::ALL {
                let stored = NODES[0][selector.index() * NODE_STEPS + step];
                assert_eq!(engine.level(selector, 0, 0), stored, "step {step}");
            }
            engine.advance();
        }
    }

    #[test]
    fn step_cycles_with_pattern_length() {
        let mut engine = engine();
        engine.set_length(12);
        let steps: Vec<u8> = (0..30)
            .map(|_| {
                let s = engine.step();
                engine.advance();
                s
            })
            .collect();
        for (i, &s) in steps.iter().enumerate() {
            assert_eq!(s as usize, i % 12);
        }
    }

    #[test]
    fn reset_returns_to_first_step() {
        let mut engine = engine();
        for _ in 0..7 {
            engine.advance();
        }
        engine.reset();
        assert_eq!(engine.step(), 0);
    }

    #[test]
    fn length_is_clamped() {
        let mut engine = engine();
        engine.set_length(0);
        assert_eq!(engine.length(), 1);
        engine.set_length(200);
        assert_eq!(engine.length(), 32);
    }

    #[test]
    fn blend_lies_between_corner_nodes() {
        let engine = engine();
        for selector in Selector::ALL {
            // Halfway between node (0,0) and (1,0) on the x axis.
            let a = NODES[NODE_MAP[0][0]][selector.index() * NODE_STEPS];
            let b = NODES[NODE_MAP[1][0]][selector.index() * NODE_STEPS];
            let level = engine.level(selector, 64, 0);
            assert!(level >= a.min(b) && level <= a.max(b));
        }
    }

    #[test]
    fn upper_edge_reaches_last_column() {
        let engine = engine();
        // x = 255 is within one LSB step of the last map column.
        let stored = NODES[NODE_MAP[2][0]][0] as i32;
        let level = engine.level(Selector::Kick, 255, 0) as i32;
        let neighbour = NODES[NODE_MAP[1][0]][0] as i32;
        assert!((level - stored).abs() <= (stored - neighbour).abs() / 64 + 1);
    }

    #[test]
    fn density_thresholds() {
        let engine = engine();
        // Step 0 of node 0 has a full-level kick.
        assert!(engine.trigger(Selector::Kick, 0, 0, 1));
        assert!(engine.is_accent(Selector::Kick, 0, 0));
        // Nothing fires at zero density.
        for selector in Selector::ALL {
            assert!(!engine.trigger(selector, 0, 0, 0));
        }
    }

    #[test]
    fn more_density_means_more_hits() {
        let mut engine = engine();
        let mut count = |density: u8| {
            engine.reset();
            let mut hits = 0;
            for _ in 0..STEPS_PER_PATTERN {
                if engine.trigger(Selector::HiHat, 100, 180, density) {
                    hits += 1;
                }
                engine.advance();
            }
            hits
        };
        let sparse = count(60);
        let dense = count(230);
        assert!(dense > sparse, "dense {dense} sparse {sparse}");
    }

    #[test]
    fn chaos_only_raises_levels() {
        let mut engine = engine();
        engine.set_chaos(255);
        for _ in 0..4 {
            engine.reset();
            for _ in 0..STEPS_PER_PATTERN {
                for selector in Selector::ALL {
                    let base = engine.level(selector, 30, 200);
                    let perturbed = engine.perturbed_level(selector, 30, 200);
                    assert!(perturbed >= base);
                    assert!(perturbed as u16 <= base as u16 + 63);
                }
                engine.advance();
            }
        }
    }

    #[test]
    fn chaos_is_repeatable_with_a_seed() {
        let run = || {
            let mut engine = engine();
            engine.set_chaos(200);
            engine.reset();
            (0..STEPS_PER_PATTERN)
                .map(|_| {
                    let level = engine.perturbed_level(Selector::Snare, 77, 33);
                    engine.advance();
                    level
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
