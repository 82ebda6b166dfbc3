use crate::math::{Fixed, Sample, SampleFx};

/// Phase follower for an external clock.
///
/// `ping` is called with the host's tick counter on every clock pulse. The
/// interval between two pings sets the tempo, and the phase increment is
/// nudged so the next wrap lands on the next expected ping.
#[derive(Debug, Clone)]
pub struct PingablePhasor<T: Sample> {
    sample_rate: f32,
    phase: T,
    phase_increment: T,
    last_ping: Option<u32>,
    tempo: f32, // beats per minute, 0 until two pings arrived
}

impl<T: Sample> PingablePhasor<T> {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            phase: T::ZERO,
            phase_increment: T::ZERO,
            last_ping: None,
            tempo: 0.0,
        }
    }

    /// Stop and forget the ping history.
    pub fn reset(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        self.phase = T::ZERO;
        self.phase_increment = T::ZERO;
        self.last_ping = None;
    }

    /// Register a clock pulse at tick `time`. The counter may wrap.
    pub fn ping(&mut self, time: u32) {
        if let Some(last) = self.last_ping {
            let delta = time.wrapping_sub(last);
            if delta == 0 {
                return;
            }

            let delta = delta as f32;
            self.tempo = self.sample_rate / delta * 60.0;

            // Distance to the nearest beat, in [-0.5, 0.5). Ahead slows down,
            // behind speeds up.
            let half = T::from_ratio(1, 2);
            let offset = (self.phase + half).frac() - half;
            self.phase_increment = T::from_f32(1.0 / delta) * (T::ONE - offset);
        }
        self.last_ping = Some(time);
    }

    #[inline]
    pub fn tick(&mut self) -> T {
        self.phase = (self.phase + self.phase_increment).frac();
        self.phase
    }

    /// Beats per minute measured from the last two pings.
    pub fn tempo(&self) -> f32 {
        self.tempo
    }

    pub fn phase(&self) -> T {
        self.phase
    }
}

type DividerFx = Fixed<20>;

/// Runs a phase `amount` times faster.
///
/// Works in 20 fractional bits so the product has integer headroom for
/// large amounts.
#[derive(Debug, Clone, Copy)]
pub struct PhasorDivider {
    amount: DividerFx,
}

impl PhasorDivider {
    pub fn new(amount: i32) -> Self {
        Self {
            amount: DividerFx::from_int(amount),
        }
    }

    pub fn set_amount(&mut self, amount: i32) {
        self.amount = DividerFx::from_int(amount);
    }

    #[inline]
    pub fn tick(&self, phase: SampleFx) -> SampleFx {
        (phase.rescale::<20>() * self.amount).frac().rescale()
    }
}

impl Default for PhasorDivider {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::phasor::WrapDetector;

    const SAMPLE_RATE: f32 = 1_000.0;

    #[test]
    fn tempo_follows_ping_interval() {
        let mut clock = PingablePhasor::<f32>::new(SAMPLE_RATE);
        clock.ping(0);
        assert_eq!(clock.tempo(), 0.0);
        clock.ping(500);
        assert!((clock.tempo() - 120.0).abs() < 1e-3);
    }

    #[test]
    fn phase_locks_to_pings() {
        let mut clock = PingablePhasor::<f64>::new(SAMPLE_RATE);
        let mut wraps = WrapDetector::new();
        let mut count = 0;

        for t in 0..2_000u32 {
            if t % 100 == 0 {
                clock.ping(t);
            }
            if wraps.tick(clock.tick()) {
                count += 1;
            }
        }
        // One wrap per ping once the second ping set the speed.
        assert!((18..=20).contains(&count), "wrapped {count} times");
    }

    #[test]
    fn late_phase_speeds_up() {
        let mut clock = PingablePhasor::<f32>::new(SAMPLE_RATE);
        clock.ping(10);
        clock.ping(110);
        for _ in 0..80 {
            clock.tick();
        }
        // Phase is around 0.8, so this ping comes early and the phasor has
        // 0.2 of a cycle to make up.
        clock.ping(190);
        let before = clock.phase();
        let step = clock.tick() - before;
        assert!((step - 1.2 / 80.0).abs() < 1e-4, "step {step}");
    }

    #[test]
    fn reset_forgets_history() {
        let mut clock = PingablePhasor::<f32>::new(SAMPLE_RATE);
        clock.ping(1);
        clock.ping(101);
        clock.tick();
        clock.reset(SAMPLE_RATE);
        assert_eq!(clock.phase(), 0.0);
        assert_eq!(clock.tick(), 0.0);
    }

    #[test]
    fn divider_multiplies_phase() {
        let divider = PhasorDivider::new(2);
        let out = divider.tick(SampleFx::from_f32(0.3)).to_f32();
        assert!((out - 0.6).abs() < 1e-5);
        let out = divider.tick(SampleFx::from_f32(0.7)).to_f32();
        assert!((out - 0.4).abs() < 1e-5);

        let mut divider = PhasorDivider::default();
        divider.set_amount(4);
        let out = divider.tick(SampleFx::from_f32(0.3)).to_f32();
        assert!((out - 0.2).abs() < 1e-5);
    }
}
