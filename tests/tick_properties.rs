//! Whole-generator properties checked through the public API.

use tickwave::config::{PatternConfig, TerrainConfig};
use tickwave::dsp::{AdEnvelope, NoiseField, Phasor, RampedValue, WrapDetector};
use tickwave::sequencing::{runs_to_gates, FlipFlopWeaver, PatternEngine, PingablePhasor, Selector};
use tickwave::terrain::{TerrainOscillator, TerrainState};
use tickwave::{RandomSource, Sample, SampleFx, DEFAULT_SAMPLE_RATE};

fn count_wraps<T: Sample>(frequency: f32, ticks: usize) -> usize {
    let mut phasor = Phasor::<T>::new(DEFAULT_SAMPLE_RATE);
    phasor.set_frequency(frequency);
    (0..ticks)
        .filter(|_| {
            phasor.tick();
            phasor.wrapped()
        })
        .count()
}

#[test]
fn phasor_wraps_once_per_period() {
    let ticks = DEFAULT_SAMPLE_RATE as usize;
    assert_eq!(count_wraps::<f32>(440.0, ticks), 440);
    assert_eq!(count_wraps::<f64>(440.0, ticks), 440);
}

#[test]
fn fixed_phasor_trails_by_the_truncated_increment() {
    // The Q4.27 increment is truncated, so one second ends just short of
    // the 440th wrap.
    let ticks = DEFAULT_SAMPLE_RATE as usize;
    assert_eq!(count_wraps::<SampleFx>(440.0, ticks), 439);
    assert_eq!(count_wraps::<SampleFx>(440.0, ticks + 1), 440);
}

#[test]
fn wrap_detector_agrees_with_phasor() {
    let mut phasor = Phasor::<SampleFx>::new(DEFAULT_SAMPLE_RATE);
    phasor.set_frequency(97.0);
    let mut detector = WrapDetector::new();

    for _ in 0..20_000 {
        let phase = phasor.tick();
        assert_eq!(detector.tick(phase), phasor.wrapped());
    }
}

#[test]
fn ramp_lands_exactly_on_target() {
    for ticks in [2u64, 7, 100, 1_667] {
        let mut ramp = RampedValue::<f32>::new(-0.3);
        ramp.ramp_to(0.7, ticks);
        for _ in 0..ticks {
            ramp.tick();
        }
        assert!(!ramp.is_ramping());
        assert_eq!(ramp.value(), 0.7);
    }
}

#[test]
fn envelope_rises_then_decays_to_silence() {
    let mut env = AdEnvelope::<f32>::new();
    env.set_slopes(20, 300);

    let out: Vec<f32> = (0..4_000).map(|i| env.tick(i == 0)).collect();
    let peak = out
        .iter()
        .enumerate()
        .fold(0, |best, (i, &v)| if v > out[best] { i } else { best });

    assert!(out[peak] > 0.99);
    assert!(out[..=peak].windows(2).all(|w| w[1] >= w[0]));
    assert!(out[peak..].windows(2).all(|w| w[1] <= w[0]));
    assert!(out[out.len() - 1] < 1e-3);
}

#[test]
fn noise_is_deterministic_and_bounded() {
    let a = NoiseField::default();
    let b = NoiseField::default();
    let mut rng = RandomSource::new(11);

    for _ in 0..5_000 {
        let (x, y, z) = (
            rng.next_f32() * 16.0,
            rng.next_f32() * 16.0,
            rng.next_f32() * 16.0,
        );
        let v: f32 = a.calc(x, y, z);
        assert_eq!(v, b.calc(x, y, z));
        assert!(v.abs() <= 1.0, "{v} at ({x}, {y}, {z})");

        let u: f32 = a.calc_unipolar(x, y, z);
        assert!((0.0..=1.0).contains(&u));
    }
}

#[test]
fn terrain_settles_after_configured_fade() {
    let config = TerrainConfig {
        fade_cycles: 3,
        ..Default::default()
    };
    let mut osc = TerrainOscillator::<f32>::new(&config);
    let mut phasor = Phasor::new(DEFAULT_SAMPLE_RATE);
    phasor.set_frequency(250.0);

    osc.set_parameters(0.3, 2.2, 1.1, 0.4);

    let mut fading_wraps = 0;
    for _ in 0..8_000 {
        osc.tick(phasor.tick());
        if phasor.wrapped() && osc.state() == TerrainState::Fading {
            fading_wraps += 1;
        }
    }

    assert_eq!(osc.state(), TerrainState::Steady);
    assert!((2..=4).contains(&fading_wraps), "{fading_wraps} wraps while fading");
    assert_eq!(osc.geometry().y, 1.1);
}

#[test]
fn terrain_float_and_fixed_point_agree() {
    let mut float = TerrainOscillator::<f64>::default();
    let mut fixed = TerrainOscillator::<SampleFx>::default();
    let mut float_phasor = Phasor::<f64>::new(DEFAULT_SAMPLE_RATE);
    let mut fixed_phasor = Phasor::<SampleFx>::new(DEFAULT_SAMPLE_RATE);
    float_phasor.set_frequency(130.0);
    fixed_phasor.set_frequency(130.0);

    float.set_parameters(0.25, 0.5, 1.5, 2.5);
    fixed.set_parameters(
        SampleFx::from_f32(0.25),
        SampleFx::from_f32(0.5),
        SampleFx::from_f32(1.5),
        SampleFx::from_f32(2.5),
    );

    for _ in 0..6_000 {
        float.tick(float_phasor.tick());
        fixed.tick(fixed_phasor.tick());
    }
    assert_eq!(float.state(), TerrainState::Steady);
    assert_eq!(fixed.state(), TerrainState::Steady);

    let mut worst = 0.0f64;
    for _ in 0..500 {
        let a = float.tick(float_phasor.tick());
        let b = fixed.tick(fixed_phasor.tick()).to_f32() as f64;
        worst = worst.max((a - b).abs());
    }
    assert!(worst < 0.05, "max difference {worst}");
}

#[test]
fn pattern_repeats_every_length_steps() {
    let config = PatternConfig { length: 12 };
    let mut engine = PatternEngine::with_random(&config, RandomSource::new(5));

    let mut hits = Vec::new();
    for _ in 0..36 {
        let step: Vec<bool> = Selector::ALL
            .iter()
            .map(|&selector| engine.trigger(selector, 140, 60, 170))
            .collect();
        hits.push(step);
        engine.advance();
    }

    assert_eq!(hits[..12], hits[12..24]);
    assert_eq!(hits[12..24], hits[24..]);
}

#[test]
fn first_node_starts_on_the_downbeat() {
    let mut engine = PatternEngine::with_random(&PatternConfig::default(), RandomSource::new(5));
    assert!(engine.trigger(Selector::Kick, 0, 0, 1));

    // Without chaos, a full cycle at the origin reads the node unchanged.
    let first: Vec<u8> = (0..32)
        .map(|_| {
            let level = engine.level(Selector::HiHat, 0, 0);
            engine.advance();
            level
        })
        .collect();
    let second: Vec<u8> = (0..32)
        .map(|_| {
            let level = engine.perturbed_level(Selector::HiHat, 0, 0);
            engine.advance();
            level
        })
        .collect();
    assert_eq!(first, second);
}

#[test]
fn flip_flop_gates_cover_the_pattern() {
    let mut weaver = FlipFlopWeaver::new(RandomSource::new(21));
    for (size, cycles, density) in [(16, 4, 0.5), (32, 3, 0.8), (64, 8, 0.1)] {
        let runs = weaver.generate(size, cycles, density);
        assert_eq!(runs.len(), cycles * 2);
        assert!(runs.iter().all(|&r| r >= 1));

        let gates = runs_to_gates(&runs);
        assert_eq!(gates.len(), size);
        assert!(gates[0]);
    }
}

#[test]
fn pinged_phasor_locks_to_the_clock() {
    let period = 400u32;
    let mut clock = PingablePhasor::<f32>::new(DEFAULT_SAMPLE_RATE);

    let mut wraps = 0;
    let mut last = 0.0f32;
    for time in 0..period * 20 {
        if time % period == 0 {
            clock.ping(time);
        }
        let phase = clock.tick();
        if phase < last {
            wraps += 1;
        }
        last = phase;
    }

    let expected_tempo = DEFAULT_SAMPLE_RATE / period as f32 * 60.0;
    assert!((clock.tempo() - expected_tempo).abs() < 0.1);
    // The first interval only measures the period.
    assert!((18..=19).contains(&wraps), "{wraps} wraps");
}

#[test]
fn fixed_point_floor_and_frac_recompose() {
    let mut rng = RandomSource::new(99);
    for _ in 0..1_000 {
        let x = SampleFx::from_f32(rng.next_f32() * 30.0 - 15.0);
        assert_eq!(x.floor() + x.frac(), x);
        assert!(x.frac() >= SampleFx::ZERO && x.frac() < SampleFx::ONE);
    }

    assert_eq!(SampleFx::MAX.ads(SampleFx::ONE), SampleFx::MAX);
    assert_eq!(SampleFx::MIN.ads(-SampleFx::ONE), SampleFx::MIN);
}
