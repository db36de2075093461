//! Integration tests for the public API surface.
//!
//! Verifies that every sampler is reachable from the crate root and that
//! independently constructed instances replay identical sequences from
//! identically seeded sources.

use sampler_core::{
    create_ensemble_spacing_generator, create_gaussian_generator, rayleigh_sample,
    uniform_choice, EnsembleSpacingGenerator, GaussianGenerator, Rayleigh, SamplerConfig,
    SamplerError, SamplerRng, SeedableSource, UniformSource,
};

#[test]
fn test_root_exports_are_callable() {
    let mut rng = SamplerRng::from_seed(1);

    let mut gaussian = create_gaussian_generator(0.0, 1.0).unwrap();
    let _ = gaussian.sample(&mut rng);
    gaussian.reset();

    let spacing = create_ensemble_spacing_generator(4.0).unwrap();
    let _ = spacing.sample(&mut rng);

    let _ = rayleigh_sample(1.0, &mut rng).unwrap();
    let _ = Rayleigh::new(1.0).unwrap().sample(&mut rng);
    let _ = uniform_choice(&[1, 2, 3], &mut rng).unwrap();

    let _ = SamplerConfig::default();
}

#[test]
fn test_identical_instances_replay_identically() {
    let mut rng_a = SamplerRng::from_seed(2_718);
    let mut rng_b = SamplerRng::from_seed(2_718);

    let mut gauss_a = GaussianGenerator::new(1.0, 3.0).unwrap();
    let mut gauss_b = GaussianGenerator::new(1.0, 3.0).unwrap();
    let spacing_a = EnsembleSpacingGenerator::new(7.5).unwrap();
    let spacing_b = EnsembleSpacingGenerator::new(7.5).unwrap();
    let items = ["red", "green", "blue"];

    for _ in 0..1_000 {
        assert_eq!(gauss_a.sample(&mut rng_a), gauss_b.sample(&mut rng_b));
        assert_eq!(spacing_a.sample(&mut rng_a), spacing_b.sample(&mut rng_b));
        assert_eq!(
            rayleigh_sample(0.5, &mut rng_a).unwrap(),
            rayleigh_sample(0.5, &mut rng_b).unwrap()
        );
        assert_eq!(
            uniform_choice(&items, &mut rng_a).unwrap(),
            uniform_choice(&items, &mut rng_b).unwrap()
        );
    }
}

#[test]
fn test_reset_restores_fresh_generator_behaviour() {
    let mut rng = SamplerRng::from_seed(404);
    let mut used = GaussianGenerator::new(0.0, 1.0).unwrap();
    let _ = used.sample(&mut rng);

    rng.reseed(404);
    used.reset();

    let mut fresh_rng = SamplerRng::from_seed(404);
    let mut fresh = GaussianGenerator::new(0.0, 1.0).unwrap();
    for _ in 0..11 {
        assert_eq!(used.sample(&mut rng), fresh.sample(&mut fresh_rng));
    }
}

#[test]
fn test_spacing_range_for_average_four() {
    let generator = EnsembleSpacingGenerator::new(4.0).unwrap();
    let mut rng = SamplerRng::from_seed(16);
    let mut seen = [false; 17];

    for _ in 0..100_000 {
        let s = generator.sample(&mut rng);
        assert!((1..=16).contains(&s), "spacing {} out of range", s);
        seen[s] = true;
    }
    // The bulk of the mass sits on small spacings
    assert!(seen[1..=8].iter().all(|&hit| hit));
}

#[test]
fn test_parameter_errors_surface_at_call_site() {
    let mut source = SamplerRng::from_seed(31);
    let mut untouched = SamplerRng::from_seed(31);
    let empty: [u8; 0] = [];

    let errors = [
        GaussianGenerator::new(0.0, -1.0).unwrap_err(),
        EnsembleSpacingGenerator::new(0.0).unwrap_err(),
        EnsembleSpacingGenerator::new(0.1).unwrap_err(),
        rayleigh_sample(-1.0, &mut source).unwrap_err(),
        uniform_choice(&empty, &mut source).unwrap_err(),
    ];
    for err in errors {
        assert!(matches!(err, SamplerError::InvalidParameter { .. }));
    }

    // Failed calls consume no draws
    assert_eq!(source.next_uniform(), untouched.next_uniform());
}

#[test]
fn test_every_accepted_average_yields_positive_spacings() {
    let mut rng = SamplerRng::from_seed(1);
    for average in [0.125, 0.2, 0.37, 1.0, 4.0] {
        let generator = EnsembleSpacingGenerator::new(average).unwrap();
        for _ in 0..1_000 {
            let s = generator.sample(&mut rng);
            assert!(
                s >= 1 && s <= generator.max_spacing(),
                "average={} spacing={}",
                average,
                s
            );
        }
    }
}

#[test]
fn test_generic_over_source() {
    fn mean_of<S: UniformSource>(source: &mut S, n: usize) -> f64 {
        (0..n).map(|_| source.next_uniform()).sum::<f64>() / n as f64
    }

    let mut rng = SamplerRng::from_seed(3);
    let mean = mean_of(&mut rng, 10_000);
    assert!((mean - 0.5).abs() < 0.02);
}
