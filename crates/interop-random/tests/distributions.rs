use interop_core::base::{Base, NumberFormat};
use interop_core::errors::InteropError;
use interop_random::{
    deserialize_distribution, Bernoulli, ContinuousUniform, Distribution, Exponential, Normal,
    Poisson, Triangular, Xoshiro256StarStarRandom,
};

fn mean_of(distribution: &dyn Distribution, samples: usize) -> f64 {
    let mut rng = Xoshiro256StarStarRandom::from_seed(42);
    (0..samples).map(|_| distribution.sample(&mut rng)).sum::<f64>() / samples as f64
}

#[test]
fn invalid_parameters_are_rejected() {
    assert!(matches!(Normal::new(0.0, -1.0), Err(InteropError::InvalidArgument(_))));
    assert!(ContinuousUniform::new(2.0, 1.0).is_err());
    assert!(Triangular::new(0.0, 1.0, 2.0).is_err());
    assert!(Bernoulli::new(f64::NAN).is_err());
    assert!(Normal::from_parameters(&[0.0]).is_err());
}

#[test]
fn set_parameters_keeps_old_values_on_failure() {
    let mut normal = Normal::new(1.0, 2.0).unwrap();
    assert!(normal.set_parameters(&[0.0, 0.0]).is_err());
    assert_eq!(normal.parameters(), vec![1.0, 2.0]);
    normal.set_parameters(&[3.0, 4.0]).unwrap();
    assert_eq!((normal.mu(), normal.sigma()), (3.0, 4.0));
}

#[test]
fn sample_means_are_plausible() {
    let normal = Normal::new(5.0, 1.0).unwrap();
    assert!((mean_of(&normal, 20_000) - 5.0).abs() < 0.1);
    let exponential = Exponential::new(2.0).unwrap();
    assert!((mean_of(&exponential, 20_000) - 0.5).abs() < 0.05);
    let poisson = Poisson::new(4.0).unwrap();
    assert!((mean_of(&poisson, 20_000) - 4.0).abs() < 0.15);
    let uniform = ContinuousUniform::new(-1.0, 1.0).unwrap();
    assert!(mean_of(&uniform, 20_000).abs() < 0.05);
}

#[test]
fn samples_stay_in_support() {
    let triangular = Triangular::new(1.0, 3.0, 2.0).unwrap();
    let mut rng = Xoshiro256StarStarRandom::from_seed(3);
    for _ in 0..1_000 {
        let value = triangular.sample(&mut rng);
        assert!((1.0..=3.0).contains(&value));
    }
}

#[test]
fn legible_string_is_plain_decimal() {
    let normal = Normal::new(0.5, 2.0).unwrap();
    let text = normal.string_serialize(&NumberFormat::default());
    assert_eq!(text, "Normal`0.5~2`");
    let restored = deserialize_distribution(&text).unwrap();
    assert_eq!(restored.parameters(), vec![0.5, 2.0]);
}

#[test]
fn compact_string_keeps_exact_bits() {
    let format = NumberFormat::new(Base::BASE36, false);
    let triangular = Triangular::new(0.1, 0.7, 0.3).unwrap();
    let text = triangular.string_serialize(&format);
    assert!(text.starts_with("36rTriangular`"));
    let restored = deserialize_distribution(&text).unwrap();
    assert_eq!(restored.tag(), "Triangular");
    assert_eq!(restored.parameters(), triangular.parameters());
}

#[test]
fn unknown_tag_is_a_codec_error() {
    let err = deserialize_distribution("Zipf`1`").unwrap_err();
    assert_eq!(err.info().code, "unknown-tag");
    let mut normal = Normal::new(0.0, 1.0).unwrap();
    assert!(normal.string_deserialize("Bernoulli`0.5`").is_err());
}
