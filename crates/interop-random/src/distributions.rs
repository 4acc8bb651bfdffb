//! Parameterised probability distributions sampled from any generator.

use std::f64::consts::PI;
use std::fmt;

use interop_core::base::{Base, NumberFormat};
use interop_core::errors::{ErrorInfo, InteropError};
use rand::{Rng, RngCore};

use crate::text::{malformed, parse_tagged, tag_mismatch, unknown_tag, write_tagged};

/// A distribution over `f64` with a fixed list of real parameters.
pub trait Distribution: Send + Sync + fmt::Debug {
    /// Short identifier written in front of the serialized parameters.
    fn tag(&self) -> &'static str;

    /// Parameters in declaration order.
    fn parameters(&self) -> Vec<f64>;

    /// Replaces every parameter; invalid values leave `self` unchanged.
    fn set_parameters(&mut self, parameters: &[f64]) -> Result<(), InteropError>;

    /// Draws one value using `rng`.
    fn sample(&self, rng: &mut dyn RngCore) -> f64;

    /// Boxed copy of this distribution.
    fn copy_distribution(&self) -> Box<dyn Distribution>;

    /// Writes the tag and parameters using the float policy of `format`.
    fn string_serialize(&self, format: &NumberFormat) -> String {
        let parameters = self.parameters();
        if format.legible_floats {
            let fields: Vec<String> = parameters.iter().map(|p| format.write_f64(*p)).collect();
            write_tagged(None, self.tag(), &fields)
        } else {
            let fields: Vec<String> = parameters
                .iter()
                .map(|p| format.base.signed(p.to_bits() as i64))
                .collect();
            write_tagged(Some(format.base), self.tag(), &fields)
        }
    }

    /// Restores parameters from text produced by [`Distribution::string_serialize`].
    fn string_deserialize(&mut self, text: &str) -> Result<(), InteropError> {
        let (tag, parameters) = read_parameters(text)?;
        if tag != self.tag() {
            return Err(tag_mismatch("distribution", self.tag(), tag));
        }
        self.set_parameters(&parameters)
    }
}

fn read_parameters(text: &str) -> Result<(&str, Vec<f64>), InteropError> {
    let tagged = parse_tagged(text)?;
    let parameters = tagged
        .fields
        .iter()
        .map(|field| read_float(tagged.marker, field).ok_or_else(|| malformed(text, "bad parameter")))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((tagged.tag, parameters))
}

fn read_float(marker: Option<Base>, field: &str) -> Option<f64> {
    match marker {
        Some(base) => base.read_i64(field).ok().map(|bits| f64::from_bits(bits as u64)),
        None => field.trim().parse().ok(),
    }
}

// Uniform in the open interval (0, 1), safe for logarithms and reciprocals.
fn open_unit(rng: &mut dyn RngCore) -> f64 {
    ((rng.next_u64() >> 11) as f64 + 0.5) * (1.0 / (1u64 << 53) as f64)
}

fn invalid(tag: &str, parameters: &[f64]) -> InteropError {
    InteropError::InvalidArgument(
        ErrorInfo::new("distribution-parameters", "parameters outside the valid domain")
            .with_context("distribution", tag)
            .with_context("parameters", format!("{parameters:?}")),
    )
}

macro_rules! distribution {
    (
        $(#[$meta:meta])*
        $name:ident, $tag:literal, [$($param:ident),+],
        valid: |$v:ident| $valid:expr,
        sample: |$d:ident, $rng:ident| $body:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $name {
            $($param: f64,)+
        }

        impl $name {
            /// Tag written in front of the serialized parameters.
            pub const TAG: &'static str = $tag;

            /// Parameter names in declaration order.
            pub const PARAMETERS: &'static [&'static str] = &[$(stringify!($param)),+];

            /// Creates the distribution, rejecting parameters outside its domain.
            pub fn new($($param: f64),+) -> Result<Self, InteropError> {
                Self::from_parameters(&[$($param),+])
            }

            /// Creates the distribution from parameters in declaration order.
            pub fn from_parameters(parameters: &[f64]) -> Result<Self, InteropError> {
                if parameters.len() != Self::PARAMETERS.len()
                    || parameters.iter().any(|p| !p.is_finite())
                {
                    return Err(invalid($tag, parameters));
                }
                let mut values = parameters.iter().copied();
                let candidate = Self {
                    $($param: values.next().unwrap_or(f64::NAN),)+
                };
                let $v = &candidate;
                if $valid {
                    Ok(candidate)
                } else {
                    Err(invalid($tag, parameters))
                }
            }

            /// Parses text written by [`Distribution::string_serialize`] for this type.
            pub fn from_string(text: &str) -> Result<Self, InteropError> {
                let (tag, parameters) = read_parameters(text)?;
                if tag != $tag {
                    return Err(tag_mismatch("distribution", $tag, tag));
                }
                Self::from_parameters(&parameters)
            }

            $(
                #[doc = concat!("The `", stringify!($param), "` parameter.")]
                pub fn $param(&self) -> f64 {
                    self.$param
                }
            )+
        }

        impl Distribution for $name {
            fn tag(&self) -> &'static str {
                Self::TAG
            }

            fn parameters(&self) -> Vec<f64> {
                vec![$(self.$param),+]
            }

            fn set_parameters(&mut self, parameters: &[f64]) -> Result<(), InteropError> {
                *self = Self::from_parameters(parameters)?;
                Ok(())
            }

            fn sample(&self, rng: &mut dyn RngCore) -> f64 {
                let $d = self;
                let $rng = rng;
                $body
            }

            fn copy_distribution(&self) -> Box<dyn Distribution> {
                Box::new(*self)
            }
        }
    };
}

distribution!(
    /// One with probability `p`, otherwise zero.
    Bernoulli, "Bernoulli", [p],
    valid: |d| (0.0..=1.0).contains(&d.p),
    sample: |d, rng| if rng.gen::<f64>() < d.p { 1.0 } else { 0.0 }
);

distribution!(
    /// Heavy-tailed distribution centred on `location`.
    Cauchy, "Cauchy", [location, scale],
    valid: |d| d.scale > 0.0,
    sample: |d, rng| d.location + d.scale * (PI * (open_unit(rng) - 0.5)).tan()
);

distribution!(
    /// Uniform over `[lower, upper)`.
    ContinuousUniform, "ContinuousUniform", [lower, upper],
    valid: |d| d.lower < d.upper,
    sample: |d, rng| d.lower + (d.upper - d.lower) * rng.gen::<f64>()
);

distribution!(
    /// Waiting time with rate `lambda`.
    Exponential, "Exponential", [lambda],
    valid: |d| d.lambda > 0.0,
    sample: |d, rng| -open_unit(rng).ln() / d.lambda
);

distribution!(
    /// Failures before the first success with success probability `p`.
    Geometric, "Geometric", [p],
    valid: |d| d.p > 0.0 && d.p <= 1.0,
    sample: |d, rng| {
        if d.p >= 1.0 {
            0.0
        } else {
            (open_unit(rng).ln() / (1.0 - d.p).ln()).floor()
        }
    }
);

distribution!(
    /// Beta-like distribution on `(0, 1)` with a closed-form inverse.
    Kumaraswamy, "Kumaraswamy", [a, b],
    valid: |d| d.a > 0.0 && d.b > 0.0,
    sample: |d, rng| (1.0 - open_unit(rng).powf(1.0 / d.b)).powf(1.0 / d.a)
);

distribution!(
    /// Double exponential centred on `mu`.
    Laplace, "Laplace", [mu, beta],
    valid: |d| d.beta > 0.0,
    sample: |d, rng| {
        let u = open_unit(rng) - 0.5;
        d.mu - d.beta * u.signum() * (1.0 - 2.0 * u.abs()).ln()
    }
);

distribution!(
    /// Logistic distribution centred on `mu`.
    Logistic, "Logistic", [mu, scale],
    valid: |d| d.scale > 0.0,
    sample: |d, rng| {
        let u = open_unit(rng);
        d.mu + d.scale * (u / (1.0 - u)).ln()
    }
);

distribution!(
    /// Gaussian with mean `mu` and standard deviation `sigma`.
    Normal, "Normal", [mu, sigma],
    valid: |d| d.sigma > 0.0,
    sample: |d, rng| {
        let radius = (-2.0 * open_unit(rng).ln()).sqrt();
        let angle = 2.0 * PI * rng.gen::<f64>();
        d.mu + d.sigma * radius * angle.cos()
    }
);

distribution!(
    /// Power-law tail starting at `scale`.
    Pareto, "Pareto", [scale, shape],
    valid: |d| d.scale > 0.0 && d.shape > 0.0,
    sample: |d, rng| d.scale / open_unit(rng).powf(1.0 / d.shape)
);

distribution!(
    /// Event counts with mean `lambda`.
    Poisson, "Poisson", [lambda],
    valid: |d| d.lambda > 0.0,
    sample: |d, rng| {
        if d.lambda < 30.0 {
            let limit = (-d.lambda).exp();
            let mut count = 0.0;
            let mut product = rng.gen::<f64>();
            while product > limit {
                count += 1.0;
                product *= rng.gen::<f64>();
            }
            count
        } else {
            let radius = (-2.0 * open_unit(rng).ln()).sqrt();
            let z = radius * (2.0 * PI * rng.gen::<f64>()).cos();
            (d.lambda + d.lambda.sqrt() * z).round().max(0.0)
        }
    }
);

distribution!(
    /// Magnitude of a two-dimensional Gaussian vector.
    Rayleigh, "Rayleigh", [sigma],
    valid: |d| d.sigma > 0.0,
    sample: |d, rng| d.sigma * (-2.0 * open_unit(rng).ln()).sqrt()
);

distribution!(
    /// Piecewise-linear density over `[lower, upper]` peaking at `mode`.
    Triangular, "Triangular", [lower, upper, mode],
    valid: |d| d.lower < d.upper && d.lower <= d.mode && d.mode <= d.upper,
    sample: |d, rng| {
        let u = rng.gen::<f64>();
        let width = d.upper - d.lower;
        let split = (d.mode - d.lower) / width;
        if u < split {
            d.lower + (u * width * (d.mode - d.lower)).sqrt()
        } else {
            d.upper - ((1.0 - u) * width * (d.upper - d.mode)).sqrt()
        }
    }
);

distribution!(
    /// Weibull with the given shape and scale.
    Weibull, "Weibull", [shape, scale],
    valid: |d| d.shape > 0.0 && d.scale > 0.0,
    sample: |d, rng| d.scale * (-open_unit(rng).ln()).powf(1.0 / d.shape)
);

/// Rebuilds whichever distribution `text` names by its tag.
pub fn deserialize_distribution(text: &str) -> Result<Box<dyn Distribution>, InteropError> {
    let (tag, parameters) = read_parameters(text)?;
    let distribution: Box<dyn Distribution> = match tag {
        Bernoulli::TAG => Box::new(Bernoulli::from_parameters(&parameters)?),
        Cauchy::TAG => Box::new(Cauchy::from_parameters(&parameters)?),
        ContinuousUniform::TAG => Box::new(ContinuousUniform::from_parameters(&parameters)?),
        Exponential::TAG => Box::new(Exponential::from_parameters(&parameters)?),
        Geometric::TAG => Box::new(Geometric::from_parameters(&parameters)?),
        Kumaraswamy::TAG => Box::new(Kumaraswamy::from_parameters(&parameters)?),
        Laplace::TAG => Box::new(Laplace::from_parameters(&parameters)?),
        Logistic::TAG => Box::new(Logistic::from_parameters(&parameters)?),
        Normal::TAG => Box::new(Normal::from_parameters(&parameters)?),
        Pareto::TAG => Box::new(Pareto::from_parameters(&parameters)?),
        Poisson::TAG => Box::new(Poisson::from_parameters(&parameters)?),
        Rayleigh::TAG => Box::new(Rayleigh::from_parameters(&parameters)?),
        Triangular::TAG => Box::new(Triangular::from_parameters(&parameters)?),
        Weibull::TAG => Box::new(Weibull::from_parameters(&parameters)?),
        other => return Err(unknown_tag(other, "distribution")),
    };
    Ok(distribution)
}
