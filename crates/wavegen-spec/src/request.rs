//! Synthesis request types.
//!
//! A [`Request`] is plain data: the family to synthesize plus its base pitch,
//! amplitude, duration, and sample rate. Family-specific parameters travel
//! inside the [`Family`] variant that needs them, so a request is complete on
//! its own and can be validated once before generation.

use serde::{Deserialize, Serialize};

/// Number of coefficients a customized additive request must supply.
pub const CUSTOM_HARMONIC_COUNT: usize = 10;

/// Waveform family with its family-specific parameters.
///
/// Serialized as an internally tagged object, e.g. `{"type": "sine-time"}` or
/// `{"type": "fm", "carrier_frequency": 1.0, ...}`. Any tag this version does
/// not recognize deserializes to [`Family::Unknown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Family {
    /// Sine wave, time domain.
    SineTime,
    /// Square wave, time domain.
    SquareTime,
    /// Sawtooth wave, time domain.
    SawtoothTime,
    /// One positive and one negative sample at the start of every cycle.
    RepeatingNarrowPulse,
    /// Square wave built from odd sine harmonics.
    SquareAdditive,
    /// Sawtooth wave built from all sine harmonics.
    SawtoothAdditive,
    /// Triangle wave built from odd cosine harmonics.
    TriangleAdditive,
    /// Ten caller-weighted sine harmonics.
    CustomizedAdditiveSynthesis(CustomAdditiveParams),
    /// Uniform white noise.
    WhiteNoise,
    /// Karplus-Strong plucked string.
    KarplusStrong(KarplusStrongParams),
    /// Two-operator frequency modulation with an optional envelope.
    Fm(FmParams),
    /// Unrecognized family tag. Generates an empty buffer.
    #[serde(other)]
    Unknown,
}

impl Family {
    /// Every recognized family tag, in declaration order.
    pub const TAGS: &'static [&'static str] = &[
        "sine-time",
        "square-time",
        "sawtooth-time",
        "repeating-narrow-pulse",
        "square-additive",
        "sawtooth-additive",
        "triangle-additive",
        "customized-additive-synthesis",
        "white-noise",
        "karplus-strong",
        "fm",
    ];

    /// Returns the serialized tag of this family.
    pub fn tag(&self) -> &'static str {
        match self {
            Family::SineTime => "sine-time",
            Family::SquareTime => "square-time",
            Family::SawtoothTime => "sawtooth-time",
            Family::RepeatingNarrowPulse => "repeating-narrow-pulse",
            Family::SquareAdditive => "square-additive",
            Family::SawtoothAdditive => "sawtooth-additive",
            Family::TriangleAdditive => "triangle-additive",
            Family::CustomizedAdditiveSynthesis(_) => "customized-additive-synthesis",
            Family::WhiteNoise => "white-noise",
            Family::KarplusStrong(_) => "karplus-strong",
            Family::Fm(_) => "fm",
            Family::Unknown => "unknown",
        }
    }

    /// Builds a family from its tag, using default parameters where the
    /// family needs any. Returns `None` for unrecognized tags.
    pub fn from_tag(tag: &str) -> Option<Family> {
        let family = match tag {
            "sine-time" => Family::SineTime,
            "square-time" => Family::SquareTime,
            "sawtooth-time" => Family::SawtoothTime,
            "repeating-narrow-pulse" => Family::RepeatingNarrowPulse,
            "square-additive" => Family::SquareAdditive,
            "sawtooth-additive" => Family::SawtoothAdditive,
            "triangle-additive" => Family::TriangleAdditive,
            "customized-additive-synthesis" => {
                Family::CustomizedAdditiveSynthesis(CustomAdditiveParams::default())
            }
            "white-noise" => Family::WhiteNoise,
            "karplus-strong" => Family::KarplusStrong(KarplusStrongParams::default()),
            "fm" => Family::Fm(FmParams::default()),
            _ => return None,
        };
        Some(family)
    }

    /// Returns true if this family needs a positive base frequency.
    pub fn requires_frequency(&self) -> bool {
        !matches!(self, Family::WhiteNoise | Family::Unknown)
    }

    /// Returns true if this family indexes samples by whole oscillator
    /// cycles, which requires `floor(sample_rate / frequency) >= 1`.
    pub fn uses_whole_cycle(&self) -> bool {
        match self {
            Family::SquareTime | Family::SawtoothTime | Family::RepeatingNarrowPulse => true,
            Family::KarplusStrong(params) => params.base_excitation == Excitation::Sawtooth,
            _ => false,
        }
    }

    /// Returns true for the additive-synthesis families.
    pub fn is_additive(&self) -> bool {
        matches!(
            self,
            Family::SquareAdditive
                | Family::SawtoothAdditive
                | Family::TriangleAdditive
                | Family::CustomizedAdditiveSynthesis(_)
        )
    }

    /// Returns true if this family draws from the random source.
    pub fn is_stochastic(&self) -> bool {
        matches!(self, Family::WhiteNoise | Family::KarplusStrong(_))
    }
}

impl std::fmt::Display for Family {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Harmonic weights for customized additive synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomAdditiveParams {
    /// Coefficient of harmonic `k` at index `k - 1`. Must hold exactly
    /// [`CUSTOM_HARMONIC_COUNT`] values.
    pub harmonics: Vec<f64>,
}

impl CustomAdditiveParams {
    /// Creates customized additive parameters.
    pub fn new(harmonics: Vec<f64>) -> Self {
        Self { harmonics }
    }
}

impl Default for CustomAdditiveParams {
    fn default() -> Self {
        let mut harmonics = vec![0.0; CUSTOM_HARMONIC_COUNT];
        harmonics[0] = 1.0;
        Self { harmonics }
    }
}

/// Initial content of the Karplus-Strong delay line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Excitation {
    /// Uniform noise on [-1, 1).
    WhiteNoise,
    /// Time-domain sawtooth at the request frequency.
    Sawtooth,
}

/// Karplus-Strong delay line length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KarplusDelay {
    /// Explicit length in samples.
    Samples(u32),
    /// `floor(sample_rate / frequency)`.
    FromFrequency,
}

impl KarplusDelay {
    /// Resolves the delay length in samples.
    ///
    /// A derived delay for a non-positive or non-finite frequency resolves
    /// to 0, which validation rejects.
    pub fn resolve(&self, sample_rate: u32, frequency: f64) -> usize {
        match *self {
            KarplusDelay::Samples(n) => n as usize,
            KarplusDelay::FromFrequency => {
                let cycle = (sample_rate as f64 / frequency).floor();
                if cycle.is_finite() && cycle > 0.0 {
                    cycle as usize
                } else {
                    0
                }
            }
        }
    }
}

/// Karplus-Strong parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KarplusStrongParams {
    /// Delay line seed.
    pub base_excitation: Excitation,
    /// Probability in [0, 1] that an averaged sample keeps its sign.
    pub feedback_probability: f64,
    /// Delay line length.
    pub delay: KarplusDelay,
    /// Emit the seed region too instead of only the recurrence.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub include_seed_samples: bool,
}

impl Default for KarplusStrongParams {
    fn default() -> Self {
        Self {
            base_excitation: Excitation::WhiteNoise,
            feedback_probability: 1.0,
            delay: KarplusDelay::FromFrequency,
            include_seed_samples: false,
        }
    }
}

/// ADSR envelope applied to the FM modulation depth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdsrParams {
    /// Attack time in seconds.
    pub attack_seconds: f64,
    /// Decay time in seconds.
    pub decay_seconds: f64,
    /// Release time in seconds, measured back from the end of the buffer.
    pub release_seconds: f64,
    /// Sustain level in [0, 1].
    pub sustain_level: f64,
}

impl AdsrParams {
    /// Creates ADSR parameters.
    pub fn new(attack_seconds: f64, decay_seconds: f64, sustain_level: f64, release_seconds: f64) -> Self {
        Self {
            attack_seconds,
            decay_seconds,
            release_seconds,
            sustain_level,
        }
    }

    /// Sum of the timed segments in seconds.
    pub fn timed_seconds(&self) -> f64 {
        self.attack_seconds + self.decay_seconds + self.release_seconds
    }
}

/// Frequency modulation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FmParams {
    /// Carrier frequency in Hz, or a multiplier of the request frequency.
    pub carrier_frequency: f64,
    /// Carrier amplitude.
    pub carrier_amplitude: f64,
    /// Modulator frequency in Hz, or a multiplier of the request frequency.
    pub modulation_frequency: f64,
    /// Modulator amplitude (modulation index).
    pub modulation_amplitude: f64,
    /// Treat both frequencies as multipliers of the request frequency.
    #[serde(default = "default_true")]
    pub use_frequency_as_multiplier: bool,
    /// Optional envelope on the modulation depth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adsr: Option<AdsrParams>,
}

fn default_true() -> bool {
    true
}

impl FmParams {
    /// Returns `(carrier, modulation)` frequencies in Hz for a request
    /// frequency of `base`.
    pub fn resolved_frequencies(&self, base: f64) -> (f64, f64) {
        if self.use_frequency_as_multiplier {
            (
                self.carrier_frequency * base,
                self.modulation_frequency * base,
            )
        } else {
            (self.carrier_frequency, self.modulation_frequency)
        }
    }
}

impl Default for FmParams {
    fn default() -> Self {
        Self {
            carrier_frequency: 1.0,
            carrier_amplitude: 1.0,
            modulation_frequency: 2.0,
            modulation_amplitude: 1.0,
            use_frequency_as_multiplier: true,
            adsr: None,
        }
    }
}

/// A synthesis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Request {
    /// Waveform family and its parameters.
    pub family: Family,
    /// Base frequency in Hz. Ignored by white noise.
    #[serde(default)]
    pub frequency: f64,
    /// Peak amplitude scale factor.
    pub amplitude: f64,
    /// Output length in seconds.
    pub duration_seconds: f64,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Seed for the stochastic families.
    #[serde(default)]
    pub seed: u32,
}

impl Request {
    /// Creates a new request builder.
    pub fn builder(family: Family, sample_rate: u32) -> RequestBuilder {
        RequestBuilder::new(family, sample_rate)
    }

    /// Parses a request from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parses a request from a JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Serializes the request to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the request to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the request to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Returns a copy of this request with a different sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Returns a copy of this request with a different seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Number of samples nominally covered by the request:
    /// `floor(sample_rate * duration_seconds)`, or 0 when that is not a
    /// positive finite number.
    pub fn total_samples(&self) -> usize {
        let n = (self.sample_rate as f64 * self.duration_seconds).floor();
        if n.is_finite() && n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    /// Nyquist frequency in Hz.
    pub fn nyquist(&self) -> f64 {
        self.sample_rate as f64 / 2.0
    }
}

/// Builder for creating requests programmatically.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    family: Family,
    frequency: f64,
    amplitude: f64,
    duration_seconds: f64,
    sample_rate: u32,
    seed: u32,
}

impl RequestBuilder {
    /// Creates a new request builder with 440 Hz, unit amplitude, and a one
    /// second duration.
    pub fn new(family: Family, sample_rate: u32) -> Self {
        Self {
            family,
            frequency: 440.0,
            amplitude: 1.0,
            duration_seconds: 1.0,
            sample_rate,
            seed: 0,
        }
    }

    /// Sets the base frequency in Hz.
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the amplitude.
    pub fn amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Sets the duration in seconds.
    pub fn duration(mut self, duration_seconds: f64) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    /// Sets the RNG seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Builds the request.
    pub fn build(self) -> Request {
        Request {
            family: self.family,
            frequency: self.frequency,
            amplitude: self.amplitude,
            duration_seconds: self.duration_seconds,
            sample_rate: self.sample_rate,
            seed: self.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unit_family_roundtrip() {
        let request = Request::builder(Family::SineTime, 44100)
            .frequency(440.0)
            .duration(0.5)
            .build();
        let json = request.to_json().unwrap();
        assert!(json.contains(r#""type":"sine-time""#));
        assert_eq!(Request::from_json(&json).unwrap(), request);
    }

    #[test]
    fn test_parse_fm_request() {
        let json = r#"{
            "family": {
                "type": "fm",
                "carrier_frequency": 1.0,
                "carrier_amplitude": 0.8,
                "modulation_frequency": 3.0,
                "modulation_amplitude": 2.0,
                "use_frequency_as_multiplier": true,
                "adsr": {
                    "attack_seconds": 0.1,
                    "decay_seconds": 0.1,
                    "release_seconds": 0.2,
                    "sustain_level": 0.5
                }
            },
            "frequency": 220.0,
            "amplitude": 1.0,
            "duration_seconds": 1.0,
            "sample_rate": 8000
        }"#;

        let request = Request::from_json(json).unwrap();
        let Family::Fm(params) = &request.family else {
            panic!("expected fm family, got {}", request.family);
        };
        assert_eq!(params.resolved_frequencies(220.0), (220.0, 660.0));
        assert_eq!(params.adsr.unwrap().sustain_level, 0.5);
        assert_eq!(request.seed, 0);
    }

    #[test]
    fn test_fm_multiplier_defaults_match() {
        let json = r#"{
            "family": {
                "type": "fm",
                "carrier_frequency": 1.0,
                "carrier_amplitude": 1.0,
                "modulation_frequency": 2.0,
                "modulation_amplitude": 1.0
            },
            "frequency": 100.0,
            "amplitude": 1.0,
            "duration_seconds": 1.0,
            "sample_rate": 8000
        }"#;

        let request = Request::from_json(json).unwrap();
        assert_eq!(request.family, Family::Fm(FmParams::default()));
        let Family::Fm(params) = &request.family else {
            panic!("expected fm family, got {}", request.family);
        };
        assert!(params.use_frequency_as_multiplier);
        assert_eq!(params.resolved_frequencies(100.0), (100.0, 200.0));
    }

    #[test]
    fn test_parse_karplus_request() {
        let json = r#"{
            "family": {
                "type": "karplus-strong",
                "base_excitation": "sawtooth",
                "feedback_probability": 0.9,
                "delay": {"samples": 50}
            },
            "frequency": 100.0,
            "amplitude": 0.5,
            "duration_seconds": 0.1,
            "sample_rate": 8000,
            "seed": 7
        }"#;

        let request = Request::from_json(json).unwrap();
        assert_eq!(
            request.family,
            Family::KarplusStrong(KarplusStrongParams {
                base_excitation: Excitation::Sawtooth,
                feedback_probability: 0.9,
                delay: KarplusDelay::Samples(50),
                include_seed_samples: false,
            })
        );
        assert!(request.family.uses_whole_cycle());
        assert_eq!(request.seed, 7);
    }

    #[test]
    fn test_unrecognized_tag_is_unknown() {
        let json = r#"{
            "family": {"type": "wavetable"},
            "frequency": 100.0,
            "amplitude": 1.0,
            "duration_seconds": 1.0,
            "sample_rate": 8000
        }"#;
        let request = Request::from_json(json).unwrap();
        assert_eq!(request.family, Family::Unknown);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let json = r#"{
            "family": {"type": "sine-time"},
            "frequency": 100.0,
            "amplitude": 1.0,
            "duration_seconds": 1.0,
            "sample_rate": 8000,
            "volume": 3
        }"#;
        assert!(Request::from_json(json).is_err());
    }

    #[test]
    fn test_sample_rate_is_required() {
        let json = r#"{
            "family": {"type": "sine-time"},
            "frequency": 100.0,
            "amplitude": 1.0,
            "duration_seconds": 1.0
        }"#;
        assert!(Request::from_json(json).is_err());
    }

    #[test]
    fn test_total_samples_floors() {
        let request = Request::builder(Family::SineTime, 44100)
            .duration(1.0 / 440.0)
            .build();
        assert_eq!(request.total_samples(), 100);

        let negative = Request::builder(Family::SineTime, 44100)
            .duration(-1.0)
            .build();
        assert_eq!(negative.total_samples(), 0);
    }

    #[test]
    fn test_karplus_delay_resolution() {
        assert_eq!(KarplusDelay::Samples(12).resolve(8000, 100.0), 12);
        assert_eq!(KarplusDelay::FromFrequency.resolve(8000, 300.0), 26);
        assert_eq!(KarplusDelay::FromFrequency.resolve(8000, 0.0), 0);
        assert_eq!(KarplusDelay::FromFrequency.resolve(8000, 9000.0), 0);
    }

    #[test]
    fn test_every_tag_builds_matching_family() {
        for tag in Family::TAGS {
            let family = Family::from_tag(tag).unwrap();
            assert_eq!(family.tag(), *tag);
        }
        assert!(Family::from_tag("unknown").is_none());
    }

    #[test]
    fn test_family_classification() {
        assert!(!Family::WhiteNoise.requires_frequency());
        assert!(Family::SineTime.requires_frequency());
        assert!(Family::TriangleAdditive.is_additive());
        assert!(!Family::SineTime.uses_whole_cycle());
        assert!(Family::RepeatingNarrowPulse.uses_whole_cycle());
        assert!(Family::from_tag("karplus-strong").unwrap().is_stochastic());
    }
}
