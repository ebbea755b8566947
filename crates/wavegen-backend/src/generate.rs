//! Main entry point for waveform generation.
//!
//! A request is validated, mapped to its [`Synthesizer`] with a single match
//! over [`Family`], and run for `request.total_samples()` samples. Nothing
//! is generated for an invalid request.

use rand::RngCore;
use wavegen_spec::{validate_for_generate, Family, Request};

use crate::buffer::SampleBuffer;
use crate::envelope::AdsrEnvelope;
use crate::error::{SynthError, SynthResult};
use crate::rng::create_component_rng;
use crate::synthesis::{
    AdditiveSynth, FmSynth, HarmonicSeries, KarplusStrong, NarrowPulseSynth, SawSynth, SineSynth,
    SquareSynth, Synthesizer, WhiteNoise,
};

/// Generates the waveform described by `request`.
///
/// Stochastic families draw from a PCG32 seeded with `request.seed` and the
/// family tag, so the same request always yields the same samples.
///
/// # Errors
/// Returns [`SynthError::InvalidParameter`] when the request fails
/// validation.
pub fn generate(request: &Request) -> SynthResult<SampleBuffer> {
    let mut rng = create_component_rng(request.seed, request.family.tag());
    generate_with_rng(request, &mut rng)
}

/// Generates the waveform described by `request` using `rng` as the only
/// random source.
///
/// `request.seed` is ignored.
pub fn generate_with_rng(request: &Request, rng: &mut dyn RngCore) -> SynthResult<SampleBuffer> {
    validate_for_generate(request).map_err(|errors| SynthError::from_validation(&errors))?;

    let Some(synth) = synthesizer_for(request) else {
        return Ok(SampleBuffer::empty(request.sample_rate));
    };

    let samples = synth.synthesize(
        request.total_samples(),
        f64::from(request.sample_rate),
        rng,
    );

    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(SynthError::synthesis(format!(
            "{} produced a non-finite sample at index {}",
            request.family, index
        )));
    }

    Ok(SampleBuffer::new(samples, request.sample_rate))
}

/// Builds the synthesizer for a request's family.
///
/// Returns `None` for [`Family::Unknown`].
pub fn synthesizer_for(request: &Request) -> Option<Box<dyn Synthesizer>> {
    let frequency = request.frequency;
    let amplitude = request.amplitude;
    let sample_rate = f64::from(request.sample_rate);

    let synth: Box<dyn Synthesizer> = match &request.family {
        Family::SineTime => Box::new(SineSynth::new(frequency, amplitude)),
        Family::SquareTime => Box::new(SquareSynth::new(frequency, amplitude)),
        Family::SawtoothTime => Box::new(SawSynth::new(frequency, amplitude)),
        Family::RepeatingNarrowPulse => Box::new(NarrowPulseSynth::new(frequency, amplitude)),
        Family::SquareAdditive => Box::new(AdditiveSynth::new(
            frequency,
            amplitude,
            HarmonicSeries::Square,
        )),
        Family::SawtoothAdditive => Box::new(AdditiveSynth::new(
            frequency,
            amplitude,
            HarmonicSeries::Sawtooth,
        )),
        Family::TriangleAdditive => Box::new(AdditiveSynth::new(
            frequency,
            amplitude,
            HarmonicSeries::Triangle,
        )),
        Family::CustomizedAdditiveSynthesis(params) => Box::new(AdditiveSynth::new(
            frequency,
            amplitude,
            HarmonicSeries::Custom(params.harmonics.clone()),
        )),
        Family::WhiteNoise => Box::new(WhiteNoise::new(amplitude)),
        Family::KarplusStrong(params) => {
            let delay = params.delay.resolve(request.sample_rate, frequency);
            Box::new(
                KarplusStrong::new(frequency, amplitude, delay, params.feedback_probability)
                    .with_excitation(params.base_excitation)
                    .with_seed_samples(params.include_seed_samples),
            )
        }
        Family::Fm(params) => {
            let (carrier, modulation) = params.resolved_frequencies(frequency);
            let synth = FmSynth::new(
                carrier,
                params.carrier_amplitude,
                modulation,
                params.modulation_amplitude,
                amplitude,
            );
            match &params.adsr {
                Some(adsr) => Box::new(synth.with_envelope(AdsrEnvelope::new(
                    adsr,
                    sample_rate,
                    request.total_samples(),
                ))),
                None => Box::new(synth),
            }
        }
        Family::Unknown => return None,
    };

    Some(synth)
}
