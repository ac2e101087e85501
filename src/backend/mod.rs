pub mod vits;

/// A synthesizer backend. Implementations own whatever model state they
/// need and turn text into mono f32 samples at `sample_rate()` Hz.
pub trait TtsEngine
where
    Self: Sized,
{
    type Config;
    type Error;

    fn from_config(config: Self::Config) -> Result<Self, Self::Error>;
    fn synthesize(&mut self, text: &str) -> Result<Vec<f32>, Self::Error>;
    fn sample_rate(&self) -> u32;
}
