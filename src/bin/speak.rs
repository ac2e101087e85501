//! One-shot synthesis demo: load the configured model, speak a fixed test
//! sentence and leave the WAV in a temporary file.

use anyhow::Result;
use showcase_api::audio;
use showcase_api::backend::{vits::Vits, TtsEngine};
use showcase_api::config::Config;

const TEST_SENTENCE: &str = "यह एक परीक्षण वाक्य है";

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_config()?;
    let mut engine = Vits::from_config(config.synthesizer)?;

    let samples = engine.synthesize(TEST_SENTENCE)?;
    let path = audio::save_temp_wav(&samples, engine.sample_rate())?;

    println!("Audio saved at: {}", path.display());
    Ok(())
}
