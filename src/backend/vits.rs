use super::TtsEngine;
use crate::{config::SynthesizerConfig, error::AppError};
use ndarray::{Array1, Array2, ArrayD, IxDyn};
use ort::{
    ep::CUDA, inputs, session::builder::SessionBuilder, session::Session, value::Value,
};
use std::{collections::HashMap, fs};

const BOS: &str = "^";
const EOS: &str = "$";
const PAD: &str = "_";

#[derive(Debug, Deserialize)]
pub struct ModelConfig {
    audio: AudioConfig,
    phoneme_id_map: HashMap<String, Vec<i64>>,
    #[serde(default)]
    inference: InferenceConfig,
}

#[derive(Debug, Deserialize)]
struct AudioConfig {
    sample_rate: u32,
}

#[derive(Debug, Deserialize)]
struct InferenceConfig {
    length_scale: f32,
    noise_scale: f32,
    noise_w: f32,
}

impl Default for InferenceConfig {
    fn default() -> InferenceConfig {
        InferenceConfig {
            length_scale: 1.0,
            noise_scale: 0.667,
            noise_w: 0.8,
        }
    }
}

impl ModelConfig {
    pub fn from_file(path: &std::path::Path) -> Result<ModelConfig, AppError> {
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::FileNotFound(path.to_path_buf(), e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Map text characters to model input ids. BOS and every mapped
    /// character are followed by the PAD id, then EOS closes the sequence.
    /// Characters missing from the id map are skipped.
    fn text_to_ids(&self, text: &str) -> Vec<i64> {
        let mut tokens: Vec<String> = vec![BOS.to_string()];
        tokens.extend(text.chars().map(|c| c.to_string()));

        let mut ids = Vec::new();
        for token in &tokens {
            if let Some(token_ids) = self.phoneme_id_map.get(token) {
                ids.extend(token_ids);
                if let Some(pad_ids) = self.phoneme_id_map.get(PAD) {
                    ids.extend(pad_ids);
                }
            }
        }
        if let Some(eos_ids) = self.phoneme_id_map.get(EOS) {
            ids.extend(eos_ids);
        }
        ids
    }
}

/// VITS-style synthesizer: one ONNX session for the acoustic model and an
/// optional second session for the vocoder. Without a vocoder the model
/// output is taken as the finished waveform.
pub struct Vits {
    session: Session,
    vocoder: Option<Session>,
    config: ModelConfig,
    sample_rate: u32,
}

impl Vits {
    fn builder(use_cuda: bool) -> Result<SessionBuilder, AppError> {
        let mut builder = Session::builder()?;
        if use_cuda {
            builder = builder
                .with_execution_providers([CUDA::default().build()])
                .map_err(ort::Error::from)?;
        }
        Ok(builder)
    }

    fn run_vocoder(vocoder: &mut Session, frames: ArrayD<f32>) -> Result<Vec<f32>, AppError> {
        let mel_value = Value::from_array(frames)?;
        let outputs = vocoder.run(inputs!["mel" => &mel_value])?;
        let output = outputs
            .get("output")
            .ok_or(AppError::MissingOutput("output"))?;
        let (_shape, samples) = output.try_extract_tensor::<f32>()?;
        Ok(samples.to_vec())
    }
}

impl TtsEngine for Vits {
    type Config = SynthesizerConfig;
    type Error = AppError;

    fn from_config(config: SynthesizerConfig) -> Result<Vits, AppError> {
        let model_config = ModelConfig::from_file(&config.model_config_path)?;
        let session = Self::builder(config.use_cuda)?.commit_from_file(&config.model_path)?;

        let vocoder = match &config.vocoder_path {
            Some(path) => Some(Self::builder(config.use_cuda)?.commit_from_file(path)?),
            None => None,
        };
        // The vocoder decides the output rate when it carries its own config.
        let sample_rate = match &config.vocoder_config_path {
            Some(path) => ModelConfig::from_file(path)?.audio.sample_rate,
            None => model_config.audio.sample_rate,
        };

        Ok(Self {
            session,
            vocoder,
            config: model_config,
            sample_rate,
        })
    }

    fn synthesize(&mut self, text: &str) -> Result<Vec<f32>, AppError> {
        let ids = self.config.text_to_ids(text);
        if ids.is_empty() {
            return Err(AppError::EmptyPhonemeInput());
        }

        let len = ids.len();
        let input_ids = Array2::from_shape_vec((1, len), ids)?;
        let input_lengths = Array1::from_vec(vec![len as i64]);
        let inference = &self.config.inference;
        let scales = Array1::from_vec(vec![
            inference.noise_scale,
            inference.length_scale,
            inference.noise_w,
        ]);

        let input_value = Value::from_array(input_ids)?;
        let lengths_value = Value::from_array(input_lengths)?;
        let scales_value = Value::from_array(scales)?;

        let outputs = self.session.run(inputs![
            "input" => &input_value,
            "input_lengths" => &lengths_value,
            "scales" => &scales_value,
        ])?;
        let output = outputs
            .get("output")
            .ok_or(AppError::MissingOutput("output"))?;
        let (shape, data) = output.try_extract_tensor::<f32>()?;

        match &mut self.vocoder {
            Some(vocoder) => {
                let dims: Vec<usize> = shape.iter().map(|&d| d as usize).collect();
                let frames = ArrayD::from_shape_vec(IxDyn(&dims), data.to_vec())?;
                Self::run_vocoder(vocoder, frames)
            }
            None => Ok(data.to_vec()),
        }
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ModelConfig {
        let json = r#"
        {
            "audio": { "sample_rate": 22050 },
            "phoneme_id_map": {
                "^": [1],
                "$": [2],
                "_": [0],
                "a": [10],
                "b": [11, 12]
            },
            "inference": {
                "length_scale": 1.0,
                "noise_scale": 0.667,
                "noise_w": 0.8
            }
        }
        "#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn maps_text_with_bos_eos_and_interleaved_pad() {
        let config = test_config();
        assert_eq!(config.text_to_ids("ab"), vec![1, 0, 10, 0, 11, 12, 0, 2]);
    }

    #[test]
    fn skips_unmapped_characters() {
        let config = test_config();
        // 'z' has no entry; only the frame plus 'a' survive.
        assert_eq!(config.text_to_ids("za"), vec![1, 0, 10, 0, 2]);
    }

    #[test]
    fn fully_unmapped_text_yields_no_ids() {
        let json = r#"
        {
            "audio": { "sample_rate": 22050 },
            "phoneme_id_map": { "a": [10] }
        }
        "#;
        let config: ModelConfig = serde_json::from_str(json).unwrap();
        // No BOS/EOS/PAD entries and no mapped characters: synthesize
        // refuses this input instead of running the model on nothing.
        assert!(config.text_to_ids("xyz").is_empty());
    }

    #[test]
    fn inference_scales_default_when_absent() {
        let json = r#"
        {
            "audio": { "sample_rate": 16000 },
            "phoneme_id_map": {}
        }
        "#;
        let config: ModelConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.audio.sample_rate, 16000);
        assert!((config.inference.length_scale - 1.0).abs() < f32::EPSILON);
        assert!((config.inference.noise_scale - 0.667).abs() < f32::EPSILON);
    }
}
