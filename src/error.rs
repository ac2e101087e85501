use actix_web::error;
use std::{io::Error as IoError, path::PathBuf};
use thiserror::Error;
use toml::de::Error as TomlDeserializationError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("File not Found: {0}\n{1:#?}")]
    FileNotFound(PathBuf, IoError),
    #[error("Failed to deserialize config file: {0}\n{1:#?}")]
    ConfigDeserializationError(PathBuf, TomlDeserializationError),
    #[error("Failed to deserialize json: \n{0:#?}")]
    JsonDeserializationError(#[from] serde_json::error::Error),
    #[error("IO Error: {0:#?}")]
    IoError(#[from] IoError),
    #[error("Inference Error: {0:#?}")]
    InferenceError(#[from] ort::Error),
    #[error("Tensor shape Error: {0:#?}")]
    ShapeError(#[from] ndarray::ShapeError),
    #[error("Model produced no '{0}' output")]
    MissingOutput(&'static str),
    #[error("Text maps to no model input ids")]
    EmptyPhonemeInput(),
    #[error("Synthesizer is unavailable")]
    EngineUnavailable(),
}

impl error::ResponseError for AppError {}
