use crate::error::AppError;
use std::io::{Cursor, Write};
use std::path::PathBuf;

/// Convert f32 samples in [-1, 1] to 16-bit PCM, clamping out-of-range values.
pub fn to_i16(samples: &[f32]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.max(-1.0).min(1.0) * i16::MAX as f32) as i16)
        .collect()
}

/// Encode mono samples as a 16-bit WAV file in memory.
pub fn encode_wav(samples: &[f32], sample_rate: u32) -> Result<Vec<u8>, AppError> {
    let header = wav::Header::new(wav::header::WAV_FORMAT_PCM, 1, sample_rate, 16);
    let body = wav::bit_depth::BitDepth::Sixteen(to_i16(samples));

    let mut cursor = Cursor::new(Vec::new());
    wav::write(header, &body, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Write a WAV file to a temporary path that is kept on disk, returning the path.
pub fn save_temp_wav(samples: &[f32], sample_rate: u32) -> Result<PathBuf, AppError> {
    let buffer = encode_wav(samples, sample_rate)?;
    let mut file = tempfile::Builder::new().suffix(".wav").tempfile()?;
    file.write_all(&buffer)?;
    let (_file, path) = file.keep().map_err(|e| AppError::IoError(e.error))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_samples() {
        let pcm = to_i16(&[0.0, 1.5, -2.0]);
        assert_eq!(pcm, vec![0, i16::MAX, -i16::MAX]);
    }

    #[test]
    fn encodes_non_empty_riff_buffer() {
        let samples: Vec<f32> = (0..220).map(|i| (i as f32 / 220.0).sin()).collect();
        let buffer = encode_wav(&samples, 22050).unwrap();
        assert!(buffer.len() > 44);
        assert_eq!(&buffer[..4], b"RIFF");
        assert_eq!(&buffer[8..12], b"WAVE");
    }

    #[test]
    fn saved_temp_wav_exists_and_is_non_empty() {
        let samples = vec![0.1f32; 100];
        let path = save_temp_wav(&samples, 16000).unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn wav_body_round_trips_as_sixteen_bit() {
        let samples = vec![0.5f32, -0.5];
        let buffer = encode_wav(&samples, 8000).unwrap();
        let (header, body) = wav::read(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(header.sampling_rate, 8000);
        assert_eq!(header.channel_count, 1);
        match body {
            wav::bit_depth::BitDepth::Sixteen(data) => assert_eq!(data.len(), 2),
            other => panic!("unexpected bit depth: {:?}", other),
        }
    }
}
