use anyhow::{Context, Result};
use std::path::Path;

/// Sample rate requested from the speech service (PCM 16-bit mono).
pub const SAMPLE_RATE: u32 = 22_050;

/// Gap inserted before each clip during assembly.
pub const GAP_MS: u32 = 2_000;

/// One synthesized audio segment.
#[derive(Debug, Clone)]
pub struct Clip {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

impl Clip {
    /// Decode raw 16-bit little-endian mono PCM bytes.
    pub fn from_pcm_bytes(bytes: &[u8], sample_rate: u32) -> Self {
        let samples = bytes
            .chunks_exact(2)
            .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
            .collect();

        Self {
            samples,
            sample_rate,
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.samples.len() as u64 * 1000 / self.sample_rate as u64
    }

    pub fn save_wav<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };

        let mut writer = hound::WavWriter::create(path.as_ref(), spec)
            .with_context(|| format!("Failed to create {}", path.as_ref().display()))?;

        for &sample in &self.samples {
            writer.write_sample(sample)?;
        }

        writer
            .finalize()
            .with_context(|| format!("Failed to finalize {}", path.as_ref().display()))?;

        Ok(())
    }

    pub fn load_wav<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut reader = hound::WavReader::open(path.as_ref())
            .with_context(|| format!("Failed to open {}", path.as_ref().display()))?;

        let spec = reader.spec();
        let samples: Vec<i16> = reader
            .samples::<i16>()
            .collect::<std::result::Result<_, _>>()
            .with_context(|| format!("Failed to read samples from {}", path.as_ref().display()))?;

        Ok(Self {
            samples,
            sample_rate: spec.sample_rate,
        })
    }
}

/// A silent clip of the given length.
pub fn silence(duration_ms: u32, sample_rate: u32) -> Clip {
    let sample_count = (duration_ms as u64 * sample_rate as u64 / 1000) as usize;
    Clip {
        samples: vec![0; sample_count],
        sample_rate,
    }
}

/// Concatenate the episode: a gap before every clip (including the first),
/// then a gap and the sponsor clip.
pub fn assemble_episode(clips: &[Clip], sponsor: &Clip, gap_ms: u32) -> Clip {
    let gap = silence(gap_ms, SAMPLE_RATE);

    let mut combined = Vec::new();
    for clip in clips {
        combined.extend(&gap.samples);
        combined.extend(&clip.samples);
    }
    combined.extend(&gap.samples);
    combined.extend(&sponsor.samples);

    Clip {
        samples: combined,
        sample_rate: SAMPLE_RATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip_of(len: usize) -> Clip {
        Clip {
            samples: vec![1; len],
            sample_rate: SAMPLE_RATE,
        }
    }

    #[test]
    fn test_from_pcm_bytes_decodes_little_endian() {
        let clip = Clip::from_pcm_bytes(&[0x01, 0x00, 0xFF, 0x7F, 0x00, 0x80], SAMPLE_RATE);
        assert_eq!(clip.samples, vec![1, i16::MAX, i16::MIN]);
    }

    #[test]
    fn test_from_pcm_bytes_ignores_trailing_byte() {
        let clip = Clip::from_pcm_bytes(&[0x01, 0x00, 0x02], SAMPLE_RATE);
        assert_eq!(clip.samples, vec![1]);
    }

    #[test]
    fn test_silence_length() {
        assert_eq!(silence(2000, SAMPLE_RATE).samples.len(), 44_100);
        assert_eq!(silence(0, SAMPLE_RATE).samples.len(), 0);
    }

    #[test]
    fn test_assembled_duration_matches_clips_plus_gaps() {
        // Three clips plus the sponsor: one gap before each clip and one
        // before the sponsor, so (3 + 1) gaps in total.
        let clips = vec![clip_of(1000), clip_of(2000), clip_of(3000)];
        let sponsor = clip_of(500);
        let gap_samples = silence(GAP_MS, SAMPLE_RATE).samples.len();

        let episode = assemble_episode(&clips, &sponsor, GAP_MS);

        let expected = 1000 + 2000 + 3000 + 500 + 4 * gap_samples;
        assert_eq!(episode.samples.len(), expected);
    }

    #[test]
    fn test_assembly_starts_with_silence() {
        let episode = assemble_episode(&[clip_of(10)], &clip_of(10), GAP_MS);
        let gap_samples = silence(GAP_MS, SAMPLE_RATE).samples.len();
        assert!(episode.samples[..gap_samples].iter().all(|&s| s == 0));
        assert_eq!(episode.samples[gap_samples], 1);
    }

    #[test]
    fn test_duration_ms() {
        assert_eq!(clip_of(SAMPLE_RATE as usize).duration_ms(), 1000);
        assert_eq!(silence(2000, SAMPLE_RATE).duration_ms(), 2000);
    }
}
