use fxhash::hash64;

use crate::normalize::l2_normalize;
use crate::{check_batch, EmbedConfig, EmbedError, TextEmbedder, TextEmbedding};

/// Deterministic offline provider.
///
/// Vectors are sinusoids derived from a hash of the input text, so the same
/// text always maps to the same vector on any machine, with no model assets
/// and negligible CPU cost. Useful for tests and for exercising the
/// classification pipeline without a real model.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    cfg: EmbedConfig,
}

impl StubEmbedder {
    pub fn new(cfg: EmbedConfig) -> Result<Self, EmbedError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.cfg
    }

    fn vector_for(&self, text: &str) -> Vec<f32> {
        let h = hash64(text.as_bytes()).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let mut v = vec![0f32; self.cfg.dimension];
        for (i, value) in v.iter_mut().enumerate() {
            let lane = h.rotate_left((i % 64) as u32) ^ (i as u64).wrapping_mul(0xA24B_AED4_963E_E407);
            *value = ((lane >> 40) as f32 * 1.0e-3).sin();
        }
        if self.cfg.normalize {
            l2_normalize(&mut v);
        }
        v
    }
}

impl TextEmbedder for StubEmbedder {
    fn dimension(&self) -> usize {
        self.cfg.dimension
    }

    fn embed(&self, texts: &[&str]) -> Result<Vec<TextEmbedding>, EmbedError> {
        if texts.is_empty() {
            return Err(EmbedError::EmptyInput);
        }
        for (index, text) in texts.iter().enumerate() {
            if text.trim().is_empty() {
                return Err(EmbedError::EmptyText { index });
            }
        }

        let out: Vec<TextEmbedding> = texts
            .iter()
            .map(|text| TextEmbedding {
                text: text.to_string(),
                vector: self.vector_for(text),
            })
            .collect();

        // The stub honors the same contract it asks of real providers.
        check_batch(texts.len(), &out, self.cfg.dimension)?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stub(dimension: usize, normalize: bool) -> StubEmbedder {
        StubEmbedder::new(EmbedConfig {
            dimension,
            normalize,
            ..Default::default()
        })
        .expect("stub init")
    }

    #[test]
    fn same_text_same_vector() {
        let embedder = stub(64, false);
        let a = embedder.embed(&["hello world"]).expect("embed");
        let b = embedder.embed(&["hello world"]).expect("embed");
        assert_eq!(a[0].vector, b[0].vector);
    }

    #[test]
    fn different_text_different_vector() {
        let embedder = stub(64, false);
        let out = embedder.embed(&["hello", "world"]).expect("embed");
        assert_ne!(out[0].vector, out[1].vector);
    }

    #[test]
    fn preserves_input_order_and_dimension() {
        let embedder = stub(32, true);
        let texts = ["first", "second", "third"];
        let out = embedder.embed(&texts).expect("embed");
        assert_eq!(out.len(), 3);
        for (text, embedding) in texts.iter().zip(&out) {
            assert_eq!(*text, embedding.text);
            assert_eq!(embedding.vector.len(), 32);
        }
    }

    #[test]
    fn normalized_vectors_have_unit_length() {
        let embedder = stub(128, true);
        let out = embedder.embed(&["some text"]).expect("embed");
        let norm: f32 = out[0].vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-4);
    }

    #[test]
    fn empty_batch_rejected() {
        let embedder = stub(16, false);
        assert!(matches!(
            embedder.embed(&[]),
            Err(EmbedError::EmptyInput)
        ));
    }

    #[test]
    fn whitespace_only_text_rejected() {
        let embedder = stub(16, false);
        assert!(matches!(
            embedder.embed(&["ok", "   "]),
            Err(EmbedError::EmptyText { index: 1 })
        ));
    }

    #[test]
    fn zero_dimension_config_rejected() {
        let err = StubEmbedder::new(EmbedConfig {
            dimension: 0,
            ..Default::default()
        })
        .expect_err("invalid config");
        assert!(matches!(err, EmbedError::InvalidConfig(_)));
    }
}
