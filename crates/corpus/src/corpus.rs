use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::{CorpusError, Sample};

/// An immutable, in-memory collection of labeled samples with one fixed
/// embedding dimension.
///
/// Sample order is stable (insertion order), which downstream ranking relies
/// on for deterministic tie-breaking. There is no mutation API: a reload is
/// a new `Corpus` swapped in behind an `Arc` by the caller, never an in-place
/// edit, so concurrent readers can scan lock-free.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    samples: Vec<Sample>,
    dimension: Option<usize>,
}

impl Corpus {
    /// Build a corpus from already-parsed samples.
    ///
    /// Every embedding must be non-empty and share the first sample's
    /// dimension. An empty sample list yields an empty corpus (legitimate as
    /// a split product); loading from a serialized source goes through the
    /// `from_json_*` constructors, which reject empty sources.
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self, CorpusError> {
        let dimension = match samples.first() {
            Some(first) => {
                let expected = first.embedding.len();
                if expected == 0 {
                    return Err(CorpusError::EmptyEmbedding { index: 0 });
                }
                for (index, sample) in samples.iter().enumerate().skip(1) {
                    let found = sample.embedding.len();
                    if found == 0 {
                        return Err(CorpusError::EmptyEmbedding { index });
                    }
                    if found != expected {
                        return Err(CorpusError::DimensionMismatch {
                            index,
                            found,
                            expected,
                        });
                    }
                }
                Some(expected)
            }
            None => None,
        };

        Ok(Self { samples, dimension })
    }

    /// Construct without revalidation from samples known to share one
    /// dimension (subsets of an already-validated corpus).
    pub(crate) fn from_validated(samples: Vec<Sample>, dimension: Option<usize>) -> Self {
        let dimension = if samples.is_empty() { None } else { dimension };
        Self { samples, dimension }
    }

    /// Parse a corpus from a JSON array of `{text, category, embedding}`
    /// objects. Fails on malformed input and on an empty array.
    pub fn from_json_str(source: &str) -> Result<Self, CorpusError> {
        let samples: Vec<Sample> = serde_json::from_str(source)?;
        Self::loaded(samples)
    }

    /// Parse a corpus from a reader carrying the same JSON shape.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CorpusError> {
        let samples: Vec<Sample> = serde_json::from_reader(reader)?;
        Self::loaded(samples)
    }

    /// Read and parse a corpus file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CorpusError> {
        let file = File::open(path)?;
        Self::from_json_reader(BufReader::new(file))
    }

    fn loaded(samples: Vec<Sample>) -> Result<Self, CorpusError> {
        if samples.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }
        let corpus = Self::from_samples(samples)?;
        debug!(
            samples = corpus.len(),
            dimension = ?corpus.dimension,
            "corpus loaded"
        );
        Ok(corpus)
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Embedding dimension shared by every sample; `None` for an empty corpus.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// Distinct category labels present in the corpus.
    pub fn categories(&self) -> BTreeSet<&str> {
        self.samples.iter().map(|s| s.category.as_str()).collect()
    }
}
