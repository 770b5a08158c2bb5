use serde::{Deserialize, Serialize};

/// One labeled example: opaque text, its category, and its embedding.
///
/// The field names match the external JSON shape (`text`, `category`,
/// `embedding`), so a corpus file is a plain JSON array of these objects.
/// The engine treats `text` purely as an opaque key returned alongside
/// results; it is never inspected or re-tokenized here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sample {
    pub text: String,
    pub category: String,
    pub embedding: Vec<f32>,
}

impl Sample {
    pub fn new(
        text: impl Into<String>,
        category: impl Into<String>,
        embedding: Vec<f32>,
    ) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            embedding,
        }
    }
}
