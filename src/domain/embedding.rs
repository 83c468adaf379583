/// Guards the cosine denominator against all-zero vectors.
pub const SIMILARITY_EPSILON: f32 = 1e-10;

#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    pub values: Vec<f32>,
}

impl Embedding {
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    pub fn magnitude(&self) -> f32 {
        self.values.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    pub fn dot(&self, other: &Self) -> f32 {
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    /// `(a · b) / (|a| * |b| + ε)`. A zero vector scores 0 against anything.
    /// Vectors of different length score 0; callers that care check
    /// dimensions first.
    pub fn cosine_similarity(&self, other: &Self) -> f32 {
        if self.values.len() != other.values.len() {
            return 0.0;
        }

        self.dot(other) / (self.magnitude() * other.magnitude() + SIMILARITY_EPSILON)
    }
}
