use serde::{Deserialize, Serialize};

/// Lower-case character codes for a string, one per `char`.
///
/// The sequence is index-aligned with the source string's chars, so a
/// position found in the codes is also a position in the raw text.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CodeSequence(Vec<u32>);

impl CodeSequence {
    /// Number of codes (equal to the char count of the source string).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl AsRef<[u32]> for CodeSequence {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl std::ops::Deref for CodeSequence {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

/// Lower-cases `s` and returns one code per char.
///
/// Chars whose lower-case form expands to several scalars (for example
/// `'İ'`) keep only the first scalar. That keeps the output the same length
/// as the input, which the boundary table and the match positions rely on.
pub fn encode(s: &str) -> CodeSequence {
    CodeSequence(s.chars().map(lower_code).collect())
}

#[inline]
fn lower_code(ch: char) -> u32 {
    ch.to_lowercase().next().unwrap_or(ch) as u32
}
