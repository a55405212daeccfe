//! # Stemmer (Radicalização)
//!
//! Redução de cada token à sua forma-raiz via o algoritmo de sufixos do
//! Snowball para inglês (crate `rust-stemmers`). O stemming é aplicado
//! token a token, sem contexto entre tokens, preservando a ordem.
//!
//! O algoritmo é tratado como capacidade de prateleira (caixa-preta), não
//! como subsistema a reimplementar.

use rust_stemmers::{Algorithm, Stemmer};

/// Invólucro fino sobre o stemmer Snowball de inglês.
pub struct WordStemmer {
    inner: Stemmer,
}

impl WordStemmer {
    pub fn new() -> Self {
        Self {
            inner: Stemmer::create(Algorithm::English),
        }
    }

    /// Radicaliza uma única palavra (já em minúsculas).
    pub fn stem(&self, word: &str) -> String {
        self.inner.stem(word).to_string()
    }

    /// Radicaliza uma sequência de palavras, preservando a ordem.
    pub fn stem_all(&self, words: &[String]) -> Vec<String> {
        words.iter().map(|w| self.stem(w)).collect()
    }
}

impl Default for WordStemmer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem_common_suffixes() {
        let s = WordStemmer::new();
        assert_eq!(s.stem("running"), "run");
        assert_eq!(s.stem("cats"), "cat");
        assert_eq!(s.stem("loved"), "love");
    }

    #[test]
    fn test_stem_all_preserves_order() {
        let s = WordStemmer::new();
        let words = vec!["dogs".to_string(), "barking".to_string(), "loudly".to_string()];
        let stems = s.stem_all(&words);
        assert_eq!(stems.len(), 3);
        assert_eq!(stems[0], "dog");
        assert_eq!(stems[1], "bark");
    }

    #[test]
    fn test_stem_is_independent_per_token() {
        let s = WordStemmer::new();
        // Mesmo token, mesmo resultado, independente da vizinhança
        let a = s.stem_all(&["running".to_string(), "fast".to_string()]);
        let b = s.stem_all(&["slowly".to_string(), "running".to_string()]);
        assert_eq!(a[0], b[1]);
    }
}
