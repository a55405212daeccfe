//! # Stopwords
//!
//! Conjunto fixo de stopwords do inglês (crate `stop-words`), consumido como
//! tabela de consulta somente-leitura. Usado em dois pontos distintos:
//!
//! - no pipeline interativo, para filtrar os tokens antes do stemming;
//! - na construção do vocabulário de palavras contribuintes.
//!
//! O treino do classificador NÃO passa por este filtro (comportamento
//! observado do sistema: as features de treino incluem stopwords).

use std::collections::HashSet;

use stop_words::LANGUAGE;

/// Conjunto de stopwords carregado uma única vez.
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn english() -> Self {
        Self {
            words: HashSet::from_iter(stop_words::get(LANGUAGE::English)),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Filtra as stopwords de uma sequência, preservando a ordem do resto.
    pub fn remove(&self, words: &[String]) -> Vec<String> {
        words
            .iter()
            .filter(|w| !self.is_stopword(w))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_stopwords_present() {
        let sw = Stopwords::english();
        for w in ["the", "a", "an", "of"] {
            assert!(sw.is_stopword(w), "{w} deveria ser stopword");
        }
        assert!(!sw.is_stopword("love"));
        assert!(!sw.is_stopword("awful"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let sw = Stopwords::english();
        let words: Vec<String> = ["the", "food", "of", "the", "day"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(sw.remove(&words), vec!["food", "day"]);
    }

    #[test]
    fn test_remove_all_stopwords_yields_empty() {
        let sw = Stopwords::english();
        let words: Vec<String> = ["the", "a", "an", "of"].iter().map(|s| s.to_string()).collect();
        assert!(sw.remove(&words).is_empty());
    }
}
