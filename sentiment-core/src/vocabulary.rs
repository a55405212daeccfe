//! # Vocabulário de Palavras Contribuintes
//!
//! Conjunto limitado dos radicais mais frequentes do corpus, com stopwords
//! removidas. Usado SOMENTE para decidir quais palavras da entrada são
//! exibidas como "palavras contribuintes" — o treino do classificador usa a
//! presença de todos os tokens, sem passar por este filtro.
//!
//! ## Construção
//!
//! 1. Concatena todos os tokens de todos os textos (minúsculos).
//! 2. Radicaliza cada token.
//! 3. Conta frequências preservando a ordem de primeira ocorrência.
//! 4. Ordena por frequência decrescente; empates mantêm a ordem de
//!    primeira ocorrência (ordenação estável).
//! 5. Corta nos 2000 primeiros radicais distintos.
//! 6. Remove os que pertencem ao conjunto de stopwords.
//!
//! Computado uma vez após o carregamento do corpus; somente-leitura depois.

use std::collections::{HashMap, HashSet};

use crate::stemmer::WordStemmer;
use crate::stopwords::Stopwords;
use crate::tokenizer::tokenize;

/// Limite de radicais distintos considerados antes do filtro de stopwords.
pub const MAX_WORDS: usize = 2000;

/// Conjunto fixo de radicais usados no destaque de palavras contribuintes.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    /// Constrói o vocabulário a partir dos textos (já normalizados) do corpus.
    pub fn build(texts: &[String], stemmer: &WordStemmer, stopwords: &Stopwords) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for text in texts {
            for token in tokenize(&text.to_lowercase()) {
                let stem = stemmer.stem(&token.text);
                if !counts.contains_key(&stem) {
                    first_seen.push(stem.clone());
                }
                *counts.entry(stem).or_insert(0) += 1;
            }
        }

        // sort_by é estável: empates preservam a ordem de primeira ocorrência
        first_seen.sort_by(|a, b| counts[b].cmp(&counts[a]));

        let words = first_seen
            .into_iter()
            .take(MAX_WORDS)
            .filter(|w| !stopwords.is_stopword(w))
            .collect();

        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(texts: &[&str]) -> Vocabulary {
        let texts: Vec<String> = texts.iter().map(|s| s.to_string()).collect();
        Vocabulary::build(&texts, &WordStemmer::new(), &Stopwords::english())
    }

    #[test]
    fn test_contains_stems_of_corpus_words() {
        let vocab = build(&["I love this great day", "love wins"]);
        assert!(vocab.contains("love"));
        assert!(vocab.contains("great"));
    }

    #[test]
    fn test_stopwords_are_removed() {
        let vocab = build(&["the the the love"]);
        assert!(!vocab.contains("the"));
        assert!(vocab.contains("love"));
    }

    #[test]
    fn test_cap_keeps_most_frequent() {
        // 2001 palavras distintas de frequência 1, mais uma palavra repetida:
        // a repetida tem que sobreviver ao corte
        let mut text = String::from("zebra zebra zebra ");
        for i in 0..(MAX_WORDS + 1) {
            text.push_str(&format!("xyzw{i} "));
        }
        let vocab = build(&[text.as_str()]);
        assert!(vocab.contains("zebra"));
        assert!(vocab.len() <= MAX_WORDS);
    }

    #[test]
    fn test_words_are_stemmed() {
        let vocab = build(&["running running dogs"]);
        assert!(vocab.contains("run"));
        assert!(vocab.contains("dog"));
        assert!(!vocab.contains("running"));
    }
}
