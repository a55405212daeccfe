//! # Tokenizador de Palavras
//!
//! Divide o texto normalizado em tokens de palavra, preservando a posição
//! original de cada um (offsets de byte). Os offsets permitem destacar os
//! tokens contribuintes na interface web sem alterar a formatação original.
//!
//! A segmentação segue as fronteiras de palavra do Unicode (UAX #29) via
//! `unicode-segmentation`; segmentos sem nenhum caractere alfanumérico
//! (espaços, pontuação residual) são descartados. A ordem é preservada e o
//! case folding NÃO acontece aqui — é um passo explícito do pipeline.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto de entrada.
///
/// Unidade atômica do pipeline. Mantém a referência exata de posição no
/// texto original (`start` e `end`), crucial para o destaque (highlight)
/// das palavras contribuintes na interface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "love", "great").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Tokeniza um texto em palavras, na ordem original.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_word_bound_indices()
        .filter(|(_, seg)| seg.chars().any(char::is_alphanumeric))
        .enumerate()
        .map(|(index, (start, seg))| Token {
            text: seg.to_string(),
            start,
            end: start + seg.len(),
            index,
        })
        .collect()
}

/// Apenas os textos dos tokens, na mesma ordem.
pub fn token_texts(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.text.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("i love this great");
        let texts = token_texts(&tokens);
        assert_eq!(texts, vec!["i", "love", "this", "great"]);
    }

    #[test]
    fn test_tokenize_preserves_offsets() {
        let text = "i love this";
        let tokens = tokenize(text);
        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
        assert_eq!(tokens[1].index, 1);
    }

    #[test]
    fn test_tokenize_skips_non_words() {
        let tokens = tokenize("  wow   cool  ");
        assert_eq!(token_texts(&tokens), vec!["wow", "cool"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   ").is_empty());
    }
}
