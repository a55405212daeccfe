//! # Extração de Features (Presença de Palavras)
//!
//! Converte uma sequência de tokens em um mapa `palavra → true`. Modelo
//! bag-of-words de presença: tokens duplicados colapsam em uma entrada,
//! nenhuma noção de frequência ou posição é mantida. A escolha é
//! intencional — o classificador Naive Bayes abaixo opera sobre presença,
//! não sobre contagem.

use std::collections::HashMap;

/// Mapa de presença: cada palavra distinta da entrada → `true`.
pub type FeatureMap = HashMap<String, bool>;

/// Extrai o mapa de presença de uma sequência de palavras.
///
/// O conjunto de chaves da saída é exatamente o conjunto (deduplicado) das
/// palavras de entrada; todo valor é `true`. Entrada vazia → mapa vazio.
pub fn extract_features(words: &[String]) -> FeatureMap {
    words.iter().map(|w| (w.clone(), true)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keys_equal_deduplicated_input() {
        let features = extract_features(&words(&["love", "this", "love", "day"]));
        assert_eq!(features.len(), 3);
        assert!(features.contains_key("love"));
        assert!(features.contains_key("this"));
        assert!(features.contains_key("day"));
    }

    #[test]
    fn test_every_value_is_true() {
        let features = extract_features(&words(&["a", "b", "a"]));
        assert!(features.values().all(|v| *v));
    }

    #[test]
    fn test_empty_input_yields_empty_map() {
        assert!(extract_features(&[]).is_empty());
    }
}
