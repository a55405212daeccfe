//! # Normalizador de Texto
//!
//! Limpeza do texto bruto antes da tokenização. Remove, nesta ordem:
//!
//! 1. URLs (qualquer token iniciado por `http`)
//! 2. Menções (`@usuario`)
//! 3. Entidades HTML numéricas (`&#128512;`)
//! 4. Pontuação e símbolos não-palavra
//! 5. Sequências de dígitos
//!
//! A ordem importa: menções e entidades precisam ser removidas antes da
//! pontuação, senão o `@` e o `&#` desapareceriam primeiro e deixariam a
//! palavra para trás.
//!
//! É uma função pura e total: qualquer string de entrada produz uma saída,
//! sem modos de falha. Não altera maiúsculas/minúsculas — o case folding é
//! um passo explícito separado do pipeline.

use regex::Regex;

/// Normalizador com os padrões compilados uma única vez.
pub struct Normalizer {
    url: Regex,
    mention: Regex,
    html_entity: Regex,
    punctuation: Regex,
    digits: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            url: Regex::new(r"http\S+").expect("padrão de URL válido"),
            mention: Regex::new(r"@\w+").expect("padrão de menção válido"),
            html_entity: Regex::new(r"&#[0-9]+;").expect("padrão de entidade válido"),
            punctuation: Regex::new(r"[^\w\s]").expect("padrão de pontuação válido"),
            digits: Regex::new(r"[0-9]+").expect("padrão de dígitos válido"),
        }
    }

    /// Remove URLs, menções, entidades HTML, pontuação e dígitos.
    ///
    /// Determinística e idempotente: texto já limpo volta inalterado.
    pub fn clean(&self, text: &str) -> String {
        let text = self.url.replace_all(text, "");
        let text = self.mention.replace_all(&text, "");
        let text = self.html_entity.replace_all(&text, "");
        let text = self.punctuation.replace_all(&text, "");
        let text = self.digits.replace_all(&text, "");
        text.into_owned()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_url() {
        let n = Normalizer::new();
        let out = n.clean("I love this! http://x.co #great");
        assert!(!out.contains("http"));
        assert!(!out.contains("x.co"));
        assert!(out.contains("love"));
        assert!(out.contains("great"));
    }

    #[test]
    fn test_remove_mention() {
        let n = Normalizer::new();
        let out = n.clean("thanks @anna for the follow");
        assert!(!out.contains('@'));
        assert!(!out.contains("anna"));
        assert!(out.contains("thanks"));
    }

    #[test]
    fn test_remove_html_entity_and_digits() {
        let n = Normalizer::new();
        let out = n.clean("party &#128512; at 10pm on floor 3");
        assert!(!out.contains("&#"));
        assert!(!out.contains("128512"));
        assert!(!out.chars().any(|c| c.is_ascii_digit()));
        assert!(out.contains("pm"));
    }

    #[test]
    fn test_remove_punctuation() {
        let n = Normalizer::new();
        let out = n.clean("wow!!! really?? :) #cool");
        assert!(!out.contains('!'));
        assert!(!out.contains('?'));
        assert!(!out.contains('#'));
        assert!(out.contains("cool"));
    }

    #[test]
    fn test_idempotent_and_preserves_case() {
        let n = Normalizer::new();
        let clean = "What a Great day at the beach";
        assert_eq!(n.clean(clean), clean);
        assert_eq!(n.clean(&n.clean("Hello, World!")), n.clean("Hello, World!"));
    }

    #[test]
    fn test_total_over_arbitrary_input() {
        let n = Normalizer::new();
        // Entradas arbitrárias nunca causam falha
        assert_eq!(n.clean(""), "");
        let _ = n.clean("@@@ http:// &#; 123 ::: ");
    }
}
