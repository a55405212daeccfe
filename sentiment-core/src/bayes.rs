//! # Classificador Naive Bayes (Presença de Palavras)
//!
//! Modelo generativo que estima P(classe | features) assumindo independência
//! condicional entre as features dado o rótulo:
//!
//! $$ P(y|x) \propto P(y) \cdot \prod_i P(f_i = \text{true} \mid y) $$
//!
//! - **Priors** P(y): frequência de cada classe no conjunto de treino.
//! - **Condicionais** P(palavra presente | y): fração de documentos da classe
//!   que contêm a palavra, com suavização de Laplace `(n + 1) / (N + 2)` para
//!   nunca zerar uma probabilidade.
//! - **Escore**: soma de logaritmos para evitar underflow numérico.
//!
//! O modelo é ajustado exatamente uma vez na inicialização e mantido imutável
//! pelo resto da vida do processo — não há treino incremental. Features nunca
//! vistas no treino são ignoradas na classificação (comportamento do
//! classificador de referência). Um mapa de features vazio ainda produz um
//! rótulo válido, decidido apenas pelos priors.

use std::collections::{HashMap, HashSet};

use crate::corpus::Sentiment;
use crate::features::FeatureMap;

/// Par (features, rótulo) usado no treino e na avaliação.
pub type FeatureSet = (FeatureMap, Sentiment);

/// Ordem fixa das classes, usada para desempate determinístico.
const LABELS: [Sentiment; 2] = [Sentiment::Positive, Sentiment::Negative];

/// Classificador Naive Bayes sobre features binárias de presença.
#[derive(Debug, Clone, Default)]
pub struct NaiveBayesClassifier {
    /// Total de documentos de treino por classe.
    label_counts: HashMap<Sentiment, usize>,
    /// Quantos documentos de cada classe contêm cada palavra.
    word_doc_counts: HashMap<Sentiment, HashMap<String, usize>>,
    /// Nomes de features vistos no treino (de qualquer classe).
    known_features: HashSet<String>,
    /// Total de documentos de treino.
    total: usize,
}

impl NaiveBayesClassifier {
    /// Ajusta o modelo a partir dos pares (features, rótulo) do treino.
    pub fn train(pairs: &[FeatureSet]) -> Self {
        let mut model = Self::default();
        model.total = pairs.len();

        for (features, label) in pairs {
            *model.label_counts.entry(*label).or_insert(0) += 1;
            let counts = model.word_doc_counts.entry(*label).or_default();
            for word in features.keys() {
                *counts.entry(word.clone()).or_insert(0) += 1;
                model.known_features.insert(word.clone());
            }
        }
        model
    }

    /// ln P(palavra presente | classe), com suavização de Laplace.
    fn ln_cond(&self, word: &str, label: Sentiment) -> f64 {
        let n_label = self.label_counts.get(&label).copied().unwrap_or(0) as f64;
        let n_word = self
            .word_doc_counts
            .get(&label)
            .and_then(|c| c.get(word))
            .copied()
            .unwrap_or(0) as f64;
        ((n_word + 1.0) / (n_label + 2.0)).ln()
    }

    /// ln P(classe) a partir das frequências do treino.
    fn ln_prior(&self, label: Sentiment) -> f64 {
        let n = self.label_counts.get(&label).copied().unwrap_or(0) as f64;
        // Laplace também no prior, para o caso degenerado de classe ausente
        ((n + 1.0) / (self.total as f64 + 2.0)).ln()
    }

    /// Classifica um mapa de features, retornando sempre um rótulo válido.
    ///
    /// Determinístico dado o modelo ajustado. Features desconhecidas são
    /// ignoradas; um mapa vazio decide pelos priors. Empate exato resolve
    /// pela ordem fixa das classes.
    pub fn classify(&self, features: &FeatureMap) -> Sentiment {
        // Ordena as palavras antes de somar: a soma em ponto flutuante passa a
        // independer da ordem de iteração do HashMap, garantindo o mesmo
        // resultado entre execuções.
        let mut words: Vec<&str> = features.keys().map(String::as_str).collect();
        words.sort_unstable();

        let mut best = LABELS[0];
        let mut best_score = f64::NEG_INFINITY;

        for label in LABELS {
            let mut score = self.ln_prior(label);
            for word in &words {
                if self.known_features.contains(*word) {
                    score += self.ln_cond(word, label);
                }
            }
            if score > best_score {
                best_score = score;
                best = label;
            }
        }
        best
    }

    /// Fração de acertos sobre os pares de teste.
    pub fn accuracy(&self, test_pairs: &[FeatureSet]) -> f64 {
        if test_pairs.is_empty() {
            return 0.0;
        }
        let correct = test_pairs
            .iter()
            .filter(|(features, label)| self.classify(features) == *label)
            .count();
        correct as f64 / test_pairs.len() as f64
    }
}

/// Particiona os featuresets embaralhados em treino/teste na fronteira `ratio`.
///
/// As duas partições são faixas de índice disjuntas que cobrem todo o
/// dataset: `len(treino) + len(teste) == len(dataset)`, sem reamostragem.
pub fn train_test_split(
    mut featuresets: Vec<FeatureSet>,
    ratio: f64,
) -> (Vec<FeatureSet>, Vec<FeatureSet>) {
    let boundary = (featuresets.len() as f64 * ratio) as usize;
    let test = featuresets.split_off(boundary);
    (featuresets, test)
}
