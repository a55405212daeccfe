//! # Pipeline de Sentimento — Orquestrador com Eventos Observáveis
//!
//! Coordena todos os módulos (normalizador, tokenizador, stopwords, stemmer,
//! features, Naive Bayes, vocabulário) e emite eventos em cada passo via um
//! canal Rust (`mpsc`), permitindo que o servidor WebSocket transmita o
//! progresso passo-a-passo para o cliente.
//!
//! ## Sequência de inicialização (uma vez por processo)
//!
//! carregar corpus → normalizar → embaralhar (semente fixa) → extrair
//! featuresets → divisão 80/20 → treinar Naive Bayes → medir acurácia →
//! construir vocabulário.
//!
//! Depois disso todo o estado é somente-leitura: o pipeline é um objeto de
//! contexto imutável passado ao handler interativo, não estado global.
//!
//! ## Sequência por submissão do usuário
//!
//! 1. limpeza (URLs, menções, entidades, pontuação, dígitos)
//! 2. case folding
//! 3. tokenização
//! 4. remoção de stopwords
//! 5. stemming dos tokens filtrados
//! 6. features de presença dos tokens filtrados (NÃO radicalizados)
//! 7. classificação
//! 8. justificativa fixa por rótulo
//! 9. interseção dos tokens crus com o vocabulário
//! 10. sentença tokenizada com as palavras contribuintes marcadas
//!
//! Entrada vazia ou só de espaços: nenhum processamento, nenhum evento.

use std::sync::mpsc;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bayes::{train_test_split, FeatureSet, NaiveBayesClassifier};
use crate::corpus::{self, Corpus, LabeledSample, Sentiment};
use crate::features::extract_features;
use crate::normalizer::Normalizer;
use crate::stemmer::WordStemmer;
use crate::stopwords::Stopwords;
use crate::tokenizer::{token_texts, tokenize};
use crate::vocabulary::Vocabulary;

/// Semente fixa do embaralhamento: acurácia e classificações reproduzíveis
/// entre execuções com o mesmo corpus.
pub const SHUFFLE_SEED: u64 = 42;

/// Fronteira da divisão treino/teste.
pub const TRAIN_RATIO: f64 = 0.8;

/// Uma palavra da sentença renderizada, marcada ou não como contribuinte.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HighlightedWord {
    pub text: String,
    pub contributing: bool,
}

/// Eventos emitidos pelo pipeline durante a análise de uma submissão.
///
/// Cada variante corresponde a um passo visível na UI; o frontend renderiza
/// a saída de cada passo antes do próximo começar.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// **Passo 1**: Limpeza (URLs, menções, entidades HTML, pontuação, dígitos).
    Cleaned { text: String },
    /// **Passo 2**: Case folding.
    CaseFolded { text: String },
    /// **Passo 3**: Tokenização.
    Tokenized { tokens: Vec<String>, total: usize },
    /// **Passo 4**: Remoção de stopwords.
    StopwordsRemoved { tokens: Vec<String> },
    /// **Passo 5**: Stemming dos tokens filtrados.
    Stemmed { tokens: Vec<String> },
    /// **Passo 6**: Rótulo previsto + justificativa fixa por rótulo.
    Classified {
        sentiment: Sentiment,
        rationale: String,
    },
    /// **Passo 7**: Palavras da entrada presentes no vocabulário.
    ContributingWords { words: Vec<String> },
    /// **Passo 8**: Sentença tokenizada com as contribuintes marcadas.
    Highlighted { words: Vec<HighlightedWord> },
    /// **Conclusão**: resultado consolidado.
    Done {
        sentiment: Sentiment,
        processing_ms: u64,
    },
}

/// Resultado consolidado de uma análise síncrona.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub cleaned: String,
    pub case_folded: String,
    pub tokens: Vec<String>,
    pub without_stopwords: Vec<String>,
    pub stems: Vec<String>,
    pub sentiment: Sentiment,
    pub rationale: String,
    pub contributing_words: Vec<String>,
    pub highlighted: Vec<HighlightedWord>,
    pub processing_ms: u64,
}

/// O pipeline de análise de sentimento.
///
/// Contexto imutável construído uma única vez na inicialização e compartilhado
/// (somente-leitura) por todas as requisições da interface.
pub struct SentimentPipeline {
    classifier: NaiveBayesClassifier,
    vocabulary: Vocabulary,
    normalizer: Normalizer,
    stemmer: WordStemmer,
    stopwords: Stopwords,
    accuracy: f64,
    source: &'static str,
}

impl SentimentPipeline {
    /// Cria o pipeline com o corpus embutido, treinando o modelo na hora.
    pub fn new() -> Self {
        Self::with_corpus(&Corpus::embedded())
    }

    /// Cria o pipeline a partir de um corpus já carregado.
    pub fn with_corpus(corpus: &Corpus) -> Self {
        let normalizer = Normalizer::new();
        let stemmer = WordStemmer::new();
        let stopwords = Stopwords::english();

        // Normaliza o corpus inteiro antes de qualquer outra coisa
        let mut dataset: Vec<LabeledSample> = corpus
            .samples()
            .into_iter()
            .map(|s| LabeledSample {
                text: normalizer.clean(&s.text),
                sentiment: s.sentiment,
            })
            .collect();

        // Embaralha com semente fixa para divisão reproduzível
        let mut rng = StdRng::seed_from_u64(SHUFFLE_SEED);
        dataset.shuffle(&mut rng);

        // Featuresets de treino: texto case-folded e tokenizado, SEM filtro
        // de stopwords e SEM stemming (o vocabulário de exibição é que filtra)
        let featuresets: Vec<FeatureSet> = dataset
            .par_iter()
            .map(|sample| {
                let words = token_texts(&tokenize(&sample.text.to_lowercase()));
                (extract_features(&words), sample.sentiment)
            })
            .collect();

        let (train_set, test_set) = train_test_split(featuresets, TRAIN_RATIO);
        let classifier = NaiveBayesClassifier::train(&train_set);
        let accuracy = classifier.accuracy(&test_set);

        let texts: Vec<String> = dataset.into_iter().map(|s| s.text).collect();
        let vocabulary = Vocabulary::build(&texts, &stemmer, &stopwords);

        Self {
            classifier,
            vocabulary,
            normalizer,
            stemmer,
            stopwords,
            accuracy,
            source: corpus::source(),
        }
    }

    /// Acurácia medida na divisão de teste (fração entre 0 e 1).
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Acurácia formatada como porcentagem com duas casas decimais.
    pub fn accuracy_display(&self) -> String {
        format!("{:.2}%", self.accuracy * 100.0)
    }

    /// Rótulo da fonte do dataset para a tela inicial.
    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Executa o pipeline enviando um evento por passo visível.
    ///
    /// Entrada vazia ou só de espaços: retorna imediatamente sem emitir
    /// nenhum evento (nenhuma saída é renderizada, silenciosamente).
    pub fn analyze_streaming(&self, text: &str, tx: mpsc::Sender<PipelineEvent>) {
        if text.trim().is_empty() {
            return;
        }
        let start = std::time::Instant::now();

        // === Passo 1: Limpeza ===
        let cleaned = self.normalizer.clean(text);
        let _ = tx.send(PipelineEvent::Cleaned {
            text: cleaned.clone(),
        });

        // === Passo 2: Case folding ===
        let case_folded = cleaned.to_lowercase();
        let _ = tx.send(PipelineEvent::CaseFolded {
            text: case_folded.clone(),
        });

        // === Passo 3: Tokenização ===
        let words = token_texts(&tokenize(&case_folded));
        let _ = tx.send(PipelineEvent::Tokenized {
            tokens: words.clone(),
            total: words.len(),
        });

        // === Passo 4: Remoção de stopwords ===
        let filtered = self.stopwords.remove(&words);
        let _ = tx.send(PipelineEvent::StopwordsRemoved {
            tokens: filtered.clone(),
        });

        // === Passo 5: Stemming dos tokens filtrados ===
        let stems = self.stemmer.stem_all(&filtered);
        let _ = tx.send(PipelineEvent::Stemmed { tokens: stems });

        // === Passos 6-8: Features (filtrados, não radicalizados) + classificação ===
        let features = extract_features(&filtered);
        let sentiment = self.classifier.classify(&features);
        let _ = tx.send(PipelineEvent::Classified {
            sentiment,
            rationale: sentiment.rationale().to_string(),
        });

        // === Passo 9: Interseção dos tokens crus com o vocabulário ===
        let contributing: Vec<String> = words
            .iter()
            .filter(|w| self.vocabulary.contains(w))
            .cloned()
            .collect();
        let _ = tx.send(PipelineEvent::ContributingWords {
            words: contributing,
        });

        // === Passo 10: Sentença com as contribuintes marcadas ===
        let highlighted: Vec<HighlightedWord> = words
            .iter()
            .map(|w| HighlightedWord {
                text: w.clone(),
                contributing: self.vocabulary.contains(w),
            })
            .collect();
        let _ = tx.send(PipelineEvent::Highlighted { words: highlighted });

        let _ = tx.send(PipelineEvent::Done {
            sentiment,
            processing_ms: start.elapsed().as_millis() as u64,
        });
    }

    /// Processa o texto de forma síncrona e retorna o resultado consolidado.
    ///
    /// Retorna `None` para entrada vazia ou só de espaços.
    pub fn analyze(&self, text: &str) -> Option<AnalysisReport> {
        let (tx, rx) = mpsc::channel();
        self.analyze_streaming(text, tx);

        let mut cleaned = String::new();
        let mut case_folded = String::new();
        let mut tokens = Vec::new();
        let mut without_stopwords = Vec::new();
        let mut stems = Vec::new();
        let mut sentiment = None;
        let mut rationale = String::new();
        let mut contributing_words = Vec::new();
        let mut highlighted = Vec::new();
        let mut processing_ms = 0;

        while let Ok(event) = rx.recv() {
            match event {
                PipelineEvent::Cleaned { text } => cleaned = text,
                PipelineEvent::CaseFolded { text } => case_folded = text,
                PipelineEvent::Tokenized { tokens: t, .. } => tokens = t,
                PipelineEvent::StopwordsRemoved { tokens: t } => without_stopwords = t,
                PipelineEvent::Stemmed { tokens: t } => stems = t,
                PipelineEvent::Classified {
                    sentiment: s,
                    rationale: r,
                } => {
                    sentiment = Some(s);
                    rationale = r;
                }
                PipelineEvent::ContributingWords { words } => contributing_words = words,
                PipelineEvent::Highlighted { words } => highlighted = words,
                PipelineEvent::Done {
                    processing_ms: ms, ..
                } => processing_ms = ms,
            }
        }

        sentiment.map(|sentiment| AnalysisReport {
            cleaned,
            case_folded,
            tokens,
            without_stopwords,
            stems,
            sentiment,
            rationale,
            contributing_words,
            highlighted,
            processing_ms,
        })
    }
}

impl Default for SentimentPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_trains_and_measures_accuracy() {
        let pipeline = SentimentPipeline::new();
        let acc = pipeline.accuracy();
        assert!((0.0..=1.0).contains(&acc));
        assert!(pipeline.accuracy_display().ends_with('%'));
        assert!(!pipeline.vocabulary().is_empty());
    }

    #[test]
    fn test_scenario_love_this_great() {
        let pipeline = SentimentPipeline::new();
        let report = pipeline
            .analyze("I love this! http://x.co #great")
            .expect("entrada não-vazia produz resultado");

        // Normalizador: sem URL, sem pontuação solta
        assert!(!report.cleaned.contains("http"));
        assert!(!report.cleaned.contains('!'));
        // Tokenizador: ordem preservada
        assert_eq!(report.tokens, vec!["i", "love", "this", "great"]);
        // "love" e "great" são termos fortes do corpus positivo
        assert_eq!(report.sentiment, Sentiment::Positive);
        assert!(report.contributing_words.contains(&"love".to_string()));
        assert!(report.contributing_words.contains(&"great".to_string()));
        // Sentença destacada cobre todos os tokens
        assert_eq!(report.highlighted.len(), report.tokens.len());
        assert!(report
            .highlighted
            .iter()
            .any(|w| w.text == "love" && w.contributing));
    }

    #[test]
    fn test_blank_input_produces_nothing() {
        let pipeline = SentimentPipeline::new();
        assert!(pipeline.analyze("").is_none());
        assert!(pipeline.analyze("   \t  ").is_none());

        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming("   ", tx);
        assert!(rx.try_iter().next().is_none());
    }

    #[test]
    fn test_stopword_only_input_still_classifies() {
        let pipeline = SentimentPipeline::new();
        let report = pipeline.analyze("the a an of").expect("resultado");
        assert!(report.without_stopwords.is_empty());
        assert!(report.stems.is_empty());
        // Mesmo sem features o classificador retorna um rótulo válido
        assert!(matches!(
            report.sentiment,
            Sentiment::Positive | Sentiment::Negative
        ));
    }

    #[test]
    fn test_deterministic_across_instances() {
        let a = SentimentPipeline::new();
        let b = SentimentPipeline::new();
        assert_eq!(a.accuracy(), b.accuracy());

        let text = "what a terrible and awful day, I hate it";
        let ra = a.analyze(text).expect("resultado");
        let rb = b.analyze(text).expect("resultado");
        assert_eq!(ra.sentiment, rb.sentiment);
        assert_eq!(ra.tokens, rb.tokens);
    }

    #[test]
    fn test_negative_scenario() {
        let pipeline = SentimentPipeline::new();
        let report = pipeline
            .analyze("this is the worst, I hate this awful service")
            .expect("resultado");
        assert_eq!(report.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_event_order_is_the_display_order() {
        let pipeline = SentimentPipeline::new();
        let (tx, rx) = mpsc::channel();
        pipeline.analyze_streaming("I love this great day", tx);
        let events: Vec<PipelineEvent> = rx.try_iter().collect();

        assert!(matches!(events.first(), Some(PipelineEvent::Cleaned { .. })));
        assert!(matches!(events.get(1), Some(PipelineEvent::CaseFolded { .. })));
        assert!(matches!(events.get(2), Some(PipelineEvent::Tokenized { .. })));
        assert!(matches!(
            events.get(3),
            Some(PipelineEvent::StopwordsRemoved { .. })
        ));
        assert!(matches!(events.get(4), Some(PipelineEvent::Stemmed { .. })));
        assert!(matches!(events.last(), Some(PipelineEvent::Done { .. })));
    }
}
