//! # sentiment-core — Análise de Sentimento com Naive Bayes
//!
//! Este crate implementa um pipeline completo e didático de classificação de
//! sentimento (positivo/negativo) para textos curtos em inglês, no estilo do
//! dataset `twitter_samples` do NLTK. Todo o estado é construído uma vez na
//! inicialização e imutável depois disso.
//!
//! ## Arquitetura do Sistema
//!
//! O fluxo de inicialização é estritamente sequencial:
//!
//! 1.  **Corpus** ([`corpus`]): dataset fixo de textos rotulados.
//! 2.  **Normalização** ([`normalizer`]): remoção de URLs, menções, entidades
//!     HTML, pontuação e dígitos.
//! 3.  **Tokenização** ([`tokenizer`]): divisão em palavras com offsets
//!     preservados para destaque na interface.
//! 4.  **Featuresets** ([`features`]): mapa de presença palavra → `true`.
//! 5.  **Treino** ([`bayes`]): Naive Bayes sobre a divisão 80/20 embaralhada
//!     com semente fixa, com acurácia medida na partição de teste.
//! 6.  **Vocabulário** ([`vocabulary`]): os 2000 radicais mais frequentes,
//!     sem stopwords, para o destaque de palavras contribuintes.
//!
//! Depois vem um único ramo reativo: a cada submissão do usuário o
//! [`pipeline`] reexecuta normalização, tokenização, filtragem, stemming e
//! classificação, emitindo um evento observável por passo.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use sentiment_core::SentimentPipeline;
//!
//! // 1. Instancia o pipeline (carrega o corpus e treina o modelo)
//! let pipeline = SentimentPipeline::new();
//!
//! // 2. Classifica um texto
//! if let Some(report) = pipeline.analyze("I love this! http://x.co #great") {
//!     println!("{} — {}", report.sentiment.label(), report.rationale);
//!     println!("Contribuintes: {:?}", report.contributing_words);
//! }
//! ```
//!
//! ## Módulos Principais
//!
//! - [`pipeline`]: orquestrador que conecta todos os estágios.
//! - [`normalizer`]: limpeza do texto bruto.
//! - [`bayes`]: treino, classificação e acurácia.
//! - [`corpus`]: dataset rotulado embutido (ou carregado de JSON).

pub mod bayes;
pub mod corpus;
pub mod features;
pub mod normalizer;
pub mod pipeline;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
pub mod vocabulary;

pub use corpus::{Corpus, CorpusError, LabeledSample, Sentiment};
pub use pipeline::{AnalysisReport, HighlightedWord, PipelineEvent, SentimentPipeline};
pub use tokenizer::Token;
