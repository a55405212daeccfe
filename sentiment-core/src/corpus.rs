//! # Corpus de Tweets Rotulados (Positivo / Negativo)
//!
//! Conjunto fixo de textos curtos em inglês no estilo do dataset
//! `twitter_samples` do NLTK: duas sequências ordenadas de strings brutas,
//! uma positiva e uma negativa. O corpus embutido é usado por padrão;
//! opcionalmente os mesmos dados podem ser carregados de arquivos JSON
//! (`positive_tweets.json` / `negative_tweets.json`), cada um contendo um
//! array de strings.
//!
//! Os textos são imutáveis após o carregamento. Nenhum esquema além de
//! "sequência de strings" é exigido.

use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rótulo de sentimento previsto ou anotado.
///
/// Define o "vocabulário" de classes do modelo. O classificador sempre
/// retorna uma destas duas variantes, mesmo para entradas degeneradas
/// (ex: apenas stopwords), decidindo pelos priors do treino.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Sentimento positivo. Ex: "I love this!", "what a great day".
    Positive,
    /// Sentimento negativo. Ex: "this is awful", "worst day ever".
    Negative,
}

impl Sentiment {
    /// Rótulo textual usado na UI e na serialização de resultados.
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Sentimento Positivo",
            Sentiment::Negative => "Sentimento Negativo",
        }
    }

    /// Cor CSS para destaque na UI.
    pub fn color(&self) -> &'static str {
        match self {
            Sentiment::Positive => "#10b981", // verde esmeralda
            Sentiment::Negative => "#ef4444", // vermelho
        }
    }

    /// Ícone emoji para a classe.
    pub fn icon(&self) -> &'static str {
        match self {
            Sentiment::Positive => "😊",
            Sentiment::Negative => "😞",
        }
    }

    /// Frase fixa de justificativa exibida junto com a classificação.
    pub fn rationale(&self) -> &'static str {
        match self {
            Sentiment::Positive => {
                "Texto classificado como sentimento POSITIVO. Isso pode se dever ao uso de \
                 palavras positivas, expressões positivas ou um bom contexto."
            }
            Sentiment::Negative => {
                "Texto classificado como sentimento NEGATIVO. Isso pode se dever ao uso de \
                 palavras negativas, expressões negativas ou um contexto ruim."
            }
        }
    }
}

/// Uma amostra rotulada do corpus: (texto bruto, sentimento).
///
/// Criada uma única vez no carregamento; imutável depois disso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledSample {
    pub text: String,
    pub sentiment: Sentiment,
}

/// Erros fatais de carregamento do corpus.
///
/// Qualquer falha aqui aborta a inicialização antes da UI ser servida.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("falha ao ler o arquivo de corpus {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("JSON inválido no arquivo de corpus {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Tweets positivos embutidos (amostra no estilo do `twitter_samples`).
const POSITIVE_TWEETS: &[&str] = &[
    "I love this song so much! Best thing I heard all week :)",
    "@anna thanks for the follow! Happy to connect :)",
    "What a great day at the beach with friends! http://pic.x.co/abc",
    "Just got my exam results and I passed! So happy right now :D",
    "This new phone is amazing, I love the camera!",
    "Congrats @pedro on the new job! You deserve it, awesome news",
    "Such a beautiful sunset tonight, feeling blessed",
    "The concert last night was incredible, best band ever!",
    "Thank you all for the birthday wishes, I feel so loved :)",
    "Finally finished my project and it works perfectly! Great success",
    "My little sister baked me a cake, she is the sweetest person",
    "Loving the new update, everything runs so smooth now",
    "Won the match today! Proud of the whole team, brilliant game",
    "This coffee shop has the best muffins, delicious and cheap!",
    "Good morning everyone! Hope you have a fantastic Friday :)",
    "The movie was great, I laughed so much, totally recommend it",
    "Got upgraded to first class for free, what a lucky day!",
    "So excited for the holidays, going to see my family at last",
    "My garden is blooming, I love how the roses look this spring",
    "Best pizza in town, great staff and a lovely place, love it!",
    "Reached 1000 followers today, thanks everyone, you are amazing!",
    "The weather is great for a picnic, love days like this",
    "Adopted a puppy today and he is adorable, my heart is full",
    "Great workout this morning, feeling strong and energized!",
    "The talk was inspiring, learned so much, thank you @conf2015",
    "Happy anniversary to my wonderful parents, 30 years together!",
    "Just landed in Paris! The city looks magical at night &#10024;",
    "My team shipped the release on time, proud of everyone involved",
    "Love this book, could not put it down all weekend, brilliant writing",
    "Delicious dinner with old friends, nights like this are the best",
    "Passed my driving test on the first try! So relieved and happy",
    "The kids loved the museum trip, smiles everywhere today :)",
    "New personal record on the 10k run! Hard work pays off",
    "Thanks @support for the quick help, excellent customer service!",
    "Fresh snow on the mountains, the view is absolutely stunning",
    "Got accepted into my dream university! Dreams do come true",
    "Lovely surprise in the mail today, thank you so much @carla :)",
    "The new bakery downtown is fantastic, everything smells divine",
    "Celebrating 5 years at a job I truly enjoy, grateful every day",
    "Sunday brunch with pancakes and great company, love it, life is good",
    "My painting got selected for the exhibition! So thrilled right now",
    "The baby said her first word today, happiest moment of the year",
    "Finally fixed that bug, the demo ran perfectly, what a relief!",
    "Beautiful wedding yesterday, wishing the couple all the joy",
    "Free upgrade and a window seat, this trip starts great :)",
    "The volunteers did an awesome job cleaning the park today",
    "Top marks on the essay I worked so hard on, feeling proud!",
    "Such kind neighbors, they helped me move and brought dinner too",
];

/// Tweets negativos embutidos.
const NEGATIVE_TWEETS: &[&str] = &[
    "I hate waiting in line for hours, this is ridiculous :(",
    "Worst customer service ever, nobody answers the phone",
    "My flight got cancelled again, this airline is terrible",
    "Feeling so sad today, everything is going wrong",
    "The food was awful and cold, never coming back to this place",
    "@provider my internet has been down all day, this is horrible",
    "Lost my wallet on the bus, what a miserable start to the week",
    "This movie was boring and way too long, waste of money",
    "Stuck in traffic for two hours, I am so annoyed right now",
    "My laptop crashed and I lost all my work, I want to cry",
    "The hotel room was dirty and noisy, very disappointed",
    "Failed the exam even after studying all night, feeling hopeless",
    "It has been raining all week, my plans are ruined again",
    "The update broke everything, nothing works anymore, useless",
    "Got charged twice for the same order and no refund yet, furious",
    "My phone screen cracked this morning, worst luck ever :(",
    "The queue at the clinic took forever and the staff was rude",
    "Missed the last train home, now stranded in the cold, awful night",
    "The concert was cancelled last minute, so disappointed &#128546;",
    "Another deadline moved up, I am exhausted and stressed out",
    "The package arrived broken, terrible packaging, very angry",
    "My car would not start again, repair costs are killing me",
    "Headache all day and the painkillers do nothing, miserable",
    "They lost my luggage and offered nothing, horrible experience",
    "The restaurant messed up our order twice, dreadful service",
    "Neighbors played loud music until 4am, I barely slept, so tired",
    "Rent went up again, this city is becoming impossible to afford",
    "The meeting ran three hours with no decisions, waste of time",
    "Spilled coffee on my new shirt before the interview, what a mess",
    "The wifi at this cafe is painfully slow, cannot get anything done",
    "My favorite show got cancelled, this is the worst news today",
    "Burned the dinner I spent two hours cooking, so frustrated :(",
    "The gym is always crowded now, waited 40 minutes for a machine",
    "Got soaked in the rain because the bus never came, horrible",
    "The printer jammed right before my presentation, hate this thing",
    "Team lost again in the final minute, heartbreaking defeat",
    "Allergies are destroying me this week, sneezing nonstop, ugh",
    "The app keeps crashing every time I open it, so annoying",
    "Paid extra for fast shipping and it arrived a week late, angry",
    "My plants all died while I was away, coming home was depressing",
    "The dentist appointment was painful and expensive, awful day",
    "Power outage in the middle of the game, unbelievable, furious",
    "Scratched my car in the parking lot, repairs will cost a fortune",
    "The interview went badly, I froze on every question, feeling down",
    "Cold coffee, burnt toast and a parking ticket, terrible morning",
    "The new policy cut our breaks, everyone at work is upset",
    "Sat next to someone who talked the entire flight, exhausting trip",
    "My bike got stolen outside the library, people are the worst",
];

/// O corpus completo: duas sequências ordenadas de textos brutos.
#[derive(Debug, Clone)]
pub struct Corpus {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Corpus {
    /// Constrói o corpus a partir das amostras embutidas.
    pub fn embedded() -> Self {
        Self {
            positive: POSITIVE_TWEETS.iter().map(|s| s.to_string()).collect(),
            negative: NEGATIVE_TWEETS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Carrega o corpus de um diretório contendo `positive_tweets.json` e
    /// `negative_tweets.json` (arrays JSON de strings).
    ///
    /// Qualquer arquivo ausente ou malformado é fatal ([`CorpusError`]):
    /// a inicialização aborta antes da UI ser renderizada.
    pub fn from_json_dir(dir: &Path) -> Result<Self, CorpusError> {
        Ok(Self {
            positive: read_string_array(&dir.join("positive_tweets.json"))?,
            negative: read_string_array(&dir.join("negative_tweets.json"))?,
        })
    }

    /// Sequência ordenada de textos positivos.
    pub fn positive(&self) -> &[String] {
        &self.positive
    }

    /// Sequência ordenada de textos negativos.
    pub fn negative(&self) -> &[String] {
        &self.negative
    }

    /// Todas as amostras rotuladas, positivas primeiro, na ordem original.
    pub fn samples(&self) -> Vec<LabeledSample> {
        self.positive
            .iter()
            .map(|t| LabeledSample {
                text: t.clone(),
                sentiment: Sentiment::Positive,
            })
            .chain(self.negative.iter().map(|t| LabeledSample {
                text: t.clone(),
                sentiment: Sentiment::Negative,
            }))
            .collect()
    }

    /// Total de amostras (positivas + negativas).
    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

fn read_string_array(path: &Path) -> Result<Vec<String>, CorpusError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CorpusError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CorpusError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Rótulo estático da fonte do dataset, exibido na inicialização da UI.
pub fn source() -> &'static str {
    "NLTK twitter_samples (amostra embutida)"
}

/// Textos de demonstração para a interface web
pub fn demo_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Positivo",
            "I love this! The new design is great and the team did an amazing job :)",
        ),
        (
            "Negativo",
            "This is the worst service I have ever seen, I hate waiting and the staff was rude.",
        ),
        (
            "Ruído",
            "Check it out http://x.co/deal @shop &#128512; 50% off until 2025!!!",
        ),
        (
            "Apenas stopwords",
            "the a an of to in is it",
        ),
        (
            "Misto",
            "The hotel was lovely but the awful weather ruined our terrible trip home.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_non_empty() {
        let corpus = Corpus::embedded();
        assert!(!corpus.positive().is_empty());
        assert!(!corpus.negative().is_empty());
        assert_eq!(corpus.len(), corpus.positive().len() + corpus.negative().len());
    }

    #[test]
    fn test_samples_order_and_labels() {
        let corpus = Corpus::embedded();
        let samples = corpus.samples();
        assert_eq!(samples.len(), corpus.len());
        // Positivas primeiro, na ordem original
        assert_eq!(samples[0].text, corpus.positive()[0]);
        assert_eq!(samples[0].sentiment, Sentiment::Positive);
        let last = samples.last().unwrap();
        assert_eq!(last.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_from_json_dir_missing_is_fatal() {
        let err = Corpus::from_json_dir(Path::new("/caminho/inexistente"));
        assert!(matches!(err, Err(CorpusError::Read { .. })));
    }

    #[test]
    fn test_rationale_keyed_by_label() {
        assert_ne!(
            Sentiment::Positive.rationale(),
            Sentiment::Negative.rationale()
        );
        assert!(Sentiment::Positive.rationale().contains("POSITIVO"));
        assert!(Sentiment::Negative.rationale().contains("NEGATIVO"));
    }
}
