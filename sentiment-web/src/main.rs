//! Servidor web Axum com WebSocket para análise de sentimento passo-a-passo

use std::path::Path;
use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::{get, post},
    Router,
};
use sentiment_core::{
    corpus::{demo_texts, Corpus},
    pipeline::{PipelineEvent, SentimentPipeline},
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

/// Estado compartilhado da aplicação
struct AppState {
    pipeline: SentimentPipeline,
}

// SentimentPipeline somente usa &self → é seguro compartilhar entre threads
unsafe impl Send for AppState {}
unsafe impl Sync for AppState {}

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: String,
}

/// Mensagem WebSocket recebida do cliente
#[derive(Deserialize)]
struct WsRequest {
    text: String,
}

/// Página principal com os dados da inicialização já renderizados
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    source: &'static str,
    accuracy: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    // Corpus embutido por padrão; CORPUS_DIR aponta para um diretório com
    // positive_tweets.json / negative_tweets.json. Falha de carga é fatal
    // antes da UI ser servida.
    let corpus = match std::env::var("CORPUS_DIR") {
        Ok(dir) => match Corpus::from_json_dir(Path::new(&dir)) {
            Ok(corpus) => corpus,
            Err(err) => {
                error!("falha fatal ao carregar o corpus: {err}");
                std::process::exit(1);
            }
        },
        Err(_) => Corpus::embedded(),
    };

    info!("Treinando o classificador ({} amostras)...", corpus.len());
    let pipeline = SentimentPipeline::with_corpus(&corpus);
    info!(
        "Fonte do dataset: {} | Acurácia no teste: {}",
        pipeline.source(),
        pipeline.accuracy_display()
    );
    let state = Arc::new(AppState { pipeline });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_handler))
        .route("/ws", get(ws_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    info!("🚀 Servidor de sentimento iniciado em http://localhost:3000");
    axum::serve(listener, app).await.unwrap();
}

/// Retorna a página principal HTML com fonte do dataset e acurácia
async fn index_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let template = IndexTemplate {
        source: state.pipeline.source(),
        accuracy: state.pipeline.accuracy_display(),
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!("falha ao renderizar o template: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Análise via HTTP POST (sem streaming)
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> impl IntoResponse {
    // Entrada vazia: nenhum processamento (silencioso no fluxo da UI)
    match state.pipeline.analyze(&req.text) {
        Some(report) => Json(report).into_response(),
        None => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Texto vazio"})),
        )
            .into_response(),
    }
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(category, text)| {
            serde_json::json!({
                "category": category,
                "text": text
            })
        })
        .collect();
    Json(texts)
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Lógica do WebSocket: recebe texto, executa pipeline e envia um evento por passo
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                // Tenta parsear como JSON {text}; senão usa como texto puro
                let text_str = if let Ok(req) = serde_json::from_str::<WsRequest>(&text) {
                    req.text.trim().to_string()
                } else {
                    text.trim().to_string()
                };

                // Entrada vazia ou só de espaços: ignorada silenciosamente
                if text_str.is_empty() {
                    continue;
                }

                info!("Analisando via WebSocket: {} chars", text_str.len());

                // Roda o pipeline (síncrono) fora do runtime async
                let (tx_std, rx_std) = std::sync::mpsc::channel::<PipelineEvent>();
                let state_for_thread = Arc::clone(&state);
                let text_for_thread = text_str.clone();

                let handle = tokio::task::spawn_blocking(move || {
                    state_for_thread
                        .pipeline
                        .analyze_streaming(&text_for_thread, tx_std);
                });
                handle.await.ok();

                // Coleta os eventos numa Vec (rx_std não é Send)
                let events: Vec<PipelineEvent> = rx_std.try_iter().collect();

                for event in &events {
                    if let Ok(json) = serde_json::to_string(event) {
                        if socket.send(Message::Text(json.into())).await.is_err() {
                            return; // cliente desconectou
                        }
                        // Pequena pausa: cada passo aparece antes do próximo
                        tokio::time::sleep(tokio::time::Duration::from_millis(35)).await;
                    }
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}
