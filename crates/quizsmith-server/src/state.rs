use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use tera::Tera;
use tokio::sync::Mutex;
use uuid::Uuid;

use quizsmith_core::models::quiz::Quiz;
use quizsmith_sampler::ChunkConfig;

use crate::config::ServerConfig;

/// Shared application state.
///
/// Sessions hold at most one quiz each; a new generate action replaces the
/// session's previous quiz wholesale. Nothing here survives the process.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub aws: Arc<aws_config::SdkConfig>,
    pub chunking: ChunkConfig,
    pub sessions: Arc<Mutex<HashMap<Uuid, Quiz>>>,
    pub templates: Arc<Tera>,
    /// Directory for per-request upload temp files.
    pub temp_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(config: ServerConfig, aws: aws_config::SdkConfig, templates: Tera) -> Self {
        Self {
            config: Arc::new(config),
            aws: Arc::new(aws),
            chunking: ChunkConfig::default(),
            sessions: Arc::new(Mutex::new(HashMap::new())),
            templates: Arc::new(templates),
            temp_dir: Arc::new(std::env::temp_dir()),
        }
    }

    /// Override the temp-file directory (used by tests to observe cleanup).
    pub fn with_temp_dir(mut self, dir: PathBuf) -> Self {
        self.temp_dir = Arc::new(dir);
        self
    }
}
