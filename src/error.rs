// ============================================
// src/error.rs
// エラー型
// ============================================

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Difficulty;

/// 起動時の設定チェックで見つかる問題
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{difficulty}: only {pool} countries for {options} options")]
    PoolTooSmall {
        difficulty: Difficulty,
        pool: usize,
        options: usize,
    },
    #[error("{difficulty}: options_count must be at least 2 (got {options})")]
    TooFewOptions { difficulty: Difficulty, options: usize },
    #[error("{difficulty}: question_count must be at least 1")]
    NoQuestions { difficulty: Difficulty },
    #[error("{difficulty}: duplicate country name {name:?}")]
    DuplicateName { difficulty: Difficulty, name: String },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 効果音の再生失敗 (ログに出すだけ)
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("terminal bell failed: {0}")]
    Bell(#[from] std::io::Error),
}

/// main まで伝わるエラー
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
