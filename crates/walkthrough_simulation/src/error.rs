//! Ошибки загрузки (config + scene descriptions)
//!
//! Core loop ошибок не генерирует: not-loaded → silent no-op, collision → rollback.
//! Ошибки здесь принадлежат loader-слою (файлы, парсинг RON).

use std::path::PathBuf;

/// Ошибка загрузки `WalkthroughConfig`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Ошибка загрузки scene description (headless asset loader)
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("failed to read scene {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scene {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}
