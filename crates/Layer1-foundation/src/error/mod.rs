//! Error types for Confit
//!
//! 모든 에러를 중앙에서 관리. 협력자(캐시/소스/컴파일러)별로 에러 타입을
//! 나누고, 파이프라인은 `ConfigureError`로 묶어서 전파한다.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigureError>;

// ============================================================================
// Configure Error - 파이프라인 통합 에러
// ============================================================================

/// Confit 파이프라인 에러 타입
///
/// 어느 협력자가 실패했는지 variant 태그로 구분한다.
#[derive(Error, Debug)]
pub enum ConfigureError {
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    #[error("Compile error: {0}")]
    Compile(#[from] CompileError),
}

impl ConfigureError {
    /// 캐시 저장소 실패인지 확인
    pub fn is_cache(&self) -> bool {
        matches!(self, ConfigureError::Cache(_))
    }

    /// 설정 소스 실패인지 확인
    pub fn is_source(&self) -> bool {
        matches!(self, ConfigureError::Source(_))
    }

    /// 컴파일 실패인지 확인
    pub fn is_compile(&self) -> bool {
        matches!(self, ConfigureError::Compile(_))
    }
}

// ============================================================================
// Cache Error - 캐시 저장소 에러
// ============================================================================

/// 캐시 저장소 에러 타입
#[derive(Error, Debug)]
pub enum CacheError {
    /// 비어 있거나 예약 문자를 포함한 키
    #[error("Invalid cache key {key:?}: {reason}")]
    InvalidKey { key: String, reason: String },

    /// 파일 백엔드 I/O 실패
    #[error("Cache I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 엔트리 직렬화 실패
    #[error("Cache entry serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// 플랫폼 캐시 디렉터리 없음
    #[error("Cannot find platform cache directory")]
    NoBaseDir,
}

impl CacheError {
    /// InvalidKey 생성 헬퍼
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        CacheError::InvalidKey {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Io 생성 헬퍼
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CacheError::Io {
            path: path.into(),
            source,
        }
    }
}

// ============================================================================
// Source Error - 설정 소스 에러
// ============================================================================

/// 설정 소스 읽기 실패 (메시지 + 선택적 원인)
#[derive(Error, Debug)]
#[error("{message}")]
pub struct SourceError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl SourceError {
    /// 메시지만 담은 에러 생성
    pub fn new(message: impl Into<String>) -> Self {
        SourceError {
            message: message.into(),
            source: None,
        }
    }

    /// 원인 에러를 함께 담은 에러 생성
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        SourceError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 에러 메시지
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ============================================================================
// Compile Error - 컴파일러 에러
// ============================================================================

/// 설정 컴파일 실패 (메시지 + 선택적 원인)
#[derive(Error, Debug)]
#[error("{message}")]
pub struct CompileError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CompileError {
    /// 메시지만 담은 에러 생성
    pub fn new(message: impl Into<String>) -> Self {
        CompileError {
            message: message.into(),
            source: None,
        }
    }

    /// 원인 에러를 함께 담은 에러 생성
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        CompileError {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// 에러 메시지
    pub fn message(&self) -> &str {
        &self.message
    }
}
