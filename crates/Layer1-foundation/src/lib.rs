//! # confit-foundation
//!
//! Foundation layer for Confit:
//! - Core: 협력자 계약 (ConfigSource, Compiler, CacheStore) 및 공용 타입
//! - Error: 협력자별 에러 타입 + 파이프라인 통합 에러 (ConfigureError)
//! - Cache: 기본 캐시 저장소 (MemoryStore, FileStore)
//! - Source: 기본 설정 소스 (StaticSource, FileSource)
//!
//! ## 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Layer2: Configurator (파이프라인 + Locator)             │
//! │                     │                                   │
//! │                     ▼                                   │
//! │  Layer1: 계약 (이 레이어)                                │
//! │  ├── ConfigSource ── 원본 설정 내용 제공                  │
//! │  ├── Compiler ────── 내용 → 매핑 컴파일                   │
//! │  └── CacheStore ──── 컴파일 결과 저장/조회                │
//! │        ├── MemoryStore (프로세스 내)                     │
//! │        └── FileStore (키당 JSON 파일 하나)                │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod cache;
pub mod core;
pub mod error;
pub mod source;

// ============================================================================
// Error
// ============================================================================
pub use error::{CacheError, CompileError, ConfigureError, Result, SourceError};

// ============================================================================
// Core (계약 및 타입)
// ============================================================================
pub use core::{
    compile_fn, source_fn, CacheEntry, CacheStore, CompileFn, CompiledConfig, Compiler,
    ConfigSource, SourceFn,
};

// ============================================================================
// Cache Stores
// ============================================================================
pub use cache::{validate_key, FileStore, MemoryStore, RESERVED_KEY_CHARS};

// ============================================================================
// Sources
// ============================================================================
pub use source::{FileSource, StaticSource};
