//! Core Module - 핵심 인터페이스 및 타입
//!
//! Confit의 핵심 계약을 정의합니다.
//!
//! ## 설계 철학
//!
//! 1. **능력별 trait 분리**: 소스/컴파일러/캐시가 각각 독립 인터페이스
//! 2. **타입으로 구분되는 실패**: 협력자마다 전용 에러 타입
//! 3. **명시적 미스**: 캐시 부재는 에러가 아니라 미스 엔트리
//!
//! ## 구성
//!
//! - `types.rs`: 데이터 타입 (CompiledConfig, CacheEntry)
//! - `traits.rs`: 인터페이스 (ConfigSource, Compiler, CacheStore)

pub mod traits;
pub mod types;

// Collaborator traits & adapters
pub use traits::{compile_fn, source_fn, CacheStore, CompileFn, Compiler, ConfigSource, SourceFn};

// Data types
pub use types::{CacheEntry, CompiledConfig};
