//! Core Traits - 핵심 인터페이스 정의
//!
//! Configurator 파이프라인이 기대하는 협력자 인터페이스를 정의합니다.
//! 협력자마다 하나의 능력만 담당하도록 trait를 분리했습니다.
//!
//! ## 파이프라인
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Configurator.run()                                         │
//! │  ├── CacheStore.get("config_cache_item")  ── 히트면 즉시 반환 │
//! │  ├── ConfigSource.main()                  ── 원본 내용 획득   │
//! │  ├── Compiler.compile(content)            ── 매핑으로 변환    │
//! │  └── CacheStore.save(entry)               ── 결과 저장        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use crate::core::types::{CacheEntry, CompiledConfig};
use crate::error::{CacheError, CompileError, SourceError};

// ============================================================================
// Config Source - 설정 소스 인터페이스
// ============================================================================

/// 원본 설정 내용을 제공하는 소스
///
/// 파일, 환경, 네트워크 등 어디서 오든 최상위 설정 내용을 문자열 하나로
/// 반환한다. 읽기 실패는 `SourceError`로 보고한다.
pub trait ConfigSource: Send + Sync {
    /// 최상위 설정 내용 반환
    fn main(&self) -> Result<String, SourceError>;
}

// ============================================================================
// Compiler - 설정 컴파일러 인터페이스
// ============================================================================

/// 원본 내용을 컴파일된 매핑으로 변환하는 컴파일러
///
/// 순수 변환이어야 한다 (내용이 같으면 결과도 같음). 실패는 전부
/// `CompileError`로 보고한다. 빈 매핑 반환도 정상 결과다.
pub trait Compiler: Send + Sync {
    /// 원본 내용 컴파일
    fn compile(&self, content: &str) -> Result<CompiledConfig, CompileError>;
}

// ============================================================================
// Cache Store - 캐시 저장소 인터페이스
// ============================================================================

/// 컴파일 결과를 키로 저장/조회하는 캐시 저장소
///
/// `get`은 키가 없어도 에러가 아니라 미스 엔트리를 돌려준다. 잘못된 키와
/// 백엔드 장애만 `CacheError`가 된다.
pub trait CacheStore: Send + Sync {
    /// 키에 해당하는 엔트리 조회 (없으면 미스 엔트리)
    fn get(&self, key: &str) -> Result<CacheEntry, CacheError>;

    /// 엔트리 통째로 저장 (기존 값 교체, 값이 없으면 슬롯 제거)
    fn save(&self, entry: CacheEntry) -> Result<(), CacheError>;
}

// ============================================================================
// Arc 블랭킷 구현 - 협력자 공유
// ============================================================================

// Arc로 감싼 협력자를 그대로 넘길 수 있다 (테스트와 다중 Configurator 공유용)

impl<T: ConfigSource + ?Sized> ConfigSource for Arc<T> {
    fn main(&self) -> Result<String, SourceError> {
        (**self).main()
    }
}

impl<T: Compiler + ?Sized> Compiler for Arc<T> {
    fn compile(&self, content: &str) -> Result<CompiledConfig, CompileError> {
        (**self).compile(content)
    }
}

impl<T: CacheStore + ?Sized> CacheStore for Arc<T> {
    fn get(&self, key: &str) -> Result<CacheEntry, CacheError> {
        (**self).get(key)
    }

    fn save(&self, entry: CacheEntry) -> Result<(), CacheError> {
        (**self).save(entry)
    }
}

// ============================================================================
// Fn Adapters - 클로저 어댑터
// ============================================================================

/// 클로저를 `ConfigSource`로 감싸는 어댑터
pub struct SourceFn<F>(F);

/// 클로저로 설정 소스 생성
///
/// ```
/// use confit_foundation::{source_fn, ConfigSource};
///
/// let source = source_fn(|| Ok("debug=true".to_string()));
/// assert_eq!(source.main().unwrap(), "debug=true");
/// ```
pub fn source_fn<F>(f: F) -> SourceFn<F>
where
    F: Fn() -> Result<String, SourceError> + Send + Sync,
{
    SourceFn(f)
}

impl<F> ConfigSource for SourceFn<F>
where
    F: Fn() -> Result<String, SourceError> + Send + Sync,
{
    fn main(&self) -> Result<String, SourceError> {
        (self.0)()
    }
}

/// 클로저를 `Compiler`로 감싸는 어댑터
pub struct CompileFn<F>(F);

/// 클로저로 컴파일러 생성
pub fn compile_fn<F>(f: F) -> CompileFn<F>
where
    F: Fn(&str) -> Result<CompiledConfig, CompileError> + Send + Sync,
{
    CompileFn(f)
}

impl<F> Compiler for CompileFn<F>
where
    F: Fn(&str) -> Result<CompiledConfig, CompileError> + Send + Sync,
{
    fn compile(&self, content: &str) -> Result<CompiledConfig, CompileError> {
        (self.0)(content)
    }
}
