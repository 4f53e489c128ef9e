//! Configurator - 캐시 우선 설정 컴파일 파이프라인
//!
//! "한 번 컴파일하고, 다음부터는 캐시로" 흐름을 조율합니다.
//!
//! 1. 고정 키로 캐시 조회 → 히트면 즉시 반환
//! 2. 미스면 소스에서 원본 내용을 받아 컴파일
//! 3. 결과를 캐시에 저장 (강제 재빌드 시에는 저장하지 않음)
//!
//! 강제 재빌드는 캐시를 읽지도 쓰지도 않는다. 협력자 에러는 해당 단계에서
//! 즉시 `ConfigureError`로 전파된다.

use std::sync::Arc;

use tracing::{debug, info};

use confit_foundation::{CacheStore, CompiledConfig, Compiler, ConfigSource, Result};

use crate::locator::Locator;

/// 컴파일 결과가 저장되는 고정 캐시 키
///
/// 외부 인터페이스의 일부: 서로 다른 구현이 같은 캐시를 읽고 쓸 수 있어야
/// 하므로 이 리터럴은 바뀌면 안 된다.
pub const CACHE_KEY: &str = "config_cache_item";

/// Configurator 공유 상태 (협력자 세 개 + 등록된 로케이터)
pub(crate) struct ConfiguratorInner {
    source: Box<dyn ConfigSource>,
    compiler: Box<dyn Compiler>,
    cache: Box<dyn CacheStore>,
    locator: Locator,
}

/// 설정 컴파일 파이프라인
///
/// 값싸게 복제되는 핸들. 생성하면 로케이터에 자신을 등록하고, 실행이
/// 완료되면 등록을 해제한다.
#[derive(Clone)]
pub struct Configurator {
    pub(crate) inner: Arc<ConfiguratorInner>,
}

impl Configurator {
    /// 전역 로케이터에 등록하며 생성
    pub fn new(
        source: impl ConfigSource + 'static,
        compiler: impl Compiler + 'static,
        cache: impl CacheStore + 'static,
    ) -> Self {
        Self::with_locator(source, compiler, cache, crate::locator::global_locator())
    }

    /// 지정한 로케이터에 등록하며 생성 (스코프 로케이터용)
    pub fn with_locator(
        source: impl ConfigSource + 'static,
        compiler: impl Compiler + 'static,
        cache: impl CacheStore + 'static,
        locator: Locator,
    ) -> Self {
        let configurator = Configurator {
            inner: Arc::new(ConfiguratorInner {
                source: Box::new(source),
                compiler: Box::new(compiler),
                cache: Box::new(cache),
                locator,
            }),
        };
        configurator.inner.locator.install(&configurator.inner);
        debug!("Configurator constructed and registered with locator");
        configurator
    }

    /// 저장된 설정 소스
    pub fn config(&self) -> &dyn ConfigSource {
        self.inner.source.as_ref()
    }

    /// 저장된 컴파일러
    pub fn compiler(&self) -> &dyn Compiler {
        self.inner.compiler.as_ref()
    }

    /// 두 핸들이 같은 인스턴스를 가리키는지 확인
    pub fn ptr_eq(a: &Configurator, b: &Configurator) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }

    /// 캐시 우선 실행
    ///
    /// 캐시 히트면 소스/컴파일러를 부르지 않고 저장된 매핑을 돌려준다.
    /// 미스면 컴파일하고 결과를 캐시에 저장한 뒤 돌려준다.
    pub fn run(&self) -> Result<CompiledConfig> {
        self.execute(false)
    }

    /// 강제 재빌드 실행
    ///
    /// 캐시 조회도 저장도 하지 않는다. 기존 캐시 값은 그대로 남는다.
    pub fn run_forced(&self) -> Result<CompiledConfig> {
        self.execute(true)
    }

    fn execute(&self, forced_rebuild: bool) -> Result<CompiledConfig> {
        if forced_rebuild {
            debug!("Forced rebuild requested; bypassing cache");
        } else if let Some(config) = self.inner.cache.get(CACHE_KEY)?.into_value() {
            debug!("Configuration served from cache");
            self.inner.locator.release(&self.inner);
            return Ok(config);
        }

        let content = self.inner.source.main()?;
        let compiled = self.inner.compiler.compile(&content)?;
        info!(
            "Compiled configuration ({} top-level entries)",
            compiled.len()
        );

        if !forced_rebuild {
            // 캐시 계약: 엔트리를 받아와 값을 채운 뒤 통째로 저장한다
            let mut entry = self.inner.cache.get(CACHE_KEY)?;
            entry.set(compiled.clone());
            self.inner.cache.save(entry)?;
            debug!("Compiled configuration cached under {CACHE_KEY:?}");
        }

        self.inner.locator.release(&self.inner);
        Ok(compiled)
    }
}
