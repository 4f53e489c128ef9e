//! Locator - 최근 Configurator 조회 슬롯
//!
//! 원본 참조 없이도 가장 최근에 생성된 Configurator에 접근할 수 있게 해
//! 주는 동기화된 슬롯입니다. 생성이 등록하고, 실행 완료가 등록을 해제한다.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::configurator::{Configurator, ConfiguratorInner};

/// Configurator 조회 슬롯 (복제 가능한 핸들)
///
/// 슬롯은 `Weak` 참조만 보관한다. 등록된 Configurator가 먼저 드롭되면
/// `current()`가 `None`을 돌려줄 뿐, 로케이터가 수명을 연장하지 않는다.
///
/// 동시 사용 규칙:
/// - 등록은 무조건 덮어쓴다 (가장 최근 생성이 이긴다)
/// - 해제는 자기 등록일 때만 슬롯을 비운다
#[derive(Clone, Default)]
pub struct Locator {
    slot: Arc<Mutex<Option<Weak<ConfiguratorInner>>>>,
}

impl Locator {
    /// 빈 로케이터 생성 (스코프 로케이터용)
    pub fn new() -> Self {
        Self::default()
    }

    /// 현재 등록된 Configurator
    ///
    /// 등록이 없거나 해당 Configurator가 이미 드롭되었으면 `None`.
    pub fn current(&self) -> Option<Configurator> {
        self.slot
            .lock()
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|inner| Configurator { inner })
    }

    /// 생성 시 등록 (무조건 덮어쓰기)
    pub(crate) fn install(&self, inner: &Arc<ConfiguratorInner>) {
        *self.slot.lock() = Some(Arc::downgrade(inner));
    }

    /// 실행 완료 시 해제
    ///
    /// 슬롯이 아직 이 Configurator를 가리킬 때만 비운다. 실행을 마친
    /// 오래된 Configurator가 더 새로운 등록을 지우지 못하게 한다.
    pub(crate) fn release(&self, inner: &Arc<ConfiguratorInner>) {
        let mut slot = self.slot.lock();
        if let Some(registered) = slot.as_ref() {
            if Weak::ptr_eq(registered, &Arc::downgrade(inner)) {
                *slot = None;
            }
        }
    }
}

// ============================================================================
// 전역 Locator
// ============================================================================

use std::sync::OnceLock;

static GLOBAL_LOCATOR: OnceLock<Locator> = OnceLock::new();

/// 전역 로케이터 가져오기
///
/// `Configurator::new()`가 등록하는 프로세스 전역 슬롯. 명시적 로케이터가
/// 필요하면 `Locator::new()`로 만들어 `Configurator::with_locator()`에
/// 넘긴다.
pub fn global_locator() -> Locator {
    GLOBAL_LOCATOR.get_or_init(Locator::new).clone()
}

// ============================================================================
// 테스트
// ============================================================================
