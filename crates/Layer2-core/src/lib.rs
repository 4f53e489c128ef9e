//! confit-core: Core Runtime for Confit
//!
//! Layer2 - 설정 컴파일 파이프라인 레이어
//!
//! # 주요 모듈
//!
//! - `configurator`: 캐시 우선 설정 컴파일 파이프라인 (Configurator)
//! - `locator`: 최근 생성된 Configurator 조회 슬롯 (Locator)
//!
//! # 사용 예시
//!
//! ```
//! use confit_core::{Configurator, Locator};
//! use confit_foundation::{compile_fn, MemoryStore, StaticSource};
//! use serde_json::json;
//!
//! let configurator = Configurator::with_locator(
//!     StaticSource::new("debug = true"),
//!     compile_fn(|content| {
//!         Ok(content
//!             .lines()
//!             .filter_map(|line| line.split_once('='))
//!             .map(|(k, v)| (k.trim().to_string(), json!(v.trim() == "true")))
//!             .collect())
//!     }),
//!     MemoryStore::new(),
//!     Locator::new(),
//! );
//!
//! // 첫 실행: 컴파일 후 캐시에 저장
//! let config = configurator.run().unwrap();
//! assert_eq!(config.get("debug"), Some(&json!(true)));
//!
//! // 두 번째 실행: 캐시에서 바로 반환
//! let again = configurator.run().unwrap();
//! assert_eq!(again, config);
//! ```

// Core modules
pub mod configurator;
pub mod locator;

// Re-exports: Configurator
pub use configurator::{Configurator, CACHE_KEY};

// Re-exports: Locator
pub use locator::{global_locator, Locator};

// Layer1 re-exports
pub use confit_foundation::{ConfigureError, Result};

/// Layer2 버전
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
