//! Core Types - 공용 타입 정의
//!
//! 컴파일된 설정 매핑과 캐시 교환 단위

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================================
// Compiled Config - 컴파일 결과
// ============================================================================

/// 컴파일된 설정 (문자열 키 → 구조화 값 매핑)
///
/// 한 번 만들어지면 읽기 전용 스냅샷으로 취급한다. 값은 스칼라, 배열,
/// 중첩 객체 모두 가능. 빈 매핑도 유효한 컴파일 결과이며 "캐시에 없음"과는
/// 구분된다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompiledConfig {
    entries: Map<String, Value>,
}

impl CompiledConfig {
    /// 빈 매핑 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 기존 매핑으로부터 생성
    pub fn from_map(entries: Map<String, Value>) -> Self {
        CompiledConfig { entries }
    }

    /// 최상위 키로 값 조회
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// 키 존재 여부
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// 최상위 엔트리 개수
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 빈 매핑인지 확인
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// (키, 값) 순회
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// 내부 매핑 소유권 반환
    pub fn into_inner(self) -> Map<String, Value> {
        self.entries
    }
}

impl From<Map<String, Value>> for CompiledConfig {
    fn from(entries: Map<String, Value>) -> Self {
        CompiledConfig { entries }
    }
}

impl FromIterator<(String, Value)> for CompiledConfig {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        CompiledConfig {
            entries: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Cache Entry - 캐시 교환 단위
// ============================================================================

/// 캐시 저장소와 주고받는 엔트리 (키 + 선택적 값)
///
/// 값이 없는 미스 엔트리와 빈 매핑을 담은 히트 엔트리는 서로 다른 상태다.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    key: String,
    value: Option<CompiledConfig>,
}

impl CacheEntry {
    /// 값이 없는 미스 엔트리 생성
    pub fn miss(key: impl Into<String>) -> Self {
        CacheEntry {
            key: key.into(),
            value: None,
        }
    }

    /// 값을 담은 히트 엔트리 생성
    pub fn hit(key: impl Into<String>, value: CompiledConfig) -> Self {
        CacheEntry {
            key: key.into(),
            value: Some(value),
        }
    }

    /// 캐시 키
    pub fn key(&self) -> &str {
        &self.key
    }

    /// 저장된 값이 있는지 확인
    pub fn is_hit(&self) -> bool {
        self.value.is_some()
    }

    /// 값 설치/교체
    pub fn set(&mut self, value: CompiledConfig) {
        self.value = Some(value);
    }

    /// 값 참조
    pub fn value(&self) -> Option<&CompiledConfig> {
        self.value.as_ref()
    }

    /// 값 소유권 반환
    pub fn into_value(self) -> Option<CompiledConfig> {
        self.value
    }

    /// (키, 값)으로 분해
    pub fn into_parts(self) -> (String, Option<CompiledConfig>) {
        (self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compiled_config_access() {
        let config: CompiledConfig = [
            ("debug".to_string(), json!(true)),
            ("retries".to_string(), json!(3)),
        ]
        .into_iter()
        .collect();

        assert_eq!(config.len(), 2);
        assert_eq!(config.get("debug"), Some(&json!(true)));
        assert_eq!(config.get("retries"), Some(&json!(3)));
        assert!(config.get("missing").is_none());
        assert!(config.contains_key("debug"));
    }

    #[test]
    fn test_compiled_config_empty_is_valid() {
        let config = CompiledConfig::new();
        assert!(config.is_empty());
        assert_eq!(config.len(), 0);
        assert_eq!(config, CompiledConfig::default());
    }

    #[test]
    fn test_compiled_config_serde_transparent() {
        let config: CompiledConfig =
            [("nested".to_string(), json!({"a": [1, 2]}))].into_iter().collect();

        let encoded = serde_json::to_string(&config).unwrap();
        assert_eq!(encoded, r#"{"nested":{"a":[1,2]}}"#);

        let decoded: CompiledConfig = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn test_cache_entry_miss_then_set() {
        let mut entry = CacheEntry::miss("config_cache_item");
        assert_eq!(entry.key(), "config_cache_item");
        assert!(!entry.is_hit());
        assert!(entry.value().is_none());

        entry.set(CompiledConfig::new());
        assert!(entry.is_hit());
    }

    #[test]
    fn test_cache_entry_empty_config_is_hit() {
        // 빈 매핑을 담은 엔트리는 히트 (미스와 구분)
        let entry = CacheEntry::hit("k", CompiledConfig::new());
        assert!(entry.is_hit());
        assert_eq!(entry.into_value(), Some(CompiledConfig::new()));

        let miss = CacheEntry::miss("k");
        assert_eq!(miss.into_value(), None);
    }

    #[test]
    fn test_cache_entry_into_parts() {
        let config: CompiledConfig = [("x".to_string(), json!(1))].into_iter().collect();
        let entry = CacheEntry::hit("k", config.clone());

        let (key, value) = entry.into_parts();
        assert_eq!(key, "k");
        assert_eq!(value, Some(config));
    }
}
