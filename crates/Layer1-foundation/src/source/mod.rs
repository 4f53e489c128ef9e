//! Config Sources - 설정 소스 구현
//!
//! `ConfigSource` 기본 구현: 고정 문자열 소스와 파일 소스.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::traits::ConfigSource;
use crate::error::SourceError;

// ============================================================================
// Static Source - 고정 문자열 소스
// ============================================================================

/// 고정 문자열을 돌려주는 소스
///
/// 테스트와 내장 기본 설정에 사용한다.
#[derive(Debug, Clone)]
pub struct StaticSource {
    content: String,
}

impl StaticSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl ConfigSource for StaticSource {
    fn main(&self) -> Result<String, SourceError> {
        Ok(self.content.clone())
    }
}

// ============================================================================
// File Source - 파일 소스
// ============================================================================

/// 지정한 파일의 내용을 읽어오는 소스
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileSource {
    fn main(&self) -> Result<String, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            SourceError::with_source(format!("Failed to read {}", self.path.display()), e)
        })?;
        debug!("Loaded config source from {}", self.path.display());
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_static_source_returns_content() {
        let source = StaticSource::new("debug=true");
        assert_eq!(source.main().unwrap(), "debug=true");
        // 반복 호출에도 같은 내용
        assert_eq!(source.main().unwrap(), "debug=true");
    }

    #[test]
    fn test_file_source_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "retries = 3").unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.main().unwrap(), "retries = 3\n");
        assert_eq!(source.path(), file.path());
    }

    #[test]
    fn test_file_source_missing_file_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such.conf");

        let err = FileSource::new(&path).main().unwrap_err();
        assert!(err.message().contains("no-such.conf"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
