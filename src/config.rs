//! 코덱 설정 (JSON)

use serde::{Deserialize, Serialize};

use crate::charset::{CharsetError, Result};
use crate::registry::CharsetRegistry;

/// charset 코덱 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// 병렬 접근 전에 미리 생성할 언어 태그
    #[serde(default = "default_warm_up")]
    pub warm_up: Vec<String>,
    /// 등록되지 않은 미리 생성 태그를 에러 대신 경고 후 건너뜀
    #[serde(default = "default_skip_unknown")]
    pub skip_unknown: bool,
}

fn default_warm_up() -> Vec<String> {
    Vec::new()
}

fn default_skip_unknown() -> bool {
    false
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            warm_up: default_warm_up(),
            skip_unknown: default_skip_unknown(),
        }
    }
}

impl CodecConfig {
    /// 새 설정 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 미리 생성할 태그 설정
    pub fn with_warm_up<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warm_up = tags.into_iter().map(Into::into).collect();
        self
    }

    /// 모르는 태그 무시 여부 설정
    pub fn with_skip_unknown(mut self, skip: bool) -> Self {
        self.skip_unknown = skip;
        self
    }

    /// JSON 문자열에서 설정 파싱
    pub fn try_from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// JSON 문자열에서 설정 로드 (파싱 실패 시 기본값)
    pub fn from_json(json: &str) -> Self {
        Self::try_from_json(json).unwrap_or_else(|e| {
            log::warn!("설정 파싱 실패, 기본값 사용: {}", e);
            Self::default()
        })
    }

    /// 설정된 태그를 레지스트리에서 미리 생성
    pub fn apply(&self, registry: &CharsetRegistry) -> Result<()> {
        let mut tags = Vec::with_capacity(self.warm_up.len());
        for tag in &self.warm_up {
            if registry.contains(tag) {
                tags.push(tag.as_str());
            } else if self.skip_unknown {
                log::warn!("등록되지 않은 태그 건너뜀: {}", tag);
            } else {
                return Err(CharsetError::UnknownTag(tag.clone()));
            }
        }
        registry.warm_up(tags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert!(config.warm_up.is_empty());
        assert!(!config.skip_unknown);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = CodecConfig::new()
            .with_warm_up(["uga-no_spe", "heb-no_spe"])
            .with_skip_unknown(true);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CodecConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config = CodecConfig::from_json(r#"{"warm_up": ["en"]}"#);
        assert_eq!(config.warm_up, vec!["en".to_string()]);
        assert!(!config.skip_unknown);
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(CodecConfig::from_json("not json"), CodecConfig::default());
        assert!(matches!(
            CodecConfig::try_from_json(r#"{"warm_up": 3}"#),
            Err(CharsetError::Config(_))
        ));
    }

    #[test]
    fn test_apply() {
        let registry = CharsetRegistry::builtin();
        let config = CodecConfig::new().with_warm_up(["linear_b", "greek"]);
        config.apply(&registry).unwrap();
        assert!(registry.is_instantiated("linear_b"));
        assert!(registry.is_instantiated("greek"));
        assert!(!registry.is_instantiated("el"));
    }

    #[test]
    fn test_apply_unknown_tag() {
        let registry = CharsetRegistry::builtin();
        let strict = CodecConfig::new().with_warm_up(["en", "xx"]);
        assert!(matches!(
            strict.apply(&registry),
            Err(CharsetError::UnknownTag(tag)) if tag == "xx"
        ));
        // 검증이 먼저 끝나므로 아무것도 생성되지 않음
        assert!(!registry.is_instantiated("en"));

        let lenient = strict.with_skip_unknown(true);
        lenient.apply(&registry).unwrap();
        assert!(registry.is_instantiated("en"));
    }
}
