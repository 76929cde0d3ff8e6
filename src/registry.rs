//! 언어 태그 -> charset 레지스트리
//!
//! 등록은 빌더에서 모두 끝내고 `build()`로 고정한 뒤에만 조회합니다.
//! 테이블은 등록 시점에 만들어 검증하고, `Charset` 인스턴스는 태그별로
//! 처음 조회될 때 한 번만 생성됩니다. 태그마다 `OnceLock`을 두므로
//! 여러 스레드가 동시에 처음 조회해도 인스턴스는 하나뿐입니다.

use std::collections::HashMap;
use std::sync::OnceLock;

use lazy_static::lazy_static;

use crate::charset::{Charset, CharsetError, CharsetTable, Language, Result, BUILTIN_TAGS};

/// 등록된 태그 하나
#[derive(Debug)]
struct Entry {
    language: Language,
    table: CharsetTable,
    instance: OnceLock<Charset>,
}

/// 레지스트리 빌더 (등록 단계)
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: HashMap<String, Entry>,
}

impl RegistryBuilder {
    /// 빈 빌더 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 태그에 언어 변형 등록
    /// 이미 등록된 태그이거나 인벤토리에 중복 문자가 있으면 에러
    pub fn register(mut self, tag: impl Into<String>, language: Language) -> Result<Self> {
        let tag = tag.into();
        if self.entries.contains_key(&tag) {
            return Err(CharsetError::DuplicateTag(tag));
        }

        let table = CharsetTable::new(&tag, language.chars())?;
        self.entries.insert(
            tag,
            Entry {
                language,
                table,
                instance: OnceLock::new(),
            },
        );
        Ok(self)
    }

    /// 등록 종료, 조회 전용 레지스트리로 고정
    pub fn build(self) -> CharsetRegistry {
        CharsetRegistry {
            entries: self.entries,
        }
    }
}

/// 조회 전용 레지스트리
#[derive(Debug)]
pub struct CharsetRegistry {
    entries: HashMap<String, Entry>,
}

impl CharsetRegistry {
    /// 빌더 생성
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// 내장 언어 전체를 등록한 레지스트리
    pub fn try_builtin() -> Result<Self> {
        BUILTIN_TAGS
            .iter()
            .try_fold(RegistryBuilder::new(), |builder, &(tag, language)| {
                builder.register(tag, language)
            })
            .map(RegistryBuilder::build)
    }

    /// 내장 언어 레지스트리
    ///
    /// # Panics
    /// 내장 태그 목록 자체가 잘못된 경우 (로드 시점 프로그래머 오류)
    pub fn builtin() -> Self {
        match Self::try_builtin() {
            Ok(registry) => registry,
            Err(e) => panic!("내장 charset 등록 실패: {}", e),
        }
    }

    /// 태그의 charset 조회 (처음 조회 시 생성, 이후 같은 인스턴스 반환)
    pub fn get(&self, tag: &str) -> Result<&Charset> {
        let entry = self
            .entries
            .get(tag)
            .ok_or_else(|| CharsetError::UnknownTag(tag.to_string()))?;

        Ok(entry.instance.get_or_init(|| {
            log::debug!("charset 생성: {} ({} 심볼)", tag, entry.table.len());
            Charset::new(tag, entry.language, entry.table.clone())
        }))
    }

    /// 등록 여부 확인
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// 이미 인스턴스가 생성되었는지 확인
    pub fn is_instantiated(&self, tag: &str) -> bool {
        self.entries
            .get(tag)
            .is_some_and(|entry| entry.instance.get().is_some())
    }

    /// 등록된 태그 목록 (정렬)
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }

    /// 지정한 태그들을 미리 생성 (병렬 접근 전 준비)
    pub fn warm_up<'a, I>(&self, tags: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut count = 0;
        for tag in tags {
            self.get(tag)?;
            count += 1;
        }
        log::info!("charset 미리 생성 완료: {}개", count);
        Ok(())
    }

    /// 등록된 모든 태그를 미리 생성
    pub fn warm_up_all(&self) -> Result<()> {
        self.warm_up(self.tags())
    }
}

lazy_static! {
    static ref GLOBAL_REGISTRY: CharsetRegistry = CharsetRegistry::builtin();
}

/// 프로세스 전역 내장 레지스트리
pub fn global() -> &'static CharsetRegistry {
    &GLOBAL_REGISTRY
}

/// 전역 레지스트리에서 charset 조회
pub fn get_charset(tag: &str) -> Result<&'static Charset> {
    global().get(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let registry = CharsetRegistry::builder()
            .register("en", Language::En)
            .unwrap()
            .build();
        let charset = registry.get("en").unwrap();
        assert_eq!(charset.tag(), "en");
        assert_eq!(charset.len(), 30);
    }

    #[test]
    fn test_duplicate_tag() {
        let result = CharsetRegistry::builder()
            .register("en", Language::En)
            .unwrap()
            .register("en", Language::Fr);
        assert!(matches!(result, Err(CharsetError::DuplicateTag(tag)) if tag == "en"));
    }

    #[test]
    fn test_unknown_tag() {
        let registry = CharsetRegistry::builder().build();
        assert!(matches!(
            registry.get("xx"),
            Err(CharsetError::UnknownTag(tag)) if tag == "xx"
        ));
    }

    #[test]
    fn test_same_instance() {
        let registry = CharsetRegistry::builtin();
        assert!(!registry.is_instantiated("de"));
        let first = registry.get("de").unwrap();
        assert!(registry.is_instantiated("de"));
        let second = registry.get("de").unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_shared_inventory_separate_instances() {
        let registry = CharsetRegistry::builtin();
        let el = registry.get("el").unwrap();
        let greek = registry.get("greek").unwrap();
        assert!(!std::ptr::eq(el, greek));
        assert_eq!(el.language(), greek.language());
        assert_eq!(el.len(), greek.len());
    }

    #[test]
    fn test_builtin_tags() {
        let registry = CharsetRegistry::builtin();
        assert_eq!(registry.tags().len(), BUILTIN_TAGS.len());
        assert!(registry.contains("heb-no_spe"));
        assert!(registry.contains("linear_b"));
        assert!(!registry.contains("ko"));
    }

    #[test]
    fn test_warm_up() {
        let registry = CharsetRegistry::builtin();
        registry.warm_up(["en", "zh"]).unwrap();
        assert!(registry.is_instantiated("en"));
        assert!(registry.is_instantiated("zh"));
        assert!(!registry.is_instantiated("ja"));

        assert!(registry.warm_up(["fr", "nope"]).is_err());
        // 실패 전의 태그는 이미 생성됨
        assert!(registry.is_instantiated("fr"));

        registry.warm_up_all().unwrap();
        assert!(registry.tags().iter().all(|tag| registry.is_instantiated(tag)));
    }

    #[test]
    fn test_warm_up_all_reports_result() {
        let registry = CharsetRegistry::builder()
            .register("en", Language::En)
            .unwrap()
            .register("k1", Language::K1)
            .unwrap()
            .build();
        assert_eq!(registry.warm_up_all(), Ok(()));
        assert!(registry.is_instantiated("en"));
        assert!(registry.is_instantiated("k1"));

        let empty = CharsetRegistry::builder().build();
        assert_eq!(empty.warm_up_all(), Ok(()));
    }

    #[test]
    fn test_concurrent_first_lookup() {
        let registry = CharsetRegistry::builtin();
        let addresses: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| registry.get("ja").unwrap() as *const Charset as usize))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_global_registry() {
        let first = get_charset("en").unwrap();
        let second = global().get("en").unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(get_charset("unknown").is_err());
    }
}
