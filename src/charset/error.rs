//! charset 코덱 에러

use super::symbol::Id;

/// 코덱/레지스트리 에러
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharsetError {
    /// 등록되지 않은 언어 태그 조회
    UnknownTag(String),
    /// 같은 태그 중복 등록
    DuplicateTag(String),
    /// 문자 테이블에 같은 문자가 두 번 등장
    DuplicateSymbol { tag: String, symbol: char },
    /// id가 [0, len) 범위를 벗어남 (어휘 불일치)
    IdOutOfRange { id: Id, len: usize },
    /// 특징 추출을 지원하지 않는 언어에서 process 호출
    FeaturesUnsupported(String),
    /// get_tokens는 2차원/3차원 입력만 지원
    UnsupportedDepth(usize),
    /// 설정 파싱 실패
    Config(String),
}

impl std::fmt::Display for CharsetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharsetError::UnknownTag(tag) => write!(f, "등록되지 않은 언어 태그: {}", tag),
            CharsetError::DuplicateTag(tag) => write!(f, "이미 등록된 언어 태그: {}", tag),
            CharsetError::DuplicateSymbol { tag, symbol } => {
                write!(f, "문자 테이블 중복 ({}): {:?}", tag, symbol)
            }
            CharsetError::IdOutOfRange { id, len } => {
                write!(f, "id 범위 초과: {} (어휘 크기 {})", id, len)
            }
            CharsetError::FeaturesUnsupported(tag) => {
                write!(f, "특징 추출을 지원하지 않는 언어: {}", tag)
            }
            CharsetError::UnsupportedDepth(depth) => {
                write!(f, "지원하지 않는 입력 차원: {} (2 또는 3만 가능)", depth)
            }
            CharsetError::Config(s) => write!(f, "설정 파싱 오류: {}", s),
        }
    }
}

impl std::error::Error for CharsetError {}

impl From<serde_json::Error> for CharsetError {
    fn from(e: serde_json::Error) -> Self {
        CharsetError::Config(e.to_string())
    }
}

/// 코덱 결과 타입
pub type Result<T> = std::result::Result<T, CharsetError>;
