//! 심볼과 예약 id

use std::fmt;

/// 심볼 테이블 내 위치 인덱스
pub type Id = usize;

/// 패딩
pub const PAD_ID: Id = 0;
/// 단어 시작
pub const SOW_ID: Id = 1;
/// 단어 끝
pub const EOW_ID: Id = 2;
/// 테이블에 없는 문자
pub const UNK_ID: Id = 3;

/// 예약 심볼 개수 (모든 언어 공통, id 0~3 고정)
pub const RESERVED_COUNT: usize = 4;

/// 토큰 복원 시 EOW 이외의 예약 심볼 자리에 찍는 문자
pub const PLACEHOLDER: char = '|';

/// 문자 하나 또는 예약 제어 심볼
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Pad,
    Sow,
    Eow,
    Unk,
    Char(char),
}

impl Symbol {
    /// 예약 심볼 (id 순서)
    pub const RESERVED: [Symbol; RESERVED_COUNT] =
        [Symbol::Pad, Symbol::Sow, Symbol::Eow, Symbol::Unk];

    /// 예약 심볼인지 확인
    pub fn is_reserved(&self) -> bool {
        !matches!(self, Symbol::Char(_))
    }

    /// 일반 문자이면 해당 문자 반환
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(*c),
            _ => None,
        }
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

/// 매핑 실패한 문자(None)는 UNK로 취급
impl From<Option<char>> for Symbol {
    fn from(c: Option<char>) -> Self {
        c.map_or(Symbol::Unk, Symbol::Char)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Pad => write!(f, "<PAD>"),
            Symbol::Sow => write!(f, "<SOW>"),
            Symbol::Eow => write!(f, "<EOW>"),
            Symbol::Unk => write!(f, "<UNK>"),
            Symbol::Char(c) => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_order() {
        assert_eq!(Symbol::RESERVED[PAD_ID], Symbol::Pad);
        assert_eq!(Symbol::RESERVED[SOW_ID], Symbol::Sow);
        assert_eq!(Symbol::RESERVED[EOW_ID], Symbol::Eow);
        assert_eq!(Symbol::RESERVED[UNK_ID], Symbol::Unk);
    }

    #[test]
    fn test_is_reserved() {
        assert!(Symbol::Pad.is_reserved());
        assert!(Symbol::Unk.is_reserved());
        assert!(!Symbol::Char('a').is_reserved());
        // '<' 같은 문자는 예약 심볼과 겹치지 않음
        assert!(!Symbol::from('<').is_reserved());
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Symbol::from(Some('a')), Symbol::Char('a'));
        assert_eq!(Symbol::from(None), Symbol::Unk);
        assert_eq!(Symbol::Char('a').as_char(), Some('a'));
        assert_eq!(Symbol::Eow.as_char(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::Sow.to_string(), "<SOW>");
        assert_eq!(Symbol::Char('ä').to_string(), "ä");
    }
}
