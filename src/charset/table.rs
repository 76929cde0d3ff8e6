//! 언어별 심볼 테이블
//!
//! 예약 심볼 4개가 id 0~3을 차지하고, 나머지 문자가 입력 순서대로 뒤를 잇습니다.
//! 생성 후에는 변경할 수 없습니다.

use std::collections::HashSet;

use super::error::{CharsetError, Result};
use super::symbol::{Id, Symbol};

/// id -> 심볼 순서 테이블
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharsetTable {
    symbols: Vec<Symbol>,
}

impl CharsetTable {
    /// 문자 목록으로 테이블 생성
    /// 같은 문자가 두 번 나오면 에러
    pub fn new(tag: &str, chars: &str) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut symbols = Vec::with_capacity(Symbol::RESERVED.len() + chars.chars().count());
        symbols.extend_from_slice(&Symbol::RESERVED);

        for c in chars.chars() {
            if !seen.insert(c) {
                return Err(CharsetError::DuplicateSymbol {
                    tag: tag.to_string(),
                    symbol: c,
                });
            }
            symbols.push(Symbol::Char(c));
        }

        Ok(Self { symbols })
    }

    /// 어휘 크기 (예약 심볼 포함)
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// 예약 심볼이 항상 있으므로 비어 있을 수 없음
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// id에 해당하는 심볼
    pub fn get(&self, id: Id) -> Option<Symbol> {
        self.symbols.get(id).copied()
    }

    /// (id, 심볼) 순회
    pub fn iter(&self) -> impl Iterator<Item = (Id, Symbol)> + '_ {
        self.symbols.iter().copied().enumerate()
    }
}
