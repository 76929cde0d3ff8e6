//! 언어별 문자 <-> id 코덱
//!
//! 모델 입력 방향: 단어 -> (process) -> char_to_id -> id 시퀀스
//! 모델 출력 방향: id 격자 -> id_to_char -> get_tokens -> 표시용 문자열

use std::collections::HashMap;

use super::error::{CharsetError, Result};
use super::features::{annotate, Feature, FeatureAnnotation};
use super::language::Language;
use super::symbol::{Id, Symbol, PLACEHOLDER, UNK_ID};
use super::table::CharsetTable;
use crate::nested::Nested;

/// 한 언어의 심볼 테이블과 역매핑
#[derive(Debug)]
pub struct Charset {
    tag: String,
    language: Language,
    table: CharsetTable,
    index: HashMap<Symbol, Id>,
}

impl Charset {
    /// 검증된 테이블로 charset 생성
    pub fn new(tag: impl Into<String>, language: Language, table: CharsetTable) -> Self {
        let index = table.iter().map(|(id, symbol)| (symbol, id)).collect();
        Self {
            tag: tag.into(),
            language,
            table,
            index,
        }
    }

    /// 언어의 문자 인벤토리로 바로 생성
    pub fn for_language(tag: impl Into<String>, language: Language) -> Result<Self> {
        let tag = tag.into();
        let table = CharsetTable::new(&tag, language.chars())?;
        Ok(Self::new(tag, language, table))
    }

    /// 등록 태그
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// 언어 변형
    pub fn language(&self) -> Language {
        self.language
    }

    /// 지원 특징 목록
    pub fn features(&self) -> &'static [Feature] {
        self.language.features()
    }

    /// id 공간 크기
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// 예약 심볼 때문에 항상 false
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// 심볼 -> id (테이블에 없으면 UNK_ID)
    pub fn char_to_id(&self, symbol: impl Into<Symbol>) -> Id {
        self.index.get(&symbol.into()).copied().unwrap_or(UNK_ID)
    }

    /// 중첩 심볼 시퀀스 -> 같은 모양의 id 시퀀스
    pub fn encode(&self, symbols: &Nested<Symbol>) -> Nested<Id> {
        symbols.map(|&symbol| self.char_to_id(symbol))
    }

    /// 단어의 각 문자를 id로 변환
    pub fn encode_word(&self, word: &str) -> Vec<Id> {
        word.chars().map(|c| self.char_to_id(c)).collect()
    }

    /// process 결과를 id로 변환 (매핑 실패 문자는 UNK_ID)
    pub fn encode_annotations(&self, annotations: &[FeatureAnnotation]) -> Vec<Id> {
        annotations
            .iter()
            .map(|annotation| self.char_to_id(annotation.symbol()))
            .collect()
    }

    /// id -> 심볼
    /// 범위를 벗어난 id는 어휘 불일치이므로 에러 (보정하지 않음)
    pub fn id_to_char(&self, id: Id) -> Result<Symbol> {
        self.table.get(id).ok_or(CharsetError::IdOutOfRange {
            id,
            len: self.table.len(),
        })
    }

    /// 중첩 id 시퀀스 -> 같은 모양의 심볼 시퀀스
    pub fn decode(&self, ids: &Nested<Id>) -> Result<Nested<Symbol>> {
        ids.try_map(|&id| self.id_to_char(id))
    }

    /// id 한 줄을 문자열로 복원
    ///
    /// - 첫 EOW에서 멈추고 EOW와 그 뒤는 버림
    /// - EOW 이전의 다른 예약 심볼(PAD, SOW, UNK)은 `'|'` 하나로 표시
    /// - 줄 전체를 먼저 심볼로 바꾸므로 EOW 뒤의 잘못된 id도 에러
    pub fn token(&self, row: &[Id]) -> Result<String> {
        let symbols = row
            .iter()
            .map(|&id| self.id_to_char(id))
            .collect::<Result<Vec<_>>>()?;

        let mut token = String::with_capacity(symbols.len());
        for symbol in symbols {
            match symbol {
                Symbol::Eow => break,
                Symbol::Char(c) => token.push(c),
                Symbol::Pad | Symbol::Sow | Symbol::Unk => token.push(PLACEHOLDER),
            }
        }
        Ok(token)
    }

    /// (batch, seq_len) -> batch개의 문자열
    pub fn tokens_2d(&self, rows: &[Vec<Id>]) -> Result<Vec<String>> {
        rows.iter().map(|row| self.token(row)).collect()
    }

    /// (batch, candidates, seq_len) -> (batch, candidates) 문자열
    ///
    /// 앞의 두 축을 펼쳐 한 줄씩 복원한 뒤 원래 모양으로 되돌립니다.
    pub fn tokens_3d(&self, batches: &[Vec<Vec<Id>>]) -> Result<Vec<Vec<String>>> {
        let flat: Vec<Vec<Id>> = batches.iter().flatten().cloned().collect();
        let mut tokens = self.tokens_2d(&flat)?.into_iter();

        Ok(batches
            .iter()
            .map(|candidates| tokens.by_ref().take(candidates.len()).collect())
            .collect())
    }

    /// 2차원/3차원 id 격자를 문자열 격자로 복원
    ///
    /// 차원은 입력에서 읽습니다. 빈 배치는 빈 결과를 돌려줍니다.
    /// 모든 배치의 후보가 0개인 `(b, 0, L)` 입력은 `(b, 0)`과 구별되지 않아
    /// 2차원으로 읽히므로, 이 경우에는 `get_tokens_with_rank(ids, 3)`을 사용해야 합니다.
    pub fn get_tokens(&self, ids: &Nested<Id>) -> Result<Nested<String>> {
        if ids.is_empty_seq() {
            return Ok(Nested::Seq(Vec::new()));
        }
        self.get_tokens_with_rank(ids, ids.depth())
    }

    /// 호출자가 지정한 차원(2 또는 3)으로 id 격자를 복원
    pub fn get_tokens_with_rank(&self, ids: &Nested<Id>, rank: usize) -> Result<Nested<String>> {
        match rank {
            2 => {
                let rows = ids.to_grid().ok_or(CharsetError::UnsupportedDepth(ids.depth()))?;
                Ok(Nested::row(self.tokens_2d(&rows)?))
            }
            3 => {
                let batches = ids.to_cube().ok_or(CharsetError::UnsupportedDepth(ids.depth()))?;
                Ok(Nested::grid(self.tokens_3d(&batches)?))
            }
            _ => Err(CharsetError::UnsupportedDepth(rank)),
        }
    }

    /// 단어의 문자별 특징 추출
    /// 특징을 선언하지 않은 언어에서는 호출 자체가 잘못된 사용
    pub fn process(&self, word: &str) -> Result<Vec<FeatureAnnotation>> {
        let features = self.features();
        if features.is_empty() {
            return Err(CharsetError::FeaturesUnsupported(self.tag.clone()));
        }
        Ok(annotate(word, features, self.language.umlauts(), &self.index))
    }
}
