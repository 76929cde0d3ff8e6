//! 문자별 언어 특징 추출
//!
//! 테이블에는 소문자만 들어 있으므로 대문자는 별도 심볼이 아니라
//! `capitalization` 특징으로 기록합니다. 독일어는 움라우트 모음에
//! `umlaut` 플래그를 추가로 붙입니다.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::symbol::{Id, Symbol};

/// 언어가 선언할 수 있는 특징
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Capitalization,
    Umlaut,
}

/// 입력 문자 하나에 대한 특징 기록
///
/// 언어가 선언하지 않은 특징은 `None`, 선언한 특징은 `Some(false)`로 시작합니다.
/// `char`가 `None`이면 테이블에 매핑되지 않은 문자이며 UNK로 인코딩됩니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureAnnotation {
    pub char: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitalization: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub umlaut: Option<bool>,
}

impl FeatureAnnotation {
    /// 선언된 특징만 false로 채운 빈 기록
    pub fn blank(features: &[Feature]) -> Self {
        let mut annotation = Self::default();
        for feature in features {
            match feature {
                Feature::Capitalization => annotation.capitalization = Some(false),
                Feature::Umlaut => annotation.umlaut = Some(false),
            }
        }
        annotation
    }

    /// 인코딩할 심볼 (매핑 실패 시 UNK)
    pub fn symbol(&self) -> Symbol {
        Symbol::from(self.char)
    }

    /// 특정 특징이 켜져 있는지 확인
    pub fn has(&self, feature: Feature) -> bool {
        let flag = match feature {
            Feature::Capitalization => self.capitalization,
            Feature::Umlaut => self.umlaut,
        };
        flag.unwrap_or(false)
    }
}

/// 단어의 각 문자에 특징을 붙임
/// 결과 길이는 항상 입력 문자 수와 같음
pub(crate) fn annotate(
    word: &str,
    features: &[Feature],
    umlauts: &[char],
    index: &HashMap<Symbol, Id>,
) -> Vec<FeatureAnnotation> {
    let tracks_umlaut = features.contains(&Feature::Umlaut);

    word.chars()
        .map(|c| {
            let mut annotation = FeatureAnnotation::blank(features);

            if index.contains_key(&Symbol::Char(c)) {
                annotation.char = Some(c);
                if tracks_umlaut && umlauts.contains(&c) {
                    annotation.umlaut = Some(true);
                }
                return annotation;
            }

            // 소문자가 한 글자로 떨어지는 경우만 테이블 조회 대상
            let lower = single_lowercase(c);
            if tracks_umlaut && lower.is_some_and(|l| umlauts.contains(&l)) {
                annotation.umlaut = Some(true);
            }
            match lower {
                Some(l) if index.contains_key(&Symbol::Char(l)) => {
                    annotation.char = Some(l);
                    if features.contains(&Feature::Capitalization) {
                        annotation.capitalization = Some(true);
                    }
                }
                _ => annotation.char = None,
            }
            annotation
        })
        .collect()
}

fn single_lowercase(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}
