//! 지원 언어/문자 체계 목록

use super::features::Feature;
use super::tables;

/// 언어 변형 (닫힌 집합)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    En,
    Es,
    EsIpa,
    It,
    ItIpa,
    Pt,
    PtIpa,
    Fr,
    De,
    Heb,
    Uga,
    HebNoSpe,
    UgaNoSpe,
    Greek,
    LinearBLatin,
    LinearA,
    LinearB,
    Lost,
    K1,
    K2,
    Zh,
    Ja,
}

/// 기본 레지스트리에 등록되는 (태그, 언어) 목록
/// `el`과 `greek`은 같은 인벤토리를 쓰지만 별도 인스턴스를 가짐
pub const BUILTIN_TAGS: &[(&str, Language)] = &[
    ("en", Language::En),
    ("es", Language::Es),
    ("es-ipa", Language::EsIpa),
    ("it", Language::It),
    ("it-ipa", Language::ItIpa),
    ("pt", Language::Pt),
    ("pt-ipa", Language::PtIpa),
    ("heb", Language::Heb),
    ("uga", Language::Uga),
    ("heb-no_spe", Language::HebNoSpe),
    ("uga-no_spe", Language::UgaNoSpe),
    ("el", Language::Greek),
    ("greek", Language::Greek),
    ("linb-latin", Language::LinearBLatin),
    ("lineara", Language::LinearA),
    ("linear_b", Language::LinearB),
    ("fr", Language::Fr),
    ("lost", Language::Lost),
    ("k1", Language::K1),
    ("k2", Language::K2),
    ("zh", Language::Zh),
    ("ja", Language::Ja),
    ("de", Language::De),
];

impl Language {
    /// 예약 심볼 뒤에 붙는 문자 인벤토리
    pub fn chars(&self) -> &'static str {
        match self {
            Language::En | Language::Fr => tables::LATIN,
            Language::Es => tables::ES,
            Language::EsIpa => tables::ES_IPA,
            Language::It => tables::IT,
            Language::ItIpa => tables::IT_IPA,
            Language::Pt => tables::PT,
            Language::PtIpa => tables::PT_IPA,
            Language::De => tables::DE,
            Language::Heb => tables::HEB,
            Language::Uga => tables::UGA,
            Language::HebNoSpe => tables::HEB_NO_SPE,
            Language::UgaNoSpe => tables::UGA_NO_SPE,
            Language::Greek => tables::GREEK,
            Language::LinearBLatin => tables::LINEAR_B_LATIN,
            Language::LinearA => tables::LINEAR_A,
            Language::LinearB => tables::LINEAR_B,
            Language::Lost | Language::K1 | Language::K2 => tables::LOST,
            Language::Zh => tables::ZH,
            Language::Ja => tables::JA,
        }
    }

    /// 이 언어가 지원하는 특징 목록 (비어 있으면 process 불가)
    pub fn features(&self) -> &'static [Feature] {
        match self {
            Language::En | Language::Es | Language::It | Language::Pt | Language::Fr => {
                &[Feature::Capitalization]
            }
            Language::De => &[Feature::Capitalization, Feature::Umlaut],
            _ => &[],
        }
    }

    /// 움라우트 플래그 대상 문자 (움라우트 특징이 없으면 빈 목록)
    pub fn umlauts(&self) -> &'static [char] {
        match self {
            Language::De => tables::UMLAUTS,
            _ => &[],
        }
    }
}
