//! 언어별 문자 코덱
//!
//! 단어 문자열을 모델이 읽는 id 시퀀스로 바꾸고, 모델이 낸 id 격자를
//! 사람이 읽을 문자열로 되돌립니다.
//!
//! # 개요
//!
//! 모든 언어는 같은 예약 심볼 4개를 공유합니다:
//!
//! | 심볼 | id |
//! |---|---|
//! | PAD | 0 |
//! | SOW | 1 |
//! | EOW | 2 |
//! | UNK | 3 |
//!
//! 나머지 문자는 언어별 인벤토리 순서대로 4번부터 번호가 붙습니다.
//!
//! # 사용 예시
//!
//! ```
//! use charset_codec::charset::{Charset, Language, SOW_ID, EOW_ID};
//!
//! let en = Charset::for_language("en", Language::En).unwrap();
//! let mut ids = vec![SOW_ID];
//! ids.extend(en.encode_word("cat"));
//! ids.push(EOW_ID);
//! assert_eq!(en.token(&ids).unwrap(), "|cat");
//! ```

mod codec;
mod error;
mod features;
mod language;
mod symbol;
mod table;
mod tables;

// 공개 인터페이스
pub use codec::Charset;
pub use error::{CharsetError, Result};
pub use features::{Feature, FeatureAnnotation};
pub use language::{Language, BUILTIN_TAGS};
pub use symbol::{Id, Symbol, EOW_ID, PAD_ID, PLACEHOLDER, RESERVED_COUNT, SOW_ID, UNK_ID};
pub use table::CharsetTable;
