//! Scoring domain
//!
//! Keyword normalization, the secret keyword allow-list, and the
//! redemption result shared by repositories and the scoring service.

mod keyword;
mod redemption;

pub use keyword::{Keyword, KeywordCatalog, DEFAULT_SECRET_KEYWORDS};
pub use redemption::{Redemption, DEFAULT_KEYWORD_POINTS};
