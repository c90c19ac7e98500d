pub mod context;
pub mod detect;
pub mod error;
pub mod lang;
pub mod normalize;
pub mod polytext;
pub mod process;
pub mod script;
pub mod stage;
pub mod tokenize;
pub mod transliterate;
pub mod unicode;

pub use detect::{DetectionResult, LanguageDetector};
pub use error::{PolytextError, Result};
pub use lang::{BUILTIN_LANGUAGES, DEFAULT_LANG, LanguageEntry, LanguageRegistry};
pub use normalize::TextNormalizer;
pub use polytext::{Polytext, PolytextBuilder};
pub use script::{Script, detect_script};
pub use tokenize::{TokenizationResult, Tokenizer};
pub use transliterate::{ScriptPair, TransliterationResult, Transliterator};
