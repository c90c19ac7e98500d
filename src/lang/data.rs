use crate::{lang::LanguageEntry, script::Script};

/// ---------------------------------------------------------------------------
///    Macro – generates every constant and the ordered built-in table
/// ---------------------------------------------------------------------------
macro_rules! define_languages {
    ($(
        $konst:ident, $code:literal, $name:literal, $script:ident, $family:literal;
    )*) => {
        $(
            pub const $konst: LanguageEntry =
                LanguageEntry::builtin($code, $name, Script::$script, $family);
        )*

        /// Built-in entries in registry insertion order.
        pub static BUILTIN_LANGUAGES: &[LanguageEntry] = &[$($konst),*];
    };
}

// ---------------------------------------------------------------------------
//    Language definitions (single source of truth)
//    Codes are BCP-47 primary subtags; constants use ISO 639-3 identifiers.
//    Bodo is `brx`: `bo` is Tibetan, the language detection attributes to
//    Tibetan script.
// ---------------------------------------------------------------------------
define_languages! {
    // 22 scheduled languages of India, plus Urdu
    ASM,  "as",   "Assamese",      Bengali,      "Indo-Aryan";
    BEN,  "bn",   "Bengali",       Bengali,      "Indo-Aryan";
    BRX,  "brx",  "Bodo",          Devanagari,   "Sino-Tibetan";
    DOI,  "doi",  "Dogri",         Devanagari,   "Indo-Aryan";
    GUJ,  "gu",   "Gujarati",      Gujarati,     "Indo-Aryan";
    HIN,  "hi",   "Hindi",         Devanagari,   "Indo-Aryan";
    KAN,  "kn",   "Kannada",       Kannada,      "Dravidian";
    KAS,  "ks",   "Kashmiri",      PersoArabic,  "Indo-Aryan";
    KOK,  "kok",  "Konkani",       Devanagari,   "Indo-Aryan";
    MAI,  "mai",  "Maithili",      Devanagari,   "Indo-Aryan";
    MAL,  "ml",   "Malayalam",     Malayalam,    "Dravidian";
    MNI,  "mni",  "Manipuri",      Bengali,      "Sino-Tibetan";
    MAR,  "mr",   "Marathi",       Devanagari,   "Indo-Aryan";
    NEP,  "ne",   "Nepali",        Devanagari,   "Indo-Aryan";
    ORI,  "or",   "Odia",          Odia,         "Indo-Aryan";
    PAN,  "pa",   "Punjabi",       Gurmukhi,     "Indo-Aryan";
    SAN,  "sa",   "Sanskrit",      Devanagari,   "Indo-Aryan";
    SAT,  "sat",  "Santali",       OlChiki,      "Austroasiatic";
    SND,  "sd",   "Sindhi",        PersoArabic,  "Indo-Aryan";
    SIN,  "si",   "Sinhala",       Sinhala,      "Indo-Aryan";
    TAM,  "ta",   "Tamil",         Tamil,        "Dravidian";
    TEL,  "te",   "Telugu",        Telugu,       "Dravidian";
    URD,  "ur",   "Urdu",          PersoArabic,  "Indo-Aryan";

    // Major world languages
    ENG,  "en",   "English",       Latin,        "Germanic";
    SPA,  "es",   "Spanish",       Latin,        "Romance";
    FRA,  "fr",   "French",        Latin,        "Romance";
    DEU,  "de",   "German",        Latin,        "Germanic";
    ITA,  "it",   "Italian",       Latin,        "Romance";
    POR,  "pt",   "Portuguese",    Latin,        "Romance";
    RUS,  "ru",   "Russian",       Cyrillic,     "Slavic";
    ZHO,  "zh",   "Chinese",       Cjk,          "Sino-Tibetan";
    JPN,  "ja",   "Japanese",      Hiragana,     "Japonic";
    KOR,  "ko",   "Korean",        Hangul,       "Koreanic";
    ARA,  "ar",   "Arabic",        Arabic,       "Semitic";
    HEB,  "he",   "Hebrew",        Hebrew,       "Semitic";
    FAS,  "fa",   "Persian",       PersoArabic,  "Iranian";
    TUR,  "tr",   "Turkish",       Latin,        "Turkic";
    VIE,  "vi",   "Vietnamese",    Latin,        "Austroasiatic";
    THA,  "th",   "Thai",          Thai,         "Tai-Kadai";
    IND,  "id",   "Indonesian",    Latin,        "Austronesian";
    MSA,  "ms",   "Malay",         Latin,        "Austronesian";
    SWA,  "sw",   "Swahili",       Latin,        "Bantu";
    NLD,  "nl",   "Dutch",         Latin,        "Germanic";
    POL,  "pl",   "Polish",        Latin,        "Slavic";
    UKR,  "uk",   "Ukrainian",     Cyrillic,     "Slavic";
    CES,  "cs",   "Czech",         Latin,        "Slavic";
    RON,  "ro",   "Romanian",      Latin,        "Romance";
    HUN,  "hu",   "Hungarian",     Latin,        "Uralic";
    FIN,  "fi",   "Finnish",       Latin,        "Uralic";
    SWE,  "sv",   "Swedish",       Latin,        "Germanic";
    NOR,  "no",   "Norwegian",     Latin,        "Germanic";
    DAN,  "da",   "Danish",        Latin,        "Germanic";
    ELL,  "el",   "Greek",         Greek,        "Hellenic";
    BUL,  "bg",   "Bulgarian",     Cyrillic,     "Slavic";
    HRV,  "hr",   "Croatian",      Latin,        "Slavic";
    SLK,  "sk",   "Slovak",        Latin,        "Slavic";
    LIT,  "lt",   "Lithuanian",    Latin,        "Baltic";
    LAV,  "lv",   "Latvian",       Latin,        "Baltic";
    EST,  "et",   "Estonian",      Latin,        "Uralic";
    SQI,  "sq",   "Albanian",      Latin,        "Albanian";
    MKD,  "mk",   "Macedonian",    Cyrillic,     "Slavic";
    SRP,  "sr",   "Serbian",       Cyrillic,     "Slavic";
    SLV,  "sl",   "Slovenian",     Latin,        "Slavic";
    AFR,  "af",   "Afrikaans",     Latin,        "Germanic";
    KAT,  "ka",   "Georgian",      Georgian,     "Kartvelian";
    HYE,  "hy",   "Armenian",      Armenian,     "Armenian";
    AZE,  "az",   "Azerbaijani",   Latin,        "Turkic";
    KAZ,  "kk",   "Kazakh",        Cyrillic,     "Turkic";
    UZB,  "uz",   "Uzbek",         Latin,        "Turkic";
    KHM,  "km",   "Khmer",         Khmer,        "Austroasiatic";
    LAO,  "lo",   "Lao",           Lao,          "Tai-Kadai";
    MYA,  "my",   "Burmese",       Myanmar,      "Sino-Tibetan";
    MON,  "mn",   "Mongolian",     Cyrillic,     "Mongolic";
    FIL,  "tl",   "Filipino",      Latin,        "Austronesian";
    JAV,  "jv",   "Javanese",      Latin,        "Austronesian";
    CEB,  "ceb",  "Cebuano",       Latin,        "Austronesian";
    HAU,  "ha",   "Hausa",         Latin,        "Afro-Asiatic";
    YOR,  "yo",   "Yoruba",        Latin,        "Niger-Congo";
    IBO,  "ig",   "Igbo",          Latin,        "Niger-Congo";
    AMH,  "am",   "Amharic",       Ethiopic,     "Semitic";
    SOM,  "so",   "Somali",        Latin,        "Afro-Asiatic";
    ZUL,  "zu",   "Zulu",          Latin,        "Bantu";
    XHO,  "xh",   "Xhosa",         Latin,        "Bantu";
    NYA,  "ny",   "Chichewa",      Latin,        "Bantu";
    MLG,  "mg",   "Malagasy",      Latin,        "Austronesian";
    CYM,  "cy",   "Welsh",         Latin,        "Celtic";
    GLE,  "ga",   "Irish",         Latin,        "Celtic";
    EUS,  "eu",   "Basque",        Latin,        "Language isolate";
    CAT,  "ca",   "Catalan",       Latin,        "Romance";
    GLG,  "gl",   "Galician",      Latin,        "Romance";
    EPO,  "eo",   "Esperanto",     Latin,        "Constructed";
    LAT,  "la",   "Latin",         Latin,        "Romance";
    MLT,  "mt",   "Maltese",       Latin,        "Semitic";
    ISL,  "is",   "Icelandic",     Latin,        "Germanic";
    BEL,  "be",   "Belarusian",    Cyrillic,     "Slavic";
    TAT,  "tt",   "Tatar",         Cyrillic,     "Turkic";
    BAK,  "ba",   "Bashkir",       Cyrillic,     "Turkic";
    CHV,  "cv",   "Chuvash",       Cyrillic,     "Turkic";

    // Further coverage
    BOD,  "bo",   "Tibetan",       Tibetan,      "Sino-Tibetan";
    PUS,  "ps",   "Pashto",        PersoArabic,  "Iranian";
    YID,  "yi",   "Yiddish",       Hebrew,       "Germanic";
    TIR,  "ti",   "Tigrinya",      Ethiopic,     "Semitic";
    BHO,  "bho",  "Bhojpuri",      Devanagari,   "Indo-Aryan";
    MRI,  "mi",   "Maori",         Latin,        "Austronesian";
    KUR,  "ku",   "Kurdish",       Latin,        "Iranian";
    LTZ,  "lb",   "Luxembourgish", Latin,        "Germanic";
}
