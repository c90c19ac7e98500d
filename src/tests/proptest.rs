#[cfg(test)]
mod prop_tests {
    use crate::{
        LanguageDetector, Polytext, TextNormalizer, Tokenizer, detect_script,
        script::SCRIPT_RANGES, unicode::is_token_separator,
    };
    use proptest::prelude::*;
    use unicode_normalization::UnicodeNormalization;

    // Latin with combining marks, Devanagari, Hangul, Greek, and every character the
    // normalizer treats specially.
    const MIXED: &str = "[a-zA-Z\u{00C0}-\u{024F}\u{0300}-\u{036F}\u{0900}-\u{097F}\u{1100}-\u{11FF}\u{AC00}-\u{D7A3}\u{03B1}-\u{03C9} \t\n\u{00A0}\u{200B}\u{200C}\u{200D}\u{2060}\u{FEFF}\u{3000}]{0,64}";

    const LANGS: &[&str] = &["hi", "mr", "en", "bn", "ko", "zh", "xx-unregistered"];

    const WORDS: &[&str] = &[
        "the", "and", "of", "el", "la", "que", "le", "est", "une", "der", "und", "nicht", "o",
        "da", "casa", "hund", "maison", "house", "xyz",
    ];

    fn script_sample() -> impl Strategy<Value = (crate::Script, String)> {
        (0..SCRIPT_RANGES.len()).prop_flat_map(|i| {
            let (lo, hi, script) = SCRIPT_RANGES[i];
            (
                Just(script),
                prop::collection::vec(lo..=hi, 1..24).prop_map(|cps| {
                    cps.into_iter().filter_map(char::from_u32).collect::<String>()
                }),
            )
        })
    }

    proptest! {
        #[test]
        fn normalize_idempotent(s in MIXED, lang in prop::sample::select(LANGS)) {
            let n = TextNormalizer::default();
            let once = n.normalize(&s, lang);
            let twice = n.normalize(&once, lang);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalize_idempotent_any_text(s in "\\PC{0,200}") {
            let n = TextNormalizer::default();
            let once = n.normalize(&s, "hi");
            prop_assert_eq!(n.normalize(&once, "hi"), once);
        }

        #[test]
        fn canonically_equivalent_inputs_agree(s in MIXED, lang in prop::sample::select(LANGS)) {
            let n = TextNormalizer::default();
            let nfd: String = s.nfd().collect();
            let nfc: String = s.nfc().collect();
            let expected = n.normalize(&s, lang);
            prop_assert_eq!(n.normalize(&nfd, lang), expected.clone());
            prop_assert_eq!(n.normalize(&nfc, lang), expected);
        }

        #[test]
        fn output_is_nfc(s in MIXED) {
            let out = TextNormalizer::default().normalize(&s, "en");
            prop_assert!(unicode_normalization::is_nfc(&out));
        }

        #[test]
        fn joiners_survive_count_for_count(s in MIXED, lang in prop::sample::select(LANGS)) {
            let count = |t: &str| t.chars().filter(|&c| c == '\u{200C}' || c == '\u{200D}').count();
            let out = TextNormalizer::default().normalize(&s, lang);
            prop_assert_eq!(count(&out), count(&s));
        }

        #[test]
        fn single_range_text_detects_its_script((script, text) in script_sample()) {
            prop_assume!(!text.is_empty());
            prop_assert_eq!(detect_script(&text), script);
        }

        #[test]
        fn confidences_are_bounded_and_latin_sums_to_one(
            words in prop::collection::vec(prop::sample::select(WORDS), 0..24),
            top_k in 1usize..8,
        ) {
            let text = words.join(" ");
            let all = LanguageDetector::default().detect_multiple(&text, usize::MAX);
            prop_assert!(!all.is_empty());
            for r in &all {
                prop_assert!((0.0..=1.0).contains(&r.confidence()));
            }
            if all.len() > 1 || all[0].confidence() != crate::detect::NO_SIGNAL {
                let sum: f64 = all.iter().map(|r| r.confidence()).sum();
                prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
            }
            let top = LanguageDetector::default().detect_multiple(&text, top_k);
            prop_assert!(top.len() <= top_k);
            prop_assert_eq!(&top[..], &all[..top.len()]);
        }

        #[test]
        fn tokens_are_nonempty_and_separator_free(s in MIXED) {
            let result = Tokenizer::default().tokenize(&s, None).unwrap();
            for t in &result.tokens {
                prop_assert!(!t.is_empty());
                prop_assert!(!t.chars().any(is_token_separator), "{:?}", t);
            }
        }

        #[test]
        fn tokens_preserve_input_order(s in "[a-z ,.!]{0,80}") {
            let tokens = Tokenizer::default().tokenize(&s, Some("en")).unwrap().tokens;
            let stripped: String = s.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(tokens.concat(), stripped);
        }

        #[test]
        fn transliteration_never_loses_unmapped_text(s in "[xqzXQZ0-9 ,.!?]{0,40}") {
            let p = Polytext::default();
            let forward = p.transliterate(&s, "Devanagari", "Latin").unwrap();
            prop_assert_eq!(&forward.target, &s);
        }
    }
}
