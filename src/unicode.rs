//! Codepoint predicates shared by the tokenizer, detector and normalization stages.
use icu_properties::{CodePointMapData, props::GeneralCategory};

/// Zero-width characters that separate tokens the same way whitespace does.
///
/// ZWNJ and ZWJ are boundaries for tokenization but are *never* removed by normalization.
#[inline(always)]
pub const fn is_zero_width_boundary(c: char) -> bool {
    matches!(
        c as u32,
        0x200B | // Zero-width space
        0x200C | // Zero-width non-joiner
        0x200D | // Zero-width joiner
        0x2060 | // Word joiner
        0xFEFF // Zero-width no-break space / BOM
    )
}

/// Invisible characters deleted by normalization.
///
/// ZWNJ (U+200C) and ZWJ (U+200D) are deliberately absent: they control conjunct and
/// ligature formation in Brahmic scripts.
#[inline(always)]
pub const fn is_removable_invisible(c: char) -> bool {
    matches!(
        c as u32,
        0x200B | // Zero-width space
        0x2060 | // Word joiner
        0xFEFF | // BOM
        0x00A0 // No-break space
    )
}

#[inline]
pub fn contains_removable_invisible(text: &str) -> bool {
    text.chars().any(is_removable_invisible)
}

/// Space or tab: the only characters collapsed by horizontal whitespace folding.
#[inline(always)]
pub const fn is_horizontal_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

// U+00A0, U+1680, U+2000..=U+200A, U+2028, U+2029, U+202F, U+205F, U+3000
#[inline(always)]
pub fn is_unicode_whitespace(c: char) -> bool {
    matches!(
        c as u32,
        0x0085 | // NEXT LINE (NEL)
        0x00A0 | // NO-BREAK SPACE
        0x1680 | // OGHAM SPACE MARK
        0x2000
            ..=0x200A | // EN QUAD through HAIR SPACE
        0x2028 | // LINE SEPARATOR
        0x2029 | // PARAGRAPH SEPARATOR
        0x202F | // NARROW NO-BREAK SPACE
        0x205F | // MEDIUM MATHEMATICAL SPACE
        0x3000 // IDEOGRAPHIC SPACE
    )
}

#[inline(always)]
pub fn is_any_whitespace(c: char) -> bool {
    c.is_whitespace() || is_unicode_whitespace(c)
}

/// Whitespace or a zero-width boundary: a token separator.
#[inline(always)]
pub fn is_token_separator(c: char) -> bool {
    is_any_whitespace(c) || is_zero_width_boundary(c)
}

/// Combining marks (General Category Mn, Mc, Me): matras, virama, nukta, accents.
#[inline]
pub fn is_mark(c: char) -> bool {
    // Fast path: nothing below U+0300 is a combining mark.
    if (c as u32) < 0x0300 {
        return false;
    }
    matches!(
        CodePointMapData::<GeneralCategory>::new().get(c),
        GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark | GeneralCategory::EnclosingMark
    )
}

/// Letters and the marks that attach to them.
///
/// Digits, underscore and punctuation fall outside the class, so `"hello,"` splits into
/// `"hello"` + `","` and `"abc123"` into `"abc"` + `"123"`.
#[inline]
pub fn is_word_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphabetic();
    }
    c.is_alphabetic() || is_mark(c)
}

/// Apostrophes that stay inside a word when flanked by word characters (`don't`, `l’eau`).
#[inline(always)]
pub const fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}' | '\u{02BC}')
}
