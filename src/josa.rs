//! Subject-particle selection for Korean result messages.
//!
//! Korean attaches 이 or 가 to a noun depending on whether its final syllable
//! block carries a trailing consonant (batchim). The rule is isolated behind a
//! trait so message formatting stays testable independent of the specific
//! natural-language rule.

/// Picks a grammatical particle for the final token of a display name.
///
/// Implementations return one of a small closed set of suffix strings.
pub trait ParticleSelector {
    fn select(&self, word: &str) -> &'static str;
}

/// Standard Korean 이/가 subject-particle rule.
///
/// A Hangul syllable block decomposes as `0xAC00 + 588*initial + 28*vowel +
/// final`; a nonzero remainder mod 28 means a trailing consonant is present.
/// Empty words and words ending in non-Hangul characters select 가.
pub struct KoreanParticles;

impl ParticleSelector for KoreanParticles {
    fn select(&self, word: &str) -> &'static str {
        let Some(last) = word.chars().last() else {
            return "가";
        };
        if (last as i32 - 0xAC00) % 28 > 0 {
            "이"
        } else {
            "가"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batchim_selects_i() {
        // 염 ends in a trailing consonant
        assert_eq!(KoreanParticles.select("결막염"), "이");
        assert_eq!(KoreanParticles.select("곰팡이성 감염"), "이");
    }

    #[test]
    fn open_syllable_selects_ga() {
        // 괴 has no trailing consonant
        assert_eq!(KoreanParticles.select("종괴"), "가");
    }

    #[test]
    fn empty_word_selects_ga() {
        assert_eq!(KoreanParticles.select(""), "가");
    }

    #[test]
    fn non_hangul_final_selects_ga() {
        // Raw class-id fallback names end in ASCII
        assert_eq!(KoreanParticles.select("entropion"), "가");
    }
}
