//! Mnemonic sentence generation.
//!
//! Entropy comes from the thread RNG; the words come from the `bip39` crate.
//! `bip39` refuses sentences shorter than 12 words, so the 9-word case is
//! encoded here from the same word lists with the standard SHA-256 checksum.

use bip39::{Language, Mnemonic};
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::domain::{Result, WalletError};

/// Word counts accepted by [`mnemonic_sentence`].
pub const SUPPORTED_WORD_COUNTS: [usize; 6] = [9, 12, 15, 18, 21, 24];

/// Language names accepted by [`mnemonic_sentence`].
pub const SUPPORTED_LANGUAGES: [&str; 8] = [
    "english",
    "french",
    "spanish",
    "korean",
    "japanese",
    "italian",
    "chinese_traditional",
    "chinese_simplified",
];

pub const DEFAULT_WORD_COUNT: usize = 24;
pub const DEFAULT_LANGUAGE: &str = "english";

const BITS_PER_WORD: usize = 11;

/// Generate a fresh mnemonic sentence of `word_count` words.
///
/// # Errors
///
/// Returns `WalletError::InvalidArgument` naming the supported values when
/// `language` or `word_count` is not supported.
pub fn mnemonic_sentence(word_count: usize, language: &str) -> Result<Vec<String>> {
    let language = parse_language(language)?;
    let entropy_bits = entropy_bits(word_count)?;

    let mut entropy = vec![0u8; entropy_bits / 8];
    rand::thread_rng().fill_bytes(&mut entropy);

    sentence_from_entropy(language, &entropy)
}

fn parse_language(language: &str) -> Result<Language> {
    let parsed = match language {
        "english" => Language::English,
        "french" => Language::French,
        "spanish" => Language::Spanish,
        "korean" => Language::Korean,
        "japanese" => Language::Japanese,
        "italian" => Language::Italian,
        "chinese_traditional" => Language::TraditionalChinese,
        "chinese_simplified" => Language::SimplifiedChinese,
        _ => {
            return Err(WalletError::invalid_argument(format!(
                "Not supported language: '{language}'. Supported languages are: {SUPPORTED_LANGUAGES:?}."
            )));
        }
    };
    Ok(parsed)
}

fn entropy_bits(word_count: usize) -> Result<usize> {
    match word_count {
        9 => Ok(96),
        12 => Ok(128),
        15 => Ok(160),
        18 => Ok(192),
        21 => Ok(224),
        24 => Ok(256),
        _ => Err(WalletError::invalid_argument(format!(
            "Not supported count of words {word_count}. Supported counts are: {SUPPORTED_WORD_COUNTS:?}."
        ))),
    }
}

fn sentence_from_entropy(language: Language, entropy: &[u8]) -> Result<Vec<String>> {
    if entropy.len() < 16 {
        return Ok(encode_words(language, entropy));
    }

    let mnemonic = Mnemonic::from_entropy_in(language, entropy)?;
    Ok(mnemonic
        .to_string()
        .split_whitespace()
        .map(String::from)
        .collect())
}

/// BIP-39 encoding: entropy bits, then `len/32` checksum bits, split into
/// 11-bit word indexes.
fn encode_words(language: Language, entropy: &[u8]) -> Vec<String> {
    let checksum_len = entropy.len() * 8 / 32;
    let checksum = Sha256::digest(entropy)[0];

    let mut bits: Vec<bool> = entropy
        .iter()
        .flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
        .collect();
    bits.extend((0..checksum_len).map(|i| (checksum >> (7 - i)) & 1 == 1));

    let words = language.word_list();
    bits.chunks(BITS_PER_WORD)
        .map(|chunk| {
            let index = chunk
                .iter()
                .fold(0usize, |acc, &bit| (acc << 1) | usize::from(bit));
            words[index].to_string()
        })
        .collect()
}

// ============================================================================
// Utils Namespace
// ============================================================================

/// Local helpers that do not talk to the wallet backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utils;

impl Utils {
    /// See [`mnemonic_sentence`].
    ///
    /// # Errors
    ///
    /// Returns `WalletError::InvalidArgument` for unsupported inputs.
    pub fn mnemonic_sentence(&self, word_count: usize, language: &str) -> Result<Vec<String>> {
        mnemonic_sentence(word_count, language)
    }

    /// A 24-word English sentence.
    ///
    /// # Errors
    ///
    /// Only fails if entropy encoding fails.
    pub fn default_mnemonic_sentence(&self) -> Result<Vec<String>> {
        mnemonic_sentence(DEFAULT_WORD_COUNT, DEFAULT_LANGUAGE)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_sentence_has_24_words() {
        assert_eq!(Utils.default_mnemonic_sentence().unwrap().len(), 24);
    }

    #[rstest]
    fn test_word_counts_for_every_language(
        #[values(9, 12, 15, 18, 21, 24)] words: usize,
        #[values(
            "english",
            "french",
            "spanish",
            "korean",
            "japanese",
            "italian",
            "chinese_traditional",
            "chinese_simplified"
        )]
        language: &str,
    ) {
        let sentence = mnemonic_sentence(words, language).unwrap();
        assert_eq!(sentence.len(), words);
    }

    #[test]
    fn test_successive_sentences_differ() {
        let first = mnemonic_sentence(24, "english").unwrap();
        let second = mnemonic_sentence(24, "english").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_rejects_unsupported_word_count() {
        let err = mnemonic_sentence(8, "english").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "Not supported count of words 8. Supported counts are: [9, 12, 15, 18, 21, 24]."
        );
    }

    #[test]
    fn test_rejects_unsupported_language() {
        let err = mnemonic_sentence(15, "spanglish").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(
            err.to_string()
                .starts_with("Not supported language: 'spanglish'. Supported languages are:")
        );
        assert!(err.to_string().contains("\"chinese_simplified\""));
    }

    #[test]
    fn test_short_encoder_matches_bip39() {
        // Same bit layout as the crate for a length it supports.
        let entropy = [0x7fu8; 16];
        let ours = encode_words(Language::English, &entropy);
        let theirs = sentence_from_entropy(Language::English, &entropy).unwrap();
        assert_eq!(ours, theirs);
    }

    #[test]
    fn test_nine_words_from_zero_entropy() {
        let words = encode_words(Language::English, &[0u8; 12]);
        assert_eq!(words.len(), 9);
        assert!(words[..8].iter().all(|w| w == "abandon"));
    }

    #[test]
    fn test_words_come_from_the_word_list() {
        let list = Language::French.word_list();
        for word in mnemonic_sentence(12, "french").unwrap() {
            assert!(list.contains(&word.as_str()));
        }
    }
}
