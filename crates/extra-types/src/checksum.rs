//! Check-digit arithmetic shared by the numeric identifiers.
//!
//! Every function here is a pure function over ASCII digit strings. Callers
//! validate the character set first; the helpers return `None` / `false`
//! instead of panicking when handed anything else.

/// Decimal value of an ASCII digit byte.
#[inline]
fn digit_value(byte: u8) -> Option<u32> {
    byte.is_ascii_digit().then(|| u32::from(byte - b'0'))
}

/// Returns true if `input` is non-empty and made only of ASCII digits.
#[inline]
pub fn is_ascii_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Sums `digit[i] * weights[i % weights.len()]` over every digit of `digits`.
///
/// Returns `None` if any byte is not an ASCII digit or `weights` is empty.
pub fn weighted_sum(digits: &str, weights: &[u32]) -> Option<u32> {
    if weights.is_empty() {
        return None;
    }
    digits
        .bytes()
        .zip(weights.iter().cycle())
        .try_fold(0u32, |acc, (byte, weight)| {
            digit_value(byte).map(|d| acc + d * weight)
        })
}

// ============================================================================
// LUHN
// ============================================================================

/// Luhn (mod 10) check over a full digit string, check digit included.
///
/// The check digit is added unweighted; of the remaining digits, those whose
/// index has the same parity as the total length are doubled (minus nine when
/// the result exceeds nine). That doubles every second digit counting from
/// the right regardless of the string's length.
///
/// Empty or non-digit input is never valid. A string of zeros is.
///
/// ```
/// use nebula_extra_types::checksum::luhn_valid;
///
/// assert!(luhn_valid("4242424242424242"));
/// assert!(!luhn_valid("4242424242424241"));
/// ```
pub fn luhn_valid(digits: &str) -> bool {
    let bytes = digits.as_bytes();
    let Some((&last, body)) = bytes.split_last() else {
        return false;
    };
    let Some(mut sum) = digit_value(last) else {
        return false;
    };

    let parity = bytes.len() % 2;
    for (i, &byte) in body.iter().enumerate() {
        let Some(mut d) = digit_value(byte) else {
            return false;
        };
        if i % 2 == parity {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }

    sum % 10 == 0
}

// ============================================================================
// ISBN
// ============================================================================

/// Computes the ISBN-10 check character from the first nine digits of `isbn`.
///
/// Weights run 10 down to 2; the result is `'X'` when the remainder is ten.
/// Returns `None` if `isbn` does not start with nine ASCII digits.
///
/// ```
/// use nebula_extra_types::checksum::isbn10_check_digit;
///
/// assert_eq!(isbn10_check_digit("080442957"), Some('X'));
/// assert_eq!(isbn10_check_digit("853780966"), Some('7'));
/// ```
pub fn isbn10_check_digit(isbn: &str) -> Option<char> {
    let body = isbn.get(..9)?;
    let total = weighted_sum(body, &[10, 9, 8, 7, 6, 5, 4, 3, 2])?;
    let r = (11 - total % 11) % 11;
    Some(if r == 10 {
        'X'
    } else {
        char::from_digit(r, 10)?
    })
}

/// Computes the ISBN-13 check digit from the first twelve digits of `isbn`.
///
/// Weights alternate 1, 3, 1, 3, ...; returns `None` if `isbn` does not start
/// with twelve ASCII digits.
///
/// ```
/// use nebula_extra_types::checksum::isbn13_check_digit;
///
/// assert_eq!(isbn13_check_digit("978853780966"), Some('2'));
/// ```
pub fn isbn13_check_digit(isbn: &str) -> Option<char> {
    let body = isbn.get(..12)?;
    let total = weighted_sum(body, &[1, 3])?;
    char::from_digit((10 - total % 10) % 10, 10)
}

// ============================================================================
// ABA ROUTING NUMBER
// ============================================================================

/// Weights of the ABA routing transit number checksum.
pub const ABA_WEIGHTS: [u32; 3] = [3, 7, 1];

/// ABA checksum: `3(d0+d3+d6) + 7(d1+d4+d7) + (d2+d5+d8)` must be a multiple of ten.
///
/// Only exactly nine ASCII digits can be valid.
pub fn aba_checksum_valid(digits: &str) -> bool {
    digits.len() == 9 && weighted_sum(digits, &ABA_WEIGHTS).is_some_and(|sum| sum % 10 == 0)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4242424242424242")]
    #[case("4111111111111111")]
    #[case("5500000000000004")]
    #[case("340000000000009")]
    #[case("6011000000000004")]
    #[case("0")]
    #[case("0000000000000")]
    fn test_luhn_valid(#[case] digits: &str) {
        assert!(luhn_valid(digits));
    }

    #[rstest]
    #[case("4242424242424241")]
    #[case("4000000000000000")]
    #[case("4111111111111112")]
    #[case("")]
    #[case("42424242424242a2")]
    fn test_luhn_invalid(#[case] digits: &str) {
        assert!(!luhn_valid(digits));
    }

    #[test]
    fn test_luhn_odd_and_even_lengths_agree_with_right_to_left_doubling() {
        // "79927398713" is the textbook 11-digit example.
        assert!(luhn_valid("79927398713"));
        assert!(!luhn_valid("79927398710"));
        // Prepending a zero must not change the outcome.
        assert!(luhn_valid("079927398713"));
    }

    #[test]
    fn test_weighted_sum() {
        assert_eq!(weighted_sum("122105155", &ABA_WEIGHTS), Some(70));
        assert_eq!(weighted_sum("12a", &ABA_WEIGHTS), None);
        assert_eq!(weighted_sum("123", &[]), None);
        assert_eq!(weighted_sum("", &[1]), Some(0));
    }

    #[test]
    fn test_isbn10_check_digit() {
        assert_eq!(isbn10_check_digit("8537809667"), Some('7'));
        assert_eq!(isbn10_check_digit("080442957X"), Some('X'));
        assert_eq!(isbn10_check_digit("0306406152"), Some('2'));
        assert_eq!(isbn10_check_digit("12345678"), None);
        assert_eq!(isbn10_check_digit("12345678a"), None);
    }

    #[test]
    fn test_isbn13_check_digit() {
        assert_eq!(isbn13_check_digit("9788537809662"), Some('2'));
        assert_eq!(isbn13_check_digit("978080442957"), Some('3'));
        assert_eq!(isbn13_check_digit("978030640615"), Some('7'));
        assert_eq!(isbn13_check_digit("97803064061"), None);
    }

    #[test]
    fn test_aba_checksum() {
        assert!(aba_checksum_valid("122105155"));
        assert!(aba_checksum_valid("021000021"));
        assert!(!aba_checksum_valid("122105154"));
        assert!(!aba_checksum_valid("12210515"));
        assert!(!aba_checksum_valid("1221051550"));
        assert!(!aba_checksum_valid("12210515a"));
    }

    #[test]
    fn test_is_ascii_digits() {
        assert!(is_ascii_digits("0123456789"));
        assert!(!is_ascii_digits(""));
        assert!(!is_ascii_digits("١٢٣"));
        assert!(!is_ascii_digits("12 3"));
    }
}
