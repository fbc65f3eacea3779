// Verhoeff check digit, as carried in the last digit of an Aadhaar number.

const MULTIPLICATION: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

const PERMUTATION: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// True when `number` is all digits and its trailing Verhoeff check digit is correct.
pub fn verhoeff_is_valid(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let check = number
        .bytes()
        .rev()
        .enumerate()
        .fold(0u8, |check, (i, b)| {
            let digit = (b - b'0') as usize;
            MULTIPLICATION[check as usize][PERMUTATION[i % 8][digit] as usize]
        });

    check == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(verhoeff_is_valid("234123412346"));
        assert!(verhoeff_is_valid("499118665246"));
    }

    #[test]
    fn test_single_digit_error_is_caught() {
        assert!(!verhoeff_is_valid("234123412347"));
        assert!(!verhoeff_is_valid("234123412356"));
    }

    #[test]
    fn test_non_digits_are_invalid() {
        assert!(!verhoeff_is_valid(""));
        assert!(!verhoeff_is_valid("2341 2341 2346"));
        assert!(!verhoeff_is_valid("23412341234O"));
    }
}
