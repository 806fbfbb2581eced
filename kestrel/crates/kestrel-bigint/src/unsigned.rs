//! Word-array unsigned integer.
//!
//! All arithmetic works on `u32` words and widens to `u64` for the
//! intermediate of each word step, so carries and borrows fall out of the
//! high half instead of being inferred from wraparound.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::error::{ArithmeticError, ArithmeticResult};

/// A single digit of an [`UnsignedBigInteger`].
pub type Word = u32;

/// Number of bits in a [`Word`].
pub const BITS_IN_WORD: usize = Word::BITS as usize;

/// Arbitrary-precision unsigned integer.
///
/// Values are immutable: every operation allocates a fresh result. The word
/// vector is never normalized, so `[5]` and `[5, 0, 0]` are distinct
/// representations of the same number; comparisons only look at the
/// [trimmed length](UnsignedBigInteger::trimmed_length).
#[derive(Clone, Debug, Default)]
pub struct UnsignedBigInteger {
    /// Least-significant word first.
    words: Vec<Word>,
    is_invalid: bool,
}

impl UnsignedBigInteger {
    /// Creates a one-word value.
    pub fn new(word: Word) -> Self {
        Self {
            words: vec![word],
            is_invalid: false,
        }
    }

    /// Creates a value from words, least-significant first.
    ///
    /// # Example
    ///
    /// ```
    /// use kestrel_bigint::UnsignedBigInteger;
    ///
    /// // 2^32 + 7
    /// let value = UnsignedBigInteger::from_words(vec![7, 1]);
    /// assert_eq!(value, UnsignedBigInteger::from(0x1_0000_0007u64));
    /// ```
    pub fn from_words(words: Vec<Word>) -> Self {
        Self {
            words,
            is_invalid: false,
        }
    }

    /// Returns the invalid sentinel: a zero value flagged as unrepresentable.
    pub fn create_invalid() -> Self {
        let mut invalid = Self::new(0);
        invalid.invalidate();
        invalid
    }

    fn invalidate(&mut self) {
        self.is_invalid = true;
    }

    /// The raw words, least-significant first, including high zero words.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of stored words.
    #[inline]
    pub fn length(&self) -> usize {
        self.words.len()
    }

    /// Whether this value is the invalid sentinel.
    #[inline]
    pub fn is_invalid(&self) -> bool {
        self.is_invalid
    }

    /// True for a valid value with no nonzero words.
    pub fn is_zero(&self) -> bool {
        !self.is_invalid && self.trimmed_length() == 0
    }

    /// Number of words up to and including the most significant nonzero one.
    ///
    /// ```
    /// use kestrel_bigint::UnsignedBigInteger;
    ///
    /// assert_eq!(UnsignedBigInteger::from_words(vec![3, 0, 0]).trimmed_length(), 1);
    /// assert_eq!(UnsignedBigInteger::from_words(vec![0, 0]).trimmed_length(), 0);
    /// ```
    pub fn trimmed_length(&self) -> usize {
        self.words
            .iter()
            .rposition(|&word| word != 0)
            .map_or(0, |index| index + 1)
    }

    /// Number of significant bits; zero for a zero value.
    pub fn bit_length(&self) -> usize {
        match self.trimmed_length() {
            0 => 0,
            length => {
                let top = self.words[length - 1];
                (length - 1) * BITS_IN_WORD + (BITS_IN_WORD - top.leading_zeros() as usize)
            },
        }
    }

    /// Adds two values.
    ///
    /// Complexity: O(N) where N is the number of words in the longer operand.
    /// The result is one word longer than the longer operand when the final
    /// carry is set.
    pub fn add(&self, other: &Self) -> Self {
        if self.is_invalid || other.is_invalid {
            return Self::create_invalid();
        }

        let (longer, shorter) = if self.length() >= other.length() {
            (self, other)
        } else {
            (other, self)
        };

        let mut words = Vec::with_capacity(longer.length() + 1);
        let mut carry = 0;

        for (&a, &b) in longer.words.iter().zip(&shorter.words) {
            words.push(adc(a, b, &mut carry));
        }
        for &a in &longer.words[shorter.length()..] {
            words.push(adc(a, 0, &mut carry));
        }
        if carry != 0 {
            words.push(carry);
        }

        Self::from_words(words)
    }

    /// Subtracts `other` from `self`.
    ///
    /// Complexity: O(N) where N is the number of words in `self`.
    ///
    /// Returns the invalid sentinel when `self < other`.
    ///
    /// # Panics
    ///
    /// Panics if a borrow survives past the most significant word, which the
    /// `self < other` check rules out.
    pub fn sub(&self, other: &Self) -> Self {
        if self.is_invalid || other.is_invalid {
            return Self::create_invalid();
        }

        if self < other {
            log::warn!(
                "bigint subtraction creates a negative number ({} words - {} words)",
                self.trimmed_length(),
                other.trimmed_length()
            );
            return Self::create_invalid();
        }

        // self >= other, so any words of `other` past self.length() are zero
        let mut words = Vec::with_capacity(self.length());
        let mut borrow = 0;

        for (index, &a) in self.words.iter().enumerate() {
            let b = other.words.get(index).copied().unwrap_or(0);
            words.push(sbb(a, b, &mut borrow));
        }

        assert!(
            borrow == 0,
            "bigint subtraction borrowed past the most significant word"
        );

        Self::from_words(words)
    }

    /// Multiplies two values by shift-and-add.
    ///
    /// Complexity: O(N^2) where N is the number of words in the larger number.
    /// Every value is the sum of the powers of two at the positions of its set
    /// bits, so for each set bit `i` of `self` the product gains `other << i`.
    pub fn multiply(&self, other: &Self) -> Self {
        if self.is_invalid || other.is_invalid {
            return Self::create_invalid();
        }

        let mut result = Self::default();
        for (word_index, &word) in self.words.iter().enumerate() {
            for bit_index in 0..BITS_IN_WORD {
                let mask: Word = 1 << bit_index;
                if word & mask == 0 {
                    continue;
                }

                let shift_amount = word_index * BITS_IN_WORD + bit_index;
                result = result.add(&other.shift_left(shift_amount));
            }
        }
        result
    }

    /// Shifts left by `num_bits`.
    ///
    /// Whole words are shifted first by prepending zero words; the remaining
    /// `num_bits % 32` bits are then shifted across word boundaries.
    pub fn shift_left(&self, num_bits: usize) -> Self {
        if self.is_invalid {
            return Self::create_invalid();
        }

        let temp_result = self.shift_left_by_n_words(num_bits / BITS_IN_WORD);
        let num_bits = num_bits % BITS_IN_WORD;

        let words = (0..temp_result.length())
            .map(|index| temp_result.shift_left_get_one_word(num_bits, index))
            .collect();
        let result = Self::from_words(words);

        // Shifting the last word can produce a carry
        let carry_word = temp_result.shift_left_get_one_word(num_bits, temp_result.length());
        if carry_word != 0 {
            return result
                .add(&Self::new(carry_word).shift_left_by_n_words(temp_result.length()));
        }
        result
    }

    /// Shifts left by whole words, inserting `number_of_words` zero words at
    /// the low end.
    pub fn shift_left_by_n_words(&self, number_of_words: usize) -> Self {
        if self.is_invalid {
            return Self::create_invalid();
        }

        let mut words = vec![0; number_of_words];
        words.extend_from_slice(&self.words);
        Self::from_words(words)
    }

    /// Word `result_word_index` of `self << num_bits` for `num_bits < 32`.
    ///
    /// `result_word_index == self.length()` is allowed and yields the carry
    /// word that spills past the top.
    fn shift_left_get_one_word(&self, num_bits: usize, result_word_index: usize) -> Word {
        debug_assert!(result_word_index <= self.length());
        debug_assert!(num_bits < BITS_IN_WORD);

        let mut result = 0;
        // `x >> 32` overflows, a zero shift carries nothing in from below
        if result_word_index > 0 && num_bits != 0 {
            result |= self.words[result_word_index - 1] >> (BITS_IN_WORD - num_bits);
        }
        if result_word_index < self.length() {
            result |= self.words[result_word_index] << num_bits;
        }
        result
    }

    /// Subtracts, reporting a negative difference as an error instead of
    /// returning the invalid sentinel.
    ///
    /// ```
    /// use kestrel_bigint::{ArithmeticError, UnsignedBigInteger};
    ///
    /// let small = UnsignedBigInteger::new(1);
    /// let large = UnsignedBigInteger::new(2);
    /// assert!(matches!(
    ///     small.checked_sub(&large),
    ///     Err(ArithmeticError::NegativeDifference { .. })
    /// ));
    /// ```
    pub fn checked_sub(&self, other: &Self) -> ArithmeticResult<Self> {
        if self.is_invalid || other.is_invalid {
            return Err(ArithmeticError::InvalidValue);
        }
        if self < other {
            return Err(ArithmeticError::NegativeDifference {
                lhs_words: self.trimmed_length(),
                rhs_words: other.trimmed_length(),
            });
        }
        Ok(self.sub(other))
    }

    /// Converts the invalid sentinel into an error.
    pub fn into_result(self) -> ArithmeticResult<Self> {
        if self.is_invalid {
            Err(ArithmeticError::InvalidValue)
        } else {
            Ok(self)
        }
    }

    #[inline]
    fn significant_words(&self) -> &[Word] {
        &self.words[..self.trimmed_length()]
    }
}

/// Word addition with carry in and out.
#[inline]
fn adc(a: Word, b: Word, carry: &mut Word) -> Word {
    let sum = u64::from(a) + u64::from(b) + u64::from(*carry);
    *carry = (sum >> BITS_IN_WORD) as Word;
    sum as Word
}

/// Word subtraction with borrow in and out.
///
/// The minuend is lifted by 2^32 up front; if the difference no longer
/// reaches 2^32 the lifted word was needed and a borrow goes out.
#[inline]
fn sbb(a: Word, b: Word, borrow: &mut Word) -> Word {
    let diff = u64::from(a) + (1u64 << BITS_IN_WORD) - u64::from(b) - u64::from(*borrow);
    *borrow = Word::from(diff >> BITS_IN_WORD == 0);
    diff as Word
}

impl From<u32> for UnsignedBigInteger {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<u64> for UnsignedBigInteger {
    fn from(value: u64) -> Self {
        Self::from_words(vec![value as Word, (value >> BITS_IN_WORD) as Word])
    }
}

impl PartialEq for UnsignedBigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.is_invalid == other.is_invalid
            && self.significant_words() == other.significant_words()
    }
}

impl Eq for UnsignedBigInteger {}

impl Hash for UnsignedBigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_invalid.hash(state);
        self.significant_words().hash(state);
    }
}

/// Invalid values are unordered with respect to valid ones, so every
/// comparison operator returns `false` for such a pair. Two invalid
/// sentinels compare equal.
impl PartialOrd for UnsignedBigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_invalid, other.is_invalid) {
            (true, true) => return Some(Ordering::Equal),
            (false, false) => {},
            _ => return None,
        }

        let (lhs, rhs) = (self.significant_words(), other.significant_words());
        Some(
            lhs.len()
                .cmp(&rhs.len())
                .then_with(|| lhs.iter().rev().cmp(rhs.iter().rev())),
        )
    }
}
