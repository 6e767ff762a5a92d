//! `letter_bag`: a word stored as a multiset of letters.
//!
//! Two bags are equal when they hold the same letters the same number of times,
//! regardless of order, which makes bags the natural tool for anagram-style
//! questions ("can these fragments spell that word?").
//!
//! Bags are values: `add` and `subtract` always build a new bag and never
//! touch their operands.

use crate::errors::BagError;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A case-folded multiset of the characters of a string.
///
/// The original text is kept for display and traceability; combined bags
/// record their history, e.g. `"fun+real"` or `"funeral-real"`.
#[derive(Debug, Clone, Default)]
pub struct LetterBag {
    underlying: String,
    underlying_lower: String,
    /// Only nonzero counts are stored, so an absent letter means zero.
    counts: BTreeMap<char, usize>,
}

impl LetterBag {
    /// Build a bag from `underlying`, counting the characters of its lowercase form.
    #[must_use]
    pub fn new(underlying: &str) -> Self {
        let underlying_lower = underlying.to_lowercase();
        let mut counts = BTreeMap::new();
        for c in underlying_lower.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
        LetterBag { underlying: underlying.to_string(), underlying_lower, counts }
    }

    /// The text this bag was built from, case preserved.
    #[must_use]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// The lowercase text this bag was built from.
    #[must_use]
    pub fn underlying_lower(&self) -> &str {
        &self.underlying_lower
    }

    /// Number of times `c` occurs (0 if absent).
    #[must_use]
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Total number of letters, i.e. the sum of all counts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True iff every letter occurs in `self` at least as often as in `other`.
    #[must_use]
    pub fn contains(&self, other: &LetterBag) -> bool {
        // letters only in `self` can never fail the check
        other.counts.iter().all(|(&c, &n)| self.count(c) >= n)
    }

    /// A new bag holding the letters of both bags.
    #[must_use]
    pub fn add(&self, other: &LetterBag) -> LetterBag {
        let mut counts = self.counts.clone();
        for (&c, &n) in &other.counts {
            *counts.entry(c).or_insert(0) += n;
        }
        LetterBag {
            underlying: format!("{}+{}", self.underlying, other.underlying),
            underlying_lower: format!("{}+{}", self.underlying_lower, other.underlying_lower),
            counts,
        }
    }

    /// A new bag holding the letters of `self` minus those of `other`.
    ///
    /// # Errors
    ///
    /// Returns [`BagError::NegativeCount`] if `other` holds a letter more often
    /// than `self` does. Guard with [`LetterBag::contains`].
    pub fn subtract(&self, other: &LetterBag) -> Result<LetterBag, BagError> {
        let mut counts = self.counts.clone();
        for (&c, &n) in &other.counts {
            let have = self.count(c);
            if have < n {
                return Err(BagError::NegativeCount {
                    minuend: self.underlying.clone(),
                    subtrahend: other.underlying.clone(),
                    letter: c,
                });
            }
            if have == n {
                counts.remove(&c);
            } else {
                counts.insert(c, have - n);
            }
        }
        Ok(LetterBag {
            underlying: format!("{}-{}", self.underlying, other.underlying),
            underlying_lower: format!("{}-{}", self.underlying_lower, other.underlying_lower),
            counts,
        })
    }

    /// Left fold of [`LetterBag::add`] over `bags`.
    ///
    /// # Errors
    ///
    /// Returns [`BagError::EmptySum`] if `bags` is empty; there is no identity bag.
    pub fn sum<'a, I>(bags: I) -> Result<LetterBag, BagError>
    where
        I: IntoIterator<Item = &'a LetterBag>,
    {
        let mut iter = bags.into_iter();
        let first = iter.next().ok_or(BagError::EmptySum)?;
        Ok(iter.fold(first.clone(), |acc, bag| acc.add(bag)))
    }
}

impl PartialEq for LetterBag {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl Eq for LetterBag {}

impl Hash for LetterBag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.counts.hash(state);
    }
}

impl From<&str> for LetterBag {
    fn from(s: &str) -> Self {
        LetterBag::new(s)
    }
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.underlying)
    }
}
