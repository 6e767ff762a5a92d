//! Choosing which fragments make up the next word.
//!
//! For a target of length `n`, the solver needs every group of unused fragments
//! whose lengths add up to exactly `n` ([`subsets_of_length`]), and for each group
//! whether a given word can be spelled by laying its fragments end to end
//! ([`can_spell`]). [`orderings_of`] lists every such concatenation outright.
//!
//! Subset search and `orderings_of` are exponential in the worst case. Pools in trigram puzzles are small
//! (generally under ~20 fragments) and subsets are pruned as soon as they grow
//! past the target length, which keeps this tractable in practice.

use crate::letter_bag::LetterBag;
use itertools::Itertools;
use std::collections::HashSet;

/// All sub-multisets of `pool` whose fragment lengths sum to `target_length`.
///
/// Each subset is a list of indices into `pool`, in increasing order. Subsets are
/// grown one fragment at a time, and any partial subset that is already longer
/// than `target_length` is dropped instead of extended. When the pool holds
/// duplicate fragments, subsets that differ only in which copy they use are
/// reported once. The empty subset is never reported.
#[must_use]
pub fn subsets_of_length(pool: &[LetterBag], target_length: usize) -> Vec<Vec<usize>> {
    // (indices, combined length) for every partial subset that still fits
    let mut partials: Vec<(Vec<usize>, usize)> = vec![(Vec::new(), 0)];

    for (i, fragment) in pool.iter().enumerate() {
        let fragment_len = fragment.len();
        let extended: Vec<(Vec<usize>, usize)> = partials
            .iter()
            .filter(|(_, total)| total + fragment_len <= target_length)
            .map(|(indices, total)| {
                let mut next = Vec::with_capacity(indices.len() + 1);
                next.extend_from_slice(indices);
                next.push(i);
                (next, total + fragment_len)
            })
            .collect();
        partials.extend(extended);
    }

    let mut seen: HashSet<Vec<&str>> = HashSet::new();
    partials
        .into_iter()
        .filter(|(indices, total)| *total == target_length && !indices.is_empty())
        .filter(|(indices, _)| seen.insert(subset_signature(pool, indices)))
        .map(|(indices, _)| indices)
        .collect()
}

/// Every distinct string formed by concatenating `fragments` in some order,
/// in first-seen permutation order.
#[must_use]
pub fn orderings_of(fragments: &[&LetterBag]) -> Vec<String> {
    fragments
        .iter()
        .map(|fragment| fragment.underlying_lower())
        .permutations(fragments.len())
        .map(|order| order.concat())
        .unique()
        .collect()
}

/// True if the fragments, in some order and each used once, concatenate to `word`.
///
/// Fragments are matched as prefixes of what is left of the word, so the cost
/// follows the word rather than the number of orderings. Equal fragments are
/// only tried once at each position.
#[must_use]
pub fn can_spell(word: &str, fragments: &[&LetterBag]) -> bool {
    let mut used = vec![false; fragments.len()];
    spell_rest(word, fragments, &mut used)
}

fn spell_rest(rest: &str, fragments: &[&LetterBag], used: &mut [bool]) -> bool {
    if rest.is_empty() {
        return fragments.iter().zip(used.iter()).all(|(fragment, &u)| u || fragment.is_empty());
    }

    let mut tried: HashSet<&str> = HashSet::new();
    for i in 0..fragments.len() {
        let text = fragments[i].underlying_lower();
        if used[i] || text.is_empty() || !tried.insert(text) {
            continue;
        }
        if let Some(next) = rest.strip_prefix(text) {
            used[i] = true;
            if spell_rest(next, fragments, used) {
                return true;
            }
            used[i] = false;
        }
    }
    false
}

/// Sorted fragment texts; equal for subsets that only differ in which duplicate they picked.
fn subset_signature<'a>(pool: &'a [LetterBag], indices: &[usize]) -> Vec<&'a str> {
    let mut texts: Vec<&str> = indices.iter().map(|&i| pool[i].underlying_lower()).collect();
    texts.sort_unstable();
    texts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(fragments: &[&str]) -> Vec<LetterBag> {
        fragments.iter().map(|f| LetterBag::new(f)).collect()
    }

    fn texts(pool: &[LetterBag], subsets: &[Vec<usize>]) -> Vec<Vec<String>> {
        subsets
            .iter()
            .map(|s| s.iter().map(|&i| pool[i].underlying_lower().to_string()).collect())
            .collect()
    }

    #[test]
    fn test_single_subset() {
        let p = pool(&["tim", "e"]);
        assert_eq!(vec![vec![0, 1]], subsets_of_length(&p, 4));
    }

    #[test]
    fn test_all_subsets_of_length() {
        let p = pool(&["abc", "d", "ef", "g"]);
        let subsets = subsets_of_length(&p, 3);
        assert_eq!(
            vec![vec!["abc"], vec!["d", "ef"], vec!["ef", "g"]],
            texts(&p, &subsets)
        );
    }

    #[test]
    fn test_no_subset_fits() {
        let p = pool(&["abc", "def"]);
        assert!(subsets_of_length(&p, 2).is_empty());
        assert!(subsets_of_length(&p, 7).is_empty());
    }

    #[test]
    fn test_zero_length_target_has_no_subsets() {
        let p = pool(&["abc"]);
        assert!(subsets_of_length(&p, 0).is_empty());
        assert!(subsets_of_length(&[], 0).is_empty());
    }

    #[test]
    fn test_every_subset_sums_to_target() {
        let p = pool(&["it's", "clo", "bbe", "rin", "g", "tim", "e"]);
        for target in 1..=18 {
            for subset in subsets_of_length(&p, target) {
                let total: usize = subset.iter().map(|&i| p[i].len()).sum();
                assert_eq!(target, total);
                assert!(subset.windows(2).all(|w| w[0] < w[1]));
            }
        }
    }

    #[test]
    fn test_duplicate_fragments_reported_once() {
        let p = pool(&["ab", "ab", "cd"]);
        let subsets = subsets_of_length(&p, 4);
        assert_eq!(vec![vec!["ab", "ab"], vec!["ab", "cd"]], texts(&p, &subsets));
    }

    #[test]
    fn test_orderings_of_two() {
        let p = pool(&["tim", "e"]);
        let refs: Vec<&LetterBag> = p.iter().collect();
        assert_eq!(vec!["time", "etim"], orderings_of(&refs));
    }

    #[test]
    fn test_orderings_count() {
        let p = pool(&["a", "b", "c"]);
        let refs: Vec<&LetterBag> = p.iter().collect();
        let orders = orderings_of(&refs);
        assert_eq!(6, orders.len());
        assert!(orders.contains(&"cab".to_string()));
    }

    #[test]
    fn test_orderings_deduplicated() {
        let p = pool(&["ab", "ab", "c"]);
        let refs: Vec<&LetterBag> = p.iter().collect();
        assert_eq!(vec!["ababc", "abcab", "cabab"], orderings_of(&refs));
    }

    #[test]
    fn test_orderings_use_lowercase() {
        let p = pool(&["TIM", "E"]);
        let refs: Vec<&LetterBag> = p.iter().collect();
        assert_eq!("time", orderings_of(&refs)[0]);
    }

    #[test]
    fn test_can_spell_follows_fragment_order() {
        let p = pool(&["tim", "e"]);
        let refs: Vec<&LetterBag> = p.iter().collect();
        assert!(can_spell("time", &refs));
        assert!(can_spell("etim", &refs));
        assert!(!can_spell("mite", &refs));
        assert!(!can_spell("tim", &refs));
    }

    #[test]
    fn test_can_spell_backtracks() {
        // "a" fits first but strands "bbca"; "ab" + "bc" + "a" works
        let p = pool(&["a", "ab", "bc"]);
        let refs: Vec<&LetterBag> = p.iter().collect();
        assert!(can_spell("abbca", &refs));
        assert!(!can_spell("abacb", &refs));
    }

    #[test]
    fn test_can_spell_agrees_with_orderings() {
        let p = pool(&["ab", "ab", "c"]);
        let refs: Vec<&LetterBag> = p.iter().collect();
        for word in orderings_of(&refs) {
            assert!(can_spell(&word, &refs), "{word}");
        }
        assert!(!can_spell("abcba", &refs));
    }
}
