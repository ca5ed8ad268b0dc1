/// Letters treated as vowels when counting syllables
const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Letters that block silent-`e` stripping when they precede the suffix
const SUFFIX_BLOCKERS: &[char] = &['l', 'a', 'e', 'i', 'o', 'u', 'y'];

/// Estimate the number of syllables in a single word
///
/// Heuristic, not phonetic:
/// 1. words of three characters or fewer count as one syllable
/// 2. one trailing `<consonant>es`, `ed` or `<consonant>e` is dropped
/// 3. one leading `y` is dropped
/// 4. each vowel run counts one syllable per started pair of vowels
///
/// Always returns at least 1.
#[must_use]
pub fn count_syllables(word: &str) -> usize {
    let lower: Vec<char> = word.to_lowercase().chars().collect();
    if lower.len() <= 3 {
        return 1;
    }

    let stem = strip_suffix(&lower);
    let stem = match stem.split_first() {
        Some(('y', rest)) => rest,
        _ => stem,
    };

    let count = vowel_groups(stem);
    count.max(1)
}

/// Drop at most one trailing `<consonant>es`, `ed` or `<consonant>e`
fn strip_suffix(chars: &[char]) -> &[char] {
    let blocks = |c: char| SUFFIX_BLOCKERS.contains(&c);
    let len = chars.len();
    match chars {
        [.., c, 'e', 's'] if !blocks(*c) => &chars[..len - 3],
        [.., 'e', 'd'] => &chars[..len - 2],
        [.., c, 'e'] if !blocks(*c) => &chars[..len - 2],
        _ => chars,
    }
}

/// Count vowel groups, splitting runs longer than two into pairs
fn vowel_groups(chars: &[char]) -> usize {
    let mut groups: usize = 0;
    let mut run: usize = 0;
    for c in chars {
        if VOWELS.contains(c) {
            run += 1;
        } else {
            groups += run.div_ceil(2);
            run = 0;
        }
    }
    groups + run.div_ceil(2)
}
