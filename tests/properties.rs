use proptest::prelude::*;

use paralign::{build_spans, find_matches, SearchStatus};

const BUDGET: usize = 50_000;

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Inverse of the span builder's fragment escaping, entity-last so escaped
/// input text survives the round trip.
fn unescape(fragment: &str) -> String {
    fragment
        .replace("&#x27;", "'")
        .replace("&quot;", "\"")
        .replace("&gt;", ">")
        .replace("&lt;", "<")
        .replace("&amp;", "&")
}

proptest! {
    // Concatenating unescaped fragments in order reproduces the input text
    // exactly, whatever the projections look like.
    #[test]
    fn span_round_trip(
        text in "[ -~]{1,60}",
        projections in prop::collection::vec((0usize..70, 0usize..25), 1..8),
    ) {
        let set = build_spans(&text, &projections);
        let rebuilt: String = set.spans.iter().map(|s| unescape(&s.fragment)).collect();
        prop_assert_eq!(rebuilt, text);
    }

    // The per-position max reduction makes the result independent of the
    // order projections arrive in.
    #[test]
    fn span_order_independence(
        text in "[a-z ]{1,60}",
        projections in prop::collection::vec((0usize..70, 0usize..25), 1..8),
    ) {
        let forward = build_spans(&text, &projections);
        let mut reversed = projections.clone();
        reversed.reverse();
        prop_assert_eq!(&forward, &build_spans(&text, &reversed));
        let mut sorted = projections.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&forward, &build_spans(&text, &sorted));
    }

    // Emitted fragments never carry raw markup-significant chars.
    #[test]
    fn fragments_are_markup_safe(
        text in "[ -~]{1,60}",
        projections in prop::collection::vec((0usize..70, 0usize..25), 1..8),
    ) {
        let set = build_spans(&text, &projections);
        for span in &set.spans {
            prop_assert!(!span.fragment.contains(&['<', '>', '"', '\''][..]));
        }
    }

    // Every returned block stays in bounds, meets the threshold, and names
    // a genuinely identical substring pair.
    #[test]
    fn blocks_are_valid(
        left in "[abc ]{0,20}",
        right in "[abc ]{0,20}",
        min_len in 1usize..5,
    ) {
        let left_chars = chars(&left);
        let right_chars = chars(&right);
        let out = find_matches(&left_chars, &right_chars, min_len, BUDGET);
        for block in &out.blocks {
            prop_assert!(block.len >= min_len);
            prop_assert!(block.left + block.len <= left_chars.len());
            prop_assert!(block.right + block.len <= right_chars.len());
            prop_assert_eq!(
                &left_chars[block.left..block.left + block.len],
                &right_chars[block.right..block.right + block.len]
            );
        }
    }

    // A text aligned with itself always yields a block covering its full
    // length, for any threshold it can meet.
    #[test]
    fn identity_yields_full_cover(text in "[a-z ]{1,40}", min_len in 1usize..6) {
        let text_chars = chars(&text);
        prop_assume!(min_len <= text_chars.len());
        let out = find_matches(&text_chars, &text_chars, min_len, BUDGET);
        prop_assert!(out
            .blocks
            .iter()
            .any(|b| b.left == 0 && b.right == 0 && b.len == text_chars.len()));
    }

    // Disjoint alphabets cannot match, and the span weights stay all-zero.
    #[test]
    fn disjoint_alphabets_never_match(
        left in "[a-m]{0,40}",
        right in "[n-z]{0,40}",
        min_len in 1usize..5,
    ) {
        let out = find_matches(&chars(&left), &chars(&right), min_len, BUDGET);
        prop_assert!(out.blocks.is_empty());
        prop_assert_eq!(out.status, SearchStatus::Complete);

        let projections: Vec<(usize, usize)> =
            out.blocks.iter().map(|b| (b.left, b.len)).collect();
        let set = build_spans(&left, &projections);
        prop_assert_eq!((set.min_weight, set.max_weight), (0, 0));
    }

    // The block list is sorted by (len, left) ascending.
    #[test]
    fn blocks_are_sorted(
        left in "[ab ]{0,20}",
        right in "[ab ]{0,20}",
        min_len in 1usize..4,
    ) {
        let out = find_matches(&chars(&left), &chars(&right), min_len, BUDGET);
        for pair in out.blocks.windows(2) {
            prop_assert!((pair[0].len, pair[0].left) <= (pair[1].len, pair[1].left));
        }
    }
}
