//! # Itinerary Segmenter Module
//!
//! ## Purpose
//! Splits an LLM-produced itinerary document into per-day text blocks keyed
//! by day number, using the `# Day N` header convention the generation
//! prompt requests.
//!
//! ## Input/Output Specification
//! - **Input**: Itinerary text (Markdown-shaped, structure not guaranteed)
//! - **Output**: Ordered map of day number to the verbatim block for that day
//! - **Invariant**: Blocks are contiguous and non-overlapping; each runs from
//!   its header start to the next header start or end of document
//!
//! A document with no day headers becomes day 1 in its entirety. A repeated
//! day number keeps the last occurrence.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Day header: optional Markdown heading markers, the word `Day`, an integer
static RE_DAY_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:#{1,3}\s*)?Day\s*(\d+)").unwrap());

/// Parse the itinerary text into per-day blocks.
pub fn parse_itinerary_to_days(text: &str) -> BTreeMap<u32, String> {
    let mut positions: Vec<(u32, usize)> = Vec::new();

    for caps in RE_DAY_HEADER.captures_iter(text) {
        let full = caps.get(0).expect("match always has group 0");
        match caps[1].parse::<u32>() {
            Ok(day_number) => positions.push((day_number, full.start())),
            Err(_) => {
                tracing::debug!("Skipping unparseable day number: {}", &caps[1]);
            }
        }
    }

    positions.sort_by_key(|&(_, start)| start);

    let mut days = BTreeMap::new();

    if positions.is_empty() {
        // No headers at all: the whole document is day 1, verbatim.
        days.insert(1, text.to_string());
        return days;
    }

    for (i, &(day_number, start)) in positions.iter().enumerate() {
        let end = positions
            .get(i + 1)
            .map(|&(_, next_start)| next_start)
            .unwrap_or(text.len());
        days.insert(day_number, text[start..end].trim().to_string());
    }

    tracing::debug!("Segmented itinerary into {} day blocks", days.len());
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_markdown_headers() {
        let days = parse_itinerary_to_days("# Day 1\nfoo\n# Day 2\nbar");
        assert_eq!(days.len(), 2);
        assert_eq!(days[&1], "# Day 1\nfoo");
        assert_eq!(days[&2], "# Day 2\nbar");
    }

    #[test]
    fn block_starts_at_its_header() {
        let days = parse_itinerary_to_days("intro text\n## Day 1\n- Morning: walk\n## Day 2\n- rest");
        assert!(days[&1].starts_with("## Day 1"));
        assert!(days[&2].starts_with("## Day 2"));
    }

    #[test]
    fn headers_without_markdown_markers() {
        let days = parse_itinerary_to_days("Day 1: museums\nDay 2: beaches");
        assert_eq!(days[&1], "Day 1: museums");
        assert_eq!(days[&2], "Day 2: beaches");
    }

    #[test]
    fn no_headers_means_single_day() {
        let days = parse_itinerary_to_days("no headers here");
        assert_eq!(days.len(), 1);
        assert_eq!(days[&1], "no headers here");
    }

    #[test]
    fn last_block_runs_to_end_of_document() {
        let days = parse_itinerary_to_days("# Day 1\na\n# Day 2\nb\nc\nd");
        assert_eq!(days[&2], "# Day 2\nb\nc\nd");
    }

    #[test]
    fn duplicate_day_number_keeps_last() {
        let days = parse_itinerary_to_days("# Day 1\nfirst\n# Day 1\nsecond");
        assert_eq!(days.len(), 1);
        assert_eq!(days[&1], "# Day 1\nsecond");
    }

    #[test]
    fn non_sequential_days_are_kept() {
        let days = parse_itinerary_to_days("# Day 3\nlate\n# Day 1\nearly");
        assert_eq!(days.len(), 2);
        assert_eq!(days[&3], "# Day 3\nlate");
        assert_eq!(days[&1], "# Day 1\nearly");
    }

    #[test]
    fn multi_digit_day_numbers() {
        let days = parse_itinerary_to_days("# Day 10\ntenth day");
        assert_eq!(days[&10], "# Day 10\ntenth day");
    }

    #[test]
    fn empty_input_is_day_one() {
        let days = parse_itinerary_to_days("");
        assert_eq!(days[&1], "");
    }
}
