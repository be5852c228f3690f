//! Bracket markers around query matches, for plain-text rendering.

use regex::RegexBuilder;

const MATCH_OPEN: char = '[';
const MATCH_CLOSE: char = ']';

/// Wraps every case-insensitive occurrence of `query` in `text` with
/// `[` and `]`.
///
/// Returns `text` unchanged for an empty query. The query is matched
/// literally, whitespace included, so markers agree with `filter_places`.
pub fn highlight_matches(text: &str, query: &str) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let pattern = regex::escape(query);
    let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
        return text.to_string();
    };

    re.replace_all(text, |caps: &regex::Captures<'_>| {
        format!("{MATCH_OPEN}{}{MATCH_CLOSE}", &caps[0])
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::highlight_matches;

    #[test]
    fn wraps_each_match_preserving_original_case() {
        assert_eq!(
            highlight_matches("600 Montgomery St", "MONTGOMERY"),
            "600 [Montgomery] St"
        );
        assert_eq!(highlight_matches("st st", "st"), "[st] [st]");
    }

    #[test]
    fn empty_query_leaves_text_untouched() {
        assert_eq!(highlight_matches("Crocker Galleria", ""), "Crocker Galleria");
    }

    #[test]
    fn whitespace_query_marks_the_spaces_it_filtered_on() {
        assert_eq!(highlight_matches("50 Post St", " "), "50[ ]Post[ ]St");
        assert_eq!(highlight_matches("Galleria", " "), "Galleria");
    }

    #[test]
    fn metacharacters_match_literally() {
        assert_eq!(highlight_matches("Market St & Battery St", "t & b"), "Market S[t & B]attery St");
        assert_eq!(highlight_matches("a.b", "."), "a[.]b");
    }
}
