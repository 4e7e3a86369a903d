//! Post parsing for generated LinkedIn copy.
//!
//! The generation prompt asks the model for banner-delimited posts, but
//! models drift between `--- POST 1 ---`, `Post 1:` and `# Post 1`. The
//! configured split pattern covers all three; anything that does not split
//! cleanly falls back to a single post holding the whole text.
//!
//! # Algorithm
//!
//! 1. Blank input goes straight to the fallback.
//! 2. Split on the delimiter pattern.
//! 3. Trim each segment, drop it if shorter than `min_post_length`
//!    characters, otherwise accept it with the next id and the style at that
//!    position (or `Variation N` past the configured styles). Stop at
//!    `max_posts`.
//! 4. Fallback when nothing was accepted: the trimmed input as one
//!    [`FALLBACK_STYLE`] post, or nothing if the input is blank.

use super::entities::ParsedPost;
use crate::config::PostSettings;
use crate::core::error::DomainError;
use crate::core::string::word_count;
use regex::Regex;

/// Style label used when the whole text becomes a single post
pub const FALLBACK_STYLE: &str = "Generated";

/// Posts from one parse and how they were produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub posts: Vec<ParsedPost>,
    /// The text did not split, so it became a single [`FALLBACK_STYLE`] post
    pub fallback: bool,
}

/// Splits raw model output into [`ParsedPost`]s
#[derive(Debug, Clone)]
pub struct PostParser {
    settings: PostSettings,
    pattern: Regex,
}

impl PostParser {
    /// Build a parser, compiling the split pattern up front
    pub fn new(settings: PostSettings) -> Result<Self, DomainError> {
        let pattern = settings.compile_pattern()?;
        Ok(Self { settings, pattern })
    }

    pub fn settings(&self) -> &PostSettings {
        &self.settings
    }

    /// Parse raw output into at most `max_posts` posts
    pub fn parse(&self, raw_posts: &str) -> Vec<ParsedPost> {
        self.parse_with_outcome(raw_posts).posts
    }

    /// Parse raw output, reporting whether the fallback produced the posts
    pub fn parse_with_outcome(&self, raw_posts: &str) -> ParseOutcome {
        if self.settings.max_posts == 0 || raw_posts.trim().is_empty() {
            return ParseOutcome::default();
        }

        let mut posts: Vec<ParsedPost> = Vec::new();
        for segment in self.pattern.split(raw_posts) {
            let cleaned = segment.trim();
            if cleaned.chars().count() < self.settings.min_post_length {
                continue;
            }

            let id = posts.len() + 1;
            posts.push(ParsedPost::new(id, self.style_for_index(id - 1), cleaned));

            if posts.len() >= self.settings.max_posts {
                break;
            }
        }

        if posts.is_empty() {
            return Self::fallback(raw_posts);
        }
        ParseOutcome {
            posts,
            fallback: false,
        }
    }

    fn style_for_index(&self, index: usize) -> String {
        match self.settings.post_styles.get(index) {
            Some(style) => style.clone(),
            None => format!("Variation {}", index + 1),
        }
    }

    fn fallback(raw_posts: &str) -> ParseOutcome {
        ParseOutcome {
            posts: vec![ParsedPost::new(1, FALLBACK_STYLE, raw_posts.trim())],
            fallback: true,
        }
    }

    /// A post is valid when it has at least `min_post_length` characters
    pub fn validate_post(&self, post: &ParsedPost) -> bool {
        !post.content.is_empty() && post.char_len() >= self.settings.min_post_length
    }

    /// Whitespace-separated word count
    pub fn word_count(&self, post: &ParsedPost) -> usize {
        word_count(&post.content)
    }

    /// Word count within the recommended inclusive range
    pub fn is_optimal_length(&self, post: &ParsedPost) -> bool {
        let words = self.word_count(post);
        (self.settings.min_word_count..=self.settings.max_word_count).contains(&words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> PostParser {
        PostParser::new(PostSettings::default()).unwrap()
    }

    fn body(c: char) -> String {
        std::iter::repeat_n(c, 60).collect()
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_dashed_banners_split_into_styled_posts() {
        let raw = format!(
            "--- POST 1 ---\n{}\n--- POST 2 ---\n{}",
            body('A'),
            body('B')
        );
        let posts = parser().parse(&raw);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0], ParsedPost::new(1, "Storytelling", body('A')));
        assert_eq!(posts[1], ParsedPost::new(2, "Data-Driven", body('B')));
    }

    #[test]
    fn test_label_and_heading_markers_case_insensitive() {
        let raw = format!(
            "post 1: {}\n# POST 2\n{}\nPOST 3- {}",
            body('a'),
            body('b'),
            body('c')
        );
        let posts = parser().parse(&raw);
        let styles: Vec<_> = posts.iter().map(|p| p.style.as_str()).collect();
        assert_eq!(styles, ["Storytelling", "Data-Driven", "Thought Leadership"]);
        assert_eq!(posts[2].content, body('c'));
    }

    #[test]
    fn test_preamble_counts_as_a_segment() {
        // Text before the first marker is long enough to be kept
        let preamble = "Here are three LinkedIn posts tailored for healthcare leaders today.";
        let raw = format!("{}\n--- POST 1 ---\n{}", preamble, body('A'));
        let posts = parser().parse(&raw);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].content, preamble);
        assert_eq!(posts[1].id, 2);
    }

    #[test]
    fn test_short_segments_are_skipped_without_gaps() {
        let raw = format!(
            "Intro\n--- POST 1 ---\n{}\n--- POST 2 ---\ntoo short\n--- POST 3 ---\n{}",
            body('A'),
            body('C')
        );
        let posts = parser().parse(&raw);
        let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2]);
        assert_eq!(posts[1].content, body('C'));
        assert_eq!(posts[1].style, "Data-Driven");
    }

    #[test]
    fn test_never_exceeds_max_posts() {
        let raw: String = (1..=6)
            .map(|i| format!("--- POST {} ---\n{}\n", i, body('x')))
            .collect();
        let posts = parser().parse(&raw);
        assert_eq!(posts.len(), 3);
        assert_eq!(posts.last().map(|p| p.id), Some(3));
    }

    #[test]
    fn test_overflow_positions_get_variation_label() {
        let settings = PostSettings {
            max_posts: 5,
            ..Default::default()
        };
        let parser = PostParser::new(settings).unwrap();
        let raw: String = (1..=5)
            .map(|i| format!("--- POST {} ---\n{}\n", i, body('y')))
            .collect();
        let posts = parser.parse(&raw);
        assert_eq!(posts.len(), 5);
        assert_eq!(posts[3].style, "Variation 4");
        assert_eq!(posts[4].style, "Variation 5");
    }

    #[test]
    fn test_empty_and_whitespace_return_nothing() {
        assert!(parser().parse("").is_empty());
        assert!(parser().parse("  \n\t ").is_empty());
    }

    #[test]
    fn test_short_blob_falls_back_to_single_post() {
        let posts = parser().parse("short");
        assert_eq!(posts, vec![ParsedPost::new(1, FALLBACK_STYLE, "short")]);
    }

    #[test]
    fn test_unmarked_text_falls_back_trimmed() {
        let posts = parser().parse("\n  Just one long post without any markers at all. \n");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].style, "Generated");
        assert_eq!(
            posts[0].content,
            "Just one long post without any markers at all."
        );
    }

    #[test]
    fn test_only_short_segments_fall_back_to_whole_text() {
        let raw = "--- POST 1 ---\nHi\n--- POST 2 ---\nThere";
        let posts = parser().parse(raw);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].style, FALLBACK_STYLE);
        assert_eq!(posts[0].content, raw);
        assert!(parser().parse_with_outcome(raw).fallback);
    }

    #[test]
    fn test_style_named_generated_is_not_a_fallback() {
        let settings = PostSettings {
            post_styles: vec![FALLBACK_STYLE.to_string()],
            ..Default::default()
        };
        let parser = PostParser::new(settings).unwrap();

        let outcome = parser.parse_with_outcome(&format!("--- POST 1 ---\n{}", body('g')));
        assert!(!outcome.fallback);
        assert_eq!(outcome.posts.len(), 1);
        assert_eq!(outcome.posts[0].style, FALLBACK_STYLE);

        assert!(parser.parse_with_outcome("short").fallback);
        assert_eq!(parser.parse_with_outcome("  "), ParseOutcome::default());
    }

    #[test]
    fn test_parse_invariants_hold_for_mixed_inputs() {
        let inputs = [
            String::new(),
            "x".to_string(),
            body('z'),
            format!("Post 1: {}\nPost 2: tiny\nPost 3: {}", body('a'), body('b')),
            (1..=9).map(|i| format!("# Post {}\n{}\n", i, body('q'))).collect(),
        ];
        let parser = parser();
        for raw in &inputs {
            let posts = parser.parse(raw);
            assert!(posts.len() <= 3);
            for (i, post) in posts.iter().enumerate() {
                assert_eq!(post.id, i + 1);
                if post.style != FALLBACK_STYLE {
                    assert!(post.char_len() >= 50);
                }
            }
        }
    }

    #[test]
    fn test_min_length_counts_characters_not_bytes() {
        // 50 two-byte characters
        let accented: String = std::iter::repeat_n('é', 50).collect();
        let raw = format!("--- POST 1 ---\n{}\n--- POST 2 ---\nx", accented);
        let posts = parser().parse(&raw);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].style, "Storytelling");
    }

    #[test]
    fn test_zero_max_posts_yields_nothing() {
        let settings = PostSettings {
            max_posts: 0,
            ..Default::default()
        };
        assert!(PostParser::new(settings).unwrap().parse("anything").is_empty());
    }

    #[test]
    fn test_validate_post() {
        let parser = parser();
        assert!(parser.validate_post(&ParsedPost::new(1, "Storytelling", body('a'))));
        assert!(!parser.validate_post(&ParsedPost::new(1, "Storytelling", "short")));
        assert!(!parser.validate_post(&ParsedPost::new(1, "Storytelling", "")));
    }

    #[test]
    fn test_word_count_and_optimal_length() {
        let parser = parser();
        let post = ParsedPost::new(1, "Data-Driven", "  three little\nwords ");
        assert_eq!(parser.word_count(&post), 3);
        assert!(!parser.is_optimal_length(&post));

        assert!(parser.is_optimal_length(&ParsedPost::new(1, "x", words(150))));
        assert!(parser.is_optimal_length(&ParsedPost::new(1, "x", words(300))));
        assert!(!parser.is_optimal_length(&ParsedPost::new(1, "x", words(149))));
        assert!(!parser.is_optimal_length(&ParsedPost::new(1, "x", words(301))));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let settings = PostSettings {
            post_split_pattern: "[".to_string(),
            ..Default::default()
        };
        assert!(PostParser::new(settings).is_err());
    }
}
