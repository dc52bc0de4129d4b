//! Greedy word wrapping into a bounded box.

use log::trace;

use crate::consts::{ELLIPSIS, MIN_SPLIT_GLYPHS, MIN_WRAP_GLYPHS, REFERENCE_GLYPH};
use crate::font::Typeface;

/// Wrap `text` into at most `max_lines` lines narrower than `max_width`.
///
/// Returns the newline-joined lines and the pixel width of the longest one.
/// Words wider than the box are split once at their midpoint with a
/// trailing hyphen; a fragment that still does not fit an empty line is cut
/// down to its first character. Overflowing lines are dropped and the last
/// kept line gets `"..."` appended, which may push it past `max_width`.
///
/// Boxes narrower than three reference glyphs skip wrapping and return a
/// single truncated line instead.
pub fn wrap_text<F>(text: &str, font: &F, max_width: f32, max_lines: usize) -> (String, f32)
where
    F: Typeface + ?Sized,
{
    let glyph_w = font.text_width(REFERENCE_GLYPH);
    if max_width < glyph_w * MIN_WRAP_GLYPHS {
        return truncate_text(text, font, max_width, glyph_w);
    }

    let words = break_long_words(text, font, max_width, glyph_w);
    let mut lines = fill_lines(&words, font, max_width);

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push_str(ELLIPSIS);
        }
    }

    let longest = lines
        .iter()
        .map(|line| font.text_width(line))
        .fold(0.0, f32::max);
    (lines.join("\n"), longest)
}

/// Keep as many leading chars as reference glyphs fit (at least one).
fn truncate_text<F>(text: &str, font: &F, max_width: f32, glyph_w: f32) -> (String, f32)
where
    F: Typeface + ?Sized,
{
    let max_chars = ((max_width / glyph_w) as usize).max(1);
    let mut truncated: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        truncated.push_str(ELLIPSIS);
    }
    trace!("box {max_width}px too narrow to wrap, truncated to {truncated:?}");
    let width = font.text_width(&truncated);
    (truncated, width)
}

fn break_long_words<F>(text: &str, font: &F, max_width: f32, glyph_w: f32) -> Vec<String>
where
    F: Typeface + ?Sized,
{
    let mut words = Vec::new();
    for word in text.split_whitespace() {
        if font.text_width(word) < max_width {
            words.push(word.to_string());
        } else if max_width < glyph_w * MIN_SPLIT_GLYPHS {
            words.extend(word.chars().next().map(String::from));
        } else {
            let mid = word.chars().count() / 2;
            let split = word.char_indices().nth(mid).map_or(word.len(), |(i, _)| i);
            let (head, tail) = word.split_at(split);
            words.push(format!("{head}-"));
            words.push(tail.to_string());
        }
    }
    words
}

fn fill_lines<F>(words: &[String], font: &F, max_width: f32) -> Vec<String>
where
    F: Typeface + ?Sized,
{
    let mut lines = Vec::new();
    let mut next = 0;

    while next < words.len() {
        let mut line = String::new();
        while let Some(word) = words.get(next) {
            let candidate = if line.is_empty() {
                word.clone()
            } else {
                format!("{line} {word}")
            };
            if font.text_width(&candidate) >= max_width {
                break;
            }
            line = candidate;
            next += 1;
        }

        // nothing fit: keep one char so the scan always advances
        if line.is_empty() {
            let word = &words[next];
            line.extend(word.chars().next());
            trace!("forcing {line:?} from overlong fragment {word:?}");
            next += 1;
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::testing::MonoFace;

    fn mono() -> MonoFace {
        MonoFace::new(10.0, 20.0)
    }

    #[test]
    fn short_text_is_returned_unchanged() {
        let font = mono();
        let (text, width) = wrap_text("Milk", &font, 1000.0, 3);
        assert_eq!(text, "Milk");
        assert_eq!(width, font.text_width("Milk"));
    }

    #[test]
    fn wraps_greedily_on_whitespace() {
        // 100px box fits 9 chars
        let (text, width) = wrap_text("This is a long text that should wrap", &mono(), 100.0, 10);
        assert_eq!(text, "This is a\nlong text\nthat\nshould\nwrap");
        assert_eq!(width, 90.0);
    }

    #[test]
    fn limits_line_count_with_ellipsis() {
        let (text, width) = wrap_text("This is a long text that should wrap", &mono(), 100.0, 2);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines, vec!["This is a", "long text..."]);
        // ellipsis line may exceed the box
        assert_eq!(width, 120.0);
    }

    #[test]
    fn line_count_never_exceeds_max_lines() {
        let font = mono();
        for max_lines in 1..5 {
            let (text, _) = wrap_text("one two three four five six seven eight nine", &font, 60.0, max_lines);
            assert!(text.split('\n').count() <= max_lines);
        }
    }

    #[test]
    fn long_word_is_split_with_hyphen() {
        let font = MonoFace::new(1.0, 10.0);
        let word = "Pneumonoultramicroscopicsilicovolcanoconiosis";
        let (text, width) = wrap_text(word, &font, 40.0, 2);
        assert_eq!(text, "Pneumonoultramicroscop-\nicsilicovolcanoconiosis");
        assert_eq!(width, 23.0);
    }

    #[test]
    fn overlong_fragment_forces_single_char() {
        // fragments of 23 chars never fit 40px at 10px/char
        let word = "Pneumonoultramicroscopicsilicovolcanoconiosis";
        let (text, _) = wrap_text(word, &mono(), 40.0, 2);
        assert_eq!(text, "P\ni");
    }

    #[test]
    fn very_narrow_box_keeps_first_char_of_long_words() {
        // box narrower than 1.5 glyphs
        let font = mono();
        let words = break_long_words("apple pie", &font, 14.0, 10.0);
        assert_eq!(words, vec!["a".to_string(), "p".to_string()]);
    }

    #[test]
    fn narrow_box_truncates_to_prefix() {
        let (text, width) = wrap_text("Butter", &mono(), 25.0, 3);
        assert_eq!(text, "Bu...");
        assert_eq!(width, 50.0);
        assert!("Butter".starts_with(text.trim_end_matches(ELLIPSIS)));
    }

    #[test]
    fn narrow_box_keeps_short_text_whole() {
        let (text, _) = wrap_text("Ei", &mono(), 25.0, 3);
        assert_eq!(text, "Ei");
    }

    #[test]
    fn narrow_box_keeps_at_least_one_char() {
        let (text, _) = wrap_text("Tea", &mono(), 5.0, 1);
        assert_eq!(text, "T...");
    }

    #[test]
    fn empty_text_has_no_lines() {
        let (text, width) = wrap_text("", &mono(), 200.0, 3);
        assert_eq!(text, "");
        assert_eq!(width, 0.0);
    }

    #[test]
    fn split_respects_multibyte_chars() {
        let font = mono();
        let words = break_long_words("Käsekuchenstück", &font, 100.0, 10.0);
        assert_eq!(words, vec!["Käsekuc-".to_string(), "henstück".to_string()]);
    }
}
