//! Presentation of ciphertext: blocks, line breaks and Polybius numbers.

use cipher_core::dispatch::Variant;

/// Symbols per block.
const BLOCK_SIZE: usize = 5;
/// Longest printed line.
const LINE_WIDTH: usize = 60;
/// Polybius numbers per printed line.
const NUMBERS_PER_LINE: usize = 25;

/// Lays out ciphertext the way the user asked for.
///
/// For the Polybius square, `blocks` separates the output into two-digit
/// numbers and `wrap` puts 25 of them on each line.
pub(crate) fn present(variant: Variant, text: &str, blocks: bool, wrap: bool) -> String {
    if variant == Variant::Polybius && blocks {
        return numbers(text, wrap.then_some(NUMBERS_PER_LINE));
    }
    let grouped = if blocks {
        group(text, BLOCK_SIZE)
    } else {
        text.to_string()
    };
    if wrap {
        wrap_lines(&grouped, LINE_WIDTH)
    } else {
        grouped
    }
}

fn group(text: &str, size: usize) -> String {
    let symbols: Vec<char> = text.chars().collect();
    symbols
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

fn numbers(digits: &str, per_line: Option<usize>) -> String {
    let digits: Vec<char> = digits.chars().collect();
    let numbers: Vec<String> = digits
        .chunks(2)
        .map(|pair| pair.iter().collect())
        .collect();
    match per_line {
        Some(count) => numbers
            .chunks(count)
            .map(|line| line.join(" "))
            .collect::<Vec<_>>()
            .join("\n"),
        None => numbers.join(" "),
    }
}

/// Breaks `text` into lines of at most `width` symbols.
///
/// A line ends at the last space that fits, and the space is dropped. A line
/// without any space is cut at exactly `width` symbols.
fn wrap_lines(text: &str, width: usize) -> String {
    let symbols: Vec<char> = text.chars().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut start = 0;
    while symbols.len() - start > width {
        let window = &symbols[start..=start + width];
        match window.iter().rposition(|&c| c == ' ') {
            Some(space) if space > 0 => {
                lines.push(window[..space].iter().collect());
                start += space + 1;
            }
            _ => {
                lines.push(window[..width].iter().collect());
                start += width;
            }
        }
    }
    lines.push(symbols[start..].iter().collect());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_of_five() {
        assert_eq!(group("KHOORZRUOG", 5), "KHOOR ZRUOG");
        assert_eq!(group("ABCDEFG", 5), "ABCDE FG");
        assert_eq!(group("", 5), "");
    }

    #[test]
    fn test_wrap_breaks_at_last_space() {
        let text = group(&"A".repeat(60), 5);
        let wrapped = wrap_lines(&text, LINE_WIDTH);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), 59);
        assert_eq!(lines[1], "AAAAA AAAAA");
    }

    #[test]
    fn test_wrap_hard_breaks_without_spaces() {
        let wrapped = wrap_lines(&"B".repeat(130), LINE_WIDTH);
        let lengths: Vec<usize> = wrapped.lines().map(str::len).collect();
        assert_eq!(lengths, vec![60, 60, 10]);
    }

    #[test]
    fn test_short_text_is_not_wrapped() {
        assert_eq!(wrap_lines("SHORT TEXT", LINE_WIDTH), "SHORT TEXT");
    }

    #[test]
    fn test_polybius_numbers() {
        assert_eq!(present(Variant::Polybius, "1154", true, false), "11 54");
        let wrapped = present(Variant::Polybius, &"12".repeat(26), true, true);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split(' ').count(), 25);
        assert_eq!(lines[1], "12");
    }

    #[test]
    fn test_plain_presentation_is_unchanged() {
        assert_eq!(present(Variant::Caesar, "KHOOR", false, false), "KHOOR");
        assert_eq!(present(Variant::Caesar, "KHOORZRUOG", true, false), "KHOOR ZRUOG");
    }
}
