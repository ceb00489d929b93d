//! Brace-counted body extraction and offset → line mapping.

/// Cut a function body starting at `start`.
///
/// Scans to the first `{`, then counts braces from depth 1 until the
/// matching `}`. Returns the text from `start` through that brace,
/// inclusive. `None` when there is no `{` or the braces never balance.
/// Braces inside string literals and comments are counted like any other.
pub fn extract_body(content: &str, start: usize) -> Option<&str> {
    let open = start + content.get(start..)?.find('{')?;
    let mut depth = 1usize;
    for (offset, byte) in content.as_bytes()[open + 1..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let close = open + 1 + offset;
                    return Some(&content[start..=close]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Maps byte offsets to 1-based line numbers.
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    pub fn line_of(&self, offset: usize) -> u32 {
        self.line_starts.partition_point(|&start| start <= offset) as u32
    }
}
