/// Pre-computed index of line start positions.
///
/// The scanner reports diagnostics by 1-based line number; renderers that
/// label source text (ariadne reports in `rillc`) need byte ranges. The
/// index is built once per source file and maps a line number back to the
/// byte range covering that line.
#[derive(Debug)]
pub struct LineIndex {
    /// Byte offset of the start of each line. The first entry is always 0.
    line_starts: Vec<u32>,
    /// Total length of the source in bytes.
    len: u32,
}

impl LineIndex {
    /// Build a line index by scanning the source text for newlines.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push((i + 1) as u32);
            }
        }
        Self {
            line_starts,
            len: source.len() as u32,
        }
    }

    /// Byte range of a 1-based line, excluding its trailing newline.
    ///
    /// Lines past the end of the source clamp to the last line, so a
    /// diagnostic at the line where input ended always maps somewhere
    /// renderable.
    pub fn line_span(&self, line: u32) -> (u32, u32) {
        let idx = (line.max(1) as usize - 1).min(self.line_starts.len() - 1);
        let start = self.line_starts[idx];
        let end = match self.line_starts.get(idx + 1) {
            // Exclude the '\n' that terminated this line.
            Some(&next) => next - 1,
            None => self.len,
        };
        (start, end)
    }

    /// Number of lines in the source.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
