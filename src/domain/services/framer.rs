#[cfg(test)]
#[path = "framer_test.rs"]
mod tests;

const DELIMITER: u8 = b'\n';

/// Turns an arbitrary sequence of byte chunks into an ordered sequence of
/// complete lines, carrying partial data across chunk boundaries.
#[derive(Default)]
pub struct Framer {
    buffer: Vec<u8>,
}

impl Framer {
    pub fn new() -> Framer {
        return Framer { buffer: Vec::new() };
    }

    /// Appends a chunk to the buffer and emits every line it completes.
    ///
    /// Emission is gated on the newly arrived chunk containing the
    /// delimiter, not on the accumulated buffer containing one. When the
    /// chunk does, the entire buffer is split and every piece but the last
    /// is emitted in order; the last piece, possibly empty, is retained as
    /// the new buffer. No line length limit is imposed.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        if !chunk.contains(&DELIMITER) {
            return Vec::new();
        }

        let mut pieces = self
            .buffer
            .split(|byte| return *byte == DELIMITER)
            .map(|piece| return piece.to_vec())
            .collect::<Vec<Vec<u8>>>();

        let rest = pieces.pop().unwrap_or_default();
        let lines = pieces
            .iter()
            .map(|piece| return String::from_utf8_lossy(piece).to_string())
            .collect::<Vec<String>>();

        self.buffer = rest;

        return lines;
    }

    pub fn buffered(&self) -> &[u8] {
        return &self.buffer;
    }
}
