/*
 * This module turns raw file chunks into case-folded word tokens and feeds them
 * into a `WordTally`. A word is a maximal run of Unicode word characters (the
 * `\w` class of the `regex` crate, which is Unicode-aware by default).
 *
 * Two pieces of state survive between chunks:
 * - `Utf8ChunkDecoder` keeps an incomplete trailing UTF-8 sequence so a
 *   multi-byte character split by a fixed-size read is decoded whole.
 * - `ChunkTokenizer` keeps a token that touches the end of a chunk, since the
 *   next chunk may continue it. Without this a word straddling a boundary would
 *   be counted as two shorter words.
 */
use crate::core::word_tally::WordTally;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+").expect("word pattern is a valid regex"));

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/*
 * Tallies every word of a self-contained buffer. No state is carried, so a
 * word running into the end of `text` is counted as it stands.
 */
pub fn count_words(text: &str, tally: &mut WordTally) {
    for word in WORD_REGEX.find_iter(text) {
        tally.increment(word.as_str().to_lowercase());
    }
}

/*
 * Returns the case-folded tokens of `text` in order of appearance.
 */
#[cfg(test)]
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    WORD_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/*
 * Streaming tokenizer for text that arrives in arbitrary pieces.
 * Call `feed` for every decoded chunk and `finish` once the input is exhausted;
 * the union of both tallies exactly the words of the concatenated input.
 * Only the new chunk is scanned on each call, so a word spanning many chunks
 * costs time linear in its length.
 */
#[derive(Debug, Default)]
pub struct ChunkTokenizer {
    pending: String,
}

impl ChunkTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /*
     * Tallies every word of `text` that is known to be complete. A word
     * touching the start of `text` continues the held-back one; a word that
     * reaches the end of `text` is held back until the next call.
     */
    pub fn feed(&mut self, text: &str, tally: &mut WordTally) {
        if text.is_empty() {
            return;
        }
        let mut words = WORD_REGEX.find_iter(text).peekable();

        if !self.pending.is_empty() {
            match words.next_if(|word| word.start() == 0) {
                Some(head) if head.end() == text.len() => {
                    self.pending.push_str(head.as_str());
                    return;
                }
                Some(head) => {
                    self.pending.push_str(head.as_str());
                    self.flush_pending(tally);
                }
                None => self.flush_pending(tally),
            }
        }

        for word in words {
            if word.end() == text.len() {
                self.pending.push_str(word.as_str());
            } else {
                tally.increment(word.as_str().to_lowercase());
            }
        }
    }

    /* Counts the held-back word, if any. */
    pub fn finish(&mut self, tally: &mut WordTally) {
        self.flush_pending(tally);
    }

    #[cfg(test)]
    pub(crate) fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    fn flush_pending(&mut self, tally: &mut WordTally) {
        if !self.pending.is_empty() {
            let word = std::mem::take(&mut self.pending);
            tally.increment(word.to_lowercase());
        }
    }
}

/*
 * Incremental UTF-8 decoder for fixed-size byte reads. Invalid sequences are
 * replaced with U+FFFD; an incomplete sequence at the end of a chunk is kept
 * and completed by the next one. A leading byte-order mark is dropped.
 */
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    carry: Vec<u8>,
    started: bool,
}

impl Utf8ChunkDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, bytes: &[u8]) -> String {
        let mut input = std::mem::take(&mut self.carry);
        input.extend_from_slice(bytes);

        let mut rest: &[u8] = &input;
        if !self.started {
            if rest.len() < UTF8_BOM.len() && UTF8_BOM.starts_with(rest) {
                // Too short to tell yet.
                self.carry = input;
                return String::new();
            }
            self.started = true;
            if rest.starts_with(UTF8_BOM) {
                rest = &rest[UTF8_BOM.len()..];
            }
        }

        let mut decoded = String::with_capacity(rest.len());
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    decoded.push_str(valid);
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    decoded.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match e.error_len() {
                        Some(bad_len) => {
                            decoded.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[bad_len..];
                        }
                        None => {
                            self.carry = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        decoded
    }

    /* Flushes whatever is still carried, lossily. */
    pub fn finish(&mut self) -> String {
        let carry = std::mem::take(&mut self.carry);
        if carry.is_empty() {
            String::new()
        } else {
            String::from_utf8_lossy(&carry).into_owned()
        }
    }
}
