//! Streaming Tokenizer Driver
//!
//! Pushes a `Read` source through the byte-at-a-time tokenizer: one read
//! call per chunk, one `push_byte` per byte, one sink call per event.
//! The tokenizer consumes every byte unconditionally, so nothing carries
//! over between chunks and no lookahead buffering is needed.

use std::fmt;
use std::io::Read;

use crate::core::tokenizer::{ParseError, Token, Tokenizer};

/// Bytes requested from the source per read call
const CHUNK_SIZE: usize = 8192;

/// Why a feed stopped before the source was exhausted
#[derive(Debug)]
pub enum FeedError {
    /// The source failed to read
    Io(std::io::Error),
    /// The tokenizer rejected a byte
    Parse(ParseError),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Io(e) => write!(f, "read failed: {e}"),
            FeedError::Parse(e) => f.write_str(e.message()),
        }
    }
}

impl std::error::Error for FeedError {}

/// Drives a tokenizer from any `Read` source
pub struct TokenFeed<R: Read> {
    source: R,
    chunk: Vec<u8>,
}

impl<R: Read> TokenFeed<R> {
    pub fn new(source: R) -> Self {
        Self::with_chunk_size(source, CHUNK_SIZE)
    }

    pub fn with_chunk_size(source: R, size: usize) -> Self {
        TokenFeed {
            source,
            chunk: vec![0u8; size.max(1)],
        }
    }

    /// Push the whole source through the tokenizer, handing each event to
    /// `sink` while the names and data it refers to are still visible.
    ///
    /// Stops at the first read failure or rejected byte. The end-of-input
    /// check (`Tokenizer::finish`) is left to the caller, which knows
    /// whether the document is supposed to be complete.
    pub fn run<F>(&mut self, tok: &mut Tokenizer<'_>, mut sink: F) -> Result<(), FeedError>
    where
        F: FnMut(&Tokenizer<'_>, Token),
    {
        loop {
            let n = self.source.read(&mut self.chunk).map_err(FeedError::Io)?;
            if n == 0 {
                return Ok(());
            }
            for &b in &self.chunk[..n] {
                let ev = tok.push_byte(b).map_err(FeedError::Parse)?;
                sink(tok, ev);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that hands out one byte per read call
    struct Trickle(Cursor<Vec<u8>>);

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let n = buf.len().min(1);
            self.0.read(&mut buf[..n])
        }
    }

    /// Reader that fails after its prefix is drained
    struct Failing(Cursor<Vec<u8>>);

    impl Read for Failing {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.0.read(buf)? {
                0 => Err(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
                n => Ok(n),
            }
        }
    }

    fn events_from<R: Read>(source: R) -> Result<Vec<(i32, Vec<u8>)>, FeedError> {
        let mut scratch = [0u8; 128];
        let mut tok = Tokenizer::new(&mut scratch);
        let mut out = Vec::new();
        TokenFeed::new(source).run(&mut tok, |tok, ev| match ev {
            Token::Ok => {}
            Token::ElemStart | Token::ElemEnd => {
                out.push((ev.code(), tok.element_name().to_vec()))
            }
            Token::AttrStart | Token::AttrEnd => {
                out.push((ev.code(), tok.attribute_name().to_vec()))
            }
            Token::PiStart | Token::PiEnd => out.push((ev.code(), tok.pi_target().to_vec())),
            Token::Content | Token::AttrVal | Token::PiContent => {
                out.push((ev.code(), tok.data().to_vec()))
            }
        })?;
        tok.finish().map_err(FeedError::Parse)?;
        Ok(out)
    }

    #[test]
    fn test_events_reach_sink() {
        let evs = events_from(Cursor::new(b"<r a='1'>hi</r>".to_vec())).unwrap();
        assert_eq!(
            evs,
            vec![
                (Token::ElemStart.code(), b"r".to_vec()),
                (Token::AttrStart.code(), b"a".to_vec()),
                (Token::AttrVal.code(), b"1".to_vec()),
                (Token::AttrEnd.code(), b"".to_vec()),
                (Token::Content.code(), b"h".to_vec()),
                (Token::Content.code(), b"i".to_vec()),
                (Token::ElemEnd.code(), b"".to_vec()),
            ]
        );
    }

    #[test]
    fn test_chunk_boundaries_are_invisible() {
        let input = b"<doc key=\"value\"><inner>text</inner></doc>";
        let whole = events_from(Cursor::new(input.to_vec())).unwrap();
        let trickled = events_from(Trickle(Cursor::new(input.to_vec()))).unwrap();
        assert_eq!(whole, trickled);
    }

    #[test]
    fn test_rejected_byte_stops_feed() {
        let result = events_from(Cursor::new(b"<a></b>".to_vec()));
        assert!(matches!(
            result,
            Err(FeedError::Parse(ParseError::CloseMismatch))
        ));
    }

    #[test]
    fn test_read_failure_surfaces() {
        let result = events_from(Failing(Cursor::new(b"<r>".to_vec())));
        assert!(matches!(result, Err(FeedError::Io(_))));
    }
}
