//! Byte-stream tokenizer: maximal runs of ASCII letters become words, every
//! other byte passes through on its own.

use std::io::{self, Bytes, Read};
use std::iter::Peekable;

/// Initial word buffer capacity: a 60-letter word plus one spare byte.
pub const WORD_CAPACITY: usize = 61;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A non-empty run of ASCII alphabetic bytes.
    Word(Vec<u8>),
    /// Any other byte, emitted verbatim.
    Literal(u8),
}

#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Iterator of tokens over a byte source.
///
/// The byte that ends a word is not consumed by the word; it is yielded as
/// the next `Literal`. A read error is yielded once and ends iteration.
pub struct Tokenizer<R: Read> {
    bytes: Peekable<Bytes<R>>,
    failed: bool,
}

impl<R: Read> Tokenizer<R> {
    /// Wrap `reader`. Byte-at-a-time reads are cheap only on a buffered source.
    pub fn new(reader: R) -> Self {
        Self {
            bytes: reader.bytes().peekable(),
            failed: false,
        }
    }

    fn read_word(&mut self, first: u8) -> io::Result<Vec<u8>> {
        let mut word = Vec::with_capacity(WORD_CAPACITY);
        word.push(first);
        loop {
            match self.bytes.peek() {
                Some(Ok(b)) if is_word_byte(*b) => {
                    word.push(*b);
                    self.bytes.next();
                }
                Some(Ok(_)) | None => return Ok(word),
                Some(Err(_)) => {
                    // Surface the error; the partial word is dropped with it.
                    return match self.bytes.next() {
                        Some(Err(e)) => Err(e),
                        _ => Ok(word),
                    };
                }
            }
        }
    }
}

impl<R: Read> Iterator for Tokenizer<R> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let res = match self.bytes.next()? {
            Ok(b) if is_word_byte(b) => self.read_word(b).map(Token::Word),
            Ok(b) => Ok(Token::Literal(b)),
            Err(e) => Err(e),
        };
        self.failed = res.is_err();
        Some(res)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn tokens(input: &[u8]) -> Vec<Token> {
        Tokenizer::new(Cursor::new(input))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    fn w(s: &str) -> Token {
        Token::Word(s.as_bytes().to_vec())
    }

    fn l(b: u8) -> Token {
        Token::Literal(b)
    }

    #[test]
    fn splits_words_and_literals() {
        assert_eq!(
            tokens(b"hi, you"),
            vec![w("hi"), l(b','), l(b' '), w("you")]
        );
    }

    #[test]
    fn digits_and_punctuation_break_words() {
        assert_eq!(
            tokens(b"ab1cd-ef_"),
            vec![w("ab"), l(b'1'), w("cd"), l(b'-'), w("ef"), l(b'_')]
        );
    }

    #[test]
    fn word_at_end_of_stream_is_finalized() {
        assert_eq!(tokens(b"  end"), vec![l(b' '), l(b' '), w("end")]);
    }

    #[test]
    fn empty_stream_has_no_tokens() {
        assert!(tokens(b"").is_empty());
    }

    #[test]
    fn only_ascii_letters_form_words() {
        // 0xE9 is not ASCII alphabetic.
        assert_eq!(
            tokens(b"caf\xe9s"),
            vec![w("caf"), l(0xe9), w("s")]
        );
    }

    #[test]
    fn long_word_is_not_truncated() {
        let long = "x".repeat(10_000);
        let input = format!("{long}.");
        assert_eq!(tokens(input.as_bytes()), vec![w(&long), l(b'.')]);
    }

    struct FailAfter {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "boom")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn read_error_is_yielded_once() {
        let src = FailAfter {
            data: Cursor::new(b"a ".to_vec()),
        };
        let mut t = Tokenizer::new(src);
        assert_eq!(t.next().unwrap().unwrap(), w("a"));
        assert_eq!(t.next().unwrap().unwrap(), l(b' '));
        assert!(t.next().unwrap().is_err());
        assert!(t.next().is_none());
    }
}
