//! Streaming whitespace-delimited tokens from an input source.
//!
//! A [`TokenSource`](struct.TokenSource.html) reads the leading site count
//! directly, then hands the rest of its input to a producer thread. The
//! producer sends each token over a rendezvous channel, in input order,
//! and closes the channel after the last one. The consuming
//! [`TokenStream`](struct.TokenStream.html) is a plain iterator.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt::{self, Display};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::{debug, info, trace};

use super::{Error, Result};

/// Where to read tokens from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Input {
    /// Standard input, selected by the name `stdin`.
    #[default]
    Stdin,
    /// A file.
    Path(PathBuf),
}

impl Display for Input {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Input::Stdin => formatter.write_str("stdin"),
            Input::Path(ref path) => write!(formatter, "{}", path.display()),
        }
    }
}

impl FromStr for Input {
    type Err = Infallible;

    fn from_str(name: &str) -> std::result::Result<Self, Infallible> {
        Ok(if name == "stdin" {
            Input::Stdin
        } else {
            Input::Path(PathBuf::from(name))
        })
    }
}

/// Splits a reader into whitespace-delimited words, across line breaks.
struct Words {
    reader: Box<dyn BufRead + Send>,
    pending: VecDeque<String>,
}

impl Iterator for Words {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(Ok(word));
            }

            // Bytes that are not UTF-8 become U+FFFD rather than an error.
            let mut line = Vec::new();
            match self.reader.read_until(b'\n', &mut line) {
                Ok(0) => return None,
                Ok(_) => {
                    let line = String::from_utf8_lossy(&line);
                    self.pending.extend(line.split_whitespace().map(str::to_owned));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// An input source, split into whitespace-delimited tokens.
pub struct TokenSource {
    words: Words,
}

impl fmt::Debug for TokenSource {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "TokenSource({} pending)", self.words.pending.len())
    }
}

impl TokenSource {
    /// Opens the given input.
    pub fn open(input: &Input) -> Result<Self> {
        let source = match *input {
            Input::Stdin => TokenSource::from_reader(BufReader::new(io::stdin())),
            Input::Path(ref path) => {
                let file = File::open(path).map_err(|source| Error::Open {
                    path: path.clone(),
                    source,
                })?;
                TokenSource::from_reader(BufReader::new(file))
            }
        };

        info!("Opened {} for input.", input);
        Ok(source)
    }

    /// Tokenizes an arbitrary reader.
    pub fn from_reader<R: BufRead + Send + 'static>(reader: R) -> Self {
        TokenSource {
            words: Words {
                reader: Box::new(reader),
                pending: VecDeque::new(),
            },
        }
    }

    /// Reads the next token as the number of sites.
    pub fn site_count(&mut self) -> Result<i64> {
        match self.words.next() {
            Some(word) => parse_int(word?),
            None => Err(Error::MissingSiteCount),
        }
    }

    /// Streams the remaining tokens as integers.
    ///
    /// The first malformed token is delivered as an error and ends the
    /// stream.
    pub fn into_ints(self) -> Result<TokenStream<i64>> {
        self.stream(parse_int)
    }

    /// Streams the remaining tokens as strings.
    pub fn into_strings(self) -> Result<TokenStream<String>> {
        self.stream(Ok)
    }

    fn stream<T, F>(self, parse: F) -> Result<TokenStream<T>>
        where T: Send + 'static,
              F: Fn(String) -> Result<T> + Send + 'static
    {
        let (sender, receiver) = mpsc::sync_channel(0);
        let words = self.words;

        thread::Builder::new()
            .name("token-source".to_owned())
            .spawn(move || {
                let mut sent = 0usize;
                for word in words {
                    let token = word.map_err(Error::from).and_then(&parse);
                    let failed = token.is_err();

                    if sender.send(token).is_err() {
                        debug!("token stream dropped after {} tokens", sent);
                        return;
                    }
                    if failed { return; }
                    sent += 1;
                }
                trace!("token source exhausted after {} tokens", sent);
            })?;

        Ok(TokenStream { receiver })
    }
}

/// The consuming end of a token stream.
///
/// Yields tokens in input order and ends when the producer closes the
/// channel. Single pass: once exhausted it stays exhausted.
#[derive(Debug)]
pub struct TokenStream<T> {
    receiver: Receiver<Result<T>>,
}

impl<T> Iterator for TokenStream<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Result<T>> {
        self.receiver.recv().ok()
    }
}

fn parse_int(token: String) -> Result<i64> {
    match token.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(source) => Err(Error::Parse { token, source }),
    }
}
