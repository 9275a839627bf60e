//! Newline-delimited framing over any async byte stream
//!
//! The server reads with [`LineReader`] and writes with [`LineWriter`].
//! Stdio, in-memory duplex pipes and sockets all fit.

mod lines;

pub use lines::{LineReader, LineWriter};

use tokio::io::{BufReader, Stdin, Stdout};

/// Reader and writer bound to the process's stdin and stdout
pub fn stdio() -> (LineReader<BufReader<Stdin>>, LineWriter<Stdout>) {
    (
        LineReader::new(BufReader::new(tokio::io::stdin())),
        LineWriter::new(tokio::io::stdout()),
    )
}
