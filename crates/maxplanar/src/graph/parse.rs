//! Upper-triangle adjacency text format.

use std::fmt;
use std::io::{self, Read};

use super::types::{Graph, GraphError};

/// Malformed or unreadable input. Aborts recognition.
#[derive(Debug)]
pub enum InputError {
    Io(io::Error),
    MissingVertexCount,
    InvalidVertexCount { value: i64 },
    /// Token at 0-based `position` is not an integer.
    InvalidToken { position: usize, token: String },
    /// Stream ended before all `expected` pair tokens were read.
    Truncated { expected: usize, found: usize },
    /// Pair token below `-1`.
    InvalidWeight { i: usize, j: usize, value: i64 },
    TrailingTokens { extra: usize },
    Graph(GraphError),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "reading input: {e}"),
            Self::MissingVertexCount => write!(f, "empty input: missing vertex count"),
            Self::InvalidVertexCount { value } => {
                write!(f, "vertex count must be positive, got {value}")
            }
            Self::InvalidToken { position, token } => {
                write!(f, "token {position} is not an integer: {token:?}")
            }
            Self::Truncated { expected, found } => write!(
                f,
                "truncated input: expected {expected} edge tokens, found {found}"
            ),
            Self::InvalidWeight { i, j, value } => {
                write!(f, "edge {i}-{j}: weight {value} is below -1")
            }
            Self::TrailingTokens { extra } => {
                write!(f, "{extra} unexpected token(s) after the adjacency matrix")
            }
            Self::Graph(e) => write!(f, "invalid graph: {e}"),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for InputError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GraphError> for InputError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// Marker for an absent edge.
const NO_EDGE: i64 = -1;

/// Parse `V` followed by one token per pair `(i, j)`, `i < j`, row-major.
///
/// A non-negative token is the edge weight; `-1` means no edge. The token count
/// is checked before any per-vertex allocation, so a bogus `V` fails fast.
pub fn parse_adjacency(text: &str) -> Result<Graph, InputError> {
    let tokens: Vec<&str> = text.split_ascii_whitespace().collect();
    let (&head, rest) = tokens.split_first().ok_or(InputError::MissingVertexCount)?;
    let value = parse_token(0, head)?;
    if value <= 0 {
        return Err(InputError::InvalidVertexCount { value });
    }
    let n = usize::try_from(value).map_err(|_| InputError::InvalidVertexCount { value })?;
    let expected = n
        .checked_mul(n - 1)
        .map(|x| x / 2)
        .ok_or(InputError::InvalidVertexCount { value })?;
    if rest.len() < expected {
        return Err(InputError::Truncated {
            expected,
            found: rest.len(),
        });
    }
    if rest.len() > expected {
        return Err(InputError::TrailingTokens {
            extra: rest.len() - expected,
        });
    }

    let mut edges = Vec::new();
    let mut pairs = (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j)));
    for (k, (&tok, (i, j))) in rest.iter().zip(&mut pairs).enumerate() {
        let value = parse_token(k + 1, tok)?;
        match value {
            NO_EDGE => continue,
            w if w < NO_EDGE => return Err(InputError::InvalidWeight { i, j, value: w }),
            w => edges.push((i, j, w as u64)),
        }
    }
    Ok(Graph::from_weighted_edges(n, edges)?)
}

/// Read the whole stream and parse it.
pub fn read_adjacency<R: Read>(mut reader: R) -> Result<Graph, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_adjacency(&text)
}

fn parse_token(position: usize, token: &str) -> Result<i64, InputError> {
    token.parse::<i64>().map_err(|_| InputError::InvalidToken {
        position,
        token: token.to_string(),
    })
}
