//! Query matching over the prepared dataset.
//!
//! A raw query is interpreted three ways at once: as a hex fragment in either
//! byte order, as a decimal integer whose byte-swapped hex spelling may equal
//! an identifier, and as a hex integer likewise swapped. See [`QueryKeys`].

mod matcher;
mod numeric;
mod outcome;
mod results;

pub use matcher::{QueryKeys, is_query_whitespace, match_query};
pub use numeric::{NAN_KEY, byteswap32, hex_or_nan, parse_integer};
pub use outcome::SearchOutcome;
pub use results::{MatchResult, ResultRow};
