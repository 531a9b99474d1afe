//! Percent-encoding sets for navigation URIs.
//!
//! The viewer consumes URIs of the shape `file.pdf#page=N&search=keyword`.
//! The file part keeps URI-reserved characters intact while the keyword is
//! encoded as a fragment component, so a keyword containing `&` or `#` cannot
//! break the fragment structure.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Unreserved marks that never get encoded.
const MARKS: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// Full-URI set: reserved separators also pass through.
const URI_SET: &AsciiSet = &MARKS
    .remove(b';')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b',')
    .remove(b'#');

/// Encode a whole URI (or a file path used as one), leaving reserved
/// separators intact. Non-ASCII input is UTF-8 percent-encoded.
pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, URI_SET).to_string()
}

/// Encode a single URI component such as the search keyword; reserved
/// separators are encoded along with everything else non-alphanumeric.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, MARKS).to_string()
}
