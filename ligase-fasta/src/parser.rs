use nom::{
    bytes::complete::{tag, take_till},
    combinator::map,
    sequence::preceded,
    IResult,
};

#[inline]
fn start(input: &str) -> IResult<&str, &str> {
    tag(">")(input)
}

#[inline]
fn not_line_ending(input: &str) -> IResult<&str, &str> {
    take_till(|c: char| c == '\r' || c == '\n')(input)
}

/// Parse a header line, returning the text after the marker with trailing
/// whitespace removed.
#[inline]
pub fn header(input: &str) -> IResult<&str, &str> {
    map(preceded(start, not_line_ending), |h: &str| h.trim_end())(input)
}

/// Sequence lines are trimmed on both sides before being joined.
#[inline]
pub fn sequence_line(input: &str) -> &str {
    input.trim()
}
