use nom::{
    bytes::complete::{tag, take_till},
    sequence::preceded,
    IResult,
};

#[inline]
fn start(input: &str) -> IResult<&str, &str> {
    tag("@")(input)
}

#[inline]
fn id(input: &str) -> IResult<&str, &str> {
    preceded(start, take_till(char::is_whitespace))(input)
}

/// The read identifier: everything between `@` and the first whitespace.
/// Mate annotations such as `1:N:0:ATCACG` come after it and are ignored.
pub fn read_id(header: &str) -> &str {
    match id(header) {
        Ok((_, id)) => id,
        Err(_) => header.split_whitespace().next().unwrap_or(""),
    }
}

/// Drop the trailing `\n` or `\r\n` of a line.
#[inline]
pub fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(|c: char| c == '\r' || c == '\n')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_read_id() {
        assert_eq!(read_id("@read1 1:N:0:ATCACG"), "read1");
        assert_eq!(read_id("@read1\t2:N:0:ATCACG"), "read1");
        assert_eq!(read_id("@SRR22092847.1.1"), "SRR22092847.1.1");
        assert_eq!(read_id("@"), "");
        assert_eq!(read_id("noid here"), "noid");
    }

    #[test]
    fn strips_line_endings_only() {
        assert_eq!(strip_line_ending("ACGT\n"), "ACGT");
        assert_eq!(strip_line_ending("ACGT\r\n"), "ACGT");
        assert_eq!(strip_line_ending("ACGT "), "ACGT ");
        assert_eq!(strip_line_ending(""), "");
    }
}
