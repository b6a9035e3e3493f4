//! Finds which BBS color code format a text stream uses.
//!
//! Detection works a line at a time and settles on the first line holding a
//! fully formed code. Each `has_*` predicate looks for every valid code value of
//! its format instead of a loose signature match, so prose such as
//! "PCBoard @X code" is not mistaken for color.

use std::io::{self, BufRead, BufReader, Read};
use std::ops::ControlFlow;

use lazy_static::lazy_static;
use tracing::debug;

use crate::control::{CLEAR_CMD, CSI, ETX};
use crate::format::Bbs;
use crate::grammar::CELERITY_CODES;
use crate::Result;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Every upper case background and foreground pair, `00` to `FF`.
fn hex_pairs() -> impl Iterator<Item = [u8; 2]> {
    HEX_DIGITS
        .iter()
        .flat_map(|&bg| HEX_DIGITS.iter().map(move |&fg| [bg, fg]))
}

lazy_static! {
    static ref CELERITY_NEEDLES: Vec<Vec<u8>> = CELERITY_CODES
        .bytes()
        .map(|code| vec![b'|', code])
        .collect();
    static ref PCBOARD_NEEDLES: Vec<Vec<u8>> = hex_pairs()
        .map(|pair| [&b"@X"[..], &pair[..]].concat())
        .collect();
    static ref RENEGADE_NEEDLES: Vec<Vec<u8>> = (0..=23)
        .map(|n: u8| format!("|{n:02}").into_bytes())
        .collect();
    static ref TELEGARD_NEEDLES: Vec<Vec<u8>> = hex_pairs()
        .map(|pair| [&b"`"[..], &pair[..]].concat())
        .collect();
    static ref WILDCAT_NEEDLES: Vec<Vec<u8>> = hex_pairs()
        .map(|pair| [&b"@"[..], &pair[..], &b"@"[..]].concat())
        .collect();
    static ref WWIV_HASH_NEEDLES: Vec<Vec<u8>> = (b'0'..=b'9')
        .map(|digit| vec![b'|', b'#', digit])
        .collect();
    static ref WWIV_HEART_NEEDLES: Vec<Vec<u8>> = (b'0'..=b'9')
        .map(|digit| [ETX.as_bytes(), &[digit][..]].concat())
        .collect();
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    !needle.is_empty() && haystack.windows(needle.len()).any(|window| window == needle)
}

fn contains_any(haystack: &[u8], needles: &[Vec<u8>]) -> bool {
    needles.iter().any(|needle| contains(haystack, needle))
}

/// Reports if the bytes contain an ANSI control sequence introducer.
pub fn has_ansi(src: &[u8]) -> bool {
    contains(src, CSI.as_bytes())
}

/// Reports if the bytes contain Celerity BBS color codes.
/// The format uses the vertical bar "|" followed by a case sensitive single alphabetic character.
pub fn has_celerity(src: &[u8]) -> bool {
    contains_any(src, &CELERITY_NEEDLES)
}

/// Reports if the bytes contain PCBoard BBS color codes.
/// The format uses an "@X" prefix with a background and foreground, 4-bit hexadecimal color value.
///
/// ```
/// assert!(bbscolor::has_pcboard(b"@X03Hello world"));
/// assert!(!bbscolor::has_pcboard(b"PCBoard @X code"));
/// ```
pub fn has_pcboard(src: &[u8]) -> bool {
    contains_any(src, &PCBOARD_NEEDLES)
}

/// Reports if the bytes contain Renegade BBS color codes.
/// The format uses the vertical bar "|" followed by a padded, numeric value between 00 and 23.
pub fn has_renegade(src: &[u8]) -> bool {
    contains_any(src, &RENEGADE_NEEDLES)
}

/// Reports if the bytes contain Telegard BBS color codes.
/// The format uses the grave accent followed by a background and foreground hexadecimal value.
pub fn has_telegard(src: &[u8]) -> bool {
    contains_any(src, &TELEGARD_NEEDLES)
}

/// Reports if the bytes contain Wildcat! BBS color codes.
/// The format uses a background and foreground hexadecimal value enclosed by two at "@" characters.
pub fn has_wildcat(src: &[u8]) -> bool {
    contains_any(src, &WILDCAT_NEEDLES)
}

/// Reports if the bytes contain WWIV BBS # color codes.
/// The format uses the "|#" prefix with a numeric value between 0 and 9.
pub fn has_wwiv_hash(src: &[u8]) -> bool {
    contains_any(src, &WWIV_HASH_NEEDLES)
}

/// Reports if the bytes contain WWIV BBS ♥ color codes.
/// The format uses the ETX control as a prefix with a numeric value between 0 and 9.
/// In the MS-DOS, USA codepage (CP-437), the ETX control is displayed as a heart.
pub fn has_wwiv_heart(src: &[u8]) -> bool {
    contains_any(src, &WWIV_HEART_NEEDLES)
}

/// Classifies one line, or asks for the next one.
fn inspect(line: &[u8]) -> ControlFlow<Option<Bbs>> {
    let trimmed = line.trim_ascii();
    if trimmed.is_empty() {
        return ControlFlow::Continue(());
    }
    let b = trimmed.strip_prefix(CLEAR_CMD.as_bytes()).unwrap_or(line);
    if has_ansi(b) {
        return ControlFlow::Break(Some(Bbs::Ansi));
    }
    if contains(b, Bbs::Renegade.bytes()) {
        if has_renegade(b) {
            return ControlFlow::Break(Some(Bbs::Renegade));
        }
        if has_celerity(b) {
            return ControlFlow::Break(Some(Bbs::Celerity));
        }
        debug!("vertical bar without a color code, stopped the scan");
        return ControlFlow::Break(None);
    }
    let predicates: [(fn(&[u8]) -> bool, Bbs); 5] = [
        (has_pcboard, Bbs::PCBoard),
        (has_telegard, Bbs::Telegard),
        (has_wildcat, Bbs::Wildcat),
        (has_wwiv_hash, Bbs::WWIVHash),
        (has_wwiv_heart, Bbs::WWIVHeart),
    ];
    match predicates.iter().find(|(has, _)| has(b)) {
        Some(&(_, format)) => ControlFlow::Break(Some(format)),
        None => ControlFlow::Continue(()),
    }
}

/// Finds the format of the first BBS color code sequence within the reader.
///
/// `None` is returned when no sequences are found. ANSI control sequences end
/// the search with [`Bbs::Ansi`].
///
/// ```
/// use bbscolor::{find, Bbs};
///
/// assert_eq!(find("Hello\n@X03world".as_bytes()).unwrap(), Some(Bbs::PCBoard));
/// assert_eq!(find("Hello world".as_bytes()).unwrap(), None);
/// ```
pub fn find<R: Read>(src: R) -> Result<Option<Bbs>> {
    let reader = BufReader::new(src);
    for (index, line) in reader.split(b'\n').enumerate() {
        let mut line = line?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        if let ControlFlow::Break(found) = inspect(&line) {
            if let Some(format) = found {
                debug!(line = index + 1, format = %format, "found bbs color codes");
            }
            return Ok(found);
        }
    }
    Ok(None)
}

/// Copies every byte read from the inner reader.
struct Tee<R> {
    inner: R,
    copy: Vec<u8>,
}

impl<R: Read> Read for Tee<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.copy.extend_from_slice(&buf[..n]);
        Ok(n)
    }
}

/// Runs [`find`] over the reader and returns the result with the complete
/// content of the reader, including everything after the detected line.
pub(crate) fn find_buffered<R: Read>(src: R) -> Result<(Option<Bbs>, Vec<u8>)> {
    let mut tee = Tee {
        inner: src,
        copy: Vec::new(),
    };
    let found = find(&mut tee)?;
    tee.inner.read_to_end(&mut tee.copy)?;
    Ok((found, tee.copy))
}
