//! The supported BBS color code formats and the conversions they dispatch to.

use std::fmt::{self, Display};
use std::io::{Read, Write};

use regex::{bytes, Regex};
use tracing::debug;

use crate::control::{trim_controls, CSI, ETX};
use crate::detect::find_buffered;
use crate::grammar::{
    CELERITY,
    CELERITY_BYTES,
    PCBOARD,
    PCBOARD_BYTES,
    RENEGADE,
    RENEGADE_BYTES,
    TELEGARD,
    TELEGARD_BYTES,
    WILDCAT,
    WILDCAT_BYTES,
    WWIV_HASH,
    WWIV_HASH_BYTES,
    WWIV_HEART,
    WWIV_HEART_BYTES,
};
use crate::render::{
    html_celerity,
    html_pcboard,
    html_renegade,
    html_telegard,
    html_wildcat,
    html_wwiv_hash,
    html_wwiv_heart,
};
use crate::split::{split, Fragment};
use crate::{decode, Error, Result};

/// Bulletin Board System color code format.
/// Other than for [`find`](crate::find), the ANSI format is not supported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bbs {
    /// ANSI escape sequences.
    Ansi,
    /// Celerity BBS pipe codes.
    Celerity,
    /// PCBoard BBS @ codes.
    PCBoard,
    /// Renegade BBS pipe codes.
    Renegade,
    /// Telegard BBS grave accent codes.
    Telegard,
    /// Wildcat! BBS @ codes.
    Wildcat,
    /// WWIV BBS # codes.
    WWIVHash,
    /// WWIV BBS ♥ codes.
    WWIVHeart,
}

impl Bbs {
    /// Every format, ordered by value.
    pub const ALL: [Bbs; 8] = [
        Bbs::Ansi,
        Bbs::Celerity,
        Bbs::PCBoard,
        Bbs::Renegade,
        Bbs::Telegard,
        Bbs::Wildcat,
        Bbs::WWIVHash,
        Bbs::WWIVHeart,
    ];

    /// Reports whether the value names a format.
    pub fn valid(value: i32) -> bool {
        Bbs::try_from(value).is_ok()
    }

    /// The color toggle sequence that opens a code of this format.
    pub fn bytes(self) -> &'static [u8] {
        match self {
            Bbs::Ansi => CSI.as_bytes(),
            Bbs::Celerity | Bbs::Renegade => b"|",
            Bbs::PCBoard => b"@X",
            Bbs::Telegard => b"`",
            Bbs::Wildcat => b"@",
            Bbs::WWIVHash => b"|#",
            Bbs::WWIVHeart => ETX.as_bytes(),
        }
    }

    /// The name of the format.
    pub fn name(self) -> &'static str {
        match self {
            Bbs::Ansi => "ANSI",
            Bbs::Celerity => "Celerity",
            Bbs::PCBoard => "PCBoard",
            Bbs::Renegade => "Renegade",
            Bbs::Telegard => "Telegard",
            Bbs::Wildcat => "Wildcat!",
            Bbs::WWIVHash => "WWIV #",
            Bbs::WWIVHeart => "WWIV ♥",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Bbs::Ansi => "ANSI ←[",
            Bbs::Celerity => "Celerity |",
            Bbs::PCBoard => "PCBoard @X",
            Bbs::Renegade => "Renegade |",
            Bbs::Telegard => "Telegard `",
            Bbs::Wildcat => "Wildcat! @@",
            Bbs::WWIVHash => "WWIV |#",
            Bbs::WWIVHeart => "WWIV ♥",
        }
    }

    fn grammar(self) -> Option<&'static Regex> {
        match self {
            Bbs::Ansi => None,
            Bbs::Celerity => Some(&*CELERITY),
            Bbs::PCBoard => Some(&*PCBOARD),
            Bbs::Renegade => Some(&*RENEGADE),
            Bbs::Telegard => Some(&*TELEGARD),
            Bbs::Wildcat => Some(&*WILDCAT),
            Bbs::WWIVHash => Some(&*WWIV_HASH),
            Bbs::WWIVHeart => Some(&*WWIV_HEART),
        }
    }

    fn removal(self) -> Option<&'static bytes::Regex> {
        match self {
            Bbs::Ansi => None,
            Bbs::Celerity => Some(&*CELERITY_BYTES),
            Bbs::PCBoard => Some(&*PCBOARD_BYTES),
            Bbs::Renegade => Some(&*RENEGADE_BYTES),
            Bbs::Telegard => Some(&*TELEGARD_BYTES),
            Bbs::Wildcat => Some(&*WILDCAT_BYTES),
            Bbs::WWIVHash => Some(&*WWIV_HASH_BYTES),
            Bbs::WWIVHeart => Some(&*WWIV_HEART_BYTES),
        }
    }

    /// Splits the text into color code fragments of this format.
    ///
    /// # Errors
    ///
    /// [`Error::AnsiFound`] for the ANSI format.
    pub fn split(self, text: &str) -> Result<Vec<Fragment>> {
        let grammar = self.grammar().ok_or(Error::AnsiFound)?;
        Ok(split(grammar, text))
    }

    /// Writes to dst the HTML equivalent of the BBS color codes with matching CSS color classes.
    /// PCBoard clear screen and pause controls are removed first.
    ///
    /// ```
    /// use bbscolor::Bbs;
    ///
    /// let mut out = Vec::new();
    /// Bbs::PCBoard.html(&mut out, b"@CLS@@X03Hello world").unwrap();
    /// assert_eq!(out, br#"<i class="PB0 PF3">Hello world</i>"#);
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::AnsiFound`] for the ANSI format, or [`Error::Io`] when dst cannot be written.
    pub fn html<W: Write + ?Sized>(self, dst: &mut W, src: &[u8]) -> Result<()> {
        let x = trim_controls(src);
        match self {
            Bbs::Ansi => Err(Error::AnsiFound),
            Bbs::Celerity => html_celerity(dst, &x),
            Bbs::PCBoard => html_pcboard(dst, &x),
            Bbs::Renegade => html_renegade(dst, &x),
            Bbs::Telegard => html_telegard(dst, &x),
            Bbs::Wildcat => html_wildcat(dst, &x),
            Bbs::WWIVHash => html_wwiv_hash(dst, &x),
            Bbs::WWIVHeart => html_wwiv_heart(dst, &x),
        }
    }

    /// Removes the BBS color codes from src and writes the plain text to dst.
    ///
    /// ```
    /// use bbscolor::Bbs;
    ///
    /// let mut out = Vec::new();
    /// Bbs::PCBoard.remove(&mut out, b"@X03Hello @X07world").unwrap();
    /// assert_eq!(out, b"Hello world");
    /// ```
    ///
    /// # Errors
    ///
    /// [`Error::AnsiFound`] for the ANSI format, or [`Error::Io`] when dst cannot be written.
    pub fn remove<W: Write + ?Sized>(self, dst: &mut W, src: &[u8]) -> Result<()> {
        let re = self.removal().ok_or(Error::AnsiFound)?;
        let res = re.replace_all(src, bytes::NoExpand(b""));
        dst.write_all(&res)?;
        Ok(())
    }
}

impl TryFrom<i32> for Bbs {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Bbs::ALL.get(i).copied())
            .ok_or(Error::InvalidFormat(value))
    }
}

impl Display for Bbs {
    /// The format name and its toggle sequence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The color code fragments of a text stream and the format they were split with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields {
    pub format: Bbs,
    pub fragments: Vec<Fragment>,
}

/// Splits the reader around every color code of the first format found in it.
///
/// ```
/// let fields = bbscolor::fields("@X03Hello @XF0world".as_bytes()).unwrap();
/// assert_eq!(fields.format, bbscolor::Bbs::PCBoard);
/// assert_eq!(fields.fragments.len(), 2);
/// assert_eq!(fields.fragments[1].to_string(), "F0world");
/// ```
///
/// # Errors
///
/// [`Error::NoCodeFound`] if no color codes are found, [`Error::AnsiFound`] if
/// ANSI control sequences are found first, or [`Error::Io`] when the reader fails.
pub fn fields<R: Read>(src: R) -> Result<Fields> {
    let (found, buf) = find_buffered(src)?;
    let format = found.ok_or(Error::NoCodeFound)?;
    let fragments = format.split(&decode(&buf))?;
    debug!(format = %format, fragments = fragments.len(), "split bbs text");
    Ok(Fields { format, fragments })
}

/// Writes to dst the HTML equivalent of the BBS color codes in the reader.
/// The first format found is used for the whole of the reader, and is returned.
///
/// # Errors
///
/// [`Error::NoCodeFound`] if no color codes are found, [`Error::AnsiFound`] if
/// ANSI control sequences are found first, or [`Error::Io`] when the reader or dst fails.
pub fn html<W, R>(dst: &mut W, src: R) -> Result<Bbs>
where
    W: Write + ?Sized,
    R: Read,
{
    let (found, buf) = find_buffered(src)?;
    let format = found.ok_or(Error::NoCodeFound)?;
    debug!(format = %format, bytes = buf.len(), "convert bbs text to html");
    format.html(dst, &buf)?;
    Ok(format)
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use regex::Regex;
    use test_case::test_case;

    use super::*;

    #[test_case(-1, None; "too small")]
    #[test_case(111, None; "too big")]
    #[test_case(1, Some(Bbs::Celerity); "first")]
    #[test_case(7, Some(Bbs::WWIVHeart); "last")]
    fn from_value(value: i32, want: Option<Bbs>) {
        assert_eq!(Bbs::try_from(value).ok(), want);
        assert_eq!(Bbs::valid(value), want.is_some());
    }

    #[test]
    fn invalid_value_error() {
        let err = Bbs::try_from(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(-1)));
        assert_eq!(err.to_string(), "-1 is not a bbs color code format");
    }

    #[test]
    fn names_and_labels() {
        assert_eq!(Bbs::Celerity.to_string(), "Celerity |");
        assert_eq!(Bbs::WWIVHeart.to_string(), "WWIV ♥");
        assert_eq!(Bbs::Celerity.name(), "Celerity");
        assert_eq!(Bbs::Wildcat.name(), "Wildcat!");
        assert_eq!(Bbs::WWIVHeart.name(), "WWIV ♥");
        assert_eq!(Bbs::PCBoard.bytes(), [64, 88]);
        assert_eq!(Bbs::Ansi.bytes(), [27, b'[']);
        assert_eq!(Bbs::WWIVHeart.bytes(), [3]);
    }

    #[test]
    fn html_dispatch() {
        let mut out = Vec::new();
        Bbs::Celerity.html(&mut out, b"|S|gHello|Rworld").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            r#"<i class="PBg PFw">Hello</i><i class="PBR PFw">world</i>"#
        );
        let mut out = Vec::new();
        assert!(matches!(
            Bbs::Ansi.html(&mut out, b"\x1b[0mtext"),
            Err(Error::AnsiFound)
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn html_trims_controls() {
        let mut out = Vec::new();
        Bbs::Renegade.html(&mut out, b"@CLS@@PAUSE@|07Hi").unwrap();
        assert_eq!(out, br#"<i class="P0 P7">Hi</i>"#);
    }

    #[test_case(Bbs::PCBoard, "", ""; "empty")]
    #[test_case(Bbs::WWIVHash, "@X07Hello world", "@X07Hello world"; "incorrect")]
    #[test_case(Bbs::Celerity, "Hello |Bworld", "Hello world"; "celerity")]
    #[test_case(Bbs::PCBoard, "@X07Hello world", "Hello world"; "pcboard")]
    #[test_case(Bbs::PCBoard, "@X07Hello\n@X11world@X01", "Hello\nworld"; "pcboard nl")]
    #[test_case(Bbs::PCBoard, "@X07PCBoard @X code", "PCBoard @X code"; "pcboard false pos")]
    #[test_case(Bbs::Renegade, "Hello |15world", "Hello world"; "renegade")]
    #[test_case(Bbs::Telegard, "`07Hello world", "Hello world"; "telegard")]
    #[test_case(Bbs::WWIVHash, "|#7Hello world", "Hello world"; "whash")]
    #[test_case(Bbs::WWIVHeart, "\x037Hello world", "Hello world"; "wheart")]
    #[test_case(Bbs::Wildcat, "@0F@Hello world", "Hello world"; "wildcat")]
    fn remove(format: Bbs, src: &str, want: &str) {
        let mut out = Vec::new();
        format.remove(&mut out, src.as_bytes()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), want);
    }

    #[test]
    fn remove_ansi() {
        let mut out = Vec::new();
        assert!(matches!(
            Bbs::Ansi.remove(&mut out, b""),
            Err(Error::AnsiFound)
        ));
    }

    #[test_case(Bbs::Celerity, "|cHello |C|S|wworld and |Rmore"; "celerity")]
    #[test_case(Bbs::PCBoard, "Hi @X03Hello @xF0world@X11"; "pcboard")]
    #[test_case(Bbs::Renegade, "|03Hello |07|19world |2 |24"; "renegade")]
    #[test_case(Bbs::Telegard, "`0FHello\n`1ethere"; "telegard")]
    #[test_case(Bbs::Wildcat, "@0F@Hello @ @1E@world"; "wildcat")]
    #[test_case(Bbs::WWIVHash, "|#1Hello |#2world"; "wwivhash")]
    #[test_case(Bbs::WWIVHeart, "\x031Hello \x032world"; "wwivheart")]
    fn removal_matches_rendered_text(format: Bbs, src: &str) {
        let tags = Regex::new("<[^>]*>").unwrap();
        let mut html = Vec::new();
        format.html(&mut html, src.as_bytes()).unwrap();
        let html = String::from_utf8(html).unwrap();
        let mut plain = Vec::new();
        format.remove(&mut plain, src.as_bytes()).unwrap();
        assert_eq!(tags.replace_all(&html, ""), String::from_utf8(plain).unwrap());
    }

    #[test]
    fn split_ansi() {
        assert!(matches!(Bbs::Ansi.split("text"), Err(Error::AnsiFound)));
        assert!(Bbs::Wildcat.split("text").unwrap().is_empty());
    }

    #[test]
    fn fields_pcboard() {
        let fields = fields("@X03Hello @XF0world".as_bytes()).unwrap();
        assert_eq!(fields.format, Bbs::PCBoard);
        assert_eq!(
            fields.fragments,
            vec![Fragment::new("03", "Hello "), Fragment::new("F0", "world")]
        );
    }

    #[test]
    fn fields_uses_format_grammar() {
        let fields = fields("Intro\n`0FHi `1Ethere".as_bytes()).unwrap();
        assert_eq!(fields.format, Bbs::Telegard);
        assert_eq!(
            fields.fragments,
            vec![
                Fragment::text("Intro\n"),
                Fragment::new("0F", "Hi "),
                Fragment::new("1E", "there"),
            ]
        );
    }

    #[test]
    fn fields_errors() {
        assert!(matches!(
            fields("\x1b[0mHello world".as_bytes()),
            Err(Error::AnsiFound)
        ));
        assert!(matches!(
            fields("Hello world".as_bytes()),
            Err(Error::NoCodeFound)
        ));
    }

    #[test]
    fn html_stream() {
        let mut out = Vec::new();
        let format = html(&mut out, "@X03Hello world".as_bytes()).unwrap();
        assert_eq!(format, Bbs::PCBoard);
        assert_eq!(out, br#"<i class="PB0 PF3">Hello world</i>"#);
    }

    #[test]
    fn html_stream_errors() {
        let mut out = Vec::new();
        assert!(matches!(
            html(&mut out, "\x1b[0mHello".as_bytes()),
            Err(Error::AnsiFound)
        ));
        assert!(matches!(
            html(&mut out, "PCBoard @X code".as_bytes()),
            Err(Error::NoCodeFound)
        ));
        assert!(out.is_empty());
    }
}
