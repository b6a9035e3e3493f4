use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::bytes::{NoExpand, Regex};

use crate::ascii;

//C0 codes
pub const ETX: &str = ascii!(0 / 3);
pub const ESC: &str = ascii!(1 / 11);

/// Control Sequence Introducer in its 7-bit form, `ESC [`.
pub const CSI: &str = ascii!(1 / 11, 5 / 11);

// PCBoard screen controls
/// Clears the screen. Often found at the head of BBS text, even in ANSI art.
pub const CLEAR_CMD: &str = "@CLS@";
pub const PAUSE_CMD: &str = "@PAUSE@";

lazy_static! {
    static ref CONTROLS: Regex = Regex::new("@(CLS|CLS |PAUSE)@").unwrap();
}

/// Removes the PCBoard clear screen and pause controls from the bytes.
///
/// ```
/// let text = bbscolor::trim_controls(b"@CLS@@PAUSE@Hello world");
/// assert_eq!(&text[..], b"Hello world");
/// ```
pub fn trim_controls(src: &[u8]) -> Cow<'_, [u8]> {
    CONTROLS.replace_all(src, NoExpand(b""))
}
