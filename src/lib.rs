//! Convert text files colored with Bulletin Board System (BBS) codes into HTML.
//!
//! BBSes of the 1980s and 1990s colored their menus and messages with inline
//! codes instead of ANSI escape sequences. Each board software picked its own
//! syntax, so a text file carries exactly one of these formats:
//!
//! - Celerity `|c` letter codes with a `|S` background swap
//! - PCBoard `@X0F` hexadecimal background and foreground pairs
//! - Renegade `|07` pipe bar codes
//! - Telegard `` `0F `` hexadecimal pairs
//! - Wildcat! `@0F@` hexadecimal pairs
//! - WWIV `|#7` hash codes and `♥7` heart codes
//!
//! ANSI escape sequences are recognised by [`find`] but never converted.
//!
//! ```
//! let mut out = Vec::new();
//! let format = bbscolor::html(&mut out, "@X03Hello world".as_bytes()).unwrap();
//! assert_eq!(format, bbscolor::Bbs::PCBoard);
//! assert_eq!(out, br#"<i class="PB0 PF3">Hello world</i>"#);
//! ```

use std::borrow::Cow;

use encoding_rs::UTF_8;

macro_rules! ascii {
    ($($xx:literal/$yy:literal), *) => {
        unsafe { std::str::from_utf8_unchecked(&[$(($xx << 4) + $yy),*]) }
    };
}

pub(crate) use ascii;
pub mod control;
pub mod detect;
mod error;
pub mod format;
pub mod grammar;
pub mod render;
pub mod split;
mod stylesheet;

pub use control::{trim_controls, CLEAR_CMD, PAUSE_CMD};
pub use detect::{
    find,
    has_ansi,
    has_celerity,
    has_pcboard,
    has_renegade,
    has_telegard,
    has_wildcat,
    has_wwiv_hash,
    has_wwiv_heart,
};
pub use error::{Error, Result};
pub use format::{fields, html, Bbs, Fields};
pub use render::{
    html_celerity,
    html_pcboard,
    html_renegade,
    html_telegard,
    html_wildcat,
    html_wwiv_hash,
    html_wwiv_heart,
    Esc,
};
pub use split::Fragment;
pub use stylesheet::css;

/// Decodes UTF-8 text, replacing malformed sequences and dropping any BOM.
pub(crate) fn decode(src: &[u8]) -> Cow<'_, str> {
    let (text, _had_errors) = UTF_8.decode_with_bom_removal(src);
    text
}
