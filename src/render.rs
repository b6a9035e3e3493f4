//! Writes fragments of BBS text as HTML `<i>` elements with CSS color classes.

use std::fmt::{self, Display};
use std::io::Write;

use regex::Regex;
use tracing::trace;

use crate::grammar::{CELERITY, PCBOARD, RENEGADE, TELEGARD, WILDCAT, WWIV_HASH, WWIV_HEART};
use crate::split::{split, Fragment};
use crate::{decode, Result};

/// Displays text with the special HTML characters `<>&'"` escaped.
///
/// ```
/// use bbscolor::Esc;
///
/// assert_eq!(Esc("<b>'&'</b>").to_string(), "&lt;b&gt;&#39;&amp;&#39;&lt;/b&gt;");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Esc<T: AsRef<str>>(pub T);

impl<T: AsRef<str>> Display for Esc<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.0.as_ref();
        let mut last = 0;
        for (i, c) in text.char_indices() {
            let entity = match c {
                '<' => "&lt;",
                '>' => "&gt;",
                '&' => "&amp;",
                '\'' => "&#39;",
                '"' => "&#34;",
                _ => continue,
            };
            f.write_str(&text[last..i])?;
            f.write_str(entity)?;
            last = i + c.len_utf8();
        }
        f.write_str(&text[last..])
    }
}

// Vertical bar values
const FOREGROUND_FIRST: u8 = 0;
const FOREGROUND_LAST: u8 = 15;
const BACKGROUND_FIRST: u8 = 16;
const BACKGROUND_LAST: u8 = 23;

/// Celerity toggles between foreground and background colors with this code.
const SWAP_CMD: char = 'S';

/// The CSS class prefixes of a background and foreground pair.
#[derive(Clone, Copy, Debug)]
struct Classes(&'static str, &'static str);

const INTEGER_CLASSES: Classes = Classes("P", "P");
const LETTER_CLASSES: Classes = Classes("PB", "PF");

/// Colors carried from one fragment to the next during a single conversion.
#[derive(Clone, Copy, Debug)]
struct RenderState<T> {
    background: T,
    foreground: T,
    swapped: bool,
}

impl<T: Copy + Display> RenderState<T> {
    fn new(background: T, foreground: T) -> Self {
        Self {
            background,
            foreground,
            swapped: false,
        }
    }

    /// Sets whichever channel the swap toggle currently points at.
    fn set(&mut self, color: T) {
        if self.swapped {
            self.background = color;
        } else {
            self.foreground = color;
        }
    }

    fn write_span<W: Write + ?Sized>(
        &self,
        dst: &mut W,
        classes: Classes,
        content: &str,
    ) -> Result<()> {
        let Classes(bg, fg) = classes;
        write!(
            dst,
            r#"<i class="{bg}{} {fg}{}">{}</i>"#,
            self.background,
            self.foreground,
            Esc(content)
        )?;
        Ok(())
    }
}

/// Writes the text of a fragment that no code governs.
fn write_plain<W: Write + ?Sized>(dst: &mut W, content: &str) -> Result<()> {
    write!(dst, "{}", Esc(content))?;
    Ok(())
}

/// Writes HTML for the vertical bar family, where 0 to 15 sets the foreground
/// and 16 to 23 sets the background.
fn bars<W: Write + ?Sized>(dst: &mut W, src: &[u8], grammar: &Regex) -> Result<()> {
    let text = decode(src);
    let fragments = split(grammar, &text);
    if fragments.is_empty() {
        dst.write_all(src)?;
        return Ok(());
    }
    let mut state = RenderState::new(0_u8, 0_u8);
    for Fragment { code, content } in &fragments {
        let Some(code) = code else {
            write_plain(dst, content)?;
            continue;
        };
        match code.parse::<u8>() {
            Ok(n @ FOREGROUND_FIRST..=FOREGROUND_LAST) => state.foreground = n,
            Ok(n @ BACKGROUND_FIRST..=BACKGROUND_LAST) => state.background = n,
            _ => trace!(code = %code, "ignored vertical bar code"),
        }
        state.write_span(dst, INTEGER_CLASSES, content)?;
    }
    Ok(())
}

/// Writes HTML for the hexadecimal pair family. The first digit is always the
/// background and the second the foreground.
fn hex_pairs<W: Write + ?Sized>(dst: &mut W, src: &[u8], grammar: &Regex) -> Result<()> {
    let text = decode(src);
    let fragments = split(grammar, &text);
    if fragments.is_empty() {
        dst.write_all(src)?;
        return Ok(());
    }
    let mut state = RenderState::new('0', '0');
    for Fragment { code, content } in &fragments {
        let Some(code) = code else {
            write_plain(dst, content)?;
            continue;
        };
        let mut digits = code.chars().map(|c| c.to_ascii_uppercase());
        match (digits.next(), digits.next()) {
            (Some(bg), Some(fg)) => {
                state.background = bg;
                state.foreground = fg;
            }
            _ => trace!(code = %code, "ignored hexadecimal code"),
        }
        state.write_span(dst, LETTER_CLASSES, content)?;
    }
    Ok(())
}

fn letters<W: Write + ?Sized>(dst: &mut W, src: &[u8]) -> Result<()> {
    let text = decode(src);
    let fragments = split(&CELERITY, &text);
    if fragments.is_empty() {
        dst.write_all(src)?;
        return Ok(());
    }
    let mut state = RenderState::new('k', 'w');
    for Fragment { code, content } in &fragments {
        let Some(code) = code else {
            write_plain(dst, content)?;
            continue;
        };
        match code.chars().next() {
            Some(SWAP_CMD) => {
                state.swapped = !state.swapped;
                if content.is_empty() {
                    continue;
                }
            }
            Some(color) => state.set(color),
            None => trace!("ignored empty celerity code"),
        }
        state.write_span(dst, LETTER_CLASSES, content)?;
    }
    Ok(())
}

/// Writes to dst the HTML equivalent of Celerity BBS color codes with
/// matching CSS color classes.
///
/// ```
/// let mut out = Vec::new();
/// bbscolor::html_celerity(&mut out, b"|cHello |C|S|wworld").unwrap();
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     r#"<i class="PBk PFc">Hello </i><i class="PBk PFC"></i><i class="PBw PFC">world</i>"#
/// );
/// ```
pub fn html_celerity<W: Write + ?Sized>(dst: &mut W, src: &[u8]) -> Result<()> {
    letters(dst, src)
}

/// Writes to dst the HTML equivalent of PCBoard BBS color codes with
/// matching CSS color classes.
pub fn html_pcboard<W: Write + ?Sized>(dst: &mut W, src: &[u8]) -> Result<()> {
    hex_pairs(dst, src, &PCBOARD)
}

/// Writes to dst the HTML equivalent of Renegade BBS color codes with
/// matching CSS color classes.
pub fn html_renegade<W: Write + ?Sized>(dst: &mut W, src: &[u8]) -> Result<()> {
    bars(dst, src, &RENEGADE)
}

/// Writes to dst the HTML equivalent of Telegard BBS color codes with
/// matching CSS color classes.
pub fn html_telegard<W: Write + ?Sized>(dst: &mut W, src: &[u8]) -> Result<()> {
    hex_pairs(dst, src, &TELEGARD)
}

/// Writes to dst the HTML equivalent of Wildcat! BBS color codes with
/// matching CSS color classes.
pub fn html_wildcat<W: Write + ?Sized>(dst: &mut W, src: &[u8]) -> Result<()> {
    hex_pairs(dst, src, &WILDCAT)
}

/// Writes to dst the HTML equivalent of WWIV BBS # color codes with
/// matching CSS color classes.
pub fn html_wwiv_hash<W: Write + ?Sized>(dst: &mut W, src: &[u8]) -> Result<()> {
    bars(dst, src, &WWIV_HASH)
}

/// Writes to dst the HTML equivalent of WWIV BBS ♥ color codes with
/// matching CSS color classes.
pub fn html_wwiv_heart<W: Write + ?Sized>(dst: &mut W, src: &[u8]) -> Result<()> {
    bars(dst, src, &WWIV_HEART)
}
