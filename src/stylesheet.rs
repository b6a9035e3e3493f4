use std::io::Write;

use crate::Result;

/// CSS classes for every code the HTML conversions emit. The palette relies on
/// CSS custom properties that a page can override.
const PCBOARD_CSS: &[u8] = include_bytes!("../static/css/text_pcboard.css");

/// Writes to dst the Cascading Style Sheets classes needed by the HTML.
///
/// # Errors
///
/// [`Error::Io`](crate::Error::Io) when dst cannot be written.
pub fn css<W: Write + ?Sized>(dst: &mut W) -> Result<()> {
    dst.write_all(PCBOARD_CSS)?;
    Ok(())
}
