//! Regular expressions matching one complete color code of each BBS format.
//!
//! Every expression captures the code's color payload in group 1, without the
//! signature that opens it. The same patterns are compiled twice: over text for
//! splitting and over bytes for code removal.

use lazy_static::lazy_static;
use regex::{bytes, Regex};

/// Celerity, a vertical bar followed by a case sensitive color letter or the `S` swap.
pub const CELERITY_MATCH: &str = r"\|([kbgcrmywdBGCRMYWS])";

/// PCBoard, a case-insensitive `@X` followed by background and foreground hex digits.
pub const PCBOARD_MATCH: &str = "(?i)@X([0-9A-F]{2})";

/// Renegade, a vertical bar followed by a zero padded value from 00 to 23.
pub const RENEGADE_MATCH: &str = r"\|(0[0-9]|1[0-9]|2[0-3])";

/// Telegard, a grave accent followed by background and foreground hex digits.
pub const TELEGARD_MATCH: &str = "(?i)`([0-9A-F]{2})";

/// Wildcat!, background and foreground hex digits enclosed by at signs.
pub const WILDCAT_MATCH: &str = "(?i)@([0-9A-F]{2})@";

/// WWIV #, a vertical bar and hash followed by a single digit.
pub const WWIV_HASH_MATCH: &str = r"\|#([0-9])";

/// WWIV ♥, the ETX control followed by a single digit.
pub const WWIV_HEART_MATCH: &str = r"\x03([0-9])";

/// The foreground and background color letters of Celerity, plus the `S` swap.
pub const CELERITY_CODES: &str = "kbgcrmywdBGCRMYWS";

lazy_static! {
    pub static ref CELERITY: Regex = Regex::new(CELERITY_MATCH).unwrap();
    pub static ref PCBOARD: Regex = Regex::new(PCBOARD_MATCH).unwrap();
    pub static ref RENEGADE: Regex = Regex::new(RENEGADE_MATCH).unwrap();
    pub static ref TELEGARD: Regex = Regex::new(TELEGARD_MATCH).unwrap();
    pub static ref WILDCAT: Regex = Regex::new(WILDCAT_MATCH).unwrap();
    pub static ref WWIV_HASH: Regex = Regex::new(WWIV_HASH_MATCH).unwrap();
    pub static ref WWIV_HEART: Regex = Regex::new(WWIV_HEART_MATCH).unwrap();
}

lazy_static! {
    pub(crate) static ref CELERITY_BYTES: bytes::Regex = bytes::Regex::new(CELERITY_MATCH).unwrap();
    pub(crate) static ref PCBOARD_BYTES: bytes::Regex = bytes::Regex::new(PCBOARD_MATCH).unwrap();
    pub(crate) static ref RENEGADE_BYTES: bytes::Regex = bytes::Regex::new(RENEGADE_MATCH).unwrap();
    pub(crate) static ref TELEGARD_BYTES: bytes::Regex = bytes::Regex::new(TELEGARD_MATCH).unwrap();
    pub(crate) static ref WILDCAT_BYTES: bytes::Regex = bytes::Regex::new(WILDCAT_MATCH).unwrap();
    pub(crate) static ref WWIV_HASH_BYTES: bytes::Regex = bytes::Regex::new(WWIV_HASH_MATCH).unwrap();
    pub(crate) static ref WWIV_HEART_BYTES: bytes::Regex =
        bytes::Regex::new(WWIV_HEART_MATCH).unwrap();
}
