//! Disassembles BBS text into fragments, one per color code.

use std::fmt::{self, Display};

use regex::Regex;

use crate::grammar::{CELERITY, PCBOARD, RENEGADE};

/// A color code payload and the literal text that follows it up to the next code.
///
/// Text found before the first code of a body is kept as a fragment without a code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Fragment {
    pub code: Option<String>,
    pub content: String,
}

impl Fragment {
    pub fn new(code: &str, content: &str) -> Self {
        Self {
            code: Some(code.to_owned()),
            content: content.to_owned(),
        }
    }

    pub fn text(content: &str) -> Self {
        Self {
            code: None,
            content: content.to_owned(),
        }
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(code) = &self.code {
            f.write_str(code)?;
        }
        f.write_str(&self.content)
    }
}

/// Splits text around every code matched by the grammar.
///
/// The grammar must capture the code payload in its first group.
/// An empty list is returned when the text holds no codes at all.
pub fn split(grammar: &Regex, text: &str) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut code: Option<&str> = None;
    let mut last = 0;
    for caps in grammar.captures_iter(text) {
        let (Some(whole), Some(payload)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let content = &text[last..whole.start()];
        match code {
            Some(code) => fragments.push(Fragment::new(code, content)),
            None if !content.is_empty() => fragments.push(Fragment::text(content)),
            None => {}
        }
        code = Some(payload.as_str());
        last = whole.end();
    }
    if let Some(code) = code {
        fragments.push(Fragment::new(code, &text[last..]));
    }
    fragments
}

/// Splits text around Renegade style `|00` to `|23` vertical bar codes.
pub fn bars(text: &str) -> Vec<Fragment> {
    split(&RENEGADE, text)
}

/// Splits text around Celerity `|k` single letter codes.
pub fn celerity(text: &str) -> Vec<Fragment> {
    split(&CELERITY, text)
}

/// Splits text around PCBoard `@X00` hexadecimal codes.
pub fn pcboard(text: &str) -> Vec<Fragment> {
    split(&PCBOARD, text)
}
