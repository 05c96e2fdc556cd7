/*!
The formatter engine for bare token dialects, where token spellings sit
directly in the pattern (`YYYY-MM-DD`) and literal text is protected by an
escape region (`[...]` for moment, `'...'` for luxon).
*/

use jiff::Zoned;

use crate::{
    error::Error,
    fmt::token::{
        describe, expand_aliases, TokenEntry, TokenGraph, TokenMap,
    },
    locale::Locale,
};

/// The escape delimiters of a dialect, if it has any.
///
/// When `start == end` (luxon's `'`), the current escape mode disambiguates
/// which side a delimiter closes. Delimiters are consumed, never emitted.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EscapePolicy {
    start: Option<char>,
    end: Option<char>,
}

impl EscapePolicy {
    /// A region opened by `start` and closed by `end`.
    pub(crate) const fn paired(start: char, end: char) -> EscapePolicy {
        EscapePolicy { start: Some(start), end: Some(end) }
    }

    /// A region opened and closed by the same rune.
    pub(crate) const fn quoted(delimiter: char) -> EscapePolicy {
        EscapePolicy { start: Some(delimiter), end: Some(delimiter) }
    }

    fn is_start(&self, ch: char) -> bool {
        self.start == Some(ch)
    }

    fn is_end(&self, ch: char) -> bool {
        self.end == Some(ch)
    }
}

/// A dialect whose tokens appear bare in the pattern.
#[derive(Debug)]
pub(crate) struct BareDialect {
    escape: EscapePolicy,
    tokens: TokenMap,
    graph: TokenGraph,
}

impl BareDialect {
    /// Assembles the dialect, building its token graph eagerly.
    ///
    /// # Panics
    ///
    /// A duplicate token after alias expansion is a defect in the static
    /// dictionary data and aborts startup.
    pub(crate) fn new(
        name: &'static str,
        escape: EscapePolicy,
        tokens: TokenMap,
    ) -> BareDialect {
        let graph = match TokenGraph::new(expand_aliases(&tokens)) {
            Ok(graph) => graph,
            Err(err) => panic!("loading '{name}' dictionary: {err}"),
        };
        debug!(
            "built token graph for dialect '{name}' ({} tokens)",
            tokens.len(),
        );
        BareDialect { escape, tokens, graph }
    }

    /// Formats `zdt` according to `pattern`.
    ///
    /// Recognition is longest-match: at each rune the engine extends the
    /// current candidate token if possible; on a break it emits the longest
    /// matched prefix that names a token, then the leftover runes
    /// literally. Runes inside an escape region pass through verbatim.
    pub(crate) fn format(
        &self,
        zdt: &Zoned,
        locale: Locale,
        pattern: &str,
    ) -> Result<String, Error> {
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut node = self.graph.root();
        // Candidate token runes since the last emit, and the entry (with
        // its byte length in `acc`) of the deepest valued node seen.
        let mut acc = String::new();
        let mut best: Option<(TokenEntry, usize)> = None;
        let mut escaping = false;

        for ch in pattern.chars() {
            if escaping && self.escape.is_end(ch) {
                escaping = false;
                continue;
            }
            if !escaping && self.escape.is_start(ch) {
                escaping = true;
                continue;
            }
            if !escaping {
                if let Some(child) = node.child(ch) {
                    acc.push(ch);
                    if let Some(&entry) = child.value() {
                        best = Some((entry, acc.len()));
                    }
                    node = child;
                    continue;
                }
            }
            flush(&mut out, zdt, locale, &mut acc, &mut best)?;
            node = self.graph.root();
            if !escaping {
                if let Some(child) = self.graph.root().child(ch) {
                    acc.push(ch);
                    if let Some(&entry) = child.value() {
                        best = Some((entry, acc.len()));
                    }
                    node = child;
                    continue;
                }
            }
            out.push(ch);
        }
        flush(&mut out, zdt, locale, &mut acc, &mut best)?;
        Ok(out)
    }

    /// Token listing in sorted order (aliases noted, not expanded).
    pub(crate) fn describe(&self) -> String {
        describe(&self.tokens, None)
    }
}

/// Emits the pending candidate: the deepest valued prefix expanded, the
/// remainder (or, with no valued prefix, everything) literally.
fn flush(
    out: &mut String,
    zdt: &Zoned,
    locale: Locale,
    acc: &mut String,
    best: &mut Option<(TokenEntry, usize)>,
) -> Result<(), Error> {
    match best.take() {
        Some((entry, matched)) => {
            out.push_str(&(entry.expand)(zdt, locale)?);
            out.push_str(&acc[matched..]);
        }
        None => out.push_str(acc),
    }
    acc.clear();
    Ok(())
}

