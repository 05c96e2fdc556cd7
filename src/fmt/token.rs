/*!
The token dictionary contract shared by every dialect, and the trie used to
recognize the longest token at a cursor position.

A dialect contributes nothing but data: a map from token spelling to a
[`TokenEntry`]. Everything else — escape handling, prefix gating, longest
match recognition — is generic machinery in the sibling modules.
*/

use std::collections::HashMap;

use jiff::{
    civil::{DateTime, Weekday},
    tz::{Offset, TimeZone},
    Zoned,
};

use crate::{
    error::{err, Error},
    locale::Locale,
};

/// Renders one token of an instant, e.g. `09` for a zero padded minute.
pub(crate) type ExpandFn = fn(&Zoned, Locale) -> Result<String, Error>;

/// Consumes input text for one token, writing the recovered fields into the
/// accumulator. Returns the number of bytes consumed.
pub(crate) type ParseFn = fn(&mut Pieces, &str) -> Result<usize, Error>;

/// One token of a dialect's dictionary.
///
/// Aliases form a star around the canonical spelling: an alias is never
/// itself a dictionary key, and shares this entry's semantics verbatim.
/// Aliases take part in recognition but not in listings.
#[derive(Clone, Copy)]
pub(crate) struct TokenEntry {
    pub(crate) desc: &'static str,
    pub(crate) expand: ExpandFn,
    pub(crate) parse: Option<ParseFn>,
    pub(crate) aliases: &'static [&'static str],
}

impl TokenEntry {
    pub(crate) fn new(desc: &'static str, expand: ExpandFn) -> TokenEntry {
        TokenEntry { desc, expand, parse: None, aliases: &[] }
    }

    pub(crate) fn aliases(
        self,
        aliases: &'static [&'static str],
    ) -> TokenEntry {
        TokenEntry { aliases, ..self }
    }

    pub(crate) fn parse(self, parse: ParseFn) -> TokenEntry {
        TokenEntry { parse: Some(parse), ..self }
    }
}

impl core::fmt::Debug for TokenEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("TokenEntry").field("desc", &self.desc).finish()
    }
}

/// A dialect's dictionary, keyed by canonical token spelling.
pub(crate) type TokenMap = Vec<(&'static str, TokenEntry)>;

/// Returns the dictionary with one additional pair per alias. This is what
/// recognition consumes; listings use the unexpanded map.
pub(crate) fn expand_aliases(
    tokens: &TokenMap,
) -> Vec<(&'static str, TokenEntry)> {
    let mut pairs = Vec::with_capacity(tokens.len());
    for &(key, entry) in tokens.iter() {
        pairs.push((key, entry));
        for &alias in entry.aliases.iter() {
            pairs.push((alias, entry));
        }
    }
    pairs
}

/// Renders the dictionary listing: one `token: description` line per entry
/// in lexicographic key order, with an alias line where aliases exist.
///
/// The order (and therefore the output bytes) is deterministic; tests rely
/// on that.
pub(crate) fn describe(tokens: &TokenMap, prefix: Option<char>) -> String {
    let mut entries: Vec<&(&str, TokenEntry)> = tokens.iter().collect();
    entries.sort_by_key(|&&(key, _)| key);

    let mut out = String::new();
    for &&(key, entry) in entries.iter() {
        if let Some(prefix) = prefix {
            out.push(prefix);
        }
        out.push_str(key);
        out.push_str(": ");
        out.push_str(entry.desc);
        out.push('\n');
        if !entry.aliases.is_empty() {
            out.push_str("  aliases:");
            for alias in entry.aliases.iter() {
                out.push(' ');
                out.push_str(alias);
            }
            out.push('\n');
        }
    }
    out
}

/// A trie over token spellings, used for longest-match recognition.
///
/// Built once per dialect from the alias-expanded dictionary and immutable
/// afterwards. Intermediate nodes carry a value when one token is a prefix
/// of another (`M` along the path to `MM`).
#[derive(Debug, Default)]
pub(crate) struct TokenGraph {
    root: TokenGraphNode,
}

#[derive(Debug, Default)]
pub(crate) struct TokenGraphNode {
    children: HashMap<char, TokenGraphNode>,
    value: Option<TokenEntry>,
}

impl TokenGraph {
    /// Builds a graph from `(spelling, entry)` pairs.
    ///
    /// # Errors
    ///
    /// A second assignment to any terminal node is a duplicate token. That
    /// is a bug in the dictionary (or an alias shadowing a canonical key),
    /// so construction fails loudly rather than picking a winner.
    pub(crate) fn new<I>(pairs: I) -> Result<TokenGraph, Error>
    where
        I: IntoIterator<Item = (&'static str, TokenEntry)>,
    {
        let mut root = TokenGraphNode::default();
        for (key, entry) in pairs {
            let mut node = &mut root;
            for ch in key.chars() {
                node = node.children.entry(ch).or_default();
            }
            if node.value.is_some() {
                return Err(err!(
                    "duplicate token {key:?} after alias expansion",
                ));
            }
            node.value = Some(entry);
        }
        Ok(TokenGraph { root })
    }

    pub(crate) fn root(&self) -> &TokenGraphNode {
        &self.root
    }
}

impl TokenGraphNode {
    /// The node reached by following `ch`, if the transition exists.
    pub(crate) fn child(&self, ch: char) -> Option<&TokenGraphNode> {
        self.children.get(&ch)
    }

    /// The entry for the token spelled by the path to this node, if any.
    pub(crate) fn value(&self) -> Option<&TokenEntry> {
        self.value.as_ref()
    }
}

/// The parse accumulator: a civil datetime seeded with the Unix epoch, plus
/// the oddball fields that can't live on a civil datetime.
///
/// Parse actions write individual fields as they consume input. Fields that
/// no token touched stay at their epoch values, which is what makes partial
/// patterns like `%d/%m/%y` meaningful.
#[derive(Debug)]
pub(crate) struct Pieces {
    pub(crate) dt: DateTime,
    pub(crate) offset: Option<Offset>,
    pub(crate) meridiem: Option<Meridiem>,
    pub(crate) weekday: Option<Weekday>,
    /// True once any of year/month/day has been written. Weekday
    /// consistency is only checked for explicitly parsed dates; matching a
    /// lone weekday name against the epoch default would be nonsense.
    pub(crate) date_set: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Meridiem {
    Am,
    Pm,
}

impl Pieces {
    pub(crate) fn new() -> Pieces {
        Pieces {
            dt: jiff::civil::date(1970, 1, 1).at(0, 0, 0, 0),
            offset: None,
            meridiem: None,
            weekday: None,
            date_set: false,
        }
    }

    /// Realizes the accumulator as an instant.
    ///
    /// The zone is the parsed fixed offset when one was consumed, otherwise
    /// UTC (the zone the accumulator was seeded in).
    pub(crate) fn into_zoned(self) -> Result<Zoned, Error> {
        let mut dt = self.dt;
        if let Some(meridiem) = self.meridiem {
            let hour = match meridiem {
                Meridiem::Am => dt.hour() % 12,
                Meridiem::Pm => dt.hour() % 12 + 12,
            };
            dt = dt.with().hour(hour).build()?;
        }
        if self.date_set {
            if let Some(weekday) = self.weekday {
                if weekday != dt.date().weekday() {
                    return Err(err!(
                        "parsed weekday does not match the weekday of the \
                         parsed date {date}",
                        date = dt.date(),
                    ));
                }
            }
        }
        let tz = match self.offset {
            Some(offset) => TimeZone::fixed(offset),
            None => TimeZone::UTC,
        };
        Ok(dt.to_zoned(tz)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(desc: &'static str) -> TokenEntry {
        TokenEntry::new(desc, |_, _| Ok(String::new()))
    }

    #[test]
    fn longest_match_walk() {
        let graph = TokenGraph::new(vec![
            ("M", entry("one")),
            ("MM", entry("two")),
            ("MMMM", entry("four")),
        ])
        .unwrap();

        let m = graph.root().child('M').unwrap();
        assert_eq!(m.value().unwrap().desc, "one");
        let mm = m.child('M').unwrap();
        assert_eq!(mm.value().unwrap().desc, "two");
        // `MMM` is an interior node with no value of its own.
        let mmm = mm.child('M').unwrap();
        assert!(mmm.value().is_none());
        assert_eq!(mmm.child('M').unwrap().value().unwrap().desc, "four");
    }

    #[test]
    fn duplicate_keys_fail_construction() {
        let err = TokenGraph::new(vec![
            ("Y", entry("canonical")),
            ("Y", entry("imposter")),
        ])
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "duplicate token \"Y\" after alias expansion",
        );
    }

    #[test]
    fn alias_expansion_is_a_star() {
        let tokens: TokenMap =
            vec![("Y", entry("year").aliases(&["y", "GG"]))];
        let pairs = expand_aliases(&tokens);
        let keys: Vec<&str> = pairs.iter().map(|&(k, _)| k).collect();
        assert_eq!(keys, vec!["Y", "y", "GG"]);
        // An alias colliding with a canonical key is a load error.
        let tokens: TokenMap = vec![
            ("Y", entry("year").aliases(&["y"])),
            ("y", entry("also year")),
        ];
        assert!(TokenGraph::new(expand_aliases(&tokens)).is_err());
    }

    #[test]
    fn describe_is_sorted_and_marks_aliases() {
        let tokens: TokenMap = vec![
            ("m", entry("minute")),
            ("M", entry("month").aliases(&["L"])),
        ];
        insta::assert_snapshot!(describe(&tokens, None), @r###"
        M: month
          aliases: L
        m: minute
        "###);
        insta::assert_snapshot!(describe(&tokens, Some('%')), @r###"
        %M: month
          aliases: L
        %m: minute
        "###);
    }

    #[test]
    fn pieces_meridiem_and_weekday() {
        let mut pieces = Pieces::new();
        pieces.dt = pieces.dt.with().hour(7).build().unwrap();
        pieces.meridiem = Some(Meridiem::Pm);
        let zdt = pieces.into_zoned().unwrap();
        assert_eq!(zdt.hour(), 19);

        let mut pieces = Pieces::new();
        pieces.dt =
            jiff::civil::date(2024, 1, 7).at(0, 0, 0, 0);
        pieces.date_set = true;
        pieces.weekday = Some(Weekday::Monday);
        assert!(pieces.into_zoned().is_err());
    }
}
