/*!
The engines for prefix-gated dialects, where a sentinel rune (`%` for the
strftime family) announces every token.

Formatting and parsing both walk the pattern with the same "interpret mode"
state machine: outside interpret mode runes are literal; the prefix rune
switches interpretation on; inside it the token graph recognizes the
longest spelling.
*/

use jiff::Zoned;

use crate::{
    error::{err, Error, ErrorContext},
    fmt::token::{
        describe, expand_aliases, Pieces, TokenGraph, TokenGraphNode,
        TokenMap,
    },
    locale::Locale,
};

/// A dialect whose tokens are only recognized after a prefix rune.
#[derive(Debug)]
pub(crate) struct PrefixDialect {
    prefix: char,
    tokens: TokenMap,
    graph: TokenGraph,
}

impl PrefixDialect {
    /// Assembles the dialect, building its token graph eagerly.
    ///
    /// # Panics
    ///
    /// A duplicate token after alias expansion is a defect in the static
    /// dictionary data and aborts startup.
    pub(crate) fn new(
        name: &'static str,
        prefix: char,
        tokens: TokenMap,
    ) -> PrefixDialect {
        let graph = match TokenGraph::new(expand_aliases(&tokens)) {
            Ok(graph) => graph,
            Err(err) => panic!("loading '{name}' dictionary: {err}"),
        };
        debug!(
            "built token graph for dialect '{name}' ({} tokens)",
            tokens.len(),
        );
        PrefixDialect { prefix, tokens, graph }
    }

    /// Formats `zdt` according to `pattern`.
    ///
    /// A doubled prefix is handled by the dictionary itself: the `%` entry
    /// expands to a literal `%`. A prefix followed by runes that spell no
    /// token emits the prefix and those runes verbatim.
    pub(crate) fn format(
        &self,
        zdt: &Zoned,
        locale: Locale,
        pattern: &str,
    ) -> Result<String, Error> {
        let mut out = String::with_capacity(pattern.len() * 2);
        let mut node = self.graph.root();
        let mut acc = String::new();
        let mut interpret = false;

        for ch in pattern.chars() {
            if !interpret && ch == self.prefix {
                interpret = true;
                continue;
            }
            if !interpret {
                out.push(ch);
                continue;
            }
            if let Some(child) = node.child(ch) {
                acc.push(ch);
                node = child;
                continue;
            }
            self.flush(&mut out, zdt, locale, node, &acc)?;
            acc.clear();
            node = self.graph.root();
            // The breaking rune either opens the next token or is literal.
            interpret = ch == self.prefix;
            if !interpret {
                out.push(ch);
            }
        }
        if interpret {
            self.flush(&mut out, zdt, locale, node, &acc)?;
        }
        Ok(out)
    }

    /// Parses `input` against `pattern`, walking both with independent
    /// cursors.
    ///
    /// Literal pattern runes skip one input rune without comparison; each
    /// recognized token consumes input through its parse action. Tokens
    /// with no parse action, and spellings that name no token, are errors.
    /// Input left over after the pattern is exhausted is ignored.
    pub(crate) fn parse(
        &self,
        pattern: &str,
        input: &str,
    ) -> Result<Zoned, Error> {
        let mut pieces = Pieces::new();
        let mut inp = input;
        let mut node = self.graph.root();
        let mut acc = String::new();
        let mut interpret = false;

        for ch in pattern.chars() {
            if !interpret && ch == self.prefix {
                interpret = true;
                continue;
            }
            if !interpret {
                inp = skip_rune(inp);
                continue;
            }
            if let Some(child) = node.child(ch) {
                acc.push(ch);
                node = child;
                continue;
            }
            if acc.is_empty() {
                return Err(err!(
                    "unrecognized token '{prefix}{ch}' in pattern",
                    prefix = self.prefix,
                ));
            }
            inp = self.apply(node, &acc, &mut pieces, inp)?;
            acc.clear();
            node = self.graph.root();
            interpret = ch == self.prefix;
            if !interpret {
                inp = skip_rune(inp);
            }
        }
        if interpret {
            if acc.is_empty() {
                return Err(err!(
                    "expected token after '{prefix}' at end of pattern",
                    prefix = self.prefix,
                ));
            }
            self.apply(node, &acc, &mut pieces, inp)?;
        }
        pieces.into_zoned()
    }

    /// Token listing in sorted order, each spelling shown with the prefix.
    pub(crate) fn describe(&self) -> String {
        describe(&self.tokens, Some(self.prefix))
    }

    fn flush(
        &self,
        out: &mut String,
        zdt: &Zoned,
        locale: Locale,
        node: &TokenGraphNode,
        acc: &str,
    ) -> Result<(), Error> {
        match node.value() {
            Some(entry) => out.push_str(&(entry.expand)(zdt, locale)?),
            None => {
                out.push(self.prefix);
                out.push_str(acc);
            }
        }
        Ok(())
    }

    fn apply<'i>(
        &self,
        node: &TokenGraphNode,
        acc: &str,
        pieces: &mut Pieces,
        inp: &'i str,
    ) -> Result<&'i str, Error> {
        let Some(entry) = node.value() else {
            return Err(err!(
                "unrecognized token '{prefix}{acc}' in pattern",
                prefix = self.prefix,
            ));
        };
        let Some(parse) = entry.parse else {
            return Err(err!(
                "parsing is not yet supported for token '{prefix}{acc}'",
                prefix = self.prefix,
            ));
        };
        let consumed = parse(pieces, inp)
            .with_context(|| err!("'{}{acc}' failed", self.prefix))?;
        Ok(&inp[consumed..])
    }
}

/// Drops one rune from the front of `inp`, if there is one.
fn skip_rune(inp: &str) -> &str {
    let mut chars = inp.chars();
    chars.next();
    chars.as_str()
}
