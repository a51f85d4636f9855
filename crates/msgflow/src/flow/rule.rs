//! Extraction rules
//!
//! A rule pairs a free-form regex that *captures* values from a line with a
//! template that *reformats* them into the fixed
//! `src:<S>, dst:<D>, msg_id:<M>, extra_info:<E>` shape.
//!
//! Rule patterns use Perl-compatible syntax, including look-around and
//! backreferences, through `fancy_regex`.

use fancy_regex::Regex;
use tracing::{debug, warn};

use crate::core::{count_parens, strip_escaped_parens, MsgFlowError, RuleRejection};

/// Number of positional values every usable rule binds (`@1`..`@16`)
pub const MAX_CAPTURE_GROUPS: usize = 16;

/// Pad `pattern` with empty `()` groups until it declares `max_groups` groups
///
/// Escaped parentheses (`\(`, `\)`) are ignored when counting. Patterns with
/// no groups, more than `max_groups` groups, or unbalanced parentheses are
/// rejected.
///
/// ```
/// use msgflow::flow::normalize_pattern;
///
/// assert_eq!(normalize_pattern(r"(\w+)", 3).unwrap(), r"(\w+)()()");
/// assert!(normalize_pattern("no groups", 3).is_err());
/// ```
pub fn normalize_pattern(pattern: &str, max_groups: usize) -> Result<String, RuleRejection> {
    let (open, close) = count_parens(&strip_escaped_parens(pattern));

    if open == 0 {
        return Err(RuleRejection::NoGroups);
    }
    if open > max_groups {
        return Err(RuleRejection::TooManyGroups {
            count: open,
            max: max_groups,
        });
    }
    if open != close {
        return Err(RuleRejection::Unbalanced { open, close });
    }

    let mut padded = String::with_capacity(pattern.len() + 2 * (max_groups - open));
    padded.push_str(pattern);
    for _ in open..max_groups {
        padded.push_str("()");
    }
    Ok(padded)
}

/// Compile `pattern` so that it only matches a whole line
///
/// The bare pattern has to compile too: `a)(b` balances only once wrapped
/// in the anchoring group.
pub fn compile_full_match(pattern: &str) -> Result<Regex, RuleRejection> {
    let syntax = |e: fancy_regex::Error| RuleRejection::Syntax(e.to_string());
    Regex::new(pattern).map_err(syntax)?;
    Regex::new(&format!(r"\A(?:{})\z", pattern)).map_err(syntax)
}

/// Full-match `text` against `pattern`, returning every group (`$0` first)
///
/// Unmatched optional groups come back as empty strings. Returns `Ok(None)`
/// when the text does not match.
pub fn full_match_captures(
    pattern: &str,
    text: &str,
) -> Result<Option<Vec<String>>, MsgFlowError> {
    let regex = compile_full_match(pattern).map_err(|e| MsgFlowError::invalid_rule(pattern, e))?;
    let caps = regex
        .captures(text)
        .map_err(|e| MsgFlowError::invalid_rule(pattern, RuleRejection::Syntax(e.to_string())))?;
    Ok(caps.map(|caps| {
        caps.iter()
            .map(|m| m.map(|m| m.as_str().to_string()).unwrap_or_default())
            .collect()
    }))
}

#[derive(Debug, Clone)]
enum Matcher {
    Usable(Regex),
    Rejected(RuleRejection),
}

/// A configured (pattern, template) matcher
///
/// The pattern is normalized and compiled once, when the rule is created.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    pattern: String,
    template: String,
    max_groups: usize,
    matcher: Matcher,
}

impl ExtractionRule {
    /// Create a rule binding [`MAX_CAPTURE_GROUPS`] positional values
    pub fn new(pattern: impl Into<String>, template: impl Into<String>) -> Self {
        Self::with_max_groups(pattern, template, MAX_CAPTURE_GROUPS)
    }

    /// Create a rule binding `max_groups` positional values
    pub fn with_max_groups(
        pattern: impl Into<String>,
        template: impl Into<String>,
        max_groups: usize,
    ) -> Self {
        let pattern = pattern.into();
        let template = template.into();

        let matcher = match normalize_pattern(&pattern, max_groups)
            .and_then(|padded| compile_full_match(&padded))
        {
            Ok(regex) => {
                debug!(pattern = %pattern, template = %template, "Registered extraction rule");
                Matcher::Usable(regex)
            }
            Err(reason) => {
                warn!(pattern = %pattern, %reason, "Extraction rule can never match");
                Matcher::Rejected(reason)
            }
        };

        Self {
            pattern,
            template,
            max_groups,
            matcher,
        }
    }

    /// The regex source as written in the directive
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The reformatting template as written in the directive
    pub fn template(&self) -> &str {
        &self.template
    }

    /// How many positional values this rule binds
    pub fn max_groups(&self) -> usize {
        self.max_groups
    }

    pub fn is_usable(&self) -> bool {
        matches!(self.matcher, Matcher::Usable(_))
    }

    /// Why this rule never matches, if it is unusable
    pub fn rejection(&self) -> Option<&RuleRejection> {
        match &self.matcher {
            Matcher::Usable(_) => None,
            Matcher::Rejected(reason) => Some(reason),
        }
    }

    /// Check the rule, turning a rejection into an error
    pub fn validate(&self) -> Result<(), MsgFlowError> {
        match self.rejection() {
            None => Ok(()),
            Some(reason) => Err(MsgFlowError::invalid_rule(&self.pattern, reason.clone())),
        }
    }

    /// Full-match `line`, returning exactly `max_groups` captured values
    pub fn capture(&self, line: &str) -> Option<Vec<String>> {
        let Matcher::Usable(regex) = &self.matcher else {
            return None;
        };
        let caps = match regex.captures(line) {
            Ok(caps) => caps?,
            Err(e) => {
                debug!(pattern = %self.pattern, error = %e, "Matching gave up, no match");
                return None;
            }
        };
        Some(
            (1..=self.max_groups)
                .map(|i| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default())
                .collect(),
        )
    }
}

impl PartialEq for ExtractionRule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.template == other.template
            && self.max_groups == other.max_groups
    }
}

impl Eq for ExtractionRule {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pads_to_max() {
        let padded = normalize_pattern(r"(\w+)->(\w+)", MAX_CAPTURE_GROUPS).unwrap();
        assert_eq!(padded, format!(r"(\w+)->(\w+){}", "()".repeat(14)));
    }

    #[test]
    fn test_normalize_full_pattern_untouched() {
        let pattern = "(a)".repeat(16);
        assert_eq!(normalize_pattern(&pattern, 16).unwrap(), pattern);
    }

    #[test]
    fn test_normalize_ignores_escaped_parens() {
        let padded = normalize_pattern(r"\((\d+)\)", 2).unwrap();
        assert_eq!(padded, r"\((\d+)\)()");
        assert_eq!(
            normalize_pattern(r"\(only escaped\)", 2),
            Err(RuleRejection::NoGroups)
        );
    }

    #[test]
    fn test_normalize_rejections() {
        assert_eq!(normalize_pattern("abc", 16), Err(RuleRejection::NoGroups));
        assert_eq!(
            normalize_pattern(&"(a)".repeat(17), 16),
            Err(RuleRejection::TooManyGroups { count: 17, max: 16 })
        );
        assert_eq!(
            normalize_pattern("(a(b)", 16),
            Err(RuleRejection::Unbalanced { open: 2, close: 1 })
        );
    }

    #[test]
    fn test_capture_returns_fixed_arity() {
        let rule = ExtractionRule::new(r"(\w+)->(\w+)", "src:@1, dst:@2, msg_id:x, extra_info:");
        let caps = rule.capture("A->B").unwrap();
        assert_eq!(caps.len(), MAX_CAPTURE_GROUPS);
        assert_eq!(caps[0], "A");
        assert_eq!(caps[1], "B");
        assert!(caps[2..].iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_capture_requires_full_match() {
        let rule = ExtractionRule::new(r"(\w+)->(\w+)", "");
        assert!(rule.capture("A->B trailing").is_none());
        assert!(rule.capture("x A->B").is_none());
    }

    #[test]
    fn test_alternation_is_anchored_as_a_whole() {
        let rule = ExtractionRule::new(r"(a)|(b)", "");
        assert!(rule.capture("a").is_some());
        assert!(rule.capture("b").is_some());
        assert!(rule.capture("ab").is_none());
    }

    #[test]
    fn test_unmatched_optional_group_is_empty() {
        let rule = ExtractionRule::new(r"(\w+)(?:-(\d+))?", "");
        let caps = rule.capture("abc").unwrap();
        assert_eq!(caps[0], "abc");
        assert_eq!(caps[1], "");
    }

    #[test]
    fn test_rejected_rule_never_captures() {
        let rule = ExtractionRule::new("no groups", "");
        assert!(!rule.is_usable());
        assert_eq!(rule.rejection(), Some(&RuleRejection::NoGroups));
        assert!(rule.capture("no groups").is_none());
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_syntax_error_is_rejection() {
        let rule = ExtractionRule::new(r"(a)[z", "");
        assert!(matches!(rule.rejection(), Some(RuleRejection::Syntax(_))));
    }

    #[test]
    fn test_misordered_parens_are_rejected() {
        // Counts balance, but the bare pattern does not compile
        let rule = ExtractionRule::new("a)(b", "src:@1, dst:@1, msg_id:m, extra_info:");
        assert!(!rule.is_usable());
        assert!(matches!(rule.rejection(), Some(RuleRejection::Syntax(_))));
        assert!(rule.capture("ab").is_none());
        assert!(full_match_captures("a)(b", "ab").is_err());
    }

    #[test]
    fn test_backreference() {
        let rule = ExtractionRule::new(r"(\w+)->(\w+) \1", "");
        assert!(rule.is_usable());
        let caps = rule.capture("A->B A").unwrap();
        assert_eq!(&caps[..2], ["A", "B"]);
        assert!(rule.capture("A->B B").is_none());
    }

    #[test]
    fn test_lookahead() {
        let rule = ExtractionRule::new(r"(\w+)(?=:):(\w+)", "");
        assert!(rule.is_usable());
        let caps = rule.capture("key:value").unwrap();
        assert_eq!(&caps[..2], ["key", "value"]);
    }

    #[test]
    fn test_lookbehind() {
        let rule = ExtractionRule::new(r"(\w+) (?<=\s)(\d+)", "");
        assert_eq!(&rule.capture("id 42").unwrap()[..2], ["id", "42"]);
    }

    #[test]
    fn test_full_match_captures() {
        let caps = full_match_captures(r"(\w+)=(\d+)", "x=42").unwrap().unwrap();
        assert_eq!(caps, vec!["x=42", "x", "42"]);
        assert!(full_match_captures(r"(\w+)", "a b").unwrap().is_none());
        assert!(full_match_captures("(", "x").is_err());
    }
}
