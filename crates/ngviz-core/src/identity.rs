//! Stable identifiers, display names and framework classification for
//! symbols and provider tokens.
//!
//! Every operation here is total: partial input yields a degenerate id,
//! `None`, or [`Membership::Unknown`], never an error.

use std::borrow::Cow;
use std::fmt;

use globset::GlobMatcher;
use regex::Regex;
use serde_json::Value;

use crate::error::ConfigError;
use crate::model::{Node, SymbolKind, SymbolType};
use crate::symbols::{ProviderMeta, Subject, SymbolLike};

/// Path segment identifying files of the vendored Angular packages.
pub const ANGULAR_PATH_SEGMENT: &str = "node_modules/@angular";

/// Qualified identifier of a symbol: `<filePath>#<name>`.
///
/// Empty fields are not rejected; `{name: "Foo", filePath: ""}` yields `"#Foo"`.
pub fn symbol_id<S: SymbolLike + ?Sized>(symbol: &S) -> String {
    format!("{}#{}", symbol.file_path(), symbol.name())
}

/// What a provider token resolved to.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderKey<'a> {
    /// The token's literal value, returned as-is.
    Literal(&'a Value),
    /// A qualified symbol id or a bare symbol name.
    Reference(Cow<'a, str>),
}

impl ProviderKey<'_> {
    /// Render as a graph node key. String literals are used raw, other
    /// literals as compact JSON.
    pub fn to_node_key(&self) -> String {
        match self {
            ProviderKey::Literal(Value::String(s)) => s.clone(),
            ProviderKey::Literal(other) => other.to_string(),
            ProviderKey::Reference(s) => s.to_string(),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, ProviderKey::Literal(_))
    }
}

impl fmt::Display for ProviderKey<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_node_key())
    }
}

/// Unique id of a provider's token.
///
/// A truthy literal wins, then the referenced symbol's qualified id.
/// Returns `None` when the token carries neither.
pub fn provider_id(provider: &ProviderMeta) -> Option<ProviderKey<'_>> {
    let token = provider.token.as_ref()?;
    if let Some(value) = token.truthy_value() {
        return Some(ProviderKey::Literal(value));
    }
    match token.referenced_symbol() {
        Some(symbol) => Some(ProviderKey::Reference(Cow::Owned(symbol_id(symbol)))),
        None => {
            tracing::debug!("provider token has neither a literal nor an identifier");
            None
        }
    }
}

/// Display name of a provider's token. Same precedence as [`provider_id`],
/// but a referenced symbol yields its bare name.
pub fn provider_name(provider: &ProviderMeta) -> Option<ProviderKey<'_>> {
    let token = provider.token.as_ref()?;
    if let Some(value) = token.truthy_value() {
        return Some(ProviderKey::Literal(value));
    }
    token
        .referenced_symbol()
        .map(|symbol| ProviderKey::Reference(Cow::Borrowed(symbol.name.as_str())))
}

/// Three-valued answer to "is this part of the framework?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Membership {
    Confirmed,
    Denied,
    /// Not enough information to tell.
    Unknown,
}

impl Membership {
    pub fn from_bool(value: bool) -> Self {
        if value {
            Membership::Confirmed
        } else {
            Membership::Denied
        }
    }

    pub fn is_confirmed(self) -> bool {
        self == Membership::Confirmed
    }

    pub fn is_unknown(self) -> bool {
        self == Membership::Unknown
    }

    pub fn as_option(self) -> Option<bool> {
        match self {
            Membership::Confirmed => Some(true),
            Membership::Denied => Some(false),
            Membership::Unknown => None,
        }
    }

    /// Collapse to a boolean, using `if_unknown` for [`Membership::Unknown`].
    pub fn decide(self, if_unknown: bool) -> bool {
        self.as_option().unwrap_or(if_unknown)
    }
}

/// Predicate deciding whether a file path belongs to the framework.
pub trait PathMatcher {
    fn is_match(&self, path: &str) -> bool;
}

/// Matches paths containing a fixed segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment(Cow<'static, str>);

impl PathSegment {
    pub fn new(segment: impl Into<Cow<'static, str>>) -> Self {
        PathSegment(segment.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PathMatcher for PathSegment {
    fn is_match(&self, path: &str) -> bool {
        path.contains(self.0.as_ref())
    }
}

impl PathMatcher for Regex {
    fn is_match(&self, path: &str) -> bool {
        Regex::is_match(self, path)
    }
}

impl PathMatcher for GlobMatcher {
    fn is_match(&self, path: &str) -> bool {
        GlobMatcher::is_match(self, path)
    }
}

/// Adapts a closure into a [`PathMatcher`].
#[derive(Clone)]
pub struct MatchFn<F>(pub F);

impl<F: Fn(&str) -> bool> PathMatcher for MatchFn<F> {
    fn is_match(&self, path: &str) -> bool {
        (self.0)(path)
    }
}

impl<M: PathMatcher + ?Sized> PathMatcher for Box<M> {
    fn is_match(&self, path: &str) -> bool {
        (**self).is_match(path)
    }
}

/// Classifies symbols and providers against an injected path matcher and
/// turns them into graph nodes.
#[derive(Debug, Clone)]
pub struct IdentityResolver<M = PathSegment> {
    matcher: M,
}

impl IdentityResolver<PathSegment> {
    /// Resolver recognising `node_modules/@angular` paths.
    pub fn angular() -> Self {
        IdentityResolver::new(PathSegment::new(ANGULAR_PATH_SEGMENT))
    }
}

impl Default for IdentityResolver<PathSegment> {
    fn default() -> Self {
        Self::angular()
    }
}

impl IdentityResolver<Regex> {
    /// Resolver whose framework check is an unanchored regex search.
    pub fn from_pattern(pattern: &str) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(IdentityResolver::new(regex))
    }
}

impl<M: PathMatcher> IdentityResolver<M> {
    pub fn new(matcher: M) -> Self {
        IdentityResolver { matcher }
    }

    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    pub fn classify(&self, subject: Subject<'_>) -> Membership {
        match subject {
            Subject::Symbol(symbol) => self.classify_symbol(symbol),
            Subject::Provider(provider) => self.classify_provider(provider),
        }
    }

    /// A bare symbol is framework-internal iff its path matches.
    pub fn classify_symbol<S: SymbolLike + ?Sized>(&self, symbol: &S) -> Membership {
        Membership::from_bool(self.matcher.is_match(symbol.file_path()))
    }

    /// Missing wrappers and truthy literal tokens are [`Membership::Denied`]:
    /// the framework registers none of its providers under literal tokens.
    /// A token with neither literal nor identifier is [`Membership::Unknown`].
    pub fn classify_provider(&self, provider: Option<&ProviderMeta>) -> Membership {
        let Some(token) = provider.and_then(|p| p.token.as_ref()) else {
            return Membership::Denied;
        };
        if token.truthy_value().is_some() {
            return Membership::Denied;
        }
        match token.referenced_symbol() {
            Some(symbol) => self.classify_symbol(symbol),
            None => {
                tracing::debug!("cannot classify provider token without literal or identifier");
                Membership::Unknown
            }
        }
    }

    /// Node keyed by the symbol id and labelled with its name.
    pub fn symbol_node<T, S: SymbolLike + ?Sized>(&self, symbol: &S, kind: SymbolKind) -> Node<T> {
        let angular = self.classify_symbol(symbol).is_confirmed();
        Node::new(symbol_id(symbol), symbol.name()).with_type(SymbolType::new(angular, kind))
    }

    /// Provider node, or `None` when the token cannot be identified.
    /// An undecidable classification is drawn as application code.
    pub fn provider_node<T>(&self, provider: &ProviderMeta) -> Option<Node<T>> {
        let id = provider_id(provider)?.to_node_key();
        let label = provider_name(provider)?.to_node_key();
        let angular = self.classify_provider(Some(provider)).decide(false);
        Some(Node::new(id, label).with_type(SymbolType::new(angular, SymbolKind::Provider)))
    }
}
