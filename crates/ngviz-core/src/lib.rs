//! ngviz core — dependency graph schema and symbol identity resolution

pub mod config;
pub mod error;
pub mod graph;
pub mod identity;
pub mod model;
pub mod symbols;


#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use error::{ConfigError, UnknownDiscriminant};
pub use identity::{
    ANGULAR_PATH_SEGMENT, IdentityResolver, MatchFn, Membership, PathMatcher, PathSegment,
    ProviderKey, provider_id, provider_name, symbol_id,
};
pub use model::{
    Direction, Edge, Graph, Layout, Metadata, Node, StringPair, SymbolKind, SymbolType, Theme,
    Themes, VisualizationConfig,
};
pub use symbols::{ProviderMeta, ProviderToken, Subject, SymbolLike, SymbolRef, TokenIdentifier, is_truthy};
