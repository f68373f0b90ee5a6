//! Symbol and provider shapes handed over by the analysis layer

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Minimum shape of a static symbol: a name declared in a source file.
pub trait SymbolLike {
    fn name(&self) -> &str;
    fn file_path(&self) -> &str;
}

impl<S: SymbolLike + ?Sized> SymbolLike for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn file_path(&self) -> &str {
        (**self).file_path()
    }
}

/// A symbol reference as produced by the compiler layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRef {
    pub name: String,
    pub file_path: String,
}

impl SymbolRef {
    pub fn new(name: impl Into<String>, file_path: impl Into<String>) -> Self {
        SymbolRef {
            name: name.into(),
            file_path: file_path.into(),
        }
    }
}

impl SymbolLike for SymbolRef {
    fn name(&self) -> &str {
        &self.name
    }

    fn file_path(&self) -> &str {
        &self.file_path
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIdentifier {
    pub reference: SymbolRef,
}

/// The key a provider is registered under: a literal value, a symbol, or neither.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProviderToken {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<TokenIdentifier>,
}

impl ProviderToken {
    pub fn literal(value: impl Into<Value>) -> Self {
        ProviderToken {
            value: Some(value.into()),
            identifier: None,
        }
    }

    pub fn reference(symbol: SymbolRef) -> Self {
        ProviderToken {
            value: None,
            identifier: Some(TokenIdentifier { reference: symbol }),
        }
    }

    /// The literal value, if it is truthy.
    ///
    /// Falsy literals (`0`, `""`, `false`, `null`) are treated as if no
    /// literal were present, so they fall through to the identifier.
    pub fn truthy_value(&self) -> Option<&Value> {
        self.value.as_ref().filter(|v| is_truthy(v))
    }

    pub fn referenced_symbol(&self) -> Option<&SymbolRef> {
        self.identifier.as_ref().map(|id| &id.reference)
    }
}

/// A dependency-injection binding. `token` may be absent in malformed metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProviderMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<ProviderToken>,
}

impl ProviderMeta {
    pub fn new(token: ProviderToken) -> Self {
        ProviderMeta { token: Some(token) }
    }
}

/// Input to framework classification: either a bare symbol or a provider
/// wrapper (`None` when the wrapper itself is missing).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Subject<'a> {
    Symbol(&'a SymbolRef),
    Provider(Option<&'a ProviderMeta>),
}

impl<'a> From<&'a SymbolRef> for Subject<'a> {
    fn from(symbol: &'a SymbolRef) -> Self {
        Subject::Symbol(symbol)
    }
}

impl<'a> From<&'a ProviderMeta> for Subject<'a> {
    fn from(provider: &'a ProviderMeta) -> Self {
        Subject::Provider(Some(provider))
    }
}

/// JavaScript-style truthiness of a JSON literal.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
