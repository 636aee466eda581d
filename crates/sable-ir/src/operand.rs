use crate::types::Type;
use serde::{Deserialize, Serialize};

/// Name of a local result, stored without its `%` sigil.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalName(String);

impl LocalName {
    pub fn new(name: impl Into<String>) -> Self {
        LocalName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocalName {
    fn from(name: &str) -> Self {
        LocalName(name.to_string())
    }
}

impl std::fmt::Display for LocalName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// Name of a declared parameter, stored without its `$` sigil.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParamName(String);

impl ParamName {
    pub fn new(name: impl Into<String>) -> Self {
        ParamName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParamName {
    fn from(name: &str) -> Self {
        ParamName(name.to_string())
    }
}

impl std::fmt::Display for ParamName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// Name of a global, stored without its `@` sigil.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalName(String);

impl GlobalName {
    pub fn new(name: impl Into<String>) -> Self {
        GlobalName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GlobalName {
    fn from(name: &str) -> Self {
        GlobalName(name.to_string())
    }
}

impl std::fmt::Display for GlobalName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// Block label, stored without its `.` sigil. Labels live in their own
/// namespace, disjoint from local/param/global names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label(String);

impl Label {
    /// The conventional label of a function's first block. Execution enters
    /// at block 0 by position; this name is what the builder gives it.
    pub fn entry() -> Self {
        Label("entry".to_string())
    }

    pub fn new(name: impl Into<String>) -> Self {
        Label(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_entry(&self) -> bool {
        self.0 == "entry"
    }
}

impl From<&str> for Label {
    fn from(name: &str) -> Self {
        Label(name.to_string())
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, ".{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Constant {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl Constant {
    pub fn ty(&self) -> Type {
        match self {
            Constant::String(_) => Type::String,
            Constant::Number(_) => Type::Number,
            Constant::Boolean(_) => Type::Boolean,
        }
    }
}

impl std::fmt::Display for Constant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constant::String(s) => write!(f, "{}", crate::format::quote_str(s)),
            Constant::Number(n) => write!(f, "{}", n),
            Constant::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Local { name: LocalName, ty: Type },
    Param { name: ParamName, ty: Type },
    Global { name: GlobalName, ty: Type },
    Constant(Constant),
}

impl Operand {
    pub fn local(name: impl Into<String>, ty: Type) -> Self {
        Operand::Local {
            name: LocalName::new(name),
            ty,
        }
    }

    pub fn param(name: impl Into<String>, ty: Type) -> Self {
        Operand::Param {
            name: ParamName::new(name),
            ty,
        }
    }

    pub fn global(name: impl Into<String>, ty: Type) -> Self {
        Operand::Global {
            name: GlobalName::new(name),
            ty,
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Operand::Constant(Constant::String(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Operand::Constant(Constant::Number(value))
    }

    pub fn boolean(value: bool) -> Self {
        Operand::Constant(Constant::Boolean(value))
    }

    /// The declared type of a named operand, or the constant's natural type.
    pub fn ty(&self) -> Type {
        match self {
            Operand::Local { ty, .. } => ty.clone(),
            Operand::Param { ty, .. } => ty.clone(),
            Operand::Global { ty, .. } => ty.clone(),
            Operand::Constant(c) => c.ty(),
        }
    }

    pub fn is_constant(&self) -> bool {
        matches!(self, Operand::Constant(_))
    }

    pub fn as_constant(&self) -> Option<&Constant> {
        match self {
            Operand::Constant(c) => Some(c),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Local { name, .. } => write!(f, "{}", name),
            Operand::Param { name, .. } => write!(f, "{}", name),
            Operand::Global { name, .. } => write!(f, "{}", name),
            Operand::Constant(c) => write!(f, "{}", c),
        }
    }
}
