use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    Value,
    Boolean,
    Number,
    String,
    Object,
    Undefined,
    Null,
    UnboxedFunc(Box<FunctionType>),
}

impl Type {
    pub fn unboxed_func(returns: Type, params: Vec<Type>) -> Self {
        Type::UnboxedFunc(Box::new(FunctionType { returns, params }))
    }

    pub fn is_unboxed_func(&self) -> bool {
        matches!(self, Type::UnboxedFunc(_))
    }

    pub fn as_unboxed_func(&self) -> Option<&FunctionType> {
        match self {
            Type::UnboxedFunc(ft) => Some(ft),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Value => write!(f, "value"),
            Type::Boolean => write!(f, "boolean"),
            Type::Number => write!(f, "number"),
            Type::String => write!(f, "string"),
            Type::Object => write!(f, "object"),
            Type::Undefined => write!(f, "undefined"),
            Type::Null => write!(f, "null"),
            Type::UnboxedFunc(ft) => write!(f, "unboxed_func({})", ft),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FunctionType {
    pub returns: Type,
    pub params: Vec<Type>,
}

impl fmt::Display for FunctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .params
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "({}) -> {}", params, self.returns)
    }
}
