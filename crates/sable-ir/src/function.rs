use crate::block::BasicBlock;
use crate::operand::{GlobalName, Label, Operand, ParamName};
use crate::types::Type;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: ParamName,
    pub ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: ParamName::new(name),
            ty,
        }
    }

    pub fn operand(&self) -> Operand {
        Operand::Param {
            name: self.name.clone(),
            ty: self.ty.clone(),
        }
    }
}

/// A finished function: a global name, typed parameters, and at least one
/// block, with the entry block first and the rest in creation order. Built
/// through [`crate::builder::FunctionBuilder`]; there is no mutating API
/// after that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Function {
    pub name: GlobalName,
    pub params: Vec<Parameter>,
    pub blocks: Vec<BasicBlock>,
}

impl Function {
    pub fn entry_block(&self) -> &BasicBlock {
        &self.blocks[0]
    }

    pub fn block(&self, label: &Label) -> Option<&BasicBlock> {
        self.blocks.iter().find(|b| &b.label == label)
    }

    pub fn param(&self, name: &ParamName) -> Option<&Parameter> {
        self.params.iter().find(|p| &p.name == name)
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::format_function(self))
    }
}
