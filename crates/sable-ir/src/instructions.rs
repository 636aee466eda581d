use crate::operand::{Label, LocalName, Operand};
use crate::types::Type;
use crate::{IrError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    MakeObject {
        result: LocalName,
    },
    Set {
        object: Operand,
        property: Operand,
        value: Operand,
    },
    Get {
        result: LocalName,
        object: Operand,
        property: Operand,
    },
    StrictEq {
        result: LocalName,
        left: Operand,
        right: Operand,
    },
    Or {
        result: LocalName,
        left: Operand,
        right: Operand,
    },
    Add {
        result: LocalName,
        left: Operand,
        right: Operand,
    },
    Sub {
        result: LocalName,
        left: Operand,
        right: Operand,
    },
    UnboxedCall {
        result: LocalName,
        callee: Operand,
        args: Vec<Operand>,
    },
    Return {
        value: Operand,
    },
    ToValue {
        result: LocalName,
        value: Operand,
    },
    JumpIf {
        condition: Operand,
        if_truthy: Label,
        if_falsy: Label,
    },
    Jump {
        to: Label,
    },
}

impl Instruction {
    /// Builds an `UnboxedCall`, rejecting a callee whose declared type is not
    /// `unboxed_func`. The check runs here so a bad call site fails before
    /// the instruction can reach a block.
    pub fn unboxed_call(
        result: impl Into<LocalName>,
        callee: Operand,
        args: Vec<Operand>,
    ) -> Result<Instruction> {
        match callee.ty() {
            Type::UnboxedFunc(_) => Ok(Instruction::UnboxedCall {
                result: result.into(),
                callee,
                args,
            }),
            other => Err(IrError::TypeError(format!(
                "unboxed_call callee {} has type {}, expected unboxed_func",
                callee, other
            ))),
        }
    }

    pub fn result(&self) -> Option<&LocalName> {
        match self {
            Instruction::MakeObject { result }
            | Instruction::Get { result, .. }
            | Instruction::StrictEq { result, .. }
            | Instruction::Or { result, .. }
            | Instruction::Add { result, .. }
            | Instruction::Sub { result, .. }
            | Instruction::UnboxedCall { result, .. }
            | Instruction::ToValue { result, .. } => Some(result),
            Instruction::Set { .. }
            | Instruction::Return { .. }
            | Instruction::JumpIf { .. }
            | Instruction::Jump { .. } => None,
        }
    }

    /// The type each result-writing kind produces. Fixed per kind; the
    /// operand types never influence it.
    pub fn result_type(&self) -> Option<Type> {
        match self {
            Instruction::MakeObject { .. } => Some(Type::Object),
            Instruction::Get { .. }
            | Instruction::Or { .. }
            | Instruction::Add { .. }
            | Instruction::Sub { .. }
            | Instruction::UnboxedCall { .. }
            | Instruction::ToValue { .. } => Some(Type::Value),
            Instruction::StrictEq { .. } => Some(Type::Boolean),
            Instruction::Set { .. }
            | Instruction::Return { .. }
            | Instruction::JumpIf { .. }
            | Instruction::Jump { .. } => None,
        }
    }

    /// The result as a ready-to-use local operand, for threading into later
    /// instructions.
    pub fn result_operand(&self) -> Option<Operand> {
        let name = self.result()?.clone();
        let ty = self.result_type()?;
        Some(Operand::Local { name, ty })
    }

    pub fn is_terminator(&self) -> bool {
        matches!(
            self,
            Instruction::Return { .. } | Instruction::JumpIf { .. } | Instruction::Jump { .. }
        )
    }

    pub fn mnemonic(&self) -> &'static str {
        match self {
            Instruction::MakeObject { .. } => "make_object",
            Instruction::Set { .. } => "set",
            Instruction::Get { .. } => "get",
            Instruction::StrictEq { .. } => "strict_eq",
            Instruction::Or { .. } => "or",
            Instruction::Add { .. } => "add",
            Instruction::Sub { .. } => "sub",
            Instruction::UnboxedCall { .. } => "unboxed_call",
            Instruction::Return { .. } => "return",
            Instruction::ToValue { .. } => "to_value",
            Instruction::JumpIf { .. } => "jump_if",
            Instruction::Jump { .. } => "jump",
        }
    }
}
