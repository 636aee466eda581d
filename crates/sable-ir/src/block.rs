use crate::instructions::Instruction;
use crate::operand::Label;
use serde::{Deserialize, Serialize};

/// A labeled straight-line run of instructions. Blocks are plain ordered
/// lists; whether a block actually ends in a terminator is a convention
/// checked by the verifier, not a structural guarantee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicBlock {
    pub label: Label,
    pub instructions: Vec<Instruction>,
}

impl BasicBlock {
    pub fn new(label: impl Into<Label>) -> Self {
        Self {
            label: label.into(),
            instructions: Vec::new(),
        }
    }

    pub fn push(&mut self, inst: Instruction) {
        self.instructions.push(inst);
    }

    pub fn is_terminated(&self) -> bool {
        self.instructions
            .last()
            .is_some_and(|inst| inst.is_terminator())
    }

    /// Labels this block can jump to, taken from every branch instruction in
    /// the list (not only the last one).
    pub fn successors(&self) -> Vec<&Label> {
        let mut succs = Vec::new();
        for inst in &self.instructions {
            match inst {
                Instruction::Jump { to } => succs.push(to),
                Instruction::JumpIf {
                    if_truthy, if_falsy, ..
                } => {
                    succs.push(if_truthy);
                    succs.push(if_falsy);
                }
                _ => {}
            }
        }
        succs
    }
}
