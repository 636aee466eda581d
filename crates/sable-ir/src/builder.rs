/*! Imperative API for constructing functions block by block.
 *
 * The builder keeps a cursor on the block currently being filled. `add_block`
 * nests: it saves the cursor, runs a callback against the new block, and
 * restores the cursor afterwards, so straight-line code reads top to bottom
 * even when it creates branch targets along the way.
 */

use crate::block::BasicBlock;
use crate::function::{Function, Parameter};
use crate::instructions::Instruction;
use crate::operand::{GlobalName, Label, LocalName, Operand};
use crate::types::Type;
use crate::{IrError, Result};

pub struct FunctionBuilder {
    name: GlobalName,
    params: Vec<Parameter>,
    blocks: Vec<BasicBlock>,
    current: usize,
    saved: Vec<usize>,
}

impl FunctionBuilder {
    /// Starts a function with its entry block already created and current.
    pub fn new(name: impl Into<GlobalName>, params: Vec<Parameter>) -> Self {
        Self {
            name: name.into(),
            params,
            blocks: vec![BasicBlock::new(Label::entry())],
            current: 0,
            saved: Vec::new(),
        }
    }

    /// The declared parameter at `index` as an operand.
    pub fn param(&self, index: usize) -> Operand {
        self.params[index].operand()
    }

    pub fn current_label(&self) -> &Label {
        &self.blocks[self.current].label
    }

    /// Appends an instruction to the current block and returns a reference
    /// to it, so callers can thread `result_operand()` into later emits.
    pub fn emit(&mut self, inst: Instruction) -> &Instruction {
        let block = &mut self.blocks[self.current];
        let index = block.instructions.len();
        block.push(inst);
        &block.instructions[index]
    }

    pub fn make_object(&mut self, result: impl Into<LocalName>) -> Operand {
        let result = result.into();
        self.emit(Instruction::MakeObject {
            result: result.clone(),
        });
        Operand::Local {
            name: result,
            ty: Type::Object,
        }
    }

    pub fn set(&mut self, object: Operand, property: Operand, value: Operand) {
        self.emit(Instruction::Set {
            object,
            property,
            value,
        });
    }

    pub fn get(
        &mut self,
        result: impl Into<LocalName>,
        object: Operand,
        property: Operand,
    ) -> Operand {
        let result = result.into();
        self.emit(Instruction::Get {
            result: result.clone(),
            object,
            property,
        });
        Operand::Local {
            name: result,
            ty: Type::Value,
        }
    }

    pub fn strict_eq(
        &mut self,
        result: impl Into<LocalName>,
        left: Operand,
        right: Operand,
    ) -> Operand {
        let result = result.into();
        self.emit(Instruction::StrictEq {
            result: result.clone(),
            left,
            right,
        });
        Operand::Local {
            name: result,
            ty: Type::Boolean,
        }
    }

    pub fn or(&mut self, result: impl Into<LocalName>, left: Operand, right: Operand) -> Operand {
        let result = result.into();
        self.emit(Instruction::Or {
            result: result.clone(),
            left,
            right,
        });
        Operand::Local {
            name: result,
            ty: Type::Value,
        }
    }

    pub fn add(&mut self, result: impl Into<LocalName>, left: Operand, right: Operand) -> Operand {
        let result = result.into();
        self.emit(Instruction::Add {
            result: result.clone(),
            left,
            right,
        });
        Operand::Local {
            name: result,
            ty: Type::Value,
        }
    }

    pub fn sub(&mut self, result: impl Into<LocalName>, left: Operand, right: Operand) -> Operand {
        let result = result.into();
        self.emit(Instruction::Sub {
            result: result.clone(),
            left,
            right,
        });
        Operand::Local {
            name: result,
            ty: Type::Value,
        }
    }

    /// Emits an `unboxed_call`. Fails without appending anything if the
    /// callee's declared type is not `unboxed_func`.
    pub fn unboxed_call(
        &mut self,
        result: impl Into<LocalName>,
        callee: Operand,
        args: Vec<Operand>,
    ) -> Result<Operand> {
        let result = result.into();
        let inst = Instruction::unboxed_call(result.clone(), callee, args)?;
        self.emit(inst);
        Ok(Operand::Local {
            name: result,
            ty: Type::Value,
        })
    }

    pub fn return_value(&mut self, value: Operand) {
        self.emit(Instruction::Return { value });
    }

    pub fn to_value(&mut self, result: impl Into<LocalName>, value: Operand) -> Operand {
        let result = result.into();
        self.emit(Instruction::ToValue {
            result: result.clone(),
            value,
        });
        Operand::Local {
            name: result,
            ty: Type::Value,
        }
    }

    pub fn jump_if(
        &mut self,
        condition: Operand,
        if_truthy: impl Into<Label>,
        if_falsy: impl Into<Label>,
    ) {
        self.emit(Instruction::JumpIf {
            condition,
            if_truthy: if_truthy.into(),
            if_falsy: if_falsy.into(),
        });
    }

    pub fn jump(&mut self, to: impl Into<Label>) {
        self.emit(Instruction::Jump { to: to.into() });
    }

    /// Creates a block, runs `body` with the cursor on it, then restores the
    /// cursor to the block that was current before the call.
    ///
    /// The callback owns the cursor for the duration of `body` and must hand
    /// it back where it found it: leaving the cursor parked on some other
    /// block is a programmer error, reported by panicking with both labels.
    pub fn add_block(&mut self, label: impl Into<Label>, body: impl FnOnce(&mut Self)) -> Label {
        let label = label.into();
        let index = self.blocks.len();
        self.blocks.push(BasicBlock::new(label.clone()));
        self.saved.push(self.current);
        self.current = index;

        body(self);

        if self.current != index {
            panic!(
                "current block changed from {} to {} during add_block",
                self.blocks[index].label, self.blocks[self.current].label
            );
        }
        if let Some(previous) = self.saved.pop() {
            self.current = previous;
        }
        label
    }

    /// Repositions the cursor onto an existing block.
    pub fn switch_to_block(&mut self, label: &Label) -> Result<()> {
        match self.blocks.iter().position(|b| &b.label == label) {
            Some(index) => {
                self.current = index;
                Ok(())
            }
            None => Err(IrError::BuilderError(format!(
                "block {} does not exist in function {}",
                label, self.name
            ))),
        }
    }

    pub fn finish(self) -> Function {
        Function {
            name: self.name,
            params: self.params,
            blocks: self.blocks,
        }
    }
}

/// Builds a whole function in one call: the builder starts in the entry
/// block, `build` fills it in, and the finished function comes back out.
pub fn build_function(
    name: impl Into<GlobalName>,
    params: Vec<Parameter>,
    build: impl FnOnce(&mut FunctionBuilder),
) -> Function {
    let mut builder = FunctionBuilder::new(name, params);
    build(&mut builder);
    builder.finish()
}
