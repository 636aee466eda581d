/*! Core IR types and builders for the Sable toolchain.
 *
 * Sable programs lower into a small typed instruction set over basic blocks.
 * This crate provides the building blocks to construct that IR imperatively,
 * print it deterministically, and check it for structural mistakes before a
 * backend or the interpreter touches it.
 */

pub mod block;
pub mod builder;
pub mod format;
pub mod function;
pub mod instructions;
pub mod operand;
pub mod persist;
pub mod samples;
pub mod types;
pub mod verify;

pub use block::BasicBlock;
pub use builder::{build_function, FunctionBuilder};
pub use function::{Function, Parameter};
pub use instructions::Instruction;
pub use operand::{Constant, GlobalName, Label, LocalName, Operand, ParamName};
pub use types::{FunctionType, Type};
pub use verify::{verify, Violation};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrError {
    #[error("Type error: {0}")]
    TypeError(String),
    #[error("Builder error: {0}")]
    BuilderError(String),
}

pub type Result<T> = std::result::Result<T, IrError>;

#[cfg(test)]
mod tests;
