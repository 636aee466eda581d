/*! Reference interpreter for Sable IR.
 *
 * Gives the instruction set concrete operational semantics: a boxed runtime
 * value model with JS-style truthiness and strict equality, one flat binding
 * environment per call activation, and cross-function calls resolved through
 * a registry of known functions. Serves as the correctness oracle for what
 * the printer and backends claim a function means.
 */

pub mod interp;
pub mod value;

pub use interp::{interpret, InterpOptions, Interpreter};
pub use value::{ObjectRef, Value};

use thiserror::Error;

/// Every way an interpretation can fail. All of these are fatal to the whole
/// run; there is no recovery mechanism.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpError {
    #[error("jump to unknown block {label} in function {function}")]
    UnknownBlock { function: String, label: String },
    #[error("call to unknown function {name}")]
    UnknownCallee { name: String },
    #[error("use of unbound name {name}")]
    Unbound { name: String },
    #[error("{context} expected {expected}, got {got}")]
    KindMismatch {
        expected: &'static str,
        got: &'static str,
        context: &'static str,
    },
    #[error("{callee} expects {expected} arguments, got {found}")]
    ArityMismatch {
        callee: String,
        expected: usize,
        found: usize,
    },
    #[error("callee {operand} is not a global function name")]
    InvalidCallee { operand: String },
    #[error("global {name} cannot be read as a value")]
    UnsupportedGlobalRead { name: String },
    #[error("block {label} in function {function} ran out of instructions without a terminator")]
    MissingTerminator { function: String, label: String },
    #[error("exceeded the step limit of {limit} (infinite loop?)")]
    StepLimit { limit: usize },
    #[error("exceeded the call depth limit of {limit} (runaway recursion?)")]
    DepthLimit { limit: usize },
}

pub type Result<T> = std::result::Result<T, InterpError>;
