/*! Partial C lowering backend for Sable IR.
 *
 * Translates a function into C source against the runtime-support API
 * declared in `sable_rt.h`. The backend is a deliberate proof of concept:
 * arithmetic, comparison, calls and returns lower for real, while control
 * flow and the object model do not. Every gap is either an inert placeholder
 * comment in the output or a hard [`CgenError::Unimplemented`], never a
 * silent miscompile.
 */

pub mod c_ast;
pub mod lower;

pub use c_ast::{CDecl, CExpr, CParam, CStmt, CType, CUnit};
pub use lower::{emit_c, lower_function, mangle, RUNTIME_HEADER};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CgenError {
    #[error("cannot lower {0} to C yet")]
    Unimplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, CgenError>;
