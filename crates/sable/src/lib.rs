/*! Unified interface for the Sable IR toolchain.
 *
 * Single import for everything you need: building and printing IR functions,
 * running them through the reference interpreter, and lowering them to C.
 */

pub use sable_cgen as cgen;
pub use sable_interp as interp;
pub use sable_ir as ir;

pub use sable_ir::{
    build_function,
    builder::FunctionBuilder,
    function::{Function, Parameter},
    instructions::Instruction,
    operand::{Constant, GlobalName, Label, LocalName, Operand, ParamName},
    types::{FunctionType, Type},
    verify::{verify, Violation},
};

pub use sable_interp::{interpret, Interpreter, Value};

pub use sable_cgen::{emit_c, lower_function};
