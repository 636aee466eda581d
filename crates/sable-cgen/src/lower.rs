/*! Instruction-by-instruction lowering into the C AST.
 *
 * The generated signature always takes and returns the boxed `SblValue`.
 * Blocks flatten into one statement list with their labels between them; the
 * entry label is dropped since execution falls straight into it.
 */

use sable_ir::{Constant, Function, Instruction, LocalName, Operand};

use crate::c_ast::{CDecl, CExpr, CParam, CStmt, CType, CUnit};
use crate::{CgenError, Result};

/// Header declaring the runtime-support API the generated code calls into.
pub const RUNTIME_HEADER: &str = "sable_rt.h";

/// Lowers `function` and prints it as C source.
pub fn emit_c(function: &Function) -> Result<String> {
    lower_function(function).map(|unit| unit.to_string())
}

/// Lowers `function` into a compilation unit: the runtime include, a forward
/// declaration, and the definition.
pub fn lower_function(function: &Function) -> Result<CUnit> {
    let name = mangle(function.name.as_str());
    let params: Vec<CParam> = function
        .params
        .iter()
        .map(|p| CParam {
            name: mangle(p.name.as_str()),
            ty: CType::Value,
        })
        .collect();

    let mut body = Vec::new();
    for block in &function.blocks {
        if !block.label.is_entry() {
            body.push(CStmt::Label(mangle(block.label.as_str())));
        }
        for inst in &block.instructions {
            lower_instruction(inst, &mut body)?;
        }
    }

    Ok(CUnit {
        decls: vec![
            CDecl::Include(RUNTIME_HEADER.to_string()),
            CDecl::FuncDecl {
                name: name.clone(),
                params: params.clone(),
                returns: CType::Value,
            },
            CDecl::FuncDef {
                name,
                params,
                returns: CType::Value,
                body,
            },
        ],
    })
}

fn lower_instruction(inst: &Instruction, body: &mut Vec<CStmt>) -> Result<()> {
    match inst {
        Instruction::StrictEq {
            result,
            left,
            right,
        } => {
            body.push(runtime_binop(result, "sbl_strict_eq", left, right));
        }
        Instruction::Or {
            result,
            left,
            right,
        } => {
            body.push(runtime_binop(result, "sbl_or", left, right));
        }
        Instruction::Add {
            result,
            left,
            right,
        } => {
            body.push(runtime_binop(result, "sbl_add", left, right));
        }
        Instruction::Sub {
            result,
            left,
            right,
        } => {
            body.push(runtime_binop(result, "sbl_sub", left, right));
        }
        Instruction::UnboxedCall {
            result,
            callee,
            args,
        } => {
            body.push(CStmt::Local {
                name: mangle(result.as_str()),
                ty: CType::Value,
                init: CExpr::Call {
                    callee: Box::new(lower_operand(callee)),
                    args: args.iter().map(lower_operand).collect(),
                },
            });
        }
        Instruction::Return { value } => {
            body.push(CStmt::Return(lower_operand(value)));
        }
        Instruction::ToValue { .. } | Instruction::JumpIf { .. } => {
            // Placeholder rather than a hard error, so the rest of the
            // function still documents the intended shape.
            body.push(CStmt::Comment(format!(
                "unimplemented: {}",
                inst.mnemonic()
            )));
        }
        Instruction::MakeObject { .. }
        | Instruction::Set { .. }
        | Instruction::Get { .. }
        | Instruction::Jump { .. } => {
            return Err(CgenError::Unimplemented(inst.mnemonic()));
        }
    }
    Ok(())
}

fn runtime_binop(result: &LocalName, runtime_fn: &str, left: &Operand, right: &Operand) -> CStmt {
    CStmt::Local {
        name: mangle(result.as_str()),
        ty: CType::Value,
        init: CExpr::Call {
            callee: Box::new(CExpr::Ident(runtime_fn.to_string())),
            args: vec![lower_operand(left), lower_operand(right)],
        },
    }
}

fn lower_operand(operand: &Operand) -> CExpr {
    match operand {
        Operand::Local { name, .. } => CExpr::Ident(mangle(name.as_str())),
        Operand::Param { name, .. } => CExpr::Ident(mangle(name.as_str())),
        Operand::Global { name, .. } => CExpr::Ident(mangle(name.as_str())),
        Operand::Constant(Constant::Number(n)) => CExpr::Call {
            callee: Box::new(CExpr::Ident("sbl_number".to_string())),
            args: vec![CExpr::Number(*n)],
        },
        Operand::Constant(Constant::Boolean(b)) => CExpr::Bool(*b),
        Operand::Constant(Constant::String(_)) => {
            CExpr::Comment("unimplemented: string constant".to_string())
        }
    }
}

/// Strips a leading IR sigil and prefixes an underscore when the bare name
/// starts with a digit (C identifiers cannot). Applied uniformly to locals,
/// params, globals and labels; names differing only by sigil collide, so
/// callers must pick bare names that do not.
pub fn mangle(name: &str) -> String {
    let bare = name.strip_prefix(['%', '$', '@', '.']).unwrap_or(name);
    match bare.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{}", bare),
        _ => bare.to_string(),
    }
}
