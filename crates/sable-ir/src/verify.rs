/*! Structural checks for finished functions.
 *
 * The builder stays permissive so partially-formed programs can be printed
 * and inspected; `verify` is the gate to run before handing a function to
 * the interpreter or a backend. It never fails: it returns every violation
 * it finds, in block order.
 */

use crate::function::Function;
use crate::instructions::Instruction;
use crate::operand::{Label, LocalName, Operand, ParamName};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    DuplicateBlockLabel {
        label: Label,
    },
    DuplicateParam {
        name: ParamName,
    },
    UnknownJumpTarget {
        block: Label,
        target: Label,
    },
    ResultReassigned {
        block: Label,
        name: LocalName,
    },
    MissingTerminator {
        block: Label,
    },
    InstructionAfterTerminator {
        block: Label,
        index: usize,
    },
    CalleeNotUnboxedFunc {
        block: Label,
        callee: Operand,
    },
    CallArityMismatch {
        block: Label,
        callee: Operand,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DuplicateBlockLabel { label } => {
                write!(f, "duplicate block label {}", label)
            }
            Violation::DuplicateParam { name } => {
                write!(f, "duplicate parameter {}", name)
            }
            Violation::UnknownJumpTarget { block, target } => {
                write!(f, "{}: jump to unknown label {}", block, target)
            }
            Violation::ResultReassigned { block, name } => {
                write!(f, "{}: {} is assigned more than once", block, name)
            }
            Violation::MissingTerminator { block } => {
                write!(f, "{}: block does not end in a terminator", block)
            }
            Violation::InstructionAfterTerminator { block, index } => {
                write!(f, "{}: instruction {} follows a terminator", block, index)
            }
            Violation::CalleeNotUnboxedFunc { block, callee } => {
                write!(f, "{}: callee {} is not an unboxed_func", block, callee)
            }
            Violation::CallArityMismatch {
                block,
                callee,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{}: call to {} passes {} arguments, its type takes {}",
                    block, callee, found, expected
                )
            }
        }
    }
}

pub fn verify(function: &Function) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut labels = HashSet::new();
    for block in &function.blocks {
        if !labels.insert(&block.label) {
            violations.push(Violation::DuplicateBlockLabel {
                label: block.label.clone(),
            });
        }
    }

    let mut params = HashSet::new();
    for param in &function.params {
        if !params.insert(&param.name) {
            violations.push(Violation::DuplicateParam {
                name: param.name.clone(),
            });
        }
    }

    let mut assigned: HashSet<&LocalName> = HashSet::new();
    for block in &function.blocks {
        let mut terminated_at = None;
        for (index, inst) in block.instructions.iter().enumerate() {
            if let Some(term_index) = terminated_at {
                if index == term_index + 1 {
                    violations.push(Violation::InstructionAfterTerminator {
                        block: block.label.clone(),
                        index,
                    });
                }
            }

            if let Some(result) = inst.result() {
                if !assigned.insert(result) {
                    violations.push(Violation::ResultReassigned {
                        block: block.label.clone(),
                        name: result.clone(),
                    });
                }
            }

            match inst {
                Instruction::Jump { to } => {
                    check_target(&labels, &block.label, to, &mut violations);
                }
                Instruction::JumpIf {
                    if_truthy,
                    if_falsy,
                    ..
                } => {
                    check_target(&labels, &block.label, if_truthy, &mut violations);
                    check_target(&labels, &block.label, if_falsy, &mut violations);
                }
                Instruction::UnboxedCall { callee, args, .. } => {
                    match callee.ty().as_unboxed_func() {
                        Some(ft) => {
                            if ft.params.len() != args.len() {
                                violations.push(Violation::CallArityMismatch {
                                    block: block.label.clone(),
                                    callee: callee.clone(),
                                    expected: ft.params.len(),
                                    found: args.len(),
                                });
                            }
                        }
                        None => {
                            violations.push(Violation::CalleeNotUnboxedFunc {
                                block: block.label.clone(),
                                callee: callee.clone(),
                            });
                        }
                    }
                }
                _ => {}
            }

            if inst.is_terminator() && terminated_at.is_none() {
                terminated_at = Some(index);
            }
        }

        if terminated_at.is_none() {
            violations.push(Violation::MissingTerminator {
                block: block.label.clone(),
            });
        }
    }

    violations
}

fn check_target(
    labels: &HashSet<&Label>,
    block: &Label,
    target: &Label,
    violations: &mut Vec<Violation>,
) {
    if !labels.contains(target) {
        violations.push(Violation::UnknownJumpTarget {
            block: block.clone(),
            target: target.clone(),
        });
    }
}
