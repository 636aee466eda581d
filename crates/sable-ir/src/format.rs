use crate::{block::BasicBlock, function::Function, instructions::Instruction};

/// Renders a function as IR text. Total: every constructible function
/// formats, and the same function always formats to the same string.
pub fn format_function(function: &Function) -> String {
    let params = function
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.ty))
        .collect::<Vec<_>>()
        .join(", ");

    let mut output = format!("function {}({}) {{\n", function.name, params);
    for block in &function.blocks {
        output.push_str(&format_block(block));
    }
    output.push('}');
    output
}

pub fn format_block(block: &BasicBlock) -> String {
    let mut output = format!("{}:\n", block.label);
    for inst in &block.instructions {
        output.push_str("  ");
        output.push_str(&format_instruction(inst));
        output.push('\n');
    }
    output
}

pub fn format_instruction(inst: &Instruction) -> String {
    match inst {
        Instruction::MakeObject { result } => {
            format!("{} = make_object", result)
        }
        Instruction::Set {
            object,
            property,
            value,
        } => {
            format!("set {}[{}] = {}", object, property, value)
        }
        Instruction::Get {
            result,
            object,
            property,
        } => {
            format!("{} = get {}[{}]", result, object, property)
        }
        Instruction::StrictEq {
            result,
            left,
            right,
        } => {
            format!("{} = strict_eq {}, {}", result, left, right)
        }
        Instruction::Or {
            result,
            left,
            right,
        } => {
            format!("{} = or {}, {}", result, left, right)
        }
        Instruction::Add {
            result,
            left,
            right,
        } => {
            format!("{} = add {}, {}", result, left, right)
        }
        Instruction::Sub {
            result,
            left,
            right,
        } => {
            format!("{} = sub {}, {}", result, left, right)
        }
        Instruction::UnboxedCall {
            result,
            callee,
            args,
        } => {
            let args = args
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} = unboxed_call {}({})", result, callee, args)
        }
        Instruction::Return { value } => {
            format!("return {}", value)
        }
        Instruction::ToValue { result, value } => {
            format!("{} = to_value {}", result, value)
        }
        Instruction::JumpIf {
            condition,
            if_truthy,
            if_falsy,
        } => {
            format!("jump_if {} then: {} else: {}", condition, if_truthy, if_falsy)
        }
        Instruction::Jump { to } => {
            format!("jump {}", to)
        }
    }
}

/// JSON-style string quoting, used for string constants in IR text.
pub fn quote_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
