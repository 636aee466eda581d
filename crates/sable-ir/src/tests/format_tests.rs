use crate::builder::build_function;
use crate::format::{format_function, format_instruction, quote_str};
use crate::function::{Function, Parameter};
use crate::instructions::Instruction;
use crate::operand::Operand;
use crate::samples;
use crate::types::Type;
use pretty_assertions::assert_eq;

fn kitchen_sink() -> Function {
    build_function(
        "kitchen_sink",
        vec![
            Parameter::new("flag", Type::Boolean),
            Parameter::new("n", Type::Number),
        ],
        |b| {
            let obj = b.make_object("obj");
            b.set(obj.clone(), Operand::string("tag"), Operand::string("demo"));
            let tag = b.get("tag", obj.clone(), Operand::string("tag"));
            let same = b.strict_eq("same", tag, Operand::string("demo"));
            let _either = b.or("either", same, Operand::boolean(false));
            let n = b.param(1);
            let bumped = b.add("bumped", n, Operand::number(1.0));
            let shrunk = b.sub("shrunk", bumped, Operand::number(2.0));
            let boxed = b.to_value("boxed", shrunk);
            let callee =
                Operand::global("helper", Type::unboxed_func(Type::Value, vec![Type::Value]));
            let out = b.unboxed_call("out", callee, vec![boxed]).unwrap();
            let flag = b.param(0);
            b.jump_if(flag, "finish", "spin");

            b.add_block("spin", |b| {
                b.jump("finish");
            });
            b.add_block("finish", |b| {
                b.return_value(out);
            });
        },
    )
}

#[test]
fn test_format_sum_to_ten() {
    let expected = "\
function @sum_to_ten() {
.entry:
  %state = make_object
  set %state[\"sum\"] = 0
  set %state[\"i\"] = 0
  jump .loop
.loop:
  %sum = get %state[\"sum\"]
  %i = get %state[\"i\"]
  %new_sum = add %sum, %i
  %new_i = add %i, 1
  set %state[\"sum\"] = %new_sum
  set %state[\"i\"] = %new_i
  %done = strict_eq %new_i, 10
  jump_if %done then: .exit else: .loop
.exit:
  %final_sum = get %state[\"sum\"]
  %result = to_value %final_sum
  return %result
}";
    assert_eq!(format_function(&samples::sum_to_ten()), expected);
}

#[test]
fn test_format_covers_every_instruction_kind() {
    let expected = "\
function @kitchen_sink($flag: boolean, $n: number) {
.entry:
  %obj = make_object
  set %obj[\"tag\"] = \"demo\"
  %tag = get %obj[\"tag\"]
  %same = strict_eq %tag, \"demo\"
  %either = or %same, false
  %bumped = add $n, 1
  %shrunk = sub %bumped, 2
  %boxed = to_value %shrunk
  %out = unboxed_call @helper(%boxed)
  jump_if $flag then: .finish else: .spin
.spin:
  jump .finish
.finish:
  return %out
}";
    assert_eq!(format_function(&kitchen_sink()), expected);
}

#[test]
fn test_format_is_deterministic() {
    let func = samples::sum_to_ten();
    assert_eq!(format_function(&func), format_function(&func));

    let sink = kitchen_sink();
    assert_eq!(format_function(&sink), format_function(&sink));
}

#[test]
fn test_format_empty_function() {
    let func = build_function("nothing", vec![], |_| {});
    assert_eq!(format_function(&func), "function @nothing() {\n.entry:\n}");
}

#[test]
fn test_format_call_with_several_args() {
    let callee = Operand::global(
        "max",
        Type::unboxed_func(Type::Value, vec![Type::Value, Type::Value]),
    );
    let inst =
        Instruction::unboxed_call("biggest", callee, vec![Operand::number(1.0), Operand::number(2.0)])
            .unwrap();
    assert_eq!(
        format_instruction(&inst),
        "%biggest = unboxed_call @max(1, 2)"
    );

    let nullary = Operand::global("now", Type::unboxed_func(Type::Value, vec![]));
    let inst = Instruction::unboxed_call("stamp", nullary, vec![]).unwrap();
    assert_eq!(format_instruction(&inst), "%stamp = unboxed_call @now()");
}

#[test]
fn test_display_matches_format_function() {
    let func = samples::sum_to_ten();
    assert_eq!(func.to_string(), format_function(&func));
}

#[test]
fn test_quote_str() {
    assert_eq!(quote_str("plain"), "\"plain\"");
    assert_eq!(quote_str("say \"hi\""), "\"say \\\"hi\\\"\"");
    assert_eq!(quote_str("back\\slash"), "\"back\\\\slash\"");
    assert_eq!(quote_str("line\nbreak"), "\"line\\nbreak\"");
    assert_eq!(quote_str("tab\there"), "\"tab\\there\"");
    assert_eq!(quote_str("\u{01}"), "\"\\u0001\"");
}

#[test]
fn test_number_constants_render_naturally() {
    let inst = Instruction::Return {
        value: Operand::number(1.5),
    };
    assert_eq!(format_instruction(&inst), "return 1.5");

    let inst = Instruction::Return {
        value: Operand::number(-3.0),
    };
    assert_eq!(format_instruction(&inst), "return -3");
}
