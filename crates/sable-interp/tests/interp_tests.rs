use pretty_assertions::assert_eq;
use sable_interp::{interpret, InterpError, InterpOptions, Interpreter, ObjectRef, Value};
use sable_ir::{
    build_function, samples, BasicBlock, Function, GlobalName, Instruction, Label, Operand,
    Parameter, Type,
};

fn branch_probe() -> Function {
    build_function("branch_probe", vec![Parameter::new("x", Type::Value)], |b| {
        let x = b.param(0);
        b.jump_if(x, "yes", "no");
        b.add_block("yes", |b| b.return_value(Operand::string("truthy")));
        b.add_block("no", |b| b.return_value(Operand::string("falsy")));
    })
}

#[test]
fn test_sum_to_ten_evaluates_to_45() {
    assert_eq!(
        interpret(&samples::sum_to_ten(), &[]),
        Ok(Value::Number(45.0))
    );
}

#[test]
fn test_fib_of_10_is_55() {
    assert_eq!(
        interpret(&samples::fib(), &[Value::Number(10.0)]),
        Ok(Value::Number(55.0))
    );
}

#[test]
fn test_fib_matches_the_reference_sequence() {
    let function = samples::fib();
    let expected = [0.0, 1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0];
    for (n, want) in expected.iter().enumerate() {
        assert_eq!(
            interpret(&function, &[Value::Number(n as f64)]),
            Ok(Value::Number(*want)),
            "fib({})",
            n
        );
    }
}

#[test]
fn test_calls_resolve_through_the_registry() {
    let double = build_function("double", vec![Parameter::new("x", Type::Value)], |b| {
        let x = b.param(0);
        let doubled = b.add("doubled", x.clone(), x);
        b.return_value(doubled);
    });
    let quadruple = build_function("quadruple", vec![Parameter::new("x", Type::Value)], |b| {
        let callee =
            Operand::global("double", Type::unboxed_func(Type::Value, vec![Type::Value]));
        let x = b.param(0);
        let once = b.unboxed_call("once", callee.clone(), vec![x]).unwrap();
        let twice = b.unboxed_call("twice", callee, vec![once]).unwrap();
        b.return_value(twice);
    });

    let mut interp = Interpreter::new();
    interp.register(double);
    interp.register(quadruple);
    assert_eq!(
        interp.call("quadruple", &[Value::Number(3.0)]),
        Ok(Value::Number(12.0))
    );
}

#[test]
fn test_locals_stay_visible_across_blocks() {
    // One flat environment per activation, not per block.
    let function = build_function("cross_block", vec![], |b| {
        let seed = b.add("seed", Operand::number(40.0), Operand::number(2.0));
        b.jump("use_it");
        b.add_block("use_it", |b| {
            let out = b.to_value("out", seed);
            b.return_value(out);
        });
    });
    assert_eq!(interpret(&function, &[]), Ok(Value::Number(42.0)));
}

#[test]
fn test_execution_enters_the_first_block_whatever_its_label() {
    // The builder always labels block 0 ".entry", so assemble by hand:
    // entry is a position, not a name.
    let function = Function {
        name: GlobalName::new("answer"),
        params: vec![],
        blocks: vec![BasicBlock {
            label: Label::new("start"),
            instructions: vec![Instruction::Return {
                value: Operand::number(42.0),
            }],
        }],
    };
    assert_eq!(interpret(&function, &[]), Ok(Value::Number(42.0)));
}

#[test]
fn test_a_later_block_named_entry_does_not_run_first() {
    let function = Function {
        name: GlobalName::new("decoy"),
        params: vec![],
        blocks: vec![
            BasicBlock {
                label: Label::new("top"),
                instructions: vec![Instruction::Return {
                    value: Operand::number(1.0),
                }],
            },
            BasicBlock {
                label: Label::entry(),
                instructions: vec![Instruction::Return {
                    value: Operand::number(2.0),
                }],
            },
        ],
    };
    assert_eq!(interpret(&function, &[]), Ok(Value::Number(1.0)));
}

#[test]
fn test_strict_eq_never_coerces() {
    let function = build_function(
        "same",
        vec![
            Parameter::new("a", Type::Value),
            Parameter::new("b", Type::Value),
        ],
        |b| {
            let left = b.param(0);
            let right = b.param(1);
            let same = b.strict_eq("same", left, right);
            b.return_value(same);
        },
    );

    let cases = [
        (Value::Number(1.0), Value::String("1".to_string()), false),
        (Value::Number(1.0), Value::Boolean(true), false),
        (Value::Number(2.0), Value::Number(2.0), true),
        (
            Value::String("x".to_string()),
            Value::String("x".to_string()),
            true,
        ),
        (Value::Boolean(false), Value::Boolean(false), true),
        (Value::Undefined, Value::Null, false),
    ];
    for (left, right, want) in cases {
        assert_eq!(
            interpret(&function, &[left.clone(), right.clone()]),
            Ok(Value::Boolean(want)),
            "comparing {} with {}",
            left,
            right
        );
    }
}

#[test]
fn test_two_fresh_objects_are_not_strict_equal() {
    let function = build_function("fresh_objects", vec![], |b| {
        let first = b.make_object("first");
        let second = b.make_object("second");
        let same = b.strict_eq("same", first, second);
        b.return_value(same);
    });
    assert_eq!(interpret(&function, &[]), Ok(Value::Boolean(false)));
}

#[test]
fn test_an_object_is_strict_equal_to_its_alias() {
    let function = build_function("aliased_object", vec![], |b| {
        let obj = b.make_object("obj");
        let alias = b.to_value("alias", obj.clone());
        let same = b.strict_eq("same", obj, alias);
        b.return_value(same);
    });
    assert_eq!(interpret(&function, &[]), Ok(Value::Boolean(true)));
}

#[test]
fn test_objects_are_shared_by_reference() {
    // A write through one name is visible through every other handle.
    let function = build_function("shared", vec![], |b| {
        let outer = b.make_object("outer");
        let inner = b.make_object("inner");
        b.set(outer.clone(), Operand::string("child"), inner.clone());
        b.set(inner, Operand::string("mark"), Operand::number(7.0));
        let child = b.get("child", outer, Operand::string("child"));
        let mark = b.get("mark", child, Operand::string("mark"));
        b.return_value(mark);
    });
    assert_eq!(interpret(&function, &[]), Ok(Value::Number(7.0)));
}

#[test]
fn test_get_of_a_missing_key_is_undefined() {
    let function = build_function("missing_key", vec![], |b| {
        let obj = b.make_object("obj");
        let absent = b.get("absent", obj, Operand::string("nope"));
        b.return_value(absent);
    });
    assert_eq!(interpret(&function, &[]), Ok(Value::Undefined));
}

#[test]
fn test_or_returns_the_first_truthy_operand() {
    let function = build_function("first_truthy", vec![], |b| {
        let picked = b.or("picked", Operand::number(7.0), Operand::string("ignored"));
        b.return_value(picked);
    });
    assert_eq!(interpret(&function, &[]), Ok(Value::Number(7.0)));
}

#[test]
fn test_or_falls_through_to_the_second_operand() {
    let function = build_function("fallback", vec![], |b| {
        let picked = b.or(
            "picked",
            Operand::boolean(false),
            Operand::string("fallback"),
        );
        b.return_value(picked);
    });
    assert_eq!(
        interpret(&function, &[]),
        Ok(Value::String("fallback".to_string()))
    );
}

#[test]
fn test_jump_if_uses_javascript_truthiness() {
    let function = branch_probe();

    let falsy = [
        Value::Boolean(false),
        Value::Number(0.0),
        Value::Number(-0.0),
        Value::Number(f64::NAN),
        Value::String(String::new()),
        Value::Undefined,
        Value::Null,
    ];
    for value in falsy {
        assert_eq!(
            interpret(&function, &[value.clone()]),
            Ok(Value::String("falsy".to_string())),
            "{:?} should be falsy",
            value
        );
    }

    let truthy = [
        Value::Boolean(true),
        Value::Number(-1.0),
        Value::String("0".to_string()),
        Value::Object(ObjectRef::new()),
    ];
    for value in truthy {
        assert_eq!(
            interpret(&function, &[value.clone()]),
            Ok(Value::String("truthy".to_string())),
            "{:?} should be truthy",
            value
        );
    }
}

#[test]
fn test_add_rejects_non_numbers() {
    let function = build_function("bad_add", vec![], |b| {
        let sum = b.add("sum", Operand::string("a"), Operand::number(1.0));
        b.return_value(sum);
    });
    assert_eq!(
        interpret(&function, &[]),
        Err(InterpError::KindMismatch {
            expected: "number",
            got: "string",
            context: "add",
        })
    );
}

#[test]
fn test_sub_rejects_non_numbers() {
    let function = build_function("bad_sub", vec![], |b| {
        let diff = b.sub("diff", Operand::number(1.0), Operand::boolean(true));
        b.return_value(diff);
    });
    assert_eq!(
        interpret(&function, &[]),
        Err(InterpError::KindMismatch {
            expected: "number",
            got: "boolean",
            context: "sub",
        })
    );
}

#[test]
fn test_set_rejects_a_non_object_target() {
    let function = build_function("bad_set", vec![], |b| {
        b.set(
            Operand::number(3.0),
            Operand::string("k"),
            Operand::number(1.0),
        );
        b.return_value(Operand::number(0.0));
    });
    assert_eq!(
        interpret(&function, &[]),
        Err(InterpError::KindMismatch {
            expected: "object",
            got: "number",
            context: "set",
        })
    );
}

#[test]
fn test_get_rejects_a_non_string_key() {
    let function = build_function("bad_key", vec![], |b| {
        let obj = b.make_object("obj");
        let got = b.get("got", obj, Operand::number(0.0));
        b.return_value(got);
    });
    assert_eq!(
        interpret(&function, &[]),
        Err(InterpError::KindMismatch {
            expected: "string",
            got: "number",
            context: "get",
        })
    );
}

#[test]
fn test_jump_to_a_missing_block_fails() {
    let function = build_function("bad_jump", vec![], |b| {
        b.jump("nowhere");
    });
    assert_eq!(
        interpret(&function, &[]),
        Err(InterpError::UnknownBlock {
            function: "@bad_jump".to_string(),
            label: ".nowhere".to_string(),
        })
    );
}

#[test]
fn test_call_to_an_unregistered_function_fails() {
    let function = build_function("caller", vec![], |b| {
        let callee = Operand::global("missing", Type::unboxed_func(Type::Value, vec![]));
        let out = b.unboxed_call("out", callee, vec![]).unwrap();
        b.return_value(out);
    });
    assert_eq!(
        interpret(&function, &[]),
        Err(InterpError::UnknownCallee {
            name: "@missing".to_string(),
        })
    );
}

#[test]
fn test_calling_through_a_local_fails() {
    // The registry resolves global names only; there are no indirect calls.
    let function = build_function("indirect", vec![], |b| {
        let callee = Operand::local("f", Type::unboxed_func(Type::Value, vec![]));
        let out = b.unboxed_call("out", callee, vec![]).unwrap();
        b.return_value(out);
    });
    assert_eq!(
        interpret(&function, &[]),
        Err(InterpError::InvalidCallee {
            operand: "%f".to_string(),
        })
    );
}

#[test]
fn test_reading_a_global_as_a_value_fails() {
    let function = build_function("global_read", vec![], |b| {
        b.return_value(Operand::global("table", Type::Object));
    });
    assert_eq!(
        interpret(&function, &[]),
        Err(InterpError::UnsupportedGlobalRead {
            name: "@table".to_string(),
        })
    );
}

#[test]
fn test_reading_an_unbound_local_fails() {
    let function = build_function("unbound", vec![], |b| {
        b.return_value(Operand::local("ghost", Type::Value));
    });
    assert_eq!(
        interpret(&function, &[]),
        Err(InterpError::Unbound {
            name: "%ghost".to_string(),
        })
    );
}

#[test]
fn test_falling_off_a_block_end_fails() {
    let function = build_function("no_terminator", vec![], |b| {
        b.add("sum", Operand::number(1.0), Operand::number(2.0));
    });
    assert_eq!(
        interpret(&function, &[]),
        Err(InterpError::MissingTerminator {
            function: "@no_terminator".to_string(),
            label: ".entry".to_string(),
        })
    );
}

#[test]
fn test_arity_mismatch_is_reported() {
    assert_eq!(
        interpret(&samples::fib(), &[]),
        Err(InterpError::ArityMismatch {
            callee: "@fib".to_string(),
            expected: 1,
            found: 0,
        })
    );
}

#[test]
fn test_step_limit_stops_an_infinite_loop() {
    let function = build_function("spin", vec![], |b| {
        b.jump("spin_block");
        b.add_block("spin_block", |b| b.jump("spin_block"));
    });
    let interp = Interpreter::with_options(InterpOptions {
        max_steps: 100,
        max_depth: 8,
    });
    assert_eq!(
        interp.run(&function, &[]),
        Err(InterpError::StepLimit { limit: 100 })
    );
}

#[test]
fn test_depth_limit_stops_runaway_recursion() {
    let function = build_function("forever", vec![Parameter::new("x", Type::Value)], |b| {
        let callee =
            Operand::global("forever", Type::unboxed_func(Type::Value, vec![Type::Value]));
        let x = b.param(0);
        let out = b.unboxed_call("out", callee, vec![x]).unwrap();
        b.return_value(out);
    });
    let mut interp = Interpreter::with_options(InterpOptions {
        max_steps: 10_000,
        max_depth: 16,
    });
    interp.register(function);
    assert_eq!(
        interp.call("forever", &[Value::Number(0.0)]),
        Err(InterpError::DepthLimit { limit: 16 })
    );
}

#[test]
fn test_calling_an_unknown_name_on_the_registry_fails() {
    let interp = Interpreter::new();
    assert_eq!(
        interp.call("ghost", &[]),
        Err(InterpError::UnknownCallee {
            name: "@ghost".to_string(),
        })
    );
}
