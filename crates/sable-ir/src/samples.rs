/*! Ready-made sample functions exercising the instruction set.
 *
 * One construction site for the programs the rest of the workspace leans on:
 * the CLI serves them, and the interpreter, printer and C backend suites pin
 * their behavior against them. `fib` recurses through `unboxed_call`,
 * `sum_to_ten` loops over mutable object state, and `greet` builds a
 * string-keyed object from its parameter.
 */

use crate::builder::build_function;
use crate::function::{Function, Parameter};
use crate::operand::Operand;
use crate::types::Type;

/// Recursive Fibonacci: `fib(10)` is 55. Also the richest lowering demo,
/// since every instruction it uses short of the branches has a C rendering.
pub fn fib() -> Function {
    build_function("fib", vec![Parameter::new("n", Type::Value)], |b| {
        let n = b.param(0);
        let is_zero = b.strict_eq("is_zero", n.clone(), Operand::number(0.0));
        let is_one = b.strict_eq("is_one", n, Operand::number(1.0));
        let is_base = b.or("is_base", is_zero, is_one);
        b.jump_if(is_base, "base", "recur");

        b.add_block("base", |b| {
            let n = b.param(0);
            b.return_value(n);
        });

        b.add_block("recur", |b| {
            let n = b.param(0);
            let n_minus_1 = b.sub("n_minus_1", n.clone(), Operand::number(1.0));
            let n_minus_2 = b.sub("n_minus_2", n, Operand::number(2.0));
            let arg1 = b.to_value("arg1", n_minus_1);
            let arg2 = b.to_value("arg2", n_minus_2);
            let callee =
                Operand::global("fib", Type::unboxed_func(Type::Value, vec![Type::Value]));
            let fib1 = b
                .unboxed_call("fib1", callee.clone(), vec![arg1])
                .expect("callee is declared unboxed_func");
            let fib2 = b
                .unboxed_call("fib2", callee, vec![arg2])
                .expect("callee is declared unboxed_func");
            let sum = b.add("sum", fib1, fib2);
            b.return_value(sum);
        });
    })
}

/// Sums 0..10 into an object field and returns 45.
pub fn sum_to_ten() -> Function {
    build_function("sum_to_ten", vec![], |b| {
        let state = b.make_object("state");
        b.set(state.clone(), Operand::string("sum"), Operand::number(0.0));
        b.set(state.clone(), Operand::string("i"), Operand::number(0.0));
        b.jump("loop");

        b.add_block("loop", |b| {
            let sum = b.get("sum", state.clone(), Operand::string("sum"));
            let i = b.get("i", state.clone(), Operand::string("i"));
            let new_sum = b.add("new_sum", sum, i.clone());
            let new_i = b.add("new_i", i, Operand::number(1.0));
            b.set(state.clone(), Operand::string("sum"), new_sum);
            b.set(state.clone(), Operand::string("i"), new_i.clone());
            let done = b.strict_eq("done", new_i, Operand::number(10.0));
            b.jump_if(done, "exit", "loop");
        });

        b.add_block("exit", |b| {
            let final_sum = b.get("final_sum", state.clone(), Operand::string("sum"));
            let result = b.to_value("result", final_sum);
            b.return_value(result);
        });
    })
}

/// Wraps its argument in a `{greeting, subject}` object.
pub fn greet() -> Function {
    build_function("greet", vec![Parameter::new("name", Type::Value)], |b| {
        let card = b.make_object("card");
        b.set(
            card.clone(),
            Operand::string("greeting"),
            Operand::string("hello"),
        );
        let name = b.param(0);
        b.set(card.clone(), Operand::string("subject"), name);
        let out = b.to_value("out", card);
        b.return_value(out);
    })
}
