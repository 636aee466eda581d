use sable_ir::{build_function, verify, Operand, Parameter, Type};

fn main() {
    println!("Building the countdown function...\n");

    let func = build_function(
        "countdown",
        vec![Parameter::new("n", Type::Value)],
        |b| {
            let n = b.param(0);
            let done = b.strict_eq("done", n.clone(), Operand::number(0.0));
            b.jump_if(done, "finish", "step");

            b.add_block("step", |b| {
                let next = b.sub("next", n.clone(), Operand::number(1.0));
                let boxed = b.to_value("boxed", next);
                b.return_value(boxed);
            });

            b.add_block("finish", |b| {
                b.return_value(n);
            });
        },
    );

    println!("{}", func);

    let violations = verify(&func);
    if violations.is_empty() {
        println!("\nno violations");
    } else {
        for violation in &violations {
            println!("\n{}", violation);
        }
    }
}
