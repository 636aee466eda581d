/*! Tree-walking evaluator.
 *
 * Executes a function by walking its blocks instruction by instruction.
 * Each call activation owns one flat environment keyed by the rendered
 * operand name (`%x`, `$x`), so locals and parameters cannot collide and a
 * local bound in one block stays visible when a later block reads it.
 * Cross-function calls resolve through the registry and recurse with a
 * fresh activation.
 */

use std::collections::HashMap;

use indexmap::IndexMap;
use sable_ir::{Constant, Function, GlobalName, Instruction, Label, Operand};

use crate::value::{ObjectRef, Value};
use crate::{InterpError, Result};

/// Execution limits.
#[derive(Debug, Clone, Copy)]
pub struct InterpOptions {
    /// Maximum instructions executed per activation before aborting.
    pub max_steps: usize,
    /// Maximum call depth before aborting.
    pub max_depth: usize,
}

impl Default for InterpOptions {
    fn default() -> Self {
        Self {
            max_steps: 10_000,
            max_depth: 256,
        }
    }
}

/// Evaluates `function` with the given arguments.
///
/// The function is registered under its own name first, so self-recursion
/// works; a call to any other global fails with
/// [`InterpError::UnknownCallee`].
pub fn interpret(function: &Function, args: &[Value]) -> Result<Value> {
    let mut interp = Interpreter::new();
    interp.register(function.clone());
    interp.call(function.name.as_str(), args)
}

/// Executes functions against a registry of known callees.
pub struct Interpreter {
    functions: IndexMap<String, Function>,
    opts: InterpOptions,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::with_options(InterpOptions::default())
    }

    pub fn with_options(opts: InterpOptions) -> Self {
        Self {
            functions: IndexMap::new(),
            opts,
        }
    }

    /// Makes `function` callable, keyed by its bare global name. Registering
    /// the same name twice replaces the earlier function.
    pub fn register(&mut self, function: Function) {
        self.functions
            .insert(function.name.as_str().to_string(), function);
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.get(name)
    }

    /// Calls a registered function by bare name.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let function = self
            .functions
            .get(name)
            .ok_or_else(|| InterpError::UnknownCallee {
                name: GlobalName::new(name).to_string(),
            })?;
        self.run_at_depth(function, args, 0)
    }

    /// Runs a function that need not be registered itself; any calls it
    /// makes still resolve through the registry.
    pub fn run(&self, function: &Function, args: &[Value]) -> Result<Value> {
        self.run_at_depth(function, args, 0)
    }

    fn run_at_depth(&self, function: &Function, args: &[Value], depth: usize) -> Result<Value> {
        if depth >= self.opts.max_depth {
            return Err(InterpError::DepthLimit {
                limit: self.opts.max_depth,
            });
        }
        if args.len() != function.params.len() {
            return Err(InterpError::ArityMismatch {
                callee: function.name.to_string(),
                expected: function.params.len(),
                found: args.len(),
            });
        }

        let mut env: HashMap<String, Value> = HashMap::new();
        for (param, arg) in function.params.iter().zip(args) {
            env.insert(param.name.to_string(), arg.clone());
        }

        // Entry is positional: execution starts at block 0 whatever its
        // label. A function with no blocks fails the lookup below.
        let mut current = match function.blocks.first() {
            Some(block) => block.label.clone(),
            None => Label::entry(),
        };
        let mut steps = 0usize;

        'blocks: loop {
            let block = function
                .block(&current)
                .ok_or_else(|| InterpError::UnknownBlock {
                    function: function.name.to_string(),
                    label: current.to_string(),
                })?;

            for inst in &block.instructions {
                steps += 1;
                if steps > self.opts.max_steps {
                    return Err(InterpError::StepLimit {
                        limit: self.opts.max_steps,
                    });
                }

                match inst {
                    Instruction::MakeObject { result } => {
                        env.insert(result.to_string(), Value::Object(ObjectRef::new()));
                    }
                    Instruction::Set {
                        object,
                        property,
                        value,
                    } => {
                        let target = as_object(eval(&env, object)?, "set")?;
                        let key = as_key(eval(&env, property)?, "set")?;
                        let value = eval(&env, value)?;
                        target.set(key, value);
                    }
                    Instruction::Get {
                        result,
                        object,
                        property,
                    } => {
                        let source = as_object(eval(&env, object)?, "get")?;
                        let key = as_key(eval(&env, property)?, "get")?;
                        env.insert(result.to_string(), source.get(&key));
                    }
                    Instruction::StrictEq {
                        result,
                        left,
                        right,
                    } => {
                        let outcome = eval(&env, left)? == eval(&env, right)?;
                        env.insert(result.to_string(), Value::Boolean(outcome));
                    }
                    Instruction::Or {
                        result,
                        left,
                        right,
                    } => {
                        let left = eval(&env, left)?;
                        let outcome = if left.is_truthy() {
                            left
                        } else {
                            eval(&env, right)?
                        };
                        env.insert(result.to_string(), outcome);
                    }
                    Instruction::Add {
                        result,
                        left,
                        right,
                    } => {
                        let left = as_number(eval(&env, left)?, "add")?;
                        let right = as_number(eval(&env, right)?, "add")?;
                        env.insert(result.to_string(), Value::Number(left + right));
                    }
                    Instruction::Sub {
                        result,
                        left,
                        right,
                    } => {
                        let left = as_number(eval(&env, left)?, "sub")?;
                        let right = as_number(eval(&env, right)?, "sub")?;
                        env.insert(result.to_string(), Value::Number(left - right));
                    }
                    Instruction::UnboxedCall {
                        result,
                        callee,
                        args,
                    } => {
                        let callee = self.resolve_callee(callee)?;
                        let mut call_args = Vec::with_capacity(args.len());
                        for arg in args {
                            call_args.push(eval(&env, arg)?);
                        }
                        let returned = self.run_at_depth(callee, &call_args, depth + 1)?;
                        env.insert(result.to_string(), returned);
                    }
                    Instruction::Return { value } => {
                        return eval(&env, value);
                    }
                    Instruction::ToValue { result, value } => {
                        // Boxing exists only in the type system; the value
                        // passes through unchanged at runtime.
                        let value = eval(&env, value)?;
                        env.insert(result.to_string(), value);
                    }
                    Instruction::JumpIf {
                        condition,
                        if_truthy,
                        if_falsy,
                    } => {
                        let condition = eval(&env, condition)?;
                        current = if condition.is_truthy() {
                            if_truthy.clone()
                        } else {
                            if_falsy.clone()
                        };
                        continue 'blocks;
                    }
                    Instruction::Jump { to } => {
                        current = to.clone();
                        continue 'blocks;
                    }
                }
            }

            return Err(InterpError::MissingTerminator {
                function: function.name.to_string(),
                label: current.to_string(),
            });
        }
    }

    /// Only a global operand can be called; the registry resolves bare names.
    fn resolve_callee(&self, callee: &Operand) -> Result<&Function> {
        match callee {
            Operand::Global { name, .. } => {
                self.functions
                    .get(name.as_str())
                    .ok_or_else(|| InterpError::UnknownCallee {
                        name: name.to_string(),
                    })
            }
            other => Err(InterpError::InvalidCallee {
                operand: other.to_string(),
            }),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

fn eval(env: &HashMap<String, Value>, operand: &Operand) -> Result<Value> {
    match operand {
        Operand::Local { name, .. } => lookup(env, name.to_string()),
        Operand::Param { name, .. } => lookup(env, name.to_string()),
        Operand::Global { name, .. } => Err(InterpError::UnsupportedGlobalRead {
            name: name.to_string(),
        }),
        Operand::Constant(constant) => Ok(match constant {
            Constant::String(s) => Value::String(s.clone()),
            Constant::Number(n) => Value::Number(*n),
            Constant::Boolean(b) => Value::Boolean(*b),
        }),
    }
}

fn lookup(env: &HashMap<String, Value>, name: String) -> Result<Value> {
    env.get(&name)
        .cloned()
        .ok_or(InterpError::Unbound { name })
}

fn as_number(value: Value, context: &'static str) -> Result<f64> {
    match value {
        Value::Number(n) => Ok(n),
        other => Err(InterpError::KindMismatch {
            expected: "number",
            got: other.kind(),
            context,
        }),
    }
}

fn as_object(value: Value, context: &'static str) -> Result<ObjectRef> {
    match value {
        Value::Object(obj) => Ok(obj),
        other => Err(InterpError::KindMismatch {
            expected: "object",
            got: other.kind(),
            context,
        }),
    }
}

fn as_key(value: Value, context: &'static str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(InterpError::KindMismatch {
            expected: "string",
            got: other.kind(),
            context,
        }),
    }
}
