/*! Name registry for the built-in sample functions.
 *
 * The programs themselves live in [`sable_ir::samples`]; this module only
 * maps the CLI's kebab-case names onto their constructors.
 */

use sable_ir::{samples, Function};

/// CLI names, in listing order.
pub const NAMES: [&str; 3] = ["fib", "sum-to-ten", "greet"];

/// Looks up a sample by its CLI name.
pub fn sample(name: &str) -> Option<Function> {
    match name {
        "fib" => Some(samples::fib()),
        "sum-to-ten" | "sum_to_ten" => Some(samples::sum_to_ten()),
        "greet" => Some(samples::greet()),
        _ => None,
    }
}

/// Every sample, for seeding an interpreter registry.
pub fn all() -> Vec<Function> {
    NAMES.into_iter().filter_map(sample).collect()
}
