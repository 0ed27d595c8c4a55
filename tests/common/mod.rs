use basic::lang::compile;
use basic::mach::Runtime;

/// Runs `source` and returns what it printed, followed by the error
/// message if it failed.
pub fn exec(source: &str) -> String {
    let mut s = String::new();
    match compile(source) {
        Ok(program) => {
            if let Err(error) = Runtime::new(&program).with_seed(1).execute(&mut s) {
                s.push_str(&format!("{}\n", error));
            }
        }
        Err(error) => s.push_str(&format!("{}\n", error)),
    }
    s
}

/// Prints the value of a single expression.
pub fn eval(expr: &str) -> String {
    exec(&format!("10 PRINT {}\n20 END", expr))
}
