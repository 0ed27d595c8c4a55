use super::{Function, Functions, Operation, Output, Stack, Var};
use crate::error;
use crate::lang::ast::*;
use crate::lang::{Error, ErrorCode, Ident, Limits, LineNumber, Program};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

type Result<T> = std::result::Result<T, Error>;

/// Deepest nesting of user function calls, which stops `DEF FNA(X)=FNA(X)`.
const MAX_CALL_DEPTH: usize = 128;

/// ## Program runner
///
/// Executes a `Program` in two passes. The first collects `DATA`, `DEF`
/// and `DIM` from every line and checks that `END` is last. The second
/// walks the lines from the lowest number, following jumps.
///
/// ```
/// use basic::{lang, mach::Runtime};
/// let program = lang::compile("10 FOR I=1 TO 3\n20 PRINT I,\n30 NEXT I\n40 END").unwrap();
/// let mut output = String::new();
/// Runtime::new(&program).execute(&mut output).unwrap();
/// assert_eq!(output, "123");
/// ```
pub struct Runtime<'a> {
    program: &'a Program,
    limits: Limits,
    interrupt: Option<Arc<AtomicBool>>,
    rng: StdRng,
    vars: Var,
    functions: Functions<'a>,
    data: VecDeque<f64>,
    loops: Stack<Frame>,
    returns: Stack<Option<LineNumber>>,
    depth: usize,
    steps: usize,
    /// Characters already printed on a line left open by a trailing comma.
    column: usize,
}

/// An active `FOR` loop.
#[derive(Debug)]
struct Frame {
    var: Ident,
    limit: f64,
    step: f64,
    /// First line of the loop body.
    body: Option<LineNumber>,
}

/// Where execution goes after a statement.
enum Flow {
    Next,
    Jump(LineNumber),
    /// Continue at a line taken from a stack; `None` is past the last line.
    Resume(Option<LineNumber>),
    Stop,
}

impl<'a> Runtime<'a> {
    pub fn new(program: &'a Program) -> Runtime<'a> {
        let limits = Limits::default();
        Runtime {
            program,
            vars: Var::new(limits.max_dimension),
            loops: Stack::new(ErrorCode::TooManyLoops, limits.max_loops),
            returns: Stack::new(ErrorCode::CutProgramOrDims, u16::max_value() as usize),
            limits,
            interrupt: None,
            rng: StdRng::from_entropy(),
            functions: Functions::default(),
            data: VecDeque::new(),
            depth: 0,
            steps: 0,
            column: 0,
        }
    }

    pub fn with_limits(mut self, limits: Limits) -> Runtime<'a> {
        self.vars = Var::new(limits.max_dimension);
        self.loops = Stack::new(ErrorCode::TooManyLoops, limits.max_loops);
        self.limits = limits;
        self
    }

    /// The run fails with `BREAK` once `flag` is set. The flag is cleared
    /// when it is noticed.
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> Runtime<'a> {
        self.interrupt = Some(flag);
        self
    }

    /// Makes `RND` repeatable.
    pub fn with_seed(mut self, seed: u64) -> Runtime<'a> {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn execute(mut self, output: &mut dyn Output) -> Result<()> {
        self.declare()?;
        let program = self.program;
        let mut next = program.first();
        while let Some(number) = next {
            let line = match program.get(number) {
                Some(line) => line,
                None => return Err(error!(UndefinedLineNumber, number)),
            };
            self.tick().map_err(|e| e.in_line_number(number))?;
            trace!(line = %line, "execute");
            let flow = self
                .statement(number, line.statement(), output)
                .map_err(|e| e.in_line_number(number))?;
            next = match flow {
                Flow::Next => program.next_after(number),
                Flow::Jump(target) => {
                    if !program.contains(target) {
                        return Err(error!(UndefinedLineNumber, number));
                    }
                    Some(target)
                }
                Flow::Resume(line) => line,
                Flow::Stop => None,
            };
        }
        info!(steps = self.steps, "program ended");
        Ok(())
    }

    fn declare(&mut self) -> Result<()> {
        let program = self.program;
        let mut end = false;
        for line in program.lines() {
            let number = line.number();
            let statement = line.statement();
            if end && !statement.is_declaration() {
                return Err(error!(EndNotLast, number));
            }
            match statement {
                Statement::Data(values) => self.data.extend(values.iter().copied()),
                Statement::Def(name, param, body) => self.functions.define(name, param, body),
                Statement::Dim(dims) => {
                    for dim in dims {
                        self.vars
                            .dimension(dim)
                            .map_err(|e| e.in_line_number(number))?;
                    }
                }
                Statement::End => end = true,
                _ => {}
            }
        }
        if !end {
            return Err(error!(NoEnd));
        }
        debug!(
            data = self.data.len(),
            functions = self.functions.len(),
            "declarations collected"
        );
        Ok(())
    }

    fn tick(&mut self) -> Result<()> {
        if let Some(flag) = &self.interrupt {
            if flag.swap(false, Ordering::SeqCst) {
                return Err(error!(Break));
            }
        }
        self.steps += 1;
        if let Some(max_steps) = self.limits.max_steps {
            if self.steps > max_steps {
                return Err(error!(Break; "STEP LIMIT EXCEEDED"));
            }
        }
        Ok(())
    }

    fn statement(
        &mut self,
        number: LineNumber,
        statement: &'a Statement,
        output: &mut dyn Output,
    ) -> Result<Flow> {
        use Statement::*;
        match statement {
            Let(var, expr) => {
                let value = self.evaluate(expr)?;
                self.assign(var, value)?;
            }
            Read(vars) => {
                for var in vars {
                    let value = match self.data.pop_front() {
                        Some(value) => value,
                        None => return Err(error!(NoData)),
                    };
                    self.assign(var, value)?;
                }
            }
            Print(items, newline) => self.print(items, *newline, output)?,
            Goto(target) => return Ok(Flow::Jump(*target)),
            If(lhs, rel, rhs, target) => {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                if Operation::relation(rel, lhs, rhs) {
                    return Ok(Flow::Jump(*target));
                }
            }
            For(var, from, to, step) => self.r#for(number, var, from, to, step)?,
            Next(var) => return self.r#next(var),
            Gosub(target) => {
                self.returns.push(self.program.next_after(number))?;
                return Ok(Flow::Jump(*target));
            }
            Return => match self.returns.pop() {
                Some(line) => return Ok(Flow::Resume(line)),
                None => return Err(error!(IllegalReturn)),
            },
            End | Stop => return Ok(Flow::Stop),
            Data(_) | Def(..) | Dim(_) | Rem => {}
        }
        Ok(Flow::Next)
    }

    fn print(
        &mut self,
        items: &'a [PrintItem],
        newline: bool,
        output: &mut dyn Output,
    ) -> Result<()> {
        let mut s = String::new();
        for item in items {
            match item {
                PrintItem::Label(label) => s.push_str(label),
                PrintItem::Labeled(label, expr) => {
                    s.push_str(label);
                    s.push_str(&Operation::format(self.evaluate(expr)?));
                }
                PrintItem::Expression(expr) => {
                    s.push_str(&Operation::format(self.evaluate(expr)?))
                }
            }
        }
        let room = self.limits.print_width.saturating_sub(self.column);
        if s.chars().count() > room {
            s = s.chars().take(room).collect();
        }
        if newline {
            output.write_line(&s);
            self.column = 0;
        } else {
            output.write(&s);
            self.column += s.chars().count();
        }
        Ok(())
    }

    fn r#for(
        &mut self,
        number: LineNumber,
        var: &Ident,
        from: &'a Expression,
        to: &'a Expression,
        step: &'a Expression,
    ) -> Result<()> {
        let from = self.evaluate(from)?;
        let limit = self.evaluate(to)?;
        let step = self.evaluate(step)?;
        if step == 0.0 {
            return Err(error!(IncorrectFormat; "STEP IS ZERO"));
        }
        self.vars.store(var, from);
        if let Some(index) = self.loops.rposition(|frame| frame.var == *var) {
            self.loops.truncate(index);
        }
        self.loops.push(Frame {
            var: var.clone(),
            limit,
            step,
            body: self.program.next_after(number),
        })
    }

    fn r#next(&mut self, var: &Ident) -> Result<Flow> {
        let index = match self.loops.rposition(|frame| frame.var == *var) {
            Some(index) => index,
            None => return Err(error!(NotMatchWithFor)),
        };
        self.loops.truncate(index + 1);
        let (limit, step, body) = match self.loops.last() {
            Some(frame) => (frame.limit, frame.step, frame.body),
            None => return Err(error!(NotMatchWithFor)),
        };
        let value = self.vars.fetch(var)? + step;
        self.vars.store(var, value);
        if (step > 0.0 && value <= limit) || (step < 0.0 && value >= limit) {
            return Ok(Flow::Resume(body));
        }
        self.loops.pop();
        Ok(Flow::Next)
    }

    fn assign(&mut self, var: &'a Variable, value: f64) -> Result<()> {
        match var {
            Variable::Scalar(name) => {
                self.vars.store(name, value);
                Ok(())
            }
            Variable::List(name, index) => {
                let index = self.evaluate(index)?;
                self.vars.store_list(name, index, value)
            }
            Variable::Table(name, row, col) => {
                let row = self.evaluate(row)?;
                let col = self.evaluate(col)?;
                self.vars.store_table(name, row, col, value)
            }
        }
    }

    fn fetch(&mut self, var: &'a Variable) -> Result<f64> {
        match var {
            Variable::Scalar(name) => self.vars.fetch(name),
            Variable::List(name, index) => {
                let index = self.evaluate(index)?;
                self.vars.fetch_list(name, index)
            }
            Variable::Table(name, row, col) => {
                let row = self.evaluate(row)?;
                let col = self.evaluate(col)?;
                self.vars.fetch_table(name, row, col)
            }
        }
    }

    fn evaluate(&mut self, expr: &'a Expression) -> Result<f64> {
        match expr {
            Expression::Number(n) => Ok(*n),
            Expression::Variable(var) => self.fetch(var),
            Expression::Binary(op, lhs, rhs) => {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                Ok(Operation::binary(op, lhs, rhs))
            }
            Expression::Builtin(func, arg) => {
                let arg = self.evaluate(arg)?;
                Ok(Function::call(func, arg, &mut self.rng))
            }
            Expression::UserCall(name, arg) => self.call(name, arg),
        }
    }

    /// The parameter shadows any scalar of the same name only while the
    /// body is evaluated.
    fn call(&mut self, name: &Ident, arg: &'a Expression) -> Result<f64> {
        let arg = self.evaluate(arg)?;
        let (param, body) = self.functions.get(name)?;
        if self.depth >= MAX_CALL_DEPTH {
            return Err(error!(IllegalFormula; "FUNCTION NESTED TOO DEEPLY"));
        }
        let prior = self.vars.replace(param, arg);
        self.depth += 1;
        let result = self.evaluate(body);
        self.depth -= 1;
        self.vars.restore(param, prior);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::compile;
    use crate::mach::Lines;

    fn run(source: &str) -> Result<Vec<String>> {
        let program = compile(source).unwrap();
        let mut lines = Lines::new();
        Runtime::new(&program).with_seed(7).execute(&mut lines)?;
        Ok(lines.into_lines())
    }

    fn code(source: &str) -> ErrorCode {
        run(source).unwrap_err().code()
    }

    #[test]
    fn test_gosub_return() {
        let source = "10 GOSUB 100\n20 PRINT \"BACK\"\n30 STOP\n100 PRINT \"SUB\"\n110 RETURN\n120 END";
        assert_eq!(run(source), Ok(vec!["SUB".to_string(), "BACK".to_string()]));
    }

    #[test]
    fn test_for_body_runs_once() {
        let source = "10 FOR I=5 TO 1\n20 PRINT I\n30 NEXT I\n40 END";
        assert_eq!(run(source), Ok(vec!["5".to_string()]));
    }

    #[test]
    fn test_negative_step() {
        let source = "10 FOR I=3 TO 1 STEP -1\n20 PRINT I,\n30 NEXT I\n40 END";
        assert_eq!(run(source), Ok(vec!["321".to_string()]));
    }

    #[test]
    fn test_loop_errors() {
        assert_eq!(
            code("10 FOR I=1 TO 2 STEP 0\n20 NEXT I\n30 END"),
            ErrorCode::IncorrectFormat
        );
        assert_eq!(code("10 NEXT I\n20 END"), ErrorCode::NotMatchWithFor);
        let mut source = String::new();
        for (n, ch) in "ABCDEFGHIJKLMNOPQRSTUVWXYZ".chars().enumerate() {
            source.push_str(&format!("{} FOR {}0=1 TO 2\n", n + 1, ch));
        }
        source.push_str("27 FOR A1=1 TO 2\n28 END");
        assert_eq!(code(&source), ErrorCode::TooManyLoops);
    }

    #[test]
    fn test_reentered_for_replaces_frame() {
        let source = "10 FOR I=1 TO 2\n20 FOR J=1 TO 2\n30 FOR I=1 TO 2\n40 NEXT I\n50 NEXT J\n60 END";
        assert_eq!(code(source), ErrorCode::NotMatchWithFor);
    }

    #[test]
    fn test_def_parameter_is_local() {
        let source = "10 DEF FNA(X)=X*X\n20 LET X=3\n30 PRINT FNA(4),X\n40 END";
        assert_eq!(run(source), Ok(vec!["163".to_string()]));
    }

    #[test]
    fn test_recursive_function() {
        let source = "10 DEF FNA(X)=FNA(X)\n20 PRINT FNA(1)\n30 END";
        let e = run(source).unwrap_err();
        assert_eq!(e.code(), ErrorCode::IllegalFormula);
        assert_eq!(e.line_number(), Some(20));
    }

    #[test]
    fn test_undefined() {
        assert_eq!(code("10 PRINT FNZ(1)\n20 END"), ErrorCode::UndefinedFunction);
        assert_eq!(code("10 GOTO 15\n20 END"), ErrorCode::UndefinedLineNumber);
        assert_eq!(code("10 PRINT Q\n20 END"), ErrorCode::UndeclaredVariable);
        assert_eq!(code("10 PRINT Q(1)\n20 END"), ErrorCode::UndeclaredVariable);
    }

    #[test]
    fn test_print_width() {
        let source = "10 PRINT \"1234567890123456789012345678901234567890\",\"1234567890123456789012345678901234567890\"\n20 END";
        let lines = run(source).unwrap();
        assert_eq!(lines[0].len(), 75);
    }

    #[test]
    fn test_print_width_spans_continued_line() {
        let source = "10 PRINT \"1234567890123456789012345678901234567890\",\n20 PRINT \"1234567890123456789012345678901234567890\"\n30 PRINT \"X\"\n40 END";
        let lines = run(source).unwrap();
        assert_eq!(lines[0].len(), 75);
        assert_eq!(lines[1], "X");
    }

    #[test]
    fn test_step_limit() {
        let program = compile("10 GOTO 10\n20 END").unwrap();
        let limits = Limits {
            max_steps: Some(100),
            ..Limits::default()
        };
        let mut output = String::new();
        let e = Runtime::new(&program)
            .with_limits(limits)
            .execute(&mut output)
            .unwrap_err();
        assert_eq!(e.code(), ErrorCode::Break);
        assert_eq!(e.line_number(), Some(10));
    }

    #[test]
    fn test_interrupt() {
        let program = compile("10 PRINT 1\n20 END").unwrap();
        let flag = Arc::new(AtomicBool::new(true));
        let mut output = String::new();
        let e = Runtime::new(&program)
            .with_interrupt(flag.clone())
            .execute(&mut output)
            .unwrap_err();
        assert_eq!(e.code(), ErrorCode::Break);
        assert!(!flag.load(Ordering::SeqCst));
        assert_eq!(output, "");
    }

    #[test]
    fn test_seeded_rnd_repeats() {
        let source = "10 PRINT RND(1)\n20 END";
        assert_eq!(run(source), run(source));
    }
}
