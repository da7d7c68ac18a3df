mod console;

use anyhow::Result;
use console::{show, Console};
use crossterm::tty::IsTty;
use float_stack::{BoundedStack, Calculator};
use rand::Rng;
use std::io::{self, BufRead};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the demo output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut console = Console::new();
    let mut stack: BoundedStack = BoundedStack::new();

    basic_operations(&mut console, &mut stack)?;
    underflow(&mut console, &mut stack)?;
    overflow(&mut console, &mut stack)?;

    // Piped input: treat each line as an RPN expression.
    let stdin = io::stdin();
    if !stdin.is_tty() {
        calculator(&mut console, stdin.lock())?;
    }

    Ok(())
}

fn basic_operations(console: &mut Console, stack: &mut BoundedStack) -> Result<()> {
    console.heading("push / peek / pop")?;

    for value in [10.5, 20.7, 30.9] {
        stack.push(value);
        debug!(value, len = stack.len(), "pushed");
        console.line("push", value)?;
    }
    console.line("size", stack.len())?;
    console.line("peek", show(stack.peek()))?;

    while !stack.is_empty() {
        let value = stack.pop();
        debug!(?value, len = stack.len(), "popped");
        console.line("pop", show(value))?;
    }
    console.line("size", stack.len())?;
    console.line("empty", stack.is_empty())?;

    Ok(())
}

fn underflow(console: &mut Console, stack: &mut BoundedStack) -> Result<()> {
    console.heading("pop / peek on an empty stack")?;

    let popped = stack.pop();
    let peeked = stack.peek();
    if popped.is_none() {
        warn!("pop on empty stack");
    }
    console.line("pop", show(popped))?;
    console.line("peek", show(peeked))?;
    console.line("sentinel", stack.pop_or_sentinel())?;
    console.line("size", stack.len())?;

    Ok(())
}

fn overflow(console: &mut Console, stack: &mut BoundedStack) -> Result<()> {
    console.heading("fill to capacity, then push once more")?;

    let mut rng = rand::thread_rng();
    while !stack.is_full() {
        // One decimal place keeps the dump readable.
        let value = (rng.gen_range(0.0..100.0_f32) * 10.0).round() / 10.0;
        stack.push(value);
    }
    console.line("size", stack.len())?;
    console.line("full", stack.is_full())?;
    console.block(&format!("{stack:#?}"))?;

    let top = stack.peek();
    if let Err(full) = stack.try_push(123.4) {
        warn!(discarded = full.0, "push on full stack");
        console.warning(full)?;
    }
    console.line("size", stack.len())?;
    console.line("peek", show(stack.peek()))?;
    debug_assert_eq!(top, stack.peek());

    console.heading("clear")?;
    stack.clear();
    console.line("size", stack.len())?;
    console.line("empty", stack.is_empty())?;

    Ok(())
}

fn calculator(console: &mut Console, input: impl BufRead) -> Result<()> {
    console.heading("rpn")?;

    let mut calc: Calculator = Calculator::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match calc.eval_line(&line) {
            Ok(result) => console.line(line.trim(), show(result))?,
            Err(e) => {
                warn!(line = line.trim(), error = %e, "rejected expression");
                console.error(format!("{}: {e}", line.trim()))?;
            }
        }
        debug!(stack = ?calc.stack(), "after line");
    }

    Ok(())
}
