use calcgraph_rs::Calculator;
use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    pretty_env_logger::init();

    let mut calculator = Calculator::default();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            writeln!(stdout, "{}", calculator.compute(&line))?;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    Ok(())
}
