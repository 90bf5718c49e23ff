mod session;

use rustyline::{error::ReadlineError, DefaultEditor};
use session::{Command, Session};
use std::{fs, io::{self, IsTerminal, Read}, process};

/// Runs a single line of input, printing the result or reporting the error. Returns false if the
/// line asks to quit.
fn run_line(line: &str, session: &mut Session) -> bool {
    let command = Command::parse(line);
    match command {
        Command::Exit => return false,
        Command::Empty => (),
        _ => match session.execute(&command) {
            Ok(lines) => lines.iter().for_each(|line| println!("{}", line)),
            Err(err) => err.report_to_stderr(command.formula()),
        },
    }
    true
}

/// Runs every line of the input, stopping early at `exit`.
fn run_all(input: &str, session: &mut Session) {
    for line in input.lines() {
        if !run_line(line, session) {
            break;
        }
    }
}

fn main() {
    let mut show_steps = false;
    let mut filename = None;
    for arg in std::env::args().skip(1) {
        if arg == "--steps" {
            show_steps = true;
        } else {
            filename = Some(arg);
        }
    }

    let mut session = Session::new(show_steps);

    if let Some(filename) = filename {
        // run source file
        match fs::read_to_string(&filename) {
            Ok(input) => run_all(&input, &mut session),
            Err(err) => {
                eprintln!("{}: {}", filename, err);
                process::exit(1);
            },
        }
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("{}", err);
            process::exit(1);
        }

        run_all(&input, &mut session);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                process::exit(1);
            },
        };

        fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<bool, ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(true);
            }

            rl.add_history_entry(&input)?;

            Ok(run_line(&input, session))
        }

        loop {
            match process_line(&mut rl, &mut session) {
                Ok(true) => (),
                Ok(false) => break,
                Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
                Err(err) => {
                    eprintln!("{}", err);
                    break;
                },
            }
        }
    }
}
