use dicebox::{RollOptions, Session};
use std::io::{self, BufRead, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let session = Session::new();
    let options = RollOptions {
        send_result: false,
        ..RollOptions::default()
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    print!("> ");
    io::stdout().flush()?;
    while let Some(line) = lines.next().transpose()? {
        let line = line.trim();
        match line {
            "" => {}
            "quit" | "exit" => break,
            "history" => {
                for result in session.recent(10) {
                    println!("{}", dicebox::format(&result));
                }
            }
            _ => match session.roll(line, options.clone()) {
                Ok(result) => println!("{}", dicebox::format(&result)),
                Err(why) => eprintln!("Error: {}", why),
            },
        }
        print!("> ");
        io::stdout().flush()?;
    }
    Ok(())
}
