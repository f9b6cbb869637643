use std::io::BufRead;

mod command;
use command::Command;

fn main() {
    colog::init();
    log::info!(
        "dspmath playground ({} precision, {} comparisons)",
        if core::mem::size_of::<dspmath::Sample>() == 4 {
            "single"
        } else {
            "double"
        },
        if dspmath::SIMD_BACKEND { "SSE2" } else { "portable" }
    );
    println!("{}", command::HELP);
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match Command::try_from(line.as_str()) {
            Ok(cmd) => {
                log::debug!("Parsed {:?}", cmd);
                match cmd.evaluate() {
                    Some(out) => println!("{}", out),
                    None => break,
                }
            }
            Err(e) => log::error!("{}", e),
        }
    }
}
