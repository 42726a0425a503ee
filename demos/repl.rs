//! Interactive check: encode each stdin line, decode it back, print
//! both. `exit` (any case) or end-of-input quits.

use std::io::{self, BufRead, Write};

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.eq_ignore_ascii_case("exit") {
            break;
        }

        let encoded = fivebit::encode(line);
        match fivebit::decode(&encoded) {
            Ok(decoded) => {
                writeln!(stdout, "original: {line}")?;
                writeln!(stdout, "encoded:  {encoded}")?;
                writeln!(stdout, "decoded:  {decoded}")?;
            }
            Err(err) => writeln!(stdout, "error: {err}")?,
        }
    }
    Ok(())
}
