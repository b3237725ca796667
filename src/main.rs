//! litemark CLI - restricted Markdown to HTML

use std::io::{self, Read, Write};

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    // Read from a file, or stdin when the argument is absent or "-"
    let input = if args.len() > 1 && args[1] != "-" {
        std::fs::read_to_string(&args[1])?
    } else {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    };

    let html = litemark::to_html(&input);

    match args.get(2) {
        Some(path) => std::fs::write(path, html)?,
        None => io::stdout().write_all(html.as_bytes())?,
    }

    Ok(())
}
