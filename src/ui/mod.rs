use anyhow::bail;
use std::io::{self, BufRead, Write};

/// プロンプトを表示して1行読む (末尾の改行は除く)
pub fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let stdin = io::stdin();
    read_line_from(&mut stdin.lock(), prompt)
}

pub fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> anyhow::Result<String> {
    println!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
