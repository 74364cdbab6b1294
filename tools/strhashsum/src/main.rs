// strhashsum prints fingerprints of files, stdin or literal strings, one per line, in the spirit
// of sha1sum. inputs are read whole and hashed in one shot.

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use strhash::hash_bytes;

const USAGE: &str = "usage: strhashsum [-v] [-s STRING]... [FILE]...";

enum Input {
    Literal(String),
    Stdin,
    File(String),
}

struct Args {
    verbose: bool,
    inputs: Vec<Input>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut verbose = false;
    let mut inputs = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-v" => verbose = true,
            "-s" => match args.next() {
                Some(s) => inputs.push(Input::Literal(s)),
                None => bail!("-s requires an argument"),
            },
            "-" => inputs.push(Input::Stdin),
            flag if flag.starts_with('-') => bail!("unknown flag {flag}"),
            _ => inputs.push(Input::File(arg)),
        }
    }
    if inputs.is_empty() {
        inputs.push(Input::Stdin);
    }
    Ok(Args { verbose, inputs })
}

fn read_input(input: &Input) -> Result<(Vec<u8>, String)> {
    match input {
        Input::Literal(s) => Ok((s.as_bytes().to_vec(), format!("{s:?}"))),
        Input::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("could not read stdin")?;
            Ok((buf, String::from("-")))
        }
        Input::File(path) => {
            let buf = fs::read(path).with_context(|| format!("could not read {path}"))?;
            Ok((buf, path.clone()))
        }
    }
}

fn main() -> Result<()> {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            eprintln!("{USAGE}");
            std::process::exit(42);
        }
    };

    for input in args.inputs.iter() {
        let (buf, name) = read_input(input)?;
        let hash = hash_bytes(&buf);
        if args.verbose {
            println!("{hash:016x}  {}  {name}", buf.len());
        } else {
            println!("{hash:016x}  {name}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults_to_stdin() {
        let args = parse(&[]).unwrap();
        assert!(!args.verbose);
        assert!(matches!(args.inputs.as_slice(), [Input::Stdin]));
    }

    #[test]
    fn test_mixed_inputs() {
        let args = parse(&["-v", "-s", "abc", "Cargo.toml", "-"]).unwrap();
        assert!(args.verbose);
        assert!(matches!(
            args.inputs.as_slice(),
            [Input::Literal(s), Input::File(f), Input::Stdin] if s == "abc" && f == "Cargo.toml"
        ));
    }

    #[test]
    fn test_bad_args() {
        assert!(parse(&["-s"]).is_err());
        assert!(parse(&["-x"]).is_err());
    }

    #[test]
    fn test_literal_fingerprint() {
        let (buf, name) = read_input(&Input::Literal(String::from("abcdefgh"))).unwrap();
        assert_eq!(name, "\"abcdefgh\"");
        assert_eq!(hash_bytes(&buf), 0xccbd4cd052f20df6);
    }
}
