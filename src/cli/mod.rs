//! The `zigma` command-line front end: argument parsing, subcommand
//! dispatch, and the `encode`/`decode`/`check` operations themselves.

mod dispatch;
mod io;
mod registry;

use crate::{
    buffer::ByteBuffer,
    codec::Base,
    error::CliError,
    zigma::State,
};

pub use dispatch::Operation;
pub use registry::Registry;

/// Maximum accepted key length in bytes, matching the cipher's 256-entry
/// permutation: a key this long already visits every index swap.
pub const MAX_KEY_SIZE: usize = 256;

/// Digest length produced by `zigma check` (288 bits).
pub const CHECKSUM_SIZE: usize = 36;

fn base_of(code: &str) -> Result<Base, CliError> {
    match code {
        "16" => Ok(Base::Base16),
        "64" => Ok(Base::Base64),
        "256" => Ok(Base::Binary),
        other => Err(CliError::InvalidArgument(format!("unknown format '{other}' (want 16, 64, or 256)"))),
    }
}

/// Parse `ARGV[2..]` into a [`Registry`] of `key=value` pairs. A bare `key`
/// with no `=` is stored with an empty value — the registry's `get_or`
/// treats that the same as an absent key.
fn parse_operands(registry: &mut Registry, operands: &[String]) {
    for operand in operands {
        match operand.split_once('=') {
            Some((key, value)) => registry.set(key, value),
            None => registry.set(operand, ""),
        }
    }
}

/// Run `zigma` with `argv[1..]` (i.e. excluding the binary name). Writes
/// human-readable progress to stderr and the operation's primary output to
/// stdout/a file, matching the original front end.
pub fn run(args: &[String]) -> Result<(), CliError> {
    eprintln!("ZIGMA (Rust)");

    let Some(input) = args.first() else {
        return Err(CliError::InvalidArgument("no operation specified".into()));
    };

    let Some(op) = dispatch::determine_operation(input) else {
        return Err(CliError::InvalidArgument(format!("unknown operation '{input}'")));
    };

    let mut registry = Registry::new();
    match op {
        Operation::Encode => {
            registry.set("in", "");
            registry.set("in.fmt", "256");
            registry.set("out", "");
            registry.set("out.fmt", "64");
            registry.set("key", "");
            registry.set("key.fmt", "256");
        }
        Operation::Decode => {
            registry.set("in", "");
            registry.set("in.fmt", "64");
            registry.set("out", "");
            registry.set("out.fmt", "256");
            registry.set("key", "");
            registry.set("key.fmt", "256");
        }
        Operation::Check => {
            registry.set("in", "");
            registry.set("in.fmt", "256");
            registry.set("out", "");
            registry.set("out.fmt", "16");
        }
        Operation::Help | Operation::Version => {}
    }

    parse_operands(&mut registry, &args[1..]);

    match op {
        Operation::Encode => handle_transcode(&registry, true),
        Operation::Decode => handle_transcode(&registry, false),
        Operation::Check => handle_check(&registry),
        Operation::Help => Ok(handle_help()),
        Operation::Version => Ok(handle_version()),
    }
}

/// Read the master key material, either from a key file (`key=FILE`,
/// decoded per `key.fmt`) or interactively from the terminal. Encoding
/// additionally requires the passphrase to be entered twice and match.
fn capture_or_read_key(registry: &Registry, confirm: bool) -> Result<ByteBuffer, CliError> {
    let key_path = registry.get_or("key", "");
    let key_fmt = base_of(&registry.get_or("key.fmt", "256"))?;

    let bytes = if !key_path.is_empty() {
        let raw = io::read_input(&key_path)?;
        key_fmt.decode(&raw)?
    } else {
        let first = io::capture_key("Enter password: ")?;
        if confirm {
            let second = io::capture_key("Re-enter password: ")?;
            if first != second {
                return Err(CliError::PassphraseMismatch);
            }
        }
        first.into_bytes()
    };

    if bytes.len() > MAX_KEY_SIZE {
        return Err(CliError::KeyTooLarge);
    }

    Ok(ByteBuffer::from_slice(&bytes))
}

fn handle_transcode(registry: &Registry, encoding: bool) -> Result<(), CliError> {
    let in_path = registry.get_or("in", "");
    let in_fmt = base_of(&registry.get_or("in.fmt", "256"))?;
    let out_path = registry.get_or("out", "");
    let out_fmt = base_of(&registry.get_or("out.fmt", "256"))?;

    let key = capture_or_read_key(registry, encoding)?;

    eprintln!("   mode            = {}", if encoding { "ENCODING" } else { "DECODING" });
    eprintln!("  input            = {}", if in_path.is_empty() { "<STDIN>" } else { &in_path });
    eprintln!(" output            = {}", if out_path.is_empty() { "<STDOUT>" } else { &out_path });
    eprintln!("    key            = {}/{} bytes\n", key.len(), MAX_KEY_SIZE);

    let raw_in = io::read_input(&in_path)?;
    let mut data = in_fmt.decode(&raw_in)?;

    let mut state = State::new_keyed(key.as_slice())?;
    if encoding {
        state.encode_span(&mut data);
    } else {
        state.decode_span(&mut data);
    }

    let total = data.len();
    let encoded_out = out_fmt.encode(&data);
    io::write_output(&out_path, &encoded_out)?;

    eprintln!("!COMPLETE! {} {} BYTES!", if encoding { "ENCODED" } else { "DECODED" }, total);
    Ok(())
}

fn handle_check(registry: &Registry) -> Result<(), CliError> {
    let in_path = registry.get_or("in", "");
    let out_fmt = base_of(&registry.get_or("out.fmt", "16"))?;

    let raw_in = io::read_input(&in_path)?;

    let mut state = State::new_hash();
    let mut data = raw_in.clone();
    state.encode_span(&mut data);
    let digest = state.hash_final(CHECKSUM_SIZE);

    // The original's `out.fmt` check accepts 16/64/256 but only the 16/64
    // branches print the digest; 256 falls through both and prints nothing.
    // Kept as a no-op here rather than hardened into an error.
    if out_fmt != Base::Binary {
        let encoded = String::from_utf8_lossy(&out_fmt.encode(&digest)).into_owned();
        print!("{encoded}");
    }
    println!("  {} ({})", if in_path.is_empty() { "-" } else { &in_path }, raw_in.len());
    Ok(())
}

fn handle_help() {
    eprintln!("Usage: zigma OPERATION [OPERAND...]");
    eprintln!();
    eprintln!("OPERATION must be one of the following:");
    eprintln!("  encode, decode, check, help, version");
    eprintln!();
    eprintln!("OPERAND must be in the form of <KEY[.SUBKEY]>[=VALUE]");
    eprintln!("  KEY must be one of the following:");
    eprintln!("    in=FILE    read from FILE instead, or omit for:  <STDIN>");
    eprintln!("    out=FILE   write to FILE instead, or omit for:   <STDOUT>");
    eprintln!("    key=FILE   use FILE as master key, or omit for:  <CAPTURE>");
    eprintln!();
    eprintln!("  SUBKEY must be one of the following:");
    eprintln!("    .fmt=BASE   the base encoding of the data (16, 64, 256)");
    eprintln!();
}

fn handle_version() {
    eprintln!("  Copyright (C) 2024 Chase Zehl O'Byrne <zehl (at) live.com>");
    eprintln!();
    eprintln!("  NOTICE: This program comes with ABSOLUTELY NO WARRANTY.");
}
