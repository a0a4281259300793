use std::{
    fs::File,
    io::{self, Read, Write},
};

/// Read all of `path`'s bytes, or all of stdin if `path` is empty — the
/// same `""` = stream convention the registry defaults use.
pub fn read_input(path: &str) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if path.is_empty() {
        io::stdin().read_to_end(&mut buf)?;
    } else {
        File::open(path)?.read_to_end(&mut buf)?;
    }
    Ok(buf)
}

/// Write `data` to `path`, or to stdout if `path` is empty.
pub fn write_output(path: &str, data: &[u8]) -> io::Result<()> {
    if path.is_empty() {
        io::stdout().write_all(data)
    } else {
        File::create(path)?.write_all(data)
    }
}

/// Prompt on stderr and read a passphrase from the terminal with echo
/// disabled, via [`rpassword`].
pub fn capture_key(prompt: &str) -> io::Result<String> {
    rpassword::prompt_password(prompt)
}
