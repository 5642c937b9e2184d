//! Message capture: `$EDITOR` on a temp file, falling back to a `.`-terminated
//! stdin read when `$EDITOR` is unset. Mirrors `run_editor()` in the original
//! `frm` front-end.

use std::{
    env, fs,
    io::{self, BufRead, Write},
    process::Command,
};

use framedb::{Error, Result};

/// Capture a payload message: `--message` if given, else `$EDITOR` on a temp
/// file, else a `.`-terminated read from standard input.
pub fn capture_message(explicit: Option<String>) -> Result<String> {
    if let Some(text) = explicit {
        return Ok(text);
    }
    match env::var_os("EDITOR") {
        Some(editor) if !editor.is_empty() => run_editor(editor),
        _ => {
            eprintln!("warning: no $EDITOR specified.");
            read_from_stdin()
        }
    }
}

fn read_from_stdin() -> Result<String> {
    println!("Enter the message, ending with a single period on a line by itself");
    let stdin = io::stdin();
    let mut message = String::new();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| Error::from_io("reading stdin", err))?;
        if line == "." {
            break;
        }
        message.push_str(&line);
        message.push('\n');
    }
    Ok(message)
}

fn run_editor(editor: std::ffi::OsString) -> Result<String> {
    let file = tempfile::Builder::new()
        .prefix("frame-tmpfile-")
        .tempfile()
        .map_err(|err| Error::from_io("creating temp file", err))?;
    let path = file.path().to_path_buf();
    drop(file);

    fs::write(&path, "\nReplace this content with your message.\nThere is no limit on the length of messages\n")
        .map_err(|err| Error::from_io(format!("seeding {:?}", path), err))?;

    println!("Waiting for [{:?} {:?}] to return", editor, path);
    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|err| Error::from_io(format!("spawning {:?}", editor), err))?;
    if !status.success() {
        let _ = fs::remove_file(&path);
        return Err(Error::Fatal(format!("editor {:?} exited with {}", editor, status)));
    }

    let message = fs::read_to_string(&path).map_err(|err| Error::from_io(format!("reading {:?}", path), err))?;
    let _ = fs::remove_file(&path);
    let _ = io::stdout().flush();
    Ok(message)
}
