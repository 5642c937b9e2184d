//! Terminal rendering of core results. Kept thin: the library returns plain
//! data, this module only decides how it prints.

use colored::Colorize;

use framedb::Status;

pub fn status(status: &Status) {
    println!("{} {}", "current:".green(), status.current);
    println!("{} {}", "mtime:  ".green(), status.mtime_local);
    println!("{}", "payload:".green());
    print!("{}", status.payload);
}

pub fn list(entries: &[String]) {
    if entries.is_empty() {
        println!("{}", "(no matching nodes)".yellow());
        return;
    }
    for entry in entries {
        println!("{}", entry);
    }
}

pub fn history(text: &str) {
    for (i, line) in text.lines().enumerate() {
        println!("{:>4}  {}", (i + 1).to_string().cyan(), line);
    }
}

pub fn payload(text: &str) {
    print!("{}", text);
}
