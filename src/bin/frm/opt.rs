use structopt::StructOpt;

use std::ffi;

/// `frm`: a filesystem-backed hierarchical note store.
#[derive(StructOpt)]
pub struct Opt {
    #[structopt(long = "dbpath", help = "database directory, default $FRAMEDB_PATH or $HOME/.framedb")]
    pub dbpath: Option<ffi::OsString>,

    #[structopt(long = "message", help = "payload text, skipping $EDITOR/stdin capture")]
    pub message: Option<String>,

    #[structopt(subcommand)]
    pub subcmd: SubCommand,
}

#[derive(Clone, StructOpt)]
pub enum SubCommand {
    /// Create a new database at dbpath.
    Init,
    /// Print the current node, its payload, and its last-modified time.
    Status,
    /// Print history, newest first.
    History {
        #[structopt(help = "limit to the first <count> entries")]
        count: Option<usize>,
    },
    /// Create a child node under the current node and move the cursor to it.
    Push {
        #[structopt(help = "local identifier of the new node")]
        name: String,
    },
    /// Move up one level, deleting the node the cursor just left.
    Pop,
    /// Move the cursor to the parent of the current node.
    Up,
    /// Move the cursor to a child of the current node.
    Down {
        #[structopt(help = "local identifier of the child node")]
        name: String,
    },
    /// Move the cursor to an arbitrary node-path.
    Switch {
        #[structopt(help = "node-path, relative to the database root")]
        nodepath: String,
    },
    /// Recursively delete the node at <nodepath>.
    Delete {
        #[structopt(help = "node-path, relative to the database root")]
        nodepath: String,
    },
    /// List every node-path under the current node.
    List,
    /// List node-paths under the current node matching <term>.
    Match {
        #[structopt(help = "substring to match against each node-path")]
        term: String,
        #[structopt(long = "invert", help = "negate the term test, scope still applies")]
        invert: bool,
    },
    /// Same as `match`, scoped to root instead of the current node.
    MatchFromRoot {
        #[structopt(help = "substring to match against each node-path")]
        term: String,
        #[structopt(long = "invert", help = "negate the term test, scope still applies")]
        invert: bool,
    },
    /// Print the current node's payload.
    Payload,
    /// Replace the current node's payload, via $EDITOR/stdin or --message.
    Edit,
    /// Append text to the current node's payload.
    Append {
        #[structopt(help = "text to append")]
        text: String,
    },
}
