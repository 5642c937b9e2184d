use structopt::StructOpt;

use std::process;

use framedb::{util, Database, MatchFlags, Result};

mod editor;
mod opt;
mod render;

use opt::{Opt, SubCommand};

fn main() {
    env_logger::init();

    let opts = Opt::from_iter(std::env::args_os());
    if let Err(err) = run(opts) {
        eprintln!("frm: {}", err);
        process::exit(1);
    }
}

fn run(opts: Opt) -> Result<()> {
    let dbpath = util::resolve_dbpath(opts.dbpath.clone())?;

    if let SubCommand::Init = &opts.subcmd {
        Database::create(&dbpath)?;
        println!("initialized database at {:?}", dbpath);
        return Ok(());
    }

    let mut db = Database::open(&dbpath)?;
    handle_subcmd(&mut db, opts)
}

fn handle_subcmd(db: &mut Database, opts: Opt) -> Result<()> {
    match opts.subcmd {
        SubCommand::Init => unreachable!("handled in run()"),

        SubCommand::Status => {
            render::status(&db.status()?);
            Ok(())
        }

        SubCommand::History { count } => {
            render::history(&db.history(count)?);
            Ok(())
        }

        SubCommand::Push { name } => {
            let message = editor::capture_message(opts.message)?;
            db.push(&name, &message)?;
            println!("now at {}", db.current());
            Ok(())
        }

        SubCommand::Pop => {
            let from = db.current().to_string();
            db.pop()?;
            println!("removed {}, now at {}", from, db.current());
            Ok(())
        }

        SubCommand::Up => {
            db.up()?;
            println!("now at {}", db.current());
            Ok(())
        }

        SubCommand::Down { name } => {
            db.down(&name)?;
            println!("now at {}", db.current());
            Ok(())
        }

        SubCommand::Switch { nodepath } => {
            db.switch(&nodepath)?;
            println!("now at {}", db.current());
            Ok(())
        }

        SubCommand::Delete { nodepath } => {
            db.delete(&nodepath)?;
            println!("deleted {}", nodepath);
            Ok(())
        }

        SubCommand::List => {
            render::list(&db.list()?);
            Ok(())
        }

        SubCommand::Match { term, invert } => {
            let flags = to_flags(invert);
            render::list(&db.match_(&term, flags)?);
            Ok(())
        }

        SubCommand::MatchFromRoot { term, invert } => {
            let flags = to_flags(invert);
            render::list(&db.match_from_root(&term, flags)?);
            Ok(())
        }

        SubCommand::Payload => {
            render::payload(&db.payload_read()?);
            Ok(())
        }

        SubCommand::Edit => {
            let message = editor::capture_message(opts.message)?;
            db.payload_replace(&message)
        }

        SubCommand::Append { text } => db.payload_append(&text),
    }
}

fn to_flags(invert: bool) -> MatchFlags {
    if invert {
        MatchFlags::INVERT
    } else {
        MatchFlags::empty()
    }
}
