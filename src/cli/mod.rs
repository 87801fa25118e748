// SPDX-FileCopyrightText: 2026 The uazapi-purge Authors
//
// SPDX-License-Identifier: GPL-3.0-only

mod list;
mod purge;

use std::{env, process};
use uazapi_client::{uazapi_conf, Client};

const USAGE: &str = "Usage: uazapi-purge [purge|list|help]";

fn client() -> anyhow::Result<Client> {
    Ok(Client::new(uazapi_conf().clone())?)
}

pub fn run() {
    let mut args = env::args();
    let _ = args.next();
    let cmd = args.next();
    let res = match cmd.as_deref() {
        None | Some("purge") => purge::run(),
        Some("list") => list::run(),
        Some("help" | "-h" | "--help") => {
            println!("{}", USAGE);
            Ok(())
        }
        _ => {
            eprintln!("{}", USAGE);
            process::exit(1);
        }
    };

    if let Err(err) = res {
        eprintln!("uazapi-purge: {:#}", err);
        process::exit(1);
    }
}
