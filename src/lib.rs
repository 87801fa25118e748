// SPDX-FileCopyrightText: 2026 The uazapi-purge Authors
//
// SPDX-License-Identifier: GPL-3.0-only

use anyhow::Context;
use std::io::Write;
use uazapi_client::{Client, Instance};

pub mod cli;
pub mod list;
pub mod purge;

const NO_TOKEN: &str = "<none>";

fn token_label(instance: &Instance) -> &str {
    instance.token.as_deref().unwrap_or(NO_TOKEN)
}

// Prints the "nothing found" or count line. Listing errors are fatal.
fn list_instances<W: Write>(client: &Client, out: &mut W) -> anyhow::Result<Vec<Instance>> {
    let instances = client
        .list_instances()
        .context("Failed to list instances")?;
    if instances.is_empty() {
        writeln!(out, "No instances found!")?;
    } else {
        writeln!(out, "Found {} instances.", instances.len())?;
    }
    Ok(instances)
}
