// SPDX-FileCopyrightText: 2026 The uazapi-purge Authors
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::Write;
use uazapi_client::Client;

use crate::token_label;

/// Lists all instances, then deletes them one at a time in the order the
/// server returned them.
///
/// Only a failure to list is returned as an error. A failed deletion is
/// reported to `out` and the next instance is tried.
pub fn run<W: Write>(client: &Client, out: &mut W) -> anyhow::Result<()> {
    let instances = crate::list_instances(client, out)?;

    for instance in &instances {
        let token = token_label(instance);
        writeln!(
            out,
            "➡️ Deleting instance {} (token: {})...",
            instance.display_name(),
            token
        )?;
        match client.delete_instance(instance.token.as_deref()) {
            Ok(()) => writeln!(out, "✅ Instance with token {} deleted successfully!", token)?,
            Err(err) => {
                log::debug!("Deleting {} failed: {}", instance.display_name(), err);
                writeln!(
                    out,
                    "⚠️ Failed to delete token {}: {}",
                    token,
                    err.status_line()
                )?
            }
        }
    }

    Ok(())
}
