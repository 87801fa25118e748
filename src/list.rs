// SPDX-FileCopyrightText: 2026 The uazapi-purge Authors
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io::Write;
use uazapi_client::Client;

use crate::token_label;

/// Read-only counterpart of `purge::run`.
pub fn run<W: Write>(client: &Client, out: &mut W) -> anyhow::Result<()> {
    for instance in crate::list_instances(client, out)? {
        writeln!(
            out,
            "{} (token: {})",
            instance.display_name(),
            token_label(&instance)
        )?;
    }
    Ok(())
}
