// SPDX-FileCopyrightText: 2026 The uazapi-purge Authors
//
// SPDX-License-Identifier: GPL-3.0-only

use std::io;

pub fn run() -> anyhow::Result<()> {
    let client = super::client()?;
    crate::purge::run(&client, &mut io::stdout().lock())
}
