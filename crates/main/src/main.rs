// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use anyhow::Result;
use board::App;

#[tokio::main]
async fn main() {
    board::try_or_exit(run()).await;
}

async fn run() -> Result<()> {
    App::create("Activity Board")?.run().await
}
