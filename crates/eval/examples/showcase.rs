// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Classifies one hand for each category, run with:
//
// ```bash
// $ RUST_LOG=trace cargo r --example showcase
// ```
use anyhow::Result;

use fivecard_eval::*;

const HANDS: [&str; 10] = [
    "AC KC JC QC 10C",
    "9H KH JH QH 10H",
    "AC AH AD AS 10C",
    "2C 2D 2H 3S 3C",
    "2C 5C 9C JC KC",
    "AC 2H 3D 4S 5C",
    "7C 7H 7D 4S 5C",
    "7C 7H 4D 4S 5C",
    "7C 7H 4D 3S 5C",
    "2C 4H 6D 8S 10C",
];

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    for hand in HANDS {
        let hand = hand.parse::<Hand>()?;
        println!("{:<18}{}", hand.to_string(), classify(&hand));
    }

    // Malformed hands are rejected.
    if let Err(e) = "AC KC JC QC".parse::<Hand>() {
        println!("{e}");
    }

    Ok(())
}
