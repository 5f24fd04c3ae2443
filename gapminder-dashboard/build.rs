//! Build script for gapminder-dashboard.
//!
//! Copies the Gapminder CSV into OUT_DIR so it can be embedded via
//! `include_str!`. The fixture is not checked in; `gm-cli fetch --output
//! fixtures/gapminder.csv` downloads it. When it is missing a header-only
//! file is written and the app shows a load error instead of charts.

use std::env;
use std::fs;
use std::path::Path;

const FIXTURE: &str = "../fixtures/gapminder.csv";
const HEADER: &str = "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\n";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("gapminder.csv");

    let src = Path::new(FIXTURE);
    if src.exists() {
        fs::copy(src, &dest).unwrap_or_else(|e| {
            panic!("Failed to copy {} to {}: {}", FIXTURE, dest.display(), e);
        });
    } else {
        fs::write(&dest, HEADER).unwrap_or_else(|e| {
            panic!("Failed to write placeholder {}: {}", dest.display(), e);
        });
        println!(
            "cargo:warning=Fixture file {} not found, using empty placeholder (run `gm-cli fetch`)",
            FIXTURE
        );
    }

    println!("cargo:rerun-if-changed={}", FIXTURE);
    println!("cargo:rerun-if-changed=build.rs");
}
