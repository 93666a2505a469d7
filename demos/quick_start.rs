//! Quick start: replacing nested fallible calls with a single chain.
//!
//! Run with: cargo run --example quick_start
use fntry::prelude::*;

#[derive(Debug, Clone)]
struct Profile {
    name: String,
    age: u8,
}

fn parse_profile(raw: &str) -> Result<Profile, String> {
    let (name, age) = raw.split_once(',').ok_or_else(|| format!("malformed record: {raw}"))?;
    let age = age.trim().parse::<u8>().map_err(|e| format!("bad age: {e}"))?;
    Ok(Profile { name: name.trim().to_string(), age })
}

fn greeting(raw: &str) -> String {
    fntry::of(|| parse_profile(raw))
        .filter(|p| p.age >= 18)
        .apply(|p| Ok::<_, &str>(Profile { name: p.name.to_uppercase(), ..p.clone() }))
        .context(context!("building greeting for {:?}", raw))
        .map(|p| Ok::<_, &str>(format!("Welcome, {} ({})", p.name, p.age)))
        .or_else(String::from("Welcome, guest"))
}

fn main() {
    for raw in ["ada, 36", "tim, 12", "nobody"] {
        println!("{raw:>10} => {}", greeting(raw));
    }

    // Reacting to the failure instead of replacing the value.
    fntry::of(|| parse_profile("broken"))
        .context("loading admin profile")
        .otherwise(|err| eprintln!("warning: {err}"));

    // Fire-and-forget with a fallback action.
    fntry::just(|| std::fs::remove_file("/tmp/fntry-demo.lock"))
        .or_simply(|| println!("no lock file to clean up"));

    // Values that must be there.
    let threads: usize = fntry::lifted(|| "4".parse());
    println!("using {threads} threads");
}
