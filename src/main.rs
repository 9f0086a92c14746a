use charmatch::overlap_summary;

use std::io::{self, BufRead};

fn main() {
    let stdin = io::stdin();

    let summary = overlap_summary(stdin.lock().lines().filter_map(|s| s.ok())).unwrap();

    println!("{summary}");
}
