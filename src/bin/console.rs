//! Interactive Guandan Console
//!
//! Classify, compare and validate plays by hand:
//! - `classify 8s 9s Ts Js Qs`
//! - `validate 9d,9c --table 6s,6h`
//! - `level 7`

use guandan::*;

fn main() -> anyhow::Result<()> {
    log();
    console::CLI::new().run()
}
