//! Trybuild fixture verifying `#[holen(crate = "...")]` works with a
//! genuine dependency rename via `use ... as`.

use feld as my_feld;
use my_feld::{Holen, Lazy};

#[derive(Holen)]
#[holen(crate = "my_feld")]
struct Config {
    #[holen(lazy, init = 7u32)]
    value: Lazy<u32>,
}

fn main() {
    let config = Config { value: Lazy::new() };
    assert_eq!(*config.value(), 7);
}
