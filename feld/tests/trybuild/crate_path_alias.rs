//! Trybuild fixture verifying `#[holen(crate = "...")]` is accepted using
//! the real crate name as a self-referential alias, so no workspace
//! reconfiguration is needed.

use feld::{Holen, Lazy};

#[derive(Holen)]
#[holen(crate = "feld")]
struct Config {
    #[holen(lazy, init = 7u32)]
    value: Lazy<u32>,
}

fn main() {
    let config = Config { value: Lazy::new() };
    assert_eq!(*config.value(), 7);
}
