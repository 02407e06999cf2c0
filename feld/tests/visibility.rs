//! Access levels applied to generated methods.

mod scope {
    use feld::{Holen, Setzer};

    /// Exercises the non-public access levels across a module boundary.
    #[derive(Holen)]
    pub struct Inner {
        #[holen(vis = "super")]
        narrowed: u32,
        #[holen(vis = "private")]
        hidden: u32,
        defaulted: u32,
    }

    /// Struct-level `vis = "crate"` applied to every field.
    #[derive(Default, Setzer)]
    #[setzer(vis = "crate")]
    pub struct CrateWide {
        /// Read directly by the tests.
        pub first: u32,
        /// Read directly by the tests.
        pub second: u32,
    }

    impl Inner {
        /// Builds an `Inner` without exposing its fields.
        pub fn new(narrowed: u32, hidden: u32, defaulted: u32) -> Self {
            Self {
                narrowed,
                hidden,
                defaulted,
            }
        }

        /// Private accessors stay callable where the struct lives.
        pub fn peek_hidden(&self) -> u32 {
            *self.hidden()
        }
    }
}

#[test]
fn omitted_vis_defaults_to_public() {
    let inner = scope::Inner::new(1, 2, 3);
    assert_eq!(*inner.defaulted(), 3);
}

#[test]
fn super_visibility_reaches_the_parent_module() {
    let inner = scope::Inner::new(1, 2, 3);
    assert_eq!(*inner.narrowed(), 1);
}

#[test]
fn private_accessors_are_usable_in_their_module() {
    let inner = scope::Inner::new(1, 2, 3);
    assert_eq!(inner.peek_hidden(), 2);
}

#[test]
fn crate_visibility_covers_the_whole_crate() {
    let mut wide = scope::CrateWide::default();
    wide.set_first(4);
    wide.set_second(5);
    assert_eq!((wide.first, wide.second), (4, 5));
}
