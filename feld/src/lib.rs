//! Accessor and mutator generation for plain structs.
//!
//! `feld` provides two derive macros. [`Holen`] generates a read accessor
//! for every named field; [`Setzer`] generates the matching `set_*` write
//! accessor. Applying a derive to a struct is equivalent to applying the
//! directive to each named field individually, and a field-level
//! `#[holen(...)]` / `#[setzer(...)]` attribute replaces the struct-level
//! configuration for that field entirely.
//!
//! Generated methods are `pub` unless a `vis` option narrows them to
//! `"super"`, `"crate"`, `"private"`, or suppresses them with `"none"`.
//! Attributes listed in `on_method(...)` (and, for mutators,
//! `on_param(...)`) are copied onto the generated code in order.
//!
//! ```rust
//! use feld::{Holen, Setzer};
//!
//! #[derive(Default, Holen, Setzer)]
//! struct Account {
//!     #[holen(copy)]
//!     id: u64,
//!     name: String,
//! }
//!
//! let mut account = Account::default();
//! account.set_name("iona".to_owned());
//! account.set_id(7);
//! assert_eq!(account.name(), "iona");
//! assert_eq!(account.id(), 7);
//! ```
//!
//! Accessors can memoise a derived value. The field is declared as
//! [`Lazy<T>`] and the `init` expression runs on first access only:
//!
//! ```rust
//! use feld::{Holen, Lazy};
//!
//! #[derive(Holen)]
//! struct Circle {
//!     #[holen(copy)]
//!     radius: f64,
//!     #[holen(lazy, init = self.radius * self.radius * std::f64::consts::PI)]
//!     area: Lazy<f64>,
//! }
//!
//! let circle = Circle { radius: 2.0, area: Lazy::new() };
//! assert!((circle.area() - 12.566).abs() < 1e-3);
//! ```

pub use feld_macros::{Holen, Setzer};

mod lazy;

pub use lazy::Lazy;
