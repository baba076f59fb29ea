//! Form parameter building for endpoint modules.
//!
//! ```ignore
//! let mut form: Vec<(&str, String)> = vec![];
//! form_params! { form =>
//!     "name" => required name,
//!     "description" => update.description.as_deref(),
//!     "is_scheduled" => bool update.is_scheduled,
//! }
//! ```

/// Push `(key, value)` pairs onto a `Vec<(&'static str, String)>`.
///
/// - `key => required expr`: always included, via `to_string()`
/// - `key => bool expr`: `Option<bool>` rendered as `1`/`0`, included if Some
/// - `key => expr`: `Option<T: Display>`, included if Some
macro_rules! form_params {
    ($vec:ident =>) => {};

    ($vec:ident => $key:literal => required $val:expr, $($rest:tt)*) => {
        $vec.push(($key, $val.to_string()));
        form_params!($vec => $($rest)*);
    };

    ($vec:ident => $key:literal => bool $val:expr, $($rest:tt)*) => {
        if let Some(v) = $val {
            $vec.push(($key, if v { "1" } else { "0" }.to_string()));
        }
        form_params!($vec => $($rest)*);
    };

    ($vec:ident => $key:literal => $val:expr, $($rest:tt)*) => {
        if let Some(v) = $val {
            $vec.push(($key, v.to_string()));
        }
        form_params!($vec => $($rest)*);
    };
}

pub(crate) use form_params;
