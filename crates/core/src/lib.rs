// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod form;
mod id;
mod registry;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{TransitionResult, apply};
pub use command::Command;
pub use error::{CoreError, FieldError, FormError};
pub use form::{FormEvent, FormMode, RefereeForm};
pub use id::{IdScheme, InitialsIdScheme};
pub use registry::{MAX_REFEREES, RefereeRegistry, travels};
