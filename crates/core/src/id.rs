// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::registry::RefereeRegistry;
use javaball_domain::RefereeId;

/// Derives a referee ID from a referee's names.
///
/// Implementations must be deterministic: the same names against the same
/// registry contents yield the same ID. Any `Fn(&str, &str, &RefereeRegistry)
/// -> RefereeId` closure is an `IdScheme`.
pub trait IdScheme {
    /// Derives the ID a new referee with these names would receive.
    fn derive(&self, first_name: &str, last_name: &str, registry: &RefereeRegistry) -> RefereeId;
}

impl<F> IdScheme for F
where
    F: Fn(&str, &str, &RefereeRegistry) -> RefereeId,
{
    fn derive(&self, first_name: &str, last_name: &str, registry: &RefereeRegistry) -> RefereeId {
        self(first_name, last_name, registry)
    }
}

/// IDs built from the referee's initials and a sequence number, e.g. `AL1`.
///
/// The sequence number is the smallest positive integer not already taken by
/// a registered referee with the same initials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitialsIdScheme;

impl InitialsIdScheme {
    fn initials(first_name: &str, last_name: &str) -> String {
        [first_name, last_name]
            .iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl IdScheme for InitialsIdScheme {
    fn derive(&self, first_name: &str, last_name: &str, registry: &RefereeRegistry) -> RefereeId {
        let initials: String = Self::initials(first_name, last_name);

        let mut sequence: usize = 1;
        loop {
            let candidate: RefereeId = RefereeId::new(&format!("{initials}{sequence}"));
            if !registry.contains_id(&candidate) {
                return candidate;
            }
            sequence += 1;
        }
    }
}
