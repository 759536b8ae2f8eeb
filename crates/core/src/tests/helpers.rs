// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, RefereeRegistry};
use javaball_domain::{
    Location, Qualification, QualificationLevel, RefereeId, RefereeRecord, TravelPreferences,
};

pub fn create_test_referee(id: &str, first: &str, last: &str, level: u8) -> RefereeRecord {
    RefereeRecord::new(
        RefereeId::new(id),
        String::from(first),
        String::from(last),
        Qualification::NJB,
        QualificationLevel::new(level).unwrap(),
        0,
        Location::North,
        TravelPreferences::none(),
    )
    .unwrap()
}

pub fn create_full_registry(capacity: usize) -> RefereeRegistry {
    let mut registry: RefereeRegistry = RefereeRegistry::with_capacity(capacity);
    for i in 0..capacity {
        registry
            .add(create_test_referee(&format!("RF{i}"), "Ref", "Eree", 1))
            .unwrap();
    }
    registry
}

pub fn create_add_command(first: &str, last: &str) -> Command {
    Command::AddReferee {
        first_name: String::from(first),
        last_name: String::from(last),
        qualification: Qualification::IJB,
        level: QualificationLevel::new(2).unwrap(),
        allocations: 5,
        home: Location::Central,
        travel: TravelPreferences::only(Location::South),
    }
}
