// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod filter_tests;

use pahana_shop_persistence::Persistence;

/// Creates a seeded in-memory store for tests.
pub fn create_test_store() -> Persistence {
    Persistence::new_in_memory().expect("in-memory store should initialize")
}
