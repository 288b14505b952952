/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Intersection observer queries.

use crate::state::TabStripSnapshot;
use crate::style::IntersectionBreakpoint;

/// Whether the observer group has shrunk to or past `breakpoint`.
///
/// A group that has never reported a ratio is not intersected.
pub fn is_entry_intersected(
    snapshot: &TabStripSnapshot,
    group: &str,
    breakpoint: IntersectionBreakpoint,
) -> bool {
    snapshot
        .observers
        .get(group)
        .is_some_and(|ratio| *ratio <= breakpoint.ratio())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::theme::TABS_OBSERVER_GROUP;
    use rstest::rstest;

    fn snapshot_with_ratio(ratio: f64) -> TabStripSnapshot {
        let mut snapshot = TabStripSnapshot::default();
        snapshot.observers.insert(TABS_OBSERVER_GROUP.to_string(), ratio);
        snapshot
    }

    #[rstest]
    #[case(1.0, IntersectionBreakpoint::At40, false)]
    #[case(0.5, IntersectionBreakpoint::At40, true)]
    #[case(0.3, IntersectionBreakpoint::At20, false)]
    #[case(0.2, IntersectionBreakpoint::At20, true)]
    #[case(0.7, IntersectionBreakpoint::At75, true)]
    fn ratio_at_or_below_threshold_intersects(
        #[case] ratio: f64,
        #[case] breakpoint: IntersectionBreakpoint,
        #[case] expected: bool,
    ) {
        let snapshot = snapshot_with_ratio(ratio);
        assert_eq!(
            is_entry_intersected(&snapshot, TABS_OBSERVER_GROUP, breakpoint),
            expected
        );
    }

    #[test]
    fn unobserved_group_is_not_intersected() {
        let snapshot = snapshot_with_ratio(0.0);
        assert!(!is_entry_intersected(
            &snapshot,
            "bookmarks",
            IntersectionBreakpoint::At75
        ));
        assert!(!is_entry_intersected(
            &TabStripSnapshot::default(),
            TABS_OBSERVER_GROUP,
            IntersectionBreakpoint::At75
        ));
    }
}
