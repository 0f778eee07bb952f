#![cfg(feature = "optics")]
//! Property-based tests for the lens laws.
//!
//! Verifies GetPut, PutGet, and PutPut for field lenses and their
//! compositions using proptest.

use focal::lens;
use focal::optics::ValueLens;
use proptest::prelude::*;

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Segment {
    start: Point,
    end: Point,
}

fn point() -> impl Strategy<Value = Point> {
    (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point { x, y })
}

fn segment() -> impl Strategy<Value = Segment> {
    (point(), point()).prop_map(|(start, end)| Segment { start, end })
}

proptest! {
    /// GetPut Law: setting a field back to its current value is the identity.
    #[test]
    fn prop_get_put_law(source in point()) {
        let x_lens = lens!(Point, x);
        let current = *x_lens.get(&source);
        prop_assert_eq!(x_lens.set(source.clone(), current), source);
    }

    /// PutGet Law: after a set, get observes the set value.
    #[test]
    fn prop_put_get_law(source in point(), value: i32) {
        let x_lens = lens!(Point, x);
        prop_assert_eq!(*x_lens.get(&x_lens.set(source, value)), value);
    }

    /// PutPut Law: the last of two consecutive sets wins.
    #[test]
    fn prop_put_put_law(source in point(), first: i32, second: i32) {
        let x_lens = lens!(Point, x);
        prop_assert_eq!(
            x_lens.set(x_lens.set(source.clone(), first), second),
            x_lens.set(source, second)
        );
    }

    /// A set through one lens never disturbs the other field.
    #[test]
    fn prop_set_leaves_other_fields(source in point(), value: i32) {
        let x_lens = lens!(Point, x);
        let original_y = source.y;
        prop_assert_eq!(x_lens.set(source, value).y, original_y);
    }

    /// Modify observes exactly the update applied to the current value.
    #[test]
    fn prop_modify_applies_update(source in point(), delta: i16) {
        let x_lens = lens!(Point, x);
        let expected = x_lens.get(&source).wrapping_add(i32::from(delta));
        let modified = x_lens.modify(source, |x| x.wrapping_add(i32::from(delta)));
        prop_assert_eq!(*x_lens.get(&modified), expected);
    }

    /// The composed lens satisfies PutGet through the nesting.
    #[test]
    fn prop_composed_put_get_law(source in segment(), value: i32) {
        let start_x = lens!(Segment, start).compose(lens!(Point, x));
        let updated = start_x.set(source, value);
        prop_assert_eq!(*start_x.get(&updated), value);
        prop_assert_eq!(updated.start.x, value);
    }

    /// The composed lens satisfies GetPut through the nesting.
    #[test]
    fn prop_composed_get_put_law(source in segment()) {
        let end_y = lens!(Segment, end).compose(lens!(Point, y));
        let current = *end_y.get(&source);
        prop_assert_eq!(end_y.set(source.clone(), current), source);
    }

    /// A composed set touches only the focused leaf.
    #[test]
    fn prop_composed_set_is_local(source in segment(), value: i32) {
        let start_x = lens!(Segment, start).compose(lens!(Point, x));
        let updated = start_x.set(source.clone(), value);
        prop_assert_eq!(updated.start.y, source.start.y);
        prop_assert_eq!(updated.end, source.end);
    }
}
