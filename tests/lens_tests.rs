//! Integration tests for [`Lens`].

#![forbid(unsafe_code)]

use opticus::control::Either;
use opticus::optics::{Lens, PLens};
use opticus::typeclass::Identity;
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

fn x_lens() -> Lens<Point, i32> {
    Lens::new(|point: &Point| point.x, |point: Point, x| Point { x, ..point })
}

fn y_lens() -> Lens<Point, i32> {
    Lens::new(|point: &Point| point.y, |point: Point, y| Point { y, ..point })
}

#[rstest]
fn modify_applies_the_function_to_the_focus() {
    let moved = x_lens().modify(Point { x: 1, y: 2 }, |x| x + 10);
    assert_eq!(moved, Point { x: 11, y: 2 });
}

#[rstest]
#[case(4, Some(Point { x: 2, y: 0 }))]
#[case(3, None)]
fn modify_f_short_circuits_in_option(#[case] x: i32, #[case] expected: Option<Point>) {
    let halved = x_lens().modify_f(Point { x, y: 0 }, |x| (x % 2 == 0).then_some(x / 2));
    assert_eq!(halved, expected);
}

#[rstest]
fn modify_f_in_identity_is_modify() {
    let point = Point { x: 3, y: 4 };
    let through_identity = x_lens().modify_f(point.clone(), |x| Identity::new(x * 3));
    assert_eq!(through_identity.into_inner(), x_lens().modify(point, |x| x * 3));
}

#[rstest]
fn modify_f_in_result_reports_the_error() {
    let checked: Result<Point, String> =
        y_lens().modify_f(Point { x: 0, y: -1 }, |y| if y < 0 { Err(format!("{y} < 0")) } else { Ok(y) });
    assert_eq!(checked, Err("-1 < 0".to_string()));
}

#[rstest]
fn polymorphic_lens_changes_the_focus_type() {
    let first: PLens<(i32, char), (String, char), i32, String> = PLens::new(
        |pair: &(i32, char)| pair.0,
        |pair: (i32, char), text: String| (text, pair.1),
    );
    assert_eq!(first.modify((7, 'a'), |n| format!("#{n}")), ("#7".to_string(), 'a'));
}

#[rstest]
fn lift_turns_a_focus_function_into_a_source_function() {
    let double_x = x_lens().lift(|x| x * 2);
    assert_eq!(double_x(Point { x: 5, y: 1 }), Point { x: 10, y: 1 });
}

#[rstest]
#[case(Point { x: 3, y: 0 })]
#[case(Point { x: i32::MAX, y: 0 })]
fn lift_f_agrees_with_modify_f(#[case] point: Point) {
    let checked_double = |x: i32| x.checked_mul(2);
    let lifted = x_lens().lift_f(checked_double);
    assert_eq!(lifted(point.clone()), x_lens().modify_f(point, checked_double));
}

#[rstest]
#[case(2, Some(2))]
#[case(-2, None)]
fn find_keeps_a_focus_that_matches(#[case] x: i32, #[case] expected: Option<i32>) {
    let point = Point { x, y: 0 };
    assert_eq!(x_lens().find(&point, |x| *x > 0), expected);
    assert_eq!(x_lens().exists(&point, |x| *x > 0), expected.is_some());
}

#[rstest]
fn split_runs_both_lenses() {
    let both = x_lens().split(&y_lens());
    let pair = (Point { x: 1, y: 2 }, Point { x: 3, y: 4 });

    assert_eq!(both.get(&pair), (1, 4));
    assert_eq!(both.set(pair, (0, 0)), (Point { x: 0, y: 2 }, Point { x: 3, y: 0 }));
}

#[rstest]
fn first_carries_a_value_alongside() {
    let carried = x_lens().first::<&str>();
    assert_eq!(carried.get(&(Point { x: 1, y: 2 }, "tag")), (1, "tag"));
    assert_eq!(
        carried.set((Point { x: 1, y: 2 }, "tag"), (9, "new")),
        (Point { x: 9, y: 2 }, "new")
    );
}

#[rstest]
fn choice_selects_the_lens_by_side() {
    let either = x_lens().choice(&y_lens());
    let left: Either<Point, Point> = Either::Left(Point { x: 1, y: 2 });
    let right: Either<Point, Point> = Either::Right(Point { x: 1, y: 2 });

    assert_eq!(either.get(&left), 1);
    assert_eq!(either.get(&right), 2);
    assert_eq!(either.set(right, 0), Either::Right(Point { x: 1, y: 0 }));
}

#[rstest]
fn identity_and_codiagonal() {
    let identity: Lens<i32, i32> = Lens::identity();
    assert_eq!(identity.modify(1, |n| n + 1), 2);

    let codiagonal: Lens<Either<i32, i32>, i32> = Lens::codiagonal();
    assert_eq!(codiagonal.get(&Either::Right(3)), 3);
    assert_eq!(codiagonal.set(Either::Left(1), 5), Either::Left(5));
}

#[rstest]
fn conversions_agree_with_the_lens() {
    let lens = x_lens();
    let point = Point { x: 6, y: 7 };

    assert_eq!(lens.as_optional().get_option(&point), Some(6));
    assert_eq!(lens.as_traversal().get_all(&point), vec![6]);
    assert_eq!(lens.as_setter().set(point.clone(), 0), Point { x: 0, y: 7 });
    assert_eq!(lens.as_getter().get(&point), 6);
    assert_eq!(lens.as_fold().size(&point), 1);
}

#[rstest]
fn debug_does_not_expose_closures() {
    assert!(format!("{:?}", x_lens()).starts_with("PLens"));
}
