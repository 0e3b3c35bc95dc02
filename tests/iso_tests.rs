//! Integration tests for [`Iso`].

#![forbid(unsafe_code)]

use opticus::control::Either;
use opticus::optics::{Iso, PIso, either_result, iso_swap};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Meters(f64);

fn meters() -> Iso<Meters, f64> {
    Iso::new(|meters: &Meters| meters.0, Meters)
}

fn chars() -> Iso<String, Vec<char>> {
    Iso::new(|text: &String| text.chars().collect(), |chars: Vec<char>| chars.into_iter().collect())
}

#[rstest]
fn get_and_reverse_get_are_inverse() {
    let iso = meters();
    assert_eq!(iso.get(&Meters(2.5)), 2.5);
    assert_eq!(iso.reverse_get(2.5), Meters(2.5));
}

#[rstest]
fn modify_goes_through_the_focus() {
    let reversed = chars().modify("abc".to_string(), |mut chars| {
        chars.reverse();
        chars
    });
    assert_eq!(reversed, "cba");
}

#[rstest]
fn set_ignores_the_source() {
    assert_eq!(meters().set(Meters(1.0), 3.0), Meters(3.0));
}

#[rstest]
#[case(Meters(4.0))]
#[case(Meters(-1.0))]
fn lift_f_agrees_with_modify_f(#[case] distance: Meters) {
    let square_root = |value: f64| (value >= 0.0).then(|| value.sqrt());
    let lifted = meters().lift_f(square_root);
    assert_eq!(lifted(distance.clone()), meters().modify_f(distance, square_root));
}

#[rstest]
fn reverse_swaps_directions() {
    let reversed = chars().reverse();
    assert_eq!(reversed.get(&vec!['h', 'i']), "hi");
    assert_eq!(reversed.reverse_get("hi".to_string()), vec!['h', 'i']);
}

#[rstest]
fn polymorphic_iso_changes_both_types() {
    let wrap: PIso<Option<i32>, Result<String, ()>, Option<i32>, Option<String>> =
        PIso::new(Option::clone, |value: Option<String>| value.ok_or(()));
    assert_eq!(wrap.modify(Some(3), |n| n.map(|n| n.to_string())), Ok("3".to_string()));
    assert_eq!(wrap.modify(None, |n| n.map(|n| n.to_string())), Err(()));
}

#[rstest]
fn swap_and_either_result() {
    let swap = iso_swap::<i32, char>();
    assert_eq!(swap.get(&(1, 'a')), ('a', 1));
    assert_eq!(swap.reverse_get(('a', 1)), (1, 'a'));

    let as_result = either_result::<String, i32>();
    assert_eq!(as_result.get(&Either::Right(1)), Ok(1));
    assert_eq!(as_result.reverse_get(Err("e".to_string())), Either::Left("e".to_string()));
}

#[rstest]
fn split_and_sides() {
    let both = meters().split(&chars());
    assert_eq!(both.get(&(Meters(1.0), "ab".to_string())), (1.0, vec!['a', 'b']));

    let left = meters().left::<bool>();
    assert_eq!(left.get(&Either::Right(true)), Either::Right(true));
    assert_eq!(left.reverse_get(Either::Left(2.0)), Either::Left(Meters(2.0)));
}

#[rstest]
fn conversions_agree_with_the_iso() {
    let iso = meters();
    let source = Meters(4.0);

    assert_eq!(iso.as_lens().get(&source), 4.0);
    assert_eq!(iso.as_prism().get_option(&source), Some(4.0));
    assert_eq!(iso.as_optional().modify(source.clone(), |m| m / 2.0), Meters(2.0));
    assert_eq!(iso.as_traversal().get_all(&source), vec![4.0]);
    assert_eq!(iso.as_setter().set(source.clone(), 0.0), Meters(0.0));
    assert_eq!(iso.as_getter().get(&source), 4.0);
    assert_eq!(iso.as_fold().get_all(&source), vec![4.0]);
}

#[rstest]
fn identity_is_a_no_op() {
    let identity: Iso<u8, u8> = Iso::identity();
    assert_eq!(identity.modify(7, |n| n + 1), 8);
    assert_eq!(identity.get(&7), 7);
}
