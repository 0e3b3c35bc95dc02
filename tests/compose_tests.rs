//! Composition of every pair of optic kinds lands on their meet.

#![forbid(unsafe_code)]

use opticus::optics::{
    Compose, Each, Fold, Getter, Iso, Lens, Optional, Prism, Setter, Traversal, index, some_prism,
};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Team {
    lead: Option<Member>,
    members: Vec<Member>,
}

#[derive(Clone, PartialEq, Debug)]
struct Member {
    name: String,
    score: i32,
}

fn member(name: &str, score: i32) -> Member {
    Member {
        name: name.to_string(),
        score,
    }
}

fn team() -> Team {
    Team {
        lead: Some(member("ann", 3)),
        members: vec![member("bob", 1), member("cid", 2)],
    }
}

fn lead() -> Lens<Team, Option<Member>> {
    Lens::new(|team: &Team| team.lead.clone(), |team: Team, lead| Team { lead, ..team })
}

fn members() -> Lens<Team, Vec<Member>> {
    Lens::new(
        |team: &Team| team.members.clone(),
        |team: Team, members| Team { members, ..team },
    )
}

fn score() -> Lens<Member, i32> {
    Lens::new(|member: &Member| member.score, |member: Member, score| Member { score, ..member })
}

fn name() -> Getter<Member, String> {
    Getter::new(|member: &Member| member.name.clone())
}

fn negated() -> Iso<i32, i32> {
    Iso::new(|n: &i32| -n, |n: i32| -n)
}

fn positive() -> Prism<i32, i32> {
    Prism::from_preview(|n: &i32| (*n > 0).then_some(*n), |n| n)
}

fn doubled() -> Setter<i32, i32> {
    Setter::new(|n: i32, function: &mut dyn FnMut(i32) -> i32| {
        let once = function(n);
        function(once)
    })
}

fn every_member() -> Traversal<Team, Member> {
    members().compose(&Vec::each())
}

#[rstest]
fn iso_keeps_the_other_kind() {
    let iso: Iso<i32, i32> = negated().compose(&negated());
    assert_eq!(iso.get(&4), 4);

    let lens: Lens<Member, i32> = score().compose(&negated());
    assert_eq!(lens.get(&member("x", 2)), -2);

    let prism: Prism<i32, i32> = negated().compose(&positive());
    assert_eq!(prism.get_option(&-5), Some(5));
    assert_eq!(prism.get_option(&5), None);

    let getter: Getter<Member, i32> = score().compose(&negated().as_getter());
    assert_eq!(getter.get(&member("x", 2)), -2);
}

#[rstest]
fn lens_with_prism_is_an_optional() {
    let lead_member: Optional<Team, Member> = lead().compose(&some_prism());
    assert_eq!(lead_member.get_option(&team()).map(|m| m.score), Some(3));

    let positive_score: Optional<Member, i32> = score().compose(&positive());
    assert_eq!(positive_score.modify(member("x", -1), |n| n * 10).score, -1);
    assert_eq!(positive_score.modify(member("x", 2), |n| n * 10).score, 20);

    let some: Prism<Option<Member>, Member> = some_prism();
    let prism_then_lens: Optional<Option<Member>, i32> = some.compose(&score());
    assert_eq!(prism_then_lens.get_option(&Some(member("x", 7))), Some(7));
}

#[rstest]
fn optional_with_lens_stays_optional() {
    let lead_score: Optional<Team, i32> = lead().compose(&some_prism()).compose(&score());
    let promoted = lead_score.modify(team(), |n| n + 100);
    assert_eq!(promoted.lead.map(|m| m.score), Some(103));

    let leaderless = Team { lead: None, ..team() };
    assert_eq!(lead_score.modify(leaderless.clone(), |n| n + 100), leaderless);
}

#[rstest]
fn traversal_with_lens_is_a_traversal() {
    let scores: Traversal<Team, i32> = every_member().compose(&score());
    assert_eq!(scores.get_all(&team()), vec![1, 2]);
    assert_eq!(scores.modify(team(), |n| n * 10).members[1].score, 20);
}

#[rstest]
fn optional_with_traversal_is_a_traversal() {
    let first_member: Optional<Vec<Member>, Member> = index(0_usize);
    let scores: Traversal<Vec<Member>, i32> = first_member.compose(&score().as_traversal());
    assert_eq!(scores.get_all(&team().members), vec![1]);
}

#[rstest]
fn anything_with_a_setter_is_a_setter() {
    let setter: Setter<Member, i32> = score().compose(&doubled());
    assert_eq!(setter.modify(member("x", 1), |n| n + 1).score, 3);

    let setter: Setter<Team, i32> = every_member().compose(&score()).compose(&doubled());
    let bumped = setter.modify(team(), |n| n * 2);
    assert_eq!(bumped.members.iter().map(|m| m.score).collect::<Vec<_>>(), vec![4, 8]);

    let setter: Setter<i32, i32> = doubled().compose(&positive());
    assert_eq!(setter.modify(3, |n| n + 1), 5);
    assert_eq!(setter.modify(-3, |n| n + 1), -3);
}

#[rstest]
fn reads_with_a_getter() {
    let lead_name: Fold<Team, String> = lead().compose(&some_prism()).compose(&name());
    assert_eq!(lead_name.get_all(&team()), vec!["ann".to_string()]);

    let names: Fold<Team, String> = every_member().compose(&name());
    assert_eq!(names.get_all(&team()), vec!["bob".to_string(), "cid".to_string()]);

    let name_length: Getter<Member, usize> = name().compose(&Getter::new(String::len));
    assert_eq!(name_length.get(&member("dora", 0)), 4);
}

#[rstest]
fn reads_with_a_fold() {
    let digits: Fold<String, char> = Fold::new(|text: &String| text.chars().filter(char::is_ascii_digit).collect());
    let member_digits: Fold<Team, char> = every_member().compose(&name()).compose(&digits);
    let numbered = Team {
        lead: None,
        members: vec![member("r2d2", 0), member("c3po", 0)],
    };
    assert_eq!(member_digits.get_all(&numbered), vec!['2', '2', '3']);
}

#[rstest]
fn composition_is_associative_on_results() {
    let left: Traversal<Team, i32> = every_member().compose(&score()).compose(&negated());
    let right: Traversal<Team, i32> = every_member().compose(&score().compose(&negated()));
    assert_eq!(left.get_all(&team()), right.get_all(&team()));
    assert_eq!(left.set(team(), 5), right.set(team(), 5));
}
