//! Law suites run against composed optics over domain types.
//!
//! The number of cases per law can be raised with `OPTICUS_LAW_CASES`.

#![forbid(unsafe_code)]

use opticus::control::Either;
use opticus::laws::{
    LawConfig, LawViolation, check_laws, constant_function, equivalence_fn, i32_endomorphism,
    iso_laws, lens_laws, lens_modify_f_laws, monad_error_laws, optional_laws, prism_laws,
    setter_laws, string_endomorphism, traversal_laws, traversal_laws_with, traversal_modify_f_laws,
};
use opticus::optics::{
    Compose, Each, Iso, Lens, Optional, Prism, Traversal, filtered, index, left_prism, some_prism,
};
use proptest::prelude::*;
use rstest::{fixture, rstest};

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    nickname: Option<String>,
    address: Address,
    scores: Vec<i32>,
}

fn address_lens() -> Lens<Person, Address> {
    Lens::new(
        |person: &Person| person.address.clone(),
        |person: Person, address| Person { address, ..person },
    )
}

fn city_lens() -> Lens<Address, String> {
    Lens::new(
        |address: &Address| address.city.clone(),
        |address: Address, city| Address { city, ..address },
    )
}

fn nickname_lens() -> Lens<Person, Option<String>> {
    Lens::new(
        |person: &Person| person.nickname.clone(),
        |person: Person, nickname| Person { nickname, ..person },
    )
}

fn scores_lens() -> Lens<Person, Vec<i32>> {
    Lens::new(
        |person: &Person| person.scores.clone(),
        |person: Person, scores| Person { scores, ..person },
    )
}

fn words() -> impl Strategy<Value = String> + Clone {
    "[a-z]{0,6}"
}

fn addresses() -> impl Strategy<Value = Address> + Clone {
    (words(), words()).prop_map(|(street, city)| Address { street, city })
}

fn people() -> impl Strategy<Value = Person> + Clone {
    (
        words(),
        proptest::option::of(words()),
        addresses(),
        proptest::collection::vec(-50..50, 0..6),
    )
        .prop_map(|(name, nickname, address, scores)| Person {
            name,
            nickname,
            address,
            scores,
        })
}

#[fixture]
fn config() -> LawConfig {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    LawConfig::from_env().unwrap_or_default().with_cases(64)
}

#[rstest]
fn composed_lens_is_lawful(config: LawConfig) {
    let person_city = address_lens().compose(&city_lens());
    let laws = lens_laws(&person_city, people(), words(), string_endomorphism());
    check_laws(&laws, &config).assert_success();
}

#[rstest]
fn lens_modify_f_respects_pure(config: LawConfig) {
    let person_city = address_lens().compose(&city_lens());
    let laws = lens_modify_f_laws(&person_city, people(), string_endomorphism(), Some, Some);
    check_laws(&laws, &config).assert_success();
}

#[rstest]
fn lens_then_prism_is_a_lawful_optional(config: LawConfig) {
    let nickname: Optional<Person, String> = nickname_lens().compose(&some_prism());
    let laws = optional_laws(&nickname, people(), words(), string_endomorphism());
    check_laws(&laws, &config).assert_success();
}

#[rstest]
fn index_is_a_lawful_optional(config: LawConfig) {
    let second: Optional<Vec<i32>, i32> = index(1_usize);
    let laws = optional_laws(
        &second,
        proptest::collection::vec(any::<i32>(), 0..4),
        any::<i32>(),
        i32_endomorphism(),
    );
    check_laws(&laws, &config).assert_success();
}

#[rstest]
fn standard_prisms_are_lawful(config: LawConfig) {
    let some: Prism<Option<i32>, i32> = some_prism();
    let mut laws = prism_laws(&some, proptest::option::of(any::<i32>()), any::<i32>(), i32_endomorphism());

    let left: Prism<Either<i32, String>, i32> = left_prism();
    let eithers = prop_oneof![any::<i32>().prop_map(Either::Left), words().prop_map(Either::Right)];
    laws.extend(prism_laws(&left, eithers, any::<i32>(), i32_endomorphism()));

    check_laws(&laws, &config).assert_success();
}

#[rstest]
fn composed_traversal_is_lawful(config: LawConfig) {
    let scores: Traversal<Person, i32> = scores_lens().compose(&Vec::each());
    let mut laws = traversal_laws(&scores, people(), any::<i32>(), i32_endomorphism());
    laws.extend(traversal_modify_f_laws(
        &scores,
        people(),
        i32_endomorphism(),
        Ok::<i32, String>,
        Ok::<Person, String>,
    ));
    check_laws(&laws, &config).assert_success();
}

#[rstest]
fn setter_view_of_a_traversal_is_lawful(config: LawConfig) {
    let scores = scores_lens().compose(&Vec::each()).as_setter();
    let laws = setter_laws(&scores, people(), any::<i32>(), i32_endomorphism());
    check_laws(&laws, &config).assert_success();
}

#[rstest]
fn iso_is_lawful(config: LawConfig) {
    let swap: Iso<(i32, String), (String, i32)> = opticus::optics::iso_swap();
    let laws = iso_laws(
        &swap,
        (any::<i32>(), words()),
        (words(), any::<i32>()),
        constant_function((words(), any::<i32>())),
    );
    check_laws(&laws, &config).assert_success();
}

#[rstest]
fn result_and_option_are_lawful_monad_errors(config: LawConfig) {
    let results = prop_oneof![any::<i32>().prop_map(Ok), words().prop_map(Err)];
    let mut laws = monad_error_laws::<Result<i32, String>, _, _, _, _, _>(any::<i32>(), words(), results);
    laws.extend(monad_error_laws::<Option<i32>, _, _, _, _, _>(
        any::<i32>(),
        Just(()),
        proptest::option::of(any::<i32>()),
    ));
    check_laws(&laws, &config).assert_success();
}

#[rstest]
fn filtered_breaks_get_what_you_modify(config: LawConfig) {
    let positives = filtered(|n: &i32| *n > 0);
    let laws = traversal_laws(
        &positives,
        proptest::collection::vec(-5..5, 1..5),
        any::<i32>(),
        i32_endomorphism(),
    );

    let report = check_laws(&laws, &config);

    let failed: Vec<&str> = report.violations().into_iter().map(LawViolation::law).collect();
    assert!(failed.contains(&"traversal: get what you modify"), "{report}");
    assert!(report.passed().contains(&"traversal: modify identity"), "{report}");
}

#[rstest]
fn equivalence_relaxes_source_comparison(config: LawConfig) {
    // Rebuilding sorts the vector, so sources only agree up to order.
    let sorted_each: Traversal<Vec<i32>, i32> = Traversal::new(
        |source: &Vec<i32>| source.clone(),
        |source: Vec<i32>| {
            opticus::optics::Parts::new(source, |mut values: Vec<i32>| {
                values.sort_unstable();
                values
            })
        },
    );
    let same_elements = equivalence_fn(|left: &Vec<i32>, right: &Vec<i32>| {
        let (mut left, mut right) = (left.clone(), right.clone());
        left.sort_unstable();
        right.sort_unstable();
        left == right
    });

    let strict = check_laws(
        &traversal_laws(&sorted_each, proptest::collection::vec(-9..9, 0..5), any::<i32>(), i32_endomorphism()),
        &config,
    );
    assert!(!strict.is_success());

    let relaxed = check_laws(
        &traversal_laws_with(
            &sorted_each,
            proptest::collection::vec(-9..9, 0..5),
            any::<i32>(),
            i32_endomorphism(),
            same_elements,
            opticus::laws::Structural,
        ),
        &config,
    );
    assert!(relaxed.passed().contains(&"traversal: modify identity"), "{relaxed}");
}
