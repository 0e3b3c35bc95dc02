//! Optic operations run as `State` computations.

#![forbid(unsafe_code)]

use opticus::effect::{IndexedState, State};
use opticus::optics::{
    Each, Fold, Getter, Iso, Lens, Optional, PLens, Prism, Setter, Traversal, index, some_prism,
};
use rstest::rstest;

#[derive(Clone, PartialEq, Debug)]
struct Inventory {
    item: String,
    stock: u32,
}

fn stock() -> Lens<Inventory, u32> {
    Lens::new(
        |inventory: &Inventory| inventory.stock,
        |inventory: Inventory, stock| Inventory { stock, ..inventory },
    )
}

fn item() -> Lens<Inventory, String> {
    Lens::new(
        |inventory: &Inventory| inventory.item.clone(),
        |inventory: Inventory, item| Inventory { item, ..inventory },
    )
}

fn widgets(stock: u32) -> Inventory {
    Inventory {
        item: "widget".to_string(),
        stock,
    }
}

#[rstest]
fn lens_adapters_report_old_and_new_values() {
    assert_eq!(stock().to_state().run(widgets(3)), (3, widgets(3)));
    assert_eq!(stock().extract().eval(widgets(3)), 3);
    assert_eq!(stock().inspect(|n| n * 2).eval(widgets(3)), 6);
    assert_eq!(stock().modify_and_get(|n| n + 1).run(widgets(3)), (4, widgets(4)));
    assert_eq!(stock().get_and_modify(|n| n + 1).run(widgets(3)), (3, widgets(4)));
    assert_eq!(stock().set_and_get(9).run(widgets(3)), (9, widgets(9)));
    assert_eq!(stock().get_and_set(9).run(widgets(3)), (3, widgets(9)));
    assert_eq!(stock().modify_state(|n| n * 2).exec(widgets(3)), widgets(6));
    assert_eq!(stock().set_state(0).run(widgets(3)), ((), widgets(0)));
}

#[rstest]
fn adapters_chain_into_a_program() {
    let restock = stock()
        .modify_state(|n| n + 10)
        .then(item().set_state("gadget".to_string()))
        .then(stock().get_and_modify(|n| n - 1));

    let (before_sale, inventory) = restock.run(widgets(2));

    assert_eq!(before_sale, 12);
    assert_eq!(
        inventory,
        Inventory {
            item: "gadget".to_string(),
            stock: 11
        }
    );
}

#[rstest]
fn flat_map_feeds_a_read_into_a_write() {
    let copy_length = item()
        .inspect(|name| u32::try_from(name.len()).unwrap_or(u32::MAX))
        .flat_map(|length| stock().set_state(length));
    assert_eq!(copy_length.exec(widgets(0)).stock, 6);
}

#[rstest]
fn polymorphic_lens_changes_the_state_type() {
    let first: PLens<(u32, char), (String, char), u32, String> = PLens::new(
        |pair: &(u32, char)| pair.0,
        |pair: (u32, char), text| (text, pair.1),
    );
    let described: IndexedState<(u32, char), (String, char), String> =
        first.modify_and_get(|n| format!("n={n}"));
    assert_eq!(described.run((1, 'x')), ("n=1".to_string(), ("n=1".to_string(), 'x')));
}

#[rstest]
#[case(Some(2), (Some(2), Some(3)), Some(3))]
#[case(None, (None, None), None)]
fn prism_adapters_report_a_miss_as_none(
    #[case] source: Option<i32>,
    #[case] expected: (Option<i32>, Option<i32>),
    #[case] final_state: Option<i32>,
) {
    let prism: Prism<Option<i32>, i32> = some_prism();
    let (old, state) = prism.get_and_modify(|n| n + 1).run(source);
    let new = prism.modify_and_get(|n| n + 1).eval(source);
    assert_eq!((old, new), expected);
    assert_eq!(state, final_state);
}

#[rstest]
fn prism_read_and_write_adapters() {
    let prism: Prism<Option<i32>, i32> = some_prism();
    assert_eq!(prism.to_state().eval(Some(1)), Some(1));
    assert_eq!(prism.inspect(|n| n * 2).eval(None), None);
    assert_eq!(prism.set_and_get(5).run(None), (None, None));
    assert_eq!(prism.get_and_set(5).run(Some(1)), (Some(1), Some(5)));
    assert_eq!(prism.set_state(5).exec(Some(1)), Some(5));
    assert_eq!(prism.modify_state(|n| n * 2).exec(None), None);
}

#[rstest]
fn optional_adapters_leave_a_miss_untouched() {
    let second: Optional<Vec<u8>, u8> = index(1_usize);

    assert_eq!(second.to_state().eval(vec![1]), None);
    assert_eq!(second.modify_and_get(|n| n + 1).run(vec![1]), (None, vec![1]));
    assert_eq!(second.get_and_set(0).run(vec![1, 2]), (Some(2), vec![1, 0]));
    assert_eq!(second.set_and_get(7).run(vec![1, 2]), (Some(7), vec![1, 7]));
    assert_eq!(second.inspect(|n| n + 100).eval(vec![1, 2]), Some(102));
}

#[rstest]
fn traversal_adapters_report_every_focus() {
    let each: Traversal<Vec<i32>, i32> = Vec::each();

    assert_eq!(each.to_state().eval(vec![1, 2]), vec![1, 2]);
    assert_eq!(each.inspect(|n| n * 10).eval(vec![1, 2]), vec![10, 20]);
    assert_eq!(each.modify_and_get(|n| n + 1).run(vec![1, 2]), (vec![2, 3], vec![2, 3]));
    assert_eq!(each.get_and_modify(|n| n + 1).run(vec![1, 2]), (vec![1, 2], vec![2, 3]));
    assert_eq!(each.get_and_set(0).run(vec![1, 2]), (vec![1, 2], vec![0, 0]));
    assert_eq!(each.set_and_get(0).run(Vec::new()), (Vec::new(), Vec::new()));
}

#[rstest]
fn iso_setter_getter_and_fold_adapters() {
    let celsius: Iso<i32, i32> = Iso::new(|kelvin: &i32| kelvin - 273, |celsius: i32| celsius + 273);
    assert_eq!(celsius.get_and_set(0).run(300), (27, 273));
    assert_eq!(celsius.modify_and_get(|c| c + 1).run(273), (1, 274));

    let all: Setter<Vec<i32>, i32> = Setter::new(|source: Vec<i32>, function: &mut dyn FnMut(i32) -> i32| {
        source.into_iter().map(function).collect()
    });
    assert_eq!(all.set_state(1).exec(vec![0, 0]), vec![1, 1]);
    assert_eq!(all.modify_state(|n| n - 1).exec(vec![1, 2]), vec![0, 1]);

    let length: Getter<String, usize> = Getter::new(String::len);
    assert_eq!(length.to_state().run("abc".to_string()), (3, "abc".to_string()));

    let bytes: Fold<String, u8> = Fold::new(|text: &String| text.bytes().collect());
    assert_eq!(bytes.inspect(|b| b - b'a').eval("abc".to_string()), vec![0, 1, 2]);
}

#[rstest]
fn state_sequence_collects_adapter_results() {
    let reads: Vec<State<Inventory, u32>> = vec![stock().to_state(), stock().modify_and_get(|n| n * 2)];
    assert_eq!(State::sequence(reads).run(widgets(5)), (vec![5, 10], widgets(10)));
}
