use std::cell::Cell;
use std::rc::Rc;

use pie_chart_rs::api::{DataSetAdapter, DataSetObservable, FloatListAdapter, percent_label};
use pie_chart_rs::core::DataPoint;
use rust_decimal::Decimal;

#[test]
fn float_list_adapter_reports_values_sum_and_percent_labels() {
    let adapter = FloatListAdapter::new(vec![1.0, 1.0, 2.0]);
    assert_eq!(adapter.len(), 3);
    assert!(!adapter.is_empty());
    assert_eq!(adapter.sum(), 4.0);
    assert_eq!(adapter.value(2), 2.0);
    assert_eq!(adapter.labels(), vec!["25%", "25%", "50%"]);
}

#[test]
fn percent_label_truncates_towards_zero() {
    assert_eq!(percent_label(1.0, 3.0), "33%");
    assert_eq!(percent_label(2.0, 3.0), "66%");
    assert_eq!(percent_label(0.0, 0.0), "0%");
}

#[test]
fn adapter_builds_from_decimal_points() {
    let point = DataPoint::from_decimal(Decimal::new(125, 1)).expect("finite decimal");
    let adapter = FloatListAdapter::from_points(&[point, DataPoint::new(2.5)]);
    assert_eq!(adapter.data(), &[12.5, 2.5]);
}

#[test]
fn adapter_builds_from_decimal_values() {
    let values = [Decimal::new(125, 1), Decimal::new(-3, 0), Decimal::ZERO];
    let adapter = FloatListAdapter::from_decimals(&values).expect("finite decimals");
    assert_eq!(adapter.data(), &[12.5, -3.0, 0.0]);

    let empty = FloatListAdapter::from_decimals(&[]).expect("empty list");
    assert!(empty.is_empty());
}

#[test]
fn bulk_labels_match_per_slice_labels() {
    let values: Vec<f64> = (1..=500).map(f64::from).collect();
    let adapter = FloatListAdapter::new(values);
    let expected: Vec<String> = (0..adapter.len()).map(|index| adapter.label(index)).collect();
    assert_eq!(adapter.labels(), expected);
    assert_eq!(adapter.labels()[499], "0%");
}

#[test]
fn mutations_notify_observers() {
    let mut adapter = FloatListAdapter::default();
    let notified = Rc::new(Cell::new(0));
    let counter = Rc::clone(&notified);
    adapter
        .observable_mut()
        .subscribe(move || counter.set(counter.get() + 1));

    adapter.push(1.0);
    adapter.set_data(vec![3.0, 4.0]);
    assert!(adapter.update(1, 5.0));
    assert_eq!(notified.get(), 3);
    assert_eq!(adapter.data(), &[3.0, 5.0]);

    assert!(!adapter.update(9, 1.0));
    assert_eq!(notified.get(), 3);
}

#[test]
fn unsubscribed_observer_is_not_called() {
    let mut observable = DataSetObservable::new();
    let notified = Rc::new(Cell::new(false));
    let flag = Rc::clone(&notified);
    let subscription = observable.subscribe(move || flag.set(true));
    assert_eq!(observable.observer_count(), 1);

    assert!(observable.unsubscribe(subscription));
    assert!(!observable.unsubscribe(subscription));
    observable.notify_data_set_changed();
    assert!(!notified.get());
    assert_eq!(observable.observer_count(), 0);
}
