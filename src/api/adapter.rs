//! Data set adapters and their change notification channel.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rust_decimal::Decimal;

use crate::core::DataPoint;
use crate::error::ChartResult;

/// Adapter shared between the host, which mutates it, and the chart, which reads it.
pub type SharedDataSetAdapter = Rc<RefCell<dyn DataSetAdapter>>;

/// Handle returned by `DataSetObservable::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    id: u64,
}

impl Subscription {
    #[must_use]
    pub fn id(self) -> u64 {
        self.id
    }
}

/// Observer list notified when an adapter's data changes.
#[derive(Default)]
pub struct DataSetObservable {
    next_id: u64,
    observers: Vec<(u64, Box<dyn FnMut()>)>,
}

impl DataSetObservable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: impl FnMut() + 'static) -> Subscription {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        Subscription { id }
    }

    /// Removes an observer. Returns `true` when it was subscribed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(id, _)| *id != subscription.id);
        self.observers.len() != before
    }

    pub fn notify_data_set_changed(&mut self) {
        for (_, observer) in &mut self.observers {
            observer();
        }
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl fmt::Debug for DataSetObservable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSetObservable")
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Data source consumed by the chart.
pub trait DataSetAdapter {
    fn len(&self) -> usize;

    fn value(&self, index: usize) -> f64;

    fn label(&self, index: usize) -> String;

    fn observable_mut(&mut self) -> &mut DataSetObservable;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of all values in the data set.
    fn sum(&self) -> f64 {
        (0..self.len()).map(|index| self.value(index)).sum()
    }

    fn values(&self) -> Vec<f64> {
        (0..self.len()).map(|index| self.value(index)).collect()
    }

    fn labels(&self) -> Vec<String> {
        (0..self.len()).map(|index| self.label(index)).collect()
    }
}

/// Integer percentage of `value` in `sum`, truncated: `"25%"`.
#[must_use]
pub fn percent_label(value: f64, sum: f64) -> String {
    format!("{}%", (100.0 * value / sum) as i64)
}

/// Adapter over a plain list of values, labelled with percentages.
#[derive(Debug, Default)]
pub struct FloatListAdapter {
    data: Vec<f64>,
    observable: DataSetObservable,
}

impl FloatListAdapter {
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            observable: DataSetObservable::new(),
        }
    }

    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Self {
        Self::new(points.iter().map(|point| point.value).collect())
    }

    /// Builds the list from decimal values, failing on the first one that has no `f64` form.
    pub fn from_decimals(values: &[Decimal]) -> ChartResult<Self> {
        let data = values
            .iter()
            .map(|value| DataPoint::from_decimal(*value).map(|point| point.value))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self::new(data))
    }

    /// Wraps the adapter for sharing with a chart.
    #[must_use]
    pub fn shared(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Replaces all values and notifies observers.
    pub fn set_data(&mut self, data: Vec<f64>) {
        self.data = data;
        self.observable.notify_data_set_changed();
    }

    /// Appends one value and notifies observers.
    pub fn push(&mut self, value: f64) {
        self.data.push(value);
        self.observable.notify_data_set_changed();
    }

    /// Replaces the value at `index` and notifies observers.
    ///
    /// Returns `false` without notifying when `index` is out of range.
    pub fn update(&mut self, index: usize, value: f64) -> bool {
        let Some(slot) = self.data.get_mut(index) else {
            return false;
        };
        *slot = value;
        self.observable.notify_data_set_changed();
        true
    }
}

impl DataSetAdapter for FloatListAdapter {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn value(&self, index: usize) -> f64 {
        self.data[index]
    }

    fn label(&self, index: usize) -> String {
        percent_label(self.value(index), self.sum())
    }

    fn observable_mut(&mut self) -> &mut DataSetObservable {
        &mut self.observable
    }

    fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    fn values(&self) -> Vec<f64> {
        self.data.clone()
    }

    fn labels(&self) -> Vec<String> {
        let sum = self.sum();
        self.data
            .iter()
            .map(|value| percent_label(*value, sum))
            .collect()
    }
}
