//! Toolkit-independent model of a combo box's item list.

/// Ordered `(item, enabled)` pairs.
///
/// Disabled items stay in the list (and keep their index) but cannot be
/// chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboItems<T> {
    items: Vec<(T, bool)>,
}

impl<T: Copy + PartialEq> ComboItems<T> {
    /// All items enabled, in the given order.
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().map(|k| (k, true)).collect(),
        }
    }

    /// Enablement decided per item by `enabled`.
    ///
    /// ```
    /// # use xyplot_axes::data::combo::ComboItems;
    /// let items = ComboItems::from_fn([1, 2, 3], |v| v % 2 == 1);
    /// assert_eq!(items.enabled_items(), vec![1, 3]);
    /// ```
    pub fn from_fn(items: impl IntoIterator<Item = T>, enabled: impl Fn(T) -> bool) -> Self {
        Self {
            items: items.into_iter().map(|k| (k, enabled(k))).collect(),
        }
    }

    /// Returns `false` if `item` is not in the list.
    pub fn set_enabled(&mut self, item: T, enabled: bool) -> bool {
        match self.items.iter_mut().find(|(k, _)| *k == item) {
            Some(entry) => {
                entry.1 = enabled;
                true
            }
            None => false,
        }
    }

    pub fn is_enabled(&self, item: T) -> bool {
        self.items.iter().any(|(k, e)| *k == item && *e)
    }

    pub fn index_of(&self, item: T) -> Option<usize> {
        self.items.iter().position(|(k, _)| *k == item)
    }

    pub fn get(&self, index: usize) -> Option<(T, bool)> {
        self.items.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, bool)> + '_ {
        self.items.iter().copied()
    }

    /// Selection resulting from the user clicking `clicked` while `current`
    /// is selected. `None` unless `clicked` is a different, enabled item.
    pub fn pick(&self, current: T, clicked: T) -> Option<T> {
        (clicked != current && self.is_enabled(clicked)).then_some(clicked)
    }

    pub fn enabled_items(&self) -> Vec<T> {
        self.items.iter().filter(|(_, e)| *e).map(|(k, _)| *k).collect()
    }
}
