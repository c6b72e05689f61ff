//! One-pass accumulation of normalized items into per-taxonomy tallies.

use std::collections::BTreeMap;

use crate::domain::foundation::{Axis, Horizon, Role};

use super::normalizer::{OmittedItem, ScoredItem};
use super::stats::Tally;

/// Per-role tallies: overall, per horizon, and dilemma-only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleTally {
    pub overall: Tally,
    pub horizons: [Tally; Horizon::COUNT],
    pub situational: Tally,
}

/// Per-block tally plus horizon tag frequencies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockTally {
    pub tally: Tally,
    pub horizon_frequency: [u32; Horizon::COUNT],
}

impl BlockTally {
    /// Plurality horizon; ties go to the lowest horizon. `None` when the block
    /// never saw a horizon tag.
    pub fn dominant_horizon(&self) -> Option<Horizon> {
        let mut best: Option<(Horizon, u32)> = None;
        for horizon in Horizon::ALL {
            let freq = self.horizon_frequency[horizon.index()];
            if freq > 0 && best.map_or(true, |(_, top)| freq > top) {
                best = Some((horizon, freq));
            }
        }
        best.map(|(horizon, _)| horizon)
    }
}

/// Per-category tally plus the raw values for the cluster dispersion check.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTally {
    pub tally: Tally,
    pub values: Vec<f64>,
}

/// Omission count and per-category skip frequency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OmissionTally {
    pub count: u32,
    pub by_category: BTreeMap<String, u32>,
}

/// Accumulated state of one scoring pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregates {
    pub weighted_sum: f64,
    pub max_weighted_sum: f64,
    pub people: Tally,
    pub results: Tally,
    pub roles: BTreeMap<Role, RoleTally>,
    pub horizons: [Tally; Horizon::COUNT],
    pub blocks: BTreeMap<String, BlockTally>,
    pub categories: BTreeMap<String, CategoryTally>,
    pub omissions: OmissionTally,
}

impl Default for Aggregates {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregates {
    /// Empty aggregates with all four canonical roles present.
    pub fn new() -> Self {
        Self {
            weighted_sum: 0.0,
            max_weighted_sum: 0.0,
            people: Tally::default(),
            results: Tally::default(),
            roles: Role::ALL.iter().map(|r| (*r, RoleTally::default())).collect(),
            horizons: Default::default(),
            blocks: BTreeMap::new(),
            categories: BTreeMap::new(),
            omissions: OmissionTally::default(),
        }
    }

    /// Folds one answered item into every accumulator family.
    pub fn add(&mut self, item: &ScoredItem<'_>) {
        let value = item.value.as_f64();

        self.weighted_sum += value * item.weight;
        self.max_weighted_sum += 5.0 * item.weight;

        for axis in item.axis.axes() {
            self.axis_mut(*axis).add(value);
        }

        for role in &item.roles {
            let tally = self.roles.entry(*role).or_default();
            tally.overall.add(value);
            for_each_horizon(&item.horizons, |i| tally.horizons[i].add(value));
            if item.situational {
                tally.situational.add(value);
            }
        }

        for_each_horizon(&item.horizons, |i| self.horizons[i].add(value));

        if !item.block.is_empty() {
            let block = bucket(&mut self.blocks, item.block);
            block.tally.add(value);
            for_each_horizon(&item.horizons, |i| block.horizon_frequency[i] += 1);
        }

        for_each_tag(&item.categories, |name| {
            let category = bucket(&mut self.categories, name);
            category.tally.add(value);
            category.values.push(value);
        });
    }

    /// Records a skipped item for the omission analysis only.
    pub fn record_omission(&mut self, item: &OmittedItem<'_>) {
        self.omissions.count += 1;
        let by_category = &mut self.omissions.by_category;
        for_each_tag(&item.categories, |name| *bucket(by_category, name) += 1);
    }

    pub fn axis(&self, axis: Axis) -> &Tally {
        match axis {
            Axis::People => &self.people,
            Axis::Results => &self.results,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut Tally {
        match axis {
            Axis::People => &mut self.people,
            Axis::Results => &mut self.results,
        }
    }

    /// Averages of the four canonical roles in canonical order.
    pub fn role_averages(&self) -> [f64; 4] {
        Role::ALL.map(|role| self.roles.get(&role).map_or(0.0, |t| t.overall.mean()))
    }
}

fn for_each_horizon(horizons: &[Horizon], mut f: impl FnMut(usize)) {
    for horizon in horizons {
        f(horizon.index());
    }
}

/// Visits non-empty tag names.
fn for_each_tag(tags: &[&str], mut f: impl FnMut(&str)) {
    for tag in tags.iter().copied().filter(|t| !t.is_empty()) {
        f(tag);
    }
}

/// Returns the bucket for `key`, creating it on first use.
fn bucket<'m, V: Default>(map: &'m mut BTreeMap<String, V>, key: &str) -> &'m mut V {
    map.entry(key.to_string()).or_default()
}
