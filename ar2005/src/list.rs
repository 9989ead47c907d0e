// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use serde::{Deserialize, Serialize};

/// The ordered items of a repeated element.
///
/// Indexed modifications never panic. Out of range indexes return `None`
/// and leave the list untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementList<T>(Vec<T>);

impl<T> Default for ElementList<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> ElementList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Appends `item` and returns it.
    pub fn push(&mut self, item: T) -> &mut T {
        self.0.push(item);
        log::trace!("appended list item {}", self.0.len());
        let last = self.0.len() - 1;
        &mut self.0[last]
    }

    /// Inserts `item` at `index` and returns it or `None` if `index` is
    /// greater than the length.
    pub fn insert(&mut self, index: usize, item: T) -> Option<&mut T> {
        if index > self.0.len() {
            return None;
        }

        self.0.insert(index, item);
        log::trace!("inserted list item at {index} of {}", self.0.len());
        self.0.get_mut(index)
    }

    /// Replaces the item at `index` and returns the previous one.
    pub fn replace(&mut self, index: usize, item: T) -> Option<T> {
        self.0
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, item))
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.0.len() {
            Some(self.0.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<T> From<Vec<T>> for ElementList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T> From<ElementList<T>> for Vec<T> {
    fn from(list: ElementList<T>) -> Self {
        list.0
    }
}

impl<T> FromIterator<T> for ElementList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for ElementList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ElementList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
