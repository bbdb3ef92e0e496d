use crate::params::TRAIL_CAPACITY;
use std::collections::VecDeque;

/// Bounded history of past points, oldest dropped first
#[derive(Debug, Clone, PartialEq)]
pub struct Trail<T> {
    points: VecDeque<T>,
    capacity: usize,
}

impl<T> Trail<T> {
    pub fn new() -> Self {
        Self::with_capacity(TRAIL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: T) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.points.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.points.front()
    }

    pub fn last(&self) -> Option<&T> {
        self.points.back()
    }
}

impl<T> Default for Trail<T> {
    fn default() -> Self {
        Self::new()
    }
}
