//! Static partitioning of the resource list across workers.
//!
//! The list is split into contiguous chunks once, up front; there is no
//! work-stealing or rebalancing afterwards. Every chunk holds `ceil(T/N)`
//! resources except the last, which takes the remainder. When there are more
//! workers than resources the trailing partitions are empty and their workers
//! complete immediately.

use crate::manifest::Resource;

/// A contiguous slice of the resource list assigned to exactly one worker.
///
/// Concatenating all partitions in index order reproduces the original list;
/// no resource is duplicated or dropped.
#[derive(Debug, Clone)]
pub struct Partition {
    /// Position of this partition (and its worker) in the pool.
    pub index: usize,
    /// The resources this partition's worker processes, in order.
    pub resources: Vec<Resource>,
}

impl Partition {
    /// Returns the number of resources in this partition.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns `true` if this partition carries no resources.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// Splits `resources` into exactly `workers` ordered partitions.
///
/// A worker count of zero is treated as one.
pub fn partition(resources: Vec<Resource>, workers: usize) -> Vec<Partition> {
    let workers = workers.max(1);
    let chunk_size = resources.len().div_ceil(workers).max(1);

    let mut partitions: Vec<Partition> = Vec::with_capacity(workers);
    let mut rest = resources;
    for index in 0..workers {
        let take = chunk_size.min(rest.len());
        let remainder = rest.split_off(take);
        partitions.push(Partition {
            index,
            resources: rest,
        });
        rest = remainder;
    }
    partitions
}

#[cfg(test)]
mod test {
    use super::*;

    fn resources(n: usize) -> Vec<Resource> {
        (0..n)
            .map(|i| Resource::new(format!("id{i}"), format!("http://example.com/{i}")))
            .collect()
    }

    fn sizes(partitions: &[Partition]) -> Vec<usize> {
        partitions.iter().map(Partition::len).collect()
    }

    #[test]
    fn test_three_resources_two_workers() {
        let partitions = partition(resources(3), 2);
        assert_eq!(sizes(&partitions), vec![2, 1]);
    }

    #[test]
    fn test_even_split() {
        let partitions = partition(resources(8), 4);
        assert_eq!(sizes(&partitions), vec![2, 2, 2, 2]);
    }

    #[test]
    fn test_more_workers_than_resources() {
        let partitions = partition(resources(2), 4);
        assert_eq!(sizes(&partitions), vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_empty_input() {
        let partitions = partition(resources(0), 3);
        assert_eq!(sizes(&partitions), vec![0, 0, 0]);
    }

    #[test]
    fn test_zero_workers_behaves_as_one() {
        let partitions = partition(resources(5), 0);
        assert_eq!(sizes(&partitions), vec![5]);
    }

    #[test]
    fn test_concatenation_reconstructs_input() {
        for (total, workers) in [(10, 3), (7, 7), (1, 5), (13, 4)] {
            let input = resources(total);
            let partitions = partition(input.clone(), workers);
            assert_eq!(partitions.len(), workers);
            let rejoined: Vec<Resource> = partitions
                .into_iter()
                .flat_map(|p| p.resources)
                .collect();
            assert_eq!(rejoined, input);
        }
    }
}
