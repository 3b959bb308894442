//! Chromosome and gene abstractions.
//!
//! A [`Chromosome`] is an ordered, fixed-length sequence of [`Gene`]s with
//! indexed read/replace access and a factory for producing an unfilled
//! chromosome of the same concrete kind. Crossover operators only ever call
//! through this trait, so any representation — tour orderings, job
//! sequences, assignment vectors — can plug in without the operator knowing
//! its internals.
//!
//! [`VecChromosome`] is the batteries-included implementation backed by a
//! `Vec`; most callers and all tests in this crate use it.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single value slot within a chromosome.
///
/// A gene has no identity beyond its value: two genes are interchangeable
/// when their values compare equal.
///
/// # Examples
///
/// ```
/// use evo_crossover::chromosome::Gene;
///
/// let a = Gene::new(7);
/// let b = Gene::new(7);
/// assert_eq!(a, b);
/// assert_eq!(*a.value(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gene<V> {
    value: V,
}

impl<V> Gene<V> {
    /// Wraps a value in a gene.
    pub fn new(value: V) -> Self {
        Self { value }
    }

    /// Returns a reference to the wrapped value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Unwraps the gene into its value.
    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V> From<V> for Gene<V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

/// An ordered, fixed-length sequence of genes.
///
/// The trait captures exactly the capability crossover operators need:
/// a fixed length, indexed gene read, in-place gene replacement, and a
/// factory producing an unfilled chromosome of the same concrete kind and
/// length. Operators never mutate the parents they receive; replacement is
/// only ever applied to freshly created offspring.
///
/// Permutation validity (pairwise-distinct gene values) is **not** an
/// invariant of this trait. Operators that require it, such as
/// [`PartiallyMappedCrossover`](crate::crossover::PartiallyMappedCrossover),
/// check it as a precondition and reject non-permutation inputs.
pub trait Chromosome {
    /// The gene value type carried by this chromosome.
    type Value: Clone + PartialEq + fmt::Debug;

    /// Number of gene slots. Fixed for the lifetime of the chromosome.
    fn len(&self) -> usize;

    /// Returns `true` when the chromosome has zero gene slots.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the gene at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()` or if the slot at `index` has not been
    /// filled yet (only possible on a chromosome from [`new_empty`]).
    ///
    /// [`new_empty`]: Chromosome::new_empty
    fn gene(&self, index: usize) -> &Gene<Self::Value>;

    /// Overwrites the gene at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn replace_gene(&mut self, index: usize, gene: Gene<Self::Value>);

    /// Overwrites a run of genes starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the run extends past the end of the chromosome.
    fn replace_genes(&mut self, start: usize, genes: Vec<Gene<Self::Value>>) {
        for (offset, gene) in genes.into_iter().enumerate() {
            self.replace_gene(start + offset, gene);
        }
    }

    /// Creates an unfilled chromosome of the same concrete kind and length.
    ///
    /// Offspring construction starts from this factory and fills every slot
    /// before the offspring is returned to the caller.
    fn new_empty(&self) -> Self;
}

/// A `Vec`-backed chromosome.
///
/// Slots are optional internally so [`new_empty`](Chromosome::new_empty)
/// needs no `Default` bound on the value type; reading a slot that was never
/// filled is a usage error and panics.
///
/// # Examples
///
/// ```
/// use evo_crossover::chromosome::{Chromosome, VecChromosome};
///
/// let c = VecChromosome::from_values(vec![3, 1, 2]);
/// assert_eq!(c.len(), 3);
/// assert_eq!(*c.gene(1).value(), 1);
/// assert_eq!(c.values(), vec![3, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VecChromosome<V> {
    slots: Vec<Option<Gene<V>>>,
}

impl<V> VecChromosome<V> {
    /// Builds a chromosome from plain values, in order.
    pub fn from_values(values: Vec<V>) -> Self {
        Self {
            slots: values.into_iter().map(|v| Some(Gene::new(v))).collect(),
        }
    }

    /// Builds a chromosome from genes, in order.
    pub fn from_genes(genes: Vec<Gene<V>>) -> Self {
        Self {
            slots: genes.into_iter().map(Some).collect(),
        }
    }
}

impl<V: Clone> VecChromosome<V> {
    /// Returns the gene values in order.
    ///
    /// # Panics
    ///
    /// Panics if any slot is unfilled.
    pub fn values(&self) -> Vec<V> {
        (0..self.slots.len())
            .map(|i| self.slot(i).value().clone())
            .collect()
    }
}

impl<V> VecChromosome<V> {
    fn slot(&self, index: usize) -> &Gene<V> {
        self.slots[index]
            .as_ref()
            .unwrap_or_else(|| panic!("gene slot {index} has not been filled"))
    }
}

impl<V: Clone + PartialEq + fmt::Debug> Chromosome for VecChromosome<V> {
    type Value = V;

    fn len(&self) -> usize {
        self.slots.len()
    }

    fn gene(&self, index: usize) -> &Gene<V> {
        self.slot(index)
    }

    fn replace_gene(&mut self, index: usize, gene: Gene<V>) {
        self.slots[index] = Some(gene);
    }

    fn new_empty(&self) -> Self {
        Self {
            slots: (0..self.slots.len()).map(|_| None).collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
