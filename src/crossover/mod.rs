//! Crossover operators for permutation-encoded chromosomes.
//!
//! A crossover operator consumes two parent chromosomes and produces two
//! offspring that combine genetic material from both parents. Operators
//! validate their preconditions up front and either return both offspring
//! or fail with a [`CrossoverError`] before any offspring state exists —
//! there are no partial results.
//!
//! # Core Trait
//!
//! - [`Crossover`]: the seam the evolutionary loop calls through
//!
//! # Operators
//!
//! - [`PartiallyMappedCrossover`] (PMX): Goldberg & Lingle (1985) —
//!   segment transplant with mapping-chain repair, preserves absolute
//!   positions; requires permutation (ordered) chromosomes
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman
//!   Problem"
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*, §4.5

mod pmx;

pub use pmx::PartiallyMappedCrossover;

use crate::chromosome::Chromosome;
use thiserror::Error;

/// Minimum number of genes a parent chromosome must carry.
///
/// Below this there is no room for a meaningful segment plus an outside
/// region, and crossover degenerates to cloning.
pub const MIN_PARENT_GENES: usize = 3;

/// Error raised when crossover preconditions are violated.
///
/// Both variants are fatal to the single crossover call and indicate a
/// misconfigured encoding rather than a transient condition; retrying with
/// the same inputs will fail identically. Each carries the reporting
/// operator's display name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CrossoverError {
    /// A parent has fewer genes than [`MIN_PARENT_GENES`].
    #[error(
        "{operator}: a chromosome should have, at least, {MIN_PARENT_GENES} genes. \
         {chromosome} has only {length} gene(s)."
    )]
    ChromosomeTooShort {
        /// Display name of the operator that rejected the parent.
        operator: String,
        /// Concrete chromosome kind's type name.
        chromosome: String,
        /// Actual gene count of the offending parent.
        length: usize,
    },

    /// A parent contains a repeated gene value, so it does not encode a
    /// permutation.
    #[error(
        "{operator}: the Partially Mapped Crossover (PMX) can be only used with ordered \
         chromosomes. The specified chromosome has repeated genes."
    )]
    RepeatedGenes {
        /// Display name of the operator that rejected the parent.
        operator: String,
    },
}

/// A two-parent crossover operator.
///
/// Implementations take two parents of equal length and return two
/// offspring in the same order: the first offspring is built with
/// `parent1` as base, the second with `parent2` as base. Parents are never
/// mutated; each offspring is a freshly created chromosome of the same
/// concrete kind and length, owned by the caller on return.
pub trait Crossover<C: Chromosome> {
    /// Display name used in error reporting.
    fn name(&self) -> &str;

    /// Crosses two parents, producing two offspring.
    ///
    /// # Errors
    ///
    /// Returns a [`CrossoverError`] when a parent violates the operator's
    /// preconditions. Validation is all-or-nothing: no offspring state is
    /// allocated before both parents pass.
    fn cross(&self, parent1: &C, parent2: &C) -> Result<(C, C), CrossoverError>;
}
