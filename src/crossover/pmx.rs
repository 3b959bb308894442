//! Partially Mapped Crossover (PMX).
//!
//! PMX transplants a contiguous segment between two permutation parents and
//! repairs the remainder through a value-mapping chain, so each offspring is
//! itself a valid permutation: no value duplicated, none lost.
//!
//! # Algorithm (Goldberg & Lingle, 1985)
//!
//! Per offspring, one parent is the **base** and the other the **donor**;
//! the two offspring swap the roles.
//!
//! 1. Draw two distinct indices from the randomization provider and
//!    normalize them to an inclusive segment `[lower, upper]`
//! 2. Copy the donor's segment verbatim into the offspring
//! 3. Record the pair `(base[i], donor[i])` for each segment index `i`
//! 4. For each position outside the segment, take the base value and, while
//!    it collides with a donor-side segment value, replace it with the
//!    paired base-side value; place the first collision-free value
//!
//! A single substitution is not always enough: the replacement can itself
//! collide with a different donor-segment value, so step 4 iterates along
//! the mapping chain. Each hop lands on a value that, for a valid
//! permutation base, cannot revisit an earlier one, so the walk is bounded
//! by the segment length.
//!
//! # Complexity
//!
//! O(n·s) comparisons for chromosome length n and segment length s. Gene
//! values are only required to be `PartialEq`, which rules out hashing the
//! mapping; for realistic chromosome lengths the linear lookup is
//! microseconds territory.

use super::{Crossover, CrossoverError, MIN_PARENT_GENES};
use crate::chromosome::{Chromosome, Gene};
use crate::random::{BasicRandomization, Randomization};

/// Partially Mapped Crossover operator for permutation chromosomes.
///
/// Holds its randomization provider by value. [`new`](Self::new) installs
/// the thread-local default; [`with_randomization`](Self::with_randomization)
/// injects any other provider, which is how tests pin the segment.
///
/// Both parents must have equal length of at least 3 and pairwise-distinct
/// gene values. Violations are reported as [`CrossoverError`] before any
/// offspring is built; equal length itself is the caller's contract, since
/// both parents come from the same encoding.
///
/// # Examples
///
/// ```
/// use evo_crossover::chromosome::VecChromosome;
/// use evo_crossover::crossover::{Crossover, PartiallyMappedCrossover};
///
/// let parent1 = VecChromosome::from_values(vec![1, 2, 3, 4, 5, 6, 7, 8]);
/// let parent2 = VecChromosome::from_values(vec![3, 7, 5, 1, 6, 8, 2, 4]);
///
/// let pmx = PartiallyMappedCrossover::new();
/// let (child1, child2) = pmx.cross(&parent1, &parent2)?;
///
/// let mut values = child1.values();
/// values.sort_unstable();
/// assert_eq!(values, vec![1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(child2.values().len(), 8);
/// # Ok::<(), evo_crossover::crossover::CrossoverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PartiallyMappedCrossover<R: Randomization = BasicRandomization> {
    randomization: R,
}

impl PartiallyMappedCrossover {
    /// Creates the operator with the default thread-local randomization.
    pub fn new() -> Self {
        Self {
            randomization: BasicRandomization,
        }
    }
}

impl Default for PartiallyMappedCrossover {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Randomization> PartiallyMappedCrossover<R> {
    /// Creates the operator with an injected randomization provider.
    pub fn with_randomization(randomization: R) -> Self {
        Self { randomization }
    }

    fn validate_length<C: Chromosome>(&self, parent: &C) -> Result<(), CrossoverError> {
        if parent.len() < MIN_PARENT_GENES {
            return Err(CrossoverError::ChromosomeTooShort {
                operator: NAME.to_string(),
                chromosome: short_type_name::<C>(),
                length: parent.len(),
            });
        }
        Ok(())
    }

    fn validate_ordered<C: Chromosome>(&self, parent: &C) -> Result<(), CrossoverError> {
        if has_repeated_genes(parent) {
            return Err(CrossoverError::RepeatedGenes {
                operator: NAME.to_string(),
            });
        }
        Ok(())
    }
}

const NAME: &str = "PartiallyMappedCrossover";

/// Last path segment of a type name, generic arguments stripped.
fn short_type_name<C>() -> String {
    let full = std::any::type_name::<C>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}

impl<C: Chromosome, R: Randomization> Crossover<C> for PartiallyMappedCrossover<R> {
    fn name(&self) -> &str {
        NAME
    }

    fn cross(&self, parent1: &C, parent2: &C) -> Result<(C, C), CrossoverError> {
        self.validate_length(parent1)?;
        self.validate_length(parent2)?;
        self.validate_ordered(parent1)?;
        self.validate_ordered(parent2)?;

        let points = self.randomization.unique_ints(2, 0, parent1.len());
        let lower = points[0].min(points[1]);
        let upper = points[0].max(points[1]);

        let first = build_offspring(parent1, parent2, lower, upper);
        let second = build_offspring(parent2, parent1, lower, upper);
        Ok((first, second))
    }
}

/// Pairwise-distinctness check over gene values.
fn has_repeated_genes<C: Chromosome>(parent: &C) -> bool {
    for i in 1..parent.len() {
        let candidate = parent.gene(i);
        if (0..i).any(|j| parent.gene(j) == candidate) {
            return true;
        }
    }
    false
}

/// Builds one offspring: `base` supplies the outside region (after mapping
/// repair), `donor` supplies the transplanted segment `[lower, upper]`.
///
/// Assumes both parents passed validation; feeding a non-permutation base
/// here is undefined behavior for the repair loop.
fn build_offspring<C: Chromosome>(base: &C, donor: &C, lower: usize, upper: usize) -> C {
    let mut offspring = base.new_empty();

    // Transplant the donor segment, recording each position's
    // (base-side, donor-side) value pair.
    let mut mapping: Vec<(&Gene<C::Value>, &Gene<C::Value>)> =
        Vec::with_capacity(upper - lower + 1);
    for i in lower..=upper {
        offspring.replace_gene(i, donor.gene(i).clone());
        mapping.push((base.gene(i), donor.gene(i)));
    }

    // Outside the segment, a base value already used by the transplant is
    // resolved by hopping to the paired base-side value until the value is
    // free of the donor set.
    for i in (0..lower).chain(upper + 1..base.len()) {
        let mut value = base.gene(i);
        while let Some(&(base_side, _)) =
            mapping.iter().find(|&&(_, donor_side)| donor_side == value)
        {
            value = base_side;
        }
        offspring.replace_gene(i, value.clone());
    }

    offspring
}

// ============================================================================
// Tests
// ============================================================================
