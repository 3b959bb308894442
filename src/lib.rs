//! Crossover stage for permutation-encoded evolutionary computation.
//!
//! Given two parent candidate solutions encoded as permutations, the
//! operators in this crate produce two offspring that combine genetic
//! material from both parents while remaining valid permutations
//! themselves. The broader evolutionary loop — population management,
//! fitness, selection, mutation, termination — lives with the consumer;
//! this crate is only the recombination step.
//!
//! # Core Traits
//!
//! - [`Chromosome`](chromosome::Chromosome): fixed-length indexable gene
//!   sequence with an empty-same-kind factory
//! - [`Randomization`](random::Randomization): pluggable source of distinct
//!   random integers
//! - [`Crossover`](crossover::Crossover): the operator seam the
//!   evolutionary loop calls through
//!
//! # Key Types
//!
//! - [`PartiallyMappedCrossover`](crossover::PartiallyMappedCrossover):
//!   PMX — segment transplant with mapping-chain repair
//! - [`VecChromosome`](chromosome::VecChromosome): `Vec`-backed chromosome
//! - [`CrossoverError`](crossover::CrossoverError): typed precondition
//!   failures (too-short parents, repeated gene values)
//!
//! # Example
//!
//! ```
//! use evo_crossover::chromosome::{Chromosome, VecChromosome};
//! use evo_crossover::crossover::{Crossover, PartiallyMappedCrossover};
//!
//! let parent1 = VecChromosome::from_values(vec![1, 2, 3, 4, 5, 6, 7, 8]);
//! let parent2 = VecChromosome::from_values(vec![3, 7, 5, 1, 6, 8, 2, 4]);
//!
//! let pmx = PartiallyMappedCrossover::new();
//! let (child1, child2) = pmx.cross(&parent1, &parent2)?;
//! assert_eq!(child1.len(), 8);
//! assert_eq!(child2.len(), 8);
//! # Ok::<(), evo_crossover::crossover::CrossoverError>(())
//! ```
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling Salesman
//!   Problem"
//! - Eiben & Smith (2015), *Introduction to Evolutionary Computing*

pub mod chromosome;
pub mod crossover;
pub mod random;
